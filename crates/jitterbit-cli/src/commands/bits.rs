use std::io::Write;

use jitterbit_core::BitSource;
use serde::Serialize;

use super::CommandResult;

/// Bits per output line.
pub const LINE_WIDTH: usize = 80;

#[derive(Debug, Serialize)]
struct BitsReport {
    n: usize,
    ones: usize,
    zeros: usize,
    bits: String,
}

/// Generate `n` bits and render them as text, a newline after every
/// [`LINE_WIDTH`] bits. Returns the text and the number of ones.
pub fn render_bits<S: BitSource + ?Sized>(
    source: &mut S,
    n: usize,
) -> Result<(String, usize), jitterbit_core::EntropyError> {
    let mut text = String::with_capacity(n + n / LINE_WIDTH + 1);
    let mut ones = 0usize;
    for i in 0..n {
        let bit = source.next_bit()?;
        ones += usize::from(bit);
        text.push(if bit == 1 { '1' } else { '0' });
        if (i + 1) % LINE_WIDTH == 0 {
            text.push('\n');
        }
    }
    if n % LINE_WIDTH != 0 {
        text.push('\n');
    }
    Ok((text, ones))
}

pub fn summary_line(ones: usize, zeros: usize) -> String {
    format!("number of ones: {ones}\tnumber of zeros: {zeros}")
}

pub fn run<S: BitSource + ?Sized>(source: &mut S, n: usize, json: bool) -> CommandResult {
    let (text, ones) = render_bits(source, n)?;
    let zeros = n - ones;

    if json {
        let bits: String = text.chars().filter(|c| *c != '\n').collect();
        return super::print_json(&BitsReport {
            n,
            ones,
            zeros,
            bits,
        });
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(text.as_bytes())?;
    writeln!(out, "{}", summary_line(ones, zeros))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jitterbit_tests::testing::{ConstantSource, CountingSource};

    #[test]
    fn wraps_at_eighty() {
        let (text, ones) = render_bits(&mut ConstantSource::new(1), 170).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 80);
        assert_eq!(lines[1].len(), 80);
        assert_eq!(lines[2].len(), 10);
        assert_eq!(ones, 170);
    }

    #[test]
    fn exact_multiple_has_no_blank_line() {
        let (text, _) = render_bits(&mut ConstantSource::new(0), 80).unwrap();
        assert_eq!(text, format!("{}\n", "0".repeat(80)));
    }

    #[test]
    fn counts_ones() {
        let (text, ones) = render_bits(&mut CountingSource::new(1), 5).unwrap();
        assert_eq!(text, "01010\n");
        assert_eq!(ones, 2);
        assert_eq!(
            summary_line(ones, 3),
            "number of ones: 2\tnumber of zeros: 3"
        );
    }
}
