pub mod bits;
pub mod chi;
pub mod freq;
pub mod perm;
pub mod write;

use std::path::PathBuf;
use std::time::Duration;

use jitterbit_core::{BitGenerator, ClockKind, GeneratorConfig};
use serde::Serialize;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// What the second positional argument asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Bits,
    Chi,
    Freq,
    Perm,
    File(PathBuf),
}

impl Mode {
    /// `chi`, `freq` and `perm` are keywords; anything else is a filename.
    pub fn parse(arg: Option<&str>) -> Self {
        match arg {
            None => Self::Bits,
            Some("chi") => Self::Chi,
            Some("freq") => Self::Freq,
            Some("perm") => Self::Perm,
            Some(path) => Self::File(PathBuf::from(path)),
        }
    }
}

/// Parse a strictly positive count.
pub fn parse_count(s: &str) -> Result<usize, String> {
    let n: i64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if n <= 0 {
        return Err(format!("count must be a positive integer, got {n}"));
    }
    usize::try_from(n).map_err(|_| format!("count {n} is too large"))
}

/// Parse a clock name into the enum.
pub fn parse_clock(s: &str) -> ClockKind {
    match s {
        "monotonic" | "mono" => ClockKind::Monotonic,
        "wall" | "realtime" => ClockKind::Wall,
        _ => {
            eprintln!("Unknown clock '{s}', using monotonic");
            ClockKind::Monotonic
        }
    }
}

/// Build the bit generator from CLI flags.
pub fn make_generator(clock: &str, wait_us: u64) -> BitGenerator {
    BitGenerator::new(&GeneratorConfig {
        clock: parse_clock(clock),
        wait: Duration::from_micros(wait_us),
    })
}

/// Pretty-print a result as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // parse_count tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_parse_count_positive() {
        assert_eq!(parse_count("1"), Ok(1));
        assert_eq!(parse_count("1000"), Ok(1000));
        assert_eq!(parse_count(" 42 "), Ok(42));
    }

    #[test]
    fn test_parse_count_rejects_zero_and_negative() {
        assert!(parse_count("0").is_err());
        assert!(parse_count("-5").is_err());
    }

    #[test]
    fn test_parse_count_rejects_non_numeric() {
        assert!(parse_count("abc").is_err());
        assert!(parse_count("").is_err());
        assert!(parse_count("1.5").is_err());
    }

    // -----------------------------------------------------------------------
    // Mode tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_mode_keywords() {
        assert_eq!(Mode::parse(None), Mode::Bits);
        assert_eq!(Mode::parse(Some("chi")), Mode::Chi);
        assert_eq!(Mode::parse(Some("freq")), Mode::Freq);
        assert_eq!(Mode::parse(Some("perm")), Mode::Perm);
    }

    #[test]
    fn test_mode_filename() {
        assert_eq!(
            Mode::parse(Some("out.txt")),
            Mode::File(PathBuf::from("out.txt"))
        );
        // Keywords are case-sensitive
        assert_eq!(Mode::parse(Some("CHI")), Mode::File(PathBuf::from("CHI")));
    }

    // -----------------------------------------------------------------------
    // parse_clock tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_parse_clock() {
        assert_eq!(parse_clock("monotonic"), ClockKind::Monotonic);
        assert_eq!(parse_clock("mono"), ClockKind::Monotonic);
        assert_eq!(parse_clock("wall"), ClockKind::Wall);
        assert_eq!(parse_clock("unknown"), ClockKind::Monotonic);
    }

    #[test]
    fn test_make_generator() {
        let generator = make_generator("wall", 0);
        assert_eq!(generator.sampler().wait(), Duration::ZERO);
    }
}
