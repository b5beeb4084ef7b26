use std::path::Path;

use jitterbit_core::{BitSource, write_bit_sums_to_path};

use super::CommandResult;

/// Write `n` sums of `bits_per_value` bits to `path`.
pub fn run<S: BitSource + ?Sized>(
    source: &mut S,
    n: usize,
    bits_per_value: u32,
    path: &Path,
) -> CommandResult {
    let written = write_bit_sums_to_path(source, n, bits_per_value, path)?;
    println!("Wrote {written} values to {}", path.display());
    Ok(())
}
