//! Write generated bit sums as comma-separated decimal text.
//!
//! Each value is the sum of `bits_per_value` freshly generated bits, so it
//! lies in `0..=bits_per_value`. Values are separated by `,` and the output
//! ends with a single newline:
//!
//! ```text
//! 10,9,12,10,8
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::EntropyError;
use crate::source::BitSource;

/// Bits summed into each written value.
pub const DEFAULT_BITS_PER_VALUE: u32 = 20;

/// Buffer capacity used when writing to a file.
pub const WRITE_BUFFER_CAPACITY: usize = 4096;

/// Generate `count` bit sums and write them to `out`. Returns `count`.
pub fn write_bit_sums<S, W>(
    source: &mut S,
    count: usize,
    bits_per_value: u32,
    out: &mut W,
) -> Result<usize, EntropyError>
where
    S: BitSource + ?Sized,
    W: Write + ?Sized,
{
    for i in 0..count {
        let sum = source.sum_bits(bits_per_value)?;
        if i > 0 {
            out.write_all(b",")?;
        }
        write!(out, "{sum}")?;
    }
    out.write_all(b"\n")?;
    Ok(count)
}

/// Create (or truncate) `path` and write `count` bit sums to it.
///
/// Fails before generating anything if the file cannot be opened. On a later
/// failure whatever was already flushed stays on disk.
pub fn write_bit_sums_to_path<S>(
    source: &mut S,
    count: usize,
    bits_per_value: u32,
    path: &Path,
) -> Result<usize, EntropyError>
where
    S: BitSource + ?Sized,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_CAPACITY, file);
    let written = write_bit_sums(source, count, bits_per_value, &mut writer)?;
    writer.flush()?;
    log::debug!(
        "wrote {written} values of {bits_per_value} bits to {}",
        path.display()
    );
    Ok(written)
}
