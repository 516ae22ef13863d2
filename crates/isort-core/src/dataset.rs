//! Sort data: generation and the newline-delimited data file.
//!
//! A data file holds one unsigned decimal integer per line. Blank lines read
//! as `0`, and the final newline does not start another value.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

/// Generate `count` values in `0..max`.
///
/// The same `seed` always yields the same values; without one the generator
/// is seeded from the OS.
pub fn generate(count: usize, max: u64, seed: Option<u64>) -> Result<Vec<u64>> {
    if max == 0 {
        return Err(Error::InvalidConfig(
            "maximum random value must be greater than 0".to_string(),
        ));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    Ok((0..count).map(|_| rng.gen_range(0..max)).collect())
}

fn parse_line(number: usize, line: &str) -> Result<u64> {
    let value = line.trim();
    if value.is_empty() {
        return Ok(0);
    }

    value.parse().map_err(|_| Error::InvalidValue {
        line: number,
        value: value.to_string(),
    })
}

/// Parse data file contents.
pub fn parse(text: &str) -> Result<Vec<u64>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| parse_line(i + 1, line))
        .collect()
}

/// Read values from `reader`.
pub fn read(reader: impl BufRead) -> Result<Vec<u64>> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| parse_line(i + 1, &line?))
        .collect()
}

/// Read values from the data file at `path`.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file(path, e))?;
    read(BufReader::new(file))
}

/// Write `values` one per line, each followed by a newline.
pub fn write(mut writer: impl Write, values: &[u64]) -> Result<()> {
    for value in values {
        writeln!(writer, "{}", value)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `values` to the data file at `path`, replacing it.
pub fn write_file(path: impl AsRef<Path>, values: &[u64]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::file(path, e))?;
    write(BufWriter::new(file), values).map_err(|e| match e {
        Error::Io(source) => Error::file(path, source),
        other => other,
    })
}
