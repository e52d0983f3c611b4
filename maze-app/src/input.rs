//! Reads the maze size from the user.

use crate::error::AppError;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

/// Size used whenever the requested one is unusable.
pub const DEFAULT_SIZE: usize = 10;

/// Accepted side lengths.
pub const SIZE_RANGE: RangeInclusive<usize> = 1..=100;

/// Parses a side length typed by the user.
pub fn parse_size(input: &str) -> Result<usize, AppError> {
    let token = input.split_whitespace().next().unwrap_or_default();
    let size: usize = token
        .parse()
        .map_err(|_| AppError::InvalidSize(format!("'{}' is not a number", token)))?;
    check_range(size)
}

fn check_range(size: usize) -> Result<usize, AppError> {
    if SIZE_RANGE.contains(&size) {
        Ok(size)
    } else {
        Err(AppError::InvalidSize(format!(
            "{} is outside {}..={}",
            size,
            SIZE_RANGE.start(),
            SIZE_RANGE.end()
        )))
    }
}

/// Returns `size` if it is in range, otherwise [`DEFAULT_SIZE`].
pub fn validate_size(size: usize) -> usize {
    check_range(size).unwrap_or_else(|e| {
        log::warn!("{}. Going with {}.", e, DEFAULT_SIZE);
        DEFAULT_SIZE
    })
}

/// Prompts for a size on `writer` and reads one line from `reader`.
///
/// Anything that is not a number in range, including end of input and bytes
/// that are not UTF-8, falls back to [`DEFAULT_SIZE`].
pub fn prompt_for_size<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<usize, AppError> {
    write!(
        writer,
        "Enter a maze size ({} would be a good choice): ",
        DEFAULT_SIZE
    )?;
    writer.flush()?;

    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    match parse_size(&String::from_utf8_lossy(&line)) {
        Ok(size) => Ok(size),
        Err(e) => {
            log::debug!("Rejected size input: {}", e);
            writeln!(writer, "Bad size. Going with {}.\n", DEFAULT_SIZE)?;
            Ok(DEFAULT_SIZE)
        }
    }
}
