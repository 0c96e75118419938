use std::num::ParseIntError;
use thiserror::Error;

/// Size used when no argument is given.
pub const DEFAULT_SIZE: i32 = 21;

/// Largest accepted size. A depth pass at this size checks just under
/// `2^64` nodes; one more and the per-depth total overflows `u64`.
pub const MAX_SIZE: i32 = 59;

#[derive(Clone, PartialEq, Debug, Error)]
pub enum SizeError {
    #[error("invalid size `{input}`: {source}")]
    NotAnInteger {
        input: String,
        source: ParseIntError,
    },
    #[error("invalid size `{0}`: must be at most {}", MAX_SIZE)]
    TooLarge(i32),
}

/// Parse the benchmark size argument.
///
/// Any integer literal is a size. Values below the minimum depth are raised
/// by the driver, so only sizes whose node totals cannot be counted in a
/// `u64` are refused.
pub fn parse_size(input: &str) -> Result<i32, SizeError> {
    let size = input
        .parse::<i32>()
        .map_err(|source| SizeError::NotAnInteger {
            input: input.to_string(),
            source,
        })?;

    if size > MAX_SIZE {
        return Err(SizeError::TooLarge(size));
    }

    Ok(size)
}
