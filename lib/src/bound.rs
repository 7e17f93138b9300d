use std::{fmt, io, num::IntErrorKind};

/// Exclusive bound of the reference run.
pub const DEFAULT_BOUND: u32 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundError {
    Empty,
    Negative(String),
    NotANumber(String),
    OutOfRange(String),
}

impl BoundError {
    /// Every bound error is a malformed input.
    pub fn kind(&self) -> io::ErrorKind {
        io::ErrorKind::InvalidInput
    }
}

impl fmt::Display for BoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundError::Empty => write!(f, "bound is empty"),
            BoundError::Negative(input) => write!(f, "bound must not be negative, got {input:?}"),
            BoundError::NotANumber(input) => {
                write!(f, "bound must be an unsigned integer, got {input:?}")
            }
            BoundError::OutOfRange(input) => {
                write!(f, "bound {input:?} exceeds the maximum of {}", u32::MAX)
            }
        }
    }
}

impl std::error::Error for BoundError {}

impl From<BoundError> for io::Error {
    fn from(error: BoundError) -> Self {
        io::Error::new(error.kind(), error)
    }
}

/// Parses an exclusive bound such as `1000000` or `1_000_000`.
pub fn parse_bound(input: &str) -> Result<u32, BoundError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BoundError::Empty);
    }
    if trimmed.starts_with('-') {
        return Err(BoundError::Negative(trimmed.to_string()));
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if !unsigned.chars().all(|c| c.is_ascii_digit() || c == '_') {
        return Err(BoundError::NotANumber(trimmed.to_string()));
    }
    // Underscores only between digits.
    if unsigned.starts_with('_') || unsigned.ends_with('_') || unsigned.contains("__") {
        return Err(BoundError::NotANumber(trimmed.to_string()));
    }
    let digits: String = unsigned.chars().filter(|&c| c != '_').collect();
    digits.parse::<u32>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => BoundError::OutOfRange(trimmed.to_string()),
        _ => BoundError::NotANumber(trimmed.to_string()),
    })
}
