//! Crate-level error types.

use std::fmt;

/// Errors produced by the terra crate.
///
/// Only the loading layers (options presets, point data) can fail; the
/// hover/camera transition core is infallible.
#[derive(Debug)]
pub enum TerraError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Point-of-interest data could not be parsed.
    PointData(String),
}

impl fmt::Display for TerraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::PointData(msg) => write!(f, "point data error: {msg}"),
        }
    }
}

impl std::error::Error for TerraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TerraError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TerraError {
    fn from(e: serde_json::Error) -> Self {
        Self::PointData(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err = TerraError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.toml",
        ));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn parse_errors_have_no_source() {
        let err = TerraError::OptionsParse("bad key".into());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "options parse error: bad key");
    }
}
