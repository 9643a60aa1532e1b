/// All error types that can occur when driving an Illumi light strip.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A setting was outside its documented inclusive range.
    #[error("{field} value {value} is out of range ({min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: i64,
        max: i64,
    },

    /// The mode identifier is neither a known variant nor its integer code.
    #[error("invalid mode: {0}")]
    InvalidMode(String),

    /// The transport refused a frame.
    #[error("transport error: {0:?}")]
    Transport(std::io::Error),

    /// Failed to serialize diagnostics to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),
}

impl Error {
    /// Create a new out of range error
    pub fn out_of_range(field: &'static str, value: impl ToString, min: i64, max: i64) -> Self {
        Error::OutOfRange {
            field,
            value: value.to_string(),
            min,
            max,
        }
    }

    /// Create a new invalid mode error
    pub fn invalid_mode(value: impl ToString) -> Self {
        Error::InvalidMode(value.to_string())
    }

    /// Returns `true` for errors raised while validating a setting.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::OutOfRange { .. } | Error::InvalidMode(_))
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_validation() {
        assert!(Error::out_of_range("scene", 10, 0, 9).is_validation());
        assert!(Error::invalid_mode("disco").is_validation());

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(!Error::Transport(io).is_validation());
    }

    #[test]
    fn test_out_of_range_message() {
        assert_eq!(
            Error::out_of_range("scene", 10, 0, 9).to_string(),
            "scene value 10 is out of range (0..=9)"
        );
    }
}
