use thiserror::Error;

/// Error type for plus-codes-rs operations.
#[derive(Error, Debug, PartialEq)]
pub enum PlusCodeError {
    /// The requested code length is below 2, or odd and below 10.
    #[error("Invalid code length: {0}")]
    InvalidCodeLength(usize),
    /// The code is not a valid full code.
    #[error("Not a valid full code: {0}")]
    InvalidFullCode(String),
    /// The code is neither a valid short code nor a valid full code.
    #[error("Not a valid short code: {0}")]
    InvalidShortCode(String),
    /// Padded codes cannot be shortened.
    #[error("Cannot shorten padded code: {0}")]
    PaddedCodeNotShortenable(String),
    /// The code has fewer significant digits than can be trimmed.
    #[error("Code length must be at least 6 to shorten, got {0}")]
    CodeTooShortToShorten(usize),
    /// A latitude or longitude is NaN or infinite.
    #[error("Invalid coordinate: ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
    /// File I/O or serialization error.
    #[error("IO error: {0}")]
    IoError(String),
    /// CSV parsing or reading error.
    #[error("CSV error: {0}")]
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    #[error("Geometry parse error: {0}")]
    GeometryParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlusCodeError::InvalidCodeLength(3).to_string(),
            "Invalid code length: 3"
        );
        assert_eq!(
            PlusCodeError::InvalidFullCode("XX+".to_string()).to_string(),
            "Not a valid full code: XX+"
        );
        assert_eq!(
            PlusCodeError::InvalidCoordinate {
                latitude: f64::NAN,
                longitude: 1.0
            }
            .to_string(),
            "Invalid coordinate: (NaN, 1)"
        );
    }
}
