// Error types for the rasterizer
//
// Only global parameters can fail (spp, resolution, window, filter/scene names).
// Containment tests are total functions, so nothing inside the pixel loop
// ever produces an error.

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned before any pixel work begins
///
/// **Rust Concept: thiserror**
/// `#[derive(Error)]` writes the `std::error::Error` and `Display` impls for us.
/// The `#[error("...")]` attribute is the Display message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A numeric render parameter is out of range (spp, resolution, window)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A name did not match any known filter or scene
    #[error("configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidArgument("spp must be >= 1, got 0".to_string());
        assert_eq!(err.to_string(), "invalid argument: spp must be >= 1, got 0");

        let err = Error::Configuration("unknown filter: lanczos".to_string());
        assert!(err.to_string().contains("lanczos"));
    }
}
