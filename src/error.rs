//! Error types for buildscout operations.
//!
//! This module defines [`ScoutError`], the error type used by the CLI and
//! emission layers, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probes never return errors: every probe is a bare `bool`, and unexpected
//!   failures from external tools degrade to `false`
//! - Use `ScoutError` for the layers around the probes: argument parsing,
//!   configuration emission, IO
//! - Use `anyhow::Error` (via `ScoutError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for buildscout operations.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// A `--lib` argument that is not in `LIB:HEADER` form.
    #[error("Invalid library spec '{spec}': expected LIB:HEADER")]
    InvalidLibSpec { spec: String },

    /// Failed to serialize the build configuration.
    #[error("Failed to emit configuration: {message}")]
    EmitError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for buildscout operations.
pub type Result<T> = std::result::Result<T, ScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lib_spec_displays_spec() {
        let err = ScoutError::InvalidLibSpec {
            spec: "lzo2".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("lzo2"));
        assert!(msg.contains("LIB:HEADER"));
    }

    #[test]
    fn emit_error_displays_message() {
        let err = ScoutError::EmitError {
            message: "bad value".into(),
        };
        assert!(err.to_string().contains("bad value"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ScoutError = io_err.into();
        assert!(matches!(err, ScoutError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ScoutError::InvalidLibSpec { spec: "x".into() })
        }
        assert!(returns_error().is_err());
    }
}
