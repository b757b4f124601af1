//! Error types of `stratwave`
use thiserror::Error;

/// Crate wide result type
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while configuring an experiment
/// or reading its output.
#[derive(Error, Debug)]
pub enum Error {
    /// Physical parameter out of its valid range, e.g. omega > N0.
    #[error("Domain error: {what} = {value}")]
    Domain {
        /// Name of the offending quantity
        what: String,
        /// Value that was supplied
        value: f64,
    },

    /// Malformed or unknown switchboard entry.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Failed to read or write a hdf5 file.
    #[error("Hdf5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    /// Array shape does not match the expected layout.
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    Shape {
        /// Description of the expected shape
        expected: String,
        /// Shape that was found
        actual: String,
    },

    /// Failed to encode a frame.
    #[error("Png encoding error: {0}")]
    Png(#[from] png::EncodingError),

    /// Plain file system error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a domain error.
    pub fn domain(what: impl Into<String>, value: f64) -> Self {
        Self::Domain {
            what: what.into(),
            value,
        }
    }

    /// Create a shape mismatch error.
    pub fn shape(expected: impl Into<String>, actual: impl std::fmt::Debug) -> Self {
        Self::Shape {
            expected: expected.into(),
            actual: format!("{:?}", actual),
        }
    }
}
