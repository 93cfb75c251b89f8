//! Error types for the hub.
//!
//! Only the loading edges of the program can fail: reading configuration,
//! parsing the content catalog and loading colour themes. The navigation core
//! and the content filters are infallible, so [`HubError`] never appears in
//! their signatures.

use thiserror::Error;

/// The main error type for hub start-up operations.
///
/// # Examples
///
/// ```
/// use lekutao_hub::HubError;
///
/// fn validate() -> Result<(), HubError> {
///     Err(HubError::Config("default_view must be `popular` or `full`".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum HubError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from reading configuration, catalog or theme files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid.
    ///
    /// The string describes the offending key or the TOML parse failure.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The content catalog could not be parsed or failed validation.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for hub start-up operations.
pub type Result<T> = std::result::Result<T, HubError>;
