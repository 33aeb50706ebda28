//! Top-level error wrapper types.

use crate::{SettingsError, TelemetryError};

/// This is the foundation error enum. Variants route every crate-level
/// error in the Cinemuse workspace.
///
/// # Examples
///
/// ```
/// use cinemuse_error::{CinemuseError, SettingsError, SettingsErrorKind};
///
/// let settings_err =
///     SettingsError::new(SettingsErrorKind::UnknownIntensity("loud".to_string()));
/// let err: CinemuseError = settings_err.into();
/// assert!(format!("{}", err).contains("Settings Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CinemuseErrorKind {
    /// Settings parsing error
    #[from(SettingsError)]
    Settings(SettingsError),
    /// Telemetry initialization error
    #[from(TelemetryError)]
    Telemetry(TelemetryError),
}

/// Cinemuse error with kind discrimination.
///
/// # Examples
///
/// ```
/// use cinemuse_error::{CinemuseResult, SettingsError, SettingsErrorKind};
///
/// fn might_fail() -> CinemuseResult<()> {
///     Err(SettingsError::new(SettingsErrorKind::UnknownSection(
///         "bloopers".to_string(),
///     )))?
/// }
///
/// match might_fail() {
///     Ok(()) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Cinemuse Error: {}", _0)]
pub struct CinemuseError(Box<CinemuseErrorKind>);

impl CinemuseError {
    /// Create a new error from a kind.
    pub fn new(kind: CinemuseErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CinemuseErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CinemuseErrorKind
impl<T> From<T> for CinemuseError
where
    T: Into<CinemuseErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Cinemuse operations.
///
/// # Examples
///
/// ```
/// use cinemuse_error::{CinemuseResult, SettingsError, SettingsErrorKind};
///
/// fn parse_era() -> CinemuseResult<String> {
///     Err(SettingsError::new(SettingsErrorKind::UnknownEra(
///         "jurassic".to_string(),
///     )))?
/// }
/// ```
pub type CinemuseResult<T> = std::result::Result<T, CinemuseError>;
