//! Settings parsing error types.

/// Specific error conditions for parsing tone dials and section tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SettingsErrorKind {
    /// Value is not a recognized intensity
    #[display("Unknown intensity '{}': expected dreamy, grounded, or epic", _0)]
    UnknownIntensity(String),
    /// Value is not a recognized era
    #[display("Unknown era '{}': expected contemporary, futuristic, or period", _0)]
    UnknownEra(String),
    /// Value is not a recognized target length
    #[display("Unknown target length '{}': expected short, feature, or series", _0)]
    UnknownTargetLength(String),
    /// Value is not a recognized content section tag
    #[display("Unknown content section '{}'", _0)]
    UnknownSection(String),
}

/// Error type for settings parsing.
///
/// # Examples
///
/// ```
/// use cinemuse_error::{SettingsError, SettingsErrorKind};
///
/// let err = SettingsError::new(SettingsErrorKind::UnknownEra("medieval".to_string()));
/// assert!(format!("{}", err).contains("medieval"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Settings Error: {} at line {} in {}", kind, line, file)]
pub struct SettingsError {
    /// The specific error condition
    pub kind: SettingsErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SettingsError {
    /// Create a new SettingsError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SettingsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
