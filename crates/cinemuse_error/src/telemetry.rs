//! Telemetry initialization error types.

/// Error type for tracing subscriber registration.
///
/// # Examples
///
/// ```
/// use cinemuse_error::TelemetryError;
///
/// let err = TelemetryError::new("a global default subscriber has already been set");
/// assert!(format!("{}", err).contains("already been set"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Telemetry Error: {} at line {} in {}", message, line, file)]
pub struct TelemetryError {
    /// Description of the initialization failure
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TelemetryError {
    /// Create a new TelemetryError with automatic location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
