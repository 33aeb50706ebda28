//! Error types for the Cinemuse content engine.
//!
//! This crate provides the foundation error types used throughout the
//! Cinemuse workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use cinemuse_error::{CinemuseResult, SettingsError, SettingsErrorKind};
//!
//! fn parse_dial(value: &str) -> CinemuseResult<()> {
//!     Err(SettingsError::new(SettingsErrorKind::UnknownIntensity(
//!         value.to_string(),
//!     )))?
//! }
//!
//! match parse_dial("operatic") {
//!     Ok(()) => println!("parsed"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod settings;
mod telemetry;

pub use error::{CinemuseError, CinemuseErrorKind, CinemuseResult};
pub use settings::{SettingsError, SettingsErrorKind};
pub use telemetry::TelemetryError;
