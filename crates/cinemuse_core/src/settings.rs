//! Tone settings that parameterize every generator.
//!
//! The three dials form a closed configuration surface: intensity controls
//! register, era controls setting and imagery, target length controls
//! output cardinality and pacing. Invalid values are unrepresentable once
//! parsed; the [`FromStr`] impls are the fail-fast boundary for callers
//! arriving from strings.

use cinemuse_error::{SettingsError, SettingsErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Emotional register of the generated content.
///
/// # Examples
///
/// ```
/// use cinemuse_core::Intensity;
///
/// let epic: Intensity = "epic".parse().unwrap();
/// assert_eq!(epic, Intensity::Epic);
/// assert_eq!(epic.label(), "Epic");
/// assert!("operatic".parse::<Intensity>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Soft, poetic, atmospheric
    Dreamy,
    /// Raw, intimate realism
    Grounded,
    /// Grand, high-stakes energy
    Epic,
}

impl Intensity {
    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dreamy => "Dreamy",
            Self::Grounded => "Grounded",
            Self::Epic => "Epic",
        }
    }

    /// One-line hint shown next to the option.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Dreamy => "Soft, poetic, atmospheric",
            Self::Grounded => "Raw, intimate realism",
            Self::Epic => "Grand, high-stakes energy",
        }
    }
}

impl FromStr for Intensity {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dreamy" => Ok(Self::Dreamy),
            "grounded" => Ok(Self::Grounded),
            "epic" => Ok(Self::Epic),
            other => Err(SettingsError::new(SettingsErrorKind::UnknownIntensity(
                other.to_string(),
            ))),
        }
    }
}

/// Temporal setting of the generated content.
///
/// # Examples
///
/// ```
/// use cinemuse_core::Era;
///
/// let era: Era = "period".parse().unwrap();
/// assert_eq!(era.hint(), "Historically grounded");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    /// Modern-day aesthetic
    Contemporary,
    /// Forward-looking worlds
    Futuristic,
    /// Historically grounded
    Period,
}

impl Era {
    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contemporary => "Contemporary",
            Self::Futuristic => "Futuristic",
            Self::Period => "Period",
        }
    }

    /// One-line hint shown next to the option.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Contemporary => "Modern-day aesthetic",
            Self::Futuristic => "Forward-looking worlds",
            Self::Period => "Historically grounded",
        }
    }
}

impl FromStr for Era {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "contemporary" => Ok(Self::Contemporary),
            "futuristic" => Ok(Self::Futuristic),
            "period" => Ok(Self::Period),
            other => Err(SettingsError::new(SettingsErrorKind::UnknownEra(
                other.to_string(),
            ))),
        }
    }
}

/// Target runtime scale of the generated content.
///
/// # Examples
///
/// ```
/// use cinemuse_core::TargetLength;
///
/// let length: TargetLength = "series".parse().unwrap();
/// assert_eq!(length.hint(), "Multi-episode runway");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum TargetLength {
    /// 5-12 minute arc
    Short,
    /// 90-120 minute journey
    Feature,
    /// Multi-episode runway
    Series,
}

impl TargetLength {
    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Feature => "Feature",
            Self::Series => "Series",
        }
    }

    /// One-line hint shown next to the option.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Short => "5-12 minute arc",
            Self::Feature => "90-120 minute journey",
            Self::Series => "Multi-episode runway",
        }
    }
}

impl FromStr for TargetLength {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "feature" => Ok(Self::Feature),
            "series" => Ok(Self::Series),
            other => Err(SettingsError::new(SettingsErrorKind::UnknownTargetLength(
                other.to_string(),
            ))),
        }
    }
}

/// The complete tone dial supplied with every generation request.
///
/// # Examples
///
/// ```
/// use cinemuse_core::{Era, GenerationSettings, Intensity, TargetLength};
///
/// // Studio defaults
/// let defaults = GenerationSettings::default();
/// assert_eq!(*defaults.intensity(), Intensity::Epic);
///
/// // Builder with per-field defaults
/// let settings = GenerationSettings::builder()
///     .intensity(Intensity::Dreamy)
///     .target_length(TargetLength::Short)
///     .build();
/// assert_eq!(*settings.era(), Era::Futuristic);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerationSettings {
    /// Emotional register dial
    intensity: Intensity,
    /// Temporal setting dial
    era: Era,
    /// Runtime scale dial
    target_length: TargetLength,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            intensity: Intensity::Epic,
            era: Era::Futuristic,
            target_length: TargetLength::Feature,
        }
    }
}

impl GenerationSettings {
    /// Create settings from the three dials.
    pub fn new(intensity: Intensity, era: Era, target_length: TargetLength) -> Self {
        Self {
            intensity,
            era,
            target_length,
        }
    }

    /// Creates a new settings builder.
    pub fn builder() -> GenerationSettingsBuilder {
        GenerationSettingsBuilder::default()
    }
}

/// Builder for `GenerationSettings`.
#[derive(Debug, Default)]
pub struct GenerationSettingsBuilder {
    intensity: Option<Intensity>,
    era: Option<Era>,
    target_length: Option<TargetLength>,
}

impl GenerationSettingsBuilder {
    /// Sets the intensity dial.
    pub fn intensity(mut self, value: Intensity) -> Self {
        self.intensity = Some(value);
        self
    }

    /// Sets the era dial.
    pub fn era(mut self, value: Era) -> Self {
        self.era = Some(value);
        self
    }

    /// Sets the target length dial.
    pub fn target_length(mut self, value: TargetLength) -> Self {
        self.target_length = Some(value);
        self
    }

    /// Builds the `GenerationSettings`, filling unset dials with the
    /// studio defaults.
    pub fn build(self) -> GenerationSettings {
        let defaults = GenerationSettings::default();
        GenerationSettings {
            intensity: self.intensity.unwrap_or(defaults.intensity),
            era: self.era.unwrap_or(defaults.era),
            target_length: self.target_length.unwrap_or(defaults.target_length),
        }
    }
}
