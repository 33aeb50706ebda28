//! Cinemuse - deterministic cinematic content studio engine.
//!
//! Cinemuse turns a short free-text "concept" plus three tone dials into a
//! structured bundle of cinematic writing artifacts: story ideas, scene
//! beats, storyboard frames, a shot list, voiceover, poster and video
//! prompts, and a social rollout kit. Generation is a pure synchronous
//! computation; the same concept and settings always produce the same
//! document.
//!
//! # Quick Start
//!
//! ```
//! use cinemuse::{ContentSection, GenerationSettings, generate_movie_content, to_plain_text};
//!
//! let settings = GenerationSettings::default();
//! let document = generate_movie_content(
//!     "a community of lighthouse keepers who exchange memories through light",
//!     &settings,
//! );
//!
//! assert!(!document.story_ideas.is_empty());
//!
//! // Per-section plain text, ready for the clipboard.
//! let shot_table = to_plain_text(ContentSection::ShotList, &document);
//! assert!(shot_table.contains(" | "));
//! ```
//!
//! # Architecture
//!
//! Cinemuse is organized as a workspace with focused crates:
//!
//! - `cinemuse_core` - concept normalization, tone dials, document types
//! - `cinemuse_error` - error types
//! - `cinemuse_engine` - vocabulary tables, pacing, section generators
//! - `cinemuse_export` - per-section plain-text rendering
//!
//! This crate (`cinemuse`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod telemetry;

pub use cinemuse_core::{
    ContentSection, DialogueLine, Era, FALLBACK_CONCEPT, GeneratedMovieContent,
    GenerationSettings, GenerationSettingsBuilder, Intensity, NormalizedConcept, SAMPLE_CONCEPT,
    SceneBeat, SectionSelection, Shot, SocialKit, StoryIdea, TargetLength, VideoPrompt,
    VisualFrame,
};
pub use cinemuse_engine::{Pacing, generate_movie_content, sections};
pub use cinemuse_error::{
    CinemuseError, CinemuseErrorKind, CinemuseResult, SettingsError, SettingsErrorKind,
    TelemetryError,
};
pub use cinemuse_export::to_plain_text;
pub use telemetry::init_telemetry;
