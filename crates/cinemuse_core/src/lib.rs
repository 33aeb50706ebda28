//! Core data types for the Cinemuse content engine.
//!
//! This crate provides the foundation data types consumed by the generation
//! engine and its callers: the normalized concept, the three tone dials, the
//! content section tags, and the generated document payloads.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod concept;
mod content;
mod section;
mod settings;

pub use concept::{FALLBACK_CONCEPT, NormalizedConcept, SAMPLE_CONCEPT};
pub use content::{
    DialogueLine, GeneratedMovieContent, SceneBeat, Shot, SocialKit, StoryIdea, VideoPrompt,
    VisualFrame,
};
pub use section::{ContentSection, SectionSelection};
pub use settings::{
    Era, GenerationSettings, GenerationSettingsBuilder, Intensity, TargetLength,
};
