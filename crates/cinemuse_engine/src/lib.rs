//! Deterministic content generation engine for Cinemuse.
//!
//! The engine turns a free-text concept plus the three tone dials into a
//! fully populated [`GeneratedMovieContent`] document. Generation is a pure
//! synchronous computation: no I/O, no randomness, no shared state. Two
//! calls with identical input produce identical documents.
//!
//! # Examples
//!
//! ```
//! use cinemuse_core::GenerationSettings;
//! use cinemuse_engine::generate_movie_content;
//!
//! let document = generate_movie_content(
//!     "a lighthouse keeper who trades memories",
//!     &GenerationSettings::default(),
//! );
//! assert!(!document.story_ideas.is_empty());
//! assert!(!document.shot_list.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod pacing;
pub mod sections;
mod vocabulary;

pub use pacing::Pacing;

use cinemuse_core::{GeneratedMovieContent, GenerationSettings, NormalizedConcept};

/// Generate the full eight-section document for a concept and settings.
///
/// The concept is normalized once (empty input falls back to
/// [`cinemuse_core::FALLBACK_CONCEPT`]) and every section generator runs
/// unconditionally; subsetting for display is the caller's concern.
#[tracing::instrument(
    skip_all,
    fields(
        intensity = %settings.intensity(),
        era = %settings.era(),
        target_length = %settings.target_length(),
    )
)]
pub fn generate_movie_content(
    concept: &str,
    settings: &GenerationSettings,
) -> GeneratedMovieContent {
    let normalized = NormalizedConcept::normalize(concept);
    tracing::debug!(concept = %normalized.display(), "Normalized concept");

    let document = GeneratedMovieContent {
        story_ideas: sections::story_ideas::generate(&normalized, settings),
        script_writing: sections::script_writing::generate(&normalized, settings),
        visual_planning: sections::visual_planning::generate(&normalized, settings),
        shot_list: sections::shot_list::generate(&normalized, settings),
        voiceover: sections::voiceover::generate(&normalized, settings),
        poster_prompts: sections::poster_prompts::generate(&normalized, settings),
        video_prompts: sections::video_prompts::generate(&normalized, settings),
        social: sections::social::generate(&normalized, settings),
    };

    tracing::debug!(
        story_ideas = document.story_ideas.len(),
        scenes = document.script_writing.len(),
        shots = document.shot_list.len(),
        "Generated movie content"
    );

    document
}
