//! Content section tags and the display-side selection set.

use cinemuse_error::{SettingsError, SettingsErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// The eight fixed categories of generated cinematic artifact.
///
/// The wire tags are camelCase to match the document's JSON shape.
///
/// # Examples
///
/// ```
/// use cinemuse_core::ContentSection;
/// use strum::IntoEnumIterator;
///
/// assert_eq!(ContentSection::iter().count(), 8);
/// let section: ContentSection = "shotList".parse().unwrap();
/// assert_eq!(section.label(), "Shot list");
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
#[serde(rename_all = "camelCase")]
pub enum ContentSection {
    /// Story concepts with loglines and summaries
    StoryIdeas,
    /// Scene beats with sluglines and dialogue
    ScriptWriting,
    /// Storyboard-level frame cards
    VisualPlanning,
    /// Production shot table
    ShotList,
    /// Narration paragraphs
    Voiceover,
    /// Poster art prompts
    PosterPrompts,
    /// Generative video prompts
    VideoPrompts,
    /// Titles, captions, and tags for rollout
    Social,
}

impl ContentSection {
    /// The camelCase wire tag for this section.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::StoryIdeas => "storyIdeas",
            Self::ScriptWriting => "scriptWriting",
            Self::VisualPlanning => "visualPlanning",
            Self::ShotList => "shotList",
            Self::Voiceover => "voiceover",
            Self::PosterPrompts => "posterPrompts",
            Self::VideoPrompts => "videoPrompts",
            Self::Social => "social",
        }
    }

    /// Human-readable section label for headings and toggles.
    pub fn label(&self) -> &'static str {
        match self {
            Self::StoryIdeas => "Story ideas",
            Self::ScriptWriting => "Script writing",
            Self::VisualPlanning => "Visual planning",
            Self::ShotList => "Shot list",
            Self::Voiceover => "Voiceover",
            Self::PosterPrompts => "Poster prompts",
            Self::VideoPrompts => "Video prompts",
            Self::Social => "Social rollout",
        }
    }
}

impl FromStr for ContentSection {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::iter()
            .find(|section| section.tag() == trimmed)
            .ok_or_else(|| {
                SettingsError::new(SettingsErrorKind::UnknownSection(trimmed.to_string()))
            })
    }
}

/// The set of sections a front-end has toggled on, in insertion order.
///
/// Carries the selector invariant: the set can never become empty. Toggling
/// the last remaining section off is a no-op that keeps it selected.
///
/// # Examples
///
/// ```
/// use cinemuse_core::{ContentSection, SectionSelection};
///
/// let mut selection = SectionSelection::all();
/// selection.toggle(ContentSection::Social);
/// assert!(!selection.contains(ContentSection::Social));
///
/// // The last section refuses to leave.
/// let mut single = SectionSelection::all();
/// for section in SectionSelection::all().sections().to_vec() {
///     single.toggle(section);
/// }
/// assert_eq!(single.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSelection(Vec<ContentSection>);

impl Default for SectionSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl SectionSelection {
    /// Selection containing every section, in declaration order.
    pub fn all() -> Self {
        Self(ContentSection::iter().collect())
    }

    /// The selected sections, in insertion order.
    pub fn sections(&self) -> &[ContentSection] {
        &self.0
    }

    /// Whether a section is currently selected.
    pub fn contains(&self, section: ContentSection) -> bool {
        self.0.contains(&section)
    }

    /// Number of selected sections. Always at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the selection invariant keeps at least one section.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Toggle a section in or out of the selection.
    ///
    /// Removing the only remaining section is a no-op.
    pub fn toggle(&mut self, section: ContentSection) {
        if let Some(position) = self.0.iter().position(|s| *s == section) {
            if self.0.len() > 1 {
                self.0.remove(position);
            }
        } else {
            self.0.push(section);
        }
    }

    /// Restore the full palette.
    pub fn select_all(&mut self) {
        *self = Self::all();
    }
}
