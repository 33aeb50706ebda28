//! Generated document payloads.
//!
//! One element type per section, all ordered sequences in generation
//! order. The document is a read-only DTO for the presentation layer;
//! serde uses camelCase field names so it serializes to the JSON shape the
//! studio front-end consumes.

use crate::ContentSection;
use serde::{Deserialize, Serialize};

/// A pitchable story concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct StoryIdea {
    /// Working title
    pub title: String,
    /// One-sentence pitch
    pub logline: String,
    /// Short prose summary
    pub summary: String,
}

/// One line of scene dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct DialogueLine {
    /// Speaking character
    pub character: String,
    /// Spoken line
    pub line: String,
    /// What the character means but does not say
    pub subtext: String,
}

/// A scene beat for the script outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct SceneBeat {
    /// Screenplay slugline
    pub slugline: String,
    /// Action description
    pub description: String,
    /// The scene's emotional pulse
    pub emotional_beat: String,
    /// Dialogue exchange for the scene
    pub dialogue: Vec<DialogueLine>,
}

/// A storyboard-level frame card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct VisualFrame {
    /// Frame heading
    pub frame: String,
    /// What the frame shows
    pub description: String,
    /// Camera treatment
    pub camera: String,
    /// Lighting treatment
    pub lighting: String,
    /// Mood keyword
    pub mood: String,
}

/// A row in the production shot table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    /// Shot identifier
    pub id: String,
    /// Framing type
    pub shot_type: String,
    /// What the camera holds on
    pub subject: String,
    /// Camera movement
    pub movement: String,
    /// Timecode-like duration, e.g. "0:04"
    pub duration: String,
}

/// A prompt block for generative video tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct VideoPrompt {
    /// Scene heading
    pub scene: String,
    /// Color palette guidance
    pub visual_palette: String,
    /// Camera direction
    pub camera_direction: String,
    /// Lighting guidance
    pub lighting: String,
    /// Motion guidance
    pub motion_prompt: String,
    /// Assembled single-string prompt for AI tools
    pub ai_prompt: String,
}

/// Titles, captions, and tags for social rollout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialKit {
    /// Post title candidates
    pub titles: Vec<String>,
    /// Caption candidates
    pub captions: Vec<String>,
    /// Hashtag-safe tags
    pub tags: Vec<String>,
}

/// The full generated bundle for one concept + settings invocation.
///
/// Produced atomically and immutable after creation. Every section is
/// always populated; subsetting for display is the caller's concern.
///
/// # Examples
///
/// ```
/// use cinemuse_core::{ContentSection, GeneratedMovieContent};
///
/// let document = GeneratedMovieContent::default();
/// assert!(document.section_is_empty(ContentSection::ShotList));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMovieContent {
    /// Story concepts
    pub story_ideas: Vec<StoryIdea>,
    /// Scene beats
    pub script_writing: Vec<SceneBeat>,
    /// Storyboard frame cards
    pub visual_planning: Vec<VisualFrame>,
    /// Production shot table
    pub shot_list: Vec<Shot>,
    /// Narration paragraphs
    pub voiceover: Vec<String>,
    /// Poster art prompts
    pub poster_prompts: Vec<String>,
    /// Generative video prompts
    pub video_prompts: Vec<VideoPrompt>,
    /// Social rollout kit
    pub social: SocialKit,
}

impl GeneratedMovieContent {
    /// Whether a section's payload is empty.
    ///
    /// Freshly generated documents report false for every tag; this exists
    /// for callers holding partially constructed or default documents.
    pub fn section_is_empty(&self, section: ContentSection) -> bool {
        match section {
            ContentSection::StoryIdeas => self.story_ideas.is_empty(),
            ContentSection::ScriptWriting => self.script_writing.is_empty(),
            ContentSection::VisualPlanning => self.visual_planning.is_empty(),
            ContentSection::ShotList => self.shot_list.is_empty(),
            ContentSection::Voiceover => self.voiceover.is_empty(),
            ContentSection::PosterPrompts => self.poster_prompts.is_empty(),
            ContentSection::VideoPrompts => self.video_prompts.is_empty(),
            ContentSection::Social => {
                self.social.titles.is_empty()
                    && self.social.captions.is_empty()
                    && self.social.tags.is_empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn default_document_is_empty_everywhere() {
        let document = GeneratedMovieContent::default();
        for section in ContentSection::iter() {
            assert!(document.section_is_empty(section));
        }
    }

    #[test]
    fn document_serializes_with_camel_case_keys() {
        let mut document = GeneratedMovieContent::default();
        document.shot_list.push(Shot::new(
            "S01".to_string(),
            "Wide establishing".to_string(),
            "the cartographer".to_string(),
            "slow push-in".to_string(),
            "0:06".to_string(),
        ));

        let json = serde_json::to_value(&document).unwrap();
        assert!(json.get("shotList").is_some());
        assert!(json.get("storyIdeas").is_some());
        assert_eq!(json["shotList"][0]["shotType"], "Wide establishing");

        let back: GeneratedMovieContent = serde_json::from_value(json).unwrap();
        assert_eq!(back, document);
    }
}
