//! Plain-text export of generated Cinemuse documents.
//!
//! One fixed formatting rule per section, suitable for clipboard export:
//! field order and separators never change, so exported text is stable
//! across releases for identical documents.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use cinemuse_core::{ContentSection, GeneratedMovieContent};

/// Render one section of a generated document as a human-readable
/// multi-line string.
///
/// Deterministic and total over the section enum. Rendering an empty
/// sequence section yields an empty string; the social kit keeps its
/// group headers.
///
/// # Examples
///
/// ```
/// use cinemuse_core::{ContentSection, GenerationSettings};
/// use cinemuse_engine::generate_movie_content;
/// use cinemuse_export::to_plain_text;
///
/// let document = generate_movie_content("a heist inside a dream", &GenerationSettings::default());
/// let text = to_plain_text(ContentSection::ShotList, &document);
/// assert!(text.contains("S01 | "));
/// ```
pub fn to_plain_text(section: ContentSection, content: &GeneratedMovieContent) -> String {
    let text = match section {
        ContentSection::StoryIdeas => story_ideas(content),
        ContentSection::ScriptWriting => script_writing(content),
        ContentSection::VisualPlanning => visual_planning(content),
        ContentSection::ShotList => shot_list(content),
        ContentSection::Voiceover => content.voiceover.join("\n\n"),
        ContentSection::PosterPrompts => content.poster_prompts.join("\n\n"),
        ContentSection::VideoPrompts => video_prompts(content),
        ContentSection::Social => social(content),
    };

    tracing::debug!(section = %section.tag(), bytes = text.len(), "Rendered section");
    text
}

fn story_ideas(content: &GeneratedMovieContent) -> String {
    content
        .story_ideas
        .iter()
        .enumerate()
        .map(|(index, idea)| {
            format!(
                "Concept {}: {}\nLogline: {}\nSummary: {}",
                index + 1,
                idea.title,
                idea.logline,
                idea.summary
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn script_writing(content: &GeneratedMovieContent) -> String {
    content
        .script_writing
        .iter()
        .enumerate()
        .map(|(index, beat)| {
            let dialogue = beat
                .dialogue
                .iter()
                .map(|line| {
                    format!("{}: {} [Subtext: {}]", line.character, line.line, line.subtext)
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "Scene {}: {}\nDescription: {}\nEmotional pulse: {}\nDialogue:\n{}",
                index + 1,
                beat.slugline,
                beat.description,
                beat.emotional_beat,
                dialogue
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn visual_planning(content: &GeneratedMovieContent) -> String {
    content
        .visual_planning
        .iter()
        .map(|card| {
            format!(
                "{}: {}\nCamera: {}\nLighting: {}\nMood: {}",
                card.frame, card.description, card.camera, card.lighting, card.mood
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn shot_list(content: &GeneratedMovieContent) -> String {
    content
        .shot_list
        .iter()
        .map(|shot| {
            format!(
                "{} | {} | {} | {} | {}",
                shot.id, shot.shot_type, shot.subject, shot.movement, shot.duration
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn video_prompts(content: &GeneratedMovieContent) -> String {
    content
        .video_prompts
        .iter()
        .map(|prompt| {
            format!(
                "{}\nPalette: {}\nCamera: {}\nLighting: {}\nMotion: {}\nAI Prompt: {}",
                prompt.scene,
                prompt.visual_palette,
                prompt.camera_direction,
                prompt.lighting,
                prompt.motion_prompt,
                prompt.ai_prompt
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn social(content: &GeneratedMovieContent) -> String {
    let mut lines = vec!["Titles:".to_string()];
    lines.extend(content.social.titles.iter().cloned());
    lines.push(String::new());
    lines.push("Captions:".to_string());
    lines.extend(content.social.captions.iter().cloned());
    lines.push(String::new());
    lines.push("Tags:".to_string());
    lines.push(content.social.tags.join(" "));
    lines.join("\n")
}
