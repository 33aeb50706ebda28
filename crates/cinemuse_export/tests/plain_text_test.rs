use cinemuse_core::{ContentSection, GeneratedMovieContent, GenerationSettings, SAMPLE_CONCEPT};
use cinemuse_engine::generate_movie_content;
use cinemuse_export::to_plain_text;
use strum::IntoEnumIterator;

fn generated() -> GeneratedMovieContent {
    generate_movie_content(SAMPLE_CONCEPT, &GenerationSettings::default())
}

#[test]
fn every_section_renders_non_empty() {
    let document = generated();
    for section in ContentSection::iter() {
        let text = to_plain_text(section, &document);
        assert!(!text.is_empty(), "empty export for {section:?}");
    }
}

#[test]
fn export_is_deterministic() {
    let document = generated();
    for section in ContentSection::iter() {
        assert_eq!(
            to_plain_text(section, &document),
            to_plain_text(section, &document)
        );
    }
}

#[test]
fn story_ideas_carry_titles_verbatim() {
    let document = generated();
    let text = to_plain_text(ContentSection::StoryIdeas, &document);
    assert!(text.starts_with("Concept 1: "));
    for idea in &document.story_ideas {
        assert!(text.contains(&idea.title));
        assert!(text.contains(&idea.logline));
        assert!(text.contains(&idea.summary));
    }
}

#[test]
fn script_writing_lists_dialogue_with_subtext() {
    let document = generated();
    let text = to_plain_text(ContentSection::ScriptWriting, &document);
    assert!(text.contains("Scene 1: "));
    assert!(text.contains("Emotional pulse: "));
    for beat in &document.script_writing {
        assert!(text.contains(&beat.slugline));
        for line in &beat.dialogue {
            assert!(text.contains(&format!("{}: {}", line.character, line.line)));
            assert!(text.contains(&format!("[Subtext: {}]", line.subtext)));
        }
    }
}

#[test]
fn shot_list_renders_pipe_separated_rows() {
    let document = generated();
    let text = to_plain_text(ContentSection::ShotList, &document);
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), document.shot_list.len());
    for (row, shot) in rows.iter().zip(&document.shot_list) {
        assert_eq!(row.matches(" | ").count(), 4);
        assert!(row.starts_with(&shot.id));
        assert!(row.ends_with(&shot.duration));
    }
}

#[test]
fn visual_planning_keeps_field_order() {
    let document = generated();
    let text = to_plain_text(ContentSection::VisualPlanning, &document);
    let camera = text.find("Camera: ").unwrap();
    let lighting = text.find("Lighting: ").unwrap();
    let mood = text.find("Mood: ").unwrap();
    assert!(camera < lighting && lighting < mood);
}

#[test]
fn video_prompts_include_assembled_ai_prompt() {
    let document = generated();
    let text = to_plain_text(ContentSection::VideoPrompts, &document);
    for prompt in &document.video_prompts {
        assert!(text.contains(&prompt.scene));
        assert!(text.contains(&format!("AI Prompt: {}", prompt.ai_prompt)));
    }
}

#[test]
fn social_groups_titles_captions_and_tags() {
    let document = generated();
    let text = to_plain_text(ContentSection::Social, &document);
    let titles = text.find("Titles:").unwrap();
    let captions = text.find("Captions:").unwrap();
    let tags = text.find("Tags:").unwrap();
    assert!(titles < captions && captions < tags);
    assert!(text.contains(&document.social.tags.join(" ")));
}

#[test]
fn voiceover_joins_paragraphs_with_blank_lines() {
    let document = generated();
    let text = to_plain_text(ContentSection::Voiceover, &document);
    assert_eq!(
        text.matches("\n\n").count(),
        document.voiceover.len() - 1
    );
    for paragraph in &document.voiceover {
        assert!(text.contains(paragraph));
    }
}

#[test]
fn empty_document_renders_empty_strings() {
    let document = GeneratedMovieContent::default();
    for section in ContentSection::iter() {
        let text = to_plain_text(section, &document);
        match section {
            // The social grouping headers survive even with no content
            ContentSection::Social => assert!(text.contains("Titles:")),
            _ => assert!(text.is_empty(), "{section:?} rendered {text:?}"),
        }
    }
}
