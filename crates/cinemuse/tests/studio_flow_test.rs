//! End-to-end flow a studio front-end performs: parse dials from strings,
//! generate the document, subset sections for display, export for copy.

use cinemuse::{
    ContentSection, Era, GenerationSettings, Intensity, SAMPLE_CONCEPT, SectionSelection,
    TargetLength, generate_movie_content, to_plain_text,
};

#[test]
fn form_submission_round_trip() {
    // Dials arrive as strings from the form
    let intensity: Intensity = "epic".parse().unwrap();
    let era: Era = "futuristic".parse().unwrap();
    let target_length: TargetLength = "feature".parse().unwrap();
    let settings = GenerationSettings::new(intensity, era, target_length);

    let document = generate_movie_content(SAMPLE_CONCEPT, &settings);

    // The user narrows the output palette
    let mut selection = SectionSelection::all();
    selection.toggle(ContentSection::Social);
    selection.toggle(ContentSection::VideoPrompts);
    assert_eq!(selection.len(), 6);

    // Every displayed section exports copy-ready text
    for section in selection.sections() {
        let text = to_plain_text(*section, &document);
        assert!(!text.is_empty(), "no export for {section:?}");
    }
}

#[test]
fn invalid_dial_fails_fast_with_context() {
    let err = "cinematic".parse::<Intensity>().unwrap_err();
    let rendered = format!("{err}");
    assert!(rendered.contains("cinematic"));
    assert!(rendered.contains("dreamy"));
}

#[test]
fn regenerating_replaces_rather_than_mutates() {
    let settings = GenerationSettings::default();
    let first = generate_movie_content(SAMPLE_CONCEPT, &settings);
    let second = generate_movie_content("a heist inside a dream", &settings);

    // Documents are independent values; the first is untouched
    assert_ne!(first, second);
    assert_eq!(first, generate_movie_content(SAMPLE_CONCEPT, &settings));
}
