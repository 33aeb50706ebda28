//! Story idea generation.

use crate::pacing::Pacing;
use crate::vocabulary::{self, capitalize, pick};
use cinemuse_core::{GenerationSettings, NormalizedConcept, StoryIdea};

/// Generate pitchable story concepts for the given concept and settings.
pub fn generate(concept: &NormalizedConcept, settings: &GenerationSettings) -> Vec<StoryIdea> {
    let pacing = Pacing::for_length(*settings.target_length());
    let base = vocabulary::seed(concept.lowercase());
    let intensity = *settings.intensity();
    let era = *settings.era();

    (0..pacing.story_ideas)
        .map(|i| {
            let adjective = pick(vocabulary::adjectives(intensity), base + i);
            let image = pick(vocabulary::imagery(era), base + i);
            let anchor = pick(vocabulary::anchors(era), base + i);
            let stake = pick(vocabulary::stakes(intensity), base + i);
            let register = pick(vocabulary::registers(intensity), base + i + 1);

            let title = title_for(concept, adjective, image, i);
            let logline = format!(
                "In {anchor}, {concept} must {stake}.",
                concept = concept.lowercase()
            );
            let summary = format!(
                "{display} anchors this {adjective} tale set among {image}. \
                 As {register} builds, every choice redraws what they stand to lose.",
                display = concept.display()
            );

            StoryIdea::new(title, logline, summary)
        })
        .collect()
}

/// Cycle through three title skeletons so adjacent ideas read differently.
fn title_for(concept: &NormalizedConcept, adjective: &str, image: &str, index: usize) -> String {
    let keyword = capitalize(concept.primary_keyword());
    match index % 3 {
        0 => format!("The {} {}", capitalize(adjective), keyword),
        1 => format!("{} Among {}", keyword, capitalize(image)),
        _ => format!("A {} Reckoning", capitalize(adjective)),
    }
}
