//! Voiceover narration generation.

use crate::pacing::Pacing;
use crate::vocabulary::{self, capitalize, pick};
use cinemuse_core::{GenerationSettings, NormalizedConcept};

/// Generate narration paragraphs, one per beat of the arc.
pub fn generate(concept: &NormalizedConcept, settings: &GenerationSettings) -> Vec<String> {
    let pacing = Pacing::for_length(*settings.target_length());
    let base = vocabulary::seed(concept.lowercase());
    let intensity = *settings.intensity();
    let era = *settings.era();

    (0..pacing.voiceover_paragraphs)
        .map(|i| {
            let image = pick(vocabulary::imagery(era), base + i);
            let adjective = pick(vocabulary::adjectives(intensity), base + i);
            let register = pick(vocabulary::registers(intensity), base + i);

            match i % 4 {
                0 => format!(
                    "There are stories the world tells about itself, and then there is {}. \
                     It begins, as these things do, somewhere near {image}.",
                    concept.lowercase()
                ),
                1 => format!(
                    "Nobody warned them how {adjective} it would become. \
                     What started as curiosity hardened into {register}.",
                ),
                2 => format!(
                    "{} was never the whole truth. The rest waited among {image}, \
                     patient as weather.",
                    capitalize(concept.lowercase())
                ),
                _ => format!(
                    "In the end the question is simple, and {register} is the only honest answer. \
                     The rest is {adjective} light on {image}.",
                ),
            }
        })
        .collect()
}
