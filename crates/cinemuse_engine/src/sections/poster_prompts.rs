//! Poster art prompt generation.

use crate::pacing::Pacing;
use crate::vocabulary::{self, pick};
use cinemuse_core::{GenerationSettings, NormalizedConcept};

/// Generate key-art prompts formatted for image generation tools.
pub fn generate(concept: &NormalizedConcept, settings: &GenerationSettings) -> Vec<String> {
    let pacing = Pacing::for_length(*settings.target_length());
    let base = vocabulary::seed(concept.lowercase());
    let intensity = *settings.intensity();
    let era = *settings.era();

    (0..pacing.poster_prompts)
        .map(|i| {
            let adjective = pick(vocabulary::adjectives(intensity), base + i);
            let image = pick(vocabulary::imagery(era), base + i);
            let palette = pick(vocabulary::palettes(era), base + i);
            let texture = pick(vocabulary::textures(era), base + i);
            let light = pick(vocabulary::lighting(intensity), base + i);

            format!(
                "Theatrical poster of {concept}, {adjective} composition, {image} in the \
                 background, {palette}, {texture}, {light}, cinematic key art, high detail",
                concept = concept.lowercase()
            )
        })
        .collect()
}
