//! Storyboard frame card generation.

use crate::pacing::Pacing;
use crate::vocabulary::{self, capitalize, pick};
use cinemuse_core::{GenerationSettings, NormalizedConcept, VisualFrame};

/// Generate storyboard-level frame cards.
pub fn generate(concept: &NormalizedConcept, settings: &GenerationSettings) -> Vec<VisualFrame> {
    let pacing = Pacing::for_length(*settings.target_length());
    let base = vocabulary::seed(concept.lowercase());
    let intensity = *settings.intensity();
    let era = *settings.era();

    (0..pacing.frames)
        .map(|i| {
            let image = pick(vocabulary::imagery(era), base + i);
            let palette = pick(vocabulary::palettes(era), base + i);

            VisualFrame::new(
                format!("Frame {:02}", i + 1),
                format!(
                    "{} framed against {image}, {palette}.",
                    capitalize(concept.lowercase())
                ),
                pick(vocabulary::camera_treatments(intensity), base + i).to_string(),
                pick(vocabulary::lighting(intensity), base + i).to_string(),
                capitalize(pick(vocabulary::moods(intensity), base + i)),
            )
        })
        .collect()
}
