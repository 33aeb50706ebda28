//! Production shot table generation.

use crate::pacing::Pacing;
use crate::vocabulary::{self, pick};
use cinemuse_core::{GenerationSettings, NormalizedConcept, Shot};

/// Generate the production shot table.
///
/// Durations are timecode-like strings in the 2-10 second range, varying
/// deterministically per row.
pub fn generate(concept: &NormalizedConcept, settings: &GenerationSettings) -> Vec<Shot> {
    let pacing = Pacing::for_length(*settings.target_length());
    let base = vocabulary::seed(concept.lowercase());
    let intensity = *settings.intensity();
    let era = *settings.era();

    (0..pacing.shots)
        .map(|i| {
            let subject = match i % 3 {
                0 => concept.lowercase().clone(),
                1 => format!("the {}", concept.primary_keyword()),
                _ => pick(vocabulary::imagery(era), base + i).to_string(),
            };

            let seconds = 2 + (base + i * 3) % 9;

            Shot::new(
                format!("S{:02}", i + 1),
                pick(vocabulary::SHOT_TYPES, base + i).to_string(),
                subject,
                pick(vocabulary::movements(intensity), base + i).to_string(),
                format!("0:{seconds:02}"),
            )
        })
        .collect()
}
