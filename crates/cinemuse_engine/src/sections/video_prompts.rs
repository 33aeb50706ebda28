//! Generative video prompt generation.

use crate::pacing::Pacing;
use crate::vocabulary::{self, capitalize, pick};
use cinemuse_core::{GenerationSettings, NormalizedConcept, VideoPrompt};

/// Generate prompt blocks for generative video tools.
///
/// The `ai_prompt` field assembles the structured fields into the single
/// comma-separated string those tools expect.
pub fn generate(concept: &NormalizedConcept, settings: &GenerationSettings) -> Vec<VideoPrompt> {
    let pacing = Pacing::for_length(*settings.target_length());
    let base = vocabulary::seed(concept.lowercase());
    let intensity = *settings.intensity();
    let era = *settings.era();

    (0..pacing.video_prompts)
        .map(|i| {
            let image = pick(vocabulary::imagery(era), base + i);
            let palette = pick(vocabulary::palettes(era), base + i);
            let camera = pick(vocabulary::camera_treatments(intensity), base + i);
            let light = pick(vocabulary::lighting(intensity), base + i);
            let movement = pick(vocabulary::movements(intensity), base + i);

            let scene = format!("Scene {:02}: {}", i + 1, capitalize(image));
            let motion = format!(
                "{} as {concept} moves through the frame",
                capitalize(movement),
                concept = concept.lowercase()
            );
            let ai_prompt = format!(
                "{concept}, {image}, {palette}, {camera}, {light}, {movement}, cinematic, 24fps",
                concept = concept.lowercase()
            );

            VideoPrompt::new(
                scene,
                palette.to_string(),
                camera.to_string(),
                light.to_string(),
                motion,
                ai_prompt,
            )
        })
        .collect()
}
