//! Scene beat and dialogue generation.

use crate::pacing::Pacing;
use crate::vocabulary::{self, capitalize, pick};
use cinemuse_core::{DialogueLine, GenerationSettings, NormalizedConcept, SceneBeat};

/// Generate scene beats with dialogue for the script outline.
pub fn generate(concept: &NormalizedConcept, settings: &GenerationSettings) -> Vec<SceneBeat> {
    let pacing = Pacing::for_length(*settings.target_length());
    let base = vocabulary::seed(concept.lowercase());
    let intensity = *settings.intensity();
    let era = *settings.era();

    let protagonist = format!("THE {}", concept.primary_keyword().to_uppercase());

    (0..pacing.scenes)
        .map(|i| {
            let image = pick(vocabulary::imagery(era), base + i);
            let adjective = pick(vocabulary::adjectives(intensity), base + i);
            let register = pick(vocabulary::registers(intensity), base + i);
            let counterpart = pick(vocabulary::counterparts(era), base + i);
            let time = pick(vocabulary::SCENE_TIMES, base + i);

            let setting = if i % 2 == 0 { "INT" } else { "EXT" };
            let slugline = format!("{setting}. {} - {time}", image.to_uppercase());

            let description = format!(
                "{} light settles over {image} as {concept} edges closer to what they came for.",
                capitalize(adjective),
                concept = concept.lowercase()
            );

            let dialogue = vec![
                DialogueLine::new(
                    protagonist.clone(),
                    format!(
                        "I keep telling myself this is about {}. It stopped being that a while ago.",
                        pick_keyword(concept, i)
                    ),
                    register.to_string(),
                ),
                DialogueLine::new(
                    counterpart.to_string(),
                    "Then say what it is about. Out loud. While you still can.".to_string(),
                    pick(vocabulary::registers(intensity), base + i + 1).to_string(),
                ),
            ];

            SceneBeat::new(slugline, description, register.to_string(), dialogue)
        })
        .collect()
}

fn pick_keyword(concept: &NormalizedConcept, index: usize) -> &str {
    &concept.keywords()[index % concept.keywords().len()]
}
