//! Social rollout kit generation.

use crate::pacing::Pacing;
use crate::vocabulary::{self, capitalize, pick};
use cinemuse_core::{GenerationSettings, NormalizedConcept, SocialKit};

/// Evergreen tags appended after the concept-derived ones.
const STOCK_TAGS: &[&str] = &[
    "#filmmaking",
    "#shortfilm",
    "#screenwriting",
    "#cinematography",
    "#storyboard",
    "#aicinema",
    "#moviemagic",
    "#indiefilm",
    "#behindthescenes",
    "#conceptart",
];

/// Generate titles, captions, and tags for rollout.
pub fn generate(concept: &NormalizedConcept, settings: &GenerationSettings) -> SocialKit {
    let pacing = Pacing::for_length(*settings.target_length());
    let base = vocabulary::seed(concept.lowercase());
    let intensity = *settings.intensity();
    let era = *settings.era();

    let titles = (0..pacing.social_titles)
        .map(|i| {
            let adjective = pick(vocabulary::adjectives(intensity), base + i);
            match i % 3 {
                0 => format!("What if {}?", concept.lowercase()),
                1 => format!(
                    "We turned \"{}\" into a {adjective} film blueprint",
                    concept.raw()
                ),
                _ => format!(
                    "{}: the {adjective} cut nobody asked for (yet)",
                    capitalize(concept.primary_keyword())
                ),
            }
        })
        .collect();

    let captions = (0..pacing.social_captions)
        .map(|i| {
            let image = pick(vocabulary::imagery(era), base + i);
            let register = pick(vocabulary::registers(intensity), base + i);
            match i % 2 {
                0 => format!(
                    "{display}. Somewhere between {image} and {register}, a film is waiting. \
                     Full breakdown in the thread.",
                    display = concept.display()
                ),
                _ => format!(
                    "Every frame of this one earns its {register}. \
                     Concept: {concept}.",
                    concept = concept.lowercase()
                ),
            }
        })
        .collect();

    let tags = concept
        .keywords()
        .iter()
        .map(|keyword| format!("#{keyword}"))
        .chain(STOCK_TAGS.iter().map(|tag| tag.to_string()))
        .take(pacing.social_tags)
        .collect();

    SocialKit {
        titles,
        captions,
        tags,
    }
}
