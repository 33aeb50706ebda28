//! Immutable vocabulary tables keyed by the tone dials.
//!
//! All tables are process-wide static data selected through exhaustive
//! matches, so every dial combination resolves at compile time. Fragment
//! selection is cyclic and offset by a seed derived from the concept text:
//! identical input always draws identical fragments, different concepts
//! drift through the tables.

use cinemuse_core::{Era, Intensity};

/// Deterministic seed for cyclic fragment selection.
pub(crate) fn seed(text: &str) -> usize {
    text.bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize))
}

/// Cyclic table lookup.
pub(crate) fn pick(table: &[&'static str], index: usize) -> &'static str {
    table[index % table.len()]
}

/// Uppercase the first character of a fragment.
pub(crate) fn capitalize(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn adjectives(intensity: Intensity) -> &'static [&'static str] {
    match intensity {
        Intensity::Dreamy => &[
            "luminous",
            "weightless",
            "hushed",
            "opaline",
            "half-remembered",
            "drifting",
        ],
        Intensity::Grounded => &[
            "weathered",
            "intimate",
            "unvarnished",
            "tactile",
            "plainspoken",
            "worn-in",
        ],
        Intensity::Epic => &[
            "towering",
            "mythic",
            "thunderous",
            "incandescent",
            "stormlit",
            "colossal",
        ],
    }
}

pub(crate) fn registers(intensity: Intensity) -> &'static [&'static str] {
    match intensity {
        Intensity::Dreamy => &[
            "quiet wonder",
            "aching nostalgia",
            "suspended reverie",
            "tender uncertainty",
        ],
        Intensity::Grounded => &[
            "weary resolve",
            "guarded hope",
            "quiet defiance",
            "hard-won trust",
        ],
        Intensity::Epic => &[
            "rising awe",
            "desperate courage",
            "shattering loss",
            "triumphant release",
        ],
    }
}

pub(crate) fn moods(intensity: Intensity) -> &'static [&'static str] {
    match intensity {
        Intensity::Dreamy => &["ethereal", "melancholy", "serene", "liminal"],
        Intensity::Grounded => &["raw", "unadorned", "restless", "honest"],
        Intensity::Epic => &["monumental", "ominous", "exultant", "relentless"],
    }
}

pub(crate) fn stakes(intensity: Intensity) -> &'static [&'static str] {
    match intensity {
        Intensity::Dreamy => &[
            "hold on to a memory that is already dissolving",
            "follow a signal only they can feel",
            "choose between waking and the world they built",
        ],
        Intensity::Grounded => &[
            "keep a promise that is costing them everything",
            "face the person they have been avoiding",
            "rebuild what one bad night destroyed",
        ],
        Intensity::Epic => &[
            "stop a collapse that has already begun",
            "carry a truth that could unmake their world",
            "stand alone where an army should be standing",
        ],
    }
}

pub(crate) fn movements(intensity: Intensity) -> &'static [&'static str] {
    match intensity {
        Intensity::Dreamy => &[
            "slow lateral drift",
            "floating dolly",
            "feathered rack focus",
            "weightless rise",
        ],
        Intensity::Grounded => &[
            "handheld follow",
            "locked-off hold",
            "shoulder-level pan",
            "step-in push",
        ],
        Intensity::Epic => &[
            "sweeping crane",
            "accelerating push-in",
            "orbiting move",
            "plunging aerial descent",
        ],
    }
}

pub(crate) fn camera_treatments(intensity: Intensity) -> &'static [&'static str] {
    match intensity {
        Intensity::Dreamy => &[
            "long lens compression with soft edges",
            "shallow focus that lets the background bloom",
            "double exposure layered in camera",
        ],
        Intensity::Grounded => &[
            "natural eye-level framing",
            "available-light documentary coverage",
            "tight over-the-shoulder proximity",
        ],
        Intensity::Epic => &[
            "anamorphic wide with deep staging",
            "low-angle hero framing",
            "god's-eye overhead geometry",
        ],
    }
}

pub(crate) fn lighting(intensity: Intensity) -> &'static [&'static str] {
    match intensity {
        Intensity::Dreamy => &[
            "soft diffusion with haze in the backlight",
            "moonlit spill through gauze",
            "practical glow swallowed by shadow",
        ],
        Intensity::Grounded => &[
            "single-source window light",
            "overcast daylight, unbounced",
            "bare tungsten practicals",
        ],
        Intensity::Epic => &[
            "hard rim light against silhouette",
            "storm-break shafts through dust",
            "firelight carving monumental shadow",
        ],
    }
}

pub(crate) fn imagery(era: Era) -> &'static [&'static str] {
    match era {
        Era::Contemporary => &[
            "neon crosswalks",
            "rooftop gardens",
            "late-night diners",
            "rain-slick transit platforms",
            "glass-walled offices after hours",
        ],
        Era::Futuristic => &[
            "orbital boulevards",
            "holographic archives",
            "terraformed coastlines",
            "chrome atriums",
            "signal-towers above the cloud deck",
        ],
        Era::Period => &[
            "gaslit alleys",
            "candlelit salons",
            "steam-wreathed stations",
            "ink-stained ledgers",
            "cobbled harbor quays",
        ],
    }
}

pub(crate) fn anchors(era: Era) -> &'static [&'static str] {
    match era {
        Era::Contemporary => &[
            "a restless modern city",
            "a suburb that never quite sleeps",
            "a coastal town emptied by winter",
        ],
        Era::Futuristic => &[
            "a city stacked toward the stratosphere",
            "a colony that outgrew its charter",
            "an archive-world at the edge of the network",
        ],
        Era::Period => &[
            "a capital on the eve of upheaval",
            "a port town fat on trade and secrets",
            "an estate living on borrowed grandeur",
        ],
    }
}

pub(crate) fn palettes(era: Era) -> &'static [&'static str] {
    match era {
        Era::Contemporary => &[
            "sodium orange against overcast gray",
            "fluorescent teal and asphalt black",
            "muted denim blues with skin-tone warmth",
        ],
        Era::Futuristic => &[
            "cyan holograph glow over gunmetal",
            "white-on-white with a single ember accent",
            "iridescent violets against void black",
        ],
        Era::Period => &[
            "candlelit ambers and oxblood",
            "faded sepia with porcelain highlights",
            "forest greens under lamplight gold",
        ],
    }
}

pub(crate) fn textures(era: Era) -> &'static [&'static str] {
    match era {
        Era::Contemporary => &[
            "wet asphalt sheen",
            "condensation on glass",
            "paper coffee cups and cable clutter",
        ],
        Era::Futuristic => &[
            "brushed alloy and light-field shimmer",
            "self-healing polymer skins",
            "dust-free laminar air",
        ],
        Era::Period => &[
            "wax-sealed letters and horsehair upholstery",
            "soot-softened brick",
            "hand-stitched wool and brass fittings",
        ],
    }
}

pub(crate) fn counterparts(era: Era) -> &'static [&'static str] {
    match era {
        Era::Contemporary => &["THE ROOMMATE", "THE DETECTIVE", "THE STRANGER"],
        Era::Futuristic => &["THE ARCHIVIST", "THE NAVIGATOR", "THE SYNTHETIC"],
        Era::Period => &["THE APPRENTICE", "THE MAGISTRATE", "THE WIDOW"],
    }
}

pub(crate) const SHOT_TYPES: &[&str] = &[
    "Wide establishing",
    "Medium two-shot",
    "Close-up",
    "Insert detail",
    "Tracking",
    "Over-the-shoulder",
    "Aerial",
    "Static tableau",
];

pub(crate) const SCENE_TIMES: &[&str] = &["DAWN", "DAY", "DUSK", "NIGHT"];

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_table_is_populated_for_every_dial() {
        for intensity in Intensity::iter() {
            assert!(!adjectives(intensity).is_empty());
            assert!(!registers(intensity).is_empty());
            assert!(!moods(intensity).is_empty());
            assert!(!stakes(intensity).is_empty());
            assert!(!movements(intensity).is_empty());
            assert!(!camera_treatments(intensity).is_empty());
            assert!(!lighting(intensity).is_empty());
        }
        for era in Era::iter() {
            assert!(!imagery(era).is_empty());
            assert!(!anchors(era).is_empty());
            assert!(!palettes(era).is_empty());
            assert!(!textures(era).is_empty());
            assert!(!counterparts(era).is_empty());
        }
        assert!(!SHOT_TYPES.is_empty());
        assert!(!SCENE_TIMES.is_empty());
    }

    #[test]
    fn pick_cycles_deterministically() {
        let table: &[&'static str] = &["one", "two", "three"];
        assert_eq!(pick(table, 0), "one");
        assert_eq!(pick(table, 4), "two");
        assert_eq!(pick(table, 4), pick(table, 4));
    }

    #[test]
    fn seed_is_stable_and_input_sensitive() {
        assert_eq!(seed("cartographer"), seed("cartographer"));
        assert_ne!(seed("cartographer"), seed("lighthouse"));
    }

    #[test]
    fn capitalize_uppercases_first_char_only() {
        assert_eq!(capitalize("orbital boulevards"), "Orbital boulevards");
        assert_eq!(capitalize(""), "");
    }
}
