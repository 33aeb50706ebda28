//! Output cardinality profiles keyed by target length.

use cinemuse_core::TargetLength;

/// Per-section output counts for one target length.
///
/// Every count is monotone across `Short <= Feature <= Series`, so scaling
/// the format up never shrinks any section.
///
/// # Examples
///
/// ```
/// use cinemuse_core::TargetLength;
/// use cinemuse_engine::Pacing;
///
/// let short = Pacing::for_length(TargetLength::Short);
/// let series = Pacing::for_length(TargetLength::Series);
/// assert!(series.shots > short.shots);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Story idea count
    pub story_ideas: usize,
    /// Scene beat count
    pub scenes: usize,
    /// Storyboard frame count
    pub frames: usize,
    /// Shot table row count
    pub shots: usize,
    /// Voiceover paragraph count
    pub voiceover_paragraphs: usize,
    /// Poster prompt count
    pub poster_prompts: usize,
    /// Video prompt count
    pub video_prompts: usize,
    /// Social title count
    pub social_titles: usize,
    /// Social caption count
    pub social_captions: usize,
    /// Social tag count
    pub social_tags: usize,
}

impl Pacing {
    /// The cardinality profile for a target length.
    pub fn for_length(length: TargetLength) -> Self {
        match length {
            TargetLength::Short => Self {
                story_ideas: 2,
                scenes: 2,
                frames: 3,
                shots: 4,
                voiceover_paragraphs: 2,
                poster_prompts: 2,
                video_prompts: 2,
                social_titles: 3,
                social_captions: 2,
                social_tags: 6,
            },
            TargetLength::Feature => Self {
                story_ideas: 3,
                scenes: 3,
                frames: 4,
                shots: 6,
                voiceover_paragraphs: 3,
                poster_prompts: 3,
                video_prompts: 3,
                social_titles: 4,
                social_captions: 3,
                social_tags: 8,
            },
            TargetLength::Series => Self {
                story_ideas: 4,
                scenes: 4,
                frames: 6,
                shots: 8,
                voiceover_paragraphs: 4,
                poster_prompts: 4,
                video_prompts: 4,
                social_titles: 5,
                social_captions: 4,
                social_tags: 10,
            },
        }
    }
}
