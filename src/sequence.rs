//! Hit sequence generation — turns a rudiment, subdivision and bar count
//! into the ordered list of strokes that the layout engine places.
//!
//! Hands repeat cyclically over the normalized sticking; accents land on
//! every `accent_every`-th hit starting at hit 0. Nothing here fails:
//! unknown rudiments, empty or malformed stickings and out-of-range bars all default.

use crate::config::{RenderConfig, BEATS_PER_BAR, MAX_BARS, MIN_BARS};
use crate::model::{Hand, Hit, RudimentDefinition, Subdivision};
use crate::rudiments::{parse_sticking, RudimentDictionary};

/// Generate the hit sequence for `rudiment_key`.
///
/// `start_hand` is accepted for callers that want to honor it, but the
/// cyclic assignment always begins at the first stroke of the pattern.
/// Use `rudiments::rotate_sticking` to re-align a pattern first.
pub fn generate(
    dictionary: &RudimentDictionary,
    rudiment_key: &str,
    subdivision: Subdivision,
    bars: i64,
    _start_hand: Hand,
) -> Vec<Hit> {
    let rudiment = dictionary.lookup(rudiment_key);
    let total_beats = BEATS_PER_BAR * bars.clamp(MIN_BARS, MAX_BARS) as usize;
    let hits = build_hits(rudiment, subdivision, total_beats);
    log::debug!(
        "Generated {} hits for '{}' ({} beats, {}ths)",
        hits.len(),
        rudiment.name,
        total_beats,
        subdivision.as_str()
    );
    hits
}

/// Generate the hit sequence described by a render configuration.
pub fn generate_for(dictionary: &RudimentDictionary, config: &RenderConfig) -> Vec<Hit> {
    generate(
        dictionary,
        &config.rudiment_key,
        config.subdivision,
        config.bars,
        config.start_hand,
    )
}

/// Expand one rudiment over `total_beats` beats.
pub fn build_hits(
    rudiment: &RudimentDefinition,
    subdivision: Subdivision,
    total_beats: usize,
) -> Vec<Hit> {
    let pattern = parse_sticking(&rudiment.sticking);
    let accent_every = rudiment.accent_every as usize;
    let duration = subdivision.duration();

    (0..total_beats * subdivision.slots_per_beat())
        .map(|i| Hit {
            hand: pattern[i % pattern.len()],
            duration,
            accent: accent_every > 0 && i % accent_every == 0,
        })
        .collect()
}
