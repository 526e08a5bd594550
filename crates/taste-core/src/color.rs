//! Color synthesis: distribute a valence-controlled budget across the three
//! channels according to the listening key, with popularity-controlled
//! jitter.

use rand::Rng;

use crate::constants::{COLOR_BUDGET_MAX, COLOR_FALLBACK, COLOR_JITTER_SPAN, LEVEL_MAX};
use crate::params::PitchClass;

/// Integer RGB triple in the 0..=100 level domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

// Base channel ratios per key: a 12-step hue wheel at 30-degree intervals,
// scaled to the level domain. Indexed by key index (C = 0).
const KEY_BASE_TRIPLES: [[f64; 3]; 12] = [
    [100.0, 0.0, 0.0],   // C
    [100.0, 50.0, 0.0],  // C#
    [100.0, 100.0, 0.0], // D
    [50.0, 100.0, 0.0],  // D#
    [0.0, 100.0, 0.0],   // E
    [0.0, 100.0, 50.0],  // F
    [0.0, 100.0, 100.0], // F#
    [0.0, 50.0, 100.0],  // G
    [0.0, 0.0, 100.0],   // G#
    [50.0, 0.0, 100.0],  // A
    [100.0, 0.0, 100.0], // A#
    [100.0, 0.0, 50.0],  // B
];

/// Synthesize a color from the taste triple.
///
/// The summed channel budget is `(100 - valence) / 100 * 300`: positive
/// valence darkens the aggregate color. The key's base triple fixes the
/// channel ratio; popularity controls how far independent jitter may pull
/// each channel off that ratio before the triple is renormalized back onto
/// the budget. Rounding and the final per-channel clamp to 100 run last, so
/// a renormalized channel can lose budget at the clamp.
///
/// Total over its inputs: degenerate arithmetic (a collapsed budget under
/// jitter, a zero-sum base) yields the `{33,33,33}` guard triple instead of
/// an error. Output depends on `rng` whenever popularity < 100, so callers
/// needing reproducibility seed it.
pub fn synthesize<R: Rng>(rng: &mut R, valence: u8, key: PitchClass, popularity: u8) -> Rgb {
    let valence = i64::from(valence).clamp(0, LEVEL_MAX) as f64;
    let popularity = i64::from(popularity).clamp(0, LEVEL_MAX) as f64;
    let budget = (100.0 - valence) / 100.0 * COLOR_BUDGET_MAX;

    // At full popularity the jitter spacing collapses; split evenly instead
    // of dividing by it.
    if popularity >= 100.0 {
        let per_channel = budget / 3.0;
        return finish([per_channel; 3]);
    }

    let base = KEY_BASE_TRIPLES[key.index()];
    let base_sum: f64 = base.iter().sum();
    if base_sum <= f64::EPSILON {
        return fallback();
    }
    let scale = budget / base_sum;

    let jitter_span = budget * COLOR_JITTER_SPAN * (1.0 - popularity / 100.0);
    let mut channels = [0.0f64; 3];
    for (channel, base_value) in channels.iter_mut().zip(base.iter()) {
        *channel = base_value * scale + rng.gen_range(-jitter_span..=jitter_span);
    }

    // Pull the jittered triple back onto the budget.
    let sum: f64 = channels.iter().sum();
    if !sum.is_finite() || sum <= f64::EPSILON {
        return fallback();
    }
    let renormalize = budget / sum;
    for channel in channels.iter_mut() {
        *channel *= renormalize;
    }
    finish(channels)
}

fn finish(channels: [f64; 3]) -> Rgb {
    let level = |value: f64| value.round().clamp(0.0, 100.0) as u8;
    Rgb {
        red: level(channels[0]),
        green: level(channels[1]),
        blue: level(channels[2]),
    }
}

fn fallback() -> Rgb {
    Rgb {
        red: COLOR_FALLBACK[0],
        green: COLOR_FALLBACK[1],
        blue: COLOR_FALLBACK[2],
    }
}
