//! Reduction of raw per-track audio features into the taste parameter set.
//!
//! The music-data collaborator reports per-track features; this module folds
//! a track list into the bounded sliders the mapper consumes. All outputs
//! land in 0..=100.

use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};
use taste_core::{PitchClass, TasteParams};

/// Raw per-track features as the provider reports them.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackFeatures {
    /// Pitch-class index 0..=11; -1 when the provider could not detect one.
    pub key: i64,
    /// Confidence the track has no vocals, 0.0..=1.0.
    pub instrumentalness: f64,
    /// Emotional positivity, 0.0..=1.0.
    pub valence: f64,
    /// Perceived intensity, 0.0..=1.0.
    pub energy: f64,
    /// Provider popularity score, 0..=100.
    pub popularity: u8,
    pub artist_id: String,
}

/// Fold a track list into taste parameters; `None` for an empty list.
///
/// Means for the unit-interval features are rescaled to levels. Artist
/// diversity is unique artists over track count. The average key is the
/// modal pitch class (undetected keys skipped, ties to the lowest class,
/// no detected key at all reads as C). Internal coherence is 100 minus the
/// mean absolute deviation of valence from its mean: a list that clusters
/// tightly scores high.
pub fn aggregate_taste(tracks: &[TrackFeatures]) -> Option<TasteParams> {
    if tracks.is_empty() {
        return None;
    }
    let count = tracks.len() as f64;

    let instrumentalness_mean =
        tracks.iter().map(|t| t.instrumentalness).sum::<f64>() / count * 100.0;
    let valence_mean = tracks.iter().map(|t| t.valence).sum::<f64>() / count * 100.0;
    let energy_mean = tracks.iter().map(|t| t.energy).sum::<f64>() / count * 100.0;
    let popularity_mean = tracks.iter().map(|t| f64::from(t.popularity)).sum::<f64>() / count;

    let artists: FnvHashSet<&str> = tracks.iter().map(|t| t.artist_id.as_str()).collect();
    let diversity = artists.len() as f64 / count * 100.0;

    let mut histogram = [0usize; 12];
    for track in tracks {
        if let Some(pitch) = PitchClass::from_index(track.key) {
            histogram[pitch.index()] += 1;
        }
    }
    let mut average_key = PitchClass::C;
    let mut best = 0usize;
    for (index, &hits) in histogram.iter().enumerate() {
        if hits > best {
            best = hits;
            average_key = PitchClass::ALL[index];
        }
    }

    let dispersion = tracks
        .iter()
        .map(|t| (t.valence * 100.0 - valence_mean).abs())
        .sum::<f64>()
        / count;
    let coherence = 100.0 - dispersion;

    Some(TasteParams {
        instrumentalness: level(instrumentalness_mean),
        popularity: level(popularity_mean),
        valence: level(valence_mean),
        artist_diversity: level(diversity),
        energy: level(energy_mean),
        internal_coherence: level(coherence),
        average_key,
    })
}

fn level(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
