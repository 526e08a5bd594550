//! The taste-to-visual mapper: one changed slider triggers exactly one
//! mapping over the prior visual record.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::color;
use crate::constants::NORMAL_MAX;
use crate::params::{PitchClass, TasteParams, VisualParams};

/// A single taste-slider edit: the field that changed and its new value.
///
/// The mapper matches on this exhaustively, so adding a taste field without
/// deciding its visual mapping fails to compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TasteChange {
    Instrumentalness(u8),
    Popularity(u8),
    Valence(u8),
    ArtistDiversity(u8),
    Energy(u8),
    InternalCoherence(u8),
    AverageKey(PitchClass),
}

impl TasteChange {
    /// Field label as the taste sliders name it.
    pub fn field(&self) -> &'static str {
        match self {
            TasteChange::Instrumentalness(_) => "instrumentalness",
            TasteChange::Popularity(_) => "popularity",
            TasteChange::Valence(_) => "valence",
            TasteChange::ArtistDiversity(_) => "artistDiversity",
            TasteChange::Energy(_) => "energy",
            TasteChange::InternalCoherence(_) => "internalCoherence",
            TasteChange::AverageKey(_) => "averageKey",
        }
    }
}

impl TasteParams {
    /// Record an edit on the taste side so later color syntheses see it.
    pub fn record(&mut self, change: TasteChange) {
        match change {
            TasteChange::Instrumentalness(v) => self.instrumentalness = v,
            TasteChange::Popularity(v) => self.popularity = v,
            TasteChange::Valence(v) => self.valence = v,
            TasteChange::ArtistDiversity(v) => self.artist_diversity = v,
            TasteChange::Energy(v) => self.energy = v,
            TasteChange::InternalCoherence(v) => self.internal_coherence = v,
            TasteChange::AverageKey(k) => self.average_key = k,
        }
    }
}

/// Translates taste edits into visual parameter records.
///
/// Owns the randomness used by color synthesis; construct with a fixed seed
/// for reproducible output or from entropy in production.
pub struct TasteMapper {
    rng: StdRng,
}

impl TasteMapper {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Apply one taste edit to a visual record.
    ///
    /// Only the changed field's mapping runs; every other visual field
    /// passes through from `current`. Color-consuming fields (popularity,
    /// average key) re-synthesize the RGB triple from the taste context.
    /// The sphere tri-state is recomputed from the resulting displacement,
    /// so it is never stale relative to it.
    pub fn apply(
        &mut self,
        current: &VisualParams,
        taste: &TasteParams,
        change: TasteChange,
    ) -> VisualParams {
        let mut next = current.clone();
        match change {
            TasteChange::Instrumentalness(v) => next.fresnel = cap(v),
            TasteChange::ArtistDiversity(v) => next.displace = cap(v),
            TasteChange::Energy(v) => next.speed = cap(v),
            TasteChange::InternalCoherence(v) => next.normal = rescale_normal(v),
            TasteChange::Valence(v) => {
                // One inverse value fans out to the three darkening fields.
                let inverted = 100 - cap(v);
                next.noise = inverted;
                next.depth_dark_bottom = inverted;
                next.depth_dark_top = inverted;
            }
            TasteChange::AverageKey(key) => {
                let rgb = color::synthesize(&mut self.rng, taste.valence, key, taste.popularity);
                next.set_color(rgb);
            }
            TasteChange::Popularity(v) => {
                let rgb =
                    color::synthesize(&mut self.rng, taste.valence, taste.average_key, cap(v));
                next.set_color(rgb);
            }
        }
        next.refresh_spheres();
        log::debug!("taste mapping applied: {}", change.field());
        next
    }
}

fn cap(value: u8) -> u8 {
    value.min(100)
}

fn rescale_normal(value: u8) -> u8 {
    (f64::from(cap(value)) / 100.0 * NORMAL_MAX).round() as u8
}
