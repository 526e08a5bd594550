//! Parameter types exchanged with the profile store and the scene viewer.
//!
//! These types intentionally avoid referencing any transport or storage
//! APIs. The store and service crates persist and merge them; the external
//! scene consumes the serialized visual side under its wire field names.

use serde::{Deserialize, Serialize};

use crate::bucket::SphereActivation;
use crate::color::Rgb;

/// The twelve pitch classes an averaged listening key can take.
///
/// Discriminants follow the provider's key index convention, C = 0 through
/// B = 11. Labels parse case-sensitively; anything unrecognized folds to C,
/// the documented baseline, rather than failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PitchClass {
    #[default]
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// All pitch classes in key-index order.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Key index, C = 0 through B = 11.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pitch class for a provider key index; `None` outside 0..=11 (the
    /// provider reports -1 for an undetected key).
    pub fn from_index(index: i64) -> Option<PitchClass> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Parse a label, folding unknown input to C.
    pub fn parse_or_default(label: &str) -> PitchClass {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.label() == label)
            .unwrap_or_default()
    }
}

impl From<String> for PitchClass {
    fn from(label: String) -> Self {
        PitchClass::parse_or_default(&label)
    }
}

impl From<PitchClass> for String {
    fn from(pitch: PitchClass) -> Self {
        pitch.label().to_string()
    }
}

impl std::fmt::Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Persisted visual control values for one profile.
///
/// Levels live in 0..=100; out-of-range edits are dropped at the service
/// edge before they reach this struct. The three sphere fields are derived
/// from `displace` and refreshed on every read and write, so exactly one of
/// them carries 250 at any time. Field names serialize to the wire names the
/// scene viewer binds to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualParams {
    pub fresnel: u8,
    pub depth_dark_top: u8,
    pub depth_dark_bottom: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub noise: u8,
    pub displace: u8,
    pub sphere_low: u16,
    pub sphere_mid: u16,
    pub sphere_high: u16,
    pub speed: u8,
    pub normal: u8,
}

impl Default for VisualParams {
    fn default() -> Self {
        let mut params = Self {
            fresnel: 50,
            depth_dark_top: 50,
            depth_dark_bottom: 50,
            red: 33,
            green: 33,
            blue: 33,
            noise: 30,
            displace: 50,
            sphere_low: 0,
            sphere_mid: 0,
            sphere_high: 0,
            speed: 50,
            normal: 20,
        };
        params.refresh_spheres();
        params
    }
}

impl VisualParams {
    /// Recompute the sphere tri-state from the current displacement.
    pub fn refresh_spheres(&mut self) {
        let spheres = SphereActivation::from_displace(Some(i64::from(self.displace)));
        self.sphere_low = spheres.low;
        self.sphere_mid = spheres.mid;
        self.sphere_high = spheres.high;
    }

    pub fn set_color(&mut self, rgb: Rgb) {
        self.red = rgb.red;
        self.green = rgb.green;
        self.blue = rgb.blue;
    }

    pub fn spheres(&self) -> SphereActivation {
        SphereActivation {
            low: self.sphere_low,
            mid: self.sphere_mid,
            high: self.sphere_high,
        }
    }
}

/// Ephemeral music-taste inputs driving the visual mapping. Never persisted;
/// the mapper consumes them together with a change event and the prior
/// visual record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasteParams {
    pub instrumentalness: u8,
    pub popularity: u8,
    pub valence: u8,
    pub artist_diversity: u8,
    pub energy: u8,
    pub internal_coherence: u8,
    pub average_key: PitchClass,
}

impl Default for TasteParams {
    fn default() -> Self {
        Self {
            instrumentalness: 50,
            popularity: 50,
            valence: 50,
            artist_diversity: 50,
            energy: 50,
            internal_coherence: 50,
            average_key: PitchClass::C,
        }
    }
}
