use crate::constants::{BAND_HIGH_START, BAND_MID_START, SPHERE_OFF, SPHERE_ON};

/// Three-way classification of a level into half-open thirds.
///
/// The same primitive backs the displacement-driven sphere tri-state and the
/// speed threshold checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    Low,
    Mid,
    High,
}

impl Band {
    /// Classify a raw level: [0,33) is Low, [33,66) is Mid, everything else
    /// High. The catch-all arm absorbs out-of-domain values (negative, >100,
    /// missing upstream) into High; that fallback is load-bearing for the
    /// scene and must not become an error path.
    pub fn classify(value: i64) -> Band {
        if (0..BAND_MID_START).contains(&value) {
            Band::Low
        } else if (BAND_MID_START..BAND_HIGH_START).contains(&value) {
            Band::Mid
        } else {
            Band::High
        }
    }
}

/// Mutually exclusive sphere activation derived from displacement. Exactly
/// one field carries 250; the other two are 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SphereActivation {
    pub low: u16,
    pub mid: u16,
    pub high: u16,
}

impl SphereActivation {
    /// Derive the tri-state from a displacement level. A missing value takes
    /// the same route as an out-of-domain one and lands on High.
    pub fn from_displace(displace: Option<i64>) -> Self {
        match displace {
            Some(value) => Self::from_band(Band::classify(value)),
            None => Self::from_band(Band::High),
        }
    }

    pub fn from_band(band: Band) -> Self {
        let mut spheres = Self {
            low: SPHERE_OFF,
            mid: SPHERE_OFF,
            high: SPHERE_OFF,
        };
        match band {
            Band::Low => spheres.low = SPHERE_ON,
            Band::Mid => spheres.mid = SPHERE_ON,
            Band::High => spheres.high = SPHERE_ON,
        }
        spheres
    }

    /// Band currently marked active.
    pub fn active_band(&self) -> Band {
        if self.low == SPHERE_ON {
            Band::Low
        } else if self.mid == SPHERE_ON {
            Band::Mid
        } else {
            Band::High
        }
    }
}
