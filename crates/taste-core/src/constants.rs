// Shared domain and mapping constants used by the core and the profile
// service.

// Level domain
pub const LEVEL_MAX: i64 = 100; // inclusive upper bound of every slider-style level

// Band thresholds (half-open thirds over the level domain)
pub const BAND_MID_START: i64 = 33;
pub const BAND_HIGH_START: i64 = 66;

// Sphere tri-state
pub const SPHERE_ON: u16 = 250; // value the scene expects on the active band
pub const SPHERE_OFF: u16 = 0;

// Color synthesis
pub const COLOR_BUDGET_MAX: f64 = 300.0; // summed channel budget at valence 0
pub const COLOR_JITTER_SPAN: f64 = 0.3; // budget fraction jittered at popularity 0
pub const COLOR_FALLBACK: [u8; 3] = [33, 33, 33]; // guard triple on degenerate arithmetic

// Surface normal mapping
pub const NORMAL_MAX: f64 = 30.0; // internal coherence rescales into 0..=30
