// Sound and view tuning constants

// Boop pitch sweep (Hz) and how long it takes (seconds)
pub const BOOP_START_HZ: f32 = 440.0;
pub const BOOP_END_HZ: f32 = 880.0;
pub const BOOP_SWEEP_SEC: f64 = 0.1;

// Gain envelope; exponential ramps cannot reach 0 so the tail stops just above it
pub const BOOP_START_GAIN: f32 = 0.7;
pub const BOOP_END_GAIN: f32 = 0.01;
pub const BOOP_DURATION_SEC: f64 = 0.3;

// View names passed to the owner's set_active_view callback
pub const VIEW_VILLAGE: &str = "village";
pub const VIEW_BUILD: &str = "build";
