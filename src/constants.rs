// DOM-facing names used by the web frontend.

// Canvas context kind requested from the orb canvas
pub const CONTEXT_2D: &str = "2d";

// Window event that triggers a surface resize
pub const RESIZE_EVENT: &str = "resize";

// Preset used when the page does not name one
pub const DEFAULT_PRESET: &str = "content";

// Full turn for `arc`, in radians
pub const FULL_CIRCLE: f64 = std::f64::consts::TAU;
