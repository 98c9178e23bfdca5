// Shared visual/physics tuning constants used by the front-end and the
// scene mapper.

// Control surface ranges (slider bounds)
pub const OMEGA_MIN: f64 = 0.5; // rad/s
pub const OMEGA_MAX: f64 = 5.0;
pub const RADIUS_MIN: f64 = 50.0; // display units
pub const RADIUS_MAX: f64 = 180.0;

// Startup defaults
pub const DEFAULT_OMEGA: f64 = 2.0;
pub const DEFAULT_RADIUS: f64 = 120.0;

// Vector glyph sizing
pub const VELOCITY_GLYPH_SCALE: f64 = 0.4; // glyph length per unit of r*omega
pub const ACCEL_GLYPH_SCALE: f64 = 0.15; // glyph length per unit of r*omega^2
pub const GLYPH_MAX_RATIO: f64 = 1.5; // hard cap as a multiple of the orbit radius

// Waveform sampling window
pub const WAVEFORM_DURATION: f64 = 8.0; // trailing look-back, seconds
pub const WAVEFORM_STEP: f64 = 0.05; // sample spacing, seconds

// Scene viewbox (view space, y-down)
pub const VIEW_WIDTH: f32 = 600.0;
pub const VIEW_HEIGHT: f32 = 550.0;

// Color palette, RGBA, slate/cyan lab theme
pub const COLOR_BACKGROUND: [f32; 4] = [0.008, 0.024, 0.090, 1.0];
pub const COLOR_PARTICLE: [f32; 4] = [0.133, 0.827, 0.933, 1.0]; // cyan
pub const COLOR_RADIUS: [f32; 4] = [0.580, 0.639, 0.722, 1.0]; // slate
pub const COLOR_VELOCITY: [f32; 4] = [0.980, 0.800, 0.082, 1.0]; // yellow
pub const COLOR_ACCELERATION: [f32; 4] = [0.957, 0.447, 0.714, 1.0]; // pink
pub const COLOR_SHADOW: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const COLOR_SCREEN: [f32; 4] = [0.118, 0.161, 0.231, 1.0]; // dark blue
pub const COLOR_LIGHT_RAY: [f32; 4] = [0.133, 0.827, 0.933, 0.15];
pub const COLOR_WAVEFORM: [f32; 4] = [0.133, 0.827, 0.933, 0.85];
