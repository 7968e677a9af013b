/// Fade and playback tuning constants.
///
/// These constants express intended behavior (step size, tick spacing,
/// listening level) and keep magic numbers out of the controller.
// Volume change applied per fade tick
pub const FADE_STEP: f64 = 0.05;

// Tick spacing (milliseconds)
pub const FADE_OUT_TICK_MS: u64 = 50;
pub const FADE_IN_TICK_MS: u64 = 100;

// Steady-state listening volume once a track has faded in
pub const TARGET_VOLUME: f64 = 0.5;

// Media element volume bounds
pub const VOLUME_MIN: f64 = 0.0;
pub const VOLUME_MAX: f64 = 1.0;

// Ambient tracks, one per atmosphere mode
pub const SILENCE_AUDIO_URL: &str = "https://cdn.pixabay.com/download/audio/2022/03/24/audio_165283d565.mp3?filename=deep-meditation-om-165283d565.mp3"; // ambient drone
pub const WIND_AUDIO_URL: &str = "https://cdn.pixabay.com/download/audio/2022/02/07/audio_5c06243749.mp3?filename=wind-blowing-sfx-12809.mp3";
pub const OCEAN_AUDIO_URL: &str = "https://cdn.pixabay.com/download/audio/2021/08/09/audio_0084201d9a.mp3?filename=ocean-waves-112906.mp3";

// Base sphere look, shared by every mode
pub const BASE_COLOR: &str = "#e2e8f0"; // silvery white
pub const BASE_DISTORT: f32 = 0.3;
pub const BASE_SPEED: f32 = 1.5;
pub const BASE_ROUGHNESS: f32 = 0.1;
pub const BASE_METALNESS: f32 = 0.8;

// DOM hooks
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const HIDDEN_CLASS: &str = "hidden";
pub const MODE_BUTTON_SELECTOR: &str = "[data-mode]";
pub const MODE_ATTRIBUTE: &str = "data-mode";
pub const ACTIVE_CLASS: &str = "active";
