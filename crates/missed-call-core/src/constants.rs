// Default tuning shared by the core mapper and the web frontend.

// Ringtone levels
pub const RINGTONE_BASE_VOLUME: f32 = 0.3; // section 1, faded out across section 2
pub const CHOICE_RINGTONE_VOLUME: f32 = 0.2; // quieter ring while the choice is pending

// Ambient cross-fade
pub const AMBIENT_PEAK_VOLUME: f32 = 0.8; // volume of a track with the pointer at its edge

// Hover zones jump the pointer to these fractions of the choice section width
pub const DECLINE_HOVER_FRACTION: f32 = 0.2;
pub const ACCEPT_HOVER_FRACTION: f32 = 0.8;

// Choreography delays (milliseconds)
pub const LANDING_FADE_MS: u32 = 800;
pub const CHOICE_SCROLL_DELAY_MS: u32 = 500;
pub const CHOICE_SETTLE_DELAY_MS: u32 = 2000;
pub const RELEASE_FADE_MS: u32 = 5000;

pub const RELEASE_MESSAGE: &str = "You let it go.";

pub const SECTION_COUNT: usize = 5;
