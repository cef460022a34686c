//! Runtime tuning: volumes and choreography delays, with string overrides.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("unknown tuning key `{0}`")]
    UnknownKey(String),
    #[error("`{key}` expects a number, got `{value}`")]
    InvalidNumber { key: String, value: String },
    #[error("`{key}` expects true/false, got `{value}`")]
    InvalidFlag { key: String, value: String },
    #[error("`{key}` = {value} is outside 0..=1")]
    VolumeOutOfRange { key: String, value: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tuning {
    pub ringtone_volume: f32,
    pub choice_ringtone_volume: f32,
    pub ambient_peak: f32,
    pub landing_fade_ms: u32,
    pub choice_scroll_delay_ms: u32,
    pub choice_settle_delay_ms: u32,
    pub release_fade_ms: u32,
    /// Keep the ringtone playing at volume 0 once faded out instead of pausing it.
    pub ringtone_rests_silent: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ringtone_volume: RINGTONE_BASE_VOLUME,
            choice_ringtone_volume: CHOICE_RINGTONE_VOLUME,
            ambient_peak: AMBIENT_PEAK_VOLUME,
            landing_fade_ms: LANDING_FADE_MS,
            choice_scroll_delay_ms: CHOICE_SCROLL_DELAY_MS,
            choice_settle_delay_ms: CHOICE_SETTLE_DELAY_MS,
            release_fade_ms: RELEASE_FADE_MS,
            ringtone_rests_silent: true,
        }
    }
}

impl Tuning {
    /// Keys accepted by [`Tuning::apply`], matching the `data-*` attribute names.
    pub const KEYS: [&'static str; 8] = [
        "ringtone-volume",
        "choice-ringtone-volume",
        "ambient-peak",
        "landing-fade-ms",
        "choice-scroll-delay-ms",
        "choice-settle-delay-ms",
        "release-fade-ms",
        "ringtone-rests-silent",
    ];

    /// Apply one override. On error the tuning is left unchanged.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), TuningError> {
        let value = value.trim();
        match key {
            "ringtone-volume" => self.ringtone_volume = parse_volume(key, value)?,
            "choice-ringtone-volume" => self.choice_ringtone_volume = parse_volume(key, value)?,
            "ambient-peak" => self.ambient_peak = parse_volume(key, value)?,
            "landing-fade-ms" => self.landing_fade_ms = parse_ms(key, value)?,
            "choice-scroll-delay-ms" => self.choice_scroll_delay_ms = parse_ms(key, value)?,
            "choice-settle-delay-ms" => self.choice_settle_delay_ms = parse_ms(key, value)?,
            "release-fade-ms" => self.release_fade_ms = parse_ms(key, value)?,
            "ringtone-rests-silent" => self.ringtone_rests_silent = parse_flag(key, value)?,
            _ => return Err(TuningError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Build from defaults plus overrides, skipping (and logging) invalid ones.
    pub fn with_overrides<'a>(overrides: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut tuning = Tuning::default();
        for (key, value) in overrides {
            match tuning.apply(key, value) {
                Ok(()) => log::info!("[config] {} = {}", key, value),
                Err(e) => log::warn!("[config] ignoring override: {}", e),
            }
        }
        tuning
    }
}

fn parse_volume(key: &str, value: &str) -> Result<f32, TuningError> {
    let v: f32 = value.parse().map_err(|_| TuningError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })?;
    if !(0.0..=1.0).contains(&v) {
        return Err(TuningError::VolumeOutOfRange {
            key: key.to_string(),
            value: v,
        });
    }
    Ok(v)
}

fn parse_ms(key: &str, value: &str) -> Result<u32, TuningError> {
    value.parse().map_err(|_| TuningError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool, TuningError> {
    match value {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(TuningError::InvalidFlag {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
