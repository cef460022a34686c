//! Page-wide UI state and the handlers that advance it.
//!
//! Every handler takes the current geometry or input, updates the state and pushes the
//! resulting side effects into `out`. Nothing here touches the document directly.

use crate::choreography::{release_note, ChoiceOutcome};
use crate::effects::{Effect, Track};
use crate::geometry::Rect;
use crate::mapping::{fade_volume, pointer_intensity, scroll_fraction, CrossFade, Gradient};
use crate::section::{detect_section, Layout, RingtoneCue, Section};
use crate::tuning::Tuning;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackState {
    /// Set by the first user gesture; never cleared.
    pub audio_enabled: bool,
    pub sound_on: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            audio_enabled: false,
            sound_on: true,
        }
    }
}

impl PlaybackState {
    #[inline]
    pub fn audible(&self) -> bool {
        self.audio_enabled && self.sound_on
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub playback: PlaybackState,
    pub section: Section,
    /// Pointer tracking is live in the choice section.
    pub in_choice: bool,
    /// Last computed fade between the first two sections.
    pub fade_fraction: f32,
    pub tuning: Tuning,
}

impl UiState {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            ..Self::default()
        }
    }

    /// Effects that bring a fresh page in line with the initial state.
    pub fn initial_effects(&self, out: &mut Vec<Effect>) {
        out.push(Effect::HighlightNav(self.section));
        out.push(Effect::ChoiceBackground(Gradient::NEUTRAL));
        out.push(Effect::SetVolume(Track::Birds, 0.0));
        out.push(Effect::SetVolume(Track::Thunder, 0.0));
    }

    /// First user gesture: audio may play from now on.
    pub fn unlock_audio(&mut self, out: &mut Vec<Effect>) {
        if self.playback.audio_enabled {
            return;
        }
        self.playback.audio_enabled = true;
        log::info!("[audio] unlocked");
        if self.playback.sound_on {
            self.resume_section_audio(out);
        }
    }

    pub fn toggle_sound(&mut self, out: &mut Vec<Effect>) {
        self.playback.sound_on = !self.playback.sound_on;
        out.push(Effect::SoundIcon {
            on: self.playback.sound_on,
        });
        if !self.playback.sound_on {
            for track in Track::ALL {
                out.push(Effect::Pause(track));
            }
        } else if self.playback.audio_enabled {
            self.resume_section_audio(out);
        }
    }

    /// Restart whatever the current section plays by itself.
    ///
    /// Ambient tracks are left alone; they come back with the next pointer move.
    fn resume_section_audio(&self, out: &mut Vec<Effect>) {
        match self.section.ringtone_cue() {
            RingtoneCue::Fade => {
                let volume = fade_volume(self.tuning.ringtone_volume, self.fade_fraction);
                out.push(Effect::SetVolume(Track::Ringtone, volume));
                if volume > 0.0 {
                    out.push(Effect::Play(Track::Ringtone));
                }
            }
            RingtoneCue::Ring => {
                out.push(Effect::SetVolume(
                    Track::Ringtone,
                    self.tuning.choice_ringtone_volume,
                ));
                out.push(Effect::Play(Track::Ringtone));
            }
            RingtoneCue::Silent => {}
        }
    }

    pub fn on_scroll(&mut self, layout: &Layout, out: &mut Vec<Effect>) {
        let section = detect_section(layout);
        if section != self.section {
            self.enter_section(section, out);
        }

        let choice_visible = layout
            .rect(Section::Choice)
            .map(|r| r.intersects_viewport(layout.viewport_height))
            .unwrap_or(false);
        let tracking = choice_visible && self.section == Section::Choice;
        if tracking != self.in_choice {
            self.in_choice = tracking;
            if !tracking {
                self.reset_choice(out);
            }
        }

        if let (Some(a), Some(b)) = (layout.rect(Section::Call), layout.rect(Section::Temptation))
        {
            self.fade_fraction = scroll_fraction(a, b, layout.viewport_height);
        }
        if self.section.ringtone_cue() == RingtoneCue::Fade && self.playback.audible() {
            self.apply_ringtone_fade(out);
        }
    }

    fn enter_section(&mut self, section: Section, out: &mut Vec<Effect>) {
        log::debug!(
            "[scroll] section {} -> {}",
            self.section.number(),
            section.number()
        );
        self.section = section;
        out.push(Effect::HighlightNav(section));
        match section.ringtone_cue() {
            RingtoneCue::Fade => out.push(Effect::Ringing(false)),
            RingtoneCue::Ring => {
                if self.playback.audible() {
                    out.push(Effect::SetVolume(
                        Track::Ringtone,
                        self.tuning.choice_ringtone_volume,
                    ));
                    out.push(Effect::Play(Track::Ringtone));
                }
                out.push(Effect::Ringing(true));
            }
            RingtoneCue::Silent => {
                out.push(Effect::Pause(Track::Ringtone));
                out.push(Effect::Ringing(false));
            }
        }
    }

    fn apply_ringtone_fade(&self, out: &mut Vec<Effect>) {
        let volume = fade_volume(self.tuning.ringtone_volume, self.fade_fraction);
        out.push(Effect::SetVolume(Track::Ringtone, volume));
        if volume > 0.0 {
            out.push(Effect::Play(Track::Ringtone));
        } else if !self.tuning.ringtone_rests_silent {
            out.push(Effect::Pause(Track::Ringtone));
        }
    }

    /// Pointer moved to `pointer_x` over the choice section at `section`.
    pub fn on_pointer(&mut self, pointer_x: f64, section: &Rect, out: &mut Vec<Effect>) {
        if !self.in_choice {
            return;
        }
        let Some(intensity) = pointer_intensity(pointer_x, section) else {
            return;
        };
        self.apply_intensity(intensity, out);
    }

    /// Pointer entered one of the two hover zones.
    pub fn on_hover(&mut self, side: ChoiceOutcome, section: &Rect, out: &mut Vec<Effect>) {
        self.on_pointer(section.x_at(side.hover_fraction()), section, out);
    }

    /// A choice button was pressed: snap the gradient and audio to that side.
    pub fn choose(&mut self, outcome: ChoiceOutcome, out: &mut Vec<Effect>) {
        log::info!("[choice] {:?}", outcome);
        self.apply_intensity(outcome.pointer_fraction(), out);
    }

    fn apply_intensity(&self, intensity: f32, out: &mut Vec<Effect>) {
        out.push(Effect::ChoiceBackground(Gradient::for_intensity(intensity)));
        if !self.playback.audible() {
            return;
        }
        let fade = CrossFade::for_intensity(intensity, self.tuning.ambient_peak);
        let (live, live_volume, quiet) = if CrossFade::birds_side(intensity) {
            (Track::Birds, fade.birds, Track::Thunder)
        } else {
            (Track::Thunder, fade.thunder, Track::Birds)
        };
        out.push(Effect::Play(live));
        out.push(Effect::SetVolume(live, live_volume));
        self.silence(quiet, out);
    }

    /// Neutral gradient with both ambient tracks stopped.
    pub fn reset_choice(&self, out: &mut Vec<Effect>) {
        out.push(Effect::ChoiceBackground(Gradient::NEUTRAL));
        self.silence(Track::Thunder, out);
        self.silence(Track::Birds, out);
    }

    /// Drop a track to zero and pause it.
    pub fn silence(&self, track: Track, out: &mut Vec<Effect>) {
        out.push(Effect::SetVolume(track, 0.0));
        out.push(Effect::Pause(track));
    }

    /// Visitor submitted the release input. Returns the accepted note, if any.
    pub fn let_go<'a>(&self, input: &'a str, out: &mut Vec<Effect>) -> Option<&'a str> {
        let note = release_note(input)?;
        if self.playback.audible() {
            out.push(Effect::Rewind(Track::Whoosh));
            out.push(Effect::Play(Track::Whoosh));
        }
        Some(note)
    }
}
