//! Side effects produced by the UI reducer and carried out by a frontend.

use crate::mapping::Gradient;
use crate::section::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Track {
    Ringtone,
    Birds,
    Thunder,
    Whoosh,
}

impl Track {
    pub const ALL: [Track; 4] = [Track::Ringtone, Track::Birds, Track::Thunder, Track::Whoosh];

    /// Element id of the `<audio>` tag carrying the track.
    pub fn element_id(self) -> &'static str {
        match self {
            Track::Ringtone => "ringtone",
            Track::Birds => "birds-chirp",
            Track::Thunder => "thunder-static",
            Track::Whoosh => "whoosh",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Start the track if it is not already playing.
    Play(Track),
    Pause(Track),
    SetVolume(Track, f32),
    Rewind(Track),
    HighlightNav(Section),
    /// Toggle the shaking phone in the choice section.
    Ringing(bool),
    ChoiceBackground(Gradient),
    SoundIcon { on: bool },
}

impl Effect {
    /// The audio track this effect touches, if any.
    pub fn track(&self) -> Option<Track> {
        match self {
            Effect::Play(t) | Effect::Pause(t) | Effect::SetVolume(t, _) | Effect::Rewind(t) => {
                Some(*t)
            }
            _ => None,
        }
    }
}

/// Text shown on the sound toggle.
#[inline]
pub fn sound_icon(on: bool) -> &'static str {
    if on {
        "🔊"
    } else {
        "🔇"
    }
}
