//! Capability traits implemented by the rendering surface.
//!
//! The reducer only ever sees these, so its output can be checked against fakes.

use crate::effects::{Effect, Track};
use crate::geometry::Rect;
use crate::section::{Layout, Section};

/// Something that can play a single audio track.
pub trait AudioSink {
    fn play(&self);
    fn pause(&self);
    fn set_volume(&self, volume: f32);
    fn rewind(&self);
    fn is_paused(&self) -> bool;
}

/// Something with a position in the viewport.
pub trait ScrollTarget {
    fn bounding_rect(&self) -> Rect;
}

/// Lookup of the sinks backing each track. Missing tracks are skipped.
pub trait AudioDeck {
    type Sink: AudioSink;

    fn sink(&self, track: Track) -> Option<&Self::Sink>;
}

/// Run an audio effect against the deck.
///
/// Returns false for non-audio effects so the caller can handle them.
pub fn dispatch_audio<D: AudioDeck>(deck: &D, effect: &Effect) -> bool {
    let Some(track) = effect.track() else {
        return false;
    };
    let Some(sink) = deck.sink(track) else {
        log::debug!("[audio] no element for {:?}; skipping {:?}", track, effect);
        return true;
    };
    match effect {
        Effect::Play(_) => {
            if sink.is_paused() {
                sink.play();
            }
        }
        Effect::Pause(_) => {
            if !sink.is_paused() {
                sink.pause();
            }
        }
        Effect::SetVolume(_, v) => sink.set_volume(v.clamp(0.0, 1.0)),
        Effect::Rewind(_) => sink.rewind(),
        _ => {}
    }
    true
}

/// Capture a layout from whichever sections are present.
pub fn capture_layout<T: ScrollTarget>(sections: &[Option<T>], viewport_height: f64) -> Layout {
    let mut layout = Layout {
        viewport_height,
        ..Layout::default()
    };
    for section in Section::ALL {
        if let Some(Some(target)) = sections.get(section.index()) {
            layout.sections[section.index()] = Some(target.bounding_rect());
        }
    }
    layout
}
