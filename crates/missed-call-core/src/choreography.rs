//! Delayed multi-step transitions: the choice buttons and the release note.

use crate::constants::{ACCEPT_HOVER_FRACTION, DECLINE_HOVER_FRACTION};
use crate::effects::Track;
use crate::section::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// Let the call go and move on to the release.
    Decline,
    /// Pick up and fall back into the past.
    Accept,
}

impl ChoiceOutcome {
    /// Pointer fraction the section jumps to when the button is pressed.
    pub fn pointer_fraction(self) -> f32 {
        match self {
            ChoiceOutcome::Decline => 0.0,
            ChoiceOutcome::Accept => 1.0,
        }
    }

    /// Pointer fraction used when hovering this outcome's side of the section.
    pub fn hover_fraction(self) -> f32 {
        match self {
            ChoiceOutcome::Decline => DECLINE_HOVER_FRACTION,
            ChoiceOutcome::Accept => ACCEPT_HOVER_FRACTION,
        }
    }

    /// Section scrolled to once the button press has sunk in.
    pub fn destination(self) -> Section {
        match self {
            ChoiceOutcome::Decline => Section::Release,
            ChoiceOutcome::Accept => Section::Temptation,
        }
    }

    /// Ambient track silenced after arriving at the destination.
    pub fn lingering_track(self) -> Track {
        match self {
            ChoiceOutcome::Decline => Track::Birds,
            ChoiceOutcome::Accept => Track::Thunder,
        }
    }

    /// Whether the temptation video restarts on arrival.
    pub fn restarts_video(self) -> bool {
        matches!(self, ChoiceOutcome::Accept)
    }
}

/// Identifies one run of a delayed sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Hands out tickets so that starting a sequence invalidates the steps still pending
/// from an earlier one.
#[derive(Debug, Default)]
pub struct Sequencer {
    generation: u64,
}

impl Sequencer {
    pub fn begin(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        Ticket(self.generation)
    }

    #[inline]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}

/// Text the visitor wants to let go of, if there is any.
pub fn release_note(input: &str) -> Option<&str> {
    let text = input.trim();
    (!text.is_empty()).then_some(text)
}
