// Host-side tests for choice outcomes, sequencing and the release note.

use missed_call_core::*;

#[test]
fn decline_moves_on_to_release() {
    let d = ChoiceOutcome::Decline;
    assert_eq!(d.pointer_fraction(), 0.0);
    assert_eq!(d.destination(), Section::Release);
    assert_eq!(d.lingering_track(), Track::Birds);
    assert!(!d.restarts_video());
}

#[test]
fn accept_falls_back_to_temptation() {
    let a = ChoiceOutcome::Accept;
    assert_eq!(a.pointer_fraction(), 1.0);
    assert_eq!(a.destination(), Section::Temptation);
    assert_eq!(a.lingering_track(), Track::Thunder);
    assert!(a.restarts_video());
}

#[test]
fn hover_fractions_sit_on_their_own_side() {
    assert!(ChoiceOutcome::Decline.hover_fraction() < 0.5);
    assert!(ChoiceOutcome::Accept.hover_fraction() > 0.5);
}

#[test]
fn new_sequence_supersedes_pending_one() {
    let mut seq = Sequencer::default();
    let first = seq.begin();
    assert!(seq.is_current(first));

    let second = seq.begin();
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));
    assert_ne!(first, second);
}

#[test]
fn release_note_trims_input() {
    assert_eq!(release_note("  an old voicemail  "), Some("an old voicemail"));
    assert_eq!(release_note(""), None);
    assert_eq!(release_note(" \t\n "), None);
}
