// Host-side tests for section cursor detection.

use missed_call_core::*;

const VIEWPORT: f64 = 800.0;
const SECTION_HEIGHT: f64 = 800.0;

// Five stacked full-viewport sections scrolled down by `scroll` pixels
fn layout_at(scroll: f64) -> Layout {
    let mut layout = Layout {
        viewport_height: VIEWPORT,
        ..Layout::default()
    };
    for (i, slot) in layout.sections.iter_mut().enumerate() {
        *slot = Some(Rect::new(
            0.0,
            i as f64 * SECTION_HEIGHT - scroll,
            1200.0,
            SECTION_HEIGHT,
        ));
    }
    layout
}

#[test]
fn top_of_page_is_the_call() {
    assert_eq!(detect_section(&layout_at(0.0)), Section::Call);
}

#[test]
fn each_section_detected_when_centred() {
    for section in Section::ALL {
        let scroll = section.index() as f64 * SECTION_HEIGHT;
        assert_eq!(detect_section(&layout_at(scroll)), section);
    }
}

#[test]
fn later_section_wins_at_shared_edge() {
    // Section 1 bottom and section 2 top both sit on the midpoint
    assert_eq!(detect_section(&layout_at(400.0)), Section::Temptation);
}

#[test]
fn cursor_always_in_range() {
    let max_scroll = SECTION_HEIGHT * 5.0 - VIEWPORT;
    let mut scroll = 0.0;
    while scroll <= max_scroll {
        let n = detect_section(&layout_at(scroll)).number();
        assert!((1..=5).contains(&n), "section {} at scroll {}", n, scroll);
        scroll += 37.0;
    }
}

#[test]
fn missing_sections_are_skipped() {
    let mut layout = layout_at(SECTION_HEIGHT);
    layout.sections[Section::Temptation.index()] = None;
    // Nothing straddles the midpoint any more, so the cursor falls back to the first
    assert_eq!(detect_section(&layout), Section::Call);

    let empty = Layout {
        viewport_height: VIEWPORT,
        ..Layout::default()
    };
    assert_eq!(detect_section(&empty), Section::Call);
}

#[test]
fn section_numbering_round_trips() {
    for (i, section) in Section::ALL.iter().enumerate() {
        assert_eq!(section.index(), i);
        assert_eq!(section.number(), i + 1);
        assert_eq!(Section::from_index(i), Some(*section));
    }
    assert_eq!(Section::from_index(5), None);
}

#[test]
fn ringtone_cues_per_section() {
    assert_eq!(Section::Call.ringtone_cue(), RingtoneCue::Fade);
    assert_eq!(Section::Temptation.ringtone_cue(), RingtoneCue::Fade);
    assert_eq!(Section::Choice.ringtone_cue(), RingtoneCue::Ring);
    assert_eq!(Section::Release.ringtone_cue(), RingtoneCue::Silent);
    assert_eq!(Section::AboutArtist.ringtone_cue(), RingtoneCue::Silent);
}
