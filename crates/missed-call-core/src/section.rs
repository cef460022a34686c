//! The five narrative sections and viewport-midpoint cursor detection.

use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Call,
    Temptation,
    Choice,
    Release,
    AboutArtist,
}

/// What the ringtone does while a section is current.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RingtoneCue {
    /// Level follows the scroll fade between the first two sections.
    Fade,
    /// Ring at the choice volume with the phone shaking.
    Ring,
    Silent,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Call,
        Section::Temptation,
        Section::Choice,
        Section::Release,
        Section::AboutArtist,
    ];

    /// 1-based position in document order.
    #[inline]
    pub fn number(self) -> usize {
        self.index() + 1
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Section::Call => 0,
            Section::Temptation => 1,
            Section::Choice => 2,
            Section::Release => 3,
            Section::AboutArtist => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    /// Element id of the section container.
    pub fn element_id(self) -> &'static str {
        match self {
            Section::Call => "the-call",
            Section::Temptation => "the-temptation",
            Section::Choice => "the-choice",
            Section::Release => "release",
            Section::AboutArtist => "about-artist",
        }
    }

    pub fn ringtone_cue(self) -> RingtoneCue {
        match self {
            Section::Call | Section::Temptation => RingtoneCue::Fade,
            Section::Choice => RingtoneCue::Ring,
            Section::Release | Section::AboutArtist => RingtoneCue::Silent,
        }
    }
}

/// Snapshot of section geometry taken on one scroll tick.
///
/// Sections missing from the document are `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Layout {
    pub sections: [Option<Rect>; 5],
    pub viewport_height: f64,
}

impl Layout {
    #[inline]
    pub fn rect(&self, section: Section) -> Option<&Rect> {
        self.sections[section.index()].as_ref()
    }
}

/// Section whose rectangle straddles the viewport's vertical midpoint.
///
/// The last match in document order wins; with no match the first section is current.
pub fn detect_section(layout: &Layout) -> Section {
    let mid = layout.viewport_height / 2.0;
    let mut current = Section::Call;
    for section in Section::ALL {
        if let Some(rect) = layout.rect(section) {
            if rect.straddles(mid) {
                current = section;
            }
        }
    }
    current
}
