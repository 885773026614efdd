//! Section tracking for the navigation bar.
//!
//! The DOM glue (`components::scroll_tracker`) measures section rectangles once
//! per animation frame and feeds them to [`evaluate`]; this module holds the
//! pure part so the highlight policy can be tested without a browser.

use crate::core::config::{ACTIVE_SECTION_LINE_PX, SCROLLED_THRESHOLD_PX};

/// Anchored page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Services,
    Partners,
}

impl SectionId {
    pub const ORDER: [SectionId; 3] = [SectionId::About, SectionId::Services, SectionId::Partners];

    /// DOM id of the section element (also its `#` link target).
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Partners => "partners",
        }
    }
}

/// Viewport-relative vertical extent of a section, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// What the navbar needs to know about the current scroll position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    /// Past the small offset where the navbar gets its solid background.
    pub scrolled: bool,
    /// Highlighted nav entry; `None` above the first section.
    pub active: Option<SectionId>,
}

/// Compute navbar state from the scroll offset and measured section rects.
///
/// Sections are scanned in [`SectionId::ORDER`] and every section whose rect
/// straddles the reference line overwrites the previous match, so when two
/// sections overlap the line the later one wins. Sections that could not be
/// measured (`None`) are skipped.
pub fn evaluate<F>(scroll_y: f64, mut rect_of: F) -> ScrollState
where
    F: FnMut(SectionId) -> Option<SectionRect>,
{
    let mut active = None;
    for section in SectionId::ORDER {
        if let Some(rect) = rect_of(section) {
            if rect.straddles(ACTIVE_SECTION_LINE_PX) {
                active = Some(section);
            }
        }
    }

    ScrollState {
        scrolled: scroll_y > SCROLLED_THRESHOLD_PX,
        active,
    }
}

/// Coalesces bursts of scroll events into one measurement per animation frame.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Record a scroll event. Returns `true` when the caller must schedule a
    /// frame; `false` when one is already queued.
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// The queued frame ran; the next scroll event may schedule another.
    pub fn frame_ran(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
