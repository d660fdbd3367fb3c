//! Scroll-into-view for keyboard cursors.
//!
//! [`scroll_into_view`] computes the smallest scroll delta that brings a
//! target rectangle fully into view, treating sticky chrome (a table header
//! along the top, a row-number gutter along the left) as obstructing the
//! viewport. [`ScrollState`] tracks a clamped scroll position and applies
//! that delta.

use crate::geometry::{Offset, Region, Size};

// ---------------------------------------------------------------------------
// StickyInsets
// ---------------------------------------------------------------------------

/// Space covered by sticky chrome at the viewport's leading edges.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StickyInsets {
    /// Height of a sticky header.
    pub top: i32,
    /// Width of a sticky gutter.
    pub left: i32,
}

impl StickyInsets {
    pub const NONE: StickyInsets = StickyInsets { top: 0, left: 0 };

    pub const fn new(top: i32, left: i32) -> Self {
        Self { top, left }
    }
}

/// Minimal delta along one axis. The leading check wins when the target is
/// larger than the visible span, so its start edge stays visible.
fn axis_delta(start: i32, end: i32, visible_start: i32, visible_end: i32) -> i32 {
    if start < visible_start {
        start - visible_start
    } else if end > visible_end {
        end - visible_end
    } else {
        0
    }
}

/// The scroll delta that makes `target` fully visible in `viewport`.
///
/// Both rectangles are in content coordinates. Returns [`Offset::ZERO`] when
/// the target is already visible.
pub fn scroll_into_view(viewport: Region, target: Region, insets: StickyInsets) -> Offset {
    Offset::new(
        axis_delta(
            target.x,
            target.right(),
            viewport.x + insets.left,
            viewport.right(),
        ),
        axis_delta(
            target.y,
            target.bottom(),
            viewport.y + insets.top,
            viewport.bottom(),
        ),
    )
}

// ---------------------------------------------------------------------------
// ScrollState
// ---------------------------------------------------------------------------

/// Scroll position of a scrollable collection.
///
/// The offset is always clamped to `[0, content_size - viewport_size]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: Offset,
    pub content_size: Size,
    pub viewport_size: Size,
}

impl ScrollState {
    /// Create a new scroll state with zero offset.
    pub fn new(content_size: Size, viewport_size: Size) -> Self {
        Self {
            offset: Offset::ZERO,
            content_size,
            viewport_size,
        }
    }

    /// The maximum scroll offset for each axis.
    pub fn max_scroll(&self) -> Offset {
        Offset::new(
            (self.content_size.width - self.viewport_size.width).max(0),
            (self.content_size.height - self.viewport_size.height).max(0),
        )
    }

    /// Scroll to an absolute position, clamping to valid range.
    pub fn scroll_to(&mut self, x: i32, y: i32) {
        let max = self.max_scroll();
        self.offset = Offset::new(x.clamp(0, max.x), y.clamp(0, max.y));
    }

    /// Scroll by a relative delta, clamping to valid range.
    pub fn scroll_by(&mut self, delta: Offset) {
        let target = self.offset + delta;
        self.scroll_to(target.x, target.y);
    }

    /// The currently visible region within the content.
    pub fn visible_region(&self) -> Region {
        Region::new(
            self.offset.x,
            self.offset.y,
            self.viewport_size.width,
            self.viewport_size.height,
        )
    }

    /// Scroll just enough to show `target`. Returns the delta actually
    /// applied, which may be smaller than requested near the content edges.
    pub fn reveal(&mut self, target: Region, insets: StickyInsets) -> Offset {
        let before = self.offset;
        let wanted = scroll_into_view(self.visible_region(), target, insets);
        if !wanted.is_zero() {
            self.scroll_by(wanted);
        }
        self.offset - before
    }

    /// Update the content size and re-clamp the offset.
    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
        self.scroll_to(self.offset.x, self.offset.y);
    }

    /// Update the viewport size and re-clamp the offset.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport_size = size;
        self.scroll_to(self.offset.x, self.offset.y);
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(Size::ZERO, Size::ZERO)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
