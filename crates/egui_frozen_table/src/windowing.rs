//! Fixed-height row windowing: which rows have to exist for a given vertical offset.

use std::ops::Range;

/// Vertical placement handed to the row factory for one rendered slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotStyle {
    /// Row index. Rows are never reordered, so the index doubles as the slot's key.
    pub index: usize,

    /// Distance from the top of the (virtual) body, `index * row_height`.
    pub top: f32,

    pub height: f32,
}

impl SlotStyle {
    /// Stable identity of the slot.
    #[inline]
    pub fn key(&self) -> usize {
        self.index
    }
}

/// Geometry of a virtualized body with rows of one fixed height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowWindow {
    pub row_count: usize,
    pub row_height: f32,
    pub viewport_height: f32,
    pub overscan: usize,
}

impl RowWindow {
    pub fn new(row_count: usize, row_height: f32, viewport_height: f32) -> Self {
        let row_height = if row_height.is_finite() && row_height > 0.0 {
            row_height
        } else {
            log::warn!("Invalid row height {row_height}, using 1.0");
            1.0
        };
        Self {
            row_count,
            row_height,
            viewport_height: viewport_height.max(0.0),
            overscan: 0,
        }
    }

    /// Set the number of extra rows rendered above and below the visible ones.
    #[inline]
    pub fn overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Height of all rows together.
    #[inline]
    pub fn total_height(&self) -> f32 {
        self.row_count as f32 * self.row_height
    }

    /// Largest vertical offset that still shows a full viewport.
    pub fn max_scroll_top(&self) -> f32 {
        (self.total_height() - self.viewport_height).max(0.0)
    }

    /// Rows overlapping `[scroll_top, scroll_top + viewport_height)`.
    pub fn visible_range(&self, scroll_top: f32) -> Range<usize> {
        let scroll_top = if scroll_top.is_finite() {
            scroll_top.clamp(0.0, self.max_scroll_top())
        } else {
            0.0
        };
        let first = ((scroll_top / self.row_height).floor() as usize).min(self.row_count);
        let last = (((scroll_top + self.viewport_height) / self.row_height).ceil() as usize)
            .min(self.row_count);
        first..last.max(first)
    }

    /// The visible rows widened by the overscan on both sides.
    pub fn render_range(&self, scroll_top: f32) -> Range<usize> {
        let visible = self.visible_range(scroll_top);
        let start = visible.start.saturating_sub(self.overscan);
        let end = visible.end.saturating_add(self.overscan).min(self.row_count);
        start..end
    }

    /// Upper bound on how many slots [`Self::render_range`] can return.
    ///
    /// A viewport covers `ceil(viewport / row_height)` rows when aligned to a row
    /// boundary and one more when it straddles two.
    pub fn max_rendered_rows(&self) -> usize {
        let visible = (self.viewport_height / self.row_height).ceil() as usize + 1;
        (visible + 2 * self.overscan).min(self.row_count)
    }

    /// Placement of the row at `index`.
    pub fn slot(&self, index: usize) -> SlotStyle {
        SlotStyle {
            index,
            top: index as f32 * self.row_height,
            height: self.row_height,
        }
    }
}

/// Something that turns a [`RowWindow`] into a set of mounted rows.
///
/// Implementations call `item` once per slot that needs to exist, in index order.
pub trait WindowedList {
    fn render(&mut self, window: &RowWindow, item: &mut dyn FnMut(SlotStyle));
}

/// Headless [`WindowedList`] for hosts without their own virtualized list.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedSizeList {
    pub scroll_top: f32,
}

impl FixedSizeList {
    pub fn new(scroll_top: f32) -> Self {
        Self { scroll_top }
    }
}

impl WindowedList for FixedSizeList {
    fn render(&mut self, window: &RowWindow, item: &mut dyn FnMut(SlotStyle)) {
        self.scroll_top = self.scroll_top.clamp(0.0, window.max_scroll_top());
        for index in window.render_range(self.scroll_top) {
            item(window.slot(index));
        }
    }
}
