/// How many columns are pinned at each edge of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct FrozenCounts {
    pub left: usize,
    pub right: usize,
}

impl Default for FrozenCounts {
    fn default() -> Self {
        Self { left: 2, right: 2 }
    }
}

/// Configuration for a [`crate::FrozenTable`] or [`crate::TableView`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableOptions {
    /// Height of the table body in points, header and footer excluded.
    pub height: f32,

    /// Height of every row in points.
    pub row_height: f32,

    /// Columns pinned on the left and on the right.
    pub frozen: FrozenCounts,

    /// Rows laid out above and below the visible range by [`crate::TableView`].
    ///
    /// [`crate::FrozenTable`] ignores it: egui's `ScrollArea::show_rows` decides
    /// which rows around the viewport get laid out.
    pub overscan: usize,

    /// Show the "rows × columns" line below the body.
    pub show_footer: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            height: 600.0,
            row_height: 40.0,
            frozen: FrozenCounts::default(),
            overscan: 2,
            show_footer: true,
        }
    }
}

impl TableOptions {
    /// Set the body height.
    #[inline]
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Set the row height.
    #[inline]
    pub fn row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    /// Set how many columns are frozen on each side.
    #[inline]
    pub fn frozen(mut self, left: usize, right: usize) -> Self {
        self.frozen = FrozenCounts { left, right };
        self
    }

    /// Set the number of extra rows [`crate::TableView`] renders beyond the viewport.
    #[inline]
    pub fn overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    #[inline]
    pub fn show_footer(mut self, show_footer: bool) -> Self {
        self.show_footer = show_footer;
        self
    }

    /// Copy with heights replaced by usable values.
    pub(crate) fn sanitized(mut self) -> Self {
        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            log::warn!("Invalid table row height {}, using 1.0", self.row_height);
            self.row_height = 1.0;
        }
        if !(self.height.is_finite() && self.height >= 0.0) {
            log::warn!("Invalid table body height {}, using 0.0", self.height);
            self.height = 0.0;
        }
        self
    }
}
