//! A table without egui: the same components, driven by explicit events.

use crate::{
    column::{Column, ColumnPartition},
    layout::{LayoutMeasurer, ResizeHub, ResizeObservation},
    options::TableOptions,
    row::TableData,
    row_renderer::{RowContext, RowView},
    sync::{ScrollOrigin, ScrollSync, ScrollUpdate},
    table::footer_text,
    windowing::{RowWindow, WindowedList},
};

/// Frozen-column table state for hosts that push resize and scroll events themselves.
///
/// A view is mounted onto a [`ResizeHub`] to receive container widths, fed native
/// scroll events through [`Self::on_header_scroll`] and [`Self::on_overlay_scroll`],
/// and asked for the rows to draw with [`Self::render_rows`].
///
/// ```
/// use egui_frozen_table::{Column, FixedSizeList, ResizeHub, Row, TableOptions, TableView};
///
/// let columns: Vec<Column> = (0..10)
///     .map(|i| Column::new(format!("c{i}"), format!("C{i}"), 100.0))
///     .collect();
/// let rows = vec![Row::new(); 100];
///
/// let hub = ResizeHub::new(600.0);
/// let mut view = TableView::new(&columns, &rows, TableOptions::default());
/// view.mount(&hub);
/// assert_eq!(view.measurer().available_middle_width(), 200.0);
///
/// view.on_overlay_scroll(150.0);
/// assert_eq!(view.sync().native_offset(egui_frozen_table::ScrollOrigin::Header), 150.0);
///
/// let rows = view.render_rows(&mut FixedSizeList::new(0.0));
/// assert_eq!(rows[0].index(), 0);
/// ```
pub struct TableView<'a, D> {
    partition: ColumnPartition<'a>,
    data: D,
    options: TableOptions,
    measurer: LayoutMeasurer,
    sync: ScrollSync,
    observation: Option<ResizeObservation>,
}

impl<'a, D: TableData> TableView<'a, D> {
    pub fn new(columns: &'a [Column], data: D, options: TableOptions) -> Self {
        let options = options.sanitized();
        let partition = ColumnPartition::new(columns, options.frozen);
        let measurer = LayoutMeasurer::new(partition.widths());
        let mut sync = ScrollSync::new();
        sync.set_max_scroll_left(measurer.max_scroll_left());
        Self {
            partition,
            data,
            options,
            measurer,
            sync,
            observation: None,
        }
    }

    /// Start listening to container resizes, measuring right away.
    ///
    /// Mounting an already mounted view replaces its previous registration.
    pub fn mount(&mut self, hub: &ResizeHub) {
        self.observation = Some(hub.observe());
        self.refresh_layout();
    }

    /// Stop listening and forget the scroll position.
    pub fn unmount(&mut self) {
        if self.observation.take().is_some() {
            log::debug!("Unmounting table view");
        }
        self.sync.reset();
    }

    pub fn is_mounted(&self) -> bool {
        self.observation.is_some()
    }

    /// Pick up the latest width delivered by the hub. Returns `true` if it changed.
    pub fn refresh_layout(&mut self) -> bool {
        match &self.observation {
            Some(observation) => {
                let width = observation.width();
                self.measure(width)
            }
            None => false,
        }
    }

    /// Measure the container directly. Returns `true` if the width changed.
    pub fn measure(&mut self, container_width: f32) -> bool {
        let changed = self.measurer.measure(container_width);
        if changed {
            self.sync.set_max_scroll_left(self.measurer.max_scroll_left());
        }
        changed
    }

    /// The header strip reported a native scroll offset.
    pub fn on_header_scroll(&mut self, offset: f32) -> Option<ScrollUpdate> {
        self.sync.on_native_scroll(ScrollOrigin::Header, offset)
    }

    /// The overlay above the body reported a native scroll offset.
    pub fn on_overlay_scroll(&mut self, offset: f32) -> Option<ScrollUpdate> {
        self.sync.on_native_scroll(ScrollOrigin::Overlay, offset)
    }

    #[inline]
    pub fn scroll_left(&self) -> f32 {
        self.sync.scroll_left()
    }

    pub fn sync(&self) -> &ScrollSync {
        &self.sync
    }

    pub fn measurer(&self) -> &LayoutMeasurer {
        &self.measurer
    }

    pub fn partition(&self) -> ColumnPartition<'a> {
        self.partition
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn row_window(&self) -> RowWindow {
        RowWindow::new(self.data.len(), self.options.row_height, self.options.height)
            .overscan(self.options.overscan)
    }

    /// What every row is laid out against right now.
    pub fn context(&self) -> RowContext<'a> {
        RowContext::new(self.partition, &self.measurer, self.sync.scroll_left())
    }

    /// Lay out the rows `list` decides to mount, in slot order.
    pub fn render_rows(&self, list: &mut dyn WindowedList) -> Vec<RowView<'a>> {
        profiling::function_scope!();

        let window = self.row_window();
        let ctx = self.context();
        let mut rows = Vec::with_capacity(window.max_rendered_rows());
        list.render(&window, &mut |slot| match self.data.row(slot.index) {
            Some(row) => rows.push(RowView::layout(slot, row, &ctx)),
            None => crate::log_or_panic!(
                "Windowed list asked for row {} of {}",
                slot.index,
                self.data.len()
            ),
        });
        rows
    }

    /// The footer labels for this table.
    pub fn footer_text(&self) -> (String, String) {
        footer_text(
            self.data.len(),
            self.partition.columns().len(),
            self.partition.frozen_counts(),
        )
    }
}

impl<D> std::fmt::Debug for TableView<'_, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableView")
            .field("measurer", &self.measurer)
            .field("sync", &self.sync)
            .field("mounted", &self.observation.is_some())
            .finish_non_exhaustive()
    }
}
