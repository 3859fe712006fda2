//! Table view with a fixed header, a virtualized body and frozen column groups.
//!
//! The header's middle strip and the overlay above the body's middle band are two
//! horizontal [`ScrollArea`]s kept in lockstep by a [`ScrollSync`]. The rows themselves
//! are laid out by [`ScrollArea::show_rows`], which only hands out the visible range,
//! and their middle band is translated by the shared offset instead of being scrolled.

use std::ops::Range;

use egui::{
    Align, Align2, FontId, Id, Layout, Rect, ScrollArea, Sense, Ui, UiBuilder, Vec2, pos2,
    scroll_area::{ScrollBarVisibility, ScrollSource},
    style::ScrollStyle,
    vec2,
};

use crate::{
    column::{Column, ColumnGroup, ColumnPartition, GroupWidths},
    layout::LayoutMeasurer,
    options::{FrozenCounts, TableOptions},
    row::TableData,
    row_renderer::{BandKind, RowContext, RowView, paint_row},
    style::{ResolvedStyle, TableStyle},
    sync::{ScrollOrigin, ScrollSync, ScrollUpdate},
    windowing::RowWindow,
};

/// Width handed to the row list while the container has not been measured yet.
const UNMEASURED_WIDTH_HINT: f32 = 1200.0;

// ----------------------------------------------------------------------------

/// Builder and widget for a virtualized table with frozen columns.
///
/// The first [`FrozenCounts::left`] columns stay pinned on the left, the last
/// [`FrozenCounts::right`] on the right, and everything in between scrolls horizontally.
/// Only the rows overlapping the body's viewport are laid out.
///
/// If you have multiple tables in the same [`Ui`] you will need to give them unique
/// id:s with [`Self::id_salt`].
///
/// ### Example
/// ```
/// # egui::__run_test_ui(|ui| {
/// use egui_frozen_table::{Column, FrozenTable, Row, TableOptions};
///
/// let columns: Vec<Column> = (0..12)
///     .map(|i| Column::new(format!("c{i}"), format!("Column {i}"), 120.0))
///     .collect();
/// let rows: Vec<Row> = (0..1500).map(|i| Row::new().with("c0", format!("{i}"))).collect();
///
/// let response = FrozenTable::new(&columns, &rows)
///     .options(TableOptions::default().height(700.0).row_height(45.0))
///     .id_salt("employees")
///     .show(ui);
/// assert!(response.visible_rows.len() < rows.len());
/// # });
/// ```
pub struct FrozenTable<'a, D> {
    columns: &'a [Column],
    data: D,
    id_salt: Id,
    options: TableOptions,
    style: TableStyle,
}

impl<'a, D: TableData> FrozenTable<'a, D> {
    pub fn new(columns: &'a [Column], data: D) -> Self {
        Self {
            columns,
            data,
            id_salt: Id::new("__frozen_table_state"),
            options: TableOptions::default(),
            style: TableStyle::default(),
        }
    }

    /// Give this table a unique id within the parent [`Ui`].
    ///
    /// This is required if you have multiple tables in the same [`Ui`].
    #[inline]
    pub fn id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.id_salt = Id::new(id_salt);
        self
    }

    /// Replace all options at once.
    #[inline]
    pub fn options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    /// Height of the body in points (default: `600.0`).
    #[inline]
    pub fn height(mut self, height: f32) -> Self {
        self.options.height = height;
        self
    }

    /// Height of each row in points (default: `40.0`).
    #[inline]
    pub fn row_height(mut self, row_height: f32) -> Self {
        self.options.row_height = row_height;
        self
    }

    /// How many columns to pin on each side (default: 2 and 2).
    #[inline]
    pub fn frozen(mut self, left: usize, right: usize) -> Self {
        self.options.frozen = FrozenCounts { left, right };
        self
    }

    /// Show the row and column count below the body (default: `true`).
    #[inline]
    pub fn show_footer(mut self, show_footer: bool) -> Self {
        self.options.show_footer = show_footer;
        self
    }

    /// Set the table style for customizing colors and strokes.
    #[inline]
    pub fn style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Forget the stored scroll offsets and measurements of a table.
    pub fn reset(ui: &Ui, id_salt: impl std::hash::Hash) {
        let state_id = ui.id().with(Id::new(id_salt));
        TableState::reset(ui, state_id);
    }

    pub fn show(self, ui: &mut Ui) -> FrozenTableResponse {
        profiling::function_scope!();

        let Self {
            columns,
            data,
            id_salt,
            options,
            style,
        } = self;

        let options = options.sanitized();
        let state_id = ui.id().with(id_salt);
        let partition = ColumnPartition::new(columns, options.frozen);
        let widths = partition.widths();
        let style = style.resolve(ui.visuals());

        let mut state = TableState::load(ui, state_id, widths);
        state.measure(ui.available_width());
        let measurer = state.measurer;

        let (visible_rows, scroll_top, scroll_left) = ui
            .scope(|ui| {
                ui.spacing_mut().item_spacing = Vec2::ZERO;

                let header_rect = Rect::from_min_size(
                    ui.cursor().min,
                    vec2(measurer.container_width(), options.row_height),
                );
                let body_rect = Rect::from_min_size(
                    header_rect.left_bottom(),
                    vec2(measurer.container_width(), options.height),
                );
                let bar_height = ScrollStyle::solid().allocated_width();

                let header = Header {
                    partition,
                    widths,
                    measurer: &measurer,
                    style: &style,
                    id: state_id.with("__header"),
                };

                // Both scroll areas read their input before any row is laid out, so the
                // header, the overlay and the rows all agree within the pass. The hovered
                // area goes first and the other one is forced to its result.
                let header_leads =
                    ui.ctx().dragged_id().is_none() && ui.rect_contains_pointer(header_rect);
                let origins = if header_leads {
                    [ScrollOrigin::Header, ScrollOrigin::Overlay]
                } else {
                    [ScrollOrigin::Overlay, ScrollOrigin::Header]
                };
                for origin in origins {
                    let forced = state.sync.native_offset(origin);
                    let offset = match origin {
                        ScrollOrigin::Header => header.show(ui, header_rect, forced),
                        ScrollOrigin::Overlay => show_overlay(
                            ui,
                            body_rect,
                            bar_height,
                            &measurer,
                            widths,
                            forced,
                            state_id,
                        ),
                    };
                    if let Some(update) = state.scroll(origin, offset) {
                        log::trace!("{origin:?} drove the table to {}", update.scroll_left);
                    }
                }

                let ctx = RowContext::new(partition, &measurer, state.sync.scroll_left());
                let (rows, scroll_top) =
                    show_body(ui, body_rect, &data, &ctx, &options, &style, state_id);

                ui.advance_cursor_after_rect(Rect::from_min_max(
                    header_rect.min,
                    body_rect.max + vec2(0.0, bar_height),
                ));
                (rows, scroll_top, ctx.scroll_left)
            })
            .inner;

        if options.show_footer {
            let (rows_text, frozen_text) =
                footer_text(data.len(), columns.len(), partition.frozen_counts());
            ui.horizontal(|ui| {
                ui.label(rows_text);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.small(frozen_text);
                });
            });
        }

        let response = FrozenTableResponse {
            visible_rows,
            scroll_top,
            scroll_left,
            container_width: measurer.container_width(),
            available_middle_width: measurer.available_middle_width(),
        };
        state.store(ui, state_id);
        response
    }
}

/// What [`FrozenTable::show`] reports back about the frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrozenTableResponse {
    /// Rows that were laid out this frame.
    pub visible_rows: Range<usize>,

    /// Vertical offset of the body.
    pub scroll_top: f32,

    /// Horizontal offset the middle columns were painted at.
    pub scroll_left: f32,

    pub container_width: f32,

    /// Width of the clipped middle region.
    pub available_middle_width: f32,
}

/// The two footer labels: `"1,500 rows × 50 columns"` and `"Frozen: 2 left + 2 right"`.
pub fn footer_text(rows: usize, columns: usize, frozen: FrozenCounts) -> (String, String) {
    (
        format!("{} rows × {columns} columns", group_thousands(rows)),
        format!("Frozen: {} left + {} right", frozen.left, frozen.right),
    )
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ----------------------------------------------------------------------------

/// Per-table state kept in egui memory between frames.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub(crate) struct TableState {
    pub measurer: LayoutMeasurer,
    pub sync: ScrollSync,
}

impl TableState {
    pub fn new(widths: GroupWidths) -> Self {
        let mut state = Self {
            measurer: LayoutMeasurer::new(widths),
            sync: ScrollSync::new(),
        };
        state.sync.set_max_scroll_left(state.measurer.max_scroll_left());
        state
    }

    /// Record the container width and propagate the new scroll range.
    /// Returns `true` if the width changed.
    pub fn measure(&mut self, container_width: f32) -> bool {
        let changed = self.measurer.measure(container_width);
        self.sync.set_max_scroll_left(self.measurer.max_scroll_left());
        changed
    }

    pub fn set_group_widths(&mut self, widths: GroupWidths) {
        if self.measurer.set_group_widths(widths) {
            self.sync.set_max_scroll_left(self.measurer.max_scroll_left());
        }
    }

    /// Route a scroll event through the controller.
    pub fn scroll(&mut self, origin: ScrollOrigin, offset: f32) -> Option<ScrollUpdate> {
        self.sync.on_native_scroll(origin, offset)
    }

    fn load(ui: &Ui, state_id: Id, widths: GroupWidths) -> Self {
        #[cfg(feature = "serde")]
        let state = ui.data_mut(|d| d.get_persisted::<Self>(state_id));
        #[cfg(not(feature = "serde"))]
        let state = ui.data_mut(|d| d.get_temp::<Self>(state_id));

        match state {
            Some(mut state) => {
                state.set_group_widths(widths);
                state
            }
            None => Self::new(widths),
        }
    }

    fn store(self, ui: &Ui, state_id: Id) {
        #![expect(clippy::needless_return)]
        #[cfg(feature = "serde")]
        {
            return ui.data_mut(|d| d.insert_persisted(state_id, self));
        }
        #[cfg(not(feature = "serde"))]
        {
            return ui.data_mut(|d| d.insert_temp(state_id, self));
        }
    }

    fn reset(ui: &Ui, state_id: Id) {
        log::debug!("Resetting table state {state_id:?}");
        ui.data_mut(|d| d.remove::<Self>(state_id));
    }
}

// ----------------------------------------------------------------------------

/// A horizontal scroll area whose offset is dictated by the [`ScrollSync`].
fn synced_scroll_area(id: Id, offset: f32) -> ScrollArea {
    ScrollArea::horizontal()
        .id_salt(id)
        .auto_shrink(false)
        .horizontal_scroll_offset(offset)
}

struct Header<'s, 'a> {
    partition: ColumnPartition<'a>,
    widths: GroupWidths,
    measurer: &'s LayoutMeasurer,
    style: &'s ResolvedStyle,
    id: Id,
}

impl Header<'_, '_> {
    /// Paint the header and return the native offset its scroll area ended up at.
    fn show(&self, ui: &mut Ui, rect: Rect, offset: f32) -> f32 {
        let height = rect.height();
        ui.painter().rect_filled(rect, 0.0, self.style.header_bg);

        let left_rect = Rect::from_min_size(rect.min, vec2(self.widths.left, height));
        self.paint_cells(ui, left_rect, left_rect, self.partition.left(), BandKind::Left);

        let right_rect = Rect::from_min_size(
            pos2(rect.left() + self.measurer.right_band_x(), rect.top()),
            vec2(self.widths.right, height),
        );
        self.paint_cells(ui, right_rect, right_rect, self.partition.right(), BandKind::Right);

        let scroll_rect = Rect::from_min_size(
            pos2(rect.left() + self.widths.left, rect.top()),
            vec2(self.measurer.header_scroll_width(), height),
        );
        let offset = if scroll_rect.is_positive() {
            let mut scroll_ui = ui.new_child(
                UiBuilder::new()
                    .max_rect(scroll_rect)
                    .layout(Layout::left_to_right(Align::Center)),
            );
            synced_scroll_area(self.id.with("__header_scroll_area"), offset)
                .scroll_bar_visibility(ScrollBarVisibility::AlwaysHidden)
                .show(&mut scroll_ui, |ui| {
                    let (content_rect, _) = ui
                        .allocate_exact_size(vec2(self.widths.middle, height), Sense::hover());
                    let clip = ui.clip_rect();
                    let middle = self.partition.middle();
                    self.paint_cells(ui, content_rect, clip, middle, BandKind::Middle);
                })
                .state
                .offset
                .x
        } else {
            offset
        };

        // Borders go on top of the scrolled cells.
        if !self.partition.left().is_empty() {
            ui.painter()
                .vline(left_rect.right(), rect.y_range(), self.style.frozen_border);
        }
        if !self.partition.right().is_empty() {
            ui.painter()
                .vline(right_rect.left(), rect.y_range(), self.style.frozen_border);
        }

        offset
    }

    /// Paint one header cell per column, left to right from `rect.min`, clipped to `clip`.
    fn paint_cells(&self, ui: &Ui, rect: Rect, clip: Rect, group: ColumnGroup<'_>, kind: BandKind) {
        let painter = ui.painter().with_clip_rect(clip.intersect(ui.clip_rect()));
        if kind != BandKind::Middle {
            painter.rect_filled(rect, 0.0, self.style.frozen_bg);
        }

        let mut x = rect.left();
        for column in group.columns() {
            let cell_rect = Rect::from_x_y_ranges(x..=x + column.width, rect.y_range());
            x += column.width;
            if !cell_rect.intersects(painter.clip_rect()) {
                continue;
            }

            painter.with_clip_rect(cell_rect.intersect(painter.clip_rect())).text(
                pos2(cell_rect.left() + self.style.cell_padding, cell_rect.center().y),
                Align2::LEFT_CENTER,
                &column.label,
                FontId::default(),
                self.style.header_text_color,
            );
            painter.vline(cell_rect.right(), cell_rect.y_range(), self.style.vertical_grid);
            ui.interact(
                cell_rect.intersect(painter.clip_rect()),
                self.id.with((kind, &column.key)),
                Sense::hover(),
            )
            .on_hover_text(&column.label);
        }
    }
}

/// Lay out the visible rows through egui's windowed row list.
fn show_body<D: TableData>(
    ui: &mut Ui,
    body_rect: Rect,
    data: &D,
    ctx: &RowContext<'_>,
    options: &TableOptions,
    style: &ResolvedStyle,
    state_id: Id,
) -> (Range<usize>, f32) {
    let window = RowWindow::new(data.len(), options.row_height, options.height);
    let row_width = if body_rect.width() > 0.0 {
        body_rect.width()
    } else {
        UNMEASURED_WIDTH_HINT
    };
    let row_id = state_id.with("__row");

    let mut body_ui = ui.new_child(
        UiBuilder::new()
            .max_rect(body_rect)
            .layout(Layout::top_down(Align::Min)),
    );
    body_ui.spacing_mut().item_spacing = Vec2::ZERO;

    let output = ScrollArea::vertical()
        .id_salt(state_id.with("__body_scroll_area"))
        .auto_shrink(false)
        .max_height(options.height)
        .show_rows(&mut body_ui, window.row_height, window.row_count, |ui, rows| {
            for index in rows.clone() {
                let (rect, _) =
                    ui.allocate_exact_size(vec2(row_width, window.row_height), Sense::hover());
                let Some(row) = data.row(index) else {
                    crate::log_or_panic!(
                        "Table data has {} rows but row {index} is missing",
                        data.len()
                    );
                    continue;
                };
                let view = RowView::layout(window.slot(index), row, ctx);
                paint_row(ui, rect, &view, style, row_id);
            }
            rows
        });

    (output.inner, output.state.offset.y)
}

/// The overlay that captures horizontal wheel input over the middle band.
///
/// Its scroll bar sits in a strip of `bar_height` below the body, where the rows
/// painted afterwards cannot cover it. Returns the offset the overlay ended up at.
fn show_overlay(
    ui: &mut Ui,
    body_rect: Rect,
    bar_height: f32,
    measurer: &LayoutMeasurer,
    widths: GroupWidths,
    offset: f32,
    state_id: Id,
) -> f32 {
    let overlay_rect = Rect::from_min_size(
        pos2(body_rect.left() + widths.left, body_rect.top()),
        vec2(measurer.overlay_width(), body_rect.height() + bar_height),
    );
    if !overlay_rect.is_positive() {
        return offset;
    }

    let mut overlay_ui = ui.new_child(
        UiBuilder::new()
            .max_rect(overlay_rect)
            .layout(Layout::top_down(Align::Min)),
    );
    overlay_ui.spacing_mut().scroll = ScrollStyle::solid();

    synced_scroll_area(state_id.with("__overlay_scroll_area"), offset)
        .scroll_source(ScrollSource {
            drag: false,
            ..Default::default()
        })
        .show(&mut overlay_ui, |ui| {
            ui.allocate_exact_size(vec2(widths.middle, 1.0), Sense::hover());
        })
        .state
        .offset
        .x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths() -> GroupWidths {
        GroupWidths {
            left: 300.0,
            middle: 46.0 * 120.0,
            right: 220.0,
        }
    }

    #[test]
    fn footer_labels() {
        assert_eq!(
            footer_text(1500, 50, FrozenCounts::default()),
            (
                "1,500 rows × 50 columns".to_owned(),
                "Frozen: 2 left + 2 right".to_owned()
            )
        );
        assert_eq!(footer_text(0, 3, FrozenCounts { left: 2, right: 2 }).0, "0 rows × 3 columns");
    }

    #[test]
    fn thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn state_measure_updates_scroll_range() {
        let mut state = TableState::new(widths());
        assert_eq!(state.sync.max_scroll_left(), 5520.0);

        assert!(state.measure(1200.0));
        assert_eq!(state.sync.max_scroll_left(), 5520.0 - 680.0);

        state.scroll(ScrollOrigin::Overlay, 500.0);
        let before = state.clone();
        assert!(!state.measure(1200.0));
        assert_eq!(state, before);
    }

    #[test]
    fn changed_columns_clamp_offset() {
        let mut state = TableState::new(widths());
        state.measure(1200.0);
        state.scroll(ScrollOrigin::Header, 4000.0);

        state.set_group_widths(GroupWidths {
            middle: 1000.0,
            ..widths()
        });
        assert_eq!(state.sync.scroll_left(), 320.0);
        assert!(state.sync.is_converged());
    }

    #[test]
    fn shows_without_panicking() {
        let columns: Vec<Column> = (0..50)
            .map(|i| Column::new(format!("c{i}"), format!("C{i}"), 120.0))
            .collect();
        let rows: Vec<crate::Row> = (0..1500)
            .map(|i| crate::Row::new().with("c0", format!("ROW{i:04}")))
            .collect();

        let ctx = egui::Context::default();
        for _ in 0..3 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let response = FrozenTable::new(&columns, &rows)
                        .height(700.0)
                        .row_height(45.0)
                        .show(ui);
                    assert!(response.visible_rows.len() <= 18);
                    assert!(response.available_middle_width >= 0.0);
                });
            });
        }
    }

    #[test]
    fn overscan_does_not_change_laid_out_rows() {
        let columns: Vec<Column> = (0..10)
            .map(|i| Column::new(format!("c{i}"), format!("C{i}"), 120.0))
            .collect();
        let rows = vec![crate::Row::new(); 500];

        let visible = |overscan| {
            let mut visible = 0..0;
            let _ = egui::Context::default().run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let options = TableOptions::default().height(400.0).overscan(overscan);
                    visible = FrozenTable::new(&columns, &rows)
                        .options(options)
                        .show(ui)
                        .visible_rows;
                });
            });
            visible
        };
        assert_eq!(visible(0), visible(10));
    }

    /// A 50 column table in a 1200x900 window, driven frame by frame.
    struct Harness {
        ctx: egui::Context,
        columns: Vec<Column>,
        rows: Vec<crate::Row>,
    }

    const SALT: &str = "wheel";
    const OVER_HEADER: egui::Pos2 = pos2(600.0, 20.0);
    const OVER_BODY: egui::Pos2 = pos2(600.0, 300.0);

    impl Harness {
        fn new(pointer: egui::Pos2) -> Self {
            let harness = Self {
                ctx: egui::Context::default(),
                columns: (0..50)
                    .map(|i| Column::new(format!("c{i}"), format!("C{i}"), 120.0))
                    .collect(),
                rows: (0..1500)
                    .map(|i| crate::Row::new().with("c0", format!("ROW{i:04}")))
                    .collect(),
            };
            harness.frame(vec![egui::Event::PointerMoved(pointer)]);
            harness
        }

        fn wheel(&self, delta: Vec2) -> (FrozenTableResponse, Option<TableState>) {
            self.frame(vec![egui::Event::MouseWheel {
                unit: egui::MouseWheelUnit::Point,
                delta,
                modifiers: egui::Modifiers::NONE,
            }])
        }

        fn frame(&self, events: Vec<egui::Event>) -> (FrozenTableResponse, Option<TableState>) {
            self.frame_then(events, |_| {})
        }

        /// Run one frame and return the table's response and stored state.
        fn frame_then(
            &self,
            events: Vec<egui::Event>,
            mut after: impl FnMut(&Ui),
        ) -> (FrozenTableResponse, Option<TableState>) {
            let input = egui::RawInput {
                screen_rect: Some(Rect::from_min_size(egui::Pos2::ZERO, vec2(1200.0, 900.0))),
                events,
                ..Default::default()
            };
            let mut shown = None;
            let _ = self.ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let response = FrozenTable::new(&self.columns, &self.rows)
                        .height(700.0)
                        .row_height(45.0)
                        .id_salt(SALT)
                        .show(ui);
                    let state_id = ui.id().with(Id::new(SALT));
                    after(ui);
                    let state = ui.ctx().data(|d| d.get_temp::<TableState>(state_id));
                    shown = Some((response, state));
                });
            });
            shown.expect("the table was shown")
        }
    }

    fn assert_in_lockstep(response: &FrozenTableResponse, state: &TableState) {
        assert_eq!(state.sync.scroll_left(), response.scroll_left);
        assert_eq!(state.sync.native_offset(ScrollOrigin::Header), response.scroll_left);
        assert_eq!(state.sync.native_offset(ScrollOrigin::Overlay), response.scroll_left);
        assert!(state.sync.is_converged(), "{:?}", state.sync);
    }

    #[test]
    fn wheel_over_body_moves_rows_and_header_in_the_same_frame() {
        let harness = Harness::new(OVER_BODY);
        let (response, state) = harness.wheel(vec2(-7.0, 0.0));
        let state = state.expect("state stored");

        assert_eq!(response.scroll_left, 7.0);
        assert_eq!(response.scroll_top, 0.0);
        assert_in_lockstep(&response, &state);

        let (next, _) = harness.frame(Vec::new());
        assert_eq!(next.scroll_left, 7.0);
    }

    #[test]
    fn wheel_over_header_moves_rows_in_the_same_frame() {
        let harness = Harness::new(OVER_HEADER);
        let (response, state) = harness.wheel(vec2(-7.0, 0.0));
        let state = state.expect("state stored");

        assert_eq!(response.scroll_left, 7.0);
        assert_in_lockstep(&response, &state);
    }

    #[test]
    fn vertical_wheel_over_middle_band_scrolls_rows() {
        let harness = Harness::new(OVER_BODY);
        let (response, state) = harness.wheel(vec2(0.0, -7.0));

        assert!(response.scroll_top > 0.0, "{response:?}");
        assert_eq!(response.scroll_left, 0.0);
        assert_in_lockstep(&response, &state.expect("state stored"));
    }

    #[test]
    fn reset_returns_to_the_first_column() {
        let harness = Harness::new(OVER_BODY);
        assert_eq!(harness.wheel(vec2(-7.0, 0.0)).0.scroll_left, 7.0);

        let (_, state) = harness.frame_then(Vec::new(), |ui| {
            FrozenTable::<Vec<crate::Row>>::reset(ui, SALT);
        });
        assert_eq!(state, None);

        let (response, state) = harness.frame(Vec::new());
        assert_eq!(response.scroll_left, 0.0);
        assert_in_lockstep(&response, &state.expect("state stored"));
    }
}
