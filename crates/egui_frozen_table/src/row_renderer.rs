//! Turns one row record into three horizontal bands of cells, and paints them.
//!
//! [`RowView::layout`] is pure: it only depends on the row, its slot and the shared
//! [`RowContext`]. [`paint_row`] draws a laid-out row into an egui [`Ui`].

use egui::{Align2, FontId, Id, Pos2, Rect, Sense, Ui, pos2, vec2};

use crate::{
    column::{Column, ColumnGroup, ColumnPartition, GroupWidths},
    layout::LayoutMeasurer,
    row::Row,
    style::ResolvedStyle,
    windowing::SlotStyle,
};

/// Everything a row needs to know about the table, shared by all visible rows.
#[derive(Clone, Copy, Debug)]
pub struct RowContext<'a> {
    pub partition: ColumnPartition<'a>,
    pub widths: GroupWidths,

    /// Clip width of the middle band.
    pub available_middle_width: f32,

    /// Current horizontal offset of the middle columns.
    pub scroll_left: f32,
}

impl<'a> RowContext<'a> {
    pub fn new(
        partition: ColumnPartition<'a>,
        measurer: &LayoutMeasurer,
        scroll_left: f32,
    ) -> Self {
        Self {
            partition,
            widths: partition.widths(),
            available_middle_width: measurer.available_middle_width(),
            scroll_left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BandKind {
    Left,
    Middle,
    Right,
}

/// One laid-out cell. `x` is relative to the start of the band's content.
#[derive(Clone, Debug, PartialEq)]
pub struct CellView<'a> {
    pub key: &'a str,
    pub x: f32,
    pub width: f32,

    /// What the cell shows. Empty for a missing value.
    pub text: String,

    /// The raw value, for tooltips. `None` for a missing value.
    pub hover_text: Option<String>,
}

/// A horizontal run of cells, clipped to `x .. x + width` within the row.
#[derive(Clone, Debug, PartialEq)]
pub struct Band<'a> {
    pub kind: BandKind,

    /// Left edge of the band relative to the row.
    pub x: f32,

    /// Visible width of the band.
    pub width: f32,

    /// Horizontal shift applied to the cells inside the band.
    /// Zero for the frozen bands, `-scroll_left` for the middle one.
    pub content_offset: f32,

    pub cells: Vec<CellView<'a>>,
}

impl Band<'_> {
    /// Cell `x` range relative to the row, before clipping.
    pub fn cell_span(&self, cell: &CellView<'_>) -> (f32, f32) {
        let min = self.x + self.content_offset + cell.x;
        (min, min + cell.width)
    }
}

/// A row laid out into its left, middle and right bands.
#[derive(Clone, Debug, PartialEq)]
pub struct RowView<'a> {
    pub slot: SlotStyle,

    /// Even rows get the stripe fill.
    pub striped: bool,

    bands: [Band<'a>; 3],
}

impl<'a> RowView<'a> {
    pub fn layout(slot: SlotStyle, row: &Row, ctx: &RowContext<'a>) -> Self {
        let left = ctx.widths.left;
        let middle_clip = ctx.available_middle_width.max(0.0);

        Self {
            slot,
            striped: slot.index.is_multiple_of(2),
            bands: [
                band(BandKind::Left, 0.0, left, 0.0, ctx.partition.left(), row),
                band(
                    BandKind::Middle,
                    left,
                    middle_clip,
                    -ctx.scroll_left,
                    ctx.partition.middle(),
                    row,
                ),
                band(
                    BandKind::Right,
                    left + middle_clip,
                    ctx.widths.right,
                    0.0,
                    ctx.partition.right(),
                    row,
                ),
            ],
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.slot.index
    }

    pub fn band(&self, kind: BandKind) -> &Band<'a> {
        match kind {
            BandKind::Left => &self.bands[0],
            BandKind::Middle => &self.bands[1],
            BandKind::Right => &self.bands[2],
        }
    }

    pub fn bands(&self) -> &[Band<'a>] {
        &self.bands
    }

    /// The cell under the row-relative `x`, honoring clipping.
    pub fn cell_at(&self, x: f32) -> Option<&CellView<'a>> {
        self.bands
            .iter()
            .filter(|band| band.x <= x && x < band.x + band.width)
            .flat_map(|band| {
                band.cells.iter().filter(move |cell| {
                    let (min, max) = band.cell_span(cell);
                    min <= x && x < max
                })
            })
            .next()
    }
}

fn band<'a>(
    kind: BandKind,
    x: f32,
    width: f32,
    content_offset: f32,
    group: ColumnGroup<'a>,
    row: &Row,
) -> Band<'a> {
    let mut cursor = 0.0;
    let cells = group
        .columns()
        .iter()
        .map(|column: &'a Column| {
            let value = row.get(&column.key);
            let cell = CellView {
                key: column.key.as_str(),
                x: cursor,
                width: column.width,
                text: value.display_text(),
                hover_text: value.value().map(ToString::to_string),
            };
            cursor += column.width;
            cell
        })
        .collect();

    Band {
        kind,
        x,
        width,
        content_offset,
        cells,
    }
}

// ----------------------------------------------------------------------------

/// Paint a laid-out row into `rect` (whose left edge is the table's left edge).
///
/// Hovering the row shows the raw value of the cell under the pointer.
pub(crate) fn paint_row(
    ui: &mut Ui,
    rect: Rect,
    view: &RowView<'_>,
    style: &ResolvedStyle,
    id: Id,
) {
    profiling::function_scope!();

    let response = ui.interact(rect, id.with(view.index()), Sense::hover());
    let hovered = response.hovered();
    let font_id = FontId::default();

    for band in view.bands() {
        let band_rect = Rect::from_min_size(
            pos2(rect.left() + band.x, rect.top()),
            vec2(band.width, rect.height()),
        );
        if !band_rect.is_positive() {
            continue;
        }
        let painter = ui.painter_at(band_rect);

        let frozen = band.kind != BandKind::Middle;
        let fill = if hovered {
            Some(style.hovered_bg)
        } else if frozen {
            Some(style.frozen_bg)
        } else if view.striped {
            style.striped_bg
        } else {
            None
        };
        if let Some(fill) = fill {
            painter.rect_filled(band_rect, 0.0, fill);
            if frozen
                && view.striped
                && !hovered
                && let Some(stripe) = style.striped_bg
            {
                painter.rect_filled(band_rect, 0.0, stripe);
            }
        }

        for cell in &band.cells {
            let (min_x, max_x) = band.cell_span(cell);
            let cell_rect = Rect::from_x_y_ranges(
                rect.left() + min_x..=rect.left() + max_x,
                rect.y_range(),
            );
            if !cell_rect.intersects(band_rect) {
                continue;
            }

            let text_clip = cell_rect.shrink2(vec2(style.cell_padding, 0.0));
            if !cell.text.is_empty() && text_clip.is_positive() {
                painter.with_clip_rect(text_clip.intersect(band_rect)).text(
                    Pos2::new(text_clip.left(), cell_rect.center().y),
                    Align2::LEFT_CENTER,
                    &cell.text,
                    font_id.clone(),
                    style.text_color,
                );
            }
            painter.vline(cell_rect.right(), cell_rect.y_range(), style.vertical_grid);
        }

        match band.kind {
            BandKind::Left => {
                painter.vline(band_rect.right(), band_rect.y_range(), style.frozen_border);
            }
            BandKind::Right => {
                painter.vline(band_rect.left(), band_rect.y_range(), style.frozen_border);
            }
            BandKind::Middle => {}
        }
    }

    ui.painter()
        .hline(rect.x_range(), rect.bottom(), style.horizontal_grid);

    if let Some(pointer) = response.hover_pos()
        && let Some(text) = view
            .cell_at(pointer.x - rect.left())
            .and_then(|cell| cell.hover_text.clone())
    {
        response.on_hover_text(text);
    }
}
