use egui::{Color32, Stroke, Visuals};

/// Styling configuration for table appearance.
///
/// All colors and strokes are optional. When `None`, the table uses `ui.visuals()` defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct TableStyle {
    /// Background color for striped (even-indexed) rows.
    /// Falls back to `ui.visuals().faint_bg_color`.
    pub striped_bg_color: Option<Color32>,

    /// Background color for the hovered row.
    /// Falls back to `ui.visuals().widgets.hovered.weak_bg_fill`.
    pub hovered_bg_color: Option<Color32>,

    /// Background color behind the frozen column groups.
    /// Falls back to `ui.visuals().extreme_bg_color`.
    pub frozen_bg_color: Option<Color32>,

    /// Header background color.
    /// Falls back to `ui.visuals().widgets.noninteractive.bg_fill`.
    pub header_bg_color: Option<Color32>,

    /// Stroke between cells.
    /// Falls back to `ui.visuals().widgets.noninteractive.bg_stroke`.
    pub vertical_grid_stroke: Option<Stroke>,

    /// Stroke below each row.
    /// Falls back to `ui.visuals().widgets.noninteractive.bg_stroke`.
    pub horizontal_grid_stroke: Option<Stroke>,

    /// Stroke separating the frozen groups from the scrolling middle.
    /// Falls back to a 2 point wide `ui.visuals().widgets.active.bg_stroke`.
    pub frozen_border_stroke: Option<Stroke>,

    /// Horizontal padding inside each cell.
    pub cell_padding: f32,

    /// Stripe even rows at all.
    pub striped: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            striped_bg_color: None,
            hovered_bg_color: None,
            frozen_bg_color: None,
            header_bg_color: None,
            vertical_grid_stroke: None,
            horizontal_grid_stroke: None,
            frozen_border_stroke: None,
            cell_padding: 12.0,
            striped: true,
        }
    }
}

impl TableStyle {
    /// Create a new empty style (all defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the striped row background color.
    #[inline]
    pub fn striped_bg_color(mut self, color: Color32) -> Self {
        self.striped_bg_color = Some(color);
        self
    }

    /// Set the hovered row background color.
    #[inline]
    pub fn hovered_bg_color(mut self, color: Color32) -> Self {
        self.hovered_bg_color = Some(color);
        self
    }

    /// Set the background of the frozen groups.
    #[inline]
    pub fn frozen_bg_color(mut self, color: Color32) -> Self {
        self.frozen_bg_color = Some(color);
        self
    }

    /// Set the header background color.
    #[inline]
    pub fn header_bg_color(mut self, color: Color32) -> Self {
        self.header_bg_color = Some(color);
        self
    }

    /// Set the vertical grid line stroke.
    #[inline]
    pub fn vertical_grid_stroke(mut self, stroke: impl Into<Stroke>) -> Self {
        self.vertical_grid_stroke = Some(stroke.into());
        self
    }

    /// Set the horizontal grid line stroke.
    #[inline]
    pub fn horizontal_grid_stroke(mut self, stroke: impl Into<Stroke>) -> Self {
        self.horizontal_grid_stroke = Some(stroke.into());
        self
    }

    /// Set the stroke drawn at the inner edge of each frozen group.
    #[inline]
    pub fn frozen_border_stroke(mut self, stroke: impl Into<Stroke>) -> Self {
        self.frozen_border_stroke = Some(stroke.into());
        self
    }

    #[inline]
    pub fn cell_padding(mut self, cell_padding: f32) -> Self {
        self.cell_padding = cell_padding;
        self
    }

    /// Enable striped row backgrounds (default: `true`).
    #[inline]
    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    /// Fill the given style options in from `visuals`.
    pub(crate) fn resolve(&self, visuals: &Visuals) -> ResolvedStyle {
        let grid = visuals.widgets.noninteractive.bg_stroke;
        ResolvedStyle {
            striped_bg: self
                .striped
                .then(|| self.striped_bg_color.unwrap_or(visuals.faint_bg_color)),
            hovered_bg: self
                .hovered_bg_color
                .unwrap_or(visuals.widgets.hovered.weak_bg_fill),
            frozen_bg: self.frozen_bg_color.unwrap_or(visuals.extreme_bg_color),
            header_bg: self
                .header_bg_color
                .unwrap_or(visuals.widgets.noninteractive.bg_fill),
            vertical_grid: self.vertical_grid_stroke.unwrap_or(grid),
            horizontal_grid: self.horizontal_grid_stroke.unwrap_or(grid),
            frozen_border: self.frozen_border_stroke.unwrap_or(Stroke::new(
                2.0,
                visuals.widgets.active.bg_stroke.color,
            )),
            text_color: visuals.text_color(),
            header_text_color: visuals.strong_text_color(),
            cell_padding: self.cell_padding.max(0.0),
        }
    }
}

/// [`TableStyle`] with every fallback applied.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ResolvedStyle {
    pub striped_bg: Option<Color32>,
    pub hovered_bg: Color32,
    pub frozen_bg: Color32,
    pub header_bg: Color32,
    pub vertical_grid: Stroke,
    pub horizontal_grid: Stroke,
    pub frozen_border: Stroke,
    pub text_color: Color32,
    pub header_text_color: Color32,
    pub cell_padding: f32,
}
