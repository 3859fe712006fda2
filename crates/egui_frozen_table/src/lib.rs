//! A virtualized [`egui`] table with frozen leading and trailing column groups.
//!
//! Columns are split positionally into three groups: a left group and a right group
//! that stay pinned while the middle group scrolls horizontally underneath them.
//! Only the rows that overlap the viewport are laid out and painted, so tables with
//! many thousands of rows cost the same per frame as tables with a screenful.
//!
//! The geometry, windowing and scroll-synchronization logic does not depend on egui
//! and can be driven directly through [`TableView`]; [`FrozenTable`] is the egui widget
//! built on top of it.
//!
//! ### Example
//! ```
//! # egui::__run_test_ui(|ui| {
//! use egui_frozen_table::{CellValue, Column, FrozenTable, Row};
//!
//! let columns = vec![
//!     Column::new("id", "ID", 120.0),
//!     Column::new("name", "Name", 180.0),
//!     Column::new("city", "City", 120.0),
//!     Column::new("status", "Status", 100.0),
//!     Column::new("total", "Total", 120.0),
//! ];
//! let rows: Vec<Row> = (0..10_000)
//!     .map(|i| {
//!         Row::new()
//!             .with("id", format!("ROW{:04}", i + 1))
//!             .with("name", "Grace Lee")
//!             .with("status", "Active")
//!             .with("total", CellValue::Number(1000.0 + i as f64))
//!     })
//!     .collect();
//!
//! FrozenTable::new(&columns, &rows)
//!     .height(300.0)
//!     .row_height(24.0)
//!     .show(ui);
//! # });
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![allow(clippy::float_cmp)]

mod column;
mod layout;
mod options;
mod row;
mod row_renderer;
mod style;
mod sync;
mod table;
mod view;
mod windowing;

pub use crate::column::{Column, ColumnGroup, ColumnPartition, GroupWidths};
pub use crate::layout::{LayoutMeasurer, ResizeHub, ResizeObservation};
pub use crate::options::{FrozenCounts, TableOptions};
pub use crate::row::{Cell, CellValue, Row, TableData};
pub use crate::row_renderer::{Band, BandKind, CellView, RowContext, RowView};
pub use crate::style::TableStyle;
pub use crate::sync::{ScrollOrigin, ScrollSync, ScrollUpdate};
pub use crate::table::{FrozenTable, FrozenTableResponse, footer_text};
pub use crate::view::TableView;
pub use crate::windowing::{FixedSizeList, RowWindow, SlotStyle, WindowedList};

/// Panic in debug builds, log otherwise.
macro_rules! log_or_panic {
    ($fmt: literal) => {$crate::log_or_panic!($fmt,)};
    ($fmt: literal, $($arg: tt)*) => {{
        if cfg!(debug_assertions) {
            panic!($fmt, $($arg)*);
        } else {
            log::error!($fmt, $($arg)*);
        }
    }};
}
pub(crate) use log_or_panic;
