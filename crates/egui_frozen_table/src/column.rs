//! Column definitions and the positional split into frozen and scrolling groups.

use std::ops::Range;

use crate::options::FrozenCounts;

/// One column of the table.
///
/// Columns are immutable once handed to the table. Their position in the column list
/// decides which group they land in, see [`ColumnPartition`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Column {
    /// Key used to look up the cell value in each [`crate::Row`]. Unique within a table.
    pub key: String,

    /// Text shown in the header.
    pub label: String,

    /// Width in points. Expected to be positive.
    pub width: f32,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>, width: f32) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width,
        }
    }
}

/// An ordered run of columns plus its summed width.
#[derive(Clone, Copy, Debug)]
pub struct ColumnGroup<'a> {
    columns: &'a [Column],
}

impl<'a> ColumnGroup<'a> {
    #[inline]
    pub fn columns(&self) -> &'a [Column] {
        self.columns
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Sum of the member widths.
    pub fn total_width(&self) -> f32 {
        self.columns.iter().map(|c| c.width).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.columns.iter().map(|c| c.key.as_str())
    }
}

/// Total widths of the three groups, in points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct GroupWidths {
    pub left: f32,
    pub middle: f32,
    pub right: f32,
}

impl GroupWidths {
    /// Width of both frozen groups together.
    #[inline]
    pub fn frozen(&self) -> f32 {
        self.left + self.right
    }
}

/// The column list carved into left-frozen, middle and right-frozen groups.
///
/// With `N` columns and frozen counts `l`/`r` the groups are the positional slices
/// `[0, l)`, `[l, N - r)` and `[N - r, N)`. Slice bounds are clamped into `0..=N`
/// and an inverted range is empty, so when `N < l + r` the frozen groups overlap
/// and the middle group is empty:
///
/// ```
/// use egui_frozen_table::{Column, ColumnPartition, FrozenCounts};
///
/// let columns: Vec<Column> = ["a", "b", "c"]
///     .iter()
///     .map(|k| Column::new(*k, *k, 100.0))
///     .collect();
/// let partition = ColumnPartition::new(&columns, FrozenCounts::default());
///
/// assert_eq!(partition.left().keys().collect::<Vec<_>>(), ["a", "b"]);
/// assert!(partition.middle().is_empty());
/// assert_eq!(partition.right().keys().collect::<Vec<_>>(), ["b", "c"]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ColumnPartition<'a> {
    columns: &'a [Column],
    left: ColumnGroup<'a>,
    middle: ColumnGroup<'a>,
    right: ColumnGroup<'a>,
}

impl<'a> ColumnPartition<'a> {
    pub fn new(columns: &'a [Column], frozen: FrozenCounts) -> Self {
        let n = columns.len() as isize;
        let left_count = frozen.left as isize;
        let right_start = n - frozen.right as isize;

        Self {
            columns,
            left: ColumnGroup {
                columns: positional_slice(columns, 0, left_count),
            },
            middle: ColumnGroup {
                columns: positional_slice(columns, left_count, right_start),
            },
            right: ColumnGroup {
                columns: positional_slice(columns, right_start, n),
            },
        }
    }

    /// All columns, in source order.
    #[inline]
    pub fn columns(&self) -> &'a [Column] {
        self.columns
    }

    #[inline]
    pub fn left(&self) -> ColumnGroup<'a> {
        self.left
    }

    #[inline]
    pub fn middle(&self) -> ColumnGroup<'a> {
        self.middle
    }

    #[inline]
    pub fn right(&self) -> ColumnGroup<'a> {
        self.right
    }

    pub fn widths(&self) -> GroupWidths {
        GroupWidths {
            left: self.left.total_width(),
            middle: self.middle.total_width(),
            right: self.right.total_width(),
        }
    }

    /// Number of columns actually pinned on each side.
    pub fn frozen_counts(&self) -> FrozenCounts {
        FrozenCounts {
            left: self.left.len(),
            right: self.right.len(),
        }
    }
}

fn positional_slice(columns: &[Column], start: isize, end: isize) -> &[Column] {
    let range = clamp_range(columns.len(), start, end);
    &columns[range]
}

fn clamp_range(len: usize, start: isize, end: isize) -> Range<usize> {
    let clamp = |i: isize| i.clamp(0, len as isize) as usize;
    let (start, end) = (clamp(start), clamp(end));
    if start < end { start..end } else { start..start }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(n: usize) -> Vec<Column> {
        (0..n)
            .map(|i| Column::new(format!("c{i}"), format!("C{i}"), 10.0 * (i + 1) as f32))
            .collect()
    }

    fn keys(group: ColumnGroup<'_>) -> Vec<&str> {
        group.keys().collect()
    }

    #[test]
    fn partition_covers_all_columns_in_order() {
        for n in 4..40 {
            let columns = columns(n);
            let partition = ColumnPartition::new(&columns, FrozenCounts::default());

            assert_eq!(
                partition.left().len() + partition.middle().len() + partition.right().len(),
                n
            );

            let joined: Vec<&Column> = partition
                .left()
                .columns()
                .iter()
                .chain(partition.middle().columns())
                .chain(partition.right().columns())
                .collect();
            assert!(joined.iter().zip(&columns).all(|(a, b)| *a == b));
        }
    }

    #[test]
    fn three_columns_overlap_on_the_middle_column() {
        let columns = columns(3);
        let partition = ColumnPartition::new(&columns, FrozenCounts::default());

        assert_eq!(keys(partition.left()), ["c0", "c1"]);
        assert!(partition.middle().is_empty());
        assert_eq!(keys(partition.right()), ["c1", "c2"]);
    }

    #[test]
    fn short_lists_follow_slice_semantics() {
        let empty = columns(0);
        let partition = ColumnPartition::new(&empty, FrozenCounts::default());
        assert!(partition.left().is_empty());
        assert!(partition.middle().is_empty());
        assert!(partition.right().is_empty());

        let one = columns(1);
        let partition = ColumnPartition::new(&one, FrozenCounts::default());
        assert_eq!(keys(partition.left()), ["c0"]);
        assert!(partition.middle().is_empty());
        assert_eq!(keys(partition.right()), ["c0"]);

        let two = columns(2);
        let partition = ColumnPartition::new(&two, FrozenCounts::default());
        assert_eq!(keys(partition.left()), ["c0", "c1"]);
        assert!(partition.middle().is_empty());
        assert_eq!(keys(partition.right()), ["c0", "c1"]);
    }

    #[test]
    fn custom_counts() {
        let columns = columns(6);
        let partition = ColumnPartition::new(&columns, FrozenCounts { left: 1, right: 0 });
        assert_eq!(keys(partition.left()), ["c0"]);
        assert_eq!(keys(partition.middle()), ["c1", "c2", "c3", "c4", "c5"]);
        assert!(partition.right().is_empty());
        assert_eq!(partition.frozen_counts(), FrozenCounts { left: 1, right: 0 });
    }

    #[test]
    fn group_widths() {
        let columns = columns(6);
        let widths = ColumnPartition::new(&columns, FrozenCounts::default()).widths();
        assert_eq!(widths.left, 10.0 + 20.0);
        assert_eq!(widths.middle, 30.0 + 40.0);
        assert_eq!(widths.right, 50.0 + 60.0);
        assert_eq!(widths.frozen(), 140.0);
    }
}
