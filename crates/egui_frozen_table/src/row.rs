//! Row records and the data-source abstraction the table reads them through.

use std::fmt;

/// A scalar cell value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            // `f64` already prints integral values without a trailing `.0`.
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<f64> for CellValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i64> for CellValue {
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<u32> for CellValue {
    fn from(number: u32) -> Self {
        Self::Number(number.into())
    }
}

/// The result of looking up a column key in a [`Row`].
///
/// [`Cell::Absent`] is distinct from every value, including an empty string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell<'a> {
    Value(&'a CellValue),
    Absent,
}

impl<'a> Cell<'a> {
    #[inline]
    pub fn value(self) -> Option<&'a CellValue> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent => None,
        }
    }

    #[inline]
    pub fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Text shown in the cell. Absent cells display as the empty string.
    pub fn display_text(self) -> String {
        match self {
            Self::Value(value) => value.to_string(),
            Self::Absent => String::new(),
        }
    }
}

/// One record: a mapping from column key to value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Row {
    values: ahash::HashMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[inline]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Cell<'_> {
        self.values.get(key).map_or(Cell::Absent, Cell::Value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// An indexable, length-known, read-only sequence of rows.
pub trait TableData {
    fn len(&self) -> usize;

    /// The row at `index`, or `None` past the end.
    fn row(&self, index: usize) -> Option<&Row>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TableData for [Row] {
    #[inline]
    fn len(&self) -> usize {
        <[Row]>::len(self)
    }

    #[inline]
    fn row(&self, index: usize) -> Option<&Row> {
        self.get(index)
    }
}

impl TableData for Vec<Row> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn row(&self, index: usize) -> Option<&Row> {
        self.as_slice().get(index)
    }
}

impl<T: TableData + ?Sized> TableData for &T {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn row(&self, index: usize) -> Option<&Row> {
        (**self).row(index)
    }
}
