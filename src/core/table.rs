use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const CHART_KIND_ATTRIBUTE: &str = "data-chart-type";
pub const TOOLTIP_FORMAT_ATTRIBUTE: &str = "data-tooltip-format";
pub const FILL_ATTRIBUTE: &str = "data-fill";

/// Semantic role of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Header,
    #[default]
    Data,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub kind: CellKind,
    #[serde(default)]
    pub text: String,
}

impl TableCell {
    #[must_use]
    pub fn header(text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Header,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn data(text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Data,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

impl TableRow {
    #[must_use]
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Header row: every cell is a column header.
    #[must_use]
    pub fn headers<S: AsRef<str>>(titles: &[S]) -> Self {
        Self::new(
            titles
                .iter()
                .map(|t| TableCell::header(t.as_ref()))
                .collect(),
        )
    }

    /// Body row with a header label cell followed by data cells.
    #[must_use]
    pub fn labeled<S: AsRef<str>>(label: &str, values: &[S]) -> Self {
        let mut cells = Vec::with_capacity(values.len() + 1);
        cells.push(TableCell::header(label));
        cells.extend(values.iter().map(|v| TableCell::data(v.as_ref())));
        Self::new(cells)
    }

    /// Splits the row into its label cell and the value cells after it.
    ///
    /// A row that marks a header cell uses the first header cell as its label
    /// and its data cells as values. Otherwise the first cell is the label.
    #[must_use]
    pub fn label_and_values(&self) -> (Option<&TableCell>, Vec<&TableCell>) {
        if let Some(label) = self.cells.iter().find(|c| c.kind == CellKind::Header) {
            let values = self
                .cells
                .iter()
                .filter(|c| c.kind == CellKind::Data)
                .collect();
            return (Some(label), values);
        }
        let mut cells = self.cells.iter();
        let label = cells.next();
        (label, cells.collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableSection {
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

impl TableSection {
    #[must_use]
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self { rows }
    }
}

/// Typed view of a source table: attributes plus optional head/body sections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableElement {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
    #[serde(default)]
    pub head: Option<TableSection>,
    #[serde(default)]
    pub body: Option<TableSection>,
}

impl TableElement {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_head(mut self, row: TableRow) -> Self {
        self.head.get_or_insert_with(TableSection::default).rows.push(row);
        self
    }

    #[must_use]
    pub fn with_body_row(mut self, row: TableRow) -> Self {
        self.body.get_or_insert_with(TableSection::default).rows.push(row);
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn id_or_anonymous(&self) -> &str {
        self.id.as_deref().unwrap_or("<anonymous>")
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse table json: {e}")))
    }
}
