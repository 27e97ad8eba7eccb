use tracing::{debug, error, trace};

use crate::core::{CategorySeries, ChartFamily, ChartKind, ParsedSeriesData, TableElement};
use crate::error::{ChartError, ChartResult, TableSectionKind};

/// Reads a [`TableElement`] into aligned series data.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableParser;

impl TableParser {
    /// Parses `table` for the given chart kind.
    ///
    /// Both a header and a body section are required. Category-axis kinds
    /// zero-fill absent or non-numeric cells so every series stays aligned;
    /// pie/doughnut kinds skip rows that lack a label cell or a value cell.
    pub fn parse(table: &TableElement, kind: ChartKind) -> ChartResult<ParsedSeriesData> {
        let table_id = table.id_or_anonymous();
        let Some(head) = table.head.as_ref() else {
            error!(table_id, "table has no header section");
            return Err(ChartError::MissingSection {
                section: TableSectionKind::Head,
            });
        };
        let Some(body) = table.body.as_ref() else {
            error!(table_id, "table has no body section");
            return Err(ChartError::MissingSection {
                section: TableSectionKind::Body,
            });
        };

        let parsed = match kind.family() {
            ChartFamily::CategoryAxis => {
                let column_titles: Vec<String> = head
                    .rows
                    .last()
                    .map(|row| {
                        row.cells
                            .iter()
                            .skip(1)
                            .map(|cell| cell.text.trim().to_owned())
                            .collect()
                    })
                    .unwrap_or_default();

                let mut labels = Vec::with_capacity(body.rows.len());
                let mut columns = vec![Vec::with_capacity(body.rows.len()); column_titles.len()];
                for row in &body.rows {
                    let (label, values) = row.label_and_values();
                    labels.push(label.map(|c| c.text.trim().to_owned()).unwrap_or_default());
                    for (column_index, column) in columns.iter_mut().enumerate() {
                        let value = values
                            .get(column_index)
                            .map_or(0.0, |cell| coerce_cell_value(&cell.text));
                        column.push(value);
                    }
                }

                let series = column_titles
                    .into_iter()
                    .zip(columns)
                    .map(|(name, values)| CategorySeries::new(name, values))
                    .collect();
                ParsedSeriesData::MultiSeries { labels, series }
            }
            ChartFamily::Radial => {
                let mut labels = Vec::new();
                let mut values = Vec::new();
                for (row_index, row) in body.rows.iter().enumerate() {
                    let (label, row_values) = row.label_and_values();
                    match (label, row_values.first()) {
                        (Some(label), Some(value)) => {
                            labels.push(label.text.trim().to_owned());
                            values.push(coerce_cell_value(&value.text));
                        }
                        _ => {
                            trace!(table_id, row_index, "skipping slice row without label/value");
                        }
                    }
                }
                ParsedSeriesData::SingleValue { labels, values }
            }
        };

        debug!(
            table_id,
            kind = kind.as_str(),
            labels = parsed.labels().len(),
            series = parsed.series().len(),
            "parsed table"
        );
        Ok(parsed)
    }
}

/// Coerces cell text to a number, falling back to `0` for anything unreadable.
#[must_use]
pub fn coerce_cell_value(text: &str) -> f64 {
    parse_leading_decimal(text)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Locale-free parse of the longest decimal prefix of `text`.
///
/// Leading whitespace is ignored and trailing garbage is dropped, so
/// `"12.5kg"` reads as `12.5` and `"1,234"` as `1`. Returns `None` when no
/// digits lead the text.
#[must_use]
pub fn parse_leading_decimal(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}
