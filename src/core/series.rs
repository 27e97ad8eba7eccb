use serde::{Deserialize, Serialize};

/// One named sequence of values aligned to the shared category labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeries {
    pub name: String,
    pub values: Vec<f64>,
}

impl CategorySeries {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Normalized table content.
///
/// Exactly one shape exists per chart family: category-axis charts carry many
/// aligned series, pie/doughnut charts carry one value per label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ParsedSeriesData {
    MultiSeries {
        labels: Vec<String>,
        series: Vec<CategorySeries>,
    },
    SingleValue {
        labels: Vec<String>,
        values: Vec<f64>,
    },
}

impl ParsedSeriesData {
    #[must_use]
    pub fn labels(&self) -> &[String] {
        match self {
            Self::MultiSeries { labels, .. } | Self::SingleValue { labels, .. } => labels,
        }
    }

    /// Series of a category-axis chart; empty for the single-value shape.
    #[must_use]
    pub fn series(&self) -> &[CategorySeries] {
        match self {
            Self::MultiSeries { series, .. } => series,
            Self::SingleValue { .. } => &[],
        }
    }

    /// Slice values of a pie/doughnut chart; `None` for the multi-series shape.
    #[must_use]
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            Self::MultiSeries { .. } => None,
            Self::SingleValue { values, .. } => Some(values),
        }
    }

    /// Checks that every value sequence has one entry per label.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        match self {
            Self::MultiSeries { labels, series } => {
                series.iter().all(|s| s.values.len() == labels.len())
            }
            Self::SingleValue { labels, values } => values.len() == labels.len(),
        }
    }
}
