use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Table section required by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSectionKind {
    Head,
    Body,
}

impl std::fmt::Display for TableSectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Head => f.write_str("header"),
            Self::Body => f.write_str("body"),
        }
    }
}

/// Coarse failure taxonomy used by hosts to decide how to report an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Missing or invalid table attributes, missing source element.
    Configuration,
    /// Source table lacks a header or body section.
    Structure,
    /// Drawing surface or rendering backend failure.
    Render,
    /// Malformed input documents.
    Data,
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("table `{table_id}` not found")]
    MissingSource { table_id: String },

    #[error("no `data-chart-type` attribute found on table `{table_id}`")]
    MissingChartKind { table_id: String },

    #[error("unsupported chart kind `{0}`")]
    UnsupportedChartKind(String),

    #[error("table must have both a header and a body section (missing {section})")]
    MissingSection { section: TableSectionKind },

    #[error("drawing surface `{surface_id}` not found")]
    MissingSurface { surface_id: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("rendering backend failure: {0}")]
    Backend(String),
}

impl ChartError {
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::MissingSource { .. }
            | Self::MissingChartKind { .. }
            | Self::UnsupportedChartKind(_) => ErrorClass::Configuration,
            Self::MissingSection { .. } => ErrorClass::Structure,
            Self::MissingSurface { .. } | Self::Backend(_) => ErrorClass::Render,
            Self::InvalidData(_) => ErrorClass::Data,
        }
    }
}
