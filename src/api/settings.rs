use serde::{Deserialize, Serialize};

use crate::core::{
    CHART_KIND_ATTRIBUTE, ChartKind, FILL_ATTRIBUTE, TOOLTIP_FORMAT_ATTRIBUTE, TableElement,
};
use crate::error::{ChartError, ChartResult};

use super::{BuildOptions, TooltipFormat};

/// Chart settings carried as attributes on the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableChartSettings {
    pub kind: ChartKind,
    pub tooltip_format: TooltipFormat,
    pub fill: bool,
}

impl TableChartSettings {
    /// Reads the chart kind (required), tooltip format and fill flag.
    pub fn from_table(table: &TableElement) -> ChartResult<Self> {
        let kind = table
            .attribute(CHART_KIND_ATTRIBUTE)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ChartError::MissingChartKind {
                table_id: table.id_or_anonymous().to_owned(),
            })
            .and_then(ChartKind::from_attribute)?;

        Ok(Self {
            kind,
            tooltip_format: table
                .attribute(TOOLTIP_FORMAT_ATTRIBUTE)
                .map(TooltipFormat::from_mode)
                .unwrap_or_default(),
            fill: table
                .attribute(FILL_ATTRIBUTE)
                .is_some_and(|value| value.trim() == "true"),
        })
    }

    #[must_use]
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions::default()
            .with_tooltip_format(self.tooltip_format)
            .with_fill(self.fill)
    }
}
