use tracing::{debug, error};

use crate::core::{CategorySeries, ChartKind, ParsedSeriesData};
use crate::error::{ChartError, ChartResult};
use crate::render::ColorThemeEngine;

use super::{
    AnimationOptions, BuildOptions, CategoryAxisConfig, ChartConfiguration, ChartData,
    DatasetConfig, DatasetFill, LegendConfig, LegendPosition, PluginOptions, RenderOptions,
    ScalesConfig, TooltipConfig, ValueAxisConfig, wrap_label,
};

/// Stack group shared by every series of a `stacked` chart.
pub const STACK_GROUP_ID: &str = "stack1";

const LINE_TENSION: f64 = 0.3;

/// Combines parsed table data, chart kind and theme into a configuration.
#[derive(Debug, Clone, Default)]
pub struct ChartConfigBuilder {
    theme: ColorThemeEngine,
}

impl ChartConfigBuilder {
    #[must_use]
    pub fn new(theme: ColorThemeEngine) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn theme(&self) -> &ColorThemeEngine {
        &self.theme
    }

    /// Builds the configuration for one render cycle.
    ///
    /// Fails only when the data shape does not match the chart family.
    pub fn build(
        &self,
        parsed: &ParsedSeriesData,
        kind: ChartKind,
        options: &BuildOptions,
    ) -> ChartResult<ChartConfiguration> {
        let datasets = match (parsed, kind.is_radial()) {
            (ParsedSeriesData::MultiSeries { series, .. }, false) => series
                .iter()
                .enumerate()
                .map(|(index, series)| self.series_dataset(index, series, kind, options))
                .collect(),
            (ParsedSeriesData::SingleValue { labels, values }, true) => {
                vec![self.slice_dataset(labels.len(), values, kind)]
            }
            _ => {
                error!(kind = kind.as_str(), "parsed data shape does not match chart kind");
                return Err(ChartError::InvalidData(format!(
                    "parsed data shape does not match chart kind `{kind}`"
                )));
            }
        };

        let labels = parsed.labels().to_vec();
        let scales = (!kind.is_radial()).then(|| {
            let stacked = kind == ChartKind::Stacked;
            ScalesConfig {
                x: CategoryAxisConfig {
                    stacked,
                    tick_labels: labels
                        .iter()
                        .map(|label| wrap_label(label, options.label_wrap_width))
                        .collect(),
                },
                y: ValueAxisConfig {
                    begin_at_zero: true,
                    stacked,
                },
            }
        });

        let configuration = ChartConfiguration {
            kind,
            primitive: kind.primitive(),
            data: ChartData { labels, datasets },
            options: RenderOptions {
                responsive: true,
                maintain_aspect_ratio: true,
                animation: AnimationOptions {
                    duration: options.animation_duration_ms,
                },
                plugins: PluginOptions {
                    legend: LegendConfig {
                        display: options.legend_display.unwrap_or(kind.is_radial()),
                        position: LegendPosition::Bottom,
                    },
                    tooltip: TooltipConfig {
                        format: options.tooltip_format,
                    },
                },
                scales,
            },
        };

        debug!(
            kind = kind.as_str(),
            primitive = ?configuration.primitive,
            datasets = configuration.data.datasets.len(),
            labels = configuration.data.labels.len(),
            "built chart configuration"
        );
        Ok(configuration)
    }

    fn series_dataset(
        &self,
        index: usize,
        series: &CategorySeries,
        kind: ChartKind,
        options: &BuildOptions,
    ) -> DatasetConfig {
        let fill = match kind {
            ChartKind::Line => options.fill,
            _ => true,
        };
        let tension = match kind {
            ChartKind::Line | ChartKind::Area => LINE_TENSION,
            _ => 0.0,
        };
        DatasetConfig {
            label: Some(series.name.clone()),
            data: series.values.clone(),
            background_color: DatasetFill::Uniform(self.theme.fill_for(index, kind, fill)),
            border_color: Some(self.theme.base_color(index)),
            fill: Some(fill),
            tension: Some(tension),
            stack: (kind == ChartKind::Stacked).then(|| STACK_GROUP_ID.to_owned()),
        }
    }

    fn slice_dataset(&self, slices: usize, values: &[f64], kind: ChartKind) -> DatasetConfig {
        DatasetConfig {
            label: None,
            data: values.to_vec(),
            background_color: DatasetFill::PerElement(
                (0..slices)
                    .map(|index| self.theme.color_for(index, kind))
                    .collect(),
            ),
            border_color: None,
            fill: None,
            tension: None,
            stack: None,
        }
    }
}
