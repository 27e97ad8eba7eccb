use serde::Serialize;

use crate::core::{ChartKind, RenderPrimitive};
use crate::render::{Color, ColorSpec, PaintContext, ResolvedColor};

use super::TooltipFormat;

/// Backend-agnostic chart configuration for one render cycle.
///
/// Serializes to the usual chart-engine shape:
/// `{ "type", "data": { "labels", "datasets" }, "options" }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfiguration {
    pub kind: ChartKind,
    #[serde(rename = "type")]
    pub primitive: RenderPrimitive,
    pub data: ChartData,
    pub options: RenderOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetConfig>,
}

/// Fill of a dataset: one spec for the whole series or one per slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DatasetFill {
    Uniform(ColorSpec),
    PerElement(Vec<ColorSpec>),
}

impl DatasetFill {
    #[must_use]
    pub fn for_element(&self, element_index: usize) -> Option<&ColorSpec> {
        match self {
            Self::Uniform(spec) => Some(spec),
            Self::PerElement(specs) => specs.get(element_index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: DatasetFill,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Line fill flag; absent for pie/doughnut.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub animation: AnimationOptions,
    pub plugins: PluginOptions,
    /// Category-axis charts only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<ScalesConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnimationOptions {
    pub duration: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PluginOptions {
    pub legend: LegendConfig,
    pub tooltip: TooltipConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendConfig {
    pub display: bool,
    pub position: LegendPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TooltipConfig {
    pub format: TooltipFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalesConfig {
    pub x: CategoryAxisConfig,
    pub y: ValueAxisConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxisConfig {
    pub stacked: bool,
    /// Category labels after word-wrap, one entry of lines per label.
    pub tick_labels: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxisConfig {
    pub begin_at_zero: bool,
    pub stacked: bool,
}

impl ChartConfiguration {
    /// Paint callback: resolves the fill of one element against live geometry.
    ///
    /// Returns `None` when the element does not exist or when a gradient
    /// cannot be resolved yet because the surface has no layout.
    #[must_use]
    pub fn resolve_fill(&self, context: PaintContext) -> Option<ResolvedColor> {
        self.data
            .datasets
            .get(context.dataset_index)?
            .background_color
            .for_element(context.element_index)?
            .resolve(context.chart_area)
    }

    /// Tooltip label callback.
    #[must_use]
    pub fn format_tooltip(&self, raw: f64) -> String {
        self.options.plugins.tooltip.format.format(raw)
    }

    /// Stack ids in dataset order.
    #[must_use]
    pub fn stack_ids(&self) -> Vec<Option<&str>> {
        self.data
            .datasets
            .iter()
            .map(|d| d.stack.as_deref())
            .collect()
    }
}
