use serde::{Deserialize, Serialize};

use super::{DEFAULT_LABEL_WRAP_WIDTH, TooltipFormat};

/// Tooling options consumed by [`super::ChartConfigBuilder`].
///
/// Serializable so hosts can keep chart presets next to their tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    #[serde(default)]
    pub tooltip_format: TooltipFormat,
    /// Fill under `line` charts. Other category-axis kinds always fill.
    #[serde(default)]
    pub fill: bool,
    #[serde(default = "default_label_wrap_width")]
    pub label_wrap_width: usize,
    /// Forces legend visibility; `None` uses the per-kind default.
    #[serde(default)]
    pub legend_display: Option<bool>,
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u32,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            tooltip_format: TooltipFormat::default(),
            fill: false,
            label_wrap_width: default_label_wrap_width(),
            legend_display: None,
            animation_duration_ms: default_animation_duration_ms(),
        }
    }
}

impl BuildOptions {
    #[must_use]
    pub fn with_tooltip_format(mut self, format: TooltipFormat) -> Self {
        self.tooltip_format = format;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    #[must_use]
    pub fn with_label_wrap_width(mut self, width: usize) -> Self {
        self.label_wrap_width = width;
        self
    }

    #[must_use]
    pub fn with_legend_display(mut self, display: Option<bool>) -> Self {
        self.legend_display = display;
        self
    }

    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration_ms: u32) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }
}

fn default_label_wrap_width() -> usize {
    DEFAULT_LABEL_WRAP_WIDTH
}

fn default_animation_duration_ms() -> u32 {
    1_000
}
