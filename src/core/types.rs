use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Chart kind requested by the source table.
///
/// `Stacked`, `Grouped` and `Area` are presentation variants: they lower to a
/// base [`RenderPrimitive`] plus extra configuration flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Stacked,
    Grouped,
    Area,
    Pie,
    Doughnut,
}

/// Chart families with different data semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartFamily {
    /// Many named series aligned on a shared category axis.
    CategoryAxis,
    /// One value per category, drawn as slices.
    Radial,
}

/// Base drawing primitive understood by the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderPrimitive {
    Line,
    Bar,
    Pie,
    Doughnut,
}

impl ChartKind {
    pub const ALL: [Self; 7] = [
        Self::Line,
        Self::Bar,
        Self::Stacked,
        Self::Grouped,
        Self::Area,
        Self::Pie,
        Self::Doughnut,
    ];

    /// Parses a table attribute value such as `"stacked"`.
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    pub fn from_attribute(value: &str) -> ChartResult<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ChartError::UnsupportedChartKind(value.trim().to_owned()))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Stacked => "stacked",
            Self::Grouped => "grouped",
            Self::Area => "area",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
        }
    }

    #[must_use]
    pub const fn family(self) -> ChartFamily {
        match self {
            Self::Pie | Self::Doughnut => ChartFamily::Radial,
            Self::Line | Self::Bar | Self::Stacked | Self::Grouped | Self::Area => {
                ChartFamily::CategoryAxis
            }
        }
    }

    #[must_use]
    pub const fn is_radial(self) -> bool {
        matches!(self.family(), ChartFamily::Radial)
    }

    /// Lowers presentation variants onto the backend primitive.
    #[must_use]
    pub const fn primitive(self) -> RenderPrimitive {
        match self {
            Self::Line | Self::Area => RenderPrimitive::Line,
            Self::Bar | Self::Stacked | Self::Grouped => RenderPrimitive::Bar,
            Self::Pie => RenderPrimitive::Pie,
            Self::Doughnut => RenderPrimitive::Doughnut,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_attribute(s)
    }
}

/// Laid-out drawing area of a chart surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ChartArea {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// `true` once the surface has a finite, non-empty layout.
    #[must_use]
    pub fn is_laid_out(self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|v| v.is_finite())
            && self.width() > 0.0
            && self.height() > 0.0
    }
}
