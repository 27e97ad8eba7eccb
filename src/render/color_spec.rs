use serde::Serialize;
use smallvec::SmallVec;

use crate::core::ChartArea;

use super::Color;

/// One gradient stop; `offset` runs from 0 (start) to 1 (end).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

impl ColorStop {
    #[must_use]
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientGeometry {
    /// Top of the chart area to its bottom.
    LinearVertical,
    /// Centered on the chart area, radius is half its smaller side.
    RadialCentered,
}

/// Gradient that can only be resolved once the surface geometry is known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientDescriptor {
    pub stops: SmallVec<[ColorStop; 2]>,
    pub geometry: GradientGeometry,
}

impl GradientDescriptor {
    #[must_use]
    pub fn two_stop(start: Color, end: Color, geometry: GradientGeometry) -> Self {
        let mut stops = SmallVec::new();
        stops.push(ColorStop::new(0.0, start));
        stops.push(ColorStop::new(1.0, end));
        Self { stops, geometry }
    }

    /// Resolves against the laid-out chart area.
    ///
    /// Returns `None` while the surface has no usable layout; callers must
    /// retry on the next paint pass instead of caching the miss.
    #[must_use]
    pub fn resolve(&self, area: Option<ChartArea>) -> Option<ResolvedColor> {
        let area = area.filter(|a| a.is_laid_out())?;
        let stops = self.stops.clone();
        Some(match self.geometry {
            GradientGeometry::LinearVertical => ResolvedColor::LinearGradient {
                x0: area.left,
                y0: area.top,
                x1: area.left,
                y1: area.bottom,
                stops,
            },
            GradientGeometry::RadialCentered => {
                let (cx, cy) = area.center();
                ResolvedColor::RadialGradient {
                    cx,
                    cy,
                    inner_radius: 0.0,
                    outer_radius: area.width().min(area.height()) / 2.0,
                    stops,
                }
            }
        })
    }
}

/// Fill or stroke specification emitted into a chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Flat(Color),
    Gradient(GradientDescriptor),
}

impl ColorSpec {
    #[must_use]
    pub fn is_gradient(&self) -> bool {
        matches!(self, Self::Gradient(_))
    }

    #[must_use]
    pub fn gradient(&self) -> Option<&GradientDescriptor> {
        match self {
            Self::Gradient(descriptor) => Some(descriptor),
            Self::Flat(_) => None,
        }
    }

    /// Paint-time resolution. Flat colors resolve without geometry.
    #[must_use]
    pub fn resolve(&self, area: Option<ChartArea>) -> Option<ResolvedColor> {
        match self {
            Self::Flat(color) => Some(ResolvedColor::Flat { color: *color }),
            Self::Gradient(descriptor) => descriptor.resolve(area),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        Self::Flat(color)
    }
}

/// Paint-ready color handed to the rendering backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolvedColor {
    Flat {
        color: Color,
    },
    LinearGradient {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stops: SmallVec<[ColorStop; 2]>,
    },
    RadialGradient {
        cx: f64,
        cy: f64,
        inner_radius: f64,
        outer_radius: f64,
        stops: SmallVec<[ColorStop; 2]>,
    },
}
