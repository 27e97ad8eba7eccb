use crate::core::ChartKind;
use crate::error::{ChartError, ChartResult};

use super::{Color, ColorSpec, GradientDescriptor, GradientGeometry};

const DARK_GREEN: Color = Color::rgb8(0x15, 0x47, 0x34);
const GOLD: Color = Color::rgb8(0xff, 0xb8, 0x1c);
const LIGHT_GREEN: Color = Color::rgb8(0x7a, 0x9a, 0x01);
const GREEN: Color = Color::rgb8(0x00, 0x7a, 0x33);

pub const BASE_PALETTE: [Color; 4] = [DARK_GREEN, GOLD, LIGHT_GREEN, GREEN];

pub const GRADIENT_PALETTE: [(Color, Color); 4] = [
    (GOLD, Color::rgb8(0xff, 0xe0, 0x8a)),
    (DARK_GREEN, Color::rgb8(0x2f, 0x7a, 0x5a)),
    (GREEN, Color::rgb8(0x35, 0xb8, 0x65)),
    (LIGHT_GREEN, Color::rgb8(0xb9, 0xd8, 0x4a)),
];

pub const AREA_FILL: (Color, Color) = (
    Color::rgba8(0x00, 0x7a, 0x33, 0.45),
    Color::rgba8(0x00, 0x7a, 0x33, 0.05),
);

/// Deterministic color assignment for series and slices.
///
/// Colors are chosen by `index mod palette length`, so adding a series never
/// changes the colors of the series before it. Gradients are returned as
/// descriptors and resolved against the surface only at paint time.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorThemeEngine {
    base: Vec<Color>,
    gradients: Vec<(Color, Color)>,
    area_fill: (Color, Color),
}

impl Default for ColorThemeEngine {
    fn default() -> Self {
        Self {
            base: BASE_PALETTE.to_vec(),
            gradients: GRADIENT_PALETTE.to_vec(),
            area_fill: AREA_FILL,
        }
    }
}

impl ColorThemeEngine {
    pub fn new(
        base: Vec<Color>,
        gradients: Vec<(Color, Color)>,
        area_fill: (Color, Color),
    ) -> ChartResult<Self> {
        if base.is_empty() || gradients.is_empty() {
            return Err(ChartError::InvalidData(
                "theme palettes must not be empty".to_owned(),
            ));
        }
        for color in base
            .iter()
            .chain(gradients.iter().flat_map(|(a, b)| [a, b]))
            .chain([&area_fill.0, &area_fill.1])
        {
            color.validate()?;
        }
        Ok(Self {
            base,
            gradients,
            area_fill,
        })
    }

    /// Cycle length of the palette used for `kind`.
    #[must_use]
    pub fn palette_len(&self, kind: ChartKind) -> usize {
        match kind {
            ChartKind::Line | ChartKind::Area => self.base.len(),
            _ => self.gradients.len(),
        }
    }

    /// Flat series color, also used for strokes and legend swatches.
    #[must_use]
    pub fn base_color(&self, index: usize) -> Color {
        self.base[index % self.base.len()]
    }

    /// Primary color of series/slice `index` for `kind`.
    ///
    /// Pie/doughnut slices get a centered radial gradient, bar-family series a
    /// vertical gradient from the gradient palette, line-family series a flat
    /// palette color.
    #[must_use]
    pub fn color_for(&self, index: usize, kind: ChartKind) -> ColorSpec {
        match kind {
            ChartKind::Line | ChartKind::Area => ColorSpec::Flat(self.base_color(index)),
            ChartKind::Bar | ChartKind::Stacked | ChartKind::Grouped => {
                self.gradient(index, GradientGeometry::LinearVertical)
            }
            ChartKind::Pie | ChartKind::Doughnut => {
                self.gradient(index, GradientGeometry::RadialCentered)
            }
        }
    }

    /// Fill of series `index`. Filled line areas share one fixed vertical
    /// gradient regardless of index.
    #[must_use]
    pub fn fill_for(&self, index: usize, kind: ChartKind, fill: bool) -> ColorSpec {
        match kind {
            ChartKind::Line | ChartKind::Area if fill => self.area_fill(),
            _ => self.color_for(index, kind),
        }
    }

    #[must_use]
    pub fn area_fill(&self) -> ColorSpec {
        ColorSpec::Gradient(GradientDescriptor::two_stop(
            self.area_fill.0,
            self.area_fill.1,
            GradientGeometry::LinearVertical,
        ))
    }

    fn gradient(&self, index: usize, geometry: GradientGeometry) -> ColorSpec {
        let (start, end) = self.gradients[index % self.gradients.len()];
        ColorSpec::Gradient(GradientDescriptor::two_stop(start, end, geometry))
    }
}
