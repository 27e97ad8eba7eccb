mod color_spec;
mod primitives;
mod recording_backend;
mod theme;

pub use color_spec::{ColorSpec, ColorStop, GradientDescriptor, GradientGeometry, ResolvedColor};
pub use primitives::Color;
pub use recording_backend::{BackendLog, PaintReport, RecordingBackend, RecordingHandle};
pub use theme::{AREA_FILL, BASE_PALETTE, ColorThemeEngine, GRADIENT_PALETTE};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::ChartConfiguration;
use crate::core::ChartArea;
use crate::error::ChartResult;

/// Identifier of the drawing surface a chart paints onto.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(String);

impl SurfaceId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Surface id derived from the source table id.
    #[must_use]
    pub fn for_table(table_id: &str) -> Self {
        Self(format!("{table_id}-chart"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-element paint callback input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintContext {
    pub dataset_index: usize,
    pub element_index: usize,
    /// `None` until the surface has been laid out once.
    pub chart_area: Option<ChartArea>,
}

/// Live chart owned by a rendering backend.
pub trait ChartHandle {
    fn resize(&mut self) -> ChartResult<()>;
    fn destroy(self);
}

/// Contract implemented by any rendering backend.
///
/// Backends receive an immutable `ChartConfiguration` and resolve gradient
/// fills per element through [`ChartConfiguration::resolve_fill`] on every
/// paint pass.
pub trait RenderingBackend {
    type Handle: ChartHandle;

    fn render(
        &mut self,
        surface: &SurfaceId,
        config: &ChartConfiguration,
    ) -> ChartResult<Self::Handle>;
}
