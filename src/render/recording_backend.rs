use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexSet;

use crate::api::ChartConfiguration;
use crate::core::ChartArea;
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartHandle, PaintContext, RenderingBackend, ResolvedColor, SurfaceId};

/// Observable history of a [`RecordingBackend`].
#[derive(Debug, Clone, Default)]
pub struct BackendLog {
    pub renders: usize,
    pub destroys: usize,
    pub resizes: usize,
    pub active_surfaces: IndexSet<SurfaceId>,
    pub last_config: Option<ChartConfiguration>,
}

/// Headless backend used by tests and tools.
///
/// It paints nothing but enforces the one-handle-per-surface rule and keeps
/// the last configuration it received.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    log: Rc<RefCell<BackendLog>>,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn log(&self) -> BackendLog {
        self.log.borrow().clone()
    }
}

impl RenderingBackend for RecordingBackend {
    type Handle = RecordingHandle;

    fn render(
        &mut self,
        surface: &SurfaceId,
        config: &ChartConfiguration,
    ) -> ChartResult<Self::Handle> {
        let mut log = self.log.borrow_mut();
        if !log.active_surfaces.insert(surface.clone()) {
            return Err(ChartError::Backend(format!(
                "surface `{surface}` already has an active chart"
            )));
        }
        log.renders += 1;
        log.last_config = Some(config.clone());
        Ok(RecordingHandle {
            surface: surface.clone(),
            config: config.clone(),
            log: Rc::clone(&self.log),
        })
    }
}

/// Outcome of one simulated paint pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaintReport {
    pub resolved: Vec<ResolvedColor>,
    pub unresolved: usize,
}

#[derive(Debug)]
pub struct RecordingHandle {
    surface: SurfaceId,
    config: ChartConfiguration,
    log: Rc<RefCell<BackendLog>>,
}

impl RecordingHandle {
    #[must_use]
    pub fn surface(&self) -> &SurfaceId {
        &self.surface
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfiguration {
        &self.config
    }

    /// Runs the per-element fill callback for every drawn element.
    #[must_use]
    pub fn paint(&self, chart_area: Option<ChartArea>) -> PaintReport {
        let mut report = PaintReport::default();
        for (dataset_index, dataset) in self.config.data.datasets.iter().enumerate() {
            for element_index in 0..dataset.data.len() {
                let context = PaintContext {
                    dataset_index,
                    element_index,
                    chart_area,
                };
                match self.config.resolve_fill(context) {
                    Some(color) => report.resolved.push(color),
                    None => report.unresolved += 1,
                }
            }
        }
        report
    }
}

impl ChartHandle for RecordingHandle {
    fn resize(&mut self) -> ChartResult<()> {
        self.log.borrow_mut().resizes += 1;
        Ok(())
    }

    fn destroy(self) {
        let mut log = self.log.borrow_mut();
        log.active_surfaces.shift_remove(&self.surface);
        log.destroys += 1;
    }
}
