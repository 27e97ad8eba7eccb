use std::time::Duration;

use serde::Serialize;
use tracing::{debug, error, info};

use crate::core::{ParsedSeriesData, TableElement, TableParser};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{SurfaceEvent, SurfaceHost};
use crate::render::{RenderingBackend, SurfaceId};

use super::{LifecycleConfig, RenderLifecycleController, TableChartSettings};

/// Accessibility treatment applied to a source table once its chart exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessibilityMarker {
    pub role: &'static str,
    pub label: &'static str,
    /// Removed from layout but still exposed to assistive technology.
    pub hidden_from_layout: bool,
}

pub const TABLE_ACCESSIBILITY: AccessibilityMarker = AccessibilityMarker {
    role: "table",
    label: "Chart data",
    hidden_from_layout: true,
};

/// Document operations a chart needs from its host page.
pub trait HostDocument {
    fn table(&self, table_id: &str) -> Option<&TableElement>;

    fn hide_table(&mut self, table_id: &str, marker: &AccessibilityMarker);

    /// Inserts `surface` immediately after the table in document order.
    fn insert_surface_after(&mut self, table_id: &str, surface: &SurfaceId) -> ChartResult<()>;
}

/// One table-backed chart: settings, parsed data and its render lifecycle.
pub struct TableChart<B: RenderingBackend> {
    table_id: String,
    settings: TableChartSettings,
    controller: RenderLifecycleController<B>,
}

impl<B: RenderingBackend> TableChart<B> {
    /// Reads, parses and wires the table `table_id`.
    ///
    /// Every check runs before the document is touched, so a failure leaves
    /// no surface and no hidden table behind. Failures are logged and
    /// returned; they never affect other tables.
    ///
    /// The lifecycle starts `Uninitialized`. Visibility is only observed once
    /// the host reports [`SurfaceEvent::LaidOut`] for the new surface.
    pub fn initialize<H: HostDocument + SurfaceHost>(
        host: &mut H,
        table_id: &str,
        backend: B,
        config: LifecycleConfig,
    ) -> ChartResult<Self> {
        let (settings, parsed) = config
            .validate()
            .and_then(|()| read_table(host, table_id))
            .inspect_err(|err| {
                error!(table_id, error = %err, "chart initialization aborted");
            })?;

        let surface = SurfaceId::for_table(table_id);
        host.insert_surface_after(table_id, &surface)
            .inspect_err(|err| {
                error!(
                    table_id,
                    surface = %surface,
                    error = %err,
                    "failed to insert drawing surface"
                );
            })?;
        host.hide_table(table_id, &TABLE_ACCESSIBILITY);

        let controller = RenderLifecycleController::new(
            surface,
            parsed,
            settings.kind,
            settings.build_options(),
            backend,
        )
        .with_config(config);

        debug!(table_id, kind = settings.kind.as_str(), "chart initialized");
        Ok(Self {
            table_id: table_id.to_owned(),
            settings,
            controller,
        })
    }

    #[must_use]
    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    #[must_use]
    pub fn settings(&self) -> &TableChartSettings {
        &self.settings
    }

    #[must_use]
    pub fn controller(&self) -> &RenderLifecycleController<B> {
        &self.controller
    }

    pub fn handle_event<H: SurfaceHost>(
        &mut self,
        host: &mut H,
        event: SurfaceEvent,
        now: Duration,
    ) -> bool {
        self.controller.handle_event(host, event, now)
    }

    pub fn teardown<H: SurfaceHost>(self, host: &mut H) {
        self.controller.teardown(host);
    }
}

fn read_table<H: HostDocument>(
    host: &H,
    table_id: &str,
) -> ChartResult<(TableChartSettings, ParsedSeriesData)> {
    let table = host.table(table_id).ok_or_else(|| ChartError::MissingSource {
        table_id: table_id.to_owned(),
    })?;
    let settings = TableChartSettings::from_table(table)?;
    let parsed = TableParser::parse(table, settings.kind)?;
    Ok((settings, parsed))
}

/// Result of initializing several tables at once.
pub struct ChartInitReport<B: RenderingBackend> {
    pub charts: Vec<TableChart<B>>,
    pub failures: Vec<(String, ChartError)>,
}

/// Initializes every table in `table_ids`, collecting failures per table.
pub fn initialize_charts<H, B, F>(
    host: &mut H,
    table_ids: &[&str],
    config: LifecycleConfig,
    mut make_backend: F,
) -> ChartInitReport<B>
where
    H: HostDocument + SurfaceHost,
    B: RenderingBackend,
    F: FnMut() -> B,
{
    let mut report = ChartInitReport {
        charts: Vec::with_capacity(table_ids.len()),
        failures: Vec::new(),
    };
    for table_id in table_ids {
        match TableChart::initialize(host, table_id, make_backend(), config) {
            Ok(chart) => report.charts.push(chart),
            Err(err) => report.failures.push(((*table_id).to_owned(), err)),
        }
    }
    info!(
        initialized = report.charts.len(),
        failed = report.failures.len(),
        "table charts initialized"
    );
    report
}
