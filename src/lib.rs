//! table-chart: turns semantically-marked data tables into chart configurations.
//!
//! The crate is split the same way a chart pipeline flows:
//! `core` reads the table into aligned series, `render` owns colors and the
//! backend contract, `api` synthesizes configurations and drives the
//! lazy/debounced render lifecycle, and `interaction` carries the host-side
//! surface events and subscriptions.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{
    BuildOptions, ChartConfigBuilder, ChartConfiguration, RenderLifecycleController, TableChart,
    TooltipFormat,
};
pub use core::{ChartKind, ParsedSeriesData, TableParser};
pub use error::{ChartError, ChartResult};
