mod build_options;
mod chart_config;
mod config_builder;
mod json_contract;
mod label_wrap;
mod lifecycle;
mod settings;
mod table_chart;
mod tooltip_formatter;

pub use build_options::BuildOptions;
pub use chart_config::{
    AnimationOptions, CategoryAxisConfig, ChartConfiguration, ChartData, DatasetConfig,
    DatasetFill, LegendConfig, LegendPosition, PluginOptions, RenderOptions, ScalesConfig,
    TooltipConfig, ValueAxisConfig,
};
pub use config_builder::{ChartConfigBuilder, STACK_GROUP_ID};
pub use json_contract::{CHART_CONFIGURATION_JSON_SCHEMA_V1, ChartConfigurationJsonContractV1};
pub use label_wrap::{DEFAULT_LABEL_WRAP_WIDTH, wrap_label};
pub use lifecycle::{LifecycleConfig, LifecycleState, RebuildPolicy, RenderLifecycleController};
pub use settings::TableChartSettings;
pub use table_chart::{
    AccessibilityMarker, ChartInitReport, HostDocument, TABLE_ACCESSIBILITY, TableChart,
    initialize_charts,
};
pub use tooltip_formatter::{TooltipFormat, formatter_for};
