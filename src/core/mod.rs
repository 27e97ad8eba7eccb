pub mod series;
pub mod table;
pub mod table_parser;
pub mod types;

pub use series::{CategorySeries, ParsedSeriesData};
pub use table::{
    CHART_KIND_ATTRIBUTE, CellKind, FILL_ATTRIBUTE, TOOLTIP_FORMAT_ATTRIBUTE, TableCell,
    TableElement, TableRow, TableSection,
};
pub use table_parser::{TableParser, coerce_cell_value, parse_leading_decimal};
pub use types::{ChartArea, ChartFamily, ChartKind, RenderPrimitive};
