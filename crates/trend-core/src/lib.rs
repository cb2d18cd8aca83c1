// File: crates/trend-core/src/lib.rs
// Summary: Core library entry point; exports series normalization, loaders, and chart rendering.

pub mod axis;
pub mod chart;
pub mod envelope;
pub mod grid;
pub mod layout;
pub mod month;
pub mod normalize;
pub mod series;
pub mod theme;

pub use axis::{AxisPolicy, AxisRange};
pub use chart::{PriceTrendChart, RenderOptions};
pub use envelope::{series_from_csv_path, series_from_csv_reader, LoadError, SeriesEnvelope};
pub use month::{sort_categories, MonthKey, MonthLabelError};
pub use normalize::{normalize, LegendEntry, NormalizedChart, Normalizer, Tooltip, TooltipRow};
pub use series::{AlignedSeries, NamedSeries, SeriesKind};
pub use theme::Theme;
