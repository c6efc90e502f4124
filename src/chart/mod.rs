//! Charts
//!
//! Chart descriptions built from fetched series, and the lazy renderer that
//! decides when a chart is actually drawn.
//!
//! - [`config`]: serializable [`ChartConfig`] plus the fixed styling used by
//!   the three dashboard charts
//! - [`surface`]: seams to the drawing backend and the visibility source
//! - [`renderer`]: per-slot state machine driven by visibility reports and
//!   data arrival

pub mod config;
pub mod error;
pub mod renderer;
pub mod surface;

pub use config::{ChartConfig, ChartKind, ChartOptions, Dataset, LegendPosition};
pub use error::ChartError;
pub use renderer::{ChartSlotId, LazyChartRenderer, SlotState, VISIBILITY_THRESHOLD};
pub use surface::{ChartInstance, ChartSurface, VisibilityObserver};
