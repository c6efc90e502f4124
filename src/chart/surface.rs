//! Rendering Seams
//!
//! The renderer never touches a canvas or the DOM itself. It drives these
//! traits; the browser crate implements them with an HTML canvas and an
//! `IntersectionObserver`.

use super::config::ChartConfig;
use super::error::ChartError;

/// A live chart bound to one surface
pub trait ChartInstance {
    /// Release the chart and clear its surface
    fn destroy(self);
}

/// Region a chart can be drawn into
pub trait ChartSurface {
    type Instance: ChartInstance;

    /// Build a chart on this surface.
    ///
    /// The caller guarantees any previous instance for this surface has
    /// already been destroyed.
    fn construct(&mut self, config: &ChartConfig) -> Result<Self::Instance, ChartError>;
}

/// Source of visibility reports for one surface
pub trait VisibilityObserver {
    /// Stop reporting
    fn disconnect(&mut self);
}
