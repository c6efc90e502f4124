//! Lazy Chart Renderer
//!
//! Each of the three dashboard charts is built only once its surface has
//! been seen in the viewport *and* its data has arrived, in whichever order
//! those two events happen.
//!
//! ```text
//!   Unseen ──visible >= 0.15──▶ AwaitingData ──data──▶ Rendered
//!      │                                                  ▲ │
//!      └──────────── visible with data already set ───────┘ │
//!                                         new data ─────────┘ (destroy, construct)
//! ```
//!
//! The first qualifying visibility report retires the slot's observer.
//! A slot holds at most one live chart instance: the old one is destroyed
//! before a replacement is constructed.

use super::config::ChartConfig;
use super::error::ChartError;
use super::surface::{ChartInstance, ChartSurface, VisibilityObserver};
use crate::model::{SeriesData, StatusData};

/// Visible fraction of a surface required before it counts as seen
pub const VISIBILITY_THRESHOLD: f64 = 0.15;

/// The three dashboard charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlotId {
    Energy,
    Quality,
    Status,
}

impl ChartSlotId {
    pub const ALL: [ChartSlotId; 3] = [ChartSlotId::Energy, ChartSlotId::Quality, ChartSlotId::Status];

    pub fn name(&self) -> &'static str {
        match self {
            ChartSlotId::Energy => "energy",
            ChartSlotId::Quality => "quality",
            ChartSlotId::Status => "status",
        }
    }

    fn index(&self) -> usize {
        match self {
            ChartSlotId::Energy => 0,
            ChartSlotId::Quality => 1,
            ChartSlotId::Status => 2,
        }
    }
}

/// Lifecycle position of one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Surface not yet seen (or not yet attached)
    Unseen,
    /// Seen, waiting for data
    AwaitingData,
    /// A chart instance is live
    Rendered,
}

struct Slot<S: ChartSurface, O: VisibilityObserver> {
    surface: Option<S>,
    observer: Option<O>,
    visible: bool,
    config: Option<ChartConfig>,
    instance: Option<S::Instance>,
}

impl<S: ChartSurface, O: VisibilityObserver> Slot<S, O> {
    fn empty() -> Self {
        Self {
            surface: None,
            observer: None,
            visible: false,
            config: None,
            instance: None,
        }
    }

    fn state(&self) -> SlotState {
        if self.instance.is_some() {
            SlotState::Rendered
        } else if self.visible {
            SlotState::AwaitingData
        } else {
            SlotState::Unseen
        }
    }

    /// Construct if both visibility and data are present.
    /// Returns whether a new instance was built.
    fn try_render(&mut self) -> Result<bool, ChartError> {
        if !self.visible {
            return Ok(false);
        }
        let (Some(surface), Some(config)) = (self.surface.as_mut(), self.config.as_ref()) else {
            return Ok(false);
        };

        if let Some(old) = self.instance.take() {
            old.destroy();
        }
        self.instance = Some(surface.construct(config)?);
        Ok(true)
    }

    fn retire_observer(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
    }

    fn teardown(&mut self) {
        self.retire_observer();
        if let Some(instance) = self.instance.take() {
            instance.destroy();
        }
    }
}

/// Owner of the three chart slots of the dashboard view
pub struct LazyChartRenderer<S: ChartSurface, O: VisibilityObserver> {
    slots: [Slot<S, O>; 3],
}

impl<S: ChartSurface, O: VisibilityObserver> LazyChartRenderer<S, O> {
    pub fn new() -> Self {
        Self {
            slots: [Slot::empty(), Slot::empty(), Slot::empty()],
        }
    }

    /// Bind a drawing surface and its visibility observer to a slot.
    ///
    /// Re-attaching replaces (and tears down) whatever the slot held; data
    /// already delivered to the slot is kept.
    pub fn attach(&mut self, id: ChartSlotId, surface: S, observer: O) {
        let slot = &mut self.slots[id.index()];
        slot.teardown();
        slot.visible = false;
        slot.surface = Some(surface);
        slot.observer = Some(observer);
        tracing::debug!(slot = id.name(), "Chart surface attached");
    }

    /// Feed a visibility report (visible fraction of the surface, 0.0..=1.0).
    ///
    /// Returns whether a chart was constructed as a result.
    pub fn report_visibility(&mut self, id: ChartSlotId, ratio: f64) -> Result<bool, ChartError> {
        let slot = &mut self.slots[id.index()];
        // NaN never counts as seen
        let seen = ratio >= VISIBILITY_THRESHOLD;
        if slot.visible || slot.surface.is_none() || !seen {
            return Ok(false);
        }

        slot.visible = true;
        slot.retire_observer();
        tracing::debug!(slot = id.name(), ratio, "Chart surface became visible");

        let rendered = slot.try_render()?;
        if rendered {
            tracing::debug!(slot = id.name(), "Chart rendered");
        }
        Ok(rendered)
    }

    /// Deliver energy data (line chart)
    pub fn set_energy(&mut self, series: &SeriesData) -> Result<bool, ChartError> {
        self.set_config(ChartSlotId::Energy, ChartConfig::energy(series)?)
    }

    /// Deliver water quality data (bar chart)
    pub fn set_quality(&mut self, series: &SeriesData) -> Result<bool, ChartError> {
        self.set_config(ChartSlotId::Quality, ChartConfig::quality(series)?)
    }

    /// Deliver plant status data (doughnut chart)
    pub fn set_status(&mut self, status: &StatusData) -> Result<bool, ChartError> {
        self.set_config(ChartSlotId::Status, ChartConfig::status(status)?)
    }

    /// Store a prepared chart configuration for a slot; renders right away
    /// if the slot was already seen. Returns whether a chart was constructed.
    pub fn set_config(&mut self, id: ChartSlotId, config: ChartConfig) -> Result<bool, ChartError> {
        let slot = &mut self.slots[id.index()];
        slot.config = Some(config);

        let rendered = slot.try_render()?;
        if rendered {
            tracing::debug!(slot = id.name(), "Chart rendered");
        }
        Ok(rendered)
    }

    pub fn state(&self, id: ChartSlotId) -> SlotState {
        self.slots[id.index()].state()
    }

    /// Configuration the slot is (or will be) drawn from
    pub fn config(&self, id: ChartSlotId) -> Option<&ChartConfig> {
        self.slots[id.index()].config.as_ref()
    }

    /// Disconnect every outstanding observer, destroy every live chart and
    /// release the surfaces. Data delivered afterwards is stored but never
    /// drawn. Safe to call more than once.
    pub fn teardown(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.teardown();
            slot.surface = None;
            slot.visible = false;
        }
        tracing::debug!("Chart renderer torn down");
    }
}

impl<S: ChartSurface, O: VisibilityObserver> Default for LazyChartRenderer<S, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ChartSurface, O: VisibilityObserver> Drop for LazyChartRenderer<S, O> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::config::ChartKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counters {
        constructed: usize,
        destroyed: usize,
        registered: usize,
        disconnected: usize,
        last_config: Option<ChartConfig>,
    }

    impl Counters {
        fn live(&self) -> usize {
            self.constructed - self.destroyed
        }
    }

    type Shared = Rc<RefCell<Counters>>;

    struct MockSurface {
        counters: Shared,
        live_here: Rc<RefCell<usize>>,
        fail: bool,
    }

    struct MockInstance {
        counters: Shared,
        live_here: Rc<RefCell<usize>>,
    }

    struct MockObserver {
        counters: Shared,
    }

    impl ChartSurface for MockSurface {
        type Instance = MockInstance;

        fn construct(&mut self, config: &ChartConfig) -> Result<MockInstance, ChartError> {
            if self.fail {
                return Err(ChartError::Backend("no context".to_string()));
            }
            assert_eq!(*self.live_here.borrow(), 0, "previous instance still live");
            *self.live_here.borrow_mut() += 1;

            let mut counters = self.counters.borrow_mut();
            counters.constructed += 1;
            counters.last_config = Some(config.clone());
            Ok(MockInstance {
                counters: Rc::clone(&self.counters),
                live_here: Rc::clone(&self.live_here),
            })
        }
    }

    impl ChartInstance for MockInstance {
        fn destroy(self) {
            *self.live_here.borrow_mut() -= 1;
            self.counters.borrow_mut().destroyed += 1;
        }
    }

    impl VisibilityObserver for MockObserver {
        fn disconnect(&mut self) {
            self.counters.borrow_mut().disconnected += 1;
        }
    }

    type Renderer = LazyChartRenderer<MockSurface, MockObserver>;

    fn attach(renderer: &mut Renderer, counters: &Shared, id: ChartSlotId) {
        counters.borrow_mut().registered += 1;
        renderer.attach(
            id,
            MockSurface {
                counters: Rc::clone(counters),
                live_here: Rc::new(RefCell::new(0)),
                fail: false,
            },
            MockObserver {
                counters: Rc::clone(counters),
            },
        );
    }

    fn energy(labels: &[&str], data: &[f64]) -> SeriesData {
        SeriesData::new(
            labels.iter().map(|l| l.to_string()).collect(),
            data.to_vec(),
            Some("kWh".to_string()),
        )
    }

    #[test]
    fn test_data_then_visible_constructs_once() {
        let counters = Shared::default();
        let mut renderer = Renderer::new();
        attach(&mut renderer, &counters, ChartSlotId::Energy);

        assert!(!renderer.set_energy(&energy(&["Jan"], &[1.0])).unwrap());
        assert_eq!(counters.borrow().constructed, 0);
        assert_eq!(renderer.state(ChartSlotId::Energy), SlotState::Unseen);

        assert!(renderer.report_visibility(ChartSlotId::Energy, 0.5).unwrap());
        assert_eq!(counters.borrow().constructed, 1);
        assert_eq!(renderer.state(ChartSlotId::Energy), SlotState::Rendered);
    }

    #[test]
    fn test_visible_then_data_constructs_once() {
        let counters = Shared::default();
        let mut renderer = Renderer::new();
        attach(&mut renderer, &counters, ChartSlotId::Quality);

        assert!(!renderer.report_visibility(ChartSlotId::Quality, 1.0).unwrap());
        assert_eq!(counters.borrow().constructed, 0);
        assert_eq!(renderer.state(ChartSlotId::Quality), SlotState::AwaitingData);

        let quality = SeriesData::new(vec!["pH".into()], vec![7.0], None);
        assert!(renderer.set_quality(&quality).unwrap());
        assert_eq!(counters.borrow().constructed, 1);

        // Later visibility reports change nothing
        assert!(!renderer.report_visibility(ChartSlotId::Quality, 1.0).unwrap());
        assert_eq!(counters.borrow().constructed, 1);
    }

    #[test]
    fn test_below_threshold_is_ignored() {
        let counters = Shared::default();
        let mut renderer = Renderer::new();
        attach(&mut renderer, &counters, ChartSlotId::Status);
        renderer
            .set_status(&StatusData::new(vec!["Online".into()], vec![3.0]))
            .unwrap();

        assert!(!renderer.report_visibility(ChartSlotId::Status, 0.1).unwrap());
        assert!(!renderer.report_visibility(ChartSlotId::Status, f64::NAN).unwrap());
        assert_eq!(renderer.state(ChartSlotId::Status), SlotState::Unseen);
        assert_eq!(counters.borrow().disconnected, 0);

        assert!(renderer
            .report_visibility(ChartSlotId::Status, VISIBILITY_THRESHOLD)
            .unwrap());
        assert_eq!(counters.borrow().disconnected, 1);
    }

    #[test]
    fn test_new_data_replaces_instance() {
        let counters = Shared::default();
        let mut renderer = Renderer::new();
        attach(&mut renderer, &counters, ChartSlotId::Energy);
        renderer.report_visibility(ChartSlotId::Energy, 0.9).unwrap();

        renderer.set_energy(&energy(&["Jan"], &[1.0])).unwrap();
        renderer.set_energy(&energy(&["Jan", "Feb"], &[2.0, 3.0])).unwrap();

        let c = counters.borrow();
        assert_eq!(c.constructed, 2);
        assert_eq!(c.destroyed, 1);
        assert_eq!(c.live(), 1);
        assert_eq!(c.last_config.as_ref().unwrap().dataset.data, vec![2.0, 3.0]);
    }

    #[test]
    fn test_energy_config_reaches_backend() {
        let counters = Shared::default();
        let mut renderer = Renderer::new();
        attach(&mut renderer, &counters, ChartSlotId::Energy);

        renderer.set_energy(&energy(&["Jan", "Feb"], &[10.0, 20.0])).unwrap();
        renderer.report_visibility(ChartSlotId::Energy, 0.3).unwrap();

        let c = counters.borrow();
        let config = c.last_config.as_ref().unwrap();
        assert_eq!(config.kind, ChartKind::Line);
        assert_eq!(config.dataset.data, vec![10.0, 20.0]);
        assert!(config.dataset.label.contains("kWh"));
    }

    #[test]
    fn test_mismatched_data_is_rejected() {
        let counters = Shared::default();
        let mut renderer = Renderer::new();
        attach(&mut renderer, &counters, ChartSlotId::Energy);
        renderer.report_visibility(ChartSlotId::Energy, 1.0).unwrap();

        let err = renderer.set_energy(&energy(&["Jan", "Feb"], &[1.0])).unwrap_err();
        assert!(matches!(err, ChartError::LengthMismatch { .. }));
        assert_eq!(counters.borrow().constructed, 0);
        assert!(renderer.config(ChartSlotId::Energy).is_none());
        assert_eq!(renderer.state(ChartSlotId::Energy), SlotState::AwaitingData);
    }

    #[test]
    fn test_backend_failure_leaves_slot_awaiting() {
        let counters = Shared::default();
        let mut renderer = Renderer::new();
        renderer.attach(
            ChartSlotId::Energy,
            MockSurface {
                counters: Rc::clone(&counters),
                live_here: Rc::new(RefCell::new(0)),
                fail: true,
            },
            MockObserver {
                counters: Rc::clone(&counters),
            },
        );
        renderer.report_visibility(ChartSlotId::Energy, 1.0).unwrap();

        assert!(renderer.set_energy(&energy(&["Jan"], &[1.0])).is_err());
        assert_eq!(renderer.state(ChartSlotId::Energy), SlotState::AwaitingData);
    }

    #[test]
    fn test_data_before_attach_is_kept() {
        let counters = Shared::default();
        let mut renderer = Renderer::new();

        renderer.set_energy(&energy(&["Jan"], &[4.0])).unwrap();
        assert!(!renderer.report_visibility(ChartSlotId::Energy, 1.0).unwrap());

        attach(&mut renderer, &counters, ChartSlotId::Energy);
        assert!(renderer.report_visibility(ChartSlotId::Energy, 1.0).unwrap());
        assert_eq!(counters.borrow().constructed, 1);
    }

    #[test]
    fn test_teardown_releases_everything() {
        let counters = Shared::default();
        let mut renderer = Renderer::new();
        for id in ChartSlotId::ALL {
            attach(&mut renderer, &counters, id);
        }

        renderer.set_energy(&energy(&["Jan"], &[1.0])).unwrap();
        renderer
            .set_status(&StatusData::new(vec!["Online".into()], vec![1.0]))
            .unwrap();
        renderer.report_visibility(ChartSlotId::Energy, 1.0).unwrap();
        renderer.report_visibility(ChartSlotId::Status, 1.0).unwrap();

        renderer.teardown();
        {
            let c = counters.borrow();
            assert_eq!(c.constructed, 2);
            assert_eq!(c.destroyed, c.constructed);
            assert_eq!(c.disconnected, c.registered);
        }

        // Dropping after an explicit teardown must not double count
        drop(renderer);
        let c = counters.borrow();
        assert_eq!(c.destroyed, 2);
        assert_eq!(c.disconnected, 3);
    }

    #[test]
    fn test_late_data_after_teardown_is_not_drawn() {
        let counters = Shared::default();
        let mut renderer = Renderer::new();
        attach(&mut renderer, &counters, ChartSlotId::Energy);
        renderer.report_visibility(ChartSlotId::Energy, 1.0).unwrap();

        renderer.teardown();
        assert!(!renderer.set_energy(&energy(&["Jan"], &[1.0])).unwrap());
        assert_eq!(counters.borrow().constructed, 0);
        assert_eq!(renderer.state(ChartSlotId::Energy), SlotState::Unseen);
    }

    #[test]
    fn test_drop_tears_down() {
        let counters = Shared::default();
        {
            let mut renderer = Renderer::new();
            attach(&mut renderer, &counters, ChartSlotId::Quality);
            renderer
                .set_quality(&SeriesData::new(vec!["pH".into()], vec![7.0], None))
                .unwrap();
            renderer.report_visibility(ChartSlotId::Quality, 1.0).unwrap();
        }

        let c = counters.borrow();
        assert_eq!(c.live(), 0);
        assert_eq!(c.disconnected, 1);
    }

    #[test]
    fn test_each_slot_gets_its_chart_kind() {
        let mut renderer = Renderer::new();
        let quality = SeriesData::new(vec!["pH".into()], vec![7.1], None);
        let status = StatusData::new(vec!["Operational".into(), "Fault".into()], vec![18.0, 1.0]);

        renderer.set_energy(&energy(&["Jan"], &[1.0])).unwrap();
        renderer.set_quality(&quality).unwrap();
        renderer.set_status(&status).unwrap();

        let kind = |id| renderer.config(id).map(|config| config.kind);
        assert_eq!(kind(ChartSlotId::Energy), Some(ChartKind::Line));
        assert_eq!(kind(ChartSlotId::Quality), Some(ChartKind::Bar));
        assert_eq!(kind(ChartSlotId::Status), Some(ChartKind::Doughnut));
    }

    #[test]
    fn test_mismatch_keeps_previously_accepted_data() {
        let counters = Shared::default();
        let mut renderer = Renderer::new();
        attach(&mut renderer, &counters, ChartSlotId::Energy);
        renderer.report_visibility(ChartSlotId::Energy, 1.0).unwrap();

        renderer.set_energy(&energy(&["Jan", "Feb"], &[1.0, 2.0])).unwrap();
        assert!(renderer.set_energy(&energy(&["Jan", "Feb"], &[5.0])).is_err());

        let config = renderer.config(ChartSlotId::Energy).unwrap();
        assert_eq!(config.dataset.data, vec![1.0, 2.0]);
        assert_eq!(renderer.state(ChartSlotId::Energy), SlotState::Rendered);
        assert_eq!(counters.borrow().live(), 1);
    }
}
