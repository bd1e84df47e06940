//! Headless harness that plays the host's role for a [`DraggedPanelLayout`].
//!
//! The rule owns a runtime and a virtual clock. Frames only advance when a
//! test asks for them, so animations are fully deterministic.
//!
//! ```
//! use slidepanel_testing::PanelTestRule;
//!
//! let mut rule = PanelTestRule::new(400.0, 800.0);
//! rule.drag(780.0, 100.0, 10, 100);
//! rule.pump_until_idle();
//! assert!(rule.panel().is_open());
//! ```

use std::sync::Arc;

use slidepanel_core::{Clock, DefaultScheduler, Runtime};
use slidepanel_foundation::{PointerEvent, PointerEventKind};
use slidepanel_graphics::{DrawPrimitive, DrawScopeDefault, Rect};
use slidepanel_layout::Constraints;
use slidepanel_ui::{
    DraggedPanelLayout, Layoutable, Measurable, Paintable, PanelAttributes, PanelLayoutError,
    TouchInterceptable,
};

use crate::{ManualClock, RecordingSurface};

/// Frame interval used by [`PanelTestRule::advance_frame`].
pub const FRAME_MILLIS: u64 = 16;

const MAX_IDLE_FRAMES: usize = 1_000;

pub struct PanelTestRule {
    runtime: Runtime,
    panel: DraggedPanelLayout<RecordingSurface>,
    bounds: Rect,
    clock: ManualClock,
    routed_to_panel: bool,
    layout_passes: usize,
}

impl PanelTestRule {
    /// Default attributes, density 1, two panels filling the container.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_attributes(width, height, PanelAttributes::default(), 1.0)
    }

    pub fn with_attributes(
        width: f32,
        height: f32,
        attributes: PanelAttributes,
        density: f32,
    ) -> Self {
        Self::with_children(
            width,
            height,
            attributes,
            density,
            vec![
                RecordingSurface::filling("bottom"),
                RecordingSurface::filling("sliding"),
            ],
        )
    }

    /// Any number of children; layout fails unless there are exactly two.
    pub fn with_children(
        width: f32,
        height: f32,
        attributes: PanelAttributes,
        density: f32,
        children: Vec<RecordingSurface>,
    ) -> Self {
        crate::init_test_logging();
        let runtime = Runtime::new(Arc::new(DefaultScheduler));
        let panel = DraggedPanelLayout::new(attributes, density, runtime.handle())
            .with_children(children);
        let mut rule = Self {
            runtime,
            panel,
            bounds: Rect::new(0.0, 0.0, width, height),
            clock: ManualClock::new(),
            routed_to_panel: false,
            layout_passes: 0,
        };
        if let Err(err) = rule.layout_pass() {
            log::debug!("initial layout failed: {err}");
        }
        rule.panel.take_host_requests();
        rule
    }

    pub fn panel(&self) -> &DraggedPanelLayout<RecordingSurface> {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut DraggedPanelLayout<RecordingSurface> {
        &mut self.panel
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn bottom(&self) -> &RecordingSurface {
        &self.panel.children()[0]
    }

    pub fn sliding(&self) -> &RecordingSurface {
        &self.panel.children()[1]
    }

    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }

    /// Pointer time of the next sample, in milliseconds.
    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// Measures with tight constraints matching the bounds, then lays out.
    pub fn layout_pass(&mut self) -> Result<(), PanelLayoutError> {
        self.layout_passes += 1;
        self.panel
            .measure(Constraints::tight(self.bounds.width, self.bounds.height));
        self.panel.layout(self.bounds)
    }

    /// Delivers `event` the way a host dispatches to a container whose child
    /// is the touch target: intercept first, then straight to the container
    /// once it has intercepted.
    pub fn send(&mut self, event: PointerEvent) -> bool {
        let handled = if self.routed_to_panel {
            self.panel.on_pointer_event(&event)
        } else {
            let intercepted = self.panel.on_intercept_pointer_event(&event);
            self.routed_to_panel = intercepted;
            intercepted
        };
        if matches!(event.kind, PointerEventKind::Up | PointerEventKind::Cancel) {
            self.routed_to_panel = false;
        }
        handled
    }

    /// Delivers `event` to the container as the touch target.
    pub fn touch(&mut self, event: PointerEvent) -> bool {
        self.panel.on_pointer_event(&event)
    }

    pub fn down(&mut self, y: f32) -> bool {
        let event = PointerEvent::down(y, self.now_millis());
        self.send(event)
    }

    pub fn move_to(&mut self, y: f32, after_millis: i64) -> bool {
        self.clock.advance_millis(after_millis.max(0) as u64);
        let event = PointerEvent::moved(y, self.now_millis());
        self.send(event)
    }

    pub fn up(&mut self, y: f32, after_millis: i64) -> bool {
        self.clock.advance_millis(after_millis.max(0) as u64);
        let event = PointerEvent::up(y, self.now_millis());
        self.send(event)
    }

    /// DOWN at `from_y`, `steps` evenly spaced moves reaching `to_y` over
    /// `duration_millis`, then UP at `to_y` one millisecond later.
    pub fn drag(&mut self, from_y: f32, to_y: f32, steps: u32, duration_millis: i64) {
        self.move_pointer(from_y, to_y, steps, duration_millis);
        self.up(to_y, 1);
    }

    /// Like [`drag`](Self::drag) but holds still before lifting, releasing
    /// with no velocity.
    pub fn drag_and_hold(&mut self, from_y: f32, to_y: f32, steps: u32, duration_millis: i64) {
        self.move_pointer(from_y, to_y, steps, duration_millis);
        self.up(to_y, 200);
    }

    /// DOWN and moves without lifting the pointer.
    pub fn move_pointer(&mut self, from_y: f32, to_y: f32, steps: u32, duration_millis: i64) {
        let steps = steps.max(1);
        self.down(from_y);
        let step_millis = duration_millis / i64::from(steps);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.move_to(from_y + (to_y - from_y) * fraction, step_millis);
        }
    }

    /// Advances the frame clock, runs frame callbacks and services the
    /// container's layout requests.
    pub fn advance_frame(&mut self, millis: u64) {
        self.clock.advance_millis(millis);
        self.runtime
            .handle()
            .drain_frame_callbacks(self.clock.now());
        self.panel.on_frame();
        self.service_requests();
    }

    /// Runs frames until no transition is in flight. Returns the frame count.
    pub fn pump_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.panel.is_animating() && frames < MAX_IDLE_FRAMES {
            self.advance_frame(FRAME_MILLIS);
            frames += 1;
        }
        self.service_requests();
        frames
    }

    /// Runs a draw pass and returns what the container painted.
    pub fn draw(&mut self) -> Vec<DrawPrimitive> {
        let mut scope = DrawScopeDefault::new(self.bounds.size());
        self.panel.draw(&mut scope);
        scope.into_primitives()
    }

    fn service_requests(&mut self) {
        let requests = self.panel.take_host_requests();
        if requests.layout {
            if let Err(err) = self.layout_pass() {
                log::warn!("layout failed: {err}");
            }
        }
    }
}
