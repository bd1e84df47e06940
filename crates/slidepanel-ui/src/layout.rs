//! The two-panel container.
//!
//! Child 0 is the bottom panel, child 1 the sliding panel. The container
//! owns the gesture tracker and the motion driver and moves between the
//! [`PanelState`] variants:
//!
//! ```text
//! Idle(s) --drag confirmed--> Dragging { resting: s }
//! Dragging --release--> Animating { resting: s, target }
//! Animating --finished--> Idle(target)
//! Animating --cancelled / pointer down--> Idle(s) (offsets kept)
//! ```

use std::mem;

use slidepanel_core::RuntimeHandle;
use slidepanel_foundation::{DragUpdate, PointerEvent, PointerEventKind, VerticalDragTracker};
use slidepanel_graphics::{DrawScope, Rect, Size};
use slidepanel_layout::Constraints;
use smallvec::SmallVec;

use crate::capabilities::{Layoutable, Measurable, Paintable, TouchInterceptable};
use crate::position::{self, ReleasePlan};
use crate::{
    GeometryConfig, LayerType, MotionDriver, MotionMessage, OpenState, PanelAttributes,
    PanelLayoutError, PanelOffsets, PanelState, PanelSurface, Visibility,
};

/// Work the container needs from its host, collected until
/// [`DraggedPanelLayout::take_host_requests`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostRequests {
    pub layout: bool,
    pub redraw: bool,
}

/// What the host composites for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOutput {
    pub sliding_translation: f32,
    pub bottom_translation: f32,
    pub shadow: Option<Rect>,
}

#[derive(Clone, Copy, Debug)]
struct SavedLayers {
    bottom: LayerType,
    sliding: LayerType,
}

fn panel_pair<S>(children: &mut [S]) -> Option<(&mut S, &mut S)> {
    match children {
        [bottom, sliding] => Some((bottom, sliding)),
        _ => None,
    }
}

pub struct DraggedPanelLayout<S: PanelSurface> {
    attributes: PanelAttributes,
    density: f32,
    children: SmallVec<[S; 2]>,
    state: PanelState,
    tracker: VerticalDragTracker,
    /// Sliding panel offset when the current drag was confirmed.
    drag_origin: f32,
    motion: MotionDriver,
    geometry: Option<GeometryConfig>,
    measured_size: Size,
    saved_layers: Option<SavedLayers>,
    will_draw_shadow: bool,
    requests: HostRequests,
}

impl<S: PanelSurface> DraggedPanelLayout<S> {
    pub fn new(attributes: PanelAttributes, density: f32, runtime: RuntimeHandle) -> Self {
        let tracker = VerticalDragTracker::new(attributes.touch_slop_px(density));
        let will_draw_shadow = attributes.shadow().is_some();
        Self {
            attributes,
            density,
            children: SmallVec::new(),
            state: PanelState::default(),
            tracker,
            drag_origin: 0.0,
            motion: MotionDriver::new(runtime),
            geometry: None,
            measured_size: Size::ZERO,
            saved_layers: None,
            will_draw_shadow,
            requests: HostRequests::default(),
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = S>) -> Self {
        for child in children {
            self.add_child(child);
        }
        self
    }

    /// Appends a child. The first is the bottom panel, the second the sliding
    /// panel; any other count is rejected at layout time.
    pub fn add_child(&mut self, child: S) {
        self.children.push(child);
        self.requests.layout = true;
    }

    pub fn children(&self) -> &[S] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [S] {
        &mut self.children
    }

    pub fn bottom_panel(&self) -> Option<&S> {
        self.children.first()
    }

    pub fn sliding_panel(&self) -> Option<&S> {
        self.children.get(1)
    }

    pub fn attributes(&self) -> &PanelAttributes {
        &self.attributes
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn open_state(&self) -> OpenState {
        self.state.resting()
    }

    pub fn is_open(&self) -> bool {
        self.open_state().is_open()
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Geometry of the last successful layout pass.
    pub fn geometry(&self) -> Option<GeometryConfig> {
        self.geometry
    }

    pub fn measured_size(&self) -> Size {
        self.measured_size
    }

    pub fn peek_height_px(&self) -> f32 {
        self.attributes.bottom_panel_peek_height().to_px(self.density)
    }

    pub fn will_draw_shadow(&self) -> bool {
        self.will_draw_shadow
    }

    /// True when a draw pass would paint nothing of the container's own.
    pub fn will_not_draw(&self) -> bool {
        self.shadow_bounds().is_none() && !self.state.is_animating()
    }

    pub fn take_host_requests(&mut self) -> HostRequests {
        mem::take(&mut self.requests)
    }

    pub fn render_output(&self) -> RenderOutput {
        RenderOutput {
            sliding_translation: self.sliding_panel().map_or(0.0, |panel| panel.translation_y()),
            bottom_translation: self.bottom_panel().map_or(0.0, |panel| panel.translation_y()),
            shadow: self.shadow_bounds(),
        }
    }

    /// Applies the latest animated offsets and handles finished or cancelled
    /// transitions. Call after every frame drain; [`Paintable::draw`] calls it
    /// too.
    pub fn on_frame(&mut self) {
        if self.state.is_animating() {
            self.apply_offsets(self.motion.offsets());
        }
        for message in self.motion.take_messages() {
            match message {
                MotionMessage::Finished { target } => self.commit(target),
                MotionMessage::Cancelled { target } => self.abandon(target),
            }
        }
    }

    /// Animates to fully open from wherever the panel is.
    ///
    /// Ignored during a drag and before the first layout pass.
    pub fn open(&mut self) {
        self.settle_to(OpenState::Open);
    }

    /// Animates to closed from wherever the panel is. Ignored like [`open`](Self::open).
    pub fn close(&mut self) {
        self.settle_to(OpenState::Closed);
    }

    /// Stops a running transition without committing its target. The panels
    /// stay at their current offsets and the resting state is unchanged.
    pub fn cancel_animation(&mut self) {
        if !self.state.is_animating() {
            return;
        }
        self.motion.cancel();
        self.on_frame();
    }

    fn settle_to(&mut self, target: OpenState) {
        if self.state.is_dragging() {
            log::debug!("ignoring programmatic {target:?} during a drag");
            return;
        }
        self.cancel_animation();
        let Some(geometry) = self.geometry else {
            log::debug!("ignoring programmatic {target:?} before the first layout");
            return;
        };
        let resting = self.state.resting();
        let current = self.sliding_panel().map_or(0.0, |panel| panel.translation_y());
        if resting == target && current == 0.0 {
            return;
        }
        let plan = position::settle_plan(target, current, resting, &geometry);
        self.start_motion(resting, plan, &geometry);
    }

    /// Clears whatever the previous gesture left behind before a new DOWN.
    fn preempt_animation(&mut self) {
        if self.state.is_dragging() {
            log::debug!("pointer down before the previous gesture ended");
            self.release(0.0);
        }
        if self.state.is_animating() {
            log::debug!("pointer down preempts transition at {:?}", self.motion.offsets());
            self.cancel_animation();
        }
    }

    /// Finishes a transition that a DOWN preempted when the gesture ended
    /// without becoming a drag, resolving it like a release with no velocity.
    fn settle_interrupted(&mut self) {
        let (PanelState::Idle(resting), Some(geometry)) = (self.state, self.geometry) else {
            return;
        };
        let current = self.sliding_panel().map_or(0.0, |panel| panel.translation_y());
        if current == 0.0 || current.is_nan() {
            return;
        }
        let plan = position::resolve_release(0.0, current, resting, &geometry);
        log::debug!("gesture ended without a drag at {current}, settling: {plan:?}");
        self.start_motion(resting, plan, &geometry);
    }

    fn begin_drag(&mut self) -> bool {
        if self.geometry.is_none() {
            return false;
        }
        let resting = self.state.resting();
        let Some((bottom, sliding)) = panel_pair(&mut self.children) else {
            return false;
        };
        self.drag_origin = sliding.translation_y();
        bottom.set_visibility(Visibility::Visible);
        self.state = PanelState::Dragging { resting };
        self.will_draw_shadow = self.attributes.shadow().is_some();
        log::debug!(
            "drag started while {resting:?} at offset {}",
            self.drag_origin
        );
        true
    }

    fn drag_to(&mut self, delta_y: f32) {
        let (PanelState::Dragging { resting }, Some(geometry)) = (self.state, self.geometry) else {
            return;
        };
        let translation = position::bound_translation(self.drag_origin + delta_y, resting, &geometry);
        self.apply_offsets(PanelOffsets {
            sliding: translation,
            bottom: position::bottom_panel_translation(translation, resting, &geometry),
        });
        self.requests.redraw = true;
    }

    fn release(&mut self, velocity: f32) {
        let (PanelState::Dragging { resting }, Some(geometry)) = (self.state, self.geometry) else {
            return;
        };
        let current = self.sliding_panel().map_or(0.0, |panel| panel.translation_y());
        let plan = position::resolve_release(velocity, current, resting, &geometry);
        log::debug!("released at {current} with {velocity:.3}px/ms: {plan:?}");
        self.start_motion(resting, plan, &geometry);
    }

    fn start_motion(&mut self, resting: OpenState, plan: ReleasePlan, geometry: &GeometryConfig) {
        let Some((bottom, sliding)) = panel_pair(&mut self.children) else {
            return;
        };
        let current = sliding.translation_y();
        // Derived rather than read back: an open panel's bottom offset is
        // reset to 0 while it is hidden.
        let from = PanelOffsets {
            sliding: current,
            bottom: position::bottom_panel_translation(current, resting, geometry),
        };
        self.saved_layers = Some(SavedLayers {
            bottom: bottom.layer_type(),
            sliding: sliding.layer_type(),
        });
        bottom.set_layer_type(LayerType::Hardware);
        sliding.set_layer_type(LayerType::Hardware);
        bottom.set_visibility(Visibility::Visible);
        self.state = PanelState::Animating {
            resting,
            target: plan.target,
        };
        self.will_draw_shadow = self.attributes.shadow().is_some();
        self.motion.start(from, &plan, geometry.parallax_factor);
        self.requests.redraw = true;
    }

    fn commit(&mut self, target: OpenState) {
        if !self.state.is_animating() {
            log::warn!("transition to {target:?} finished while {:?}", self.state);
            return;
        }
        self.settle(target);
        log::debug!("panel settled {target:?}");
    }

    fn abandon(&mut self, target: OpenState) {
        let PanelState::Animating { resting, .. } = self.state else {
            return;
        };
        self.state = PanelState::Idle(resting);
        self.restore_layers();
        self.requests.redraw = true;
        log::debug!("transition to {target:?} cancelled, still {resting:?}");
    }

    /// Commits `target` as the resting state and hands positioning back to layout.
    fn settle(&mut self, target: OpenState) {
        self.state = PanelState::Idle(target);
        self.restore_layers();
        if let Some((bottom, sliding)) = panel_pair(&mut self.children) {
            sliding.set_translation_y(0.0);
            bottom.set_translation_y(0.0);
            bottom.set_visibility(if target.is_open() {
                Visibility::Gone
            } else {
                Visibility::Visible
            });
        }
        self.will_draw_shadow = self.attributes.shadow().is_some() && !target.is_open();
        self.requests.layout = true;
        self.requests.redraw = true;
    }

    fn restore_layers(&mut self) {
        let Some(saved) = self.saved_layers.take() else {
            return;
        };
        if let Some((bottom, sliding)) = panel_pair(&mut self.children) {
            bottom.set_layer_type(saved.bottom);
            sliding.set_layer_type(saved.sliding);
        }
    }

    fn apply_offsets(&mut self, offsets: PanelOffsets) {
        if let Some((bottom, sliding)) = panel_pair(&mut self.children) {
            sliding.set_translation_y(offsets.sliding);
            bottom.set_translation_y(offsets.bottom);
        }
    }

    fn shadow_bounds(&self) -> Option<Rect> {
        let shadow = self.attributes.shadow()?;
        if !(self.will_draw_shadow || self.state.is_animating()) {
            return None;
        }
        let geometry = self.geometry?;
        let sliding = self.sliding_panel()?;
        let top = sliding.frame().top() + sliding.translation_y();
        Some(shadow.bounds_above(top, geometry.container_width()))
    }
}

impl<S: PanelSurface> Measurable for DraggedPanelLayout<S> {
    /// Both panels get the container's constraints; the container takes the
    /// largest child size, constrained.
    fn measure(&mut self, constraints: Constraints) -> Size {
        let mut content = Size::ZERO;
        for child in self.children.iter_mut() {
            let size = child.measure(constraints);
            content.width = content.width.max(size.width);
            content.height = content.height.max(size.height);
        }
        self.measured_size = constraints.constrain_size(content);
        self.measured_size
    }
}

impl<S: PanelSurface> Layoutable for DraggedPanelLayout<S> {
    fn layout(&mut self, bounds: Rect) -> Result<(), PanelLayoutError> {
        let found = self.children.len();
        let Some((bottom, sliding)) = panel_pair(&mut self.children) else {
            log::error!("dragged panel layout needs exactly 2 children, has {found}");
            return Err(PanelLayoutError::ChildCount { found });
        };
        let size = bounds.size();
        let geometry = GeometryConfig::new(
            size,
            sliding.measured_size().height,
            self.attributes.bottom_panel_peek_height().to_px(self.density),
            self.attributes.parallax_factor(),
        );
        let peek_line = geometry.peek_line();

        bottom.place(Rect::from_ltrb(0.0, 0.0, size.width, peek_line.max(0.0)));
        let sliding_top = match self.state.resting() {
            OpenState::Closed => peek_line,
            OpenState::Open => 0.0,
        };
        sliding.place(Rect::new(
            0.0,
            sliding_top,
            size.width,
            geometry.sliding_panel_height,
        ));

        log::trace!("laid out {size:?}, travel extent {}", geometry.travel_extent());
        self.geometry = Some(geometry);
        Ok(())
    }
}

impl<S: PanelSurface> Paintable for DraggedPanelLayout<S> {
    fn draw(&mut self, scope: &mut dyn DrawScope) {
        self.on_frame();
        if let (Some(bounds), Some(shadow)) = (self.shadow_bounds(), self.attributes.shadow()) {
            scope.draw_rect_at(bounds, shadow.brush.clone());
        }
        if self.state.is_animating() {
            self.requests.redraw = true;
        }
    }
}

impl<S: PanelSurface> TouchInterceptable for DraggedPanelLayout<S> {
    fn on_intercept_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if self.tracker.is_dragging() && event.kind != PointerEventKind::Down {
            return self.on_pointer_event(event);
        }
        match event.kind {
            PointerEventKind::Down => {
                self.preempt_animation();
                self.tracker.on_down(event.y(), event.uptime_millis);
            }
            PointerEventKind::Move => {
                let update = self.tracker.on_move(event.y(), event.uptime_millis);
                if matches!(update, DragUpdate::Started { .. }) && !self.begin_drag() {
                    self.tracker.reset();
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.tracker.reset();
                self.settle_interrupted();
            }
        }
        let intercepting = self.tracker.is_dragging();
        if intercepting {
            event.consume();
        }
        intercepting
    }

    fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if self.geometry.is_none() || self.children.len() != 2 {
            self.tracker.reset();
            return false;
        }
        match event.kind {
            PointerEventKind::Down => {
                self.preempt_animation();
                self.tracker.on_down(event.y(), event.uptime_millis);
                self.tracker.confirm(event.y());
                self.begin_drag();
            }
            PointerEventKind::Move => match self.tracker.on_move(event.y(), event.uptime_millis) {
                DragUpdate::Started { .. } => {
                    self.begin_drag();
                }
                DragUpdate::Dragged { delta_y } => self.drag_to(delta_y),
                _ => {}
            },
            PointerEventKind::Up | PointerEventKind::Cancel => {
                match self.tracker.process(event) {
                    DragUpdate::Released {
                        velocity,
                        was_dragging: true,
                    } => self.release(velocity),
                    _ => self.settle_interrupted(),
                }
            }
        }
        event.consume();
        true
    }
}

impl<S: PanelSurface> std::fmt::Debug for DraggedPanelLayout<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraggedPanelLayout")
            .field("state", &self.state)
            .field("children", &self.children.len())
            .field("geometry", &self.geometry)
            .field("motion", &self.motion)
            .finish()
    }
}
