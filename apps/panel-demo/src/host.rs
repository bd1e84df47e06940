//! A minimal headless host: owns the frame loop, dispatches pointer samples
//! and services layout requests the way a widget toolkit would.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use slidepanel_core::{Runtime, RuntimeScheduler, SystemClock, NANOS_PER_MILLI};
use slidepanel_foundation::{PointerEvent, PointerEventKind};
use slidepanel_graphics::{Brush, Color, DrawScopeDefault, Point, Rect, Size};
use slidepanel_layout::Constraints;
use slidepanel_ui::{
    DraggedPanelLayout, LayerType, Layoutable, Measurable, Paintable, PanelAttributes,
    PanelState, PanelSurface, RenderOutput, ShadowDrawable, TouchInterceptable, Visibility,
};

use crate::script::Step;

const FRAME_MILLIS: u64 = 16;
const MOVE_INTERVAL_MILLIS: i64 = 8;
const MAX_FRAMES: usize = 600;

/// Flags that the runtime wants another frame.
#[derive(Default)]
struct FrameRequests {
    pending: AtomicBool,
}

impl FrameRequests {
    fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

impl RuntimeScheduler for FrameRequests {
    fn schedule_frame(&self) {
        self.pending.store(true, Ordering::Release);
    }
}

/// Stand-in for a toolkit widget.
#[derive(Debug, Default)]
pub struct DemoSurface {
    label: &'static str,
    measured: Size,
    frame: Rect,
    translation_y: f32,
    visibility: Visibility,
    layer_type: LayerType,
}

impl DemoSurface {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }
}

impl PanelSurface for DemoSurface {
    fn measure(&mut self, constraints: Constraints) -> Size {
        self.measured = Size::new(constraints.max_width, constraints.max_height);
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn place(&mut self, frame: Rect) {
        log::debug!("{} placed at {:?}", self.label, frame);
        self.frame = frame;
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn translation_y(&self) -> f32 {
        self.translation_y
    }

    fn set_translation_y(&mut self, translation: f32) {
        self.translation_y = translation;
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        if self.visibility != visibility {
            log::debug!("{} is now {:?}", self.label, visibility);
        }
        self.visibility = visibility;
    }

    fn layer_type(&self) -> LayerType {
        self.layer_type
    }

    fn set_layer_type(&mut self, layer_type: LayerType) {
        self.layer_type = layer_type;
    }
}

pub struct Host {
    runtime: Runtime,
    frame_requests: Arc<FrameRequests>,
    clock: SystemClock,
    panel: DraggedPanelLayout<DemoSurface>,
    bounds: Rect,
    frame_time_nanos: u64,
    uptime_millis: i64,
    intercepting: bool,
}

impl Host {
    pub fn new(screen: Size, density: f32) -> Result<Self> {
        let frame_requests = Arc::new(FrameRequests::default());
        let runtime = Runtime::new(frame_requests.clone());
        let shadow = ShadowDrawable::new(
            Brush::vertical_gradient(vec![
                Color::TRANSPARENT,
                Color::from_rgba_u8(0, 0, 0, 72),
            ]),
            6.0 * density,
        );
        let attributes = PanelAttributes::new()
            .with_parallax_factor(0.3)
            .with_shadow(Some(shadow));
        let panel = DraggedPanelLayout::new(attributes, density, runtime.handle())
            .with_children([DemoSurface::new("bottom"), DemoSurface::new("sliding")]);
        let mut host = Self {
            runtime,
            frame_requests,
            clock: SystemClock::new(),
            panel,
            bounds: Rect::from_size(screen),
            frame_time_nanos: 0,
            uptime_millis: 0,
            intercepting: false,
        };
        host.layout()?;
        Ok(host)
    }

    pub fn peek_height(&self) -> f32 {
        self.panel.peek_height_px()
    }

    pub fn state(&self) -> PanelState {
        self.panel.state()
    }

    pub fn render_output(&self) -> RenderOutput {
        self.panel.render_output()
    }

    pub fn run(&mut self, step: &Step) -> Result<()> {
        let started = self.clock.uptime_millis();
        match *step {
            Step::Drag {
                from,
                to,
                millis,
                hold_millis,
            } => self.drag(from, to, millis, hold_millis),
            Step::Tap { at } => {
                self.dispatch(PointerEventKind::Down, at, 0);
                self.dispatch(PointerEventKind::Up, at, 60);
            }
            Step::Open => self.panel.open(),
            Step::Close => self.panel.close(),
            Step::Interrupt { after_frames, to } => {
                if self.panel.is_open() {
                    self.panel.close();
                } else {
                    self.panel.open();
                }
                for _ in 0..after_frames {
                    self.frame()?;
                }
                let grab = self.sliding_top() + 10.0;
                self.drag(grab, to, 200, 150);
            }
        }
        let frames = self.run_until_idle()?;
        log::debug!(
            "step took {frames} frames ({}ms wall)",
            self.clock.uptime_millis() - started
        );
        Ok(())
    }

    fn drag(&mut self, from: f32, to: f32, millis: i64, hold_millis: i64) {
        let steps = (millis / MOVE_INTERVAL_MILLIS).max(1);
        self.dispatch(PointerEventKind::Down, from, 0);
        for step in 1..=steps {
            let y = from + (to - from) * step as f32 / steps as f32;
            self.dispatch(PointerEventKind::Move, y, MOVE_INTERVAL_MILLIS);
        }
        self.dispatch(PointerEventKind::Up, to, hold_millis.max(1));
    }

    fn dispatch(&mut self, kind: PointerEventKind, y: f32, after_millis: i64) {
        self.uptime_millis += after_millis;
        let event = PointerEvent::new(kind, Point::new(0.0, y), self.uptime_millis);
        if self.intercepting {
            self.panel.on_pointer_event(&event);
        } else {
            self.intercepting = self.panel.on_intercept_pointer_event(&event);
        }
        if matches!(kind, PointerEventKind::Up | PointerEventKind::Cancel) {
            self.intercepting = false;
        }
    }

    fn sliding_top(&self) -> f32 {
        self.panel
            .sliding_panel()
            .map_or(0.0, |panel| panel.frame().top() + panel.translation_y())
    }

    fn run_until_idle(&mut self) -> Result<usize> {
        let mut frames = 0;
        while self.frame_requests.take() || self.panel.is_animating() {
            self.frame()?;
            frames += 1;
            anyhow::ensure!(frames < MAX_FRAMES, "panel did not settle after {MAX_FRAMES} frames");
        }
        Ok(frames)
    }

    fn frame(&mut self) -> Result<()> {
        self.frame_time_nanos += FRAME_MILLIS * NANOS_PER_MILLI;
        self.uptime_millis += FRAME_MILLIS as i64;
        self.runtime
            .handle()
            .drain_frame_callbacks(self.frame_time_nanos);

        let mut scope = DrawScopeDefault::new(self.bounds.size());
        self.panel.draw(&mut scope);
        let output = self.panel.render_output();
        log::trace!(
            "frame {}ms: sliding {:.1}, bottom {:.1}, {} primitive(s)",
            self.frame_time_nanos / NANOS_PER_MILLI,
            output.sliding_translation,
            output.bottom_translation,
            scope.primitives().len()
        );

        if self.panel.take_host_requests().layout {
            self.layout()?;
        }
        Ok(())
    }

    fn layout(&mut self) -> Result<()> {
        self.panel
            .measure(Constraints::tight(self.bounds.width, self.bounds.height));
        self.panel
            .layout(self.bounds)
            .context("panel layout rejected its children")
    }
}
