use slidepanel_core::{DefaultScheduler, Runtime};
use slidepanel_graphics::{Brush, Color, DrawPrimitive, Dp, Rect, Size};
use slidepanel_layout::Constraints;
use slidepanel_testing::prelude::*;
use slidepanel_ui::{
    DraggedPanelLayout, Layoutable, Measurable, OpenState, PanelAttributes, PanelLayoutError,
    PanelState, PanelSurface, ShadowDrawable, Visibility, DEFAULT_PARALLAX_FACTOR,
};
use std::sync::Arc;

fn children(count: usize) -> Vec<RecordingSurface> {
    (0..count)
        .map(|_| RecordingSurface::filling("panel"))
        .collect()
}

#[test]
fn single_child_is_a_configuration_error() {
    let mut rule =
        PanelTestRule::with_children(400.0, 800.0, PanelAttributes::default(), 1.0, children(1));
    assert_eq!(
        rule.layout_pass(),
        Err(PanelLayoutError::ChildCount { found: 1 })
    );
    assert!(rule.panel().geometry().is_none());
    assert!(!rule.touch(slidepanel_foundation::PointerEvent::down(500.0, 0)));
}

#[test]
fn three_children_is_a_configuration_error() {
    let mut rule =
        PanelTestRule::with_children(400.0, 800.0, PanelAttributes::default(), 1.0, children(3));
    let err = rule.layout_pass().unwrap_err();
    assert_eq!(err, PanelLayoutError::ChildCount { found: 3 });
    assert_eq!(
        err.to_string(),
        "dragged panel layout must have 2 children, found 3"
    );
}

#[test]
fn out_of_range_parallax_uses_default() {
    let attributes = PanelAttributes::new().with_parallax_factor(1.5);
    assert_eq!(attributes.parallax_factor(), DEFAULT_PARALLAX_FACTOR);

    let rule = PanelTestRule::with_attributes(400.0, 800.0, attributes, 1.0);
    let geometry = rule.panel().geometry().expect("laid out");
    assert_eq!(geometry.parallax_factor, 0.2);
}

#[test]
fn closed_layout_places_panels_around_the_peek_line() {
    let rule = PanelTestRule::with_attributes(
        400.0,
        800.0,
        PanelAttributes::new().with_bottom_panel_peek_height(Dp(40.0)),
        2.0,
    );
    // 40dp at density 2.
    assert_eq!(rule.panel().peek_height_px(), 80.0);
    assert_eq!(rule.bottom().frame(), Rect::new(0.0, 0.0, 400.0, 720.0));
    assert_eq!(rule.sliding().frame(), Rect::new(0.0, 720.0, 400.0, 800.0));
    assert_eq!(rule.panel().geometry().map(|g| g.travel_extent()), Some(720.0));
}

#[test]
fn measure_takes_the_largest_child_within_constraints() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let mut panel = DraggedPanelLayout::new(PanelAttributes::default(), 1.0, runtime.handle())
        .with_children([
            RecordingSurface::sized("bottom", Size::new(300.0, 200.0)),
            RecordingSurface::sized("sliding", Size::new(250.0, 900.0)),
        ]);

    let size = panel.measure(Constraints::loose(400.0, 800.0));
    assert_eq!(size, Size::new(300.0, 800.0));
    assert!(panel.children().iter().all(|child| child.measure_count() == 1));

    panel
        .layout(Rect::from_size(size))
        .expect("two children lay out");
    // Drags are bounded by the sliding panel's own height.
    assert_eq!(panel.geometry().map(|g| g.drag_extent()), Some(700.0));
}

#[test]
fn programmatic_requests_wait_for_the_first_layout() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let mut panel = DraggedPanelLayout::new(PanelAttributes::default(), 1.0, runtime.handle())
        .with_children([
            RecordingSurface::filling("bottom"),
            RecordingSurface::filling("sliding"),
        ]);

    panel.open();
    assert_eq!(panel.state(), PanelState::Idle(OpenState::Closed));
    assert!(!runtime.handle().has_frame_callbacks());

    panel.measure(Constraints::tight(400.0, 800.0));
    panel
        .layout(Rect::new(0.0, 0.0, 400.0, 800.0))
        .expect("two children lay out");
    panel.open();
    assert!(panel.is_animating());
}

#[test]
fn shadow_sits_on_top_of_the_closed_panel() {
    let mut rule = PanelTestRule::new(400.0, 800.0);
    let shadow = rule.panel().render_output().shadow.expect("closed panels draw a shadow");
    assert_eq!(shadow.bottom(), 700.0);
    assert_eq!(shadow.width, 400.0);
    assert_eq!(shadow.height, 8.0);

    let primitives = rule.draw();
    assert_eq!(primitives.len(), 1);
    let DrawPrimitive::Rect { rect, brush } = &primitives[0];
    assert_eq!(*rect, shadow);
    assert!(matches!(brush, Brush::VerticalGradient(colors) if colors.len() == 2));
}

#[test]
fn shadow_tracks_the_rendered_top_edge() {
    let mut rule = PanelTestRule::new(400.0, 800.0);
    rule.move_pointer(790.0, 590.0, 4, 40);
    let shadow = rule.panel().render_output().shadow.expect("shadow while dragging");
    assert_eq!(shadow.bottom(), 550.0);
    assert_eq!(rule.sliding().rendered_top(), 550.0);

    rule.up(590.0, 1);
    rule.advance_frame(FRAME_MILLIS);
    rule.advance_frame(FRAME_MILLIS);
    let shadow = rule.panel().render_output().shadow.expect("shadow while animating");
    assert!((shadow.bottom() - rule.sliding().rendered_top()).abs() < 1e-3);
}

#[test]
fn open_panel_draws_no_shadow_and_hides_the_bottom_panel() {
    let mut rule = PanelTestRule::new(400.0, 800.0);
    rule.panel_mut().open();
    rule.pump_until_idle();

    assert!(rule.panel().render_output().shadow.is_none());
    assert!(rule.draw().is_empty());
    assert!(rule.panel().will_not_draw());
    assert_eq!(rule.bottom().visibility(), Visibility::Gone);
}

#[test]
fn missing_shadow_never_draws() {
    let mut rule = PanelTestRule::with_attributes(
        400.0,
        800.0,
        PanelAttributes::new().with_shadow(None),
        1.0,
    );
    assert!(!rule.panel().will_draw_shadow());
    rule.drag(790.0, 690.0, 4, 40);
    rule.advance_frame(FRAME_MILLIS);
    assert!(rule.panel().render_output().shadow.is_none());
    assert!(rule.draw().is_empty());
}

#[test]
fn custom_shadow_uses_its_intrinsic_height() {
    let shadow = ShadowDrawable::new(Brush::solid(Color::from_rgba_u8(0, 0, 0, 96)), 24.0);
    let mut rule = PanelTestRule::with_attributes(
        400.0,
        800.0,
        PanelAttributes::new().with_shadow(Some(shadow.clone())),
        1.0,
    );
    let primitives = rule.draw();
    assert_eq!(
        primitives,
        vec![DrawPrimitive::Rect {
            rect: Rect::new(0.0, 676.0, 400.0, 24.0),
            brush: shadow.brush,
        }]
    );
}

#[test]
fn drawing_keeps_requesting_frames_while_animating() {
    let mut rule = PanelTestRule::new(400.0, 800.0);
    rule.panel_mut().open();
    rule.advance_frame(FRAME_MILLIS);
    rule.panel_mut().take_host_requests();

    rule.draw();
    assert!(rule.panel_mut().take_host_requests().redraw);

    rule.pump_until_idle();
    rule.panel_mut().take_host_requests();
    rule.draw();
    assert!(!rule.panel_mut().take_host_requests().redraw);
}

#[test]
fn settling_requests_a_layout_pass() {
    let mut rule = PanelTestRule::new(400.0, 800.0);
    let passes = rule.layout_passes();
    rule.panel_mut().open();
    rule.pump_until_idle();
    assert_eq!(rule.layout_passes(), passes + 1);
    assert_eq!(rule.panel().state(), PanelState::Idle(OpenState::Open));
}

#[test]
fn touch_slop_override_changes_confirmation_distance() {
    let mut rule = PanelTestRule::with_attributes(
        400.0,
        800.0,
        PanelAttributes::new().with_touch_slop(30.0),
        1.0,
    );
    rule.down(500.0);
    assert!(!rule.move_to(480.0, 10));
    assert!(rule.move_to(469.0, 10));
    assert!(rule.panel().state().is_dragging());
}
