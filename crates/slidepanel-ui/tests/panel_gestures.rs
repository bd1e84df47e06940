use slidepanel_foundation::PointerEvent;
use slidepanel_testing::prelude::*;
use slidepanel_ui::{LayerType, OpenState, PanelState, PanelSurface, Visibility};

// 400x800 container, 100px peek at density 1: travel extent 700.
const WIDTH: f32 = 400.0;
const HEIGHT: f32 = 800.0;
const TRAVEL: f32 = 700.0;

fn rule() -> PanelTestRule {
    PanelTestRule::new(WIDTH, HEIGHT)
}

fn opened_rule() -> PanelTestRule {
    let mut rule = rule();
    rule.panel_mut().open();
    rule.pump_until_idle();
    assert_eq!(rule.panel().state(), PanelState::Idle(OpenState::Open));
    rule
}

#[test]
fn full_drag_without_velocity_opens() {
    let mut rule = rule();
    rule.drag_and_hold(790.0, -100.0, 10, 100);

    assert_eq!(rule.sliding().translation_y(), -TRAVEL);
    assert_eq!(
        rule.panel().state(),
        PanelState::Animating {
            resting: OpenState::Closed,
            target: OpenState::Open,
        }
    );

    let frames = rule.pump_until_idle();
    // One frame to latch the start time plus 300ms at 16ms per frame.
    assert_eq!(frames, 20);
    assert_eq!(rule.panel().state(), PanelState::Idle(OpenState::Open));
    assert_eq!(rule.sliding().translation_y(), 0.0);
    assert_eq!(rule.sliding().frame().top(), 0.0);
}

#[test]
fn short_drag_without_velocity_snaps_back() {
    let mut rule = rule();
    rule.drag_and_hold(790.0, 740.0, 5, 50);

    // The sample that crossed the slop anchors the drag.
    assert_eq!(rule.sliding().translation_y(), -40.0);
    assert_eq!(
        rule.panel().state(),
        PanelState::Animating {
            resting: OpenState::Closed,
            target: OpenState::Closed,
        }
    );

    rule.pump_until_idle();
    assert_eq!(rule.panel().state(), PanelState::Idle(OpenState::Closed));
    assert_eq!(rule.sliding().translation_y(), 0.0);
    assert_eq!(rule.sliding().frame().top(), HEIGHT - 100.0);
    assert_eq!(rule.bottom().visibility(), Visibility::Visible);
}

#[test]
fn quick_upward_fling_opens_from_a_short_drag() {
    let mut rule = rule();
    rule.drag(790.0, 690.0, 4, 40);

    assert_eq!(rule.sliding().translation_y(), -75.0);
    assert!(matches!(
        rule.panel().state(),
        PanelState::Animating {
            target: OpenState::Open,
            ..
        }
    ));

    rule.pump_until_idle();
    assert!(rule.panel().is_open());
    assert_eq!(rule.bottom().visibility(), Visibility::Gone);
    assert!(!rule.panel().will_draw_shadow());
}

#[test]
fn downward_fling_closes_an_open_panel() {
    let mut rule = opened_rule();
    rule.drag(100.0, 200.0, 4, 40);

    assert_eq!(rule.bottom().visibility(), Visibility::Visible);
    assert!(matches!(
        rule.panel().state(),
        PanelState::Animating {
            resting: OpenState::Open,
            target: OpenState::Closed,
        }
    ));

    rule.pump_until_idle();
    assert_eq!(rule.panel().open_state(), OpenState::Closed);
    assert_eq!(rule.sliding().frame().top(), HEIGHT - 100.0);
    assert!(rule.panel().will_draw_shadow());
}

#[test]
fn closed_panel_cannot_be_dragged_below_rest() {
    let mut rule = rule();
    rule.move_pointer(700.0, 900.0, 5, 50);
    assert_eq!(
        rule.panel().state(),
        PanelState::Dragging {
            resting: OpenState::Closed
        }
    );
    assert_eq!(rule.sliding().translation_y(), 0.0);
    assert_eq!(rule.bottom().translation_y(), 0.0);
}

#[test]
fn open_panel_cannot_be_dragged_above_rest() {
    let mut rule = opened_rule();
    rule.move_pointer(400.0, 100.0, 5, 50);
    assert_eq!(rule.sliding().translation_y(), 0.0);
    // Fully open, the bottom panel sits a parallax share of the travel above rest.
    assert!((rule.bottom().translation_y() + TRAVEL * 0.2).abs() < 1e-3);
}

#[test]
fn bottom_panel_follows_with_parallax_while_dragging() {
    let mut rule = rule();
    rule.move_pointer(790.0, 590.0, 4, 40);

    let output = rule.panel().render_output();
    assert_eq!(output.sliding_translation, -150.0);
    assert!((output.bottom_translation - output.sliding_translation * 0.2).abs() < 1e-3);
}

#[test]
fn movement_within_slop_is_not_intercepted() {
    let mut rule = rule();
    assert!(!rule.down(500.0));
    assert!(!rule.move_to(505.0, 10));
    assert!(!rule.move_to(492.0, 10));
    assert_eq!(rule.panel().state(), PanelState::Idle(OpenState::Closed));

    let crossing = PointerEvent::moved(480.0, rule.now_millis() + 10);
    assert!(rule.send(crossing.clone()));
    assert!(crossing.is_consumed());
    assert!(rule.panel().state().is_dragging());
}

#[test]
fn container_as_touch_target_drags_without_slop() {
    let mut rule = rule();
    assert!(rule.touch(PointerEvent::down(500.0, 0)));
    assert!(rule.panel().state().is_dragging());

    assert!(rule.touch(PointerEvent::moved(497.0, 10)));
    assert_eq!(rule.sliding().translation_y(), -3.0);
}

#[test]
fn pointer_cancel_snaps_without_fling() {
    let mut rule = rule();
    rule.move_pointer(790.0, 690.0, 4, 40);
    rule.send(PointerEvent::cancel(690.0, rule.now_millis() + 1));

    // A fast upward drag, but the cancel carries no velocity.
    assert_eq!(
        rule.panel().state(),
        PanelState::Animating {
            resting: OpenState::Closed,
            target: OpenState::Closed,
        }
    );
}

#[test]
fn up_without_down_is_ignored() {
    let mut rule = rule();
    assert!(!rule.up(300.0, 5));
    assert!(!rule.move_to(100.0, 5));
    assert_eq!(rule.panel().state(), PanelState::Idle(OpenState::Closed));
    assert!(rule.sliding().translations().is_empty());
}

#[test]
fn pointer_down_preempts_a_running_transition() {
    let mut rule = rule();
    rule.drag(790.0, 690.0, 4, 40);
    for _ in 0..5 {
        rule.advance_frame(FRAME_MILLIS);
    }
    let interrupted_at = rule.sliding().translation_y();
    assert!(interrupted_at < -75.0 && interrupted_at > -TRAVEL);

    rule.down(400.0);
    assert_eq!(rule.panel().state(), PanelState::Idle(OpenState::Closed));
    assert_eq!(rule.sliding().translation_y(), interrupted_at);
    assert_eq!(rule.sliding().layer_type(), LayerType::None);
    assert!(!rule.runtime().handle().has_frame_callbacks());

    rule.move_to(380.0, 10);
    rule.move_to(350.0, 10);
    assert!((rule.sliding().translation_y() - (interrupted_at - 30.0)).abs() < 1e-3);
    assert!(
        (rule.bottom().translation_y() - rule.sliding().translation_y() * 0.2).abs() < 1e-3
    );
}

#[test]
fn tap_during_a_transition_still_comes_to_rest() {
    let mut rule = rule();
    rule.drag(790.0, 690.0, 4, 40);
    for _ in 0..5 {
        rule.advance_frame(FRAME_MILLIS);
    }
    let interrupted_at = rule.sliding().translation_y();
    assert!(interrupted_at < -75.0 && interrupted_at > -TRAVEL);

    // A tap on a child never crosses the slop.
    rule.down(400.0);
    rule.up(400.0, 50);
    assert!(rule.panel().is_animating());

    rule.pump_until_idle();
    let expected = if interrupted_at.abs() >= TRAVEL / 2.0 {
        OpenState::Open
    } else {
        OpenState::Closed
    };
    assert_eq!(rule.panel().state(), PanelState::Idle(expected));
    assert_eq!(rule.sliding().translation_y(), 0.0);
    let resting_top = if expected.is_open() { 0.0 } else { HEIGHT - 100.0 };
    assert_eq!(rule.sliding().rendered_top(), resting_top);
}

#[test]
fn cancelled_gesture_inside_the_slop_settles_the_panel() {
    let mut rule = opened_rule();
    rule.panel_mut().close();
    for _ in 0..3 {
        rule.advance_frame(FRAME_MILLIS);
    }
    let interrupted_at = rule.sliding().translation_y();
    assert!(interrupted_at > 0.0 && interrupted_at < TRAVEL);

    rule.down(300.0);
    assert_eq!(rule.panel().state(), PanelState::Idle(OpenState::Open));
    rule.move_to(304.0, 10);
    rule.send(PointerEvent::cancel(304.0, rule.now_millis() + 5));

    rule.pump_until_idle();
    let expected = if interrupted_at >= TRAVEL / 2.0 {
        OpenState::Closed
    } else {
        OpenState::Open
    };
    assert_eq!(rule.panel().state(), PanelState::Idle(expected));
    assert_eq!(rule.sliding().translation_y(), 0.0);
    assert_eq!(rule.bottom().translation_y(), 0.0);
}

#[test]
fn host_cancel_keeps_offsets_and_resting_state() {
    let mut rule = rule();
    rule.drag(790.0, 690.0, 4, 40);
    rule.advance_frame(FRAME_MILLIS);
    rule.advance_frame(FRAME_MILLIS);
    rule.panel_mut().take_host_requests();
    let offset = rule.sliding().translation_y();

    rule.panel_mut().cancel_animation();
    assert_eq!(rule.panel().state(), PanelState::Idle(OpenState::Closed));
    assert_eq!(rule.sliding().translation_y(), offset);
    let requests = rule.panel_mut().take_host_requests();
    assert!(requests.redraw);
    assert!(!requests.layout);

    // Nothing commits later.
    rule.advance_frame(FRAME_MILLIS);
    assert!(!rule.panel().is_open());
}

#[test]
fn layer_types_are_promoted_and_restored_per_panel() {
    let mut rule = PanelTestRule::with_children(
        WIDTH,
        HEIGHT,
        Default::default(),
        1.0,
        vec![
            RecordingSurface::filling("bottom").with_layer_type(LayerType::Software),
            RecordingSurface::filling("sliding"),
        ],
    );
    rule.drag(790.0, 690.0, 4, 40);
    assert_eq!(rule.bottom().layer_type(), LayerType::Hardware);
    assert_eq!(rule.sliding().layer_type(), LayerType::Hardware);

    rule.pump_until_idle();
    assert_eq!(rule.bottom().layer_type(), LayerType::Software);
    assert_eq!(rule.sliding().layer_type(), LayerType::None);
    assert_eq!(
        rule.sliding().layer_changes(),
        &[LayerType::Hardware, LayerType::None]
    );
}

#[test]
fn programmatic_open_and_close_round_trip() {
    let mut rule = rule();
    rule.panel_mut().open();
    assert_eq!(
        rule.panel().state(),
        PanelState::Animating {
            resting: OpenState::Closed,
            target: OpenState::Open,
        }
    );
    assert_eq!(rule.pump_until_idle(), 20);
    assert!(rule.panel().is_open());
    assert_eq!(rule.sliding().frame().top(), 0.0);

    rule.panel_mut().open();
    assert!(!rule.panel().is_animating());

    rule.panel_mut().close();
    rule.advance_frame(FRAME_MILLIS);
    rule.advance_frame(FRAME_MILLIS);
    assert!(rule.sliding().translation_y() > 0.0);
    rule.pump_until_idle();
    assert_eq!(rule.panel().open_state(), OpenState::Closed);
    assert_eq!(rule.sliding().frame().top(), HEIGHT - 100.0);
}

#[test]
fn programmatic_requests_are_ignored_mid_drag() {
    let mut rule = rule();
    rule.move_pointer(790.0, 700.0, 3, 30);
    rule.panel_mut().open();
    assert!(rule.panel().state().is_dragging());
}
