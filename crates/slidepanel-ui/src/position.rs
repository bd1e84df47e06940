//! Position resolver: bounds a drag and resolves a release.
//!
//! Offsets are raw translations of the sliding panel relative to its resting
//! frame. While closed the panel can only move up (negative offsets); while
//! open it can only move down (positive offsets).

use crate::{GeometryConfig, OpenState};

/// Release speed, in px/ms, above which a release is a fling.
///
/// Exactly `0.5` is not a fling.
pub const FLING_VELOCITY_THRESHOLD: f32 = 0.5;

/// Duration of a settle across the full travel extent.
pub const SNAP_DURATION_MILLIS: f32 = 300.0;

/// How a released or programmatic transition finishes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleasePlan {
    pub target: OpenState,
    /// Signed delta added to the current offset to reach the target's resting position.
    pub distance: f32,
    pub duration_millis: u64,
    pub flinging: bool,
}

/// Clamps `translation` to the range legal for `state`.
///
/// Idempotent; a NaN offset is treated as 0.
pub fn bound_translation(translation: f32, state: OpenState, geometry: &GeometryConfig) -> f32 {
    if translation.is_nan() {
        return 0.0;
    }
    let extent = geometry.drag_extent();
    match state {
        OpenState::Closed => translation.clamp(-extent, 0.0),
        OpenState::Open => translation.clamp(0.0, extent),
    }
}

/// Offset of the bottom panel paired with the sliding panel's `translation`.
pub fn bottom_panel_translation(
    translation: f32,
    state: OpenState,
    geometry: &GeometryConfig,
) -> f32 {
    let factor = geometry.parallax_factor;
    match state {
        OpenState::Open => -(geometry.travel_extent() - translation) * factor,
        OpenState::Closed => translation * factor,
    }
}

/// Signed distance from `current` to the resting position of `target`.
///
/// From `Open`, staying open returns to 0 and closing travels down to
/// `+travel`. From `Closed`, staying closed returns to 0 and opening
/// travels up to `-travel`.
pub fn calculate_distance(
    target: OpenState,
    current: f32,
    state: OpenState,
    geometry: &GeometryConfig,
) -> f32 {
    let travel = geometry.travel_extent();
    match (state, target) {
        (OpenState::Open, OpenState::Open) | (OpenState::Closed, OpenState::Closed) => -current,
        (OpenState::Open, OpenState::Closed) => travel - current,
        (OpenState::Closed, OpenState::Open) => -(travel + current),
    }
}

pub fn is_fling(velocity: f32) -> bool {
    velocity.abs() > FLING_VELOCITY_THRESHOLD
}

/// True once the panel has traveled at least half the travel extent.
pub fn past_halfway(current: f32, geometry: &GeometryConfig) -> bool {
    current.abs() >= geometry.travel_extent() / 2.0
}

/// Resolves a release with `velocity` (px/ms) at offset `current`.
///
/// A fling picks its target from the direction alone and keeps the release
/// speed. Otherwise the panel finishes the transition once past halfway and
/// snaps back before that, taking a share of [`SNAP_DURATION_MILLIS`]
/// proportional to how far it has already traveled.
pub fn resolve_release(
    velocity: f32,
    current: f32,
    state: OpenState,
    geometry: &GeometryConfig,
) -> ReleasePlan {
    if is_fling(velocity) {
        let target = if velocity < 0.0 {
            OpenState::Open
        } else {
            OpenState::Closed
        };
        let distance = calculate_distance(target, current, state, geometry);
        ReleasePlan {
            target,
            distance,
            duration_millis: (distance / velocity).abs().round() as u64,
            flinging: true,
        }
    } else {
        let halfway = past_halfway(current, geometry);
        let target = match state {
            OpenState::Open if halfway => OpenState::Closed,
            OpenState::Closed if halfway => OpenState::Open,
            _ => state,
        };
        ReleasePlan {
            target,
            distance: calculate_distance(target, current, state, geometry),
            duration_millis: scaled_duration(current, geometry),
            flinging: false,
        }
    }
}

/// Plan for a programmatic `open()`/`close()`: the duration scales with the
/// distance still to cover instead of the distance already traveled.
pub fn settle_plan(
    target: OpenState,
    current: f32,
    state: OpenState,
    geometry: &GeometryConfig,
) -> ReleasePlan {
    let distance = calculate_distance(target, current, state, geometry);
    ReleasePlan {
        target,
        distance,
        duration_millis: scaled_duration(distance, geometry),
        flinging: false,
    }
}

fn scaled_duration(offset: f32, geometry: &GeometryConfig) -> u64 {
    let travel = geometry.travel_extent();
    if travel <= 0.0 {
        log::warn!("travel extent is {travel}, settling without animation");
        return 0;
    }
    (SNAP_DURATION_MILLIS * offset.abs() / travel).round() as u64
}

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod tests;
