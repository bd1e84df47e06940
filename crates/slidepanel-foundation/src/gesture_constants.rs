//! Shared gesture constants for touch/pointer handling.
//!
//! These values are in logical pixels. Hosts with a known display density
//! scale them before handing them to a tracker.

/// Drag threshold (touch slop) in logical pixels.
///
/// The pointer must travel strictly more than this distance from the press
/// position before a vertical drag is confirmed. Matches the common platform
/// touch slop of ~8dp.
pub const DRAG_THRESHOLD: f32 = 8.0;
