//! Tween animation system for the sliding panel container.

mod animation;

pub use animation::*;
