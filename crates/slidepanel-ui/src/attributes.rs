//! Host-supplied configuration for the container.

use slidepanel_graphics::{Brush, Color, Dp, Rect};

pub const DEFAULT_PARALLAX_FACTOR: f32 = 0.2;
pub const MIN_PARALLAX_FACTOR: f32 = 0.1;
pub const MAX_PARALLAX_FACTOR: f32 = 0.9;
pub const DEFAULT_PEEK_HEIGHT: Dp = Dp(100.0);

const DEFAULT_SHADOW_HEIGHT: Dp = Dp(8.0);

/// Paintable drawn directly above the sliding panel's top edge.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowDrawable {
    pub brush: Brush,
    /// Height in pixels the shadow occupies above the panel.
    pub intrinsic_height: f32,
}

impl ShadowDrawable {
    pub fn new(brush: Brush, intrinsic_height: f32) -> Self {
        Self {
            brush,
            intrinsic_height: intrinsic_height.max(0.0),
        }
    }

    /// A transparent-to-black vertical fade, sized for the given density.
    pub fn fade(density: f32) -> Self {
        Self::new(
            Brush::vertical_gradient(vec![Color::TRANSPARENT, Color::BLACK.with_alpha(0.3)]),
            DEFAULT_SHADOW_HEIGHT.to_px(density),
        )
    }

    /// Bounds spanning `width`, ending exactly at `panel_top`.
    pub fn bounds_above(&self, panel_top: f32, width: f32) -> Rect {
        Rect::new(
            0.0,
            panel_top - self.intrinsic_height,
            width,
            self.intrinsic_height,
        )
    }
}

/// Configuration attributes of [`DraggedPanelLayout`](crate::DraggedPanelLayout).
///
/// Setters sanitize their input: out-of-range values fall back to the
/// defaults rather than failing.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelAttributes {
    parallax_factor: f32,
    bottom_panel_peek_height: Dp,
    shadow: Option<ShadowDrawable>,
    touch_slop: Option<f32>,
}

impl PanelAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallax_factor(mut self, factor: f32) -> Self {
        self.parallax_factor = sanitize_parallax_factor(factor);
        self
    }

    pub fn with_bottom_panel_peek_height(mut self, height: Dp) -> Self {
        self.bottom_panel_peek_height = if height.0.is_finite() && height.0 >= 0.0 {
            height
        } else {
            log::warn!(
                "invalid peek height {:?}, using {:?}",
                height,
                DEFAULT_PEEK_HEIGHT
            );
            DEFAULT_PEEK_HEIGHT
        };
        self
    }

    pub fn with_shadow(mut self, shadow: Option<ShadowDrawable>) -> Self {
        self.shadow = shadow;
        self
    }

    /// Overrides the density-scaled default slop, in pixels.
    pub fn with_touch_slop(mut self, slop_px: f32) -> Self {
        self.touch_slop = (slop_px.is_finite() && slop_px >= 0.0).then_some(slop_px);
        self
    }

    pub fn parallax_factor(&self) -> f32 {
        self.parallax_factor
    }

    pub fn bottom_panel_peek_height(&self) -> Dp {
        self.bottom_panel_peek_height
    }

    pub fn shadow(&self) -> Option<&ShadowDrawable> {
        self.shadow.as_ref()
    }

    /// Touch slop in pixels: the override if one was set, otherwise
    /// [`DRAG_THRESHOLD`](slidepanel_foundation::DRAG_THRESHOLD) scaled by density.
    pub fn touch_slop_px(&self, density: f32) -> f32 {
        self.touch_slop
            .unwrap_or(slidepanel_foundation::DRAG_THRESHOLD * density)
    }
}

impl Default for PanelAttributes {
    fn default() -> Self {
        Self {
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
            bottom_panel_peek_height: DEFAULT_PEEK_HEIGHT,
            shadow: Some(ShadowDrawable::fade(1.0)),
            touch_slop: None,
        }
    }
}

/// Returns `factor` when it lies in `[0.1, 0.9]`, the default otherwise.
pub fn sanitize_parallax_factor(factor: f32) -> f32 {
    if (MIN_PARALLAX_FACTOR..=MAX_PARALLAX_FACTOR).contains(&factor) {
        factor
    } else {
        log::warn!(
            "parallax factor {factor} outside [{MIN_PARALLAX_FACTOR}, {MAX_PARALLAX_FACTOR}], using {DEFAULT_PARALLAX_FACTOR}"
        );
        DEFAULT_PARALLAX_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_outside_range_falls_back_to_default() {
        assert_eq!(sanitize_parallax_factor(0.05), DEFAULT_PARALLAX_FACTOR);
        assert_eq!(sanitize_parallax_factor(0.95), DEFAULT_PARALLAX_FACTOR);
        assert_eq!(sanitize_parallax_factor(f32::NAN), DEFAULT_PARALLAX_FACTOR);
        assert_eq!(sanitize_parallax_factor(0.1), 0.1);
        assert_eq!(sanitize_parallax_factor(0.9), 0.9);
        assert_eq!(sanitize_parallax_factor(0.5), 0.5);
    }

    #[test]
    fn negative_peek_height_falls_back_to_default() {
        let attributes = PanelAttributes::new().with_bottom_panel_peek_height(Dp(-4.0));
        assert_eq!(attributes.bottom_panel_peek_height(), DEFAULT_PEEK_HEIGHT);
        let attributes = PanelAttributes::new().with_bottom_panel_peek_height(Dp(0.0));
        assert_eq!(attributes.bottom_panel_peek_height(), Dp(0.0));
    }

    #[test]
    fn touch_slop_scales_with_density_unless_overridden() {
        let attributes = PanelAttributes::new();
        assert_eq!(attributes.touch_slop_px(2.0), 16.0);
        assert_eq!(attributes.with_touch_slop(3.0).touch_slop_px(2.0), 3.0);
    }

    #[test]
    fn shadow_ends_at_panel_top() {
        let shadow = ShadowDrawable::new(Brush::solid(Color::BLACK), 12.0);
        let bounds = shadow.bounds_above(500.0, 320.0);
        assert_eq!(bounds, Rect::new(0.0, 488.0, 320.0, 12.0));
        assert_eq!(bounds.bottom(), 500.0);
    }
}
