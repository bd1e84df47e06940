use slidepanel_graphics::Size;

/// Pixel geometry derived on every layout pass. Read-only between passes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryConfig {
    pub container_size: Size,
    pub sliding_panel_height: f32,
    pub peek_height: f32,
    pub parallax_factor: f32,
}

impl GeometryConfig {
    pub fn new(
        container_size: Size,
        sliding_panel_height: f32,
        peek_height: f32,
        parallax_factor: f32,
    ) -> Self {
        Self {
            container_size,
            sliding_panel_height,
            peek_height,
            parallax_factor,
        }
    }

    pub fn container_width(&self) -> f32 {
        self.container_size.width
    }

    pub fn container_height(&self) -> f32 {
        self.container_size.height
    }

    /// Distance between the closed and open resting positions.
    ///
    /// Drives distances and durations. Zero when the peek exceeds the container.
    pub fn travel_extent(&self) -> f32 {
        (self.container_height() - self.peek_height).max(0.0)
    }

    /// Range a drag may translate the sliding panel, from its measured height.
    pub fn drag_extent(&self) -> f32 {
        (self.sliding_panel_height - self.peek_height).max(0.0)
    }

    /// Top edge of the sliding panel when closed.
    pub fn peek_line(&self) -> f32 {
        self.container_height() - self.peek_height
    }
}
