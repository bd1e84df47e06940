use slidepanel_graphics::{Rect, Size};
use slidepanel_layout::Constraints;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Visible,
    Gone,
}

/// Compositing mode of a surface. Panels are promoted to `Hardware` while
/// animating and restored afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayerType {
    #[default]
    None,
    Software,
    Hardware,
}

/// A child surface the container measures, places and translates.
///
/// Hosts implement this for whatever their widget handle is. The
/// translation is a render transform on top of the placed frame.
pub trait PanelSurface {
    fn measure(&mut self, constraints: Constraints) -> Size;
    fn measured_size(&self) -> Size;

    fn place(&mut self, frame: Rect);
    fn frame(&self) -> Rect;

    fn translation_y(&self) -> f32;
    fn set_translation_y(&mut self, translation: f32);

    fn visibility(&self) -> Visibility;
    fn set_visibility(&mut self, visibility: Visibility);

    fn layer_type(&self) -> LayerType;
    fn set_layer_type(&mut self, layer_type: LayerType);
}
