use slidepanel_graphics::{Rect, Size};
use slidepanel_layout::Constraints;
use slidepanel_ui::{LayerType, PanelSurface, Visibility};

/// In-memory [`PanelSurface`] that remembers every translation and layer
/// change applied to it.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    name: &'static str,
    preferred: Option<Size>,
    measured: Size,
    frame: Rect,
    translation_y: f32,
    visibility: Visibility,
    layer_type: LayerType,
    translations: Vec<f32>,
    layer_changes: Vec<LayerType>,
    measure_count: usize,
}

impl RecordingSurface {
    /// A surface that fills whatever its constraints allow.
    pub fn filling(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// A surface that asks for `size`, constrained.
    pub fn sized(name: &'static str, size: Size) -> Self {
        Self {
            name,
            preferred: Some(size),
            ..Self::default()
        }
    }

    pub fn with_layer_type(mut self, layer_type: LayerType) -> Self {
        self.layer_type = layer_type;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Every translation applied, oldest first.
    pub fn translations(&self) -> &[f32] {
        &self.translations
    }

    pub fn layer_changes(&self) -> &[LayerType] {
        &self.layer_changes
    }

    pub fn measure_count(&self) -> usize {
        self.measure_count
    }

    /// Top edge as composited: the placed frame plus the translation.
    pub fn rendered_top(&self) -> f32 {
        self.frame.top() + self.translation_y
    }
}

impl PanelSurface for RecordingSurface {
    fn measure(&mut self, constraints: Constraints) -> Size {
        self.measure_count += 1;
        let wanted = self.preferred.unwrap_or_else(|| {
            let width = if constraints.max_width.is_finite() {
                constraints.max_width
            } else {
                constraints.min_width
            };
            let height = if constraints.max_height.is_finite() {
                constraints.max_height
            } else {
                constraints.min_height
            };
            Size::new(width, height)
        });
        self.measured = constraints.constrain_size(wanted);
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn place(&mut self, frame: Rect) {
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
        self.translations.push(translation);
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    fn layer_type(&self) -> LayerType {
        self.layer_type
    }

    fn set_layer_type(&mut self, layer_type: LayerType) {
        self.layer_type = layer_type;
        self.layer_changes.push(layer_type);
    }
}
