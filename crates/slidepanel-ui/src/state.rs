/// Resting state of the sliding panel, the only state that survives a gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

impl OpenState {
    pub fn is_open(self) -> bool {
        self == OpenState::Open
    }
}

/// Where the container is in the drag → animate → rest cycle.
///
/// `resting` is the committed [`OpenState`]; it only changes when an
/// animation finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Idle(OpenState),
    Dragging {
        resting: OpenState,
    },
    Animating {
        resting: OpenState,
        target: OpenState,
    },
}

impl PanelState {
    pub fn resting(&self) -> OpenState {
        match *self {
            PanelState::Idle(state) => state,
            PanelState::Dragging { resting } | PanelState::Animating { resting, .. } => resting,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, PanelState::Dragging { .. })
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, PanelState::Animating { .. })
    }
}

impl Default for PanelState {
    fn default() -> Self {
        PanelState::Idle(OpenState::Closed)
    }
}
