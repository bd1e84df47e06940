/// Configuration errors detected while laying out the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelLayoutError {
    /// The container must hold exactly a bottom panel and a sliding panel.
    ChildCount { found: usize },
}

impl std::fmt::Display for PanelLayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelLayoutError::ChildCount { found } => {
                write!(f, "dragged panel layout must have 2 children, found {found}")
            }
        }
    }
}

impl std::error::Error for PanelLayoutError {}
