use inwen_types::Explanation;

/// What the single overlay panel currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Idle,
    Loading,
    Success(Explanation),
    Error(String),
}

impl OverlayState {
    pub fn is_idle(&self) -> bool {
        matches!(self, OverlayState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, OverlayState::Loading)
    }
}
