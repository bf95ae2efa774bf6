// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Grid,
    List,
}

impl ViewKind {
    pub const ALL: [ViewKind; 2] = [ViewKind::Grid, ViewKind::List];

    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::Grid => "Grid",
            ViewKind::List => "List",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Path typed into the input field (raw slot JSON, schedule JSON or HTML)
    pub input_path: String,

    /// Active tab
    pub view: ViewKind,

    /// Week picked with the week bar; None follows the clock
    pub browse_week: Option<u32>,

    /// Ignore week ranges and show every session of the term
    pub whole_term: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            input_path: s!(),
            view: ViewKind::Grid,
            browse_week: None,
            whole_term: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
