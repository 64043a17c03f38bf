// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Raw search box contents; the applied query lags it by the debounce
    pub search_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100.0,
            window_h: 760.0,
            search_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
