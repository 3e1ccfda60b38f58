use ratatui::Frame;

use crate::app::{App, AppState};
use crate::ui::{render_load_failed, render_loading};

/// A UI Screen boundary: one renderer per app state
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame);
}

pub struct LoadingScreen;

impl Screen for LoadingScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        render_loading(app, f);
    }
}

/// Playing and Finished share the board; the widget switches on round status
pub struct BoardScreen;

impl Screen for BoardScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        f.render_widget(app, f.area());
    }
}

pub struct LoadFailedScreen {
    message: String,
}

impl Screen for LoadFailedScreen {
    fn render(&self, _app: &App, f: &mut Frame) {
        render_load_failed(&self.message, f);
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::Loading => Box::new(LoadingScreen),
        AppState::Playing | AppState::Finished => Box::new(BoardScreen),
        AppState::LoadFailed(message) => Box::new(LoadFailedScreen {
            message: message.clone(),
        }),
    }
}
