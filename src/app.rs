use crate::models::AppState;

/// Per-run application state: the player's name and where the menu loop is.
///
/// Transitions are `MainMenu -> InQuiz -> MainMenu`,
/// `MainMenu -> InPractice -> MainMenu`, and `MainMenu -> Exited`.
pub struct App {
    pub state: AppState,
    name: String,
}

impl App {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: AppState::MainMenu,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_quiz(&mut self) {
        self.state = AppState::InQuiz;
    }

    pub fn start_practice(&mut self) {
        self.state = AppState::InPractice;
    }

    /// Return to the main menu after a quiz or practice run.
    pub fn finish_activity(&mut self) {
        self.state = AppState::MainMenu;
    }

    pub fn exit(&mut self) {
        self.state = AppState::Exited;
    }

    pub fn is_running(&self) -> bool {
        self.state != AppState::Exited
    }
}
