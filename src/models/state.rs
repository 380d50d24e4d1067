/// Where the menu loop currently is. `Exited` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    MainMenu,
    InQuiz,
    InPractice,
    Exited,
}
