//! # console-quiz
//!
//! A line-oriented console quiz: a built-in bank of multiple-choice
//! questions, a validated-input menu, score reporting, and a sorted
//! practice listing.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use console_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Run the built-in question bank on stdin/stdout.
//!     Quiz::builtin().run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod input;
mod models;
mod session;
mod ui;

use std::io::{self, BufRead, Write};
use std::path::Path;

pub use app::App;
pub use data::{LoadError, builtin_questions, load_questions_from_json};
pub use models::{AppState, Question};
pub use session::{PASS_THRESHOLD, QuizSession};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading questions from a file.
    Load(LoadError),
    /// IO error while talking to the console.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A quiz instance that can be run on the console.
pub struct Quiz {
    questions: Vec<Question>,
    name: Option<String>,
}

impl Quiz {
    /// Create a quiz from a vector of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            name: None,
        }
    }

    /// Create a quiz over the built-in question bank.
    pub fn builtin() -> Self {
        Self::new(builtin_questions())
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use console_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Ok(Self::new(questions))
    }

    /// Set the player name up front, skipping the name prompt.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Run the quiz on stdin/stdout until the user picks Exit.
    pub fn run(self) -> Result<(), QuizError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(&mut stdin.lock(), &mut stdout.lock())
    }

    /// Run the quiz over an arbitrary line source and sink.
    pub fn run_with<R: BufRead, W: Write>(self, input: &mut R, out: &mut W) -> Result<(), QuizError> {
        ui::welcome::render_banner(out)?;

        let name = match self.name {
            Some(name) => name,
            None => prompt_name(input, out)?,
        };
        let mut app = App::new(name);
        log::info!("session started for {}", app.name());

        while app.is_running() {
            match app.state {
                AppState::MainMenu => {
                    ui::welcome::render_menu(out, app.name())?;
                    let choice =
                        input::read_int_in_range(input, out, "Your choice (1-3): ", 1, 3)?;
                    // The validator caps the choice at 3, so the last arm is Exit.
                    match choice {
                        1 => app.start_quiz(),
                        2 => app.start_practice(),
                        _ => app.exit(),
                    }
                }
                AppState::InQuiz => {
                    run_quiz_session(input, out, app.name(), self.questions.clone())?;
                    app.finish_activity();
                }
                AppState::InPractice => {
                    ui::practice::render(out, self.questions.clone())?;
                    app.finish_activity();
                }
                AppState::Exited => {}
            }
        }

        ui::welcome::render_goodbye(out, app.name())?;
        Ok(())
    }
}

fn prompt_name<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<String> {
    write!(out, "Enter your name: ")?;
    out.flush()?;
    input::read_trimmed_line(input)
}

/// One full quiz pass: shuffle, ask every question, print the results.
fn run_quiz_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    name: &str,
    questions: Vec<Question>,
) -> Result<(), QuizError> {
    let mut session = QuizSession::shuffled(questions);
    ui::quiz::render_start(out)?;

    let total = session.total();
    for index in 0..total {
        let option_count = {
            let question = session.question(index);
            ui::quiz::render_question(out, index + 1, total, question)?;
            question.options.len()
        };

        let label = format!("Your answer (1-{option_count}): ");
        let answer = input::read_int_in_range(input, out, &label, 1, option_count)?;
        let correct = session.record_answer(answer);
        ui::quiz::render_feedback(out, correct)?;
    }

    log::info!("quiz finished: {}/{}", session.score(), session.total());
    ui::result::render(out, name, &session)?;
    Ok(())
}
