use std::path::PathBuf;

use clap::Parser;
use console_quiz::Quiz;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from instead of the built-in bank
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Player name, skipping the name prompt
    #[arg(short, long)]
    name: Option<String>,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let quiz = match args.questions {
        Some(path) => Quiz::from_json(path),
        None => Ok(Quiz::builtin()),
    };
    let mut quiz = match quiz {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error loading quiz: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(name) = args.name {
        quiz = quiz.with_name(name);
    }

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
