use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::Question;

/// Error loading questions from a JSON file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Read { path: PathBuf, source: io::Error },
    /// The file is not valid question JSON.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The file parsed but contains no questions.
    Empty { path: PathBuf },
    /// A question violates the option-count or correct-index invariant.
    Invalid {
        path: PathBuf,
        index: usize,
        reason: &'static str,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
            LoadError::Empty { path } => {
                write!(f, "{} contains no questions", path.display())
            }
            LoadError::Invalid {
                path,
                index,
                reason,
            } => {
                write!(f, "question {} in {}: {}", index + 1, path.display(), reason)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Read { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
            LoadError::Empty { .. } | LoadError::Invalid { .. } => None,
        }
    }
}

/// Load questions from a JSON file: an array of objects with `topic`,
/// `prompt`, `options`, and `correct_index` fields.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if questions.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    for (index, question) in questions.iter().enumerate() {
        question.validate().map_err(|reason| LoadError::Invalid {
            path: path.to_path_buf(),
            index,
            reason,
        })?;
    }

    log::debug!("loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}
