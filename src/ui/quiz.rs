use std::io::{self, Write};

use crate::models::Question;

pub fn render_start<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Quiz Started ---")
}

/// Print one question with its 1-based enumerated options and a
/// `number/total` progress header.
pub fn render_question<W: Write>(
    out: &mut W,
    number: usize,
    total: usize,
    question: &Question,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Question {number}/{total}")?;
    writeln!(out, "{}", question.prompt)?;
    for (index, option) in question.options.iter().enumerate() {
        writeln!(out, "  {}) {}", index + 1, option)?;
    }
    Ok(())
}

pub fn render_feedback<W: Write>(out: &mut W, correct: bool) -> io::Result<()> {
    if correct {
        writeln!(out, "Correct!")
    } else {
        writeln!(out, "Incorrect.")
    }
}
