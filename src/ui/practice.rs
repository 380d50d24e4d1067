use std::io::{self, Write};

use crate::models::Question;

/// Print every question's prompt with its topic label, sorted
/// case-insensitively by prompt text. Takes its own copy of the store and
/// sorts it in place; the canonical store is unaffected.
pub fn render<W: Write>(out: &mut W, mut questions: Vec<Question>) -> io::Result<()> {
    questions.sort_by_key(|question| question.prompt.to_lowercase());

    writeln!(out)?;
    writeln!(out, "--- Practice Mode (Questions Sorted by Text) ---")?;
    for question in &questions {
        writeln!(out, "{}  [{}]", question.prompt, question.topic)?;
    }
    writeln!(out, "(Tip: Start the quiz from the main menu when ready.)")
}
