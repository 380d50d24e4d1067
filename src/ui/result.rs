use std::io::{self, Write};

use crate::session::QuizSession;

/// Print the results block and the wrong-answer review for a completed
/// session.
pub fn render<W: Write>(out: &mut W, name: &str, session: &QuizSession) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Results ---")?;
    writeln!(out, "Name      : {name}")?;
    writeln!(out, "Score     : {} / {}", session.score(), session.total())?;
    writeln!(out, "Percentage: {:.2}%", session.percentage())?;
    let status = if session.passed() { "PASS" } else { "TRY AGAIN" };
    writeln!(out, "Status    : {status}")?;

    let wrong = session.wrong_answers();
    if wrong.is_empty() {
        writeln!(out)?;
        writeln!(out, "Perfect! All answers are correct.")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "--- Review (Wrong Answers Sorted) ---")?;
    for question in wrong {
        writeln!(out, "{}", question.prompt)?;
        writeln!(out, "  Correct: {}", question.correct_option())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::models::Question;

    use super::*;

    fn deck() -> Vec<Question> {
        vec![
            Question::new(
                "A",
                "Second prompt",
                vec!["right".to_string(), "wrong".to_string()],
                0,
            ),
            Question::new(
                "B",
                "first prompt",
                vec!["wrong".to_string(), "right".to_string()],
                1,
            ),
        ]
    }

    fn rendered(answers: &[usize]) -> String {
        let mut session = QuizSession::new(deck());
        for &answer in answers {
            session.record_answer(answer);
        }
        let mut out = Vec::new();
        render(&mut out, "Alice", &session).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn perfect_session_prints_congratulations() {
        let text = rendered(&[1, 2]);
        assert!(text.contains("Name      : Alice"));
        assert!(text.contains("Score     : 2 / 2"));
        assert!(text.contains("Percentage: 100.00%"));
        assert!(text.contains("Status    : PASS"));
        assert!(text.contains("Perfect! All answers are correct."));
        assert!(!text.contains("Review"));
    }

    #[test]
    fn failed_session_prints_sorted_review() {
        let text = rendered(&[2, 1]);
        assert!(text.contains("Score     : 0 / 2"));
        assert!(text.contains("Percentage: 0.00%"));
        assert!(text.contains("Status    : TRY AGAIN"));

        // Review sorts case-insensitively, so "first" precedes "Second".
        let first = text.find("first prompt").unwrap();
        let second = text.find("Second prompt").unwrap();
        assert!(first < second);
        assert!(text.contains("  Correct: right"));
    }
}
