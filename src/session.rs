//! One quiz run: a shuffled deck, the answers given so far, and scoring.

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::models::Question;

/// Minimum percentage that counts as a pass.
pub const PASS_THRESHOLD: f64 = 60.0;

/// A single quiz session. Owns the deck for its whole lifetime, so answers
/// recorded by position always refer to the questions that were shown.
pub struct QuizSession {
    questions: Vec<Question>,
    answers: Vec<usize>,
}

impl QuizSession {
    /// Start a session over the questions in the given order.
    pub fn new(questions: Vec<Question>) -> Self {
        let total = questions.len();
        Self {
            questions,
            answers: Vec::with_capacity(total),
        }
    }

    /// Start a session over a uniformly shuffled copy of the questions.
    pub fn shuffled(mut questions: Vec<Question>) -> Self {
        questions.shuffle(&mut thread_rng());
        log::debug!("shuffled deck of {} questions", questions.len());
        Self::new(questions)
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, index: usize) -> &Question {
        &self.questions[index]
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Record the 1-based answer for the next unanswered question and
    /// report whether it was correct.
    pub fn record_answer(&mut self, answer: usize) -> bool {
        let index = self.answers.len();
        debug_assert!(index < self.questions.len());
        let correct = self.questions[index].is_correct(answer);
        self.answers.push(answer);
        correct
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.answers
            .iter()
            .zip(self.questions.iter())
            .filter(|(answer, question)| question.is_correct(**answer))
            .count()
    }

    pub fn percentage(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.score() * 100) as f64 / self.total() as f64
    }

    pub fn passed(&self) -> bool {
        self.percentage() >= PASS_THRESHOLD
    }

    /// The questions answered incorrectly, sorted case-insensitively by
    /// prompt text for the review listing.
    pub fn wrong_answers(&self) -> Vec<&Question> {
        let mut wrong: Vec<&Question> = self
            .answers
            .iter()
            .zip(self.questions.iter())
            .filter(|(answer, question)| !question.is_correct(**answer))
            .map(|(_, question)| question)
            .collect();
        wrong.sort_by_key(|question| question.prompt.to_lowercase());
        wrong
    }
}

#[cfg(test)]
mod tests {
    use crate::data::builtin_questions;

    use super::*;

    fn two_option_question(topic: &str, prompt: &str, correct_index: usize) -> Question {
        Question::new(
            topic,
            prompt,
            vec!["first".to_string(), "second".to_string()],
            correct_index,
        )
    }

    fn deck() -> Vec<Question> {
        vec![
            two_option_question("A", "banana question", 0),
            two_option_question("B", "Apple question", 1),
            two_option_question("C", "cherry question", 0),
        ]
    }

    #[test]
    fn all_correct_answers_score_full_marks() {
        let mut session = QuizSession::new(deck());
        for index in 0..session.total() {
            let answer = session.question(index).correct_index + 1;
            assert!(session.record_answer(answer));
        }

        assert!(session.is_complete());
        assert_eq!(session.score(), session.total());
        assert_eq!(session.percentage(), 100.0);
        assert!(session.passed());
        assert!(session.wrong_answers().is_empty());
    }

    #[test]
    fn all_wrong_answers_score_zero_and_fail() {
        let mut session = QuizSession::new(deck());
        for index in 0..session.total() {
            // First option that is not the correct one.
            let answer = if session.question(index).correct_index == 0 { 2 } else { 1 };
            assert!(!session.record_answer(answer));
        }

        assert_eq!(session.score(), 0);
        assert_eq!(session.percentage(), 0.0);
        assert!(!session.passed());
        assert_eq!(session.wrong_answers().len(), session.total());
    }

    #[test]
    fn wrong_answers_contains_exactly_the_missed_questions() {
        let mut session = QuizSession::new(deck());
        session.record_answer(1); // banana: correct
        session.record_answer(1); // Apple: wrong
        session.record_answer(2); // cherry: wrong

        let wrong = session.wrong_answers();
        let prompts: Vec<&str> = wrong.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["Apple question", "cherry question"]);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn wrong_answers_sort_is_case_insensitive() {
        let mut session = QuizSession::new(deck());
        for _ in 0..3 {
            let index = session.answers.len();
            let answer = if session.question(index).correct_index == 0 { 2 } else { 1 };
            session.record_answer(answer);
        }

        let prompts: Vec<String> = session
            .wrong_answers()
            .iter()
            .map(|q| q.prompt.to_lowercase())
            .collect();
        let mut sorted = prompts.clone();
        sorted.sort();
        assert_eq!(prompts, sorted);
    }

    #[test]
    fn two_of_three_passes_the_threshold() {
        let mut session = QuizSession::new(deck());
        session.record_answer(1); // correct
        session.record_answer(2); // correct
        session.record_answer(2); // wrong

        assert_eq!(session.score(), 2);
        assert!((session.percentage() - 200.0 / 3.0).abs() < 1e-9);
        assert!(session.passed());
    }

    #[test]
    fn empty_session_percentage_is_zero() {
        let session = QuizSession::new(Vec::new());
        assert_eq!(session.percentage(), 0.0);
        assert!(!session.passed());
    }

    #[test]
    fn shuffling_preserves_the_multiset_of_questions() {
        for _ in 0..20 {
            let session = QuizSession::shuffled(builtin_questions());
            let mut shuffled: Vec<String> =
                session.questions().iter().map(|q| q.prompt.clone()).collect();
            let mut canonical: Vec<String> =
                builtin_questions().iter().map(|q| q.prompt.clone()).collect();
            shuffled.sort();
            canonical.sort();
            assert_eq!(shuffled, canonical);
        }
    }
}
