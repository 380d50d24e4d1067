use serde::Deserialize;

/// One quiz item: a short topic label, the prompt text, the ordered answer
/// options, and the 0-based index of the correct option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub topic: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Question {
    pub fn new(
        topic: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Self {
        Self {
            topic: topic.into(),
            prompt: prompt.into(),
            options,
            correct_index,
        }
    }

    /// Check a 1-based answer as entered at the prompt.
    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct_index + 1
    }

    /// Text of the correct option.
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    /// Verify the invariants the rest of the crate relies on: at least two
    /// options, and `correct_index` in bounds.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.options.len() < 2 {
            return Err("question has fewer than two options");
        }
        if self.correct_index >= self.options.len() {
            return Err("correct index is out of range");
        }
        Ok(())
    }
}
