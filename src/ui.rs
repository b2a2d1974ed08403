//! Answer panel
//!
//! Shows the current question and accepts exactly one selection per question.
//! The resulting [`Verdict`] is what the session turns into `fire()` or `skip()`.

use crate::question::Question;

/// Outcome of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { expected: u32 },
}

#[derive(Debug, Clone, Default)]
pub struct AnswerPanel {
    question: Option<Question>,
    is_answered: bool,
    feedback: Option<String>,
}

impl AnswerPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current question and re-enable the options
    pub fn present(&mut self, question: Question) {
        self.question = Some(question);
        self.is_answered = false;
        self.feedback = None;
    }

    /// Select an option. `None` if there is no question or it was already answered.
    pub fn select(&mut self, choice: u32) -> Option<Verdict> {
        let question = self.question.as_ref()?;
        if self.is_answered {
            return None;
        }
        self.is_answered = true;

        let verdict = if question.is_correct(choice) {
            self.feedback = Some("Correct! Firing!".to_string());
            Verdict::Correct
        } else {
            let expected = question.answer();
            self.feedback = Some(format!("Incorrect. The answer was {expected}."));
            Verdict::Incorrect { expected }
        };
        Some(verdict)
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// True once the current question has been answered; options are disabled
    pub fn is_answered(&self) -> bool {
        self.is_answered
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new("2 + 3 = ?", [4, 5, 7, 1], 5).unwrap()
    }

    #[test]
    fn test_no_question_no_verdict() {
        let mut panel = AnswerPanel::new();
        assert_eq!(panel.select(5), None);
        assert!(!panel.is_answered());
    }

    #[test]
    fn test_correct_selection() {
        let mut panel = AnswerPanel::new();
        panel.present(question());
        assert_eq!(panel.select(5), Some(Verdict::Correct));
        assert!(panel.is_answered());
        assert_eq!(panel.feedback(), Some("Correct! Firing!"));
    }

    #[test]
    fn test_incorrect_selection_reports_answer() {
        let mut panel = AnswerPanel::new();
        panel.present(question());
        assert_eq!(panel.select(7), Some(Verdict::Incorrect { expected: 5 }));
        assert_eq!(panel.feedback(), Some("Incorrect. The answer was 5."));
    }

    #[test]
    fn test_second_selection_rejected() {
        let mut panel = AnswerPanel::new();
        panel.present(question());
        panel.select(7);
        assert_eq!(panel.select(5), None);
        assert_eq!(panel.feedback(), Some("Incorrect. The answer was 5."));
    }

    #[test]
    fn test_new_question_resets_panel() {
        let mut panel = AnswerPanel::new();
        panel.present(question());
        panel.select(5);
        panel.present(Question::new("1 + 1 = ?", [2, 0, 3, 6], 2).unwrap());
        assert!(!panel.is_answered());
        assert_eq!(panel.feedback(), None);
        assert_eq!(panel.select(2), Some(Verdict::Correct));
    }
}
