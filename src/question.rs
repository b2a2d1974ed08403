//! Arithmetic questions
//!
//! A question is shown with four options in display order. The generator, not
//! the simulation, decides that order.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::QuestionError;

/// Options offered per question
pub const OPTION_COUNT: usize = 4;

/// An immutable multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: [u32; OPTION_COUNT],
    answer: u32,
}

impl Question {
    /// Build a question, checking the options are unique and include the answer
    pub fn new(
        text: impl Into<String>,
        options: [u32; OPTION_COUNT],
        answer: u32,
    ) -> Result<Self, QuestionError> {
        for (i, value) in options.iter().enumerate() {
            if options[i + 1..].contains(value) {
                return Err(QuestionError::DuplicateOption { value: *value });
            }
        }
        if !options.contains(&answer) {
            return Err(QuestionError::AnswerNotOffered { answer });
        }
        Ok(Self {
            text: text.into(),
            options,
            answer,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[u32; OPTION_COUNT] {
        &self.options
    }

    pub fn answer(&self) -> u32 {
        self.answer
    }

    pub fn is_correct(&self, choice: u32) -> bool {
        choice == self.answer
    }
}

/// Anything that can hand out the next question
pub trait QuestionSource {
    fn generate(&mut self) -> Question;
}

/// Single-digit addition: `a + b = ?` with distractors near the sum
#[derive(Debug, Clone)]
pub struct AdditionQuestions {
    rng: Pcg32,
}

impl AdditionQuestions {
    /// Largest operand
    pub const MAX_OPERAND: u32 = 9;
    /// Largest distance between a distractor and the answer
    pub const MAX_OFFSET: u32 = 5;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl QuestionSource for AdditionQuestions {
    fn generate(&mut self) -> Question {
        let a = self.rng.random_range(0..=Self::MAX_OPERAND);
        let b = self.rng.random_range(0..=Self::MAX_OPERAND);
        let answer = a + b;

        let mut options = vec![answer];
        while options.len() < OPTION_COUNT {
            let offset = self.rng.random_range(1..=Self::MAX_OFFSET);
            // Subtraction clamps at zero; duplicates are simply redrawn
            let wrong = if self.rng.random_bool(0.5) {
                answer + offset
            } else {
                answer.saturating_sub(offset)
            };
            if !options.contains(&wrong) {
                options.push(wrong);
            }
        }
        options.shuffle(&mut self.rng);

        Question {
            text: format!("{a} + {b} = ?"),
            options: [options[0], options[1], options[2], options[3]],
            answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_question_is_well_formed() {
        let mut source = AdditionQuestions::new(42);
        for _ in 0..500 {
            let q = source.generate();
            let rebuilt = Question::new(q.text(), *q.options(), q.answer());
            assert_eq!(rebuilt.as_ref(), Ok(&q));
            assert_eq!(q.options().iter().filter(|&&o| q.is_correct(o)).count(), 1);
        }
    }

    #[test]
    fn test_text_matches_answer() {
        let mut source = AdditionQuestions::new(3);
        let q = source.generate();
        let sum: u32 = q
            .text()
            .trim_end_matches(" = ?")
            .split(" + ")
            .map(|n| n.parse::<u32>().expect("operand"))
            .sum();
        assert_eq!(sum, q.answer());
    }

    #[test]
    fn test_same_seed_same_questions() {
        let mut a = AdditionQuestions::new(11);
        let mut b = AdditionQuestions::new(11);
        for _ in 0..20 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_new_rejects_duplicates() {
        assert_eq!(
            Question::new("1 + 1 = ?", [2, 3, 3, 4], 2),
            Err(QuestionError::DuplicateOption { value: 3 })
        );
    }

    #[test]
    fn test_new_rejects_missing_answer() {
        assert_eq!(
            Question::new("1 + 1 = ?", [1, 3, 4, 5], 2),
            Err(QuestionError::AnswerNotOffered { answer: 2 })
        );
    }
}
