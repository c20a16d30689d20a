//! Quiz engine
//!
//! A sheet of multiple-choice questions and the student's selections.
//! Scoring is only defined once every question has an answer; partial
//! sheets are unscorable rather than scored-as-wrong.

use serde::{Deserialize, Serialize};

/// One multiple-choice question
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index of the correct option
    pub answer: usize,
}

impl QuizQuestion {
    pub fn new(prompt: impl Into<String>, options: Vec<String>, answer: usize) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            answer,
        }
    }
}

/// Rejected quiz operations
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizError {
    QuestionOutOfRange { question: usize, count: usize },
    OptionOutOfRange { question: usize, option: usize, count: usize },
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::QuestionOutOfRange { question, count } => {
                write!(f, "question {question} out of range (sheet has {count})")
            }
            QuizError::OptionOutOfRange { question, option, count } => {
                write!(
                    f,
                    "option {option} out of range for question {question} ({count} options)"
                )
            }
        }
    }
}

impl std::error::Error for QuizError {}

/// A fixed question list plus one nullable selection per question
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizSheet {
    questions: Vec<QuizQuestion>,
    selected: Vec<Option<usize>>,
}

impl QuizSheet {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let selected = vec![None; questions.len()];
        Self { questions, selected }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// The recorded selection for a question, if any
    pub fn selected(&self, question: usize) -> Option<usize> {
        self.selected.get(question).copied().flatten()
    }

    /// Record an answer; out-of-range selections are rejected
    pub fn select(&mut self, question: usize, option: usize) -> Result<(), QuizError> {
        let count = self.questions.len();
        if question >= count {
            return Err(QuizError::QuestionOutOfRange { question, count });
        }
        let options = self.questions[question].options.len();
        if option >= options {
            return Err(QuizError::OptionOutOfRange {
                question,
                option,
                count: options,
            });
        }
        self.selected[question] = Some(option);
        Ok(())
    }

    /// True once every question has a recorded answer
    pub fn is_complete(&self) -> bool {
        self.selected.iter().all(Option::is_some)
    }

    /// Count of correct selections; `None` until the sheet is complete
    pub fn score(&self) -> Option<usize> {
        if !self.is_complete() {
            return None;
        }
        let correct = self
            .questions
            .iter()
            .zip(&self.selected)
            .filter(|(question, selected)| **selected == Some(question.answer))
            .count();
        Some(correct)
    }

    /// Clear every selection; the questions stay
    pub fn reset(&mut self) {
        for slot in &mut self.selected {
            *slot = None;
        }
    }
}
