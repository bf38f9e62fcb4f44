//! Quiz Entities
//!
//! Questions, answers and the persisted quiz document.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Question type determines how answers are picked and graded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    /// Exactly one correct answer (radio buttons)
    #[default]
    SingleChoice,
    /// Any number of correct answers (checkboxes)
    MultipleChoice,
    /// Free text, never graded against stored answers
    ShortAnswer,
}

impl QuestionType {
    /// All types in selector order
    pub const ALL: [QuestionType; 3] = [
        QuestionType::SingleChoice,
        QuestionType::MultipleChoice,
        QuestionType::ShortAnswer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::SingleChoice => "single-choice",
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::ShortAnswer => "short-answer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::SingleChoice => "Single Choice",
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::ShortAnswer => "Short Text",
        }
    }

    /// Unknown values fall back to single-choice
    pub fn parse(s: &str) -> Self {
        match s {
            "multiple-choice" => QuestionType::MultipleChoice,
            "short-answer" => QuestionType::ShortAnswer,
            _ => QuestionType::SingleChoice,
        }
    }
}

/// An answer option, owned by its question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Stable across edits
    pub id: String,
    pub answer_text: String,
    pub is_correct: bool,
}

/// A quiz question with its ordered answer options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question_text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub answers: Vec<Answer>,
}

impl Question {
    /// Ids of every answer flagged correct
    pub fn correct_answer_ids(&self) -> BTreeSet<String> {
        self.answers
            .iter()
            .filter(|a| a.is_correct)
            .map(|a| a.id.clone())
            .collect()
    }

    /// Short-answer questions are shown but never checked
    pub fn is_graded(&self) -> bool {
        self.question_type != QuestionType::ShortAnswer
    }

    pub fn answer(&self, answer_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == answer_id)
    }
}

/// The whole quiz as persisted; question order is quiz order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizData {
    pub questions: Vec<Question>,
}

impl QuizData {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

/// Which panel the app shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    #[default]
    Edit,
    Preview,
}
