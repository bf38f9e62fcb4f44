//! Quiz Validation
//!
//! Derives per-question and whole-quiz validity from the current data.
//! Pure and deterministic; nothing here is persisted.

use crate::models::{Question, QuizData};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerValidation {
    pub answer_id: String,
    pub answer_text_empty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionValidation {
    pub question_id: String,
    pub question_text_empty: bool,
    /// Always true for short-answer questions
    pub has_correct_answer: bool,
    /// Empty for short-answer questions
    pub answers: Vec<AnswerValidation>,
    pub is_valid: bool,
}

impl QuestionValidation {
    fn of(question: &Question) -> Self {
        let question_text_empty = question.question_text.trim().is_empty();

        if !question.is_graded() {
            return Self {
                question_id: question.id.clone(),
                question_text_empty,
                has_correct_answer: true,
                answers: Vec::new(),
                is_valid: !question_text_empty,
            };
        }

        let answers: Vec<AnswerValidation> = question
            .answers
            .iter()
            .map(|a| AnswerValidation {
                answer_id: a.id.clone(),
                answer_text_empty: a.answer_text.trim().is_empty(),
            })
            .collect();
        let has_correct_answer = question.answers.iter().any(|a| a.is_correct);
        let is_valid =
            !question_text_empty && has_correct_answer && answers.iter().all(|a| !a.answer_text_empty);

        Self {
            question_id: question.id.clone(),
            question_text_empty,
            has_correct_answer,
            answers,
            is_valid,
        }
    }

    /// Unknown or unevaluated answers count as not empty
    pub fn answer_text_empty(&self, answer_id: &str) -> bool {
        self.answers
            .iter()
            .any(|a| a.answer_id == answer_id && a.answer_text_empty)
    }
}

/// Validity of the whole quiz
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizValidation {
    pub questions: Vec<QuestionValidation>,
    pub quiz_valid: bool,
}

impl QuizValidation {
    pub fn question(&self, question_id: &str) -> Option<&QuestionValidation> {
        self.questions.iter().find(|q| q.question_id == question_id)
    }

    /// Preview mode is only reachable for a valid quiz
    pub fn can_preview(&self) -> bool {
        self.quiz_valid
    }
}

/// Validate every question; an empty quiz is never valid
pub fn validate(quiz: &QuizData) -> QuizValidation {
    let questions: Vec<QuestionValidation> = quiz.questions.iter().map(QuestionValidation::of).collect();
    let quiz_valid = !questions.is_empty() && questions.iter().all(|q| q.is_valid);
    QuizValidation { questions, quiz_valid }
}
