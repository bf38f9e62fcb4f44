//! Quiz Mutators
//!
//! Copy-on-write updates over the question list. Every function returns a
//! fresh list and leaves its input untouched. Unknown ids are not errors:
//! the affected question/answer is simply left as it was, so stale UI
//! events are harmless.

use crate::ids::IdGenerator;
use crate::models::{Answer, Question, QuestionType};

/// A question never has fewer answers than this
pub const MIN_ANSWERS: usize = 2;

/// Labels of the answers seeded into a new question
const DEFAULT_OPTIONS: [&str; 4] = ["Option A", "Option B", "Option C", "Option D"];
/// Index of the seeded correct answer ("Option B")
const DEFAULT_CORRECT: usize = 1;

pub fn create_default_answer(ids: &impl IdGenerator, text: &str, is_correct: bool) -> Answer {
    Answer {
        id: ids.next_id(),
        answer_text: text.to_string(),
        is_correct,
    }
}

/// New single-choice question with four options, "Option B" correct
pub fn create_default_question(ids: &impl IdGenerator) -> Question {
    let id = ids.next_id();
    let answers = DEFAULT_OPTIONS
        .iter()
        .enumerate()
        .map(|(i, label)| create_default_answer(ids, label, i == DEFAULT_CORRECT))
        .collect();

    Question {
        id,
        question_text: String::new(),
        question_type: QuestionType::SingleChoice,
        answers,
    }
}

/// Apply `f` to the question with `question_id`, cloning the rest
fn map_question(
    questions: &[Question],
    question_id: &str,
    f: impl Fn(&Question) -> Question,
) -> Vec<Question> {
    questions
        .iter()
        .map(|q| if q.id == question_id { f(q) } else { q.clone() })
        .collect()
}

/// Append a default question; returns the new list and the new question's id
pub fn add_question(questions: &[Question], ids: &impl IdGenerator) -> (Vec<Question>, String) {
    let question = create_default_question(ids);
    let id = question.id.clone();
    let mut updated = questions.to_vec();
    updated.push(question);
    (updated, id)
}

/// Drop a question with all its answers
pub fn remove_question(questions: &[Question], question_id: &str) -> Vec<Question> {
    questions
        .iter()
        .filter(|q| q.id != question_id)
        .cloned()
        .collect()
}

pub fn update_question_text(questions: &[Question], question_id: &str, text: &str) -> Vec<Question> {
    map_question(questions, question_id, |q| Question {
        question_text: text.to_string(),
        ..q.clone()
    })
}

/// Change the type and clear every correctness flag
pub fn update_question_type(
    questions: &[Question],
    question_id: &str,
    new_type: QuestionType,
) -> Vec<Question> {
    map_question(questions, question_id, |q| Question {
        question_type: new_type,
        answers: q
            .answers
            .iter()
            .map(|a| Answer { is_correct: false, ..a.clone() })
            .collect(),
        ..q.clone()
    })
}

/// Mark an answer (in)correct.
///
/// Single-choice questions keep exactly the chosen answer correct, whatever
/// `checked` says; other types flip only the matching answer.
pub fn update_answer_correctness(
    questions: &[Question],
    question_id: &str,
    answer_id: &str,
    checked: bool,
) -> Vec<Question> {
    map_question(questions, question_id, |q| {
        let single = q.question_type == QuestionType::SingleChoice;
        // An unknown answer id must not wipe the current single-choice pick
        if single && q.answer(answer_id).is_none() {
            return q.clone();
        }
        let answers = q
            .answers
            .iter()
            .map(|a| {
                if single {
                    Answer { is_correct: a.id == answer_id, ..a.clone() }
                } else if a.id == answer_id {
                    Answer { is_correct: checked, ..a.clone() }
                } else {
                    a.clone()
                }
            })
            .collect();
        Question { answers, ..q.clone() }
    })
}

pub fn update_answer_text(
    questions: &[Question],
    question_id: &str,
    answer_id: &str,
    text: &str,
) -> Vec<Question> {
    map_question(questions, question_id, |q| Question {
        answers: q
            .answers
            .iter()
            .map(|a| {
                if a.id == answer_id {
                    Answer { answer_text: text.to_string(), ..a.clone() }
                } else {
                    a.clone()
                }
            })
            .collect(),
        ..q.clone()
    })
}

/// Append an empty, incorrect answer
pub fn add_answer_to_question(
    questions: &[Question],
    question_id: &str,
    ids: &impl IdGenerator,
) -> Vec<Question> {
    map_question(questions, question_id, |q| {
        let mut answers = q.answers.clone();
        answers.push(create_default_answer(ids, "", false));
        Question { answers, ..q.clone() }
    })
}

/// Whether removing one more answer keeps the floor of [`MIN_ANSWERS`]
pub fn can_remove_answer(question: &Question) -> bool {
    question.answers.len() > MIN_ANSWERS
}

/// Remove an answer unless the question is already at [`MIN_ANSWERS`]
pub fn remove_answer_from_question(
    questions: &[Question],
    question_id: &str,
    answer_id: &str,
) -> Vec<Question> {
    map_question(questions, question_id, |q| {
        if !can_remove_answer(q) {
            return q.clone();
        }
        Question {
            answers: q.answers.iter().filter(|a| a.id != answer_id).cloned().collect(),
            ..q.clone()
        }
    })
}
