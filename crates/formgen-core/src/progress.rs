//! Completion progress for a response in flight.

use std::collections::HashMap;

use crate::model::{Answer, Question};

/// Percentage of required questions answered so far, in `0..=100`.
///
/// Only required questions count; with none required the form is
/// vacuously complete. The result is rounded half-up.
pub fn completion(answers: &HashMap<String, Answer>, questions: &[Question]) -> u8 {
    let required: Vec<&Question> = questions.iter().filter(|q| q.required).collect();
    if required.is_empty() {
        return 100;
    }

    let answered = required
        .iter()
        .filter(|q| answers.get(&q.id).is_some_and(is_answered))
        .count();

    (answered as f64 / required.len() as f64 * 100.0).round() as u8
}

/// Whether a value counts as an answer. Blank strings and empty
/// selections do not; any number does, including zero. Booleans carry
/// no answer semantics for any question type.
pub(crate) fn is_answered(answer: &Answer) -> bool {
    match answer {
        Answer::Text(s) => !s.trim().is_empty(),
        Answer::Many(values) => !values.is_empty(),
        Answer::Number(_) => true,
        Answer::Bool(_) => false,
    }
}
