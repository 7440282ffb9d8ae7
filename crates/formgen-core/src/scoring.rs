//! Quiz response grading.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::model::{Answer, CorrectAnswer, FormResponse, Question};

/// The outcome of grading one response against a question list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Points earned across all correctly answered questions.
    pub score: u32,
    /// Sum of points over all questions. A question with points but no
    /// configured correct answer still contributes here while never
    /// contributing to `score`; that inflation is a long-standing
    /// behavior the rest of the system expects.
    pub max_score: u32,
    /// Per-question verdicts keyed by question id. `None` means the
    /// question has no correct answer configured and was not graded.
    pub per_question: HashMap<String, Option<bool>>,
}

/// Grade a response. Total: questions without a correct answer are
/// skipped, malformed answer shapes grade as incorrect.
pub fn score_response(response: &FormResponse, questions: &[Question]) -> ScoreBreakdown {
    let mut score = 0;
    let mut max_score = 0;
    let mut per_question = HashMap::new();

    for question in questions {
        max_score += question.points;

        let verdict = grade(question, response.answers.get(&question.id));
        if verdict == Some(true) {
            score += question.points;
        }
        per_question.insert(question.id.clone(), verdict);
    }

    ScoreBreakdown {
        score,
        max_score,
        per_question,
    }
}

/// Compare one submitted answer against the question's configured
/// correct answer. `None` when the question is ungradable.
pub fn grade(question: &Question, answer: Option<&Answer>) -> Option<bool> {
    let correct = question.correct_answer.as_ref()?;

    let verdict = match (correct, answer) {
        // Checkboxes compare as sets; order is irrelevant.
        (CorrectAnswer::Many(expected), Some(Answer::Many(submitted))) => {
            let expected: HashSet<&str> = expected.iter().map(String::as_str).collect();
            let submitted: HashSet<&str> = submitted.iter().map(String::as_str).collect();
            expected == submitted
        }
        // Single-valued types use exact, case-sensitive equality.
        (CorrectAnswer::One(expected), Some(Answer::Text(submitted))) => expected == submitted,
        // Unanswered or wrong-shaped values are simply incorrect.
        _ => false,
    };

    Some(verdict)
}
