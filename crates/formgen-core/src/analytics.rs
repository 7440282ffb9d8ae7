//! Response aggregation for the analytics view.

use serde::{Deserialize, Serialize};

use crate::model::{Answer, Form, Question};

/// Aggregated statistics across all stored responses of a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSummary {
    /// Number of submitted responses.
    pub total_responses: usize,
    /// Per-option tallies for every choice-type question, in question
    /// order.
    pub questions: Vec<QuestionSummary>,
    /// Quiz statistics, present only on quiz forms.
    pub quiz: Option<QuizSummary>,
}

/// Option tallies for one choice-type question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSummary {
    pub question_id: String,
    pub text: String,
    /// One entry per configured option, in option order.
    pub options: Vec<OptionCount>,
}

/// How often one option was selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionCount {
    pub option: String,
    pub count: usize,
    /// Share of total responses, rounded half-up; 0 with no responses.
    pub percentage: u8,
}

/// Score statistics for a quiz form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummary {
    /// Mean stored score across responses, rounded half-up.
    pub average_score: u32,
    /// Maximum attainable score (sum of question points).
    pub max_score: u32,
    /// The rounded average score as a percentage of `max_score`; 0
    /// when the quiz has no points configured.
    pub average_percentage: u8,
}

/// Tabulate per-option counts and quiz statistics for a form.
///
/// Total over its input: zero responses yield zero counts and zero
/// percentages, never a division fault.
pub fn summarize(form: &Form) -> FormSummary {
    let total = form.responses.len();

    let questions = form
        .questions
        .iter()
        .filter(|q| q.kind.has_options())
        .map(|q| summarize_question(form, q, total))
        .collect();

    let quiz = form.settings.is_quiz.then(|| {
        let max_score: u32 = form.questions.iter().map(|q| q.points).sum();
        let total_scores: u32 = form
            .responses
            .iter()
            .map(|r| r.score.unwrap_or(0))
            .sum();

        let mean = if total == 0 {
            0.0
        } else {
            f64::from(total_scores) / total as f64
        };
        // The percentage reflects the rounded average, not the raw mean.
        let average_score = mean.round() as u32;
        let average_percentage = if max_score == 0 {
            0
        } else {
            (f64::from(average_score) / f64::from(max_score) * 100.0).round() as u8
        };

        QuizSummary {
            average_score,
            max_score,
            average_percentage,
        }
    });

    FormSummary {
        total_responses: total,
        questions,
        quiz,
    }
}

fn summarize_question(form: &Form, question: &Question, total: usize) -> QuestionSummary {
    let options = question
        .options
        .iter()
        .map(|option| {
            let count = form
                .responses
                .iter()
                .filter(|r| match r.answers.get(&question.id) {
                    Some(Answer::Text(value)) => value == option,
                    Some(Answer::Many(values)) => values.iter().any(|v| v == option),
                    _ => false,
                })
                .count();

            OptionCount {
                option: option.clone(),
                count,
                percentage: percentage(count, total),
            }
        })
        .collect();

    QuestionSummary {
        question_id: question.id.clone(),
        text: question.text.clone(),
        options,
    }
}

fn percentage(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u8
}
