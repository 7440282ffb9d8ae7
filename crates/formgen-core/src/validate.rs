//! Form and submission validation.
//!
//! The pure computation core is total and never rejects its input;
//! everything that can be "wrong" about a form or an answer is caught
//! here, at the boundary, before it reaches the core.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::model::{Answer, EmailCollection, Form, Question, QuestionType};
use crate::progress::is_answered;

/// A warning from form validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question id, when the warning concerns one question.
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a form definition for common issues.
pub fn validate_form(form: &Form) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate question ids
    let mut seen_ids = HashSet::new();
    for question in &form.questions {
        if !seen_ids.insert(&question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("duplicate question id: {}", question.id),
            });
        }
    }

    for question in &form.questions {
        if question.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "question text is empty".into(),
            });
        }

        if question.kind.has_options() && question.options.is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("{} question has no options", question.kind),
            });
        }

        if let Some(correct) = &question.correct_answer {
            let missing: Vec<&String> = correct
                .values()
                .iter()
                .filter(|v| !question.options.contains(*v))
                .collect();
            if !missing.is_empty() {
                warnings.push(ValidationWarning {
                    question_id: Some(question.id.clone()),
                    message: format!(
                        "correct answer references options that do not exist: {missing:?}"
                    ),
                });
            }
        }

        if form.settings.is_quiz && question.points > 0 && question.correct_answer.is_none() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!(
                    "question carries {} point(s) but no correct answer; it raises the \
                     maximum score without ever being gradable",
                    question.points
                ),
            });
        }
    }

    if !form.settings.is_quiz
        && form
            .questions
            .iter()
            .any(|q| q.points > 0 || q.correct_answer.is_some())
    {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "points or correct answers are configured but the form is not a quiz".into(),
        });
    }

    warnings
}

/// An answer value that cannot belong to its question.
#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("expected a {expected} value for a {kind} question")]
    WrongShape {
        kind: QuestionType,
        expected: &'static str,
    },

    #[error("{value:?} is not one of the configured options")]
    UnknownOption { value: String },

    #[error("file type not allowed: {file_name}")]
    ExtensionNotAllowed { file_name: String },

    #[error("file is {size_bytes} bytes, limit is {limit_bytes}")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },
}

/// Check that an answer value has the right shape for its question and
/// only references configured options.
pub fn check_answer(question: &Question, answer: &Answer) -> Result<(), AnswerError> {
    match question.kind {
        QuestionType::ShortAnswer
        | QuestionType::Paragraph
        | QuestionType::Date
        | QuestionType::Time
        | QuestionType::FileUpload => match answer {
            Answer::Text(_) => Ok(()),
            _ => Err(AnswerError::WrongShape {
                kind: question.kind,
                expected: "text",
            }),
        },
        QuestionType::MultipleChoice | QuestionType::Dropdown => match answer {
            Answer::Text(value) => {
                if question.options.contains(value) {
                    Ok(())
                } else {
                    Err(AnswerError::UnknownOption {
                        value: value.clone(),
                    })
                }
            }
            _ => Err(AnswerError::WrongShape {
                kind: question.kind,
                expected: "text",
            }),
        },
        QuestionType::Checkboxes => match answer {
            Answer::Many(values) => {
                for value in values {
                    if !question.options.contains(value) {
                        return Err(AnswerError::UnknownOption {
                            value: value.clone(),
                        });
                    }
                }
                Ok(())
            }
            _ => Err(AnswerError::WrongShape {
                kind: question.kind,
                expected: "list",
            }),
        },
    }
}

/// Check an upload against a file-upload question's constraints.
pub fn check_upload(question: &Question, file_name: &str, size_bytes: u64) -> Result<(), AnswerError> {
    if !question.allowed_extensions.is_empty() {
        let lower = file_name.to_lowercase();
        let allowed = question
            .allowed_extensions
            .iter()
            .any(|ext| lower.ends_with(&ext.to_lowercase()));
        if !allowed {
            return Err(AnswerError::ExtensionNotAllowed {
                file_name: file_name.to_string(),
            });
        }
    }

    if let Some(limit) = question.max_file_size_bytes {
        if size_bytes > limit {
            return Err(AnswerError::FileTooLarge {
                size_bytes,
                limit_bytes: limit,
            });
        }
    }

    Ok(())
}

/// A submission that cannot be accepted as-is.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("required question unanswered: {question_id}")]
    MissingRequired { question_id: String },

    #[error("a valid email address is required")]
    EmailRequired,

    #[error("a response with this email was already submitted")]
    DuplicateEmail,
}

/// Check a completed answer set against a form's submission rules:
/// email collection policy, repeat-submission limits, and required
/// questions.
pub fn validate_submission(
    form: &Form,
    answers: &HashMap<String, Answer>,
    email: Option<&str>,
) -> Result<(), SubmissionError> {
    if form.settings.email_collection != EmailCollection::DoNotCollect {
        let email = email.ok_or(SubmissionError::EmailRequired)?;
        if !email.contains('@') {
            return Err(SubmissionError::EmailRequired);
        }

        let must_be_unique = form.settings.email_collection == EmailCollection::Verified
            || form.settings.limit_one_response;
        if must_be_unique
            && form
                .responses
                .iter()
                .any(|r| r.email.as_deref() == Some(email))
        {
            return Err(SubmissionError::DuplicateEmail);
        }
    }

    for question in form.questions.iter().filter(|q| q.required) {
        let answered = answers.get(&question.id).is_some_and(is_answered);
        if !answered {
            return Err(SubmissionError::MissingRequired {
                question_id: question.id.clone(),
            });
        }
    }

    Ok(())
}
