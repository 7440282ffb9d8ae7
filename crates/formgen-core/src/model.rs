//! Core data model types for formgen.
//!
//! These are the fundamental types the entire formgen system uses to
//! represent forms, questions, and respondent submissions. Everything
//! here is plain data: serde round-trips losslessly and no type holds
//! references into shared state.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The semantic type of a question, which determines the input widget
/// and how answers are validated and aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    ShortAnswer,
    Paragraph,
    MultipleChoice,
    Checkboxes,
    Dropdown,
    FileUpload,
    Date,
    Time,
}

impl QuestionType {
    /// Whether this type carries an option list.
    pub fn has_options(self) -> bool {
        matches!(
            self,
            QuestionType::MultipleChoice | QuestionType::Checkboxes | QuestionType::Dropdown
        )
    }

    /// Whether answers to this type are sets of selections rather than
    /// a single value.
    pub fn is_multi_select(self) -> bool {
        matches!(self, QuestionType::Checkboxes)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionType::ShortAnswer => "short_answer",
            QuestionType::Paragraph => "paragraph",
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::Checkboxes => "checkboxes",
            QuestionType::Dropdown => "dropdown",
            QuestionType::FileUpload => "file_upload",
            QuestionType::Date => "date",
            QuestionType::Time => "time",
        };
        f.write_str(s)
    }
}

/// The configured correct answer for a quiz question.
///
/// Single-valued question types store one option string; checkboxes
/// store the full set of options that must be selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    One(String),
    Many(Vec<String>),
}

impl CorrectAnswer {
    /// All option strings referenced by this correct answer.
    pub fn values(&self) -> &[String] {
        match self {
            CorrectAnswer::One(v) => std::slice::from_ref(v),
            CorrectAnswer::Many(vs) => vs,
        }
    }
}

/// One structured item on a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Opaque unique identifier, generated at creation and never reused.
    pub id: String,
    /// Semantic type of the question.
    #[serde(rename = "type")]
    pub kind: QuestionType,
    /// Display text shown to the respondent.
    pub text: String,
    /// Ordered option list; empty for non-choice types.
    #[serde(default)]
    pub options: Vec<String>,
    /// Whether an answer is mandatory before submission.
    #[serde(default)]
    pub required: bool,
    /// Correct answer for quiz grading, if configured.
    #[serde(default)]
    pub correct_answer: Option<CorrectAnswer>,
    /// Weight of this question when scoring a quiz.
    #[serde(default)]
    pub points: u32,
    /// Feedback shown to the respondent on an incorrect answer.
    #[serde(default)]
    pub feedback: Option<String>,
    /// Allowed file suffixes for `file_upload` questions.
    #[serde(default)]
    pub allowed_extensions: Vec<String>,
    /// Upload size limit in bytes for `file_upload` questions.
    #[serde(default)]
    pub max_file_size_bytes: Option<u64>,
}

impl Question {
    /// Create a question of the given type with a fresh id and defaults.
    pub fn new(kind: QuestionType, text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            kind,
            text: text.into(),
            options: Vec::new(),
            required: false,
            correct_answer: None,
            points: 0,
            feedback: None,
            allowed_extensions: Vec::new(),
            max_file_size_bytes: None,
        }
    }
}

/// A single answer value, shaped by the owning question's type.
///
/// Dates and times are carried as strings, matching the persisted form
/// records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Bool(bool),
    Number(f64),
    Text(String),
    Many(Vec<String>),
}

/// One respondent's complete submission to a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormResponse {
    /// Unique identifier for this response.
    pub id: String,
    /// The form this response belongs to.
    pub form_id: String,
    /// Respondent email, when the form collects one.
    #[serde(default)]
    pub email: Option<String>,
    /// Answer values keyed by question id; a missing key means the
    /// question was left unanswered.
    #[serde(default)]
    pub answers: HashMap<String, Answer>,
    /// Submission timestamp.
    pub submitted_at: DateTime<Utc>,
    /// Quiz score, computed once at submission time and frozen.
    #[serde(default)]
    pub score: Option<u32>,
    /// Maximum attainable quiz score at submission time.
    #[serde(default)]
    pub max_score: Option<u32>,
}

/// How a form collects respondent emails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailCollection {
    DoNotCollect,
    Verified,
    ResponderInput,
}

/// Per-form behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSettings {
    /// Quiz mode: questions may carry points and correct answers.
    #[serde(default)]
    pub is_quiz: bool,
    /// Email collection policy.
    #[serde(default = "default_email_collection")]
    pub email_collection: EmailCollection,
    /// Show a live progress bar while filling the form.
    #[serde(default = "default_true")]
    pub show_progress_bar: bool,
    /// Shuffle question order at render time. Presentation only; the
    /// canonical question order is never affected.
    #[serde(default)]
    pub shuffle_questions: bool,
    /// Allow respondents to edit a submitted response.
    #[serde(default)]
    pub allow_response_editing: bool,
    /// Reject repeat submissions from the same email.
    #[serde(default)]
    pub limit_one_response: bool,
    /// Message shown after submission.
    #[serde(default = "default_confirmation")]
    pub confirmation_message: String,
}

fn default_email_collection() -> EmailCollection {
    EmailCollection::DoNotCollect
}

fn default_true() -> bool {
    true
}

fn default_confirmation() -> String {
    "Your response has been recorded.".to_string()
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            is_quiz: false,
            email_collection: EmailCollection::DoNotCollect,
            show_progress_bar: true,
            shuffle_questions: false,
            allow_response_editing: false,
            limit_one_response: false,
            confirmation_message: default_confirmation(),
        }
    }
}

/// A form: ordered questions, settings, and collected responses.
///
/// The form owns its questions and responses exclusively; question
/// position is insertion order into `questions`, not a separate field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    /// Unique form identifier.
    pub id: String,
    /// Form title.
    pub title: String,
    /// Questions in canonical order.
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Responses in submission order, append-only.
    #[serde(default)]
    pub responses: Vec<FormResponse>,
    /// Behavior settings.
    #[serde(default)]
    pub settings: FormSettings,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last owner-edit timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Form {
    /// Create an empty form with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            title: title.into(),
            questions: Vec::new(),
            responses: Vec::new(),
            settings: FormSettings::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Assemble a response from submitted answers without mutating the
    /// form. On quiz forms the score is computed here, once, and frozen
    /// on the returned response. The caller appends the result to its
    /// own copy of the form.
    pub fn build_response(
        &self,
        answers: HashMap<String, Answer>,
        email: Option<String>,
    ) -> FormResponse {
        let mut response = FormResponse {
            id: new_id(),
            form_id: self.id.clone(),
            email,
            answers,
            submitted_at: Utc::now(),
            score: None,
            max_score: None,
        };

        if self.settings.is_quiz {
            let breakdown = crate::scoring::score_response(&response, &self.questions);
            response.score = Some(breakdown.score);
            response.max_score = Some(breakdown.max_score);
        }

        response
    }
}

/// Generate a fresh opaque identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
