//! Free-text question parser.
//!
//! Turns pasted multi-line text into structured questions, one line at
//! a time. The parser is total: malformed or empty input yields an
//! empty list, never an error. The empty result is the caller's sole
//! signal that nothing was detected.
//!
//! Two strategies exist for typing a question from its option segment.
//! The shipped default ([`ParseMode::Simple`]) treats any comma-separated
//! segment as a multiple-choice option list and everything else as a
//! free-text question. [`ParseMode::Classifying`] instead hands the
//! candidate options to the precedence rules in [`crate::classify`].
//! The two disagree on inputs with two to four options, so they are
//! kept as explicitly separate modes rather than merged.

use std::str::FromStr;

use crate::classify::{classify, is_descriptive};
use crate::model::{Question, QuestionType};

/// Which typing strategy [`parse_with_mode`] applies to detected options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Comma-separated options become `multiple_choice`; anything else
    /// is a free-text question. The shipped default.
    #[default]
    Simple,
    /// Candidate options go through the type-classifier precedence
    /// rules (satisfaction scales, numeric ranges, binary choices).
    Classifying,
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(ParseMode::Simple),
            "classifying" | "classify" => Ok(ParseMode::Classifying),
            other => Err(format!("unknown parse mode: {other}")),
        }
    }
}

/// Parse raw multi-line text into questions using the default mode.
pub fn parse(input: &str) -> Vec<Question> {
    parse_with_mode(input, ParseMode::Simple)
}

/// Parse raw multi-line text into questions.
///
/// Blank lines are dropped; every other line produces exactly one
/// question with a freshly generated id. No state crosses lines.
pub fn parse_with_mode(input: &str, mode: ParseMode) -> Vec<Question> {
    let questions: Vec<Question> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| parse_line(line, mode))
        .collect();

    tracing::debug!(count = questions.len(), ?mode, "parsed questions from raw text");
    questions
}

fn parse_line(line: &str, mode: ParseMode) -> Question {
    let line = strip_enumeration(line);

    // The first `?` splits question text from options; a `:` is the
    // weaker fallback delimiter. Either way the question text ends in
    // a question mark.
    let (text, segment) = match line.find('?') {
        Some(i) => (format!("{}?", line[..i].trim_end()), line[i + 1..].trim()),
        None => match line.find(':') {
            Some(i) => (format!("{}?", line[..i].trim_end()), line[i + 1..].trim()),
            None => (line.to_string(), ""),
        },
    };

    if !segment.is_empty() {
        // Lettered tokens like "A) Paris, B) Rome" always win: this is
        // the quiz-import form, answered by exactly one choice.
        let lettered = lettered_options(segment);
        if !lettered.is_empty() {
            let mut q = Question::new(QuestionType::MultipleChoice, text);
            q.options = lettered;
            q.required = true;
            q.points = 1;
            return q;
        }

        match mode {
            ParseMode::Simple => {
                if segment.contains(',') {
                    let mut q = Question::new(QuestionType::MultipleChoice, text);
                    q.options = split_options(segment);
                    q.required = true;
                    return q;
                }
                // A comma-less trailer is not an option list.
            }
            ParseMode::Classifying => {
                return classify(&text, split_options(segment));
            }
        }
    }

    if mode == ParseMode::Classifying {
        return classify(&text, Vec::new());
    }

    let kind = if is_descriptive(&text) {
        QuestionType::Paragraph
    } else {
        QuestionType::ShortAnswer
    };
    let mut q = Question::new(kind, text);
    q.required = true;
    q
}

/// Strip a leading enumeration marker such as `"1. "` or `"12) "`.
fn strip_enumeration(line: &str) -> &str {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return line;
    }
    match line.as_bytes().get(digits) {
        Some(b'.') | Some(b')') => line[digits + 1..].trim_start(),
        _ => line,
    }
}

/// Extract lettered option tokens (`A)` through `D)`), each running to
/// the next comma or end of line.
fn lettered_options(segment: &str) -> Vec<String> {
    let bytes = segment.as_bytes();
    let mut options = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if (b'A'..=b'D').contains(&bytes[i]) && bytes.get(i + 1) == Some(&b')') {
            let rest = &segment[i + 2..];
            let end = rest.find(',').unwrap_or(rest.len());
            let option = rest[..end].trim();
            if !option.is_empty() {
                options.push(option.to_string());
            }
            i += 2 + end;
        } else {
            i += 1;
        }
    }
    options
}

/// Split an options segment on commas, or on runs of two-or-more
/// spaces when no comma is present. Tokens are trimmed, lose a single
/// trailing period, and empties are dropped.
fn split_options(segment: &str) -> Vec<String> {
    let raw: Vec<&str> = if segment.contains(',') {
        segment.split(',').collect()
    } else {
        split_on_double_spaces(segment)
    };

    raw.into_iter()
        .map(|token| {
            let token = token.trim();
            token.strip_suffix('.').unwrap_or(token).trim_end()
        })
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_on_double_spaces(segment: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = segment;
    while let Some(pos) = rest.find("  ") {
        parts.push(&rest[..pos]);
        rest = rest[pos..].trim_start();
    }
    parts.push(rest);
    parts
}
