//! Question type inference from a candidate option set.
//!
//! This is the richer typing strategy behind [`crate::parser::ParseMode::Classifying`].
//! Rules apply in precedence order; the first match wins and shadows
//! everything after it.

use crate::model::{Question, QuestionType};

const DESCRIPTIVE_KEYWORDS: [&str; 3] = ["describe", "explain", "elaborate"];
const SCALE_KEYWORDS: [&str; 3] = ["satisfied", "dissatisfied", "rating"];

/// Whether the question text asks for a long-form answer.
pub(crate) fn is_descriptive(text: &str) -> bool {
    let lower = text.to_lowercase();
    DESCRIPTIVE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Infer a typed question from its text and candidate options.
///
/// Deterministic and side-effect free apart from id generation. The
/// produced question is not required and carries no points; those are
/// owner edits, not inference results.
pub fn classify(text: &str, options: Vec<String>) -> Question {
    if options.is_empty() {
        let kind = if is_descriptive(text) {
            QuestionType::Paragraph
        } else {
            QuestionType::ShortAnswer
        };
        return Question::new(kind, text);
    }

    // Satisfaction scales and ratings read best as radio buttons, no
    // matter how many steps the scale has.
    let kind = if options
        .iter()
        .any(|opt| {
            let lower = opt.to_lowercase();
            SCALE_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
    {
        QuestionType::MultipleChoice
    } else if options
        .iter()
        .any(|opt| opt.contains("years") || opt.contains('-'))
    {
        // Numeric ranges (age brackets, tenure) collapse into a dropdown.
        QuestionType::Dropdown
    } else if options.len() == 2 {
        QuestionType::MultipleChoice
    } else if options.len() > 4 {
        // Long radio lists are unwieldy.
        QuestionType::Dropdown
    } else {
        QuestionType::MultipleChoice
    };

    let mut question = Question::new(kind, text);
    question.options = options;
    question
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn no_options_short_answer() {
        let q = classify("Your name?", Vec::new());
        assert_eq!(q.kind, QuestionType::ShortAnswer);
        assert!(q.options.is_empty());
        assert!(!q.required);
    }

    #[test]
    fn no_options_descriptive_paragraph() {
        let q = classify("Explain your reasoning?", Vec::new());
        assert_eq!(q.kind, QuestionType::Paragraph);
        let q = classify("Please ELABORATE on that?", Vec::new());
        assert_eq!(q.kind, QuestionType::Paragraph);
    }

    #[test]
    fn satisfaction_scale_is_multiple_choice() {
        let q = classify(
            "How did we do?",
            opts(&["Very satisfied", "Satisfied", "Neutral", "Dissatisfied", "Very dissatisfied"]),
        );
        assert_eq!(q.kind, QuestionType::MultipleChoice);
    }

    #[test]
    fn scale_rule_shadows_long_list_rule() {
        // Five options would otherwise become a dropdown.
        let q = classify(
            "Rate us?",
            opts(&["Rating 1", "Rating 2", "Rating 3", "Rating 4", "Rating 5"]),
        );
        assert_eq!(q.kind, QuestionType::MultipleChoice);
    }

    #[test]
    fn ranges_become_dropdown() {
        let q = classify("Age group?", opts(&["18-25", "26-35"]));
        assert_eq!(q.kind, QuestionType::Dropdown);

        let q = classify("Experience?", opts(&["2 years", "5 years", "10 years"]));
        assert_eq!(q.kind, QuestionType::Dropdown);
    }

    #[test]
    fn range_rule_shadows_binary_rule() {
        // Two options with a hyphen still read as a range.
        let q = classify("Tenure?", opts(&["0-5", "6+"]));
        assert_eq!(q.kind, QuestionType::Dropdown);
    }

    #[test]
    fn binary_choice_is_multiple_choice() {
        let q = classify("Attending?", opts(&["Yes", "No"]));
        assert_eq!(q.kind, QuestionType::MultipleChoice);
    }

    #[test]
    fn long_lists_become_dropdown() {
        let q = classify(
            "Favorite fruit?",
            opts(&["Apple", "Pear", "Plum", "Grape", "Melon"]),
        );
        assert_eq!(q.kind, QuestionType::Dropdown);
    }

    #[test]
    fn medium_lists_default_to_multiple_choice() {
        let q = classify("Pick one?", opts(&["Red", "Green", "Blue"]));
        assert_eq!(q.kind, QuestionType::MultipleChoice);

        let q = classify("Pick one?", opts(&["Red", "Green", "Blue", "Cyan"]));
        assert_eq!(q.kind, QuestionType::MultipleChoice);
    }
}
