//! CSV export and JSON persistence for forms.

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{Answer, Form};

/// Serialize all responses of a form as CSV.
///
/// Header row is `Timestamp, Email` followed by the question texts in
/// question order; one row per response in submission order. Every
/// field is double-quote wrapped (embedded quotes doubled), multi-value
/// answers join with `", "`, unanswered cells are empty, and a missing
/// email renders as `N/A`. The output is deterministic for a given form.
pub fn to_csv(form: &Form) -> String {
    let mut lines = Vec::with_capacity(form.responses.len() + 1);

    let mut header = vec!["Timestamp".to_string(), "Email".to_string()];
    header.extend(form.questions.iter().map(|q| q.text.clone()));
    lines.push(join_row(&header));

    for response in &form.responses {
        let mut row = Vec::with_capacity(form.questions.len() + 2);
        row.push(
            response
                .submitted_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
        );
        row.push(match &response.email {
            Some(email) if !email.is_empty() => email.clone(),
            _ => "N/A".to_string(),
        });

        for question in &form.questions {
            row.push(match response.answers.get(&question.id) {
                Some(Answer::Many(values)) => values.join(", "),
                Some(Answer::Text(value)) => value.clone(),
                Some(Answer::Number(n)) => n.to_string(),
                Some(Answer::Bool(b)) => b.to_string(),
                None => String::new(),
            });
        }

        lines.push(join_row(&row));
    }

    lines.join("\n")
}

fn join_row(fields: &[String]) -> String {
    let quoted: Vec<String> = fields
        .iter()
        .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
        .collect();
    quoted.join(",")
}

impl Form {
    /// Save the form as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize form")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write form to {}", path.display()))?;
        Ok(())
    }

    /// Load a form from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read form from {}", path.display()))?;
        let form: Form = serde_json::from_str(&content).context("failed to parse form JSON")?;
        Ok(form)
    }
}
