//! The `formgen validate` command.

use std::path::PathBuf;

use anyhow::Result;

use formgen_core::model::Form;
use formgen_core::validate::validate_form;

pub fn execute(form_path: PathBuf) -> Result<()> {
    let form = Form::load_json(&form_path)?;

    println!(
        "Form: {} ({} questions, {} responses)",
        form.title,
        form.questions.len(),
        form.responses.len()
    );

    let warnings = validate_form(&form);
    for w in &warnings {
        let prefix = w
            .question_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Form is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
