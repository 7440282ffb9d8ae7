//! The `formgen parse` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use formgen_core::model::Form;
use formgen_core::parser::{parse_with_mode, ParseMode};

pub fn execute(
    input: PathBuf,
    mode: String,
    title: String,
    quiz: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let mode: ParseMode = mode
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{}", e))?;

    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read input file: {}", input.display()))?;

    let questions = parse_with_mode(&text, mode);
    tracing::info!(count = questions.len(), input = %input.display(), "parsed input");
    if questions.is_empty() {
        println!("No questions detected.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Type", "Required", "Points", "Question", "Options"]);
    for (i, q) in questions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(q.kind),
            Cell::new(if q.required { "yes" } else { "no" }),
            Cell::new(q.points),
            Cell::new(&q.text),
            Cell::new(q.options.join(", ")),
        ]);
    }
    println!("{table}");

    if let Some(path) = output {
        let mut form = Form::new(title);
        form.settings.is_quiz = quiz;
        form.questions = questions;
        form.save_json(&path)?;
        println!(
            "Wrote {} question(s) to {}",
            form.questions.len(),
            path.display()
        );
    }

    Ok(())
}
