//! The `formgen summarize` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use formgen_core::analytics::summarize;
use formgen_core::model::Form;

pub fn execute(form_path: PathBuf, format: String) -> Result<()> {
    let form = Form::load_json(&form_path)?;
    let summary = summarize(&form);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        _ => {
            // text format
            println!("Form: {}", form.title);
            println!("Total responses: {}", summary.total_responses);

            if let Some(quiz) = &summary.quiz {
                println!(
                    "Average score: {} / {} ({}%)",
                    quiz.average_score, quiz.max_score, quiz.average_percentage
                );
            }

            for question in &summary.questions {
                println!("\n{}", question.text);
                let mut table = Table::new();
                table.set_header(vec!["Option", "Count", "Share"]);
                for option in &question.options {
                    table.add_row(vec![
                        Cell::new(&option.option),
                        Cell::new(option.count),
                        Cell::new(format!("{}%", option.percentage)),
                    ]);
                }
                println!("{table}");
            }
        }
    }

    Ok(())
}
