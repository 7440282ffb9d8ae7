//! The `formgen export` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use formgen_core::export::to_csv;
use formgen_core::model::Form;

pub fn execute(form_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let form = Form::load_json(&form_path)?;
    let csv = to_csv(&form);

    match output {
        Some(path) => {
            std::fs::write(&path, csv)
                .with_context(|| format!("failed to write CSV to {}", path.display()))?;
            println!(
                "Exported {} response(s) to {}",
                form.responses.len(),
                path.display()
            );
        }
        None => {
            println!("{csv}");
        }
    }

    Ok(())
}
