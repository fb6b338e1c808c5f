//! The `turing rubrics` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use turing_core::RubricType;

pub fn execute(preset: Option<String>) -> Result<()> {
    let presets = match preset {
        Some(name) => vec![name.parse::<RubricType>()?],
        None => RubricType::ALL.to_vec(),
    };

    let mut table = Table::new();
    table.set_header(vec!["Preset", "Label", "Default criteria"]);

    for rubric_type in presets {
        let defaults = rubric_type
            .defaults()
            .iter()
            .map(|(objective, weight)| format!("{objective} ({weight:.1})"))
            .collect::<Vec<_>>();
        let defaults = if defaults.is_empty() {
            "(none)".to_string()
        } else {
            defaults.join("\n")
        };

        table.add_row(vec![
            Cell::new(rubric_type.name()),
            Cell::new(rubric_type.label()),
            Cell::new(defaults),
        ]);
    }

    println!("{table}");
    Ok(())
}
