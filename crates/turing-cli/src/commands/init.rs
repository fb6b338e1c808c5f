//! The `turing init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("turing.toml").exists() {
        println!("turing.toml already exists, skipping.");
    } else {
        std::fs::write("turing.toml", SAMPLE_CONFIG)?;
        println!("Created turing.toml");
    }

    std::fs::create_dir_all("questions")?;
    let example_path = std::path::Path::new("questions/example.toml");
    if example_path.exists() {
        println!("questions/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUESTION)?;
        println!("Created questions/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Set TURING_API_KEY or edit turing.toml");
    println!("  2. Run: turing validate --question questions/example.toml");
    println!("  3. Run: turing grade --question questions/example.toml --answer \"Canberra\"");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# turing configuration

# endpoint = "http://localhost:8000/"
api_key = "${TURING_API_KEY}"
timeout_secs = 10
"#;

const EXAMPLE_QUESTION: &str = r#"body = "What is the capital of Australia?"
example_answer = "Canberra"

# One of: factual, analytical, creative, application, comprehensive,
# communication, custom
rubric_type = "factual"

# Objective label -> weight (a positive multiple of 0.5).
# Entries replace or extend the preset's defaults.
[rubric]
"clarity of writing" = 1.5
"#;
