use anyhow::{anyhow, Context, Result};
use bistro_model::{Page, ValidationLevel, Validator};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Page JSON file to check
    pub input: PathBuf,
}

pub fn validate(args: ValidateArgs) -> Result<()> {
    let json = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let page: Page = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a valid page", args.input.display()))?;

    let findings = Validator::new().validate(&page);

    if findings.is_empty() {
        println!(
            "{} {} ({} sections)",
            "✓".green(),
            args.input.display(),
            page.sections.len()
        );
        return Ok(());
    }

    let mut errors = 0;
    for finding in &findings {
        let (marker, message) = match finding.level {
            ValidationLevel::Error => {
                errors += 1;
                ("✗".red(), finding.message.as_str().red())
            }
            ValidationLevel::Warning => ("⚠".yellow(), finding.message.as_str().yellow()),
        };
        match &finding.section_id {
            Some(section_id) => println!("  {marker} [{section_id}] {message}"),
            None => println!("  {marker} {message}"),
        }
    }

    if errors > 0 {
        return Err(anyhow!(
            "{} error(s), {} warning(s)",
            errors,
            findings.len() - errors
        ));
    }

    println!("{} {} warning(s)", "⚠".yellow(), findings.len());
    Ok(())
}
