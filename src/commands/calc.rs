use anyhow::{Context, Result};

use crate::OutputFormat;
use crate::calc;
use crate::config::Config;

/// Evaluate a time expression and print its total.
pub fn total(config: &Config, expression: &str, no_wrap: bool, format: OutputFormat) -> Result<()> {
    let mut behavior = config.behavior.clone();
    if no_wrap {
        behavior.midnight_wrap = false;
    }

    // One clock reading per invocation anchors every 'now' in the
    // expression to the same instant
    let now = chrono::Local::now().time();
    let total = calc::compute_total(expression, now, &behavior)?;

    match format {
        OutputFormat::Text => println!("{}", calc::format_summary(&total)),
        OutputFormat::Json => {
            let json = serde_json::to_string(&total).context("Failed to serialize total")?;
            println!("{}", json);
        }
    }

    Ok(())
}
