use std::fs;

use anyhow::{Context, Result};

use crate::config::{self, Config};

pub fn list(config: &Config) -> Result<()> {
    // Config derives Serialize, so listing is just pretty TOML
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    // Convert to a Value and walk dot notation: "behavior.midnight_wrap"
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .context(format!("Key not found: {}", part))?;
    }

    match current {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }

    Ok(())
}

pub fn set(key: &str, value: &str) -> Result<()> {
    // Only keys present in the schema can be set
    let schema = serde_json::to_value(Config::default()).context("Failed to serialize config")?;
    let mut probe = &schema;
    for part in key.split('.') {
        probe = probe
            .get(part)
            .with_context(|| format!("Unknown config key: {}", key))?;
    }

    let path = config::config_path()?;
    let mut root: toml::Value = if path.exists() {
        let raw = fs::read_to_string(&path).context("Failed to read config file")?;
        raw.parse().context("Failed to parse config file")?
    } else {
        toml::Value::Table(toml::value::Table::new())
    };

    let parts: Vec<&str> = key.split('.').collect();
    let (leaf, parents) = parts.split_last().context("Empty config key")?;

    let mut current = &mut root;
    for part in parents {
        current = match current {
            toml::Value::Table(table) => table
                .entry(part.to_string())
                .or_insert_with(|| toml::Value::Table(toml::value::Table::new())),
            _ => anyhow::bail!("Cannot set '{}': '{}' is not a table", key, part),
        };
    }

    let table = current
        .as_table_mut()
        .with_context(|| format!("Cannot set '{}': parent is not a table", key))?;
    table.insert(leaf.to_string(), parse_value(value));

    // Round-trip through Config so a bad value fails before the write
    let config: Config = root
        .try_into()
        .with_context(|| format!("'{}' is not a valid value for {}", value, key))?;
    config::save_to_path(&config, &path)?;

    println!("✓ Set {} = {}", key, value);
    Ok(())
}

// Untyped TOML edit: guess bool, then integer, else string
fn parse_value(raw: &str) -> toml::Value {
    if let Ok(b) = raw.parse::<bool>() {
        return toml::Value::Boolean(b);
    }
    if let Ok(i) = raw.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    toml::Value::String(raw.to_string())
}
