//! Percept sources: recorded scripts and typed flag words.

use std::path::Path;

use anyhow::{bail, Context, Result};
use wumpus_core::Percept;

/// Reads a list of percepts. `.json` files are parsed as JSON, anything else as YAML.
pub fn load_script(path: &Path) -> Result<Vec<Percept>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read percept script {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse percept script {}", path.display()))
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse percept script {}", path.display()))
    }
}

/// Parses whitespace-separated flag words (`stench breeze glitter bump scream`).
/// A blank line means nothing was sensed.
pub fn parse_flags(line: &str) -> Result<Percept> {
    let mut percept = Percept::none();
    for word in line.split_whitespace() {
        match word.to_ascii_lowercase().as_str() {
            "stench" => percept.stench = true,
            "breeze" => percept.breeze = true,
            "glitter" => percept.glitter = true,
            "bump" => percept.bump = true,
            "scream" => percept.scream = true,
            other => bail!(
                "unknown percept `{other}` (expected stench, breeze, glitter, bump or scream)"
            ),
        }
    }
    Ok(percept)
}
