//! TOML parser with helpful error messages

use std::path::Path;

use anyhow::{Context, Result};

use super::SecretsFile;

/// Parse a secrets file with detailed error messages
pub fn parse_secrets_toml(path: &Path) -> Result<SecretsFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read secrets file: {}", path.display()))?;

    parse_secrets_toml_str(&content)
        .with_context(|| format!("Failed to parse secrets file: {}", path.display()))
}

/// Parse secrets file content from string
pub fn parse_secrets_toml_str(content: &str) -> Result<SecretsFile> {
    toml::from_str(content).map_err(|e| enhance_toml_error(e, content))
}

/// Enhance TOML parsing errors with the offending line and its neighbours
fn enhance_toml_error(error: toml::de::Error, content: &str) -> anyhow::Error {
    let message = error.message().to_string();

    match error.span() {
        Some(span) => {
            let line_num = content[..span.start.min(content.len())]
                .matches('\n')
                .count()
                + 1;
            anyhow::anyhow!(
                "TOML parsing error at line {}:\n{}\n\nError: {}",
                line_num,
                get_line_context(content, line_num),
                message
            )
        }
        None => anyhow::anyhow!("TOML parsing error: {}", message),
    }
}

fn get_line_context(content: &str, line_num: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let start = line_num.saturating_sub(2);
    let end = (line_num + 2).min(lines.len());

    lines[start.min(end)..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            let marker = if num == line_num { ">>>" } else { "   " };
            format!("{} {:4} | {}", marker, num, line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
