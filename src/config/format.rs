//! Source formats a deployment config can be written in.

use serde_json::Value;
use std::{fmt, path::Path};

use super::ConfigError;

/// On-disk representation of a deployment config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
    /// A `config.js` script assigning an object literal to `config`.
    ConfigJs,
}

impl SourceFormat {
    /// Detects the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(SourceFormat::Yaml),
            Some("json") => Ok(SourceFormat::Json),
            Some("js") => Ok(SourceFormat::ConfigJs),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parses `content` into a generic value without any schema checks.
    pub(crate) fn parse(self, content: &str) -> Result<Value, ConfigError> {
        match self {
            SourceFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            SourceFormat::Json => Ok(serde_json::from_str(content)?),
            SourceFormat::ConfigJs => {
                let literal = extract_object_literal(content)?;
                // Rendered files are plain JSON; hand-written ones use unquoted
                // keys and trailing commas, which a YAML flow mapping accepts.
                match serde_json::from_str(&literal) {
                    Ok(value) => Ok(value),
                    Err(_) => Ok(serde_yaml::from_str(&literal)?),
                }
            }
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceFormat::Yaml => "yaml",
            SourceFormat::Json => "json",
            SourceFormat::ConfigJs => "config.js",
        };
        f.write_str(name)
    }
}

/// Strips the script wrapper around `var config = { ... }` and returns the
/// object literal.
pub(crate) fn extract_object_literal(script: &str) -> Result<String, ConfigError> {
    let body: String = script
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n");

    let mut rest = body.trim_start();
    for directive in ["'use strict'", "\"use strict\""] {
        if let Some(stripped) = rest.strip_prefix(directive) {
            rest = stripped.trim_start();
            rest = rest.strip_prefix(';').unwrap_or(rest).trim_start();
            break;
        }
    }

    let rest = ["var", "let", "const"]
        .iter()
        .find_map(|keyword| {
            rest.strip_prefix(keyword)
                .filter(|r| r.starts_with(char::is_whitespace))
        })
        .ok_or_else(|| ConfigError::Script("expected a `var config = ...` declaration".into()))?;

    let rest = rest
        .trim_start()
        .strip_prefix("config")
        .ok_or_else(|| ConfigError::Script("expected the declared variable to be `config`".into()))?;

    let rest = rest
        .trim_start()
        .strip_prefix('=')
        .ok_or_else(|| ConfigError::Script("expected `=` after `config`".into()))?;

    let literal = rest.trim();
    let literal = literal.strip_suffix(';').unwrap_or(literal).trim_end();

    if !(literal.starts_with('{') && literal.ends_with('}')) {
        return Err(ConfigError::Script(
            "expected `config` to be assigned an object literal".into(),
        ));
    }

    Ok(literal.to_string())
}
