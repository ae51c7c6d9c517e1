//! Output format selection and structured rendering.
//!
//! Three formats are supported: a human table, JSON, and YAML. The table
//! renderer lives in [`crate::ui`]; this module owns the format enum and
//! the structured (JSON/YAML) serializers.

use std::str::FromStr;
use strum::EnumIter;

pub const TABLE: &str = "table";
pub const JSON: &str = "json";
pub const YAML: &str = "yaml";

#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    /// Error when an unsupported output format is requested
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),

    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerializationError(#[from] serde_yaml::Error),
}

/// Enum representing the supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Default)]
pub enum OutputFormat {
    /// Aligned columns with upper-case headers, for terminals
    #[default]
    Table,
    /// JSON (JavaScript Object Notation) format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Returns a vector of all supported format names as strings
    pub fn names() -> Vec<&'static str> {
        vec![TABLE, JSON, YAML]
    }
}

impl FromStr for OutputFormat {
    type Err = FormattingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            TABLE => Ok(OutputFormat::Table),
            JSON => Ok(OutputFormat::Json),
            YAML => Ok(OutputFormat::Yaml),
            other => Err(FormattingError::UnsupportedOutputFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Table => TABLE,
            OutputFormat::Json => JSON,
            OutputFormat::Yaml => YAML,
        };
        write!(f, "{}", name)
    }
}

/// Pretty-printed JSON with a trailing newline.
pub fn render_json<T: serde::Serialize>(value: &T) -> Result<String, FormattingError> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

/// YAML document; serde_yaml already terminates with a newline.
pub fn render_yaml<T: serde::Serialize>(value: &T) -> Result<String, FormattingError> {
    Ok(serde_yaml::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_names_case_insensitively() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!(
            "Table".parse::<OutputFormat>().unwrap(),
            OutputFormat::Table
        );
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, FormattingError::UnsupportedOutputFormat(_)));
    }

    #[test]
    fn json_rendering_is_pretty_and_newline_terminated() {
        let out = render_json(&serde_json::json!({"name": "api"})).unwrap();
        assert!(out.contains("\"name\": \"api\""));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn yaml_rendering_produces_a_document() {
        let out = render_yaml(&serde_json::json!({"name": "api"})).unwrap();
        assert_eq!(out, "name: api\n");
    }
}
