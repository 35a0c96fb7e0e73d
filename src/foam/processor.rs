//! Output processing for query results
//!
//! Query results are printed in one of three formats: `simple` (plain text,
//! one item per line), `json` or `yaml`. Reported line numbers are shifted by
//! the configured line base, so tools that count from zero can ask for it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::foam::query::KeywordRecord;

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Format names accepted by `--format` and `output.format`
    pub fn available() -> &'static [&'static str] {
        &["simple", "json", "yaml"]
    }
}

/// The result of one query, ready to be printed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    Value(String),
    Keywords(Vec<String>),
    Records(Vec<KeywordRecord>),
    /// `-1` when the entry was not found
    Line(i64),
}

impl QueryOutput {
    /// Renumber reported lines so the first line of a file is `line_base`
    fn with_line_base(self, line_base: u8) -> Self {
        let shift = |line: usize| line - 1 + usize::from(line_base);
        match self {
            QueryOutput::Records(records) => QueryOutput::Records(
                records
                    .into_iter()
                    .map(|r| KeywordRecord::new(r.path, shift(r.line.max(1))))
                    .collect(),
            ),
            QueryOutput::Line(line) if line > 0 => {
                QueryOutput::Line(line - 1 + i64::from(line_base))
            }
            other => other,
        }
    }
}

/// Errors that can occur while reading input or formatting output
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Read a dictionary file
pub fn read_source<P: AsRef<Path>>(file_path: P) -> Result<String, ProcessingError> {
    let path = file_path.as_ref();
    if !path.exists() {
        return Err(ProcessingError::FileNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Render a query result in the requested format
pub fn format_output(
    output: QueryOutput,
    format: OutputFormat,
    line_base: u8,
) -> Result<String, ProcessingError> {
    let output = output.with_line_base(line_base);

    let text = match format {
        OutputFormat::Simple => format_simple(&output),
        OutputFormat::Json => serde_json::to_string_pretty(&output)?,
        OutputFormat::Yaml => serde_yaml::to_string(&output)?.trim_end().to_string(),
    };
    Ok(text)
}

fn format_simple(output: &QueryOutput) -> String {
    match output {
        QueryOutput::Value(value) => value.trim_end_matches('\n').to_string(),
        QueryOutput::Keywords(keywords) => keywords.join("\n"),
        QueryOutput::Records(records) => records
            .iter()
            .map(|r| format!("{} {}", r.path, r.line))
            .collect::<Vec<_>>()
            .join("\n"),
        QueryOutput::Line(line) => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> QueryOutput {
        QueryOutput::Records(vec![
            KeywordRecord::new("a", 1),
            KeywordRecord::new("a.b", 2),
        ])
    }

    #[test]
    fn test_available_formats_deserialize() {
        let parsed: Vec<OutputFormat> = OutputFormat::available()
            .iter()
            .map(|name| serde_json::from_value(serde_json::Value::from(*name)).unwrap())
            .collect();
        assert_eq!(
            parsed,
            vec![OutputFormat::Simple, OutputFormat::Json, OutputFormat::Yaml]
        );
    }

    #[test]
    fn test_simple_records() {
        let text = format_output(records(), OutputFormat::Simple, 1).unwrap();
        assert_eq!(text, "a 1\na.b 2");
    }

    #[test]
    fn test_zero_based_lines() {
        let text = format_output(records(), OutputFormat::Simple, 0).unwrap();
        assert_eq!(text, "a 0\na.b 1");

        let text = format_output(QueryOutput::Line(3), OutputFormat::Simple, 0).unwrap();
        assert_eq!(text, "2");
    }

    #[test]
    fn test_not_found_line_is_not_shifted() {
        let text = format_output(QueryOutput::Line(-1), OutputFormat::Simple, 0).unwrap();
        assert_eq!(text, "-1");
    }

    #[test]
    fn test_simple_value_drops_trailing_newline() {
        let output = QueryOutput::Value("{\n    a               1;\n}\n".to_string());
        let text = format_output(output, OutputFormat::Simple, 1).unwrap();
        assert_eq!(text, "{\n    a               1;\n}");
    }

    #[test]
    fn test_json_output() {
        let text = format_output(records(), OutputFormat::Json, 1).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[1]["path"], "a.b");
        assert_eq!(parsed[1]["line"], 2);

        let text = format_output(
            QueryOutput::Keywords(vec!["type".into(), "value".into()]),
            OutputFormat::Json,
            1,
        )
        .unwrap();
        assert_eq!(text, "[\n  \"type\",\n  \"value\"\n]");
    }

    #[test]
    fn test_yaml_output() {
        let text = format_output(records(), OutputFormat::Yaml, 1).unwrap();
        assert_eq!(text, "- path: a\n  line: 1\n- path: a.b\n  line: 2");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_source("/definitely/not/here.foam").unwrap_err();
        assert!(matches!(err, ProcessingError::FileNotFound(_)));
    }
}
