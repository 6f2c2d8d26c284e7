pub mod html;
pub mod markdown;
pub mod status;

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::ConfigError;
use crate::model::Endpoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Markdown,
    Html,
    Json,
}

impl Format {
    /// File extension of generated documents.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Markdown => "md",
            Format::Html => "html",
            Format::Json => "json",
        }
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markdown" => Ok(Format::Markdown),
            "html" => Ok(Format::Html),
            "json" => Ok(Format::Json),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Markdown => "markdown",
            Format::Html => "html",
            Format::Json => "json",
        })
    }
}

/// Write all endpoints of one input as a single document.
pub fn render<W: Write>(format: Format, endpoints: &[Endpoint], out: &mut W) -> io::Result<()> {
    match format {
        Format::Markdown => out.write_all(markdown::render(endpoints).as_bytes()),
        Format::Html => out.write_all(html::render(endpoints).as_bytes()),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, endpoints)?;
            out.write_all(b"\n")
        }
    }
}

/// Indent every line of `text`, used for code blocks.
fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|l| if l.is_empty() { String::new() } else { format!("{prefix}{l}") })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names() {
        assert_eq!("markdown".parse::<Format>().unwrap(), Format::Markdown);
        assert_eq!("html".parse::<Format>().unwrap().extension(), "html");
        assert_eq!(Format::Json.to_string(), "json");
    }

    #[test]
    fn unknown_format() {
        let err = "pdf".parse::<Format>().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(f) if f == "pdf"));
    }

    #[test]
    fn json_output() {
        let mut buf = Vec::new();
        let endpoints = vec![Endpoint::new("a"), Endpoint::new("b")];
        render(Format::Json, &endpoints, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(2));
        assert_eq!(value[1]["name"], "b");
    }

    #[test]
    fn indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb", "    "), "    a\n\n    b");
    }
}
