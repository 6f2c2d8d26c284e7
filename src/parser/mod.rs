pub mod extract;
pub mod lines;
pub mod sections;

use crate::error::ParseError;
use crate::model::Endpoint;

/// Three-pass pipeline: body → keyword sections → extracted endpoint fields.
pub fn parse_endpoint(name: &str, body: &str) -> Result<Endpoint, ParseError> {
    let body_lines: Vec<&str> = body.split('\n').collect();
    let sections = sections::cluster_sections(&body_lines, lines::classify_line);

    let mut endpoint = Endpoint::new(name);
    for section in &sections {
        extract::apply(&mut endpoint, section.keyword, &body_lines[section.range.clone()])?;
    }
    Ok(endpoint)
}

// ── Tests ──
