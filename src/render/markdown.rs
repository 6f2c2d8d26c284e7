use std::fmt::Write;

use super::indent;
use super::status::status_text;
use crate::model::{Endpoint, Parameter, Response};

const CODE_INDENT: &str = "    ";

pub fn render(endpoints: &[Endpoint]) -> String {
    endpoints
        .iter()
        .map(render_endpoint)
        .collect::<Vec<_>>()
        .join("\n---\n\n")
}

// Writing into a String cannot fail, hence the ignored fmt::Results.
fn render_endpoint(e: &Endpoint) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "### {} [{}]\n", e.method, e.url_template);
    if !e.description.is_empty() {
        let _ = writeln!(md, "{}\n", e.description);
    }
    if !e.notes.is_empty() {
        let _ = writeln!(md, "**NOTE:** {}\n", e.notes);
    }

    write_params(&mut md, "Parameters", &e.url_params);
    write_params(&mut md, "Request Body Parameters", &e.data_params);

    md.push_str("#### Example success response\n");
    write_response(&mut md, &e.success_response);

    if !e.error_responses.is_empty() {
        md.push_str("#### Example error responses\n");
        for resp in &e.error_responses {
            write_response(&mut md, resp);
        }
    }

    if !e.examples.is_empty() {
        md.push_str("#### Examples\n\n");
        for example in &e.examples {
            let _ = writeln!(md, "{}\n", indent(example, CODE_INDENT));
        }
    }
    md
}

fn write_params(md: &mut String, title: &str, params: &[Parameter]) {
    if params.is_empty() {
        return;
    }
    let _ = writeln!(md, "#### {title}\n");
    for p in params {
        let _ = writeln!(md, "* {}", param_line(p));
    }
    md.push('\n');
}

/// `name (required type) : description`
pub(crate) fn param_line(p: &Parameter) -> String {
    let attrs: Vec<&str> = [p.required.then_some("required"), Some(p.kind.as_str())]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    let mut line = p.name.clone();
    if !attrs.is_empty() {
        let _ = write!(line, " ({})", attrs.join(" "));
    }
    if !p.description.is_empty() {
        let _ = write!(line, " : {}", p.description);
    }
    line
}

fn write_response(md: &mut String, resp: &Response) {
    let _ = writeln!(md, "`{}`: {}\n", resp.code, status_text(resp.code));
    if !resp.content.is_empty() {
        let _ = writeln!(md, "{}\n", indent(&resp.content, CODE_INDENT));
    }
}

// ── Tests ──
