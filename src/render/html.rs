use std::fmt::Write;

use super::status::status_text;
use crate::model::{Endpoint, Parameter, Response};

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta http-equiv="X-UA-Compatible" content="IE=edge">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>apidoc</title>
    <link rel="stylesheet" href="https://maxcdn.bootstrapcdn.com/bootstrap/3.3.4/css/bootstrap.min.css">
  </head>
  <body>
"#;

const TAIL: &str = "  </body>\n</html>\n";

/// One standalone page holding every endpoint.
pub fn render(endpoints: &[Endpoint]) -> String {
    let mut html = String::from(HEAD);
    for e in endpoints {
        write_endpoint(&mut html, e);
    }
    html.push_str(TAIL);
    html
}

// Writing into a String cannot fail, hence the ignored fmt::Results.
fn write_endpoint(html: &mut String, e: &Endpoint) {
    html.push_str("    <div class=\"container\">\n");
    let _ = writeln!(
        html,
        "      <h3>{} [{}]</h3>",
        escape(&e.method),
        escape(&e.url_template)
    );
    if !e.description.is_empty() {
        let _ = writeln!(html, "      <p>{}</p>", escape(&e.description));
    }
    if !e.notes.is_empty() {
        let _ = writeln!(html, "      <p><em>NOTE:</em> {}</p>", escape(&e.notes));
    }

    write_params(html, "Parameters", &e.url_params);
    write_params(html, "Request Body Parameters", &e.data_params);

    html.push_str("      <h4>Example success response</h4>\n");
    write_response(html, &e.success_response);

    if !e.error_responses.is_empty() {
        html.push_str("      <h4>Example error responses</h4>\n");
        for resp in &e.error_responses {
            write_response(html, resp);
        }
    }

    if !e.examples.is_empty() {
        html.push_str("      <h4>Examples</h4>\n");
        for example in &e.examples {
            let _ = writeln!(html, "      <pre>{}</pre>", escape(example));
        }
    }
    html.push_str("    </div>\n");
}

fn write_params(html: &mut String, title: &str, params: &[Parameter]) {
    if params.is_empty() {
        return;
    }
    let _ = writeln!(html, "      <h4>{title}</h4>\n      <ul>");
    for p in params {
        let _ = writeln!(html, "        <li>{}</li>", escape(&super::markdown::param_line(p)));
    }
    html.push_str("      </ul>\n");
}

fn write_response(html: &mut String, resp: &Response) {
    let _ = writeln!(
        html,
        "      <code>{}</code>: <span>{}</span>",
        resp.code,
        status_text(resp.code)
    );
    if !resp.content.is_empty() {
        let _ = writeln!(html, "      <pre>{}</pre>", escape(&resp.content));
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ── Tests ──
