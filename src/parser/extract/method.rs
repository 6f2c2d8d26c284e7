use crate::model::Endpoint;
use crate::parser::lines::parse_method;

/// Sets the verb and URL from the section's leading line. Leaves both untouched when
/// the line is not a `<VERB> /path` line.
pub fn extract(endpoint: &mut Endpoint, lines: &[&str]) {
    if let Some((verb, url)) = lines.first().and_then(|l| parse_method(l)) {
        endpoint.method = verb.to_string();
        endpoint.url_template = url.to_string();
    }
}
