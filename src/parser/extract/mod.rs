pub mod method;
pub mod parameter;
pub mod prose;
pub mod response;

use super::lines::Keyword;
use crate::error::ParseError;
use crate::model::Endpoint;

/// Apply one section's lines to the endpoint being assembled.
pub fn apply(endpoint: &mut Endpoint, keyword: Keyword, lines: &[&str]) -> Result<(), ParseError> {
    match keyword {
        Keyword::Method => method::extract(endpoint, lines),
        Keyword::Description => endpoint.description = prose::extract(keyword, lines),
        Keyword::Notes => endpoint.notes = prose::extract(keyword, lines),
        Keyword::Example => endpoint.examples.push(prose::extract(keyword, lines)),
        Keyword::Parameter => {
            if let Some(param) = parameter::extract(lines) {
                endpoint.url_params.push(param);
            }
        }
        Keyword::SuccessResponse => endpoint.success_response = response::extract(keyword, lines)?,
        Keyword::ErrorResponse => endpoint.error_responses.push(response::extract(keyword, lines)?),
    }
    Ok(())
}

/// Removes the keyword from the first line, then any blank lines directly after it and
/// any trailing blank lines of the section.
pub fn strip_keyword<'a>(keyword: Keyword, lines: &[&'a str]) -> Vec<&'a str> {
    let Some((&first, rest)) = lines.split_first() else {
        return Vec::new();
    };
    let first = first.strip_prefix(keyword.as_str()).unwrap_or(first).trim();

    let mut stripped: Vec<&str> = std::iter::once(first)
        .chain(rest.iter().copied())
        .skip_while(|l| l.trim().is_empty())
        .collect();
    while stripped.last().is_some_and(|l| l.trim().is_empty()) {
        stripped.pop();
    }
    stripped
}
