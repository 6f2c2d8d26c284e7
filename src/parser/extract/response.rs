use super::strip_keyword;
use crate::error::ParseError;
use crate::model::Response;
use crate::parser::lines::Keyword;

/// The first line after the keyword must be the status code; the rest is the example
/// body, newline-joined.
pub fn extract(keyword: Keyword, lines: &[&str]) -> Result<Response, ParseError> {
    let lines = strip_keyword(keyword, lines);
    let (code_line, content) = match lines.split_first() {
        Some((code, content)) => (code.trim(), content),
        None => ("", &[][..]),
    };

    let code = code_line
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidStatusCode {
            keyword,
            found: code_line.to_string(),
        })?;

    Ok(Response {
        code,
        content: content.join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_on_keyword_line() {
        let r = extract(Keyword::SuccessResponse, &["Success Response 200", "{\"ok\":true}", ""]).unwrap();
        assert_eq!(r.code, 200);
        assert_eq!(r.content, "{\"ok\":true}");
    }

    #[test]
    fn code_on_next_line_with_multi_line_body() {
        let lines = ["Error Response", "", "404", "{", "  \"error\": \"not found\"", "}"];
        let r = extract(Keyword::ErrorResponse, &lines).unwrap();
        assert_eq!(r.code, 404);
        assert_eq!(r.content, "{\n  \"error\": \"not found\"\n}");
    }

    #[test]
    fn non_numeric_code() {
        let err = extract(Keyword::SuccessResponse, &["Success Response abc", "{}"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidStatusCode {
                keyword: Keyword::SuccessResponse,
                found: "abc".to_string(),
            }
        );
    }

    #[test]
    fn missing_code() {
        let err = extract(Keyword::ErrorResponse, &["Error Response"]).unwrap_err();
        assert!(matches!(err, ParseError::InvalidStatusCode { found, .. } if found.is_empty()));
    }
}
