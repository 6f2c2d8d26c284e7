use std::sync::LazyLock;

use regex::Regex;

use super::strip_keyword;
use crate::model::Parameter;
use crate::parser::lines::Keyword;

// Parameter docs follow the pattern:   name [, required] [, type]
//    foobar
//    foobar, string
//    foobar, required, string
//    foobar, required, array of strings
static PARAMETER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\w-]+)(?:\s*,\s*(required))?(?:\s*,\s*([\w\s]+))?$").unwrap()
});

/// Parses the first line after the keyword as the parameter signature; the following
/// lines, space-joined, become its description. `None` when the signature doesn't parse.
pub fn extract(lines: &[&str]) -> Option<Parameter> {
    let lines = strip_keyword(Keyword::Parameter, lines);
    let (signature, description) = lines.split_first()?;
    let caps = PARAMETER_RE.captures(signature.trim())?;

    Some(Parameter {
        name: caps.get(1)?.as_str().to_string(),
        required: caps.get(2).is_some(),
        kind: caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default(),
        description: description.join(" "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(lines: &[&str]) -> Option<Parameter> {
        extract(lines)
    }

    #[test]
    fn name_required_type() {
        let p = parse(&["Parameter id, required, string", "The item id."]).unwrap();
        assert_eq!(p.name, "id");
        assert!(p.required);
        assert_eq!(p.kind, "string");
        assert_eq!(p.description, "The item id.");
    }

    #[test]
    fn name_only() {
        let p = parse(&["Parameter id"]).unwrap();
        assert_eq!(p.name, "id");
        assert!(!p.required);
        assert_eq!(p.kind, "");
        assert_eq!(p.description, "");
    }

    #[test]
    fn type_without_required() {
        let p = parse(&["Parameter foo, string"]).unwrap();
        assert!(!p.required);
        assert_eq!(p.kind, "string");
    }

    #[test]
    fn required_without_type() {
        let p = parse(&["Parameter bar, required"]).unwrap();
        assert!(p.required);
        assert_eq!(p.kind, "");
    }

    #[test]
    fn multi_word_type_and_hyphenated_name() {
        let p = parse(&["Parameter user-ids, required, array of strings"]).unwrap();
        assert_eq!(p.name, "user-ids");
        assert_eq!(p.kind, "array of strings");
    }

    #[test]
    fn signature_on_next_line_and_multi_line_description() {
        let lines = ["Parameter", "fizz, required", "This is a description", "of fizz", ""];
        let p = parse(&lines).unwrap();
        assert_eq!(p.name, "fizz");
        assert!(p.required);
        assert_eq!(p.description, "This is a description of fizz");
    }

    #[test]
    fn malformed_signature() {
        assert!(parse(&["Parameter id: string"]).is_none());
        assert!(parse(&["Parameter"]).is_none());
    }
}
