use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// Example: GET /some/path/:foo. Matches anywhere in the line.
static METHOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(GET|PUT|POST|DELETE|HEAD|OPTIONS|TRACE|CONNECT|PATCH)\s+(/.*)").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Description,
    SuccessResponse,
    ErrorResponse,
    Example,
    Parameter,
    Notes,
    Method,
}

/// Evaluation order of `classify_line`. The first keyword whose predicate accepts a
/// line wins, so the order decides lines that could match more than one entry.
const PRIORITY: [Keyword; 7] = [
    Keyword::Description,
    Keyword::SuccessResponse,
    Keyword::ErrorResponse,
    Keyword::Example,
    Keyword::Parameter,
    Keyword::Notes,
    Keyword::Method,
];

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Description => "Description",
            Keyword::SuccessResponse => "Success Response",
            Keyword::ErrorResponse => "Error Response",
            Keyword::Example => "Example",
            Keyword::Parameter => "Parameter",
            Keyword::Notes => "Notes",
            Keyword::Method => "Method",
        }
    }

    fn starts(self, line: &str) -> bool {
        match self {
            Keyword::Method => METHOD_RE.is_match(line),
            kw => line.starts_with(kw.as_str()),
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the section keyword `line` opens, if any.
pub fn classify_line(line: &str) -> Option<Keyword> {
    PRIORITY.into_iter().find(|kw| kw.starts(line))
}

/// Splits a method line into `(verb, url_template)`.
pub fn parse_method(line: &str) -> Option<(&str, &str)> {
    let caps = METHOD_RE.captures(line)?;
    let verb = caps.get(1)?.as_str();
    let url = caps.get(2)?.as_str().trim_end();
    Some((verb, url))
}
