use super::strip_keyword;
use crate::parser::lines::Keyword;

/// Free-text sections (Description, Notes, Example): everything after the keyword,
/// newline-joined.
pub fn extract(keyword: Keyword, lines: &[&str]) -> String {
    strip_keyword(keyword, lines).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_keeps_interior_blank_lines() {
        let lines = [
            "Description",
            "This is a description.  There",
            "are multiple lines.",
            "",
            "This is still description.",
            "",
        ];
        assert_eq!(
            extract(Keyword::Description, &lines),
            "This is a description.  There\nare multiple lines.\n\nThis is still description."
        );
    }

    #[test]
    fn text_on_keyword_line() {
        assert_eq!(extract(Keyword::Notes, &["Notes Rate limited."]), "Rate limited.");
    }

    #[test]
    fn example_keeps_indentation() {
        let lines = ["Example", "\tcurl -v \\", "\t  -d '{}'"];
        assert_eq!(extract(Keyword::Example, &lines), "\tcurl -v \\\n\t  -d '{}'");
    }

    #[test]
    fn empty_section() {
        assert_eq!(extract(Keyword::Description, &["Description"]), "");
    }
}
