use std::ops::Range;

use super::lines::Keyword;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub keyword: Keyword,
    /// Line indices, including the keyword's own line.
    pub range: Range<usize>,
}

/// Cluster a flat list of body lines into keyword sections. Each section runs from its
/// keyword line up to the next keyword line or the end of the body. Lines before the
/// first keyword are dropped.
pub fn cluster_sections<F>(lines: &[&str], classify: F) -> Vec<Section>
where
    F: Fn(&str) -> Option<Keyword>,
{
    let mut sections = Vec::new();
    let mut open: Option<(Keyword, usize)> = None;

    for (i, line) in lines.iter().enumerate() {
        if let Some(keyword) = classify(line) {
            if let Some((kw, start)) = open.take() {
                sections.push(Section {
                    keyword: kw,
                    range: start..i,
                });
            }
            open = Some((keyword, i));
        }
    }

    if let Some((keyword, start)) = open {
        sections.push(Section {
            keyword,
            range: start..lines.len(),
        });
    }

    sections
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lines::classify_line;

    fn keywords(body: &str) -> Vec<Keyword> {
        let lines: Vec<&str> = body.split('\n').collect();
        cluster_sections(&lines, classify_line)
            .into_iter()
            .map(|s| s.keyword)
            .collect()
    }

    #[test]
    fn no_keywords_no_sections() {
        let lines = vec!["just some prose", "", "and more"];
        assert!(cluster_sections(&lines, classify_line).is_empty());
        assert!(cluster_sections(&[], classify_line).is_empty());
    }

    #[test]
    fn ranges_cover_until_next_keyword() {
        let lines = vec![
            "godoc header",
            "",
            "GET /x/:id",
            "",
            "Description",
            "Fetch one item.",
            "",
            "Parameter id",
        ];
        let sections = cluster_sections(&lines, classify_line);
        assert_eq!(
            sections,
            vec![
                Section { keyword: Keyword::Method, range: 2..4 },
                Section { keyword: Keyword::Description, range: 4..7 },
                Section { keyword: Keyword::Parameter, range: 7..8 },
            ]
        );
    }

    #[test]
    fn repeated_keywords_each_open_a_section() {
        let kinds = keywords("Error Response 400\n{}\nError Response 401\n{}");
        assert_eq!(kinds, vec![Keyword::ErrorResponse, Keyword::ErrorResponse]);
    }

    #[test]
    fn custom_classifier() {
        let lines = vec!["a", "NOTE", "b"];
        let sections = cluster_sections(&lines, |l| (l == "NOTE").then_some(Keyword::Notes));
        assert_eq!(sections, vec![Section { keyword: Keyword::Notes, range: 1..3 }]);
    }
}
