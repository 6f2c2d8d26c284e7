use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use tree_sitter::{Node, Parser};

use crate::error::{Error, Result};

// Toolchain directives such as //go:generate or //nolint:errcheck are not doc text.
static DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9]+:[a-z0-9]").unwrap());

/// One `//` or `/* */` comment, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Byte range in the source file.
    pub span: Range<usize>,
    pub text: String,
}

/// Comments separated by nothing but whitespace with at most one line break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentGroup {
    pub comments: Vec<Comment>,
}

/// Read a Go source file and return its comment groups in file order.
pub fn load_file(path: &Path) -> Result<Vec<CommentGroup>> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let comments = parse_comments(&source)?.ok_or_else(|| Error::NoTree(path.to_path_buf()))?;
    debug!("{} comments in {}", comments.len(), path.display());
    Ok(group_comments(&source, comments))
}

/// Collect every comment node of a Go source. `None` when tree-sitter gives up.
pub fn parse_comments(source: &str) -> Result<Option<Vec<Comment>>> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_go::language())?;
    let Some(tree) = parser.parse(source, None) else {
        return Ok(None);
    };

    let mut comments = Vec::new();
    collect_comments(tree.root_node(), source, &mut comments);
    Ok(Some(comments))
}

fn collect_comments(node: Node, source: &str, out: &mut Vec<Comment>) {
    if node.kind() == "comment" {
        if let Some(text) = source.get(node.byte_range()) {
            out.push(Comment {
                span: node.byte_range(),
                text: text.to_string(),
            });
        }
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_comments(child, source, out);
    }
}

/// A comment joins the current group when only whitespace, with at most one line
/// break, separates it from the previous one. Code or a blank line in between starts
/// a new group, so a comment trailing a statement never extends the doc above it.
pub fn group_comments(source: &str, comments: Vec<Comment>) -> Vec<CommentGroup> {
    let mut groups: Vec<CommentGroup> = Vec::new();
    let mut current = CommentGroup::default();

    for comment in comments {
        let adjacent = current.comments.last().is_some_and(|prev| {
            source
                .get(prev.span.end..comment.span.start)
                .is_some_and(|gap| gap.trim().is_empty() && gap.matches('\n').count() <= 1)
        });
        if !adjacent && !current.comments.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
        current.comments.push(comment);
    }

    if !current.comments.is_empty() {
        groups.push(current);
    }
    groups
}

/// Plain text of a run of comments: delimiters removed (plus one space after `//`),
/// trailing whitespace stripped, leading blank lines dropped, interior blank runs
/// collapsed to one, and a single trailing newline.
pub fn comment_text(comments: &[Comment]) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for comment in comments {
        let text = comment.text.as_str();
        let content = if let Some(rest) = text.strip_prefix("//") {
            if let Some(rest) = rest.strip_prefix(' ') {
                rest
            } else if DIRECTIVE_RE.is_match(rest) {
                continue;
            } else {
                rest
            }
        } else if let Some(rest) = text.strip_prefix("/*") {
            rest.strip_suffix("*/").unwrap_or(rest)
        } else {
            text
        };
        lines.extend(content.split('\n').map(str::trim_end));
    }

    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    for line in lines {
        let prev_blank = kept.last().map_or(true, |l| l.is_empty());
        if !line.is_empty() || !prev_blank {
            kept.push(line);
        }
    }
    if kept.last().is_some_and(|l| l.is_empty()) {
        kept.pop();
    }

    if kept.is_empty() {
        String::new()
    } else {
        let mut text = kept.join("\n");
        text.push('\n');
        text
    }
}

// ── Tests ──
