use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::Endpoint;
use crate::parser;
use crate::source::{comment_text, Comment, CommentGroup};

// apidoc(name) at the start of a comment, name of at least 1 char, colon optional.
static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s/*]*apidoc\(([^)]+)\):?").unwrap());

/// Extract every apidoc block from the comment groups of one file, in source order.
///
/// A block starts at a comment beginning with `apidoc(name)` and runs until the next
/// such comment in the same group, or the end of the group. Blocks with a malformed
/// section are logged and skipped. Validation failures are logged, unless `strict`,
/// in which case the first one is returned as an error.
pub fn read_docs(groups: &[CommentGroup], strict: bool) -> Result<Vec<Endpoint>> {
    let mut endpoints = Vec::new();
    for group in groups {
        for block in split_blocks(&group.comments) {
            if let Some(endpoint) = read_doc(block, strict)? {
                endpoints.push(endpoint);
            }
        }
    }
    Ok(endpoints)
}

fn split_blocks(comments: &[Comment]) -> Vec<&[Comment]> {
    let starts: Vec<usize> = comments
        .iter()
        .enumerate()
        .filter(|(_, c)| MARKER_RE.is_match(&c.text))
        .map(|(i, _)| i)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(k, &start)| {
            let end = starts.get(k + 1).copied().unwrap_or(comments.len());
            &comments[start..end]
        })
        .collect()
}

fn read_doc(block: &[Comment], strict: bool) -> Result<Option<Endpoint>> {
    let text = comment_text(block);
    let Some(caps) = MARKER_RE.captures(&text) else {
        return Ok(None);
    };
    let (Some(marker), Some(name)) = (caps.get(0), caps.get(1)) else {
        return Ok(None);
    };
    let name = name.as_str();

    let body = &text[marker.end()..];
    if body.trim().is_empty() {
        debug!(apidoc = name, "empty apidoc block, skipping");
        return Ok(None);
    }

    let endpoint = match parser::parse_endpoint(name, body) {
        Ok(e) => e,
        Err(e) => {
            warn!(apidoc = name, "skipping apidoc block: {}", e);
            return Ok(None);
        }
    };

    if let Err(err) = endpoint.validate() {
        if strict {
            return Err(Error::Validation {
                name: name.to_string(),
                source: err,
            });
        }
        warn!(apidoc = name, "validation error: {}", err);
    }

    Ok(Some(endpoint))
}

// ── Tests ──
