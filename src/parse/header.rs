//! Header line: `[type] body`

use crate::parse::Rejection;
use crate::types::SubmissionType;

/// A header line split into its type prefix and the remaining body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Submission type from the bracket
    pub kind: SubmissionType,
    /// Trimmed text after the bracket
    pub body: &'a str,
}

/// Split a trimmed header line into `[type]` and body
///
/// The bracket must open at position 0 and hold at least one character.
pub fn split_header(line: &str) -> Result<Header<'_>, Rejection> {
    let rest = line.strip_prefix('[').ok_or(Rejection::MissingTypePrefix)?;
    let close = rest.find(']').ok_or(Rejection::MissingTypePrefix)?;
    let tag = &rest[..close];
    if tag.is_empty() {
        return Err(Rejection::MissingTypePrefix);
    }

    let kind =
        SubmissionType::from_tag(tag).ok_or_else(|| Rejection::UnknownType(tag.to_string()))?;

    let body = rest[close + 1..].trim();
    if body.is_empty() {
        return Err(Rejection::EmptyBody);
    }

    Ok(Header { kind, body })
}
