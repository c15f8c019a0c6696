//! Reserved `key:value` tags in the header body
//!
//! Each tag is described by a rule: its key and the pattern its value must
//! match. Rules are scanned independently so tag order in the header never
//! matters; the title ends at the earliest tag found by any rule.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Reserved tag keys (matched case-sensitively)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKey {
    /// `year:<digits>`
    Year,
    /// `phase:<token>`
    Phase,
    /// `week:<token>`
    Week,
    /// `status:<token>`
    Status,
}

impl TagKey {
    /// Key text as written in commit messages
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Phase => "phase",
            Self::Week => "week",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word boundary over ASCII word characters only; non-ASCII letters count
/// as separators
const ASCII_BOUNDARY: &str = r"(?-u:\b)";

struct TagRule {
    key: TagKey,
    /// Captures the tag value (group 1)
    value: Regex,
    /// Any `key:` occurrence with a non-empty value, used to bound the title
    boundary: Regex,
}

impl TagRule {
    fn new(key: TagKey, value_pattern: &str) -> Self {
        let name = key.as_str();
        Self {
            key,
            value: Regex::new(&format!(
                r"{ASCII_BOUNDARY}{name}:({value_pattern}){ASCII_BOUNDARY}"
            ))
            .expect("hardcoded tag pattern is valid"),
            boundary: Regex::new(&format!(r"{ASCII_BOUNDARY}{name}:\S+"))
                .expect("hardcoded tag pattern is valid"),
        }
    }
}

static RULES: LazyLock<[TagRule; 4]> = LazyLock::new(|| {
    [
        TagRule::new(TagKey::Year, "[0-9]+"),
        TagRule::new(TagKey::Phase, r"\S+"),
        TagRule::new(TagKey::Week, r"\S+"),
        TagRule::new(TagKey::Status, r"\S+"),
    ]
});

/// Raw tag values found in a header body
///
/// Only the first occurrence of each key is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderTags<'a> {
    /// `year:` value (digits only)
    pub year: Option<&'a str>,
    /// `phase:` value
    pub phase: Option<&'a str>,
    /// `week:` value
    pub week: Option<&'a str>,
    /// `status:` value, not yet validated
    pub status: Option<&'a str>,
}

impl<'a> HeaderTags<'a> {
    fn set(&mut self, key: TagKey, value: &'a str) {
        let slot = match key {
            TagKey::Year => &mut self.year,
            TagKey::Phase => &mut self.phase,
            TagKey::Week => &mut self.week,
            TagKey::Status => &mut self.status,
        };
        *slot = Some(value);
    }
}

/// Scan a header body for every reserved tag
pub fn scan_tags(body: &str) -> HeaderTags<'_> {
    let mut tags = HeaderTags::default();
    for rule in RULES.iter() {
        if let Some(value) = rule.value.captures(body).and_then(|c| c.get(1)) {
            tags.set(rule.key, value.as_str());
        }
    }
    tags
}

/// Byte offset where the title ends: the start of the earliest tag of any key
///
/// Returns `body.len()` when the body carries no tags.
pub fn title_end(body: &str) -> usize {
    RULES
        .iter()
        .filter_map(|rule| rule.boundary.find(body))
        .map(|m| m.start())
        .min()
        .unwrap_or(body.len())
}
