//! Output Parser: turns raw model text into a title/body pair or a hashtag list.
//!
//! Title detection is best-effort: with two or more non-empty lines, a first
//! line shorter than 100 characters that starts with an uppercase letter is
//! taken as the title. A body whose first sentence is short and capitalized on
//! its own line is therefore misread as titled, and a lowercase or long
//! headline is kept in the body. Downstream consumers depend on this exact
//! boundary.

/// Exclusive upper bound on title length, in characters.
pub const MAX_TITLE_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOutput {
    pub title: Option<String>,
    pub content: String,
}

pub fn parse_output(raw: &str) -> ParsedOutput {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if let [first, rest @ ..] = lines.as_slice() {
        if !rest.is_empty() && looks_like_title(first) {
            return ParsedOutput {
                title: Some(first.to_string()),
                content: rest.join("\n"),
            };
        }
    }

    ParsedOutput {
        title: None,
        content: raw.trim().to_string(),
    }
}

fn looks_like_title(line: &str) -> bool {
    line.chars().count() < MAX_TITLE_CHARS
        && line.chars().next().is_some_and(char::is_uppercase)
}

/// Splits a comma-separated hashtag reply into at most `count` bare tags.
///
/// Each token is trimmed and loses one leading `#`; empty tokens are dropped.
pub fn parse_hashtags(raw: &str, count: usize) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .map(|tag| tag.strip_prefix('#').unwrap_or(tag))
        .filter(|tag| !tag.is_empty())
        .take(count)
        .map(str::to_string)
        .collect()
}
