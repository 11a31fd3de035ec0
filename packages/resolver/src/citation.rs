//! Citation parsing.
//!
//! A citation is a law name immediately followed by an article reference:
//! `民法709条`, `憲法第二一条`, `地方自治法第252条の17`. Trailing text after the
//! reference is ignored.

use regex::Regex;
use std::sync::LazyLock;

use crate::numeral::is_numeral_char;

/// Article reference at the start of a string: optional `第`, numeral run,
/// `条`, optional `の` + numeral run.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^第?[0-9０-９〇一二三四五六七八九十百千万]+条(?:の[0-9０-９〇一二三四五六七八九十百千万]+)?")
        .expect("valid regex")
});

/// A citation split into its two parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCitation {
    /// Leading text before the article reference, trimmed.
    pub law_name_candidate: String,
    /// Article reference including its markers (e.g. `第709条`, `89条の2`).
    pub raw_article_token: String,
}

/// Parse free text into a citation.
///
/// The law name is the shortest non-empty leading run that is followed by an
/// article reference. A reference can only start at the beginning of a
/// numeral run, so `709条` alone has no law name and is rejected.
///
/// Returns `None` when the text does not contain a citation.
///
/// # Examples
/// ```
/// use roppou_resolver::citation::parse;
///
/// let citation = parse("民法709条").unwrap();
/// assert_eq!(citation.law_name_candidate, "民法");
/// assert_eq!(citation.raw_article_token, "709条");
///
/// assert!(parse("xyz").is_none());
/// ```
#[must_use]
pub fn parse(text: &str) -> Option<ParsedCitation> {
    let text = text.trim();
    let mut prev: Option<char> = None;

    for (i, c) in text.char_indices() {
        let starts_run = c == '第' || is_numeral_char(c);
        let inside_run = prev.is_some_and(|p| p == '第' || is_numeral_char(p));
        prev = Some(c);

        if i == 0 || !starts_run || inside_run {
            continue;
        }

        let law_name = text[..i].trim();
        if law_name.is_empty() {
            continue;
        }

        if let Some(reference) = ARTICLE_REFERENCE.find(&text[i..]) {
            return Some(ParsedCitation {
                law_name_candidate: law_name.to_string(),
                raw_article_token: reference.as_str().to_string(),
            });
        }
    }

    None
}
