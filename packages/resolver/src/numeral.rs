//! Article number normalization.
//!
//! Citations and API documents spell article numbers in several ways:
//! half-width digits (`709`), full-width digits (`７０９`), positional kanji
//! digits (`七〇九`), with or without the `第`/`条` markers, and with the
//! sub-article connector `の` (`第89条の2`). All of these are reduced to one
//! canonical token, `"<main>"` or `"<main>-<sub>"`.
//!
//! Statute documents spell sub-articles with an underscore (`Num="89_2"`), so
//! an underscore between two digit groups is a connector as well.
//!
//! Only single-digit kanji are mapped. Multiplier kanji such as `十`, `百`,
//! `千` and `万` would require numeral arithmetic and are rejected instead of
//! being guessed at.

use std::fmt;

/// Marker preceding an article number.
const ORDINAL_MARKER: char = '第';

/// Marker following an article number.
const ARTICLE_MARKER: char = '条';

/// Connector introducing a sub-article number.
const SUB_ARTICLE_CONNECTOR: char = 'の';

/// Canonical connector used in normalized tokens.
const CANONICAL_CONNECTOR: char = '-';

/// Connector used by statute documents (`89_2`). Stray leading or trailing
/// occurrences are dropped.
const DOCUMENT_CONNECTOR: char = '_';

/// Canonical article number, optionally carrying a sub-article.
///
/// Equality is string equality on the canonical digits: `"709"` and `"0709"`
/// are different articles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleNumber {
    main: String,
    sub: Option<String>,
}

impl ArticleNumber {
    /// Main article digits.
    #[must_use]
    pub fn main(&self) -> &str {
        &self.main
    }

    /// Sub-article digits, if any.
    #[must_use]
    pub fn sub(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// Canonical token (`"89"` or `"89-2"`).
    #[must_use]
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    /// Human-readable label (`"第89条"` or `"第89条の2"`).
    #[must_use]
    pub fn label(&self) -> String {
        match &self.sub {
            Some(sub) => format!(
                "{ORDINAL_MARKER}{}{ARTICLE_MARKER}{SUB_ARTICLE_CONNECTOR}{sub}",
                self.main
            ),
            None => format!("{ORDINAL_MARKER}{}{ARTICLE_MARKER}", self.main),
        }
    }
}

impl fmt::Display for ArticleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub {
            Some(sub) => write!(f, "{}{CANONICAL_CONNECTOR}{sub}", self.main),
            None => write!(f, "{}", self.main),
        }
    }
}

/// Map one numeral character to an ASCII digit.
///
/// Returns `None` for anything that is not a recognized single-digit encoding.
fn digit_of(c: char) -> Option<char> {
    match c {
        '0'..='9' => Some(c),
        '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32),
        '〇' => Some('0'),
        '一' => Some('1'),
        '二' => Some('2'),
        '三' => Some('3'),
        '四' => Some('4'),
        '五' => Some('5'),
        '六' => Some('6'),
        '七' => Some('7'),
        '八' => Some('8'),
        '九' => Some('9'),
        _ => None,
    }
}

/// Whether a character can appear inside a raw numeral run.
///
/// This is wider than what [`normalize`] accepts: multiplier kanji are
/// recognized as numerals so that a citation like `民法七百九条` is scanned as
/// one run and then rejected, rather than split at `百`.
#[must_use]
pub fn is_numeral_char(c: char) -> bool {
    digit_of(c).is_some() || matches!(c, '十' | '百' | '千' | '万')
}

/// Convert one connector-free segment into ASCII digits.
fn digits_of(segment: &str) -> Option<String> {
    let digits = segment.chars().map(digit_of).collect::<Option<String>>()?;
    (!digits.is_empty()).then_some(digits)
}

/// Normalize a raw article token.
///
/// Returns `None` when the token is unparsable: empty after stripping
/// markers, containing characters outside the digit encodings, containing
/// multiplier kanji, or containing more than one sub-article connector.
///
/// Already-canonical tokens normalize to themselves, and the document
/// spelling `89_2` is the same article as `89条の2`.
///
/// # Examples
/// ```
/// use roppou_resolver::numeral::normalize;
///
/// assert_eq!(normalize("第７０９条").unwrap().to_string(), "709");
/// assert_eq!(normalize("八九条の二").unwrap().to_string(), "89-2");
/// assert_eq!(normalize("89-2").unwrap().to_string(), "89-2");
/// assert_eq!(normalize("89_2").unwrap().to_string(), "89-2");
/// assert!(normalize("八十九").is_none());
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<ArticleNumber> {
    let stripped: String = raw
        .trim()
        .chars()
        .filter(|&c| c != ORDINAL_MARKER && c != ARTICLE_MARKER)
        .collect();

    let mut segments = stripped
        .trim_matches(DOCUMENT_CONNECTOR)
        .split(|c: char| {
            c == SUB_ARTICLE_CONNECTOR || c == CANONICAL_CONNECTOR || c == DOCUMENT_CONNECTOR
        });
    let main = digits_of(segments.next()?)?;
    let sub = match segments.next() {
        Some(segment) => Some(digits_of(segment)?),
        None => None,
    };
    if segments.next().is_some() {
        return None;
    }

    Some(ArticleNumber { main, sub })
}
