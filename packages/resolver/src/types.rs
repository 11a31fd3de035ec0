//! Core data types shared by the adapters, the resolver and the formatter.

use std::fmt;

use crate::numeral::ArticleNumber;

/// Data source an article text was obtained from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTier {
    /// Single-article endpoint.
    Primary,
    /// Full document, JSON object tree.
    FallbackJson,
    /// Full document, XML markup tree.
    FallbackXml,
}

impl SourceTier {
    /// Get the string value for logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::FallbackJson => "fallback-json",
            Self::FallbackXml => "fallback-xml",
        }
    }
}

impl fmt::Display for SourceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Article text plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleText {
    pub sentence: String,
    pub source_tier: SourceTier,
}

/// An article as listed in a full law document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleNode {
    /// Article number exactly as declared by the document (e.g. `"709"`, `"89_2"`).
    pub num: String,
    /// First sentence of the first paragraph, if present.
    pub sentence: Option<String>,
}

impl ArticleNode {
    /// The node's sentence, treating an empty string as absent.
    #[must_use]
    pub fn sentence(&self) -> Option<&str> {
        self.sentence.as_deref().filter(|s| !s.is_empty())
    }
}

/// Result of resolving one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// The article was found.
    Resolved {
        law_name: String,
        article: ArticleNumber,
        law_id: String,
        text: ArticleText,
    },
    /// The text is not a citation, or its article number is unparsable.
    QueryFormatInvalid,
    /// The law name is not in the registry.
    UnknownLaw { law_name_candidate: String },
    /// Both tiers were tried without yielding a sentence.
    ArticleNotFound {
        law_name: String,
        law_id: String,
        article: ArticleNumber,
    },
}

impl ResolutionOutcome {
    /// Short outcome name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Resolved { .. } => "resolved",
            Self::QueryFormatInvalid => "query_format_invalid",
            Self::UnknownLaw { .. } => "unknown_law",
            Self::ArticleNotFound { .. } => "article_not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_tier_as_str() {
        assert_eq!(SourceTier::Primary.as_str(), "primary");
        assert_eq!(SourceTier::FallbackJson.to_string(), "fallback-json");
        assert_eq!(SourceTier::FallbackXml.to_string(), "fallback-xml");
    }

    #[test]
    fn test_article_node_empty_sentence_is_absent() {
        let node = ArticleNode {
            num: "1".to_string(),
            sentence: Some(String::new()),
        };
        assert_eq!(node.sentence(), None);
    }

    #[test]
    fn test_outcome_kind() {
        assert_eq!(ResolutionOutcome::QueryFormatInvalid.kind(), "query_format_invalid");
        let unknown = ResolutionOutcome::UnknownLaw {
            law_name_candidate: "x".to_string(),
        };
        assert_eq!(unknown.kind(), "unknown_law");
    }
}
