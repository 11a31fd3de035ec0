//! Document adapters for the e-Gov law API.
//!
//! The primary tier answers a single article as JSON; see [`primary`]. The
//! fallback tier answers the whole law, either as a JSON object tree or as an
//! XML markup tree. Each full-document shape has a [`DocumentAdapter`] that
//! lists the document's articles; [`adapter_for`] picks one by sniffing the
//! body so callers never need to know which shape came back.

mod json;
pub mod primary;
mod xml;

pub use json::JsonDocumentAdapter;
pub use xml::XmlDocumentAdapter;

use crate::error::Result;
use crate::numeral::{normalize, ArticleNumber};
use crate::types::{ArticleNode, ArticleText, SourceTier};

/// Extracts article nodes from one full-document wire schema.
pub trait DocumentAdapter: Send + Sync {
    /// Tier recorded on text found by this adapter.
    fn tier(&self) -> SourceTier;

    /// List all article nodes of a document, in document order.
    ///
    /// Fails when the body does not follow this adapter's schema.
    fn list_articles(&self, body: &str) -> Result<Vec<ArticleNode>>;

    /// The sentence of a listed node, if it has one.
    fn sentence_of<'n>(&self, node: &'n ArticleNode) -> Option<&'n str> {
        node.sentence()
    }
}

static JSON_ADAPTER: JsonDocumentAdapter = JsonDocumentAdapter;
static XML_ADAPTER: XmlDocumentAdapter = XmlDocumentAdapter;

/// Pick the adapter matching a response body.
///
/// Returns `None` when the body looks like neither JSON nor XML.
#[must_use]
pub fn adapter_for(body: &str) -> Option<&'static dyn DocumentAdapter> {
    match body.trim_start_matches('\u{feff}').trim_start().chars().next()? {
        '{' | '[' => Some(&JSON_ADAPTER),
        '<' => Some(&XML_ADAPTER),
        _ => None,
    }
}

/// Scan a document for an article.
///
/// Each node's declared number goes through the same normalizer as the query;
/// the first node whose canonical number equals `target` is authoritative,
/// even if it carries no sentence. Nodes with unparsable numbers are skipped.
///
/// Returns `Ok(None)` when the document is well-formed but has no matching
/// article with text.
pub fn find_article(
    adapter: &dyn DocumentAdapter,
    body: &str,
    target: &ArticleNumber,
) -> Result<Option<ArticleText>> {
    let articles = adapter.list_articles(body)?;
    tracing::debug!(tier = %adapter.tier(), articles = articles.len(), "Scanning document");

    let Some(node) = articles
        .iter()
        .find(|node| normalize(&node.num).as_ref() == Some(target))
    else {
        return Ok(None);
    };

    Ok(adapter.sentence_of(node).map(|sentence| ArticleText {
        sentence: sentence.to_string(),
        source_tier: adapter.tier(),
    }))
}

/// Treat a JSON value that is sometimes an object and sometimes a list of
/// objects uniformly as a list.
pub(crate) fn one_or_many(value: &serde_json::Value) -> Vec<&serde_json::Value> {
    match value {
        serde_json::Value::Array(items) => items.iter().collect(),
        serde_json::Value::Null => Vec::new(),
        other => vec![other],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn target(raw: &str) -> ArticleNumber {
        normalize(raw).unwrap()
    }

    #[test]
    fn test_adapter_for_json() {
        let adapter = adapter_for(r#"  {"Law": {}}"#).unwrap();
        assert_eq!(adapter.tier(), SourceTier::FallbackJson);
    }

    #[test]
    fn test_adapter_for_xml() {
        let adapter = adapter_for("\u{feff}<?xml version=\"1.0\"?><Law/>").unwrap();
        assert_eq!(adapter.tier(), SourceTier::FallbackXml);
    }

    #[test]
    fn test_adapter_for_unknown() {
        assert!(adapter_for("Internal Server Error").is_none());
        assert!(adapter_for("").is_none());
    }

    #[test]
    fn test_one_or_many() {
        let single = json!({"Text": "a"});
        assert_eq!(one_or_many(&single).len(), 1);

        let list = json!([{"Text": "a"}, {"Text": "b"}]);
        assert_eq!(one_or_many(&list).len(), 2);

        assert!(one_or_many(&serde_json::Value::Null).is_empty());
    }

    #[test]
    fn test_find_article_first_match_wins() {
        let body = r#"<Law>
            <Article Num="21"><Sentence>最初</Sentence></Article>
            <Article Num="２１"><Sentence>重複</Sentence></Article>
        </Law>"#;
        let found = find_article(&XML_ADAPTER, body, &target("21")).unwrap().unwrap();
        assert_eq!(found.sentence, "最初");
        assert_eq!(found.source_tier, SourceTier::FallbackXml);
    }

    #[test]
    fn test_find_article_no_match() {
        let body = r#"{"Law": {"Article": {"Num": "1", "Paragraph": {"Sentence": {"Text": "x"}}}}}"#;
        let found = find_article(&JSON_ADAPTER, body, &target("2")).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_find_article_sub_article_not_confused() {
        let body = r#"{"Law": {"Article": [
            {"Num": "89の2", "Paragraph": {"Sentence": {"Text": "枝番"}}},
            {"Num": "89", "Paragraph": {"Sentence": {"Text": "本条"}}}
        ]}}"#;
        let found = find_article(&JSON_ADAPTER, body, &target("89")).unwrap().unwrap();
        assert_eq!(found.sentence, "本条");
    }

    #[test]
    fn test_find_article_document_sub_article_spelling() {
        let body = r#"<Law>
            <Article Num="89_2"><Sentence>第八十九条の二の本文</Sentence></Article>
            <Article Num="892"><Sentence>第八百九十二条の本文</Sentence></Article>
        </Law>"#;

        let sub = find_article(&XML_ADAPTER, body, &target("第89条の2")).unwrap().unwrap();
        assert_eq!(sub.sentence, "第八十九条の二の本文");

        let plain = find_article(&XML_ADAPTER, body, &target("892条")).unwrap().unwrap();
        assert_eq!(plain.sentence, "第八百九十二条の本文");
    }

    #[test]
    fn test_find_article_schema_error_propagates() {
        assert!(find_article(&XML_ADAPTER, "<Law>", &target("1")).is_err());
    }
}
