//! Full-document adapter for the JSON object tree shape.
//!
//! ```text
//! { "Law": { "Article": [ { "Num": "709",
//!                           "Paragraph": [ { "Sentence": [ { "Text": "..." } ] } ] } ] } }
//! ```
//!
//! `Article`, `Paragraph` and `Sentence` may each be a single object instead
//! of a list. Articles nested deeper (chapters, sections) are found as well.

use serde_json::Value;

use super::{one_or_many, DocumentAdapter};
use crate::error::{ResolverError, Result};
use crate::types::{ArticleNode, SourceTier};

/// Adapter for JSON law documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocumentAdapter;

impl DocumentAdapter for JsonDocumentAdapter {
    fn tier(&self) -> SourceTier {
        SourceTier::FallbackJson
    }

    fn list_articles(&self, body: &str) -> Result<Vec<ArticleNode>> {
        let doc: Value = serde_json::from_str(body)?;

        let mut articles = Vec::new();
        collect_articles(&doc, &mut articles);

        if articles.is_empty() && !has_article_key(&doc) {
            return Err(ResolverError::missing("Article", "JSON law document"));
        }
        Ok(articles)
    }
}

/// Depth-first walk collecting every `Article` entry in document order.
fn collect_articles(value: &Value, out: &mut Vec<ArticleNode>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if key == "Article" {
                    out.extend(
                        one_or_many(child)
                            .into_iter()
                            .filter(|a| a.is_object())
                            .map(article_node),
                    );
                } else {
                    collect_articles(child, out);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_articles(item, out);
            }
        }
        _ => {}
    }
}

fn has_article_key(value: &Value) -> bool {
    match value {
        Value::Object(map) => map
            .iter()
            .any(|(key, child)| key == "Article" || has_article_key(child)),
        Value::Array(items) => items.iter().any(has_article_key),
        _ => false,
    }
}

fn article_node(article: &Value) -> ArticleNode {
    let num = match article.get("Num") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };

    ArticleNode {
        num,
        sentence: first_sentence(article),
    }
}

/// `Paragraph[0].Sentence[0].Text` with singleton handling at each level.
///
/// A sentence may also be a bare string.
pub(crate) fn first_sentence(article: &Value) -> Option<String> {
    let paragraph = one_or_many(article.get("Paragraph")?).into_iter().next()?;
    let sentence = one_or_many(paragraph.get("Sentence")?).into_iter().next()?;

    let text = match sentence {
        Value::String(s) => s.as_str(),
        other => other.get("Text")?.as_str()?,
    };
    Some(text.trim().to_string())
}
