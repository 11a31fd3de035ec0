//! Primary tier: the single-article endpoint.
//!
//! The response carries the requested article at the top level; its text is
//! read from `Article[0].Paragraph[0].Sentence[0].Text`. Any deviation from
//! that path is a schema failure and sends the resolver to the fallback tier.

use serde_json::Value;

use super::json::first_sentence;
use super::one_or_many;
use crate::error::{ResolverError, Result};

const CONTEXT: &str = "primary article response";

/// Extract the article sentence from a primary response body.
pub fn extract_sentence(body: &str) -> Result<String> {
    let doc: Value = serde_json::from_str(body)?;

    let article = doc
        .get("Article")
        .and_then(|a| one_or_many(a).into_iter().next())
        .ok_or_else(|| ResolverError::missing("Article", CONTEXT))?;

    first_sentence(article)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ResolverError::missing("Article[0].Paragraph[0].Sentence[0].Text", CONTEXT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_sentence() {
        let body = r#"{"Article": [{"Paragraph": [{"Sentence": [
            {"Text": "故意又は過失によって他人の権利又は法律上保護される利益を侵害した者は、これによって生じた損害を賠償する責任を負う。"}
        ]}]}]}"#;
        assert_eq!(
            extract_sentence(body).unwrap(),
            "故意又は過失によって他人の権利又は法律上保護される利益を侵害した者は、これによって生じた損害を賠償する責任を負う。"
        );
    }

    #[test]
    fn test_extract_sentence_singletons() {
        let body = r#"{"Article": {"Paragraph": {"Sentence": {"Text": "単数"}}}}"#;
        assert_eq!(extract_sentence(body).unwrap(), "単数");
    }

    #[test]
    fn test_missing_article() {
        let err = extract_sentence(r#"{"Result": {"Code": "1"}}"#).unwrap_err();
        assert!(matches!(err, ResolverError::MissingField { .. }));
    }

    #[test]
    fn test_missing_nested_text() {
        let err = extract_sentence(r#"{"Article": [{"Paragraph": [{"Sentence": [{}]}]}]}"#)
            .unwrap_err();
        assert!(matches!(err, ResolverError::MissingField { .. }));
    }

    #[test]
    fn test_wrong_type() {
        let err = extract_sentence(r#"{"Article": [{"Paragraph": [{"Sentence": [{"Text": 7}]}]}]}"#)
            .unwrap_err();
        assert!(matches!(err, ResolverError::MissingField { .. }));
    }

    #[test]
    fn test_non_json_body() {
        let err = extract_sentence("<html>error</html>").unwrap_err();
        assert!(matches!(err, ResolverError::JsonParse(_)));
    }
}
