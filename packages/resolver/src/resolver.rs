//! Article resolution pipeline.
//!
//! `text → citation → article number → law id → tiers → outcome`.
//!
//! The tiers are tried in a fixed order and each yields a value: text,
//! nothing, or an adapter failure. The first text wins. There is exactly one
//! fallback tier and no retries, so a query costs at most two external calls.

use crate::adapter::{adapter_for, find_article, primary};
use crate::citation;
use crate::config::ResolverConfig;
use crate::error::{ResolverError, Result};
use crate::numeral::{normalize, ArticleNumber};
use crate::registry::LawRegistry;
use crate::reply::ReplyFormatter;
use crate::source::{HttpLawSource, LawSource};
use crate::types::{ArticleText, ResolutionOutcome, SourceTier};

/// Data source tiers in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    /// Single-article endpoint.
    Primary,
    /// Full document, any supported shape.
    Fallback,
}

const TIERS: [Tier; 2] = [Tier::Primary, Tier::Fallback];

/// Resolves citations to article text.
///
/// Holds only read-only state, so one instance can serve concurrent requests.
pub struct Resolver {
    registry: LawRegistry,
    source: Box<dyn LawSource>,
    formatter: ReplyFormatter,
}

impl Resolver {
    /// Create a resolver backed by the e-Gov law API.
    pub fn new(registry: LawRegistry, config: &ResolverConfig) -> Result<Self> {
        let source = HttpLawSource::new(config)?;
        Ok(Self::with_source(
            registry,
            source,
            ReplyFormatter::new(config.document_base_url.clone()),
        ))
    }

    /// Create a resolver backed by the registry file and API named in `config`.
    pub fn from_config(config: &ResolverConfig) -> Result<Self> {
        Self::new(LawRegistry::load(&config.lawlist_path), config)
    }

    /// Create a resolver with an arbitrary data source.
    pub fn with_source(
        registry: LawRegistry,
        source: impl LawSource + 'static,
        formatter: ReplyFormatter,
    ) -> Self {
        Self {
            registry,
            source: Box::new(source),
            formatter,
        }
    }

    /// The registry used for law name lookups.
    #[must_use]
    pub fn registry(&self) -> &LawRegistry {
        &self.registry
    }

    /// Resolve free text into an outcome. Never fails.
    pub fn resolve(&self, query: &str) -> ResolutionOutcome {
        let Some(citation) = citation::parse(query) else {
            tracing::debug!(query, "Query is not a citation");
            return ResolutionOutcome::QueryFormatInvalid;
        };

        let Some(article) = normalize(&citation.raw_article_token) else {
            tracing::debug!(token = %citation.raw_article_token, "Article number is unparsable");
            return ResolutionOutcome::QueryFormatInvalid;
        };

        let Some(entry) = self.registry.resolve(&citation.law_name_candidate) else {
            tracing::info!(law_name = %citation.law_name_candidate, "Law not in registry");
            return ResolutionOutcome::UnknownLaw {
                law_name_candidate: citation.law_name_candidate,
            };
        };

        for tier in TIERS {
            match self.try_tier(tier, &entry.id, &article) {
                Ok(Some(text)) => {
                    tracing::info!(
                        law_id = %entry.id,
                        article = %article,
                        tier = %text.source_tier,
                        "Article resolved"
                    );
                    return ResolutionOutcome::Resolved {
                        law_name: entry.canonical_name.clone(),
                        article,
                        law_id: entry.id.clone(),
                        text,
                    };
                }
                Ok(None) => {
                    tracing::info!(law_id = %entry.id, article = %article, tier = ?tier, "Article not in document");
                }
                Err(e) => {
                    tracing::warn!(law_id = %entry.id, article = %article, tier = ?tier, error = %e, "Tier failed");
                }
            }
        }

        ResolutionOutcome::ArticleNotFound {
            law_name: entry.canonical_name.clone(),
            law_id: entry.id.clone(),
            article,
        }
    }

    /// Resolve free text and format the reply.
    pub fn answer(&self, query: &str) -> String {
        let outcome = self.resolve(query);
        tracing::debug!(outcome = outcome.kind(), "Query answered");
        self.formatter.format(&outcome)
    }

    fn try_tier(
        &self,
        tier: Tier,
        law_id: &str,
        article: &ArticleNumber,
    ) -> Result<Option<ArticleText>> {
        match tier {
            Tier::Primary => {
                let body = self.source.fetch_article(law_id, article)?;
                let sentence = primary::extract_sentence(&body)?;
                Ok(Some(ArticleText {
                    sentence,
                    source_tier: SourceTier::Primary,
                }))
            }
            Tier::Fallback => {
                let body = self.source.fetch_law(law_id)?;
                let adapter = adapter_for(&body).ok_or_else(|| ResolverError::UnknownShape {
                    law_id: law_id.to_string(),
                })?;
                find_article(adapter, &body, article)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryEntry;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// In-memory source with canned bodies and call counters.
    #[derive(Default)]
    struct FakeSource {
        article: Option<String>,
        law: Option<String>,
        article_calls: Arc<AtomicUsize>,
        law_calls: Arc<AtomicUsize>,
    }

    impl LawSource for FakeSource {
        fn fetch_article(&self, _law_id: &str, _article: &ArticleNumber) -> Result<String> {
            self.article_calls.fetch_add(1, Ordering::SeqCst);
            self.article.clone().ok_or(ResolverError::Status {
                status: 500,
                url: "fake://articles".to_string(),
            })
        }

        fn fetch_law(&self, _law_id: &str) -> Result<String> {
            self.law_calls.fetch_add(1, Ordering::SeqCst);
            self.law.clone().ok_or(ResolverError::Status {
                status: 503,
                url: "fake://lawdata".to_string(),
            })
        }
    }

    fn registry() -> LawRegistry {
        LawRegistry::from_entries([
            RegistryEntry {
                canonical_name: "民法".to_string(),
                id: "129AC0000000089".to_string(),
                aliases: vec![],
            },
            RegistryEntry {
                canonical_name: "日本国憲法".to_string(),
                id: "321CONSTITUTION".to_string(),
                aliases: vec!["憲法".to_string()],
            },
        ])
    }

    fn resolver(source: FakeSource) -> Resolver {
        Resolver::with_source(registry(), source, ReplyFormatter::default())
    }

    const PRIMARY_709: &str =
        r#"{"Article": [{"Paragraph": [{"Sentence": [{"Text": "故意又は過失によって他人の権利…"}]}]}]}"#;

    const CONSTITUTION_XML: &str = r#"<Law><MainProvision>
        <Article Num="21"><Paragraph Num="1"><ParagraphSentence>
            <Sentence Num="1">集会…</Sentence>
        </ParagraphSentence></Paragraph></Article>
    </MainProvision></Law>"#;

    #[test]
    fn test_primary_success() {
        let outcome = resolver(FakeSource {
            article: Some(PRIMARY_709.to_string()),
            ..Default::default()
        })
        .resolve("民法709条");

        let ResolutionOutcome::Resolved { law_name, article, law_id, text } = outcome else {
            panic!("expected Resolved, got {outcome:?}");
        };
        assert_eq!(law_name, "民法");
        assert_eq!(article.canonical(), "709");
        assert_eq!(law_id, "129AC0000000089");
        assert_eq!(text.sentence, "故意又は過失によって他人の権利…");
        assert_eq!(text.source_tier, SourceTier::Primary);
    }

    #[test]
    fn test_primary_success_skips_fallback() {
        let law_calls = Arc::new(AtomicUsize::new(0));
        resolver(FakeSource {
            article: Some(PRIMARY_709.to_string()),
            law_calls: law_calls.clone(),
            ..Default::default()
        })
        .resolve("民法709条");
        assert_eq!(law_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_fallback_xml_after_primary_failure() {
        let outcome = resolver(FakeSource {
            law: Some(CONSTITUTION_XML.to_string()),
            ..Default::default()
        })
        .resolve("憲法21条");

        let ResolutionOutcome::Resolved { text, law_name, .. } = outcome else {
            panic!("expected Resolved, got {outcome:?}");
        };
        assert_eq!(law_name, "日本国憲法");
        assert_eq!(text.sentence, "集会…");
        assert_eq!(text.source_tier, SourceTier::FallbackXml);
    }

    #[test]
    fn test_fallback_json_after_primary_schema_mismatch() {
        let outcome = resolver(FakeSource {
            article: Some(r#"{"Result": {"Code": "1"}}"#.to_string()),
            law: Some(
                r#"{"Law": {"Article": {"Num": "709", "Paragraph": {"Sentence": {"Text": "全文から"}}}}}"#
                    .to_string(),
            ),
            ..Default::default()
        })
        .resolve("民法第七〇九条");

        let ResolutionOutcome::Resolved { text, .. } = outcome else {
            panic!("expected Resolved, got {outcome:?}");
        };
        assert_eq!(text.sentence, "全文から");
        assert_eq!(text.source_tier, SourceTier::FallbackJson);
    }

    #[test]
    fn test_both_tiers_fail() {
        let article_calls = Arc::new(AtomicUsize::new(0));
        let law_calls = Arc::new(AtomicUsize::new(0));
        let outcome = resolver(FakeSource {
            article_calls: article_calls.clone(),
            law_calls: law_calls.clone(),
            ..Default::default()
        })
        .resolve("憲法21条");

        assert_eq!(
            outcome,
            ResolutionOutcome::ArticleNotFound {
                law_name: "日本国憲法".to_string(),
                law_id: "321CONSTITUTION".to_string(),
                article: normalize("21").unwrap(),
            }
        );
        assert_eq!(article_calls.load(Ordering::SeqCst), 1);
        assert_eq!(law_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_article_missing_from_document() {
        let outcome = resolver(FakeSource {
            law: Some(CONSTITUTION_XML.to_string()),
            ..Default::default()
        })
        .resolve("憲法22条");
        assert_eq!(outcome.kind(), "article_not_found");
    }

    #[test]
    fn test_unrecognized_fallback_shape() {
        let outcome = resolver(FakeSource {
            law: Some("Service Unavailable".to_string()),
            ..Default::default()
        })
        .resolve("憲法21条");
        assert_eq!(outcome.kind(), "article_not_found");
    }

    #[test]
    fn test_query_format_invalid() {
        let source = FakeSource::default();
        let calls = source.article_calls.clone();
        let resolver = resolver(source);

        assert_eq!(resolver.resolve("xyz"), ResolutionOutcome::QueryFormatInvalid);
        assert_eq!(resolver.resolve("民法七百九条"), ResolutionOutcome::QueryFormatInvalid);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unknown_law() {
        assert_eq!(
            resolver(FakeSource::default()).resolve("存在しない法1条"),
            ResolutionOutcome::UnknownLaw {
                law_name_candidate: "存在しない法".to_string()
            }
        );
    }

    #[test]
    fn test_empty_registry_reports_unknown_law() {
        let resolver = Resolver::with_source(
            LawRegistry::new(),
            FakeSource::default(),
            ReplyFormatter::default(),
        );
        assert_eq!(resolver.resolve("民法709条").kind(), "unknown_law");
    }

    #[test]
    fn test_answer_formats_reply() {
        let reply = resolver(FakeSource {
            article: Some(PRIMARY_709.to_string()),
            ..Default::default()
        })
        .answer("民法709条");
        assert_eq!(
            reply,
            "【民法 第709条】\n故意又は過失によって他人の権利…\n\n📎 https://laws.e-gov.go.jp/document?lawid=129AC0000000089"
        );
    }
}
