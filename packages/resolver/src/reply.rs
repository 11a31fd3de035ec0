//! User-facing reply text for each resolution outcome.

use crate::config::{document_url, DEFAULT_DOCUMENT_BASE_URL};
use crate::types::ResolutionOutcome;

/// Reply for text that is not a citation.
pub const INVALID_FORMAT_MESSAGE: &str = "法令名＋条番号の形式で送ってください（例：民法709条）";

/// Turns outcomes into chat replies.
#[derive(Debug, Clone)]
pub struct ReplyFormatter {
    document_base_url: String,
}

impl Default for ReplyFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_DOCUMENT_BASE_URL)
    }
}

impl ReplyFormatter {
    /// Create a formatter linking to documents under `document_base_url`.
    pub fn new(document_base_url: impl Into<String>) -> Self {
        Self {
            document_base_url: document_base_url.into(),
        }
    }

    /// Format an outcome. Never returns an empty string.
    #[must_use]
    pub fn format(&self, outcome: &ResolutionOutcome) -> String {
        match outcome {
            ResolutionOutcome::Resolved {
                law_name,
                article,
                law_id,
                text,
            } => format!(
                "【{law_name} {}】\n{}\n\n📎 {}",
                article.label(),
                text.sentence,
                document_url(&self.document_base_url, law_id)
            ),
            ResolutionOutcome::QueryFormatInvalid => INVALID_FORMAT_MESSAGE.to_string(),
            ResolutionOutcome::UnknownLaw { law_name_candidate } => format!(
                "「{law_name_candidate}」は未対応の法令です。\n法令名の誤記か、未登録の法令の可能性があります。"
            ),
            ResolutionOutcome::ArticleNotFound {
                law_name, article, ..
            } => format!(
                "{law_name} {}の取得に失敗しました。\n・条番号が存在しない\n・未対応の法令\n・通信エラー\nのいずれかの可能性があります。",
                article.label()
            ),
        }
    }
}
