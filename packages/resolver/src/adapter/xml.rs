//! Full-document adapter for the XML markup tree shape.
//!
//! Articles are `<Article Num="...">` elements anywhere in the tree; the text
//! is the first `<Sentence>` below the article.

use roxmltree::Document;

use super::DocumentAdapter;
use crate::error::{ResolverError, Result};
use crate::types::{ArticleNode, SourceTier};
use crate::xml::{collect_text, descendants_with_tag, first_descendant, get_attribute};

/// Adapter for XML law documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDocumentAdapter;

impl DocumentAdapter for XmlDocumentAdapter {
    fn tier(&self) -> SourceTier {
        SourceTier::FallbackXml
    }

    fn list_articles(&self, body: &str) -> Result<Vec<ArticleNode>> {
        let doc = Document::parse(body.trim_start_matches('\u{feff}'))?;
        let root = doc.root_element();

        // The API reports lookup errors as an XML envelope without a law body.
        if let Some(code) = first_descendant(root, "Code").map(collect_text) {
            if code != "0" && first_descendant(root, "Article").is_none() {
                let message = first_descendant(root, "Message")
                    .map(collect_text)
                    .unwrap_or_default();
                tracing::debug!(code = %code, message = %message, "Law API returned an error envelope");
                return Err(ResolverError::missing("Article", "XML error envelope"));
            }
        }

        let articles: Vec<ArticleNode> = descendants_with_tag(root, "Article")
            .map(|article| ArticleNode {
                num: get_attribute(article, "Num").unwrap_or_default().to_string(),
                sentence: first_descendant(article, "Sentence").map(collect_text),
            })
            .collect();

        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CONSTITUTION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DataRoot>
  <Result><Code>0</Code><Message/></Result>
  <ApplData>
    <LawFullText>
      <Law Era="Showa" Year="21" LawType="Constitution" Lang="ja">
        <LawBody>
          <MainProvision>
            <Chapter Num="3">
              <Article Num="21">
                <ArticleCaption>〔集会・結社・表現の自由、通信の秘密〕</ArticleCaption>
                <ArticleTitle>第二十一条</ArticleTitle>
                <Paragraph Num="1">
                  <ParagraphNum/>
                  <ParagraphSentence>
                    <Sentence Num="1">集会、結社及び言論、出版その他一切の表現の自由は、これを保障する。</Sentence>
                  </ParagraphSentence>
                </Paragraph>
                <Paragraph Num="2">
                  <ParagraphNum>２</ParagraphNum>
                  <ParagraphSentence>
                    <Sentence Num="1">検閲は、これをしてはならない。</Sentence>
                  </ParagraphSentence>
                </Paragraph>
              </Article>
              <Article Num="22">
                <Paragraph Num="1"><ParagraphSentence/></Paragraph>
              </Article>
            </Chapter>
          </MainProvision>
        </LawBody>
      </Law>
    </LawFullText>
  </ApplData>
</DataRoot>"#;

    #[test]
    fn test_list_articles() {
        let articles = XmlDocumentAdapter.list_articles(CONSTITUTION).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].num, "21");
        assert_eq!(
            articles[0].sentence(),
            Some("集会、結社及び言論、出版その他一切の表現の自由は、これを保障する。")
        );
    }

    #[test]
    fn test_article_without_sentence() {
        let articles = XmlDocumentAdapter.list_articles(CONSTITUTION).unwrap();
        assert_eq!(articles[1].num, "22");
        assert_eq!(articles[1].sentence(), None);
    }

    #[test]
    fn test_article_without_num() {
        let body = "<Law><Article><Sentence>番号なし</Sentence></Article></Law>";
        let articles = XmlDocumentAdapter.list_articles(body).unwrap();
        assert_eq!(articles[0].num, "");
    }

    #[test]
    fn test_error_envelope() {
        let body = r#"<DataRoot><Result><Code>1</Code><Message>法令が存在しません。</Message></Result></DataRoot>"#;
        let err = XmlDocumentAdapter.list_articles(body).unwrap_err();
        assert!(matches!(err, ResolverError::MissingField { .. }));
    }

    #[test]
    fn test_malformed_xml() {
        let err = XmlDocumentAdapter.list_articles("<Law><Article>").unwrap_err();
        assert!(matches!(err, ResolverError::XmlParse(_)));
    }
}
