use roxmltree::{Document, Node};

use crate::core::sources::fetcher::fetch_page;
use crate::core::sources::types::NewsItem;
use crate::core::sources::SourceError;

#[derive(Debug, thiserror::Error)]
pub enum FeedParseError {
    #[error("feed xml parse error: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// News.mail.ru feeds wrap title and description in literal CDATA markers
/// that survive into the decoded text; strip them before persistence.
pub async fn fetch_mail_feed(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<NewsItem>, SourceError> {
    let body = fetch_page(client, url).await?;
    Ok(extract_mail_items(&body)?)
}

/// News.yandex.ru feeds carry the same item shape but no marker noise, so
/// the text is stored verbatim.
pub async fn fetch_yandex_feed(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<NewsItem>, SourceError> {
    let body = fetch_page(client, url).await?;
    Ok(extract_yandex_items(&body)?)
}

pub fn extract_mail_items(xml: &str) -> Result<Vec<NewsItem>, FeedParseError> {
    let document = Document::parse(xml)?;
    Ok(collect_items(&document, true))
}

pub fn extract_yandex_items(xml: &str) -> Result<Vec<NewsItem>, FeedParseError> {
    let document = Document::parse(xml)?;
    Ok(collect_items(&document, false))
}

fn collect_items(document: &Document<'_>, strip_markers: bool) -> Vec<NewsItem> {
    document
        .descendants()
        .filter(|node| node.has_tag_name("item"))
        .map(|item| {
            let mut title = child_text(item, "title");
            let mut description = child_text(item, "description");
            if strip_markers {
                title = strip_cdata_markers(&title);
                description = strip_cdata_markers(&description);
            }
            NewsItem {
                title,
                description,
                date: child_text(item, "pubDate"),
                link: child_text(item, "guid"),
            }
        })
        .collect()
}

fn child_text(item: Node<'_, '_>, tag: &str) -> String {
    item.children()
        .find(|node| node.has_tag_name(tag))
        .and_then(|node| node.text())
        .unwrap_or_default()
        .to_string()
}

fn strip_cdata_markers(text: &str) -> String {
    text.replace("<![CDATA[", "").replace("]]>", "")
}
