use scraper::{Html, Selector};

use crate::core::sources::fetcher::fetch_page;
use crate::core::sources::types::NewsItem;
use crate::core::sources::SourceError;

pub const MAIL_FRONT_PAGE: &str = "https://mail.ru";
pub const YANDEX_FRONT_PAGE: &str = "https://yandex.ru";

const MAIL_ITEM_SELECTOR: &str = ".news__list__item";
const YANDEX_ITEM_SELECTOR: &str = ".list__item-content";

/// Scrape the mail.ru front page. Only title and link are available there;
/// the link sits on an anchor nested inside the list item.
pub async fn fetch_mail_headlines(client: &reqwest::Client) -> Result<Vec<NewsItem>, SourceError> {
    let body = fetch_page(client, MAIL_FRONT_PAGE).await?;
    Ok(extract_mail_headlines(&body))
}

/// Scrape the yandex.ru front page. The list node is itself the anchor, so
/// the link comes from the node's own href attribute.
pub async fn fetch_yandex_headlines(client: &reqwest::Client) -> Result<Vec<NewsItem>, SourceError> {
    let body = fetch_page(client, YANDEX_FRONT_PAGE).await?;
    Ok(extract_yandex_headlines(&body))
}

pub fn extract_mail_headlines(html: &str) -> Vec<NewsItem> {
    let document = Html::parse_document(html);
    let item_selector = Selector::parse(MAIL_ITEM_SELECTOR).unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    document
        .select(&item_selector)
        .map(|node| {
            let link = node
                .select(&anchor_selector)
                .next()
                .and_then(|anchor| anchor.value().attr("href"))
                .unwrap_or_default();
            NewsItem::headline(node.text().collect(), link.to_string())
        })
        .collect()
}

pub fn extract_yandex_headlines(html: &str) -> Vec<NewsItem> {
    let document = Html::parse_document(html);
    let item_selector = Selector::parse(YANDEX_ITEM_SELECTOR).unwrap();

    document
        .select(&item_selector)
        .map(|node| {
            let link = node.value().attr("href").unwrap_or_default();
            NewsItem::headline(node.text().collect(), link.to_string())
        })
        .collect()
}
