use serde::{Deserialize, Serialize};

/// Normalized news item produced by a source adapter before persistence.
///
/// Sources differ in what they expose: the front-page scrapers only yield
/// title and link, the feeds also carry description and publication date.
/// Fields a source does not provide stay empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub date: String,
    pub link: String,
}

impl NewsItem {
    pub fn headline(title: String, link: String) -> Self {
        Self {
            title,
            description: String::new(),
            date: String::new(),
            link,
        }
    }
}
