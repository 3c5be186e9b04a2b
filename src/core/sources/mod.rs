pub mod fetcher;
pub mod html;
pub mod rss;
pub mod types;

/// Failure of a whole source: the remote page could not be retrieved, or a
/// feed body could not be parsed as XML. Either way no items were extracted.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error(transparent)]
    Fetch(#[from] fetcher::FetchError),
    #[error(transparent)]
    Parse(#[from] rss::FeedParseError),
}

#[derive(Debug, Clone, Default)]
pub struct SourceService;

impl SourceService {
    pub fn name(&self) -> &'static str {
        "sources"
    }

    pub fn status(&self) -> &'static str {
        "ready"
    }
}
