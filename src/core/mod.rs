pub mod ingest;
pub mod sources;
pub mod storage;

use std::collections::BTreeMap;

use ingest::IngestService;
use sources::SourceService;
use storage::StorageService;

#[derive(Debug, Clone, Default)]
pub struct AppServices {
    sources: SourceService,
    storage: StorageService,
    ingest: IngestService,
}

impl AppServices {
    pub fn health_report(&self) -> BTreeMap<String, String> {
        let mut report = BTreeMap::new();
        report.insert(
            self.sources.name().to_string(),
            self.sources.status().to_string(),
        );
        report.insert(
            self.storage.name().to_string(),
            self.storage.status().to_string(),
        );
        report.insert(
            self.ingest.name().to_string(),
            self.ingest.status().to_string(),
        );
        report
    }
}
