use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use super::models::NewsRecord;
use crate::core::sources::types::NewsItem;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Single-table store for ingested news. The pool is capped at one
/// connection, so concurrent handlers serialize here rather than racing
/// the SQLite file.
#[derive(Debug, Clone)]
pub struct NewsRepository {
    pool: SqlitePool,
}

impl NewsRepository {
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// Append one item and return its assigned id. Links are not unique:
    /// re-ingesting a source inserts fresh rows.
    pub async fn insert(&self, item: &NewsItem) -> Result<i64, StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO news (title, description, date, link)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&item.title)
        .bind(&item.description)
        .bind(&item.date)
        .bind(&item.link)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn list_recent(&self, limit: i64) -> Result<Vec<NewsRecord>, StorageError> {
        let rows = sqlx::query_as::<_, NewsRecord>(
            r#"
            SELECT id, title, description, date, link
            FROM news
            ORDER BY id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Wildcard-wrapped substring match on the title. The empty fragment
    /// matches every record.
    pub async fn search_by_title(&self, fragment: &str) -> Result<Vec<NewsRecord>, StorageError> {
        let rows = sqlx::query_as::<_, NewsRecord>(
            r#"
            SELECT id, title, description, date, link
            FROM news
            WHERE title LIKE '%' || ?1 || '%'
            "#,
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn delete_all(&self) -> Result<u64, StorageError> {
        let affected = sqlx::query("DELETE FROM news")
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(affected)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    fn make_item(title: &str, link: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            description: String::new(),
            date: String::new(),
            link: link.to_string(),
        }
    }

    #[tokio::test]
    async fn migration_creates_news_table() {
        let repository = NewsRepository::connect("sqlite::memory:")
            .await
            .expect("connect must succeed");

        let columns = sqlx::query("PRAGMA table_info(news)")
            .fetch_all(&repository.pool)
            .await
            .expect("pragma should succeed");
        let names: Vec<String> = columns
            .iter()
            .map(|row| row.get::<String, _>("name"))
            .collect();

        assert_eq!(names, vec!["id", "title", "description", "date", "link"]);
    }

    #[tokio::test]
    async fn insert_returns_strictly_increasing_ids() {
        let repository = NewsRepository::connect("sqlite::memory:")
            .await
            .expect("connect must succeed");

        let mut previous = 0;
        for index in 0..5 {
            let id = repository
                .insert(&make_item(
                    &format!("Item {index}"),
                    &format!("https://example.com/{index}"),
                ))
                .await
                .expect("insert must succeed");
            assert!(id > previous);
            previous = id;
        }
    }

    #[tokio::test]
    async fn list_recent_orders_descending_and_caps_at_limit() {
        let repository = NewsRepository::connect("sqlite::memory:")
            .await
            .expect("connect must succeed");
        for index in 0..120 {
            repository
                .insert(&make_item(
                    &format!("Item {index}"),
                    &format!("https://example.com/{index}"),
                ))
                .await
                .expect("insert must succeed");
        }

        let recent = repository
            .list_recent(100)
            .await
            .expect("list must succeed");

        assert_eq!(recent.len(), 100);
        assert!(recent.windows(2).all(|pair| pair[0].id > pair[1].id));
        assert_eq!(recent[0].title, "Item 119");
    }

    #[tokio::test]
    async fn search_matches_title_substring() {
        let repository = NewsRepository::connect("sqlite::memory:")
            .await
            .expect("connect must succeed");
        repository
            .insert(&make_item("Rust release notes", "https://example.com/1"))
            .await
            .expect("insert must succeed");
        repository
            .insert(&make_item("Weather report", "https://example.com/2"))
            .await
            .expect("insert must succeed");

        let matched = repository
            .search_by_title("release")
            .await
            .expect("search must succeed");
        let missed = repository
            .search_by_title("sports")
            .await
            .expect("search must succeed");

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Rust release notes");
        assert!(missed.is_empty());
    }

    #[tokio::test]
    async fn empty_fragment_matches_every_record() {
        let repository = NewsRepository::connect("sqlite::memory:")
            .await
            .expect("connect must succeed");
        for index in 0..3 {
            repository
                .insert(&make_item(
                    &format!("Item {index}"),
                    &format!("https://example.com/{index}"),
                ))
                .await
                .expect("insert must succeed");
        }

        let all = repository
            .search_by_title("")
            .await
            .expect("search must succeed");

        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn duplicate_links_produce_separate_rows() {
        let repository = NewsRepository::connect("sqlite::memory:")
            .await
            .expect("connect must succeed");
        let item = make_item("Repeated story", "https://example.com/same");

        repository.insert(&item).await.expect("first insert");
        repository.insert(&item).await.expect("second insert");

        let rows = repository
            .search_by_title("Repeated")
            .await
            .expect("search must succeed");
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn delete_all_empties_the_table() {
        let repository = NewsRepository::connect("sqlite::memory:")
            .await
            .expect("connect must succeed");
        for index in 0..4 {
            repository
                .insert(&make_item(
                    &format!("Item {index}"),
                    &format!("https://example.com/{index}"),
                ))
                .await
                .expect("insert must succeed");
        }

        let deleted = repository.delete_all().await.expect("delete must succeed");
        let remaining = repository
            .list_recent(100)
            .await
            .expect("list must succeed");

        assert_eq!(deleted, 4);
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    async fn file_backed_database_persists_across_connections() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        let database_url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("news.db").to_string_lossy()
        );

        {
            let repository = NewsRepository::connect(&database_url)
                .await
                .expect("first connect must succeed");
            repository
                .insert(&make_item("Persistent story", "https://example.com/p"))
                .await
                .expect("insert must succeed");
            repository.close().await;
        }

        let reopened = NewsRepository::connect(&database_url)
            .await
            .expect("second connect must succeed");
        let rows = reopened
            .list_recent(100)
            .await
            .expect("list must succeed");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Persistent story");
    }
}
