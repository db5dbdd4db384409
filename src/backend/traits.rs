// Data source and report generator traits.
//
// Both are async because the production implementations are HTTP calls.

use anyhow::Result;
use async_trait::async_trait;

use crate::asteroid::models::RawAsteroidRecord;

/// Supplies the current set of raw asteroid records.
#[async_trait]
pub trait AsteroidSource: Send + Sync {
    /// Fetch every record the source currently holds.
    async fn fetch_records(&self) -> Result<Vec<RawAsteroidRecord>>;

    /// Fetch a single record by id. Returns `Ok(None)` when it doesn't exist.
    ///
    /// Default implementation fetches everything and filters; sources with
    /// a per-record endpoint override it.
    async fn fetch_record(&self, id: &str) -> Result<Option<RawAsteroidRecord>> {
        let records = self.fetch_records().await?;
        Ok(records.into_iter().find(|r| r.id == id))
    }
}

/// Produces a rendered (HTML) report for a set of record ids.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn generate_report(&self, asteroid_ids: &[String]) -> Result<String>;
}
