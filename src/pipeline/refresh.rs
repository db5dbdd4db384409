// Fetch cycle: pull the current records from a source and rank them.
//
// Each refresh replaces the previous result wholesale. A fetch failure or
// a single invalid record produces one error and no records.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::asteroid::models::EnrichedAsteroidRecord;
use crate::backend::traits::AsteroidSource;
use crate::pipeline::enrich;

/// Fetch every record from `source`, enrich, and rank.
pub async fn run(source: &dyn AsteroidSource) -> Result<Vec<EnrichedAsteroidRecord>> {
    // Step 1: Fetch
    let raw = source
        .fetch_records()
        .await
        .context("Failed to fetch asteroid records")?;

    if raw.is_empty() {
        warn!("Data source returned no asteroid records");
        return Ok(Vec::new());
    }

    // Step 2: Enrich and rank
    let ranked = enrich::enrich_and_rank(&raw).context("Asteroid data failed validation")?;

    info!(
        count = ranked.len(),
        top_score = ranked.first().map(|r| r.importance_score).unwrap_or(0),
        "Ranked asteroid records"
    );

    Ok(ranked)
}

/// Fetch and enrich a single record. `Ok(None)` if the id is unknown.
pub async fn run_one(
    source: &dyn AsteroidSource,
    id: &str,
) -> Result<Option<EnrichedAsteroidRecord>> {
    let raw = source
        .fetch_record(id)
        .await
        .with_context(|| format!("Failed to fetch asteroid {id}"))?;

    match raw {
        Some(raw) => Ok(Some(
            enrich::enrich_record(&raw).context("Asteroid data failed validation")?,
        )),
        None => Ok(None),
    }
}
