// Backend status display — health, record counts, data quality.

use anyhow::Result;
use colored::Colorize;

use crate::asteroid::validate;
use crate::backend::client::BackendClient;

/// Display backend status to the terminal.
///
/// Reports reachability, how many records the backend holds, and how many
/// of them would be rejected by validation.
pub async fn show(client: &BackendClient) -> Result<()> {
    println!("Backend: {}", client.base_url());

    match client.health().await {
        Ok(health) => {
            let name = health.api_name.as_deref().unwrap_or("unnamed service");
            println!("  Status: {} ({name})", health.status.green());
        }
        Err(e) => {
            println!("  Status: {}", "unreachable".red());
            println!("  {e}");
            return Ok(());
        }
    }

    let ids = client.fetch_asteroid_ids().await?;
    println!("Stored asteroids: {}", ids.len());
    if ids.is_empty() {
        println!("  The backend database is empty; run its ingest job first.");
        return Ok(());
    }

    let records = client.fetch_asteroids().await?;
    let invalid: Vec<_> = records
        .iter()
        .filter_map(|r| validate::validate(r).err())
        .collect();

    if invalid.is_empty() {
        println!("Data quality: all {} records valid", records.len());
    } else {
        println!(
            "Data quality: {} of {} records invalid",
            invalid.len().to_string().yellow(),
            records.len()
        );
        for err in invalid.iter().take(5) {
            println!("  {}", err.to_string().dimmed());
        }
    }

    Ok(())
}
