// Markdown hazard brief — an offline report built from the ranked list.
//
// Sections follow the backend's AI report layout (overview, size
// distribution, individual analysis) but use only locally computed
// estimates, so it works without the report endpoint.

use std::fmt::Write as _;

use anyhow::Result;
use chrono::Utc;

use crate::asteroid::models::EnrichedAsteroidRecord;
use crate::pipeline::summary::HazardSummary;

use super::terminal::format_megatons;

/// Render the brief as a Markdown string.
pub fn render_brief(
    records: &[EnrichedAsteroidRecord],
    summary: &HazardSummary,
    max_visible: usize,
) -> String {
    let mut md = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(md, "# Near-Earth Object Hazard Brief\n");
    let _ = writeln!(
        md,
        "_Generated {}_\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    );

    let _ = writeln!(md, "## Overview\n");
    let _ = writeln!(md, "| Metric | Value |");
    let _ = writeln!(md, "|---|---|");
    let _ = writeln!(md, "| Objects tracked | {} |", summary.total);
    let _ = writeln!(
        md,
        "| Potentially hazardous | {} ({:.0}%) |",
        summary.hazardous,
        summary.hazardous_fraction() * 100.0
    );
    let _ = writeln!(md, "| Sentry watchlist | {} |", summary.sentry);
    let _ = writeln!(md, "| Highest Torino scale | {} |", summary.max_torino_scale);
    let _ = writeln!(
        md,
        "| Largest impact energy | {} Mt |",
        format_megatons(summary.max_impact_energy_megatons)
    );
    let _ = writeln!(md);

    if !summary.by_size.is_empty() {
        let _ = writeln!(md, "## Size Distribution\n");
        let _ = writeln!(md, "| Category | Range | Hazardous | Non-hazardous |");
        let _ = writeln!(md, "|---|---|---:|---:|");
        for (category, counts) in &summary.by_size {
            let _ = writeln!(
                md,
                "| {} | {} | {} | {} |",
                category,
                category.range_label(),
                counts.hazardous,
                counts.non_hazardous
            );
        }
        let _ = writeln!(md);
    }

    let shown = records.len().min(max_visible);
    let _ = writeln!(md, "## Ranked Objects (top {shown})\n");
    if records.is_empty() {
        let _ = writeln!(md, "No objects to report.");
        return md;
    }

    let _ = writeln!(
        md,
        "| # | Name | Score | Torino | Diameter (km) | Velocity (km/s) | Energy (Mt) | Crater (km) | Zones |"
    );
    let _ = writeln!(md, "|---:|---|---:|---:|---:|---:|---:|---:|---|");
    for (i, r) in records.iter().take(max_visible).enumerate() {
        let _ = writeln!(
            md,
            "| {} | [{}]({}) | {} | {} | {:.3} | {:.2} | {} | {:.2} | {} |",
            i + 1,
            escape_pipes(r.name()),
            r.raw.nasa_jpl_url,
            r.importance_score,
            r.torino_scale,
            r.diameter_km(),
            r.velocity_km_s(),
            format_megatons(r.impact_energy_megatons),
            r.crater_diameter_km,
            r.risk_zones.join(", ")
        );
    }

    md
}

/// Render the brief and write it to `path`. Returns the written path.
pub fn generate_brief(
    records: &[EnrichedAsteroidRecord],
    summary: &HazardSummary,
    max_visible: usize,
    path: &str,
) -> Result<String> {
    let md = render_brief(records, summary, max_visible);
    super::write_file(path, &md)
}

fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}
