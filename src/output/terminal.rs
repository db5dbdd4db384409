// Colored terminal output for ranked asteroid lists and record details.
//
// This is the crate's renderer: it reads the ranked list and never
// modifies it. main.rs display paths delegate here.

use colored::Colorize;

use crate::asteroid::models::{EnrichedAsteroidRecord, SizeCategory};
use crate::pipeline::summary::HazardSummary;
use crate::scoring::zones::zone_coordinates;

/// Display the top `max_visible` records of a ranked list.
pub fn display_ranked_list(records: &[EnrichedAsteroidRecord], max_visible: usize) {
    if records.is_empty() {
        println!("No asteroid records available. Is the backend populated?");
        return;
    }

    let shown = records.len().min(max_visible);
    println!(
        "\n{}",
        format!("=== Near-Earth Objects (top {shown} of {}) ===", records.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<28} {:>5}  {:>6}  {:>8}  {:>12}  {:<24}",
        "Rank".dimmed(),
        "Name".dimmed(),
        "Score".dimmed(),
        "Torino".dimmed(),
        "Diam km".dimmed(),
        "Energy Mt".dimmed(),
        "Primary zone".dimmed(),
    );
    println!("  {}", "-".repeat(98).dimmed());

    for (i, record) in records.iter().take(max_visible).enumerate() {
        let name = super::truncate_chars(record.name(), 25);
        let marker = if record.is_sentry() {
            "S".red().bold()
        } else if record.is_hazardous() {
            "H".bright_red()
        } else {
            " ".normal()
        };
        println!(
            "  {:>4}. {}{:<27} {:>5}  {:>6}  {:>8.3}  {:>12}  {:<24}",
            i + 1,
            marker,
            name,
            record.importance_score,
            colorize_torino(record.torino_scale),
            record.diameter_km(),
            format_megatons(record.impact_energy_megatons),
            record.risk_zones.first().map(String::as_str).unwrap_or("-"),
        );
    }

    if records.len() > shown {
        println!(
            "\n  {}",
            format!("... {} more not shown (raise --limit)", records.len() - shown).dimmed()
        );
    }
    println!();
}

/// Display every derived attribute of one record.
pub fn display_record_detail(record: &EnrichedAsteroidRecord) {
    println!("\n{}", format!("=== {} ===", record.name()).bold());
    println!("  Id: {}", record.id());
    if !record.raw.nasa_jpl_url.is_empty() {
        println!("  JPL: {}", record.raw.nasa_jpl_url.dimmed());
    }

    let mut flags = Vec::new();
    if record.is_hazardous() {
        flags.push("potentially hazardous".bright_red().to_string());
    }
    if record.is_sentry() {
        flags.push("sentry watchlist".red().bold().to_string());
    }
    if !flags.is_empty() {
        println!("  Flags: {}", flags.join(", "));
    }

    println!(
        "  Diameter: {:.3} km ({})",
        record.diameter_km(),
        SizeCategory::from_diameter_km(record.diameter_km())
    );
    println!("  Velocity: {:.2} km/s", record.velocity_km_s());
    if let Some(au) = record.raw.miss_distance_au {
        println!("  Miss distance: {au:.4} AU");
    }
    if let Some(date) = record
        .raw
        .close_approach_date_full
        .as_deref()
        .or(record.raw.close_approach_date.as_deref())
    {
        let body = record.raw.orbiting_body.as_deref().unwrap_or("Earth");
        println!("  Close approach: {date} ({body})");
    }

    println!("\n  Impact estimates:");
    println!(
        "    Energy: {} Mt TNT",
        format_megatons(record.impact_energy_megatons)
    );
    println!("    Crater: {:.2} km", record.crater_diameter_km);
    println!("    Torino scale: {}", colorize_torino(record.torino_scale));
    println!("    Importance: {}/10", record.importance_score);

    println!("\n  Risk zones:");
    for zone in &record.risk_zones {
        match zone_coordinates(zone) {
            Some((lat, lng)) => println!("    - {zone} {}", format!("({lat:.2}, {lng:.2})").dimmed()),
            None => println!("    - {zone}"),
        }
    }
}

/// Display hazard and size breakdowns.
pub fn display_summary(summary: &HazardSummary) {
    println!("{}", "=== Hazard Overview ===".bold());
    println!(
        "  {} objects, {} potentially hazardous ({:.0}%), {} on sentry watchlist",
        summary.total,
        summary.hazardous,
        summary.hazardous_fraction() * 100.0,
        summary.sentry
    );
    println!(
        "  Highest Torino scale: {}  |  Largest impact energy: {} Mt",
        colorize_torino(summary.max_torino_scale),
        format_megatons(summary.max_impact_energy_megatons)
    );

    if summary.by_size.is_empty() {
        return;
    }
    println!("\n  Size distribution:");
    for (category, counts) in &summary.by_size {
        println!(
            "    {:<11} {:<12} {:>4} total, {:>4} hazardous",
            category.as_str(),
            category.range_label().dimmed(),
            counts.total(),
            counts.hazardous
        );
    }
}

/// Compact megaton display: plain below a thousand, scientific above.
pub fn format_megatons(mt: f64) -> String {
    if mt < 1_000.0 {
        format!("{mt:.2}")
    } else {
        format!("{mt:.3e}")
    }
}

/// Colorize a Torino scale value by severity band.
fn colorize_torino(scale: u8) -> colored::ColoredString {
    let text = scale.to_string();
    match scale {
        8..=10 => text.red().bold(),
        5..=7 => text.bright_red(),
        2..=4 => text.yellow(),
        1 => text.normal(),
        _ => text.green(),
    }
}
