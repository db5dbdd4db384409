// Hazard enrichment — the pure transform from raw records to ranked,
// enriched records.
//
// For each record: validate, then compute energy, scale, crater, zones,
// and importance. The finished list is stable-sorted by importance, so
// records with equal scores keep the order the backend returned them in.

use tracing::debug;

use crate::asteroid::models::{EnrichedAsteroidRecord, RawAsteroidRecord};
use crate::asteroid::validate::{self, HazardInputs, ValidationError};
use crate::scoring::crater::estimate_crater_diameter_km;
use crate::scoring::energy::estimate_impact_energy;
use crate::scoring::importance::score_importance;
use crate::scoring::torino::classify_torino_scale;
use crate::scoring::zones::generate_risk_zones;

/// Enrich a single record. Fails if the record's inputs are invalid.
pub fn enrich_record(raw: &RawAsteroidRecord) -> Result<EnrichedAsteroidRecord, ValidationError> {
    let HazardInputs {
        diameter_km,
        velocity_km_s,
        miss_distance_au,
        is_hazardous,
        is_sentry,
    } = validate::validate(raw)?;

    // Finite inputs can still overflow the cubic/quadratic terms
    let impact_energy_megatons = validate::check_derived(
        &raw.id,
        "impact_energy_megatons",
        estimate_impact_energy(diameter_km, velocity_km_s),
    )?;
    let torino_scale =
        classify_torino_scale(diameter_km, impact_energy_megatons, is_hazardous, is_sentry);
    let crater_diameter_km = validate::check_derived(
        &raw.id,
        "crater_diameter_km",
        estimate_crater_diameter_km(diameter_km, velocity_km_s),
    )?;
    let risk_zones = generate_risk_zones(impact_energy_megatons, is_hazardous, is_sentry);
    let importance_score = score_importance(
        diameter_km,
        velocity_km_s,
        miss_distance_au,
        is_hazardous,
        is_sentry,
    );

    debug!(
        id = %raw.id,
        energy_mt = format!("{:.1}", impact_energy_megatons),
        torino = torino_scale,
        importance = importance_score,
        "Enriched record"
    );

    Ok(EnrichedAsteroidRecord {
        raw: raw.clone(),
        impact_energy_megatons,
        crater_diameter_km,
        risk_zones,
        torino_scale,
        importance_score,
    })
}

/// Enrich every record and rank by importance, highest first.
///
/// The first invalid record aborts the batch: a caller gets either the
/// full ranked list or an error naming the bad record, never a partial list.
pub fn enrich_and_rank(
    raw: &[RawAsteroidRecord],
) -> Result<Vec<EnrichedAsteroidRecord>, ValidationError> {
    let mut enriched = raw
        .iter()
        .map(enrich_record)
        .collect::<Result<Vec<_>, _>>()?;

    // sort_by is stable
    enriched.sort_by(|a, b| b.importance_score.cmp(&a.importance_score));

    Ok(enriched)
}
