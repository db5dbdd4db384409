// Hazard summary — aggregate counts over a ranked record set.
//
// Mirrors the breakdowns the backend's report charts show: hazardous vs
// non-hazardous share, and a size distribution split by hazard flag.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::asteroid::models::{EnrichedAsteroidRecord, SizeCategory};

/// Hazardous/non-hazardous counts within one size category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub hazardous: usize,
    pub non_hazardous: usize,
}

impl CategoryCounts {
    pub fn total(&self) -> usize {
        self.hazardous + self.non_hazardous
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HazardSummary {
    pub total: usize,
    pub hazardous: usize,
    pub sentry: usize,
    /// Only categories with at least one record appear.
    pub by_size: BTreeMap<SizeCategory, CategoryCounts>,
    pub max_torino_scale: u8,
    pub max_impact_energy_megatons: f64,
}

impl HazardSummary {
    /// Fraction of records flagged potentially hazardous (0.0 when empty).
    pub fn hazardous_fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.hazardous as f64 / self.total as f64
    }
}

/// Summarize a set of enriched records.
pub fn summarize(records: &[EnrichedAsteroidRecord]) -> HazardSummary {
    let mut summary = HazardSummary {
        total: records.len(),
        ..HazardSummary::default()
    };

    for record in records {
        let counts = summary
            .by_size
            .entry(SizeCategory::from_diameter_km(record.diameter_km()))
            .or_default();
        if record.is_hazardous() {
            counts.hazardous += 1;
            summary.hazardous += 1;
        } else {
            counts.non_hazardous += 1;
        }
        if record.is_sentry() {
            summary.sentry += 1;
        }
        summary.max_torino_scale = summary.max_torino_scale.max(record.torino_scale);
        summary.max_impact_energy_megatons = summary
            .max_impact_energy_megatons
            .max(record.impact_energy_megatons);
    }

    summary
}
