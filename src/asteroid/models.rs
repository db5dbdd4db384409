// Data models — the record types that flow through the application.
//
// Field names on RawAsteroidRecord follow the backend's normalized JSON
// exactly, so a record deserialized from the wire serializes back to the
// same shape inside an enriched record.

use serde::{Deserialize, Serialize};

/// A near-Earth object as supplied by the backend, before enrichment.
///
/// Numeric close-approach fields are optional because the backend joins
/// close-approach rows onto the asteroid table and leaves them `null`
/// when no approach is on file. Whether a missing value is acceptable is
/// decided by `validate`, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAsteroidRecord {
    pub id: String,
    pub name: String,
    pub nasa_jpl_url: String,
    #[serde(default)]
    pub absolute_magnitude_h: Option<f64>,
    #[serde(default)]
    pub estimated_diameter_km_min: Option<f64>,
    #[serde(default)]
    pub estimated_diameter_km_max: Option<f64>,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub is_sentry_object: bool,
    #[serde(default)]
    pub close_approach_date: Option<String>,
    #[serde(default)]
    pub close_approach_date_full: Option<String>,
    #[serde(default)]
    pub epoch_date_close_approach: Option<i64>,
    #[serde(default)]
    pub relative_velocity_km_s: Option<f64>,
    #[serde(default)]
    pub miss_distance_au: Option<f64>,
    #[serde(default)]
    pub miss_distance_lunar: Option<f64>,
    #[serde(default)]
    pub miss_distance_km: Option<f64>,
    #[serde(default)]
    pub orbiting_body: Option<String>,
}

/// A raw record plus the derived hazard attributes.
///
/// The raw record is flattened so the JSON form is the backend row with
/// five extra keys. Derived fields are always regenerated together from
/// the raw fields and never edited independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedAsteroidRecord {
    #[serde(flatten)]
    pub raw: RawAsteroidRecord,
    pub impact_energy_megatons: f64,
    pub crater_diameter_km: f64,
    /// Ordered most significant first; never empty.
    pub risk_zones: Vec<String>,
    /// Simplified Torino-like hazard scale, 0-10.
    pub torino_scale: u8,
    /// UI ranking score, 0-10.
    pub importance_score: u8,
}

impl EnrichedAsteroidRecord {
    pub fn id(&self) -> &str {
        &self.raw.id
    }

    pub fn name(&self) -> &str {
        &self.raw.name
    }

    /// The diameter the estimators ran on. Only meaningful on records
    /// that came out of the pipeline, which guarantees it is present.
    pub fn diameter_km(&self) -> f64 {
        self.raw.estimated_diameter_km_max.unwrap_or(0.0)
    }

    pub fn velocity_km_s(&self) -> f64 {
        self.raw.relative_velocity_km_s.unwrap_or(0.0)
    }

    pub fn is_hazardous(&self) -> bool {
        self.raw.is_potentially_hazardous_asteroid
    }

    pub fn is_sentry(&self) -> bool {
        self.raw.is_sentry_object
    }
}

/// Coarse size buckets used by hazard summaries and reports.
///
/// Lower bound inclusive, upper bound exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeCategory {
    Tiny,
    Small,
    Medium,
    Large,
    VeryLarge,
    Enormous,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 6] = [
        SizeCategory::Tiny,
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::VeryLarge,
        SizeCategory::Enormous,
    ];

    /// Bucket a diameter in kilometers.
    pub fn from_diameter_km(diameter_km: f64) -> Self {
        match diameter_km {
            d if d >= 1.0 => SizeCategory::Enormous,
            d if d >= 0.5 => SizeCategory::VeryLarge,
            d if d >= 0.3 => SizeCategory::Large,
            d if d >= 0.1 => SizeCategory::Medium,
            d if d >= 0.05 => SizeCategory::Small,
            _ => SizeCategory::Tiny,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeCategory::Tiny => "Tiny",
            SizeCategory::Small => "Small",
            SizeCategory::Medium => "Medium",
            SizeCategory::Large => "Large",
            SizeCategory::VeryLarge => "Very Large",
            SizeCategory::Enormous => "Enormous",
        }
    }

    /// Human-readable diameter range for this bucket.
    pub fn range_label(&self) -> &'static str {
        match self {
            SizeCategory::Tiny => "0-0.05 km",
            SizeCategory::Small => "0.05-0.1 km",
            SizeCategory::Medium => "0.1-0.3 km",
            SizeCategory::Large => "0.3-0.5 km",
            SizeCategory::VeryLarge => "0.5-1.0 km",
            SizeCategory::Enormous => ">1.0 km",
        }
    }
}

impl std::fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
