// Input validation — the boundary between backend data and the estimators.
//
// Every formula downstream assumes finite, non-negative inputs. A missing
// or NaN diameter would otherwise flow through the energy, crater, scale,
// and importance calculations and produce nonsense rankings, so bad rows
// are rejected here with the record id and the offending field.

use super::models::RawAsteroidRecord;

/// Why a raw record was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("asteroid {id}: {field} is missing")]
    Missing { id: String, field: &'static str },

    #[error("asteroid {id}: {field} is not a finite number ({value})")]
    NonFinite {
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("asteroid {id}: {field} is negative ({value})")]
    Negative {
        id: String,
        field: &'static str,
        value: f64,
    },

    /// Inputs were finite but too large for the estimate to stay finite.
    #[error("asteroid {id}: derived {field} overflowed ({value})")]
    DerivedOverflow {
        id: String,
        field: &'static str,
        value: f64,
    },
}

/// Reject a derived estimate that left the finite range.
pub fn check_derived(id: &str, field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::DerivedOverflow {
            id: id.to_string(),
            field,
            value,
        })
    }
}

/// The numeric inputs the estimators need, checked and unwrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardInputs {
    pub diameter_km: f64,
    pub velocity_km_s: f64,
    /// `None` when the backend has no close approach on file.
    pub miss_distance_au: Option<f64>,
    pub is_hazardous: bool,
    pub is_sentry: bool,
}

/// Validate a raw record and extract the estimator inputs.
///
/// Diameter (the max estimate) and velocity are required. Miss distance
/// may be absent, but when present it must be finite and non-negative.
pub fn validate(raw: &RawAsteroidRecord) -> Result<HazardInputs, ValidationError> {
    let diameter_km = require(
        &raw.id,
        "estimated_diameter_km_max",
        raw.estimated_diameter_km_max,
    )?;
    let velocity_km_s = require(&raw.id, "relative_velocity_km_s", raw.relative_velocity_km_s)?;
    let miss_distance_au = raw
        .miss_distance_au
        .map(|value| check(&raw.id, "miss_distance_au", value))
        .transpose()?;

    Ok(HazardInputs {
        diameter_km,
        velocity_km_s,
        miss_distance_au,
        is_hazardous: raw.is_potentially_hazardous_asteroid,
        is_sentry: raw.is_sentry_object,
    })
}

fn require(id: &str, field: &'static str, value: Option<f64>) -> Result<f64, ValidationError> {
    match value {
        Some(v) => check(id, field, v),
        None => Err(ValidationError::Missing {
            id: id.to_string(),
            field,
        }),
    }
}

fn check(id: &str, field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite {
            id: id.to_string(),
            field,
            value,
        });
    }
    // -0.0 compares equal to 0.0 and is accepted
    if value < 0.0 {
        return Err(ValidationError::Negative {
            id: id.to_string(),
            field,
            value,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(diameter: Option<f64>, velocity: Option<f64>) -> RawAsteroidRecord {
        RawAsteroidRecord {
            id: "2000433".to_string(),
            name: "433 Eros (A898 PA)".to_string(),
            nasa_jpl_url: String::new(),
            absolute_magnitude_h: None,
            estimated_diameter_km_min: None,
            estimated_diameter_km_max: diameter,
            is_potentially_hazardous_asteroid: true,
            is_sentry_object: false,
            close_approach_date: None,
            close_approach_date_full: None,
            epoch_date_close_approach: None,
            relative_velocity_km_s: velocity,
            miss_distance_au: None,
            miss_distance_lunar: None,
            miss_distance_km: None,
            orbiting_body: None,
        }
    }

    #[test]
    fn test_valid_record_passes_through() {
        let inputs = validate(&record(Some(0.3), Some(12.0))).unwrap();
        assert_eq!(inputs.diameter_km, 0.3);
        assert_eq!(inputs.velocity_km_s, 12.0);
        assert!(inputs.miss_distance_au.is_none());
        assert!(inputs.is_hazardous);
    }

    #[test]
    fn test_missing_velocity_is_rejected() {
        let err = validate(&record(Some(0.3), None)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Missing {
                id: "2000433".to_string(),
                field: "relative_velocity_km_s",
            }
        );
        assert_eq!(
            err.to_string(),
            "asteroid 2000433: relative_velocity_km_s is missing"
        );
    }

    #[test]
    fn test_nan_diameter_is_rejected() {
        let err = validate(&record(Some(f64::NAN), Some(10.0))).unwrap_err();
        assert!(matches!(err, ValidationError::NonFinite { field: "estimated_diameter_km_max", .. }));
    }

    #[test]
    fn test_negative_velocity_is_rejected() {
        let err = validate(&record(Some(1.0), Some(-3.0))).unwrap_err();
        assert!(matches!(err, ValidationError::Negative { value, .. } if value == -3.0));
    }

    #[test]
    fn test_infinite_miss_distance_is_rejected() {
        let mut raw = record(Some(1.0), Some(3.0));
        raw.miss_distance_au = Some(f64::INFINITY);
        assert!(validate(&raw).is_err());
    }
}
