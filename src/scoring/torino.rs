// Simplified Torino-like hazard scale.
//
// This is a fixed decision table, not the official scale. Sentry objects
// are graded on energy first, PHAs get at most 3, everything else is 0.
// All comparisons are strict: a value exactly on a threshold belongs to
// the bracket below it.

/// Classify a body on the 0-10 hazard scale.
pub fn classify_torino_scale(
    diameter_km: f64,
    energy_mt: f64,
    is_hazardous: bool,
    is_sentry: bool,
) -> u8 {
    if is_sentry {
        match energy_mt {
            e if e > 1e6 => 10,
            e if e > 1e5 => 9,
            e if e > 1e4 => 8,
            e if e > 1e3 => 7,
            _ if diameter_km > 1.0 => 4,
            _ => 3,
        }
    } else if is_hazardous {
        match energy_mt {
            e if e > 1e5 => 3,
            _ if diameter_km > 1.0 => 2,
            _ => 1,
        }
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_hazardous_is_always_zero() {
        assert_eq!(classify_torino_scale(50.0, 1e9, false, false), 0);
    }

    #[test]
    fn test_sentry_energy_brackets() {
        assert_eq!(classify_torino_scale(0.1, 2e6, false, true), 10);
        assert_eq!(classify_torino_scale(0.1, 2e5, false, true), 9);
        assert_eq!(classify_torino_scale(0.1, 2e4, false, true), 8);
        assert_eq!(classify_torino_scale(0.1, 2e3, false, true), 7);
        assert_eq!(classify_torino_scale(1.5, 10.0, false, true), 4);
        assert_eq!(classify_torino_scale(0.1, 10.0, false, true), 3);
    }

    #[test]
    fn test_sentry_wins_over_hazardous() {
        assert_eq!(classify_torino_scale(0.1, 10.0, true, true), 3);
    }

    #[test]
    fn test_hazardous_brackets() {
        assert_eq!(classify_torino_scale(0.1, 2e5, true, false), 3);
        assert_eq!(classify_torino_scale(1.2, 10.0, true, false), 2);
        assert_eq!(classify_torino_scale(0.2, 10.0, true, false), 1);
    }

    #[test]
    fn test_exact_threshold_falls_to_lower_bracket() {
        assert_eq!(classify_torino_scale(0.1, 1e6, false, true), 9);
        assert_eq!(classify_torino_scale(0.1, 1e3, false, true), 3);
        assert_eq!(classify_torino_scale(1.0, 1e5, true, false), 1);
    }
}
