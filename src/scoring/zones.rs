// Risk zones — which regions an impact of a given energy would affect.
//
// Six fixed label sets keyed on energy. Each set is ordered most severe
// first and mixes severity descriptors with representative place names;
// place names have map coordinates in ZONE_COORDINATES for renderers.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Energy thresholds in megatons, highest first. Strict `>` comparisons.
const ZONE_BRACKETS: [(f64, &[&str]); 5] = [
    (
        100_000.0,
        &[
            "Global Extinction Event",
            "Mass Extinction Event",
            "Global Devastation",
        ],
    ),
    (
        10_000.0,
        &["Continental Devastation", "North America", "Eurasia"],
    ),
    (
        1_000.0,
        &["Regional Devastation", "Western Europe", "East Asia"],
    ),
    (100.0, &["City Destruction", "New York", "Tokyo", "London"]),
    (10.0, &["Local Damage", "Mumbai", "Sao Paulo"]),
];

const REMOTE_OCEAN: &str = "Remote Ocean";

/// Latitude/longitude of every place-name zone, built once on first use.
pub static ZONE_COORDINATES: LazyLock<HashMap<&'static str, (f64, f64)>> = LazyLock::new(|| {
    HashMap::from([
        ("North America", (45.0, -100.0)),
        ("Eurasia", (50.0, 60.0)),
        ("Western Europe", (48.0, 5.0)),
        ("East Asia", (35.0, 115.0)),
        ("New York", (40.7128, -74.0060)),
        ("Tokyo", (35.6762, 139.6503)),
        ("London", (51.5074, -0.1278)),
        ("Mumbai", (19.0760, 72.8777)),
        ("Sao Paulo", (-23.5505, -46.6333)),
        ("Remote Ocean", (-30.0, -140.0)),
    ])
});

/// List the zones affected by an impact of `energy_mt` megatons.
///
/// Never empty. `is_hazardous` and `is_sentry` are part of the estimator
/// signature but do not currently affect the result: the zone set depends
/// on energy alone.
pub fn generate_risk_zones(energy_mt: f64, is_hazardous: bool, is_sentry: bool) -> Vec<String> {
    // Flags intentionally unused; see doc comment.
    let _ = (is_hazardous, is_sentry);

    ZONE_BRACKETS
        .iter()
        .find(|(threshold, _)| energy_mt > *threshold)
        .map(|(_, labels)| labels.iter().map(|l| l.to_string()).collect())
        .unwrap_or_else(|| vec![REMOTE_OCEAN.to_string()])
}

/// Map coordinates for a zone label, if it names a place.
pub fn zone_coordinates(zone: &str) -> Option<(f64, f64)> {
    ZONE_COORDINATES.get(zone).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extinction_bracket() {
        assert_eq!(
            generate_risk_zones(500_000.0, false, false),
            vec![
                "Global Extinction Event",
                "Mass Extinction Event",
                "Global Devastation"
            ]
        );
    }

    #[test]
    fn test_below_all_thresholds_is_remote_ocean() {
        assert_eq!(generate_risk_zones(0.0, true, true), vec!["Remote Ocean"]);
        assert_eq!(generate_risk_zones(10.0, false, false), vec!["Remote Ocean"]);
    }

    #[test]
    fn test_flags_do_not_change_zones() {
        for energy in [0.0, 50.0, 500.0, 5_000.0, 50_000.0, 500_000.0] {
            let baseline = generate_risk_zones(energy, false, false);
            assert_eq!(generate_risk_zones(energy, true, false), baseline);
            assert_eq!(generate_risk_zones(energy, false, true), baseline);
            assert_eq!(generate_risk_zones(energy, true, true), baseline);
        }
    }

    #[test]
    fn test_every_place_name_has_coordinates() {
        for (_, labels) in ZONE_BRACKETS.iter() {
            for label in labels.iter().skip(1) {
                if !label.ends_with("Event") && !label.ends_with("Devastation") {
                    assert!(zone_coordinates(label).is_some(), "{label} has no coordinates");
                }
            }
        }
        assert!(zone_coordinates(REMOTE_OCEAN).is_some());
        assert!(zone_coordinates("City Destruction").is_none());
    }
}
