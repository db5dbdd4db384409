// Importance score — the 0-10 ranking used for sort and filter order.
//
// Additive: size (1-4), speed (0-2), proximity (0-2), watchlist (0-3),
// capped at 10. Every term is non-negative so there is no lower clamp.

/// Highest score any record can receive.
pub const MAX_IMPORTANCE: u8 = 10;

/// Score how much attention a body deserves in the ranked view.
///
/// An absent miss distance contributes no proximity points.
pub fn score_importance(
    diameter_km: f64,
    velocity_km_s: f64,
    miss_distance_au: Option<f64>,
    is_hazardous: bool,
    is_sentry: bool,
) -> u8 {
    let size: u8 = match diameter_km {
        d if d > 10.0 => 4,
        d if d > 1.0 => 3,
        d if d > 0.5 => 2,
        _ => 1,
    };

    let speed: u8 = match velocity_km_s {
        v if v > 25.0 => 2,
        v if v > 15.0 => 1,
        _ => 0,
    };

    let proximity: u8 = match miss_distance_au {
        Some(au) if au < 0.05 => 2,
        Some(au) if au < 0.2 => 1,
        _ => 0,
    };

    let watchlist: u8 = if is_sentry {
        3
    } else if is_hazardous {
        2
    } else {
        0
    };

    (size + speed + proximity + watchlist).min(MAX_IMPORTANCE)
}
