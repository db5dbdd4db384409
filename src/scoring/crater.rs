// Final crater diameter from a simple power-law scaling.

/// Estimate the crater diameter in kilometers.
///
/// `crater = diameter · 20 · (velocity / 20)^0.33`. A 20 km/s impactor
/// leaves a crater twenty times its own diameter.
pub fn estimate_crater_diameter_km(diameter_km: f64, velocity_km_s: f64) -> f64 {
    diameter_km * 20.0 * (velocity_km_s / 20.0).powf(0.33)
}
