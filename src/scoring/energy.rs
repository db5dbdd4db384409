// Kinetic impact energy, expressed in megatons of TNT.
//
// The body is modeled as a uniform sphere of stony-asteroid density.

use std::f64::consts::PI;

/// Bulk density assumed for every body, in kg/m³.
pub const BULK_DENSITY_KG_M3: f64 = 2500.0;

/// Joules per megaton of TNT.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Estimate impact energy in megatons of TNT.
///
/// `energy = ½ · (4/3 · π · r³ · ρ) · v²`, with the radius in meters and
/// velocity in m/s. Zero diameter or zero velocity yields exactly zero.
pub fn estimate_impact_energy(diameter_km: f64, velocity_km_s: f64) -> f64 {
    let radius_m = diameter_km * 1000.0 / 2.0;
    let volume_m3 = 4.0 / 3.0 * PI * radius_m.powi(3);
    let mass_kg = volume_m3 * BULK_DENSITY_KG_M3;
    let velocity_m_s = velocity_km_s * 1000.0;
    let joules = 0.5 * mass_kg * velocity_m_s * velocity_m_s;
    joules / JOULES_PER_MEGATON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_km_at_twenty_km_s() {
        // r = 500 m, V = 5.236e8 m³, m = 1.309e12 kg, E = 2.618e20 J ≈ 6.2572e4 Mt
        let expected = 2.617_993_877_991_494e20 / JOULES_PER_MEGATON;
        let mt = estimate_impact_energy(1.0, 20.0);
        assert!(
            (mt - expected).abs() / expected < 1e-12,
            "Expected ~62572 Mt, got {mt}"
        );
    }

    #[test]
    fn test_zero_inputs_give_zero() {
        assert_eq!(estimate_impact_energy(0.0, 20.0), 0.0);
        assert_eq!(estimate_impact_energy(1.0, 0.0), 0.0);
        assert_eq!(estimate_impact_energy(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_energy_scales_with_cube_of_diameter() {
        let small = estimate_impact_energy(0.1, 15.0);
        let large = estimate_impact_energy(0.2, 15.0);
        assert!((large / small - 8.0).abs() < 1e-9);
    }
}
