// motion/seed.rs
//
// Deterministic per-star orbit variation. The same identifier always yields the
// same orbit within one build; it is not meant to match other implementations bit for bit.

use std::f32::consts::TAU;

use super::orbit::OrbitalConfig;

/// Per-field hash multipliers. Any distinct constants work; these are the classic ones.
const K_RADIUS: f64 = 12.9898;
const K_SPEED: f64 = 78.233;
const K_INCLINATION: f64 = 37.719;
const K_ECCENTRICITY: f64 = 93.989;

const HASH_SCALE: f64 = 43758.5453;

/// Numeric seed for an identifier: its length plus its first character code.
/// Empty identifiers fall back to the caller-provided seed.
pub fn orbit_seed(entity_id: &str, fallback: f32) -> f32 {
    match entity_id.chars().next() {
        Some(first) => (entity_id.chars().count() + first as usize) as f32,
        None => fallback,
    }
}

/// Sine hash into [0, 1). Computed in f64 so the fractional part keeps its bits.
fn hash01(seed: f32, k: f64) -> f32 {
    let x = (seed as f64 * k).sin() * HASH_SCALE;
    let frac = (x - x.floor()) as f32;
    // Narrowing can round 0.99999999 up to 1.0.
    if frac >= 1.0 { 0.0 } else { frac }
}

/// Phase in [0, TAU) for a unit-interval value.
/// The f32 product `r * TAU` can round up to exactly TAU for `r` just below 1.
fn phase_from_unit(r: f32) -> f32 {
    let phase = (r as f64 * std::f64::consts::TAU) as f32;
    if phase >= TAU { phase - TAU } else { phase }
}

/// Orbit for a star identified by `entity_id`, varied around the base radius and speed.
pub fn generate_orbital_config(base_radius: f32, base_speed: f32, entity_id: &str) -> OrbitalConfig {
    generate_orbital_config_seeded(base_radius, base_speed, orbit_seed(entity_id, 0.0))
}

/// Orbit for an explicit numeric seed.
pub fn generate_orbital_config_seeded(base_radius: f32, base_speed: f32, seed: f32) -> OrbitalConfig {
    let r1 = hash01(seed, K_RADIUS);
    let r2 = hash01(seed, K_SPEED);
    let r3 = hash01(seed, K_INCLINATION);
    let r4 = hash01(seed, K_ECCENTRICITY);

    OrbitalConfig {
        radius: base_radius + (r1 - 0.5) * 2.0,
        speed: base_speed + (r2 - 0.5) * 0.1,
        inclination: (r3 - 0.5) * 0.5,
        eccentricity: r4 * 0.3,
        phase_offset: phase_from_unit(r1),
        vertical_amplitude: 0.3 + r2 * 0.4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_id_same_config() {
        let a = generate_orbital_config(4.5, 0.1, "star-42");
        let b = generate_orbital_config(4.5, 0.1, "star-42");
        assert_eq!(a, b);
    }

    #[test]
    fn seed_is_length_plus_first_char() {
        assert_eq!(orbit_seed("star-42", 0.5), (7 + 's' as usize) as f32);
        assert_eq!(orbit_seed("", 0.5), 0.5);
    }

    #[test]
    fn fields_stay_in_range() {
        for seed in 0..500 {
            let c = generate_orbital_config_seeded(4.5, 0.1, seed as f32 * 0.37);
            assert!(c.radius >= 3.5 && c.radius <= 5.5, "radius {}", c.radius);
            assert!(c.speed >= 0.05 && c.speed <= 0.15, "speed {}", c.speed);
            assert!(c.inclination >= -0.25 && c.inclination <= 0.25);
            assert!(c.eccentricity >= 0.0 && c.eccentricity < 0.3);
            assert!(c.phase_offset >= 0.0 && c.phase_offset < TAU);
            assert!(c.vertical_amplitude >= 0.3 && c.vertical_amplitude <= 0.7);
        }
    }

    #[test]
    fn phase_never_reaches_tau() {
        let just_below_one = 1.0f32 - f32::EPSILON / 2.0;
        for r in [0.0, 0.5, 0.999_999, just_below_one] {
            let phase = phase_from_unit(r);
            assert!((0.0..TAU).contains(&phase), "r {r}: phase {phase}");
        }
        // Dense sweep of the top of the unit interval.
        let mut r = 0.999_9f32;
        while r < 1.0 {
            assert!(phase_from_unit(r) < TAU, "r {r}");
            r = f32::from_bits(r.to_bits() + 1);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_orbital_config_seeded(4.5, 0.1, 110.0);
        let b = generate_orbital_config_seeded(4.5, 0.1, 111.0);
        assert_ne!(a, b);
    }

    #[test]
    fn hash_is_unit_interval() {
        for i in 0..1000 {
            let v = hash01(i as f32 * 1.7 - 300.0, K_SPEED);
            assert!((0.0..1.0).contains(&v), "hash {v}");
        }
    }
}
