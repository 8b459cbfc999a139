// motion/orbit.rs
//
// Elliptical, inclined orbit with a secondary vertical wobble.
// The position is always recomputed from the angle, so there is no drift across frames.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Largest eccentricity the simulator accepts. At 1.0 the minor axis collapses.
pub const MAX_ECCENTRICITY: f32 = 0.999;

/// Smallest orbit radius the simulator accepts.
pub const MIN_RADIUS: f32 = 0.01;

/// Frequency of the vertical wobble relative to the orbital angle.
const VERTICAL_FREQUENCY: f32 = 0.7;

/// Shape and speed of one star's orbit. Immutable once the simulator is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalConfig {
    /// Semi-major axis (world units).
    pub radius: f32,
    /// Angular speed in radians per second. Sign picks the direction.
    pub speed: f32,
    /// Rotation of the orbital plane, radians.
    pub inclination: f32,
    /// 0 = circle, towards 1 = elongated.
    pub eccentricity: f32,
    /// Initial angle, radians.
    pub phase_offset: f32,
    /// Amplitude of the vertical wobble.
    pub vertical_amplitude: f32,
}

impl OrbitalConfig {
    /// A flat circular orbit.
    pub fn circular(radius: f32, speed: f32) -> Self {
        Self {
            radius,
            speed,
            inclination: 0.0,
            eccentricity: 0.0,
            phase_offset: 0.0,
            vertical_amplitude: 0.0,
        }
    }

    /// Clamp values that would make the ellipse degenerate.
    pub fn sanitized(self) -> Self {
        let eccentricity = if self.eccentricity.is_finite() {
            self.eccentricity.clamp(0.0, MAX_ECCENTRICITY)
        } else {
            0.0
        };
        let radius = if self.radius.is_finite() && self.radius > MIN_RADIUS {
            self.radius
        } else {
            MIN_RADIUS
        };
        Self {
            radius,
            eccentricity,
            ..self
        }
    }

    /// Semi-minor axis of the base ellipse.
    pub fn semi_minor_axis(&self) -> f32 {
        self.radius * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// Position on the orbit at `angle`.
    pub fn position_at(&self, angle: f32) -> Vec3 {
        let x = self.radius * angle.cos();
        let z = self.semi_minor_axis() * angle.sin();

        let (sin_i, cos_i) = self.inclination.sin_cos();
        let x_rot = x * cos_i - z * sin_i;
        let z_rot = x * sin_i + z * cos_i;

        let y = (angle * VERTICAL_FREQUENCY + self.phase_offset).sin() * self.vertical_amplitude;

        Vec3::new(x_rot, y, z_rot)
    }
}

/// Result of one orbital update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalSample {
    pub position: Vec3,
    pub velocity: Vec3,
    pub angle: f32,
}

/// Orbital motion state for a single star.
#[derive(Debug, Clone)]
pub struct OrbitalMotion {
    config: OrbitalConfig,
    angle: f32,
    position: Vec3,
    previous_position: Vec3,
    velocity: Vec3,
}

impl OrbitalMotion {
    pub fn new(config: OrbitalConfig) -> Self {
        let sanitized = config.sanitized();
        if sanitized != config {
            log::warn!(
                "orbit config clamped: radius {} -> {}, eccentricity {} -> {}",
                config.radius,
                sanitized.radius,
                config.eccentricity,
                sanitized.eccentricity
            );
        }
        let angle = sanitized.phase_offset;
        let position = sanitized.position_at(angle);
        Self {
            config: sanitized,
            angle,
            position,
            previous_position: position,
            velocity: Vec3::ZERO,
        }
    }

    /// Advance the orbit by `delta` seconds.
    /// With `delta == 0` the velocity keeps its last value.
    pub fn update_motion(&mut self, delta: f32) -> OrbitalSample {
        let delta = delta.max(0.0);
        self.angle += self.config.speed * delta;
        self.previous_position = self.position;
        self.position = self.config.position_at(self.angle);
        if delta > 0.0 {
            self.velocity = (self.position - self.previous_position) / delta;
        }
        self.sample()
    }

    /// Set the angle accumulator directly, e.g. after a pause.
    pub fn reset_angle(&mut self, angle: f32) {
        self.angle = angle;
        self.position = self.config.position_at(angle);
        self.previous_position = self.position;
    }

    /// Return to the configured phase offset.
    pub fn reset_to_phase(&mut self) {
        self.reset_angle(self.config.phase_offset);
    }

    pub fn sample(&self) -> OrbitalSample {
        OrbitalSample {
            position: self.position,
            velocity: self.velocity,
            angle: self.angle,
        }
    }

    pub fn config(&self) -> &OrbitalConfig {
        &self.config
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    fn varied() -> OrbitalConfig {
        OrbitalConfig {
            radius: 4.2,
            speed: 0.13,
            inclination: 0.2,
            eccentricity: 0.25,
            phase_offset: 1.1,
            vertical_amplitude: 0.5,
        }
    }

    #[test]
    fn circular_orbit_starts_on_x_axis() {
        let orbit = OrbitalMotion::new(OrbitalConfig::circular(4.5, 0.15));
        assert!(approx(orbit.position(), Vec3::new(4.5, 0.0, 0.0)));
        assert_eq!(orbit.velocity(), Vec3::ZERO);
    }

    #[test]
    fn circular_orbit_advances_by_speed_times_delta() {
        let mut orbit = OrbitalMotion::new(OrbitalConfig::circular(4.5, 0.15));
        let sample = orbit.update_motion(1.0);
        assert!((sample.angle - 0.15).abs() < 1e-6);
        let expected = Vec3::new(4.5 * 0.15f32.cos(), 0.0, 4.5 * 0.15f32.sin());
        assert!(approx(sample.position, expected), "got {:?}", sample.position);
        assert!((sample.position.x - 4.45).abs() < 0.01);
        assert!((sample.position.z - 0.67).abs() < 0.01);
    }

    #[test]
    fn first_frame_has_no_spurious_velocity() {
        let mut orbit = OrbitalMotion::new(varied());
        let sample = orbit.update_motion(1.0 / 60.0);
        // One frame of travel at ~0.13 rad/s on a ~4 unit orbit is well under 1 unit/s.
        assert!(sample.velocity.length() < 1.0, "velocity {:?}", sample.velocity);
    }

    #[test]
    fn zero_delta_keeps_velocity() {
        let mut orbit = OrbitalMotion::new(varied());
        let moving = orbit.update_motion(0.1).velocity;
        let after = orbit.update_motion(0.0);
        assert_eq!(after.velocity, moving);
        assert!(after.velocity.is_finite());
    }

    #[test]
    fn deterministic_sequence() {
        let deltas = [0.016, 0.017, 0.05, 0.0, 0.033, 1.0];
        let mut a = OrbitalMotion::new(varied());
        let mut b = OrbitalMotion::new(varied());
        for dt in deltas {
            assert_eq!(a.update_motion(dt), b.update_motion(dt));
        }
    }

    #[test]
    fn displacement_shrinks_with_delta() {
        let config = varied();
        let mut previous = f32::MAX;
        for dt in [0.1, 0.05, 0.025, 0.0125] {
            let mut orbit = OrbitalMotion::new(config);
            let start = orbit.position();
            let moved = (orbit.update_motion(dt).position - start).length();
            let bound = config.speed.abs() * dt * (config.radius + config.vertical_amplitude) * 1.5;
            assert!(moved <= bound, "dt {dt}: moved {moved} > {bound}");
            assert!(moved < previous);
            previous = moved;
        }
    }

    #[test]
    fn angle_is_monotonic_for_positive_speed() {
        let mut orbit = OrbitalMotion::new(varied());
        let mut last = orbit.angle();
        for dt in [0.016, 0.0, 0.5, 0.033, 0.0, 2.0] {
            let angle = orbit.update_motion(dt).angle;
            assert!(angle >= last);
            last = angle;
        }
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut orbit = OrbitalMotion::new(varied());
        let before = orbit.angle();
        orbit.update_motion(-1.0);
        assert_eq!(orbit.angle(), before);
    }

    #[test]
    fn inclination_rotates_the_plane() {
        let config = OrbitalConfig {
            inclination: std::f32::consts::FRAC_PI_2,
            ..OrbitalConfig::circular(2.0, 1.0)
        };
        // x-axis point rotates onto +z.
        assert!(approx(config.position_at(0.0), Vec3::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn eccentric_orbit_has_shorter_minor_axis() {
        let config = OrbitalConfig {
            eccentricity: 0.6,
            ..OrbitalConfig::circular(5.0, 1.0)
        };
        let p = config.position_at(std::f32::consts::FRAC_PI_2);
        assert!((p.z - 4.0).abs() < 1e-4, "minor axis point {:?}", p);
    }

    #[test]
    fn vertical_wobble_uses_phase_offset() {
        let config = OrbitalConfig {
            phase_offset: std::f32::consts::FRAC_PI_2,
            vertical_amplitude: 0.5,
            ..OrbitalConfig::circular(3.0, 1.0)
        };
        assert!((config.position_at(0.0).y - 0.5).abs() < 1e-5);
    }

    #[test]
    fn reset_angle_resynchronizes_without_jump() {
        let mut orbit = OrbitalMotion::new(varied());
        orbit.update_motion(5.0);
        orbit.reset_angle(0.3);
        assert_eq!(orbit.angle(), 0.3);
        assert!(approx(orbit.position(), orbit.config().position_at(0.3)));
        let sample = orbit.update_motion(1.0 / 60.0);
        assert!(sample.velocity.length() < 1.0);

        orbit.reset_to_phase();
        assert_eq!(orbit.angle(), varied().phase_offset);
    }

    #[test]
    fn degenerate_config_is_clamped() {
        let orbit = OrbitalMotion::new(OrbitalConfig {
            eccentricity: 1.5,
            ..OrbitalConfig::circular(-2.0, 0.1)
        });
        assert_eq!(orbit.config().eccentricity, MAX_ECCENTRICITY);
        assert_eq!(orbit.config().radius, MIN_RADIUS);
        assert!(orbit.position().is_finite());
    }
}
