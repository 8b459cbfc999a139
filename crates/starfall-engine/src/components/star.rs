use glam::Vec3;

use crate::api::config::FieldConfig;
use crate::api::types::{StarEvent, StarHandle, StarStatus};
use crate::error::{Result, StarfallError};
use crate::motion::falling::{FallingConfig, FallingTrajectory};
use crate::motion::geo::{create_falling_config, GeoCoord};
use crate::motion::orbit::OrbitalMotion;

/// The simulator that is authoritative for a star right now.
/// orbiting -> falling (on claim) -> landed (once the fall settles).
#[derive(Debug, Clone)]
pub enum StarMotion {
    Orbiting(OrbitalMotion),
    Falling(FallingTrajectory),
    /// Frozen final position.
    Landed(Vec3),
}

impl StarMotion {
    pub fn status(&self) -> StarStatus {
        match self {
            StarMotion::Orbiting(_) => StarStatus::Orbiting,
            StarMotion::Falling(_) => StarStatus::Falling,
            StarMotion::Landed(_) => StarStatus::Landed,
        }
    }
}

/// A visitor star: identity, current motion and the last kinematic output.
#[derive(Debug, Clone)]
pub struct Star {
    /// Handle assigned by the field.
    pub handle: StarHandle,
    /// Identifier the orbit was seeded from.
    pub name: String,
    pub motion: StarMotion,
    /// Position applied to the presentation layer this frame.
    pub position: Vec3,
    pub velocity: Vec3,
    /// Where the star falls to once claimed.
    pub destination: Option<GeoCoord>,
}

impl Star {
    pub fn new(handle: StarHandle, name: impl Into<String>, orbit: OrbitalMotion) -> Self {
        let position = orbit.position();
        Self {
            handle,
            name: name.into(),
            motion: StarMotion::Orbiting(orbit),
            position,
            velocity: Vec3::ZERO,
            destination: None,
        }
    }

    pub fn status(&self) -> StarStatus {
        self.motion.status()
    }

    /// Fraction of the fall completed: 0 while orbiting, 1 once landed.
    pub fn progress(&self) -> f32 {
        match &self.motion {
            StarMotion::Orbiting(_) => 0.0,
            StarMotion::Falling(fall) => fall.current_state().progress,
            StarMotion::Landed(_) => 1.0,
        }
    }

    /// Send an orbiting star down to `destination`, starting at `current_time`.
    /// Duration, bounce and impact size come from the field config.
    pub fn claim(&mut self, destination: GeoCoord, current_time: f32, config: &FieldConfig) -> Result<()> {
        let StarMotion::Orbiting(orbit) = &self.motion else {
            return Err(StarfallError::NotOrbiting {
                handle: self.handle,
                status: self.status(),
            });
        };

        let falling = FallingConfig {
            bounce: config.bounce,
            impact_radius: config.impact_radius,
            ..create_falling_config(
                orbit.position(),
                destination.lat,
                destination.lon,
                config.earth_radius,
                config.fall_duration,
            )
        };
        let mut fall = FallingTrajectory::new(falling);
        fall.start_falling(current_time);

        log::debug!(
            "{} '{}' claimed at t={current_time:.3}, falling to ({:.2}, {:.2})",
            self.handle,
            self.name,
            destination.lat,
            destination.lon
        );
        self.destination = Some(destination);
        self.motion = StarMotion::Falling(fall);
        Ok(())
    }

    /// Re-synchronize the orbit angle. Ignored unless orbiting.
    pub fn resync(&mut self, angle: f32) -> bool {
        match &mut self.motion {
            StarMotion::Orbiting(orbit) => {
                orbit.reset_angle(angle);
                self.position = orbit.position();
                true
            }
            _ => false,
        }
    }

    /// Advance the authoritative simulator by one frame, pushing any events into `events`.
    /// A fall without bounce reports `Impact` and `Landed` on the same frame.
    pub fn tick(&mut self, current_time: f32, delta: f32, events: &mut Vec<StarEvent>) {
        match &mut self.motion {
            StarMotion::Orbiting(orbit) => {
                let sample = orbit.update_motion(delta);
                self.position = sample.position;
                self.velocity = sample.velocity;
            }
            StarMotion::Falling(fall) => {
                let was_complete = fall.current_state().is_complete;
                let state = fall.update_animation(current_time, delta);
                self.position = state.position;
                self.velocity = state.velocity;

                if state.is_complete && !was_complete {
                    log::debug!("{} impacted at t={current_time:.3}", self.handle);
                    events.push(StarEvent::Impact {
                        handle: self.handle,
                        position: state.position,
                        radius: fall.impact_radius(),
                        time: current_time,
                    });
                }

                if !fall.is_animating() {
                    let landed_at = fall.config().target_position;
                    log::debug!("{} landed at t={current_time:.3}", self.handle);
                    self.position = landed_at;
                    self.velocity = Vec3::ZERO;
                    self.motion = StarMotion::Landed(landed_at);
                    events.push(StarEvent::Landed {
                        handle: self.handle,
                        position: landed_at,
                        time: current_time,
                    });
                }
            }
            StarMotion::Landed(pos) => {
                self.position = *pos;
                self.velocity = Vec3::ZERO;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::orbit::OrbitalConfig;

    fn star() -> Star {
        let orbit = OrbitalMotion::new(OrbitalConfig::circular(4.0, 0.15));
        Star::new(StarHandle(7), "visitor", orbit)
    }

    fn config(bounce: bool) -> FieldConfig {
        FieldConfig {
            bounce,
            ..FieldConfig::default()
        }
    }

    /// Tick once and return the events produced on that frame.
    fn tick(s: &mut Star, current_time: f32, delta: f32) -> Vec<StarEvent> {
        let mut events = Vec::new();
        s.tick(current_time, delta, &mut events);
        events
    }

    #[test]
    fn starts_orbiting_at_orbit_position() {
        let s = star();
        assert_eq!(s.status(), StarStatus::Orbiting);
        assert!((s.position - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-5);
        assert_eq!(s.progress(), 0.0);
    }

    #[test]
    fn orbit_tick_moves_star() {
        let mut s = star();
        assert!(tick(&mut s, 1.0, 1.0).is_empty());
        assert!(s.position.z > 0.5);
        assert!(s.velocity.length() > 0.0);
    }

    #[test]
    fn lands_on_impact_frame_without_bounce() {
        let mut s = star();
        s.claim(GeoCoord::new(0.0, 0.0), 10.0, &config(false)).unwrap();
        assert_eq!(s.status(), StarStatus::Falling);

        assert!(tick(&mut s, 11.5, 0.1).is_empty());
        assert!((s.progress() - 0.5).abs() < 1e-5);

        let events = tick(&mut s, 13.0, 0.1);
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], StarEvent::Impact { radius, time, .. } if radius == 0.3 && time == 13.0));
        assert!(matches!(events[1], StarEvent::Landed { time, .. } if time == 13.0));
        assert_eq!(s.status(), StarStatus::Landed);
        assert!((s.position - Vec3::new(-2.5, 0.0, 0.0)).length() < 1e-4);

        assert!(tick(&mut s, 20.0, 0.1).is_empty());
        assert_eq!(s.velocity, Vec3::ZERO);
        assert_eq!(s.progress(), 1.0);
    }

    #[test]
    fn bouncing_star_lands_after_impact() {
        let mut s = star();
        s.claim(GeoCoord::new(0.0, 0.0), 0.0, &config(true)).unwrap();

        let events = tick(&mut s, 3.0, 0.1);
        assert!(matches!(events.as_slice(), [StarEvent::Impact { .. }]));
        assert_eq!(s.status(), StarStatus::Falling);

        let mut landings = 0;
        for frame in 1..=180 {
            landings += tick(&mut s, 3.0 + frame as f32 / 60.0, 1.0 / 60.0)
                .iter()
                .filter(|e| matches!(e, StarEvent::Landed { .. }))
                .count();
        }
        assert_eq!(landings, 1);
        assert_eq!(s.status(), StarStatus::Landed);
    }

    #[test]
    fn claim_uses_field_config() {
        let mut s = star();
        let field = FieldConfig {
            fall_duration: 5.0,
            impact_radius: 0.6,
            bounce: false,
            ..FieldConfig::default()
        };
        s.claim(GeoCoord::new(90.0, 0.0), 0.0, &field).unwrap();
        let StarMotion::Falling(fall) = &s.motion else { panic!("expected falling") };
        let c = fall.config();
        assert_eq!(c.duration, 5.0);
        assert_eq!(c.impact_radius, 0.6);
        assert!(!c.bounce);
        assert!((c.target_position - Vec3::new(0.0, 2.5, 0.0)).length() < 1e-4);
    }

    #[test]
    fn claim_only_from_orbit() {
        let mut s = star();
        s.claim(GeoCoord::new(10.0, 20.0), 0.0, &config(true)).unwrap();
        let err = s.claim(GeoCoord::new(0.0, 0.0), 1.0, &config(true)).unwrap_err();
        assert!(matches!(
            err,
            StarfallError::NotOrbiting { status: StarStatus::Falling, .. }
        ));
    }

    #[test]
    fn fall_starts_from_current_orbit_position() {
        let mut s = star();
        tick(&mut s, 1.0, 2.0);
        let orbit_pos = s.position;
        s.claim(GeoCoord::new(45.0, 45.0), 1.0, &config(true)).unwrap();
        let StarMotion::Falling(fall) = &s.motion else { panic!("expected falling") };
        assert_eq!(fall.config().start_position, orbit_pos);
    }

    #[test]
    fn resync_only_while_orbiting() {
        let mut s = star();
        assert!(s.resync(0.0));
        s.claim(GeoCoord::new(0.0, 0.0), 0.0, &config(true)).unwrap();
        assert!(!s.resync(0.0));
    }
}
