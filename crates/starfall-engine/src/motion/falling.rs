// motion/falling.rs
//
// Descent from an orbital position to a point on the globe.
// Horizontal motion is a straight lerp; vertical motion is a quadratic arc that
// peaks two units above the higher endpoint. Optional decaying bounce after impact.
//
// The simulator has no clock of its own: callers pass the same clock to
// `start_falling` and every `update_animation`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Height of the arc above the higher endpoint.
pub const ARC_HEIGHT: f32 = 2.0;
/// Bounce cycles played after impact.
pub const MAX_BOUNCES: u32 = 2;
/// Bounce height under which a cycle counts as finished.
pub const BOUNCE_THRESHOLD: f32 = 0.01;
/// Seconds after impact at which a bounce settles regardless of cycle count.
pub const BOUNCE_SETTLE_TIME: f32 = 2.0;

/// Endpoints and timing of one descent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallingConfig {
    pub start_position: Vec3,
    pub target_position: Vec3,
    /// Seconds, > 0.
    pub duration: f32,
    /// Carried for the presentation layer. The arc does not use it.
    pub gravity: f32,
    pub bounce: bool,
    /// Size of the impact effect. Not used by the simulator.
    pub impact_radius: f32,
}

/// Snapshot of a falling animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingState {
    pub start_time: Option<f32>,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Fraction of `duration` elapsed, in [0, 1].
    pub progress: f32,
    pub is_complete: bool,
    pub impact_time: Option<f32>,
}

/// Position along the arc at `normalized_time` in [0, 1].
pub fn trajectory_point(start: Vec3, target: Vec3, normalized_time: f32) -> Vec3 {
    let t = normalized_time.clamp(0.0, 1.0);
    let peak = start.y.max(target.y) + ARC_HEIGHT;
    let rise = 1.0 - (1.0 - t) * (1.0 - t);
    let y = start.y + (peak - start.y) * rise + (target.y - peak) * t * t;
    Vec3::new(
        start.x + (target.x - start.x) * t,
        y,
        start.z + (target.z - start.z) * t,
    )
}

/// Decaying bounce offset `t` seconds after impact. Never negative.
pub fn bounce_height(t: f32) -> f32 {
    (0.5 * (10.0 * t).sin() * (-3.0 * t).exp()).max(0.0)
}

/// Falling animation state for a single star.
#[derive(Debug, Clone)]
pub struct FallingTrajectory {
    config: FallingConfig,
    state: FallingState,
    animating: bool,
    has_impacted: bool,
    bounce_count: u32,
    /// Whether the current bounce cycle has risen above the threshold yet.
    airborne: bool,
}

impl FallingTrajectory {
    pub fn new(config: FallingConfig) -> Self {
        Self {
            config,
            state: Self::idle_state(&config),
            animating: false,
            has_impacted: false,
            bounce_count: 0,
            airborne: false,
        }
    }

    fn idle_state(config: &FallingConfig) -> FallingState {
        FallingState {
            start_time: None,
            position: config.start_position,
            velocity: Vec3::ZERO,
            progress: 0.0,
            is_complete: false,
            impact_time: None,
        }
    }

    /// Begin (or restart) the descent at `current_time`.
    pub fn start_falling(&mut self, current_time: f32) {
        self.state = FallingState {
            start_time: Some(current_time),
            ..Self::idle_state(&self.config)
        };
        self.animating = true;
        self.has_impacted = false;
        self.bounce_count = 0;
        self.airborne = false;
    }

    /// Advance the animation. Returns the last state unchanged when not animating.
    pub fn update_animation(&mut self, current_time: f32, delta: f32) -> FallingState {
        if !self.animating {
            return self.state;
        }
        let Some(start_time) = self.state.start_time else {
            return self.state;
        };

        let previous = self.state.position;

        if !self.state.is_complete {
            let elapsed = (current_time - start_time).max(0.0);
            if elapsed < self.config.duration {
                let t = elapsed / self.config.duration;
                self.state.position =
                    trajectory_point(self.config.start_position, self.config.target_position, t);
                self.state.progress = t;
            } else {
                self.state.position = self.config.target_position;
                self.state.progress = 1.0;
                self.state.is_complete = true;
                self.state.impact_time = Some(current_time);
                self.has_impacted = true;
                if !self.config.bounce {
                    self.animating = false;
                }
            }
        } else {
            self.step_bounce(current_time);
        }

        if delta > 0.0 {
            self.state.velocity = (self.state.position - previous) / delta;
        }
        self.state
    }

    fn step_bounce(&mut self, current_time: f32) {
        let impact_time = self.state.impact_time.unwrap_or(current_time);
        let since_impact = (current_time - impact_time).max(0.0);
        let height = bounce_height(since_impact);

        if height >= BOUNCE_THRESHOLD {
            self.airborne = true;
        } else if self.airborne {
            self.airborne = false;
            self.bounce_count += 1;
        }

        if self.bounce_count >= MAX_BOUNCES || since_impact >= BOUNCE_SETTLE_TIME {
            self.state.position = self.config.target_position;
            self.animating = false;
        } else {
            self.state.position = self.config.target_position + Vec3::Y * height;
        }
    }

    /// Back to idle at the start position.
    pub fn reset(&mut self) {
        self.state = Self::idle_state(&self.config);
        self.animating = false;
        self.has_impacted = false;
        self.bounce_count = 0;
        self.airborne = false;
    }

    pub fn current_state(&self) -> FallingState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn has_impacted(&self) -> bool {
        self.has_impacted
    }

    pub fn impact_radius(&self) -> f32 {
        self.config.impact_radius
    }

    pub fn bounce_count(&self) -> u32 {
        self.bounce_count
    }

    pub fn config(&self) -> &FallingConfig {
        &self.config
    }
}
