/// Clock values every simulator sees for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Simulated seconds since the clock started.
    pub current_time: f32,
    /// Simulated seconds since the previous frame.
    pub delta: f32,
}

/// Per-frame simulation clock.
/// Turns the host's variable frame time into a sanitized (current_time, delta) pair.
pub struct FrameClock {
    /// Largest delta handed to the simulators.
    max_delta: f32,
    current_time: f32,
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            max_delta,
            current_time: 0.0,
        }
    }

    /// Advance by one host frame.
    /// Negative or non-finite input counts as zero; long stalls (background tab) are capped.
    pub fn advance(&mut self, frame_dt: f32) -> FrameTime {
        let delta = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, self.max_delta)
        } else {
            0.0
        };
        self.current_time += delta;
        FrameTime {
            current_time: self.current_time,
            delta,
        }
    }

    /// The current frame's clock without advancing.
    pub fn now(&self) -> FrameTime {
        FrameTime {
            current_time: self.current_time,
            delta: 0.0,
        }
    }

    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }

    pub fn reset(&mut self) {
        self.current_time = 0.0;
    }
}
