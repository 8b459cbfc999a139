use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Unique identifier for a star in the field.
/// Handles are never reused within one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StarHandle(pub u32);

impl std::fmt::Display for StarHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "star#{}", self.0)
    }
}

/// Which simulator currently drives a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarStatus {
    Orbiting,
    Falling,
    Landed,
}

impl StarStatus {
    /// Numeric code written into the wire buffer.
    pub fn code(self) -> f32 {
        match self {
            StarStatus::Orbiting => 0.0,
            StarStatus::Falling => 1.0,
            StarStatus::Landed => 2.0,
        }
    }
}

impl std::fmt::Display for StarStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StarStatus::Orbiting => "orbiting",
            StarStatus::Falling => "falling",
            StarStatus::Landed => "landed",
        };
        f.write_str(s)
    }
}

/// Something the presentation layer should react to exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StarEvent {
    /// The falling animation reached its target (impact flash).
    Impact {
        handle: StarHandle,
        position: Vec3,
        radius: f32,
        time: f32,
    },
    /// The star settled and its position is now frozen.
    Landed {
        handle: StarHandle,
        position: Vec3,
        time: f32,
    },
}

impl StarEvent {
    pub fn handle(&self) -> StarHandle {
        match *self {
            StarEvent::Impact { handle, .. } | StarEvent::Landed { handle, .. } => handle,
        }
    }
}
