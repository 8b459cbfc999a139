//! Wire format shared with the page's TypeScript.
//! The page-side reader must use the same layout and constants.
//!
//! Layout (all values f32):
//! ```text
//! [Instances: instance_count × 8 floats]  x, y, z, vx, vy, vz, status, progress
//! [Events:    event_count × 8 floats]     kind, handle, x, y, z, radius, time, pad
//! ```
//!
//! Both sections are exported as separate pointers; counts are read per frame.

use bytemuck::{Pod, Zeroable};

use crate::api::types::StarEvent;
use crate::components::star::Star;

/// Protocol version reported to the page.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per star instance (wire format — never changes).
pub const INSTANCE_FLOATS: usize = 8;

/// Floats per event record (wire format — never changes).
pub const EVENT_FLOATS: usize = 8;

/// Largest star handle. Handles travel as f32, which is exact up to 2^24.
pub const MAX_HANDLE: u32 = 1 << 24;

/// Event kind codes.
pub const EVENT_KIND_IMPACT: f32 = 1.0;
pub const EVENT_KIND_LANDED: f32 = 2.0;

/// Per-star data for one frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct StarInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub vx: f32,
    pub vy: f32,
    pub vz: f32,
    /// 0 = orbiting, 1 = falling, 2 = landed.
    pub status: f32,
    /// Fall progress in [0, 1].
    pub progress: f32,
}

impl StarInstance {
    pub const FLOATS: usize = INSTANCE_FLOATS;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_star(star: &Star) -> Self {
        Self {
            x: star.position.x,
            y: star.position.y,
            z: star.position.z,
            vx: star.velocity.x,
            vy: star.velocity.y,
            vz: star.velocity.z,
            status: star.status().code(),
            progress: star.progress(),
        }
    }
}

/// A star event flattened for the page.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub handle: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Impact effect radius (0 for landings).
    pub radius: f32,
    pub time: f32,
    pub _pad: f32,
}

impl EventRecord {
    pub const FLOATS: usize = EVENT_FLOATS;
}

impl From<StarEvent> for EventRecord {
    fn from(event: StarEvent) -> Self {
        match event {
            StarEvent::Impact { handle, position, radius, time } => Self {
                kind: EVENT_KIND_IMPACT,
                handle: handle.0 as f32,
                x: position.x,
                y: position.y,
                z: position.z,
                radius,
                time,
                _pad: 0.0,
            },
            StarEvent::Landed { handle, position, time } => Self {
                kind: EVENT_KIND_LANDED,
                handle: handle.0 as f32,
                x: position.x,
                y: position.y,
                z: position.z,
                radius: 0.0,
                time,
                _pad: 0.0,
            },
        }
    }
}
