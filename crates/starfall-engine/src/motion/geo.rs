// motion/geo.rs
//
// Latitude/longitude to globe-space conversion. The sign and offset convention
// decides where a location appears on the rendered globe; keep it exact.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::falling::FallingConfig;

pub const DEFAULT_GRAVITY: f32 = 9.8;
pub const DEFAULT_IMPACT_RADIUS: f32 = 0.3;

/// A location on the globe, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoord {
    pub lat: f32,
    pub lon: f32,
}

impl GeoCoord {
    pub fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }

    pub fn to_vec3(self, radius: f32) -> Vec3 {
        lat_lon_to_vec3(self.lat, self.lon, radius)
    }
}

/// Point on a sphere of `radius` centered at the origin.
/// Uses colatitude `phi = 90 - lat` and `theta = lon + 180`.
pub fn lat_lon_to_vec3(lat: f32, lon: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(
        -radius * sin_phi * cos_theta,
        radius * cos_phi,
        radius * sin_phi * sin_theta,
    )
}

/// Falling config from `start` down to the globe surface at (`lat`, `lon`).
pub fn create_falling_config(
    start: Vec3,
    lat: f32,
    lon: f32,
    earth_radius: f32,
    duration: f32,
) -> FallingConfig {
    FallingConfig {
        start_position: start,
        target_position: lat_lon_to_vec3(lat, lon, earth_radius),
        duration,
        gravity: DEFAULT_GRAVITY,
        bounce: true,
        impact_radius: DEFAULT_IMPACT_RADIUS,
    }
}
