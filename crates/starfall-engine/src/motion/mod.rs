// motion/mod.rs
//
// Per-star motion simulators. Pure math, no dependency on the field or the bridge:
// each simulator owns its own state and is advanced by the caller's clock.

pub mod falling;
pub mod geo;
pub mod orbit;
pub mod seed;

pub use falling::{bounce_height, trajectory_point, FallingConfig, FallingState, FallingTrajectory};
pub use geo::{create_falling_config, lat_lon_to_vec3, GeoCoord};
pub use orbit::{OrbitalConfig, OrbitalMotion, OrbitalSample};
pub use seed::{generate_orbital_config, generate_orbital_config_seeded, orbit_seed};
