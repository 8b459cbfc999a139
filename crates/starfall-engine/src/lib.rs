pub mod api;
pub mod bridge;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod motion;

// Re-export key types at crate root for convenience
pub use api::config::FieldConfig;
pub use api::types::{StarEvent, StarHandle, StarStatus};
pub use bridge::buffer::FrameBuffer;
pub use bridge::protocol::{
    EventRecord, StarInstance, EVENT_FLOATS, EVENT_KIND_IMPACT, EVENT_KIND_LANDED,
    INSTANCE_FLOATS, MAX_HANDLE, PROTOCOL_VERSION,
};
pub use components::star::{Star, StarMotion};
pub use crate::core::field::StarField;
pub use crate::core::time::{FrameClock, FrameTime};
pub use error::{Result, StarfallError};
pub use input::queue::{CommandQueue, FieldCommand};

// Motion simulators — usable on their own, without a field
pub use motion::{
    bounce_height, create_falling_config, generate_orbital_config,
    generate_orbital_config_seeded, lat_lon_to_vec3, orbit_seed, trajectory_point,
    FallingConfig, FallingState, FallingTrajectory, GeoCoord, OrbitalConfig, OrbitalMotion,
    OrbitalSample,
};
