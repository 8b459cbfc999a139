use crate::api::config::FieldConfig;
use crate::api::types::{StarEvent, StarHandle, StarStatus};
use crate::bridge::buffer::FrameBuffer;
use crate::bridge::protocol::{EventRecord, StarInstance, MAX_HANDLE};
use crate::components::star::Star;
use crate::core::time::FrameTime;
use crate::error::{Result, StarfallError};
use crate::motion::geo::GeoCoord;
use crate::motion::orbit::OrbitalMotion;
use crate::motion::seed::{generate_orbital_config_seeded, orbit_seed};

/// All stars circling the globe.
/// Flat Vec storage; sized for hundreds of visitors, not millions.
pub struct StarField {
    config: FieldConfig,
    stars: Vec<Star>,
    events: Vec<StarEvent>,
    next_handle: u32,
}

impl StarField {
    pub fn new(config: FieldConfig) -> Self {
        log::info!(
            "star field: earth radius {}, orbit radius {}, capacity {}",
            config.earth_radius,
            config.orbit_radius,
            config.max_stars
        );
        Self {
            stars: Vec::with_capacity(config.max_stars),
            events: Vec::new(),
            next_handle: 1,
            config,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Add an orbiting star seeded from `name`.
    /// `fallback_seed` is used when the name is empty.
    pub fn spawn(&mut self, name: &str, fallback_seed: f32) -> Result<StarHandle> {
        if self.stars.len() >= self.config.max_stars {
            log::warn!("star field full, rejecting '{name}'");
            return Err(StarfallError::Capacity(self.config.max_stars));
        }
        if self.next_handle > MAX_HANDLE {
            log::warn!("star handles exhausted, rejecting '{name}'");
            return Err(StarfallError::HandlesExhausted);
        }
        let handle = StarHandle(self.next_handle);
        self.next_handle += 1;

        let seed = orbit_seed(name, fallback_seed);
        let orbit = generate_orbital_config_seeded(self.config.orbit_radius, self.config.orbit_speed, seed);
        self.stars.push(Star::new(handle, name, OrbitalMotion::new(orbit)));
        log::debug!("{handle} '{name}' spawned (seed {seed})");
        Ok(handle)
    }

    /// Remove a star. Returns it if found.
    pub fn despawn(&mut self, handle: StarHandle) -> Option<Star> {
        let idx = self.stars.iter().position(|s| s.handle == handle)?;
        Some(self.stars.swap_remove(idx))
    }

    pub fn get(&self, handle: StarHandle) -> Option<&Star> {
        self.stars.iter().find(|s| s.handle == handle)
    }

    pub fn get_mut(&mut self, handle: StarHandle) -> Option<&mut Star> {
        self.stars.iter_mut().find(|s| s.handle == handle)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Star> {
        self.stars.iter().find(|s| s.name == name)
    }

    /// Send a star down to `destination`, starting at `current_time`.
    pub fn claim(&mut self, handle: StarHandle, destination: GeoCoord, current_time: f32) -> Result<()> {
        let star = self
            .stars
            .iter_mut()
            .find(|s| s.handle == handle)
            .ok_or(StarfallError::UnknownStar(handle))?;
        star.claim(destination, current_time, &self.config)
    }

    /// Re-synchronize one star's orbit angle.
    pub fn resync(&mut self, handle: StarHandle, angle: f32) -> Result<bool> {
        let star = self
            .get_mut(handle)
            .ok_or(StarfallError::UnknownStar(handle))?;
        Ok(star.resync(angle))
    }

    /// Advance every star with the same frame time.
    pub fn tick(&mut self, frame: FrameTime) {
        for star in self.stars.iter_mut() {
            star.tick(frame.current_time, frame.delta, &mut self.events);
        }
    }

    /// Events produced since the last drain.
    pub fn drain_events(&mut self) -> impl Iterator<Item = StarEvent> + '_ {
        self.events.drain(..)
    }

    pub fn count_by_status(&self, status: StarStatus) -> usize {
        self.stars.iter().filter(|s| s.status() == status).count()
    }

    /// Serialize star state and pending events for the bridge. Drains events.
    pub fn write_frame(&mut self, buffer: &mut FrameBuffer) {
        buffer.clear();
        for star in &self.stars {
            buffer.push_instance(StarInstance::from_star(star));
        }
        for event in self.events.drain(..) {
            buffer.push_event(EventRecord::from(event));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Remove all stars and pending events.
    pub fn clear(&mut self) {
        log::info!("star field cleared ({} stars)", self.stars.len());
        self.stars.clear();
        self.events.clear();
    }
}

impl Default for StarField {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}
