use starfall_engine::{
    CommandQueue, FieldCommand, FieldConfig, FrameBuffer, FrameClock, GeoCoord, StarField,
    StarHandle, PROTOCOL_VERSION,
};

/// Wires the star field to the browser's animation loop.
///
/// The page calls `tick(dt)` once per `requestAnimationFrame`; commands pushed
/// between frames are applied at the start of the next tick on that frame's clock.
/// Kept free of wasm-bindgen types so it can be tested natively.
pub struct FieldRunner {
    field: StarField,
    commands: CommandQueue,
    clock: FrameClock,
    buffer: FrameBuffer,
}

impl FieldRunner {
    pub fn new(config: FieldConfig) -> Self {
        let clock = FrameClock::new(config.max_frame_delta);
        let buffer = FrameBuffer::with_capacity(config.max_stars);
        Self {
            field: StarField::new(config),
            commands: CommandQueue::new(),
            clock,
            buffer,
        }
    }

    /// Build a runner from the page's JSON config, falling back to defaults on error.
    pub fn from_json(json: &str) -> Self {
        let config = if json.trim().is_empty() {
            FieldConfig::default()
        } else {
            FieldConfig::from_json(json).unwrap_or_else(|err| {
                log::warn!("{err}; using default field config");
                FieldConfig::default()
            })
        };
        Self::new(config)
    }

    /// Add a star. Returns its handle, or `u32::MAX` if the field is full.
    pub fn add_star(&mut self, name: &str, fallback_seed: f32) -> u32 {
        match self.field.spawn(name, fallback_seed) {
            Ok(handle) => handle.0,
            Err(err) => {
                log::warn!("add_star: {err}");
                u32::MAX
            }
        }
    }

    pub fn push_command(&mut self, command: FieldCommand) {
        self.commands.push(command);
    }

    /// Run one frame: apply commands, advance every star, serialize output.
    pub fn tick(&mut self, dt: f32) {
        let frame = self.clock.advance(dt);

        for command in self.commands.drain() {
            self.apply(command, frame.current_time);
        }

        self.field.tick(frame);
        self.field.write_frame(&mut self.buffer);
    }

    fn apply(&mut self, command: FieldCommand, current_time: f32) {
        let result = match command {
            FieldCommand::Claim { handle, lat, lon } => {
                self.field.claim(handle, GeoCoord::new(lat, lon), current_time)
            }
            FieldCommand::Remove { handle } => {
                if self.field.despawn(handle).is_none() {
                    log::warn!("remove: unknown {handle}");
                }
                Ok(())
            }
            FieldCommand::Resync { handle, angle } => self.field.resync(handle, angle).map(|_| ()),
        };
        if let Err(err) = result {
            log::warn!("{command:?} rejected: {err}");
        }
    }

    /// Drop every star and restart the clock.
    pub fn reset(&mut self) {
        self.field.clear();
        self.commands.drain();
        self.clock.reset();
        self.buffer.clear();
    }

    pub fn field(&self) -> &StarField {
        &self.field
    }

    // ---- Pointer accessors for the page's Float32Array views ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.buffer.instance_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.buffer.events_ptr()
    }

    pub fn event_count(&self) -> u32 {
        self.buffer.event_count()
    }

    pub fn current_time(&self) -> f32 {
        self.clock.current_time()
    }

    pub fn earth_radius(&self) -> f32 {
        self.field.config().earth_radius
    }

    pub fn protocol_version(&self) -> f32 {
        PROTOCOL_VERSION
    }

    /// Status code of a star, or -1 if unknown.
    pub fn star_status(&self, handle: u32) -> f32 {
        self.field
            .get(StarHandle(handle))
            .map_or(-1.0, |star| star.status().code())
    }
}
