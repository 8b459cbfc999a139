use super::protocol::{EventRecord, StarInstance};

/// Per-frame output read by the page through raw pointers.
pub struct FrameBuffer {
    pub instances: Vec<StarInstance>,
    pub events: Vec<EventRecord>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(max_stars: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_stars),
            events: Vec::with_capacity(32),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.events.clear();
    }

    pub fn push_instance(&mut self, instance: StarInstance) {
        self.instances.push(instance);
    }

    pub fn push_event(&mut self, event: EventRecord) {
        self.events.push(event);
    }

    /// Instance data as a flat float slice.
    pub fn instance_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Event data as a flat float slice.
    pub fn event_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.events)
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.events.len() as u32
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
