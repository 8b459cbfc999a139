use crate::api::types::StarHandle;

/// Commands the page issues between frames.
/// Applied at the start of the next tick, on that frame's clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldCommand {
    /// A visitor claimed a star: send it down to (lat, lon).
    Claim { handle: StarHandle, lat: f32, lon: f32 },
    /// Remove a star from the field.
    Remove { handle: StarHandle },
    /// Re-synchronize a star's orbit angle (e.g. after the page was hidden).
    Resync { handle: StarHandle, angle: f32 },
}

/// A queue of field commands.
/// JS pushes commands; Rust drains them once per frame.
pub struct CommandQueue {
    commands: Vec<FieldCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, command: FieldCommand) {
        self.commands.push(command);
    }

    /// Take all pending commands, in push order.
    pub fn drain(&mut self) -> Vec<FieldCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}
