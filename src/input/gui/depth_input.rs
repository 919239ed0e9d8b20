use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// One processed batch of depth commands, drained from pending key edges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DepthCommands {
    pub forward: bool,
    pub backward: bool,
    pub reset: bool,
}

impl DepthCommands {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.forward || self.backward || self.reset)
    }
}

/// Collects depth-stepping key presses between frames. Presses are edges,
/// not held state: key repeat delivers one step per press event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DepthInputState {
    forward_pending: bool,
    backward_pending: bool,
    reset_pending: bool,
}

impl DepthInputState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        match key_code {
            KeyCode::ArrowRight => self.forward_pending = true,
            KeyCode::ArrowLeft => self.backward_pending = true,
            KeyCode::KeyR => self.reset_pending = true,
            _ => {}
        }
    }

    /// Drains the pending edges into one command batch.
    pub fn take(&mut self) -> DepthCommands {
        let commands = DepthCommands {
            forward: self.forward_pending,
            backward: self.backward_pending,
            reset: self.reset_pending,
        };

        *self = Self::default();
        commands
    }
}
