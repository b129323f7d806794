/// Input event types the engine understands.
/// Generic, no game-specific semantics. Coordinates are viewport pixels
/// with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A press began at (x, y).
    PointerDown { x: f32, y: f32 },
    /// A press ended at (x, y).
    PointerUp { x: f32, y: f32 },
    /// The cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// Two clicks in quick succession at (x, y).
    DoubleClick { x: f32, y: f32 },
    /// Mouse wheel scrolled; `delta_y > 0` scrolls down.
    Wheel { delta_y: f32 },
    /// A key was pressed. `key_code` is the Unicode scalar of the key label.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// The viewport was resized to `width × height` pixels.
    Resize { width: f32, height: f32 },
    /// A custom event from the UI layer (sliders, buttons).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

impl InputEvent {
    /// The pressed key as a lowercase character, if this is a key-down event.
    pub fn key_char(&self) -> Option<char> {
        match *self {
            InputEvent::KeyDown { key_code } => {
                char::from_u32(key_code).map(|c| c.to_ascii_lowercase())
            }
            _ => None,
        }
    }
}

/// A queue of input events.
/// The host writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::Wheel { delta_y: -120.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events[1], InputEvent::Wheel { delta_y: -120.0 });
        assert!(q.is_empty());
    }

    #[test]
    fn key_char_is_case_insensitive() {
        let upper = InputEvent::KeyDown { key_code: 'T' as u32 };
        let lower = InputEvent::KeyDown { key_code: 't' as u32 };
        assert_eq!(upper.key_char(), Some('t'));
        assert_eq!(lower.key_char(), Some('t'));
        assert_eq!(InputEvent::KeyUp { key_code: 't' as u32 }.key_char(), None);
    }

    #[test]
    fn invalid_scalar_has_no_char() {
        let e = InputEvent::KeyDown { key_code: 0xD800 };
        assert_eq!(e.key_char(), None);
    }
}
