use std::fmt;

/// Keyboard key identifier.
///
/// Hosts map their platform key codes onto these; anything unmapped goes
/// through `Unknown` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    Unknown(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Press state shared by keys and mouse buttons.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Platform-agnostic input event. Coordinates are logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: ButtonState,
        /// Auto-repeat from a held key.
        repeat: bool,
    },
    PointerMoved {
        x: f32,
        y: f32,
    },
    PointerButton {
        button: MouseButton,
        state: ButtonState,
        x: f32,
        y: f32,
    },
    Wheel {
        dx: f32,
        dy: f32,
    },
    /// Pointer left the drawing surface.
    PointerLeft,
    /// Focus gained (`true`) or lost.
    Focused(bool),
}

impl InputEvent {
    pub fn key_down(key: Key) -> Self {
        Self::Key { key, state: ButtonState::Pressed, repeat: false }
    }

    pub fn key_up(key: Key) -> Self {
        Self::Key { key, state: ButtonState::Released, repeat: false }
    }

    pub fn is_keyboard(&self) -> bool {
        matches!(self, Self::Key { .. })
    }

    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PointerMoved { .. } | Self::PointerButton { .. } | Self::Wheel { .. } | Self::PointerLeft
        )
    }
}
