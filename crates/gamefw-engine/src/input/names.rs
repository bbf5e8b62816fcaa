//! Event ids published by the input handlers.

/// `[Key]`
pub const KEY_DOWN: &str = "keydown";
/// `[Key]`
pub const KEY_UP: &str = "keyup";

/// `[MouseButton, Point]`
pub const MOUSE_DOWN: &str = "mousedown";
/// `[MouseButton, Point]`
pub const MOUSE_UP: &str = "mouseup";
/// `[Point]`
pub const MOUSE_MOVE: &str = "mousemove";
/// No arguments.
pub const MOUSE_LEAVE: &str = "mouseleave";
/// `[Float(dx), Float(dy)]`
pub const WHEEL: &str = "wheel";
