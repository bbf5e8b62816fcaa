use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Positional argument handed to every handler of a trigger.
///
/// `Custom` carries any other payload (input keys, game objects, ...) and is
/// read back with [`EventArg::downcast_ref`].
#[derive(Clone)]
pub enum EventArg {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Position in logical pixels.
    Point { x: f32, y: f32 },
    Custom(Rc<dyn Any>),
}

impl EventArg {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn custom<T: Any>(value: T) -> Self {
        Self::Custom(Rc::new(value))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value; integers are widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_point(&self) -> Option<(f32, f32)> {
        match self {
            Self::Point { x, y } => Some((*x, *y)),
            _ => None,
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Custom(v) => v.downcast_ref::<T>(),
            _ => None,
        }
    }
}

/// `Custom` payloads compare by identity.
impl PartialEq for EventArg {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Point { x: ax, y: ay }, Self::Point { x: bx, y: by }) => ax == bx && ay == by,
            (Self::Custom(a), Self::Custom(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for EventArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "Bool({b})"),
            Self::Int(i) => write!(f, "Int({i})"),
            Self::Float(v) => write!(f, "Float({v})"),
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Point { x, y } => write!(f, "Point({x}, {y})"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<bool> for EventArg {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for EventArg {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for EventArg {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for EventArg {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for EventArg {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}
