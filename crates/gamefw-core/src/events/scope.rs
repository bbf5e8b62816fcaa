use std::any::Any;

use super::{EventArg, EventBus};

/// Receiver context a handler is invoked with.
#[derive(Debug, Clone, Copy)]
pub enum Scope<'a> {
    /// The bus that is dispatching. Default when no scope is given.
    Bus(&'a EventBus),
    /// Caller-provided context object.
    Object(&'a dyn Any),
    /// A sequence passed as scope alongside explicit args.
    Values(&'a [EventArg]),
}

impl<'a> Scope<'a> {
    pub fn is_bus(&self) -> bool {
        matches!(self, Scope::Bus(_))
    }

    pub fn bus(&self) -> Option<&'a EventBus> {
        match *self {
            Scope::Bus(bus) => Some(bus),
            _ => None,
        }
    }

    /// Downcasts an `Object` scope.
    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        match *self {
            Scope::Object(obj) => obj.downcast_ref::<T>(),
            _ => None,
        }
    }
}

/// The optional scope argument of [`EventBus::trigger_with`].
///
/// `Args` is the sequence form: on its own it is taken as the argument list.
#[derive(Debug, Clone, Copy)]
pub enum ScopeArg<'a> {
    Object(&'a dyn Any),
    Args(&'a [EventArg]),
}

const NO_ARGS: &[EventArg] = &[];

/// Resolves the (scope, args) pair of a trigger call.
///
/// | scope | args | resolved |
/// |-------|------|----------|
/// | `Args(a)` | none | bus, `a` |
/// | `Object(o)` | none | `o`, `[]` |
/// | none | none | bus, `[]` |
/// | none | `a` | bus, `a` |
/// | `Object(o)` | `a` | `o`, `a` |
/// | `Args(s)` | `a` | `Values(s)`, `a` |
pub(crate) fn resolve<'a>(
    bus: &'a EventBus,
    scope: Option<ScopeArg<'a>>,
    args: Option<&'a [EventArg]>,
) -> (Scope<'a>, &'a [EventArg]) {
    match (scope, args) {
        (Some(ScopeArg::Args(a)), None) => (Scope::Bus(bus), a),
        (Some(ScopeArg::Object(o)), None) => (Scope::Object(o), NO_ARGS),
        (None, None) => (Scope::Bus(bus), NO_ARGS),
        (None, Some(a)) => (Scope::Bus(bus), a),
        (Some(ScopeArg::Object(o)), Some(a)) => (Scope::Object(o), a),
        (Some(ScopeArg::Args(s)), Some(a)) => (Scope::Values(s), a),
    }
}
