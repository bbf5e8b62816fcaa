use std::collections::HashSet;

use gamefw_core::events::{Dispatch, EventArg, EventBus};

use super::names::{MOUSE_DOWN, MOUSE_LEAVE, MOUSE_MOVE, MOUSE_UP, WHEEL};
use super::types::{ButtonState, InputEvent, MouseButton};

/// Pointer state plus the bus its transitions are published on.
#[derive(Debug, Default)]
pub struct MouseHandler {
    events: EventBus,
    position: Option<(f32, f32)>,
    held: HashSet<MouseButton>,
}

impl MouseHandler {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    #[inline]
    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Last known pointer position; `None` once the pointer left the surface.
    pub fn position(&self) -> Option<(f32, f32)> {
        self.position
    }

    pub fn is_down(&self, button: MouseButton) -> bool {
        self.held.contains(&button)
    }

    /// Applies `ev`. Returns the dispatch report when something was published.
    pub fn handle(&mut self, ev: &InputEvent) -> Option<Dispatch> {
        match *ev {
            InputEvent::PointerMoved { x, y } => {
                self.position = Some((x, y));
                Some(self.events.trigger_args(MOUSE_MOVE, &[EventArg::Point { x, y }]))
            }
            InputEvent::PointerButton { button, state, x, y } => {
                self.position = Some((x, y));
                let (id, changed) = match state {
                    ButtonState::Pressed => (MOUSE_DOWN, self.held.insert(button)),
                    ButtonState::Released => (MOUSE_UP, self.held.remove(&button)),
                };
                if !changed {
                    return None;
                }
                log::debug!("{id}: {button:?} at ({x}, {y})");
                let args = [EventArg::custom(button), EventArg::Point { x, y }];
                Some(self.events.trigger_args(id, &args))
            }
            InputEvent::Wheel { dx, dy } => {
                let args = [EventArg::Float(dx.into()), EventArg::Float(dy.into())];
                Some(self.events.trigger_args(WHEEL, &args))
            }
            InputEvent::PointerLeft => {
                self.position = None;
                Some(self.events.trigger(MOUSE_LEAVE))
            }
            InputEvent::Focused(false) => {
                self.held.clear();
                None
            }
            _ => None,
        }
    }
}
