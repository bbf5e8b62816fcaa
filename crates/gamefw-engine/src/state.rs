use gamefw_core::events::Dispatch;
use gamefw_core::store::ObjectStore;

use crate::input::{InputEvent, KeyHandler, MouseHandler};
use crate::render::GameObject;

/// One section of a game (intro, menu, level, ...).
///
/// Each state has its own key handler, mouse handler and object store, so
/// switching states swaps input bindings and scene contents together.
#[derive(Debug)]
pub struct State<O = Box<dyn GameObject>> {
    pub keys: KeyHandler,
    pub mouse: MouseHandler,
    store: ObjectStore<String, O>,
}

impl<O> Default for State<O> {
    fn default() -> Self {
        Self {
            keys: KeyHandler::default(),
            mouse: MouseHandler::default(),
            store: ObjectStore::default(),
        }
    }
}

impl<O: GameObject> State<O> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `obj` under `key`. Keys may repeat.
    pub fn add(&mut self, key: impl Into<String>, obj: O) {
        self.store.set(key.into(), obj);
    }

    pub fn get(&self, key: &str) -> Option<&O> {
        self.store.get(key)
    }

    #[inline]
    pub fn store(&self) -> &ObjectStore<String, O> {
        &self.store
    }

    #[inline]
    pub fn store_mut(&mut self) -> &mut ObjectStore<String, O> {
        &mut self.store
    }

    /// Routes `ev` to the handler that owns it. Focus changes reach both.
    pub fn dispatch(&mut self, ev: &InputEvent) -> Option<Dispatch> {
        match ev {
            InputEvent::Focused(_) => {
                let keys = self.keys.handle(ev);
                let mouse = self.mouse.handle(ev);
                keys.or(mouse)
            }
            e if e.is_keyboard() => self.keys.handle(e),
            e if e.is_pointer() => self.mouse.handle(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gamefw_core::store::{Layered, ZIndex};

    use super::*;
    use crate::input::{names, Key, MouseButton, ButtonState};
    use crate::Renderer;

    struct Marker(f32);

    impl Layered for Marker {
        fn z(&self) -> Option<ZIndex> {
            Some(ZIndex(self.0))
        }
    }

    impl GameObject for Marker {
        fn update(&mut self, _: f64, _: f32, _: f32, _: &Renderer) {}
        fn render(&self, _: f64, _: f32, _: f32, _: &Renderer) {}
    }

    #[test]
    fn add_keeps_store_in_z_order() {
        let mut state = State::new();
        state.add("front", Marker(2.0));
        state.add("back", Marker(-2.0));

        let keys: Vec<&str> = state.store().keys().map(String::as_str).collect();
        assert_eq!(keys, ["back", "front"]);
        assert!(state.get("front").is_some());
        assert!(state.get("side").is_none());
    }

    #[test]
    fn dispatch_routes_to_owning_handler() {
        let mut state: State<Marker> = State::new();
        let keydowns = Rc::new(Cell::new(0));
        let clicks = Rc::new(Cell::new(0));

        let k = Rc::clone(&keydowns);
        state.keys.events_mut().bind(names::KEY_DOWN, "count", move |_, _| {
            k.set(k.get() + 1);
            Ok(())
        });
        let c = Rc::clone(&clicks);
        state.mouse.events_mut().bind(names::MOUSE_DOWN, "count", move |_, _| {
            c.set(c.get() + 1);
            Ok(())
        });

        state.dispatch(&InputEvent::key_down(Key::D));
        state.dispatch(&InputEvent::PointerButton {
            button: MouseButton::Right,
            state: ButtonState::Pressed,
            x: 0.0,
            y: 0.0,
        });

        assert_eq!((keydowns.get(), clicks.get()), (1, 1));
    }

    #[test]
    fn focus_loss_reaches_both_handlers() {
        let mut state: State<Marker> = State::new();
        state.dispatch(&InputEvent::key_down(Key::S));
        state.dispatch(&InputEvent::PointerButton {
            button: MouseButton::Left,
            state: ButtonState::Pressed,
            x: 0.0,
            y: 0.0,
        });

        state.dispatch(&InputEvent::Focused(false));

        assert!(!state.keys.is_down(Key::S));
        assert!(!state.mouse.is_down(MouseButton::Left));
    }

    #[test]
    fn states_have_independent_buses() {
        let mut menu: State<Marker> = State::new();
        let level: State<Marker> = State::new();
        menu.keys.events_mut().bind(names::KEY_DOWN, "select", |_, _| Ok(()));

        assert!(menu.keys.events().is_bound(names::KEY_DOWN));
        assert!(!level.keys.events().is_bound(names::KEY_DOWN));
    }
}
