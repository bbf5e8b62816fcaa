use std::collections::HashSet;

use gamefw_core::events::{Dispatch, EventArg, EventBus};

use super::names::{KEY_DOWN, KEY_UP};
use super::types::{ButtonState, InputEvent, Key};

/// Keyboard state plus the bus its transitions are published on.
///
/// `keydown` fires once per physical press; auto-repeat is swallowed.
/// Losing focus forgets held keys without publishing `keyup`.
#[derive(Debug, Default)]
pub struct KeyHandler {
    events: EventBus,
    held: HashSet<Key>,
}

impl KeyHandler {
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

    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn held(&self) -> impl Iterator<Item = Key> + '_ {
        self.held.iter().copied()
    }

    /// Applies `ev`. Returns the dispatch report when a transition was
    /// published.
    pub fn handle(&mut self, ev: &InputEvent) -> Option<Dispatch> {
        match *ev {
            InputEvent::Key { key, state: ButtonState::Pressed, .. } => {
                if !self.held.insert(key) {
                    return None;
                }
                log::debug!("key down: {key}");
                Some(self.events.trigger_args(KEY_DOWN, &[EventArg::custom(key)]))
            }
            InputEvent::Key { key, state: ButtonState::Released, .. } => {
                if !self.held.remove(&key) {
                    return None;
                }
                log::debug!("key up: {key}");
                Some(self.events.trigger_args(KEY_UP, &[EventArg::custom(key)]))
            }
            InputEvent::Focused(false) => {
                self.held.clear();
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::input::key_arg;

    fn recording(handler: &mut KeyHandler) -> Rc<RefCell<Vec<(&'static str, Key)>>> {
        let log: Rc<RefCell<Vec<(&'static str, Key)>>> = Rc::default();
        for id in [KEY_DOWN, KEY_UP] {
            let l = Rc::clone(&log);
            handler.events_mut().bind(id, "test", move |_, args| {
                let key = key_arg(args).ok_or_else(|| anyhow::anyhow!("missing key"))?;
                l.borrow_mut().push((id, key));
                Ok(())
            });
        }
        log
    }

    #[test]
    fn press_and_release_publish_once_each() {
        let mut keys = KeyHandler::new();
        let log = recording(&mut keys);

        keys.handle(&InputEvent::key_down(Key::Space));
        assert!(keys.is_down(Key::Space));
        keys.handle(&InputEvent::key_up(Key::Space));
        assert!(!keys.is_down(Key::Space));

        assert_eq!(*log.borrow(), vec![(KEY_DOWN, Key::Space), (KEY_UP, Key::Space)]);
    }

    #[test]
    fn repeats_and_stray_releases_are_swallowed() {
        let mut keys = KeyHandler::new();
        let log = recording(&mut keys);

        keys.handle(&InputEvent::key_down(Key::A));
        let repeat = keys.handle(&InputEvent::Key {
            key: Key::A,
            state: ButtonState::Pressed,
            repeat: true,
        });
        let stray = keys.handle(&InputEvent::key_up(Key::B));

        assert!(repeat.is_none());
        assert!(stray.is_none());
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn focus_loss_forgets_held_keys() {
        let mut keys = KeyHandler::new();
        keys.handle(&InputEvent::key_down(Key::W));
        keys.handle(&InputEvent::key_down(Key::ArrowLeft));

        keys.handle(&InputEvent::Focused(false));

        assert_eq!(keys.held().count(), 0);
    }

    #[test]
    fn pointer_events_are_ignored() {
        let mut keys = KeyHandler::new();
        assert!(keys.handle(&InputEvent::PointerMoved { x: 1.0, y: 1.0 }).is_none());
    }

    #[test]
    fn dispatch_report_counts_subscribers() {
        let mut keys = KeyHandler::new();
        keys.events_mut().bind(KEY_DOWN, "a", |_, _| Ok(()));
        keys.events_mut().bind(KEY_DOWN, "b", |_, _| Ok(()));

        let report = keys.handle(&InputEvent::key_down(Key::Enter));
        assert_eq!(report.map(|d| d.invoked), Some(2));
    }
}
