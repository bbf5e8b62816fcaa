use crate::camera::Camera;
use crate::config::FrameworkConfig;
use crate::state::State;

use super::GameObject;

/// Counters for one [`Renderer::frame`] call.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub updated: usize,
    pub rendered: usize,
}

/// Drives the update and render passes over a state's objects.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: FrameworkConfig,
    frame_index: u64,
}

impl Renderer {
    pub fn new(config: FrameworkConfig) -> Self {
        log::info!(
            "renderer ready: {}x{}, clear={}",
            config.width,
            config.height,
            config.clear
        );
        Self { config, frame_index: 0 }
    }

    #[inline]
    pub fn config(&self) -> &FrameworkConfig {
        &self.config
    }

    /// Viewport size in logical pixels.
    #[inline]
    pub fn viewport(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Whether the host should clear before drawing this frame.
    #[inline]
    pub fn clear(&self) -> bool {
        self.config.clear
    }

    pub fn set_clear(&mut self, clear: bool) {
        self.config.clear = clear;
    }

    /// Number of frames completed so far.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Runs one frame: every object updates (in draw order), the store is
    /// re-sorted, then every object renders back-to-front.
    pub fn frame<O: GameObject>(&mut self, state: &mut State<O>, camera: &Camera, time: f64) -> FrameStats {
        let (sx, sy) = camera.scroll();
        let mut stats = FrameStats::default();

        {
            let this = &*self;
            state.store_mut().update_each(|_, obj| {
                obj.update(time, sx, sy, this);
                stats.updated += 1;
            });

            for entry in state.store().entries() {
                entry.value.render(time, sx, sy, this);
                stats.rendered += 1;
            }
        }

        self.frame_index = self.frame_index.wrapping_add(1);
        log::trace!(
            "frame {} done: {} updated, {} rendered",
            self.frame_index,
            stats.updated,
            stats.rendered
        );
        stats
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(FrameworkConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gamefw_core::store::{Layered, ZIndex};

    use super::*;

    type Trace = Rc<RefCell<Vec<String>>>;

    struct Probe {
        name: &'static str,
        z: f32,
        /// Added to `z` on every update.
        drift: f32,
        trace: Trace,
    }

    impl Layered for Probe {
        fn z(&self) -> Option<ZIndex> {
            Some(ZIndex(self.z))
        }
    }

    impl GameObject for Probe {
        fn update(&mut self, _time: f64, sx: f32, sy: f32, _r: &Renderer) {
            self.z += self.drift;
            self.trace.borrow_mut().push(format!("update {} @{sx},{sy}", self.name));
        }

        fn render(&self, _time: f64, _sx: f32, _sy: f32, r: &Renderer) {
            self.trace
                .borrow_mut()
                .push(format!("render {} f{}", self.name, r.frame_index()));
        }
    }

    fn probe(name: &'static str, z: f32, drift: f32, trace: &Trace) -> Probe {
        Probe { name, z, drift, trace: Rc::clone(trace) }
    }

    #[test]
    fn updates_all_then_renders_back_to_front() {
        let trace: Trace = Rc::default();
        let mut state = State::new();
        state.add("top", probe("top", 5.0, 0.0, &trace));
        state.add("bottom", probe("bottom", 1.0, 0.0, &trace));

        let mut renderer = Renderer::default();
        let stats = renderer.frame(&mut state, &Camera::new(3.0, 4.0), 0.0);

        assert_eq!(stats, FrameStats { updated: 2, rendered: 2 });
        assert_eq!(
            *trace.borrow(),
            vec![
                "update bottom @3,4",
                "update top @3,4",
                "render bottom f0",
                "render top f0",
            ]
        );
        assert_eq!(renderer.frame_index(), 1);
    }

    #[test]
    fn z_changes_during_update_apply_to_same_frame_render() {
        let trace: Trace = Rc::default();
        let mut state = State::new();
        state.add("rising", probe("rising", 0.0, 10.0, &trace));
        state.add("still", probe("still", 5.0, 0.0, &trace));

        let mut renderer = Renderer::default();
        renderer.frame(&mut state, &Camera::default(), 0.5);

        let renders: Vec<String> = trace
            .borrow()
            .iter()
            .filter(|l| l.starts_with("render"))
            .cloned()
            .collect();
        assert_eq!(renders, ["render still f0", "render rising f0"]);
    }

    #[test]
    fn boxed_objects_can_be_mixed() {
        let trace: Trace = Rc::default();
        let mut state: State = State::new();
        state.add("a", Box::new(probe("a", 1.0, 0.0, &trace)));
        state.add("b", Box::new(probe("b", 0.0, 0.0, &trace)));

        let stats = Renderer::default().frame(&mut state, &Camera::default(), 0.0);
        assert_eq!(stats.rendered, 2);
    }

    #[test]
    fn config_is_exposed_to_objects() {
        let renderer = Renderer::new(FrameworkConfig::new().size(640, 480).clear(false));
        assert_eq!(renderer.viewport(), (640, 480));
        assert!(!renderer.clear());
    }
}
