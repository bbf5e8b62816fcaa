//! Headless sandbox: wires a state, scripted input and a handful of frames.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};

use gamefw_core::store::{Layered, ZIndex};
use gamefw_engine::input::{key_arg, names, ButtonState, InputEvent, Key, MouseButton};
use gamefw_engine::logging::{init_logging, LoggingConfig};
use gamefw_engine::{Camera, FrameworkConfig, GameObject, Renderer, State};

const FRAME_DT: f64 = 1.0 / 60.0;
const SPEED: f32 = 90.0;

/// Horizontal direction shared between the key bindings and the player.
type Heading = Rc<Cell<f32>>;

struct Backdrop;

impl Layered for Backdrop {
    fn z(&self) -> Option<ZIndex> {
        Some(ZIndex(-10.0))
    }
}

impl GameObject for Backdrop {
    fn update(&mut self, _: f64, _: f32, _: f32, _: &Renderer) {}

    fn render(&self, _: f64, sx: f32, sy: f32, r: &Renderer) {
        let (w, h) = r.viewport();
        log::info!("  backdrop {w}x{h} scrolled to ({sx:.1}, {sy:.1})");
    }
}

struct Player {
    x: f32,
    heading: Heading,
}

impl Layered for Player {
    fn z(&self) -> Option<ZIndex> {
        Some(ZIndex(1.0))
    }
}

impl GameObject for Player {
    fn update(&mut self, _time: f64, _: f32, _: f32, _: &Renderer) {
        self.x += self.heading.get() * SPEED * FRAME_DT as f32;
    }

    fn render(&self, time: f64, sx: f32, _: f32, _: &Renderer) {
        log::info!("  player at x={:.1} (screen {:.1}) t={time:.3}", self.x, self.x - sx);
    }
}

/// A marker with no layer; it lands on the base layer between the two.
struct Flag;

impl Layered for Flag {}

impl GameObject for Flag {
    fn update(&mut self, _: f64, _: f32, _: f32, _: &Renderer) {}

    fn render(&self, _: f64, _: f32, _: f32, _: &Renderer) {
        log::info!("  flag");
    }
}

fn bind_controls(state: &mut State, heading: &Heading) -> Result<()> {
    let keys = state.keys.events_mut();

    let h = Rc::clone(heading);
    keys.try_bind(names::KEY_DOWN, "steer", move |_, args| {
        match key_arg(args).context("keydown without a key")? {
            Key::ArrowLeft => h.set(-1.0),
            Key::ArrowRight => h.set(1.0),
            _ => {}
        }
        Ok(())
    })?;

    let h = Rc::clone(heading);
    keys.try_bind(names::KEY_UP, "stop", move |_, _| {
        h.set(0.0);
        Ok(())
    })?;

    state.mouse.events_mut().try_bind(names::MOUSE_DOWN, "report", |_, args| {
        let (x, y) = args
            .get(1)
            .and_then(|a| a.as_point())
            .context("mousedown without a position")?;
        log::info!("click at ({x}, {y})");
        Ok(())
    })?;

    Ok(())
}

fn main() -> Result<()> {
    let config = FrameworkConfig::new()
        .size(320, 240)
        .logging(LoggingConfig::default());
    init_logging(config.logging.clone());

    let heading: Heading = Rc::default();
    let mut state: State = State::new();
    state.add("backdrop", Box::new(Backdrop));
    state.add("player", Box::new(Player { x: 0.0, heading: Rc::clone(&heading) }));
    state.add("flag", Box::new(Flag));
    bind_controls(&mut state, &heading)?;

    let mut renderer = Renderer::new(config);
    let mut camera = Camera::default();

    let script = [
        Some(InputEvent::key_down(Key::ArrowRight)),
        None,
        Some(InputEvent::key_up(Key::ArrowRight)),
        Some(InputEvent::PointerButton {
            button: MouseButton::Left,
            state: ButtonState::Pressed,
            x: 40.0,
            y: 30.0,
        }),
        Some(InputEvent::key_down(Key::ArrowLeft)),
    ];

    for (i, step) in script.iter().enumerate() {
        if let Some(ev) = step {
            if let Some(report) = state.dispatch(ev) {
                for failure in &report.failures {
                    log::error!("handler '{}' failed: {:#}", failure.name, failure.error);
                }
            }
        }

        camera.scroll_by(2.0, 0.0);
        log::info!("frame {i}");
        renderer.frame(&mut state, &camera, i as f64 * FRAME_DT);
    }

    log::info!("ran {} frames", renderer.frame_index());
    Ok(())
}
