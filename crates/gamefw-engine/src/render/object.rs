use gamefw_core::store::Layered;

use super::Renderer;

/// Contract of everything managed by a [`State`](crate::State).
///
/// `time` is the host clock in seconds; `scroll_x` / `scroll_y` are the
/// camera offset for the frame.
pub trait GameObject: Layered {
    /// Advances the object. Called before any object renders.
    fn update(&mut self, time: f64, scroll_x: f32, scroll_y: f32, renderer: &Renderer);

    /// Emits the object's visuals. Called back-to-front.
    fn render(&self, time: f64, scroll_x: f32, scroll_y: f32, renderer: &Renderer);
}

impl<T: GameObject + ?Sized> GameObject for Box<T> {
    fn update(&mut self, time: f64, scroll_x: f32, scroll_y: f32, renderer: &Renderer) {
        (**self).update(time, scroll_x, scroll_y, renderer)
    }

    fn render(&self, time: f64, scroll_x: f32, scroll_y: f32, renderer: &Renderer) {
        (**self).render(time, scroll_x, scroll_y, renderer)
    }
}
