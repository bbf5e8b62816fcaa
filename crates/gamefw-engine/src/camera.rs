/// Scroll offset applied to every object during a frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
}

impl Camera {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn scroll_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    #[inline]
    pub fn scroll(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_by_accumulates() {
        let mut cam = Camera::default();
        cam.scroll_by(2.0, -1.0);
        cam.scroll_by(0.5, 0.5);
        assert_eq!(cam.scroll(), (2.5, -0.5));

        cam.scroll_to(0.0, 0.0);
        assert_eq!(cam, Camera::new(0.0, 0.0));
    }
}
