use crate::logging::LoggingConfig;

/// Framework-wide settings, handed to the [`Renderer`](crate::Renderer).
///
/// Defaults: 320x240 viewport, clear between frames.
#[derive(Debug, Clone)]
pub struct FrameworkConfig {
    /// Viewport width in logical pixels.
    pub width: u32,
    /// Viewport height in logical pixels.
    pub height: u32,
    /// Whether the host should clear the surface before each frame.
    pub clear: bool,
    pub logging: LoggingConfig,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            clear: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl FrameworkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero dimensions fall back to the defaults.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        let d = Self::default();
        self.width = if width == 0 { d.width } else { width };
        self.height = if height == 0 { d.height } else { height };
        self
    }

    pub fn clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_small_canvas() {
        let c = FrameworkConfig::default();
        assert_eq!((c.width, c.height), (320, 240));
        assert!(c.clear);
    }

    #[test]
    fn zero_size_falls_back_to_default() {
        let c = FrameworkConfig::new().size(0, 600).clear(false);
        assert_eq!((c.width, c.height), (320, 600));
        assert!(!c.clear);
    }
}
