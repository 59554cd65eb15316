use crate::math::Vector;
use crate::render::Color;

/// Logical scene size in scene units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Scene center, used as the world origin.
    #[inline]
    pub fn center(&self) -> Vector {
        Vector::of2(self.width / 2.0, self.height / 2.0)
    }
}

/// Scene construction parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub extent: Extent,
    /// Color the renderer clears to at the start of every frame.
    pub background: Color,
    /// Whether the diagnostic overlay starts enabled.
    pub debug_overlay: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            extent: Extent::new(1280.0, 720.0),
            background: Color::black(),
            debug_overlay: false,
        }
    }
}
