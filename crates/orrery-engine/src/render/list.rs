use super::{Canvas, Color};

/// Surface-agnostic draw command.
///
/// Extending the command set:
/// - add a variant here
/// - record it in the [`Canvas`] impl for [`DrawList`]
/// - replay it in each concrete backend
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear { color: Color },
    SetColor { color: Color },
    SetAntiAlias { enabled: bool },
    FillRect { x: f32, y: f32, width: f32, height: f32 },
    StrokeLine { x0: f32, y0: f32, x1: f32, y1: f32, width: f32 },
    FillPolygon { points: Vec<[f32; 2]> },
}

/// Recording canvas: captures the draw stream of a frame as [`DrawCmd`]s.
///
/// Commands keep insertion order, which is exactly the layered paint order
/// the scene produced. Backends replay the stream; tests assert on it.
/// `reset()` keeps allocated capacity for reuse across frames.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in insertion (paint) order.
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Drops recorded commands, keeping capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCmd::Clear { color });
    }

    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCmd::SetColor { color });
    }

    fn set_anti_alias(&mut self, enabled: bool) {
        self.commands.push(DrawCmd::SetAntiAlias { enabled });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCmd::FillRect { x, y, width, height });
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32) {
        self.commands.push(DrawCmd::StrokeLine { x0, y0, x1, y1, width });
    }

    fn fill_polygon(&mut self, points: &[[f32; 2]]) {
        self.commands.push(DrawCmd::FillPolygon { points: points.to_vec() });
    }
}
