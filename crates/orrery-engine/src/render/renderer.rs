use crate::math::{MathError, Vector};
use crate::scene::SceneModel;

use super::{Canvas, Color};

/// Base length in scene units for vector arrow heads.
const ARROW_SIZE: f32 = 10.0;
/// Stroke width for vector arrows.
const ARROW_STROKE: f32 = 2.0;

const VELOCITY_COLOR: Color = Color::rgb(0.3, 1.0, 0.3);
const MARKER_COLOR: Color = Color::white();
const MARKER_SIZE: f32 = 4.0;

/// Draws a scene to a [`Canvas`].
///
/// Responsibilities:
/// - clear the surface to the scene background color
/// - delegate to the model's layered draw pass
/// - draw the diagnostic overlay (velocity arrows, informative markers)
///   when the model has it enabled
#[derive(Debug, Default)]
pub struct SceneRenderer;

impl SceneRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders one frame: clear, layered pass, optional diagnostics.
    pub fn render(&self, canvas: &mut dyn Canvas, model: &SceneModel) -> Result<(), MathError> {
        canvas.set_anti_alias(true);
        canvas.clear(model.background_color());

        model.draw_layers(canvas);

        if model.is_debug_overlay() {
            self.draw_diagnostics(canvas, model)?;
        }
        Ok(())
    }

    /// Draws a vector arrow from `origin` to `origin + vector`: a stroked
    /// segment plus a filled triangular head with the tip at the end point.
    ///
    /// Both vectors must be 2D. A zero-length `vector` fails with
    /// [`MathError::DegenerateVector`] — the head has no direction.
    pub fn draw_vector(
        &self,
        canvas: &mut dyn Canvas,
        origin: &Vector,
        vector: &Vector,
        color: Color,
    ) -> Result<(), MathError> {
        if origin.dim() != 2 {
            return Err(MathError::DimensionMismatch { left: origin.dim(), right: 2 });
        }
        let end = origin.plus(vector)?;

        canvas.set_color(color);
        canvas.stroke_line(origin.x(), origin.y(), end.x(), end.y(), ARROW_STROKE);
        self.draw_arrow_head(canvas, origin, &end)
    }

    /// Head geometry: unit direction `d`, perpendicular `p = (−d.y, d.x)`,
    /// base corners at `end − size·d ± (size/2)·p`, tip at `end`.
    fn draw_arrow_head(
        &self,
        canvas: &mut dyn Canvas,
        start: &Vector,
        end: &Vector,
    ) -> Result<(), MathError> {
        let direction = end.minus(start)?.normalized()?;
        let perpendicular = Vector::of2(-direction.y(), direction.x());

        let base = end.minus(&direction.scale(ARROW_SIZE))?;
        let corner_a = base.plus(&perpendicular.scale(ARROW_SIZE / 2.0))?;
        let corner_b = base.minus(&perpendicular.scale(ARROW_SIZE / 2.0))?;

        canvas.fill_polygon(&[
            [end.x(), end.y()],
            [corner_a.x(), corner_a.y()],
            [corner_b.x(), corner_b.y()],
        ]);
        Ok(())
    }

    fn draw_diagnostics(
        &self,
        canvas: &mut dyn Canvas,
        model: &SceneModel,
    ) -> Result<(), MathError> {
        for movable in model.movables() {
            let m = movable.handle.borrow();
            // Arrows only make sense in the plane, and only for bodies that
            // are actually moving.
            if m.location().dim() != 2 || m.velocity().magnitude() == 0.0 {
                continue;
            }
            self.draw_vector(canvas, m.location(), m.velocity(), VELOCITY_COLOR)?;
        }

        for informative in model.informatives() {
            let entry = informative.handle.borrow();
            let location = entry.location();
            if location.dim() != 2 {
                continue;
            }
            canvas.set_color(MARKER_COLOR);
            canvas.fill_rect(
                location.x() - MARKER_SIZE / 2.0,
                location.y() - MARKER_SIZE / 2.0,
                MARKER_SIZE,
                MARKER_SIZE,
            );
        }
        Ok(())
    }
}
