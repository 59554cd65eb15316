use crate::math::{MathError, Vector};
use crate::motion::{Body, InvalidParameter};
use crate::render::{Canvas, Color};

// ── Movable ───────────────────────────────────────────────────────────────

/// Capability of force-driven dynamic bodies.
///
/// Implementors expose their [`Body`] through the two accessor methods and
/// inherit the full motion surface as provided methods, so a dynamic entity
/// is movable with two lines:
///
/// ```rust,ignore
/// impl Movable for Ball {
///     fn body(&self) -> &Body { &self.body }
///     fn body_mut(&mut self) -> &mut Body { &mut self.body }
/// }
/// ```
///
/// Landed/sliding are read-only here: contact resolution publishes them on
/// the `Body` directly, consumers of the capability can only observe them.
pub trait Movable {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Accumulates `force` into the pending linear acceleration (`F = m·a`).
    fn apply_force(&mut self, force: &Vector) -> Result<(), MathError> {
        self.body_mut().apply_force(force)
    }

    /// Accumulates a torque-like quantity into the pending angular
    /// acceleration.
    fn apply_torque(&mut self, torque: f32) {
        self.body_mut().apply_torque(torque);
    }

    fn location(&self) -> &Vector {
        self.body().location()
    }

    fn velocity(&self) -> &Vector {
        self.body().velocity()
    }

    /// Pending linear acceleration for the next integration step.
    fn acceleration(&self) -> &Vector {
        self.body().acceleration()
    }

    fn angle(&self) -> f32 {
        self.body().angle()
    }

    fn angular_velocity(&self) -> f32 {
        self.body().angular_velocity()
    }

    fn set_angular_velocity(&mut self, rate: f32) {
        self.body_mut().set_angular_velocity(rate);
    }

    /// Pending angular acceleration for the next integration step.
    fn angular_acceleration(&self) -> f32 {
        self.body().angular_acceleration()
    }

    fn mass(&self) -> f32 {
        self.body().mass()
    }

    fn set_mass(&mut self, mass: f32) -> Result<(), InvalidParameter> {
        self.body_mut().set_mass(mass)
    }

    fn is_bouncy(&self) -> bool {
        self.body().is_bouncy()
    }

    fn set_bouncy(&mut self, bouncy: bool) {
        self.body_mut().set_bouncy(bouncy);
    }

    fn restitution(&self) -> f32 {
        self.body().restitution()
    }

    fn set_restitution(&mut self, factor: f32) -> Result<(), InvalidParameter> {
        self.body_mut().set_restitution(factor)
    }

    /// Whether this body may be queried as an attraction source. Never
    /// affects the body's own motion.
    fn is_attractor(&self) -> bool {
        self.body().is_attractor()
    }

    fn set_attractor(&mut self, attractor: bool) {
        self.body_mut().set_attractor(attractor);
    }

    fn is_landed(&self) -> bool {
        self.body().is_landed()
    }

    fn is_sliding(&self) -> bool {
        self.body().is_sliding()
    }

    fn has_friction(&self) -> bool {
        self.body().has_friction()
    }

    fn set_friction(&mut self, enabled: bool) {
        self.body_mut().set_friction(enabled);
    }

    fn friction_coefficient(&self) -> f32 {
        self.body().friction_coefficient()
    }

    fn set_friction_coefficient(&mut self, coefficient: f32) -> Result<(), InvalidParameter> {
        self.body_mut().set_friction_coefficient(coefficient)
    }

    fn has_drag(&self) -> bool {
        self.body().has_drag()
    }

    fn set_drag(&mut self, enabled: bool) {
        self.body_mut().set_drag(enabled);
    }

    fn drag_coefficient(&self) -> f32 {
        self.body().drag_coefficient()
    }

    fn set_drag_coefficient(&mut self, coefficient: f32) -> Result<(), InvalidParameter> {
        self.body_mut().set_drag_coefficient(coefficient)
    }
}

// ── Updatable ─────────────────────────────────────────────────────────────

/// Capability of entities whose state advances once per tick.
///
/// The scene calls [`update`](Updatable::update) for every registered
/// updatable, in registration order, after global forces have been applied.
/// Implementations must not block; cadence belongs to the external driver.
pub trait Updatable {
    /// Advances the entity by `dt` seconds.
    fn update(&mut self, dt: f32);
}

// ── Drawable ──────────────────────────────────────────────────────────────

/// Capability of entities that draw themselves onto a [`Canvas`].
///
/// Angles are radians, counter-clockwise in the screen plane. Invisible
/// entities are skipped by the layered render pass without calling
/// [`draw`](Drawable::draw).
pub trait Drawable {
    /// Draws the entity in world coordinates. The caller owns any surface
    /// state beyond the current color.
    fn draw(&self, canvas: &mut dyn Canvas);

    fn angle(&self) -> f32;

    fn set_angle(&mut self, angle: f32);

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Preferred fill/stroke color.
    fn color(&self) -> Color;

    fn set_color(&mut self, color: Color);
}

// ── Attractor ─────────────────────────────────────────────────────────────

/// Capability of entities that exert an attraction force on movable bodies.
///
/// The returned force is in world space and is fed directly into
/// [`Movable::apply_force`] by the scene's attraction stage; an attractor is
/// never asked to attract itself.
pub trait Attractor {
    fn attract(&self, target: &dyn Movable) -> Vector;
}

// ── Informative ───────────────────────────────────────────────────────────

/// Minimal positional access for passive overlays and diagnostics.
pub trait Informative {
    fn location(&self) -> &Vector;

    fn set_location(&mut self, location: Vector);
}

// ── StaticPose ────────────────────────────────────────────────────────────

/// Capability of kinematic or static objects that expose a pose but never
/// accept forces. Drawables with a static pose render in the background
/// layer.
pub trait StaticPose {
    fn location(&self) -> &Vector;

    fn set_location(&mut self, location: Vector);

    fn angle(&self) -> f32;

    fn set_angle(&mut self, angle: f32);
}
