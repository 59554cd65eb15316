use crate::math::{MathError, Vector};

use super::InvalidParameter;

/// Force-driven rigid state for a dynamic scene entity.
///
/// `Body` keeps two kinds of state per axis of motion:
/// - resolved state: location / velocity, angle / angular velocity
/// - pending state: the acceleration accumulators fed by [`apply_force`] and
///   [`apply_torque`]
///
/// The pending accumulators are drained by exactly one [`step`] call and then
/// reset, so a force contribution is integrated once — never twice, never
/// dropped. Angular state is scalar: angle in radians, counter-clockwise.
///
/// `landed` / `sliding` are published by an external contact resolver through
/// [`resolve_contact`]; the capability layer exposes them read-only.
///
/// [`apply_force`]: Body::apply_force
/// [`apply_torque`]: Body::apply_torque
/// [`step`]: Body::step
/// [`resolve_contact`]: Body::resolve_contact
#[derive(Debug, Clone)]
pub struct Body {
    location: Vector,
    velocity: Vector,
    acceleration: Vector,
    angle: f32,
    angular_velocity: f32,
    angular_acceleration: f32,

    mass: f32,
    bouncy: bool,
    restitution: f32,
    attractor: bool,
    landed: bool,
    sliding: bool,
    friction: bool,
    friction_coefficient: f32,
    drag: bool,
    drag_coefficient: f32,
}

impl Body {
    /// Creates a resting body at `location` with unit mass.
    ///
    /// Velocity and the force accumulator take their dimension from
    /// `location`; every force model is initially disabled.
    pub fn new(location: Vector) -> Self {
        let dim = location.dim();
        Self {
            location,
            velocity: Vector::zeros(dim),
            acceleration: Vector::zeros(dim),
            angle: 0.0,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            mass: 1.0,
            bouncy: false,
            restitution: 1.0,
            attractor: false,
            landed: false,
            sliding: false,
            friction: false,
            friction_coefficient: 0.0,
            drag: false,
            drag_coefficient: 0.0,
        }
    }

    // ── force accumulation ────────────────────────────────────────────────

    /// Accumulates an external force into the pending linear acceleration
    /// (`F = m·a`, so the contribution is `force ÷ mass`).
    ///
    /// Fails if the force dimension differs from the body's.
    pub fn apply_force(&mut self, force: &Vector) -> Result<(), MathError> {
        if force.dim() != self.location.dim() {
            return Err(MathError::DimensionMismatch {
                left: force.dim(),
                right: self.location.dim(),
            });
        }
        self.accumulate(force);
        Ok(())
    }

    /// Accumulates a torque-like quantity into the pending angular
    /// acceleration, scaled by mass like its linear counterpart.
    pub fn apply_torque(&mut self, torque: f32) {
        self.angular_acceleration += torque / self.mass;
    }

    #[inline]
    fn accumulate(&mut self, force: &Vector) {
        // Dimensions verified by the caller.
        self.acceleration.add_scaled(force, 1.0 / self.mass);
    }

    // ── integration ───────────────────────────────────────────────────────

    /// Advances the body by `dt` seconds (semi-implicit Euler).
    ///
    /// Friction (only while landed) and quadratic drag are fed through the
    /// same accumulation path as external forces, then the accumulators are
    /// drained into velocity and angular velocity, position and angle follow,
    /// and the accumulators reset to zero.
    pub fn step(&mut self, dt: f32) {
        let speed = self.velocity.magnitude();

        if self.friction && self.landed && speed > 0.0 {
            let opposing = self.velocity.scale(-self.friction_coefficient / speed);
            self.accumulate(&opposing);
        }

        if self.drag && speed > 0.0 {
            // |F| = c·|v|², opposing the velocity direction.
            let opposing = self.velocity.scale(-self.drag_coefficient * speed);
            self.accumulate(&opposing);
        }

        self.velocity.add_scaled(&self.acceleration, dt);
        self.angular_velocity += self.angular_acceleration * dt;

        self.location.add_scaled(&self.velocity, dt);
        self.angle += self.angular_velocity * dt;

        self.acceleration = Vector::zeros(self.acceleration.dim());
        self.angular_acceleration = 0.0;
    }

    // ── contact resolution ────────────────────────────────────────────────

    /// Reflects the velocity across `axis` (selector semantics of
    /// [`Vector::reflect_2d`]) and scales the flipped component by the
    /// restitution factor. The tangential component is untouched.
    ///
    /// Intended for contact resolvers; does nothing unless the body is
    /// bouncy, and has no effect on non-2D velocities.
    pub fn bounce(&mut self, axis: u32) {
        if !self.bouncy || self.velocity.dim() != 2 {
            return;
        }
        let mut reflected = self.velocity.reflect_2d(axis);
        let normal = if axis == 0 { 1 } else { 0 };
        if let Some(c) = reflected.component_mut(normal) {
            *c *= self.restitution;
        }
        self.velocity = reflected;
    }

    /// Publishes contact status. Only contact resolution should call this;
    /// capability consumers read the status through the getters.
    pub fn resolve_contact(&mut self, landed: bool, sliding: bool) {
        self.landed = landed;
        self.sliding = sliding;
    }

    // ── resolved state ────────────────────────────────────────────────────

    #[inline]
    pub fn location(&self) -> &Vector {
        &self.location
    }

    /// Teleports the body. The new location must keep the motion-space
    /// dimension fixed at construction.
    pub fn set_location(&mut self, location: Vector) -> Result<(), MathError> {
        self.check_motion_dim(&location)?;
        self.location = location;
        Ok(())
    }

    #[inline]
    pub fn velocity(&self) -> &Vector {
        &self.velocity
    }

    /// Overwrites the velocity. The new velocity must keep the motion-space
    /// dimension fixed at construction.
    pub fn set_velocity(&mut self, velocity: Vector) -> Result<(), MathError> {
        self.check_motion_dim(&velocity)?;
        self.velocity = velocity;
        Ok(())
    }

    #[inline]
    fn check_motion_dim(&self, v: &Vector) -> Result<(), MathError> {
        if v.dim() != self.location.dim() {
            return Err(MathError::DimensionMismatch {
                left: v.dim(),
                right: self.location.dim(),
            });
        }
        Ok(())
    }

    /// Pending linear acceleration accumulated for the next [`step`](Body::step).
    #[inline]
    pub fn acceleration(&self) -> &Vector {
        &self.acceleration
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    #[inline]
    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, rate: f32) {
        self.angular_velocity = rate;
    }

    /// Pending angular acceleration accumulated for the next [`step`](Body::step).
    #[inline]
    pub fn angular_acceleration(&self) -> f32 {
        self.angular_acceleration
    }

    // ── parameters ────────────────────────────────────────────────────────

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Sets the mass. Fails unless `mass > 0`.
    pub fn set_mass(&mut self, mass: f32) -> Result<(), InvalidParameter> {
        if !(mass > 0.0) {
            return Err(InvalidParameter::new("mass", mass));
        }
        self.mass = mass;
        Ok(())
    }

    #[inline]
    pub fn is_bouncy(&self) -> bool {
        self.bouncy
    }

    pub fn set_bouncy(&mut self, bouncy: bool) {
        self.bouncy = bouncy;
    }

    #[inline]
    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    /// Sets the restitution factor. Fails unless it lies in `[0, 1]`.
    pub fn set_restitution(&mut self, factor: f32) -> Result<(), InvalidParameter> {
        if !(0.0..=1.0).contains(&factor) {
            return Err(InvalidParameter::new("restitution", factor));
        }
        self.restitution = factor;
        Ok(())
    }

    /// Whether this body is eligible to be queried as an attraction source.
    /// The flag never affects the body's own motion.
    #[inline]
    pub fn is_attractor(&self) -> bool {
        self.attractor
    }

    pub fn set_attractor(&mut self, attractor: bool) {
        self.attractor = attractor;
    }

    #[inline]
    pub fn is_landed(&self) -> bool {
        self.landed
    }

    #[inline]
    pub fn is_sliding(&self) -> bool {
        self.sliding
    }

    #[inline]
    pub fn has_friction(&self) -> bool {
        self.friction
    }

    pub fn set_friction(&mut self, enabled: bool) {
        self.friction = enabled;
    }

    #[inline]
    pub fn friction_coefficient(&self) -> f32 {
        self.friction_coefficient
    }

    /// Sets the friction coefficient. Fails on negative values.
    pub fn set_friction_coefficient(&mut self, coefficient: f32) -> Result<(), InvalidParameter> {
        if !(coefficient >= 0.0) {
            return Err(InvalidParameter::new("friction coefficient", coefficient));
        }
        self.friction_coefficient = coefficient;
        Ok(())
    }

    #[inline]
    pub fn has_drag(&self) -> bool {
        self.drag
    }

    pub fn set_drag(&mut self, enabled: bool) {
        self.drag = enabled;
    }

    #[inline]
    pub fn drag_coefficient(&self) -> f32 {
        self.drag_coefficient
    }

    /// Sets the drag coefficient. Fails on negative values.
    pub fn set_drag_coefficient(&mut self, coefficient: f32) -> Result<(), InvalidParameter> {
        if !(coefficient >= 0.0) {
            return Err(InvalidParameter::new("drag coefficient", coefficient));
        }
        self.drag_coefficient = coefficient;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < EPS, "{a} !≈ {b}");
    }

    fn body() -> Body {
        Body::new(Vector::of2(0.0, 0.0))
    }

    // ── force accumulation ────────────────────────────────────────────────

    #[test]
    fn force_scales_by_mass() {
        let mut b = body();
        b.set_mass(2.0).unwrap();
        b.apply_force(&Vector::of2(4.0, 0.0)).unwrap();
        assert_close(b.acceleration().x(), 2.0);
    }

    #[test]
    fn forces_accumulate_until_drained() {
        let mut b = body();
        b.apply_force(&Vector::of2(1.0, 0.0)).unwrap();
        b.apply_force(&Vector::of2(2.0, 0.0)).unwrap();
        assert_close(b.acceleration().x(), 3.0);
    }

    #[test]
    fn mismatched_force_dimension_is_rejected() {
        let mut b = body();
        assert!(matches!(
            b.apply_force(&Vector::of3(1.0, 0.0, 0.0)),
            Err(MathError::DimensionMismatch { .. })
        ));
    }

    // ── integration ───────────────────────────────────────────────────────

    #[test]
    fn step_drains_the_accumulator_exactly_once() {
        let mut b = body();
        b.apply_force(&Vector::of2(10.0, 0.0)).unwrap();
        b.step(1.0);
        assert_close(b.velocity().x(), 10.0);
        assert_close(b.acceleration().x(), 0.0);

        // No new force: a second step must not re-apply the old one.
        b.step(1.0);
        assert_close(b.velocity().x(), 10.0);
    }

    #[test]
    fn position_follows_updated_velocity() {
        let mut b = body();
        b.apply_force(&Vector::of2(2.0, 0.0)).unwrap();
        b.step(0.5);
        // Semi-implicit: v = 1.0 first, then x += v·dt.
        assert_close(b.velocity().x(), 1.0);
        assert_close(b.location().x(), 0.5);
    }

    #[test]
    fn torque_drives_angle() {
        let mut b = body();
        b.apply_torque(2.0);
        b.step(0.5);
        assert_close(b.angular_velocity(), 1.0);
        assert_close(b.angle(), 0.5);
        assert_close(b.angular_acceleration(), 0.0);
    }

    #[test]
    fn integration_is_deterministic() {
        let run = || {
            let mut b = body();
            b.set_drag(true);
            b.set_drag_coefficient(0.1).unwrap();
            b.set_velocity(Vector::of2(3.0, -1.0)).unwrap();
            for _ in 0..100 {
                b.apply_force(&Vector::of2(0.0, 9.8)).unwrap();
                b.step(1.0 / 60.0);
            }
            (b.location().x(), b.location().y())
        };
        assert_eq!(run(), run());
    }

    // ── friction and drag ─────────────────────────────────────────────────

    #[test]
    fn friction_applies_only_while_landed() {
        let mut grounded = body();
        grounded.set_friction(true);
        grounded.set_friction_coefficient(1.0).unwrap();
        grounded.set_velocity(Vector::of2(10.0, 0.0)).unwrap();
        grounded.resolve_contact(true, true);
        grounded.step(1.0);

        let mut airborne = body();
        airborne.set_friction(true);
        airborne.set_friction_coefficient(1.0).unwrap();
        airborne.set_velocity(Vector::of2(10.0, 0.0)).unwrap();
        airborne.step(1.0);

        assert!(grounded.velocity().x() < airborne.velocity().x());
        assert_close(airborne.velocity().x(), 10.0);
    }

    #[test]
    fn drag_grows_with_speed_squared() {
        let decel_at = |speed: f32| {
            let mut b = body();
            b.set_drag(true);
            b.set_drag_coefficient(0.01).unwrap();
            b.set_velocity(Vector::of2(speed, 0.0)).unwrap();
            b.step(1.0);
            speed - b.velocity().x()
        };
        // Four times the speed, sixteen times the decelerating force.
        let ratio = decel_at(4.0) / decel_at(1.0);
        assert!((ratio - 16.0).abs() < 1e-3, "{ratio} !≈ 16");
    }

    #[test]
    fn drag_acts_while_airborne() {
        let mut b = body();
        b.set_drag(true);
        b.set_drag_coefficient(0.5).unwrap();
        b.set_velocity(Vector::of2(2.0, 0.0)).unwrap();
        b.step(1.0);
        assert!(b.velocity().x() < 2.0);
    }

    // ── bounce ────────────────────────────────────────────────────────────

    #[test]
    fn bounce_scales_normal_component_by_restitution() {
        let mut b = body();
        b.set_bouncy(true);
        b.set_restitution(0.5).unwrap();
        b.set_velocity(Vector::of2(3.0, -4.0)).unwrap();
        b.bounce(0);
        assert_close(b.velocity().x(), 3.0); // tangential untouched
        assert_close(b.velocity().y(), 2.0); // flipped and halved
    }

    #[test]
    fn bounce_requires_the_bouncy_flag() {
        let mut b = body();
        b.set_velocity(Vector::of2(3.0, -4.0)).unwrap();
        b.bounce(0);
        assert_close(b.velocity().y(), -4.0);
    }

    // ── parameter validation ──────────────────────────────────────────────

    #[test]
    fn zero_or_negative_mass_is_rejected() {
        let mut b = body();
        assert!(b.set_mass(0.0).is_err());
        assert!(b.set_mass(-1.0).is_err());
        assert_close(b.mass(), 1.0);
    }

    #[test]
    fn restitution_outside_unit_interval_is_rejected() {
        let mut b = body();
        assert!(b.set_restitution(1.5).is_err());
        assert!(b.set_restitution(-0.1).is_err());
        assert!(b.set_restitution(1.0).is_ok());
    }

    #[test]
    fn negative_coefficients_are_rejected() {
        let mut b = body();
        assert!(b.set_friction_coefficient(-0.5).is_err());
        assert!(b.set_drag_coefficient(-0.5).is_err());
    }
}
