use std::fmt;

use smallvec::{SmallVec, smallvec};

use super::MathError;

/// Fixed-dimension f32 vector with inline storage for the common 2D/3D case.
///
/// The dimension is set at construction and never changes; component values
/// are mutable through [`component_mut`](Vector::component_mut). Clones are
/// deep and independent.
///
/// Dimension-sensitive operations (`dot`, `plus`, `minus`, `distance_to`,
/// `cross3`) return [`MathError::DimensionMismatch`] when the operands
/// disagree — there is no silent truncation.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    components: SmallVec<[f32; 3]>,
}

impl Vector {
    /// Creates an n-dimensional zero vector.
    pub fn zeros(dim: usize) -> Self {
        Self { components: smallvec![0.0; dim] }
    }

    /// Creates a 2D vector.
    pub fn of2(x: f32, y: f32) -> Self {
        Self { components: smallvec![x, y] }
    }

    /// Creates a 3D vector.
    pub fn of3(x: f32, y: f32, z: f32) -> Self {
        Self { components: smallvec![x, y, z] }
    }

    /// Creates a vector by copying the given components.
    pub fn from_components(components: &[f32]) -> Self {
        Self { components: SmallVec::from_slice(components) }
    }

    /// Vector dimension (number of components).
    #[inline]
    pub fn dim(&self) -> usize {
        self.components.len()
    }

    /// Component 0. Panics if the vector is 0-dimensional.
    #[inline]
    pub fn x(&self) -> f32 {
        self.components[0]
    }

    /// Component 1. Panics if the dimension is < 2.
    #[inline]
    pub fn y(&self) -> f32 {
        self.components[1]
    }

    /// Bounds-checked component read.
    #[inline]
    pub fn component(&self, i: usize) -> Option<f32> {
        self.components.get(i).copied()
    }

    /// Bounds-checked component write access.
    #[inline]
    pub fn component_mut(&mut self, i: usize) -> Option<&mut f32> {
        self.components.get_mut(i)
    }

    /// Dot product.
    pub fn dot(&self, other: &Vector) -> Result<f32, MathError> {
        self.check_dim(other)?;
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f32 {
        // Same-dimension by construction; the dot cannot fail.
        self.components.iter().map(|c| c * c).sum::<f32>().sqrt()
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Vector) -> Result<f32, MathError> {
        Ok(self.minus(other)?.magnitude())
    }

    /// Component-wise sum.
    pub fn plus(&self, other: &Vector) -> Result<Vector, MathError> {
        self.check_dim(other)?;
        Ok(self.zip_map(other, |a, b| a + b))
    }

    /// Component-wise difference.
    pub fn minus(&self, other: &Vector) -> Result<Vector, MathError> {
        self.check_dim(other)?;
        Ok(self.zip_map(other, |a, b| a - b))
    }

    /// Scalar multiple.
    pub fn scale(&self, factor: f32) -> Vector {
        Vector { components: self.components.iter().map(|c| c * factor).collect() }
    }

    /// Component-wise negation.
    pub fn negated(&self) -> Vector {
        self.scale(-1.0)
    }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`MathError::DegenerateVector`] for the zero vector — there
    /// is no fallback direction.
    pub fn normalized(&self) -> Result<Vector, MathError> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        Ok(self.scale(1.0 / mag))
    }

    /// 3D cross product `a × b`.
    ///
    /// Fails with [`MathError::DimensionMismatch`] if either operand is not
    /// 3-dimensional.
    pub fn cross3(a: &Vector, b: &Vector) -> Result<Vector, MathError> {
        if a.dim() != 3 || b.dim() != 3 {
            return Err(MathError::DimensionMismatch { left: a.dim(), right: b.dim() });
        }
        let (a, b) = (&a.components, &b.components);
        Ok(Vector::of3(
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ))
    }

    /// Reflects a 2D vector across an axis: selector `0` flips the
    /// y-component, any other selector flips the x-component.
    ///
    /// A non-2D vector is returned unchanged. That is an intentional special
    /// case (reflection only has this meaning in the plane), not an error.
    pub fn reflect_2d(&self, axis: u32) -> Vector {
        if self.dim() != 2 {
            return self.clone();
        }
        if axis == 0 {
            Vector::of2(self.x(), -self.y())
        } else {
            Vector::of2(-self.x(), self.y())
        }
    }

    /// In-place `self += other · factor` for same-dimension vectors.
    ///
    /// Hot-path helper for the integrator; callers guarantee the dimensions
    /// match.
    pub(crate) fn add_scaled(&mut self, other: &Vector, factor: f32) {
        debug_assert_eq!(self.dim(), other.dim());
        for (a, b) in self.components.iter_mut().zip(&other.components) {
            *a += b * factor;
        }
    }

    #[inline]
    fn check_dim(&self, other: &Vector) -> Result<(), MathError> {
        if self.dim() != other.dim() {
            return Err(MathError::DimensionMismatch { left: self.dim(), right: other.dim() });
        }
        Ok(())
    }

    #[inline]
    fn zip_map(&self, other: &Vector, f: impl Fn(f32, f32) -> f32) -> Vector {
        Vector {
            components: self
                .components
                .iter()
                .zip(&other.components)
                .map(|(a, b)| f(*a, *b))
                .collect(),
        }
    }
}

impl fmt::Display for Vector {
    /// Renders `(c0, c1, ..., c{n-1})`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < EPS, "{a} !≈ {b}");
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn zeros_has_requested_dimension() {
        let v = Vector::zeros(5);
        assert_eq!(v.dim(), 5);
        assert_eq!(v.magnitude(), 0.0);
    }

    #[test]
    fn clones_are_independent() {
        let a = Vector::of2(1.0, 2.0);
        let mut b = a.clone();
        *b.component_mut(0).unwrap() = 9.0;
        assert_eq!(a.x(), 1.0);
        assert_eq!(b.x(), 9.0);
    }

    #[test]
    fn from_components_copies_the_slice() {
        let source = [1.0, 2.0, 3.0, 4.0];
        let v = Vector::from_components(&source);
        assert_eq!(v.dim(), 4);
        assert_eq!(v.component(3), Some(4.0));
    }

    #[test]
    fn component_access_is_bounds_checked() {
        let v = Vector::of2(1.0, 2.0);
        assert_eq!(v.component(1), Some(2.0));
        assert_eq!(v.component(2), None);
    }

    // ── algebra ───────────────────────────────────────────────────────────

    #[test]
    fn plus_then_minus_round_trips() {
        let a = Vector::of3(1.0, -2.5, 4.0);
        let b = Vector::of3(0.5, 3.0, -1.0);
        let back = a.plus(&b).unwrap().minus(&b).unwrap();
        for i in 0..3 {
            assert_close(back.component(i).unwrap(), a.component(i).unwrap());
        }
    }

    #[test]
    fn double_negation_is_identity() {
        let a = Vector::of2(3.0, -7.0);
        assert_eq!(a.negated().negated(), a);
    }

    #[test]
    fn scale_by_one_is_identity() {
        let a = Vector::of2(3.0, -7.0);
        assert_eq!(a.scale(1.0), a);
    }

    #[test]
    fn dot_rejects_mismatched_dimensions() {
        let a = Vector::of2(1.0, 2.0);
        let b = Vector::of3(1.0, 2.0, 3.0);
        assert_eq!(a.dot(&b), Err(MathError::DimensionMismatch { left: 2, right: 3 }));
    }

    #[test]
    fn distance_between_points() {
        let a = Vector::of2(0.0, 0.0);
        let b = Vector::of2(3.0, 4.0);
        assert_close(a.distance_to(&b).unwrap(), 5.0);
    }

    // ── normalization ─────────────────────────────────────────────────────

    #[test]
    fn normalized_has_unit_magnitude() {
        let v = Vector::of2(3.0, 4.0).normalized().unwrap();
        assert_close(v.magnitude(), 1.0);
    }

    #[test]
    fn normalizing_zero_vector_fails() {
        assert_eq!(Vector::zeros(2).normalized(), Err(MathError::DegenerateVector));
    }

    // ── cross product ─────────────────────────────────────────────────────

    #[test]
    fn cross3_is_orthogonal_to_operands() {
        let a = Vector::of3(1.0, 2.0, 3.0);
        let b = Vector::of3(-4.0, 0.5, 2.0);
        let c = Vector::cross3(&a, &b).unwrap();
        assert_close(c.dot(&a).unwrap(), 0.0);
        assert_close(c.dot(&b).unwrap(), 0.0);
    }

    #[test]
    fn cross3_rejects_non_3d_operands() {
        let a = Vector::of2(1.0, 2.0);
        let b = Vector::of3(1.0, 2.0, 3.0);
        assert!(matches!(
            Vector::cross3(&a, &b),
            Err(MathError::DimensionMismatch { .. })
        ));
    }

    // ── reflection ────────────────────────────────────────────────────────

    #[test]
    fn reflect_axis_zero_flips_y() {
        assert_eq!(Vector::of2(2.0, 5.0).reflect_2d(0), Vector::of2(2.0, -5.0));
    }

    #[test]
    fn reflect_other_axis_flips_x() {
        assert_eq!(Vector::of2(2.0, 5.0).reflect_2d(1), Vector::of2(-2.0, 5.0));
    }

    #[test]
    fn reflect_is_a_no_op_for_non_2d() {
        let v = Vector::of3(1.0, 2.0, 3.0);
        assert_eq!(v.reflect_2d(0), v);
    }

    // ── display ───────────────────────────────────────────────────────────

    #[test]
    fn display_lists_components_in_parens() {
        assert_eq!(Vector::of3(1.0, 2.5, -3.0).to_string(), "(1, 2.5, -3)");
    }
}
