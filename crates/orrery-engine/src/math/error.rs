use std::fmt;

/// Error raised by a vector operation whose preconditions were violated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A binary operation received operands of unequal dimension, or `cross3`
    /// received a non-3D operand.
    DimensionMismatch { left: usize, right: usize },
    /// The zero vector was asked for a direction.
    DegenerateVector,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DimensionMismatch { left, right } => {
                write!(f, "vector dimensions disagree: {left} vs {right}")
            }
            MathError::DegenerateVector => write!(f, "zero vector has no direction"),
        }
    }
}

impl std::error::Error for MathError {}
