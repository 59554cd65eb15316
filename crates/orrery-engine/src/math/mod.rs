//! Small-vector math shared by the motion and render layers.
//!
//! Canonical conventions:
//! - scene units, origin top-left, +X right, +Y down
//! - angles in radians, counter-clockwise in the screen plane
//! - dimension-sensitive operations fail on mismatched operands instead of
//!   truncating

mod error;
mod vector;

pub use error::MathError;
pub use vector::Vector;
