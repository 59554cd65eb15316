//! Frame timing for external drivers.
//!
//! The engine itself never sleeps or measures time; the driver owns cadence
//! and feeds `dt` into [`SceneModel::update`](crate::scene::SceneModel::update).
//! [`FrameClock`] is the driver's half of that boundary.

mod frame_clock;

pub use frame_clock::{FrameClock, Tick};
