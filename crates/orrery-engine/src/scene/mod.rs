//! Capability-indexed scene orchestration.
//!
//! Responsibilities:
//! - define the behavioral capability traits entities may implement
//! - classify entities into capability groups once, at registration
//!   (explicitly tagged — no runtime type inspection)
//! - drive the fixed per-tick ordering: attraction → state advance →
//!   bookkeeping
//! - partition visible drawables into the fixed layer order:
//!   background → actors → overlay

mod capability;
mod config;
mod model;
mod registration;

pub use capability::{Attractor, Drawable, Informative, Movable, StaticPose, Updatable};
pub use config::{Extent, SceneConfig};
pub use model::{CapabilityRef, EntityRecord, GlobalEffect, SceneModel};
pub use registration::{EntityId, Registration, Shared};
