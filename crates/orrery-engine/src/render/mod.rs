//! Layered scene rendering over an abstract drawing context.
//!
//! Responsibilities:
//! - define the [`Canvas`] boundary the engine draws through (the engine
//!   never owns a concrete surface)
//! - provide a recording canvas for tests and headless drivers
//! - clear + delegate layered drawing, and the vector-arrow diagnostic
//!   primitive

mod canvas;
mod color;
mod list;
mod renderer;

pub use canvas::Canvas;
pub use color::Color;
pub use list::{DrawCmd, DrawList};
pub use renderer::SceneRenderer;
