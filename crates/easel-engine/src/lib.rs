//! Easel engine crate.
//!
//! This crate owns the in-memory side of the paint tool: shape commands, their
//! draw projection, and the scene model that observers watch. Persistence lives
//! in `easel-format`.

pub mod coords;
pub mod logging;
pub mod model;
pub mod paint;
pub mod render;
pub mod scene;
pub mod shapes;
