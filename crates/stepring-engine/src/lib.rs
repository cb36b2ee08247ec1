//! Stepring engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the ring widget:
//! geometry, paint, the arc draw stream and the surfaces that replay it.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
