//! GUI input adapter for interactive snowflake viewing.
//!
//! This module provides a windowed interface using winit for window
//! management, pixels for framebuffer rendering, and egui for UI controls.

mod app;
mod depth_input;
mod frame_surface;

pub use app::run_gui;
