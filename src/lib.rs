//! Window Shell
//!
//! A native window with a message pump, two bounded input queues (keyboard,
//! mouse) and a per-frame callback, built with winit and wgpu.

/// Application shell - windowing, rendering, and the input event bridge
pub mod app;

/// Build-time information (git SHA, branch, timestamp, etc.)
pub mod build_info;

/// Startup diagnostics - configuration, build, system, graphics, input
pub mod diagnostics;
