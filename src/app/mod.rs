//! Application shell
//!
//! Handles windowing, rendering, and user input.

pub mod config;
pub mod demo;
mod error;
pub mod frame;
mod graphics;
pub mod input;
mod runner;
mod timer;
mod window;

pub use config::{AppConfig, InputConfig, WindowConfig};
pub use demo::DemoHandler;
pub use error::AppError;
pub use frame::{Frame, FrameHandler};
pub use graphics::Renderer;
pub use runner::App;
pub use timer::FrameTimer;
pub use window::window_attributes_from_config;
