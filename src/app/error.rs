//! Errors raised by the application shell

use thiserror::Error;

/// Failures outside the input bridge: windowing, graphics, configuration
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("failed to initialize renderer: {0}")]
    Renderer(#[source] anyhow::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}
