//! Window attributes

use winit::dpi::LogicalSize;
use winit::window::WindowAttributes;

use super::config::WindowConfig;

/// Creates window attributes from configuration
///
/// The configured size is the client area; decorations are added around it.
pub fn window_attributes_from_config(config: &WindowConfig) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(config.resizable)
}
