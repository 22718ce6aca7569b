//! GUI application state
//!
//! Bundles the interactive session with the display-side scratch the egui
//! frontend keeps between frames: uploaded textures, the last rendered
//! frame (kept for export), the size-picker text fields, and any pending
//! error dialog.

use eframe::egui;
use radia_core::render::Frame;
use radia_core::session::Session;

/// Everything the GUI keeps between frames
pub struct AppState {
    /// Interactive session: palette, variant, size, stop offset, history
    pub session: Session,

    /// Most recently rendered frame, kept so export writes exactly what is
    /// on screen
    pub frame: Option<Frame>,

    /// Uploaded texture of the main canvas
    pub main_texture: Option<egui::TextureHandle>,

    /// Uploaded preview textures, one per variant in `Variant::ALL` order
    pub thumb_textures: [Option<egui::TextureHandle>; 3],

    /// Set when the session changed and the canvas must be repainted
    pub render_needed: bool,

    /// Scratch text for the custom width field
    pub custom_width: String,

    /// Scratch text for the custom height field
    pub custom_height: String,

    /// Pending error, shown as a modal window until dismissed
    pub error_message: Option<String>,
}

impl AppState {
    /// Build the startup state from the loaded configuration defaults
    pub fn from_config() -> Self {
        let session = radia_core::config::radia_config_handle()
            .config
            .defaults
            .session();
        let size = session.size;
        Self {
            session,
            frame: None,
            main_texture: None,
            thumb_textures: [None, None, None],
            render_needed: true,
            custom_width: size.width.to_string(),
            custom_height: size.height.to_string(),
            error_message: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::from_config()
    }
}
