//! Radia Core Library
//!
//! Core functionality for composing and exporting radial gradient artwork.

pub mod color;
pub mod config;
pub mod exporters;
pub mod history;
pub mod models;
pub mod palette;
pub mod palette_io;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use color::{Hsl, Rgb};
pub use history::PaletteHistory;
pub use models::{CanvasSize, Variant};
pub use palette::{ColorSlot, Palette};
pub use render::{Frame, Surface, THUMBNAIL_SIZE};
pub use session::{Action, Session};
