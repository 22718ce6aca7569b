//! Image export
//!
//! Renders leave the core as plain RGB byte buffers; this module turns them
//! into files on disk. PNG is the export format, matching the download the
//! interactive frontends offer.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::render::Surface;

/// Default file name offered when exporting a render
pub const IMAGE_FILE_NAME: &str = "gradient.png";

/// Write a surface to disk as an 8-bit RGB PNG
pub fn export_png(surface: &Surface, path: &Path) -> Result<(), String> {
    let file =
        File::create(path).map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
    let writer = BufWriter::new(file);
    PngEncoder::new(writer)
        .write_image(
            surface.data(),
            surface.width(),
            surface.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| format!("Failed to encode {}: {}", path.display(), e))
}
