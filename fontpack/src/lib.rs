/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Packs 32x8 glyph sheet images into raw console font tables.

pub mod error;
pub mod pack;
pub mod psp;
pub mod sheet;
pub mod writer;

pub use error::{Error, Result};
pub use image;
pub use sheet::{Format, GlyphSheet, GlyphSize, open_image};
pub use writer::write_file;

use image::RgbaImage;

/// One bit per pixel, glyph-major then row-major, MSB first.
pub fn convert_1bpp(image: &RgbaImage, size: GlyphSize, format: Format) -> Result<Vec<u8>> {
    let sheet = GlyphSheet::new(image, size)?;
    Ok(pack::pack_bits_with_capacity(sheet.samples(format), sheet.sample_count(format)))
}
