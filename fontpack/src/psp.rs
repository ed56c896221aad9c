/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! PSP console font: 6x10 glyphs stored in 8x16 slots of a 4bpp canvas.

use image::{Rgb, RgbImage};
use tracing::debug;

use crate::{
    error::{Error, Result},
    pack::pack_nibbles,
    sheet::{GLYPH_COUNT, GRID_COLUMNS, GRID_ROWS},
};

pub const GLYPH_WIDTH: u32 = 6;
pub const GLYPH_HEIGHT: u32 = 10;

pub const SLOT_WIDTH: u32 = 8;
pub const SLOT_HEIGHT: u32 = 16;

pub const CANVAS_WIDTH: u32 = GRID_COLUMNS * SLOT_WIDTH;
pub const CANVAS_HEIGHT: u32 = GRID_ROWS * SLOT_HEIGHT;

pub const OUTPUT_LEN: usize = (CANVAS_WIDTH * CANVAS_HEIGHT / 2) as usize;

pub const LIT: u8 = 15;
pub const CHANNEL_THRESHOLD: u8 = 128;

pub fn is_lit(px: &Rgb<u8>) -> bool {
    px.0.iter().all(|&c| c >= CHANNEL_THRESHOLD)
}

/// Canvas index of logical pixel `(x, y)` of `glyph`, row-major.
pub fn canvas_position(glyph: u32, x: u32, y: u32) -> usize {
    let cx = x + (glyph % GRID_COLUMNS) * SLOT_WIDTH;
    let cy = y + (glyph / GRID_COLUMNS) * SLOT_HEIGHT;
    (cy * CANVAS_WIDTH + cx) as usize
}

#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Vec<u8>,
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas {
            pixels: vec![0; (CANVAS_WIDTH * CANVAS_HEIGHT) as usize],
        }
    }
}

impl Canvas {
    pub fn rasterize(image: &RgbImage) -> Result<Self> {
        let required_width = GRID_COLUMNS * GLYPH_WIDTH;
        let required_height = GRID_ROWS * GLYPH_HEIGHT;
        let (width, height) = image.dimensions();
        if width < required_width || height < required_height {
            return Err(Error::SheetTooSmall {
                width,
                height,
                required_width,
                required_height,
            });
        }

        let mut canvas = Canvas::default();
        let mut lit = 0usize;

        for glyph in 0..GLYPH_COUNT {
            let ox = (glyph % GRID_COLUMNS) * GLYPH_WIDTH;
            let oy = (glyph / GRID_COLUMNS) * GLYPH_HEIGHT;

            for y in 0..GLYPH_HEIGHT {
                for x in 0..GLYPH_WIDTH {
                    if is_lit(image.get_pixel(ox + x, oy + y)) {
                        canvas.pixels[canvas_position(glyph, x, y)] = LIT;
                        lit += 1;
                    }
                }
            }
        }

        debug!(width, height, lit, "rasterized psp font canvas");
        Ok(canvas)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= CANVAS_WIDTH || y >= CANVAS_HEIGHT {
            return None;
        }

        self.pixels.get((y * CANVAS_WIDTH + x) as usize).copied()
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pack(&self) -> Vec<u8> {
        pack_nibbles(&self.pixels)
    }
}

pub fn convert(image: &RgbImage) -> Result<Vec<u8>> {
    Ok(Canvas::rasterize(image)?.pack())
}
