use fontpack::{
    Format, GlyphSize, convert_1bpp,
    image::{Rgb, RgbImage, Rgba, RgbaImage},
    psp,
    sheet::{GLYPH_COUNT, GRID_COLUMNS, GRID_ROWS},
};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

const PLAIN: Format = Format {
    dbl: false,
    invert_x: false,
};
const DBL: Format = Format {
    dbl: true,
    invert_x: false,
};
const INVERT_X: Format = Format {
    dbl: false,
    invert_x: true,
};

fn filled(size: GlyphSize, px: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(size.width * GRID_COLUMNS, size.height * GRID_ROWS, px)
}

fn expected_len(size: GlyphSize, format: Format) -> usize {
    (GLYPH_COUNT * size.height * size.width * format.repeat_rows() / 8) as usize
}

fn unpack_bits(bytes: &[u8]) -> Vec<bool> {
    bytes
        .iter()
        .flat_map(|byte| (0..8).map(move |bit| (byte >> (7 - bit)) & 1 != 0))
        .collect()
}

/// A sheet whose pixels depend on position, so every glyph differs.
fn patterned(size: GlyphSize) -> RgbaImage {
    RgbaImage::from_fn(size.width * GRID_COLUMNS, size.height * GRID_ROWS, |x, y| {
        if (x * 7 + y * 3 + x / 5) % 4 == 0 { WHITE } else { BLACK }
    })
}

#[test]
fn white_sheet_packs_to_ones() {
    for (w, h) in [(8, 8), (8, 16), (6, 10)] {
        let size = GlyphSize::new(w, h).unwrap();
        let out = convert_1bpp(&filled(size, Rgba([129, 0, 0, 255])), size, PLAIN).unwrap();
        assert_eq!(out.len(), expected_len(size, PLAIN));
        assert!(out.iter().all(|&b| b == 0xFF));
    }
}

#[test]
fn black_sheet_packs_to_zeroes() {
    let size = GlyphSize::new(8, 16).unwrap();
    let out = convert_1bpp(&filled(size, BLACK), size, DBL).unwrap();
    assert_eq!(out.len(), expected_len(size, DBL));
    assert!(out.iter().all(|&b| b == 0));
}

#[test]
fn invert_x_mirrors_rows() {
    let size = GlyphSize::new(8, 8).unwrap();
    let mut image = filled(size, BLACK);
    // an "L" in glyph 0, plus a lone pixel in glyph 65
    for y in 0..8 {
        image.put_pixel(0, y, WHITE);
    }
    image.put_pixel(1, 7, WHITE);
    image.put_pixel(8 + 2, 16 + 3, WHITE);

    let plain = convert_1bpp(&image, size, PLAIN).unwrap();
    let mirrored = convert_1bpp(&image, size, INVERT_X).unwrap();

    assert_eq!(&plain[..8], &[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xC0]);
    assert_eq!(&mirrored[..8], &[0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x03]);
    assert_eq!(plain.len(), mirrored.len());
    for (p, m) in plain.iter().zip(&mirrored) {
        assert_eq!(p.reverse_bits(), *m);
    }
}

#[test]
fn dbl_repeats_each_row() {
    let size = GlyphSize::new(8, 8).unwrap();
    let image = patterned(size);

    let plain = convert_1bpp(&image, size, PLAIN).unwrap();
    let doubled = convert_1bpp(&image, size, DBL).unwrap();

    assert_eq!(doubled.len(), plain.len() * 2);
    for (row, pair) in plain.iter().zip(doubled.chunks_exact(2)) {
        assert_eq!(pair, [*row, *row]);
    }
}

#[test]
fn output_length_invariant() {
    let formats = [PLAIN, DBL, INVERT_X, Format { dbl: true, invert_x: true }];
    for (w, h) in [(8, 8), (8, 14), (8, 16), (16, 16), (4, 6)] {
        let size = GlyphSize::new(w, h).unwrap();
        let image = patterned(size);
        for format in formats {
            let out = convert_1bpp(&image, size, format).unwrap();
            assert_eq!(out.len(), expected_len(size, format), "{w}x{h} {format:?}");
        }
    }
}

#[test]
fn glyph_bytes_follow_index_order() {
    let size = GlyphSize::new(8, 16).unwrap();
    let mut image = filled(size, BLACK);
    // top-left pixel of glyph 33 lives at column 1, row 1 of the grid
    image.put_pixel(8, 16, WHITE);

    let out = convert_1bpp(&image, size, PLAIN).unwrap();
    let bytes_per_glyph = 16;
    for (i, &b) in out.iter().enumerate() {
        let expected = if i == 33 * bytes_per_glyph { 0x80 } else { 0x00 };
        assert_eq!(b, expected, "byte {i}");
    }
}

#[test]
fn unpacking_recovers_thresholded_grid() {
    let size = GlyphSize::new(8, 16).unwrap();
    let image = patterned(size);
    let out = convert_1bpp(&image, size, PLAIN).unwrap();
    let bits = unpack_bits(&out);

    for glyph in 0..GLYPH_COUNT {
        let ox = (glyph % GRID_COLUMNS) * size.width;
        let oy = (glyph / GRID_COLUMNS) * size.height;
        for y in 0..size.height {
            for x in 0..size.width {
                let idx = ((glyph * size.height + y) * size.width + x) as usize;
                let lit = image.get_pixel(ox + x, oy + y)[0] > 128;
                assert_eq!(bits[idx], lit, "glyph {glyph} ({x}, {y})");
            }
        }
    }
}

#[test]
fn undersized_sheet_is_rejected() {
    let size = GlyphSize::new(8, 16).unwrap();
    let image = RgbaImage::new(256, 127);
    assert!(matches!(
        convert_1bpp(&image, size, PLAIN),
        Err(fontpack::Error::SheetTooSmall { .. })
    ));
}

fn nibble_at(packed: &[u8], pos: usize) -> u8 {
    let byte = packed[pos / 2];
    if pos % 2 == 0 { byte & 0x0F } else { byte >> 4 }
}

#[test]
fn psp_single_pixel_lands_in_slot() {
    for glyph in [0u32, 31, 32, 255] {
        for (x, y) in [(0u32, 0u32), (5, 9)] {
            let mut image = RgbImage::new(192, 80);
            let sx = x + (glyph % 32) * 6;
            let sy = y + (glyph / 32) * 10;
            image.put_pixel(sx, sy, Rgb([200, 128, 255]));

            let packed = psp::convert(&image).unwrap();
            assert_eq!(packed.len(), psp::OUTPUT_LEN);

            let imx = x + (glyph & 31) * 8;
            let imy = y + (glyph >> 5) * 16;
            let pos = (imy * 256 + imx) as usize;
            assert_eq!(psp::canvas_position(glyph, x, y), pos);

            for i in 0..psp::OUTPUT_LEN * 2 {
                let expected = if i == pos { 15 } else { 0 };
                assert_eq!(nibble_at(&packed, i), expected, "glyph {glyph} ({x}, {y}) nibble {i}");
            }
        }
    }
}

#[test]
fn psp_dim_pixels_stay_off() {
    let image = RgbImage::from_pixel(192, 80, Rgb([255, 255, 127]));
    assert!(psp::convert(&image).unwrap().iter().all(|&b| b == 0));
}

#[test]
fn psp_unpacking_recovers_canvas() {
    let image = RgbImage::from_fn(200, 90, |x, y| {
        if (x + 2 * y) % 3 == 0 { Rgb([255, 255, 255]) } else { Rgb([0, 0, 0]) }
    });
    let canvas = psp::Canvas::rasterize(&image).unwrap();
    let packed = canvas.pack();

    assert_eq!(packed.len(), psp::OUTPUT_LEN);
    for (i, &value) in canvas.pixels().iter().enumerate() {
        assert_eq!(nibble_at(&packed, i), value);
    }
}
