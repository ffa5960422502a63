use crate::error::RenderError;
use mosaic_core::{Mosaic, Rgb};
use std::collections::HashMap;

/// Largest edge the renderer will produce, in pixels
pub const MAX_IMAGE_EDGE: u32 = 32_768;

/// How a mosaic is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per brick
    pub cell_size: u32,
    /// Separator color and width between bricks
    pub grid_line: Option<(Rgb, u32)>,
    /// Re-compress with oxipng
    pub optimize: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: 16,
            grid_line: None,
            optimize: true,
        }
    }
}

/// Renders a [`Mosaic`] as a PNG with one square per brick.
///
/// Uses indexed color (PLTE) when the used colors fit in 256 entries,
/// packing rows at 1, 2, 4 or 8 bits per pixel; falls back to 8-bit RGB
/// otherwise.
pub fn render_mosaic_png(mosaic: &Mosaic, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    if options.cell_size == 0 {
        return Err(RenderError::ZeroCellSize);
    }
    let line = match options.grid_line {
        Some((color, width)) if width > 0 => Some((color, width)),
        _ => None,
    };
    let line_width = line.map_or(0, |(_, w)| w);

    let width = output_edge(mosaic.width(), options.cell_size, line_width);
    let height = output_edge(mosaic.height(), options.cell_size, line_width);
    let (width, height) = match (width, height) {
        (Some(w), Some(h)) => (w, h),
        _ => {
            return Err(RenderError::UnsupportedDimensions {
                width: mosaic.width(),
                height: mosaic.height(),
            })
        }
    };

    // Distinct colors in first-use order; the grid line color goes last
    let mut colors: Vec<Rgb> = Vec::new();
    let mut lookup: HashMap<Rgb, u8> = HashMap::new();
    let mut cell_colors = Vec::with_capacity(mosaic.cells().len());
    let mut indexed = true;
    for color in mosaic.colors() {
        cell_colors.push(color.rgb);
        if indexed && !lookup.contains_key(&color.rgb) {
            indexed = register(&mut colors, &mut lookup, color.rgb);
        }
    }
    if let Some((color, _)) = line {
        if indexed && !lookup.contains_key(&color) {
            indexed = register(&mut colors, &mut lookup, color);
        }
    }

    let columns = axis_map(mosaic.width(), options.cell_size, line_width);
    let rows = axis_map(mosaic.height(), options.cell_size, line_width);
    let line_color = line.map_or(Rgb::WHITE, |(c, _)| c);
    let grid_width = mosaic.width() as usize;

    let pixel_at = |x: usize, y: usize| -> Rgb {
        match (columns[x], rows[y]) {
            (Some(cx), Some(cy)) => cell_colors[cy as usize * grid_width + cx as usize],
            _ => line_color,
        }
    };

    let png_bytes = if indexed {
        let (depth, bits) = brick_index_depth(colors.len());
        let mut indices = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as usize {
            for x in 0..width as usize {
                indices.push(lookup.get(&pixel_at(x, y)).copied().unwrap_or(0));
            }
        }
        let plte: Vec<u8> = colors.iter().flat_map(|c| c.to_bytes()).collect();
        let scanlines = pack_brick_indices(indices, width, bits);
        write_mosaic_png(width, height, PngLayout::Indexed { depth, plte: &plte }, &scanlines)?
    } else {
        let mut scanlines = Vec::with_capacity(width as usize * height as usize * 3);
        for y in 0..height as usize {
            for x in 0..width as usize {
                scanlines.extend_from_slice(&pixel_at(x, y).to_bytes());
            }
        }
        write_mosaic_png(width, height, PngLayout::Truecolor, &scanlines)?
    };

    tracing::debug!(
        width,
        height,
        colors = colors.len(),
        indexed,
        bytes = png_bytes.len(),
        "Encoded mosaic PNG"
    );

    if !options.optimize {
        return Ok(png_bytes);
    }

    // Re-compress with oxipng (zopfli + adaptive filter selection)
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => Ok(optimized),
        Err(e) => {
            tracing::warn!(%e, "oxipng failed, keeping unoptimized PNG");
            Ok(png_bytes)
        }
    }
}

/// Add `color` to the palette; false once it would exceed 256 entries
fn register(colors: &mut Vec<Rgb>, lookup: &mut HashMap<Rgb, u8>, color: Rgb) -> bool {
    match u8::try_from(colors.len()) {
        Ok(index) => {
            lookup.insert(color, index);
            colors.push(color);
            true
        }
        Err(_) => false,
    }
}

/// Output edge length for `cells` bricks separated by `line` pixels
fn output_edge(cells: u32, cell_size: u32, line: u32) -> Option<u32> {
    let bricks = cells.checked_mul(cell_size)?;
    let separators = cells.saturating_sub(1).checked_mul(line)?;
    let edge = bricks.checked_add(separators)?;
    (edge > 0 && edge <= MAX_IMAGE_EDGE).then_some(edge)
}

/// For each output pixel along one axis, the cell it belongs to, or `None`
/// on a separator
fn axis_map(cells: u32, cell_size: u32, line: u32) -> Vec<Option<u32>> {
    let mut map = Vec::new();
    for cell in 0..cells {
        if cell > 0 {
            map.extend(std::iter::repeat(None).take(line as usize));
        }
        map.extend(std::iter::repeat(Some(cell)).take(cell_size as usize));
    }
    map
}

/// Pixel layout of the encoded mosaic
enum PngLayout<'a> {
    /// Palette indices at `depth` bits, `plte` holding the used brick colors
    Indexed {
        depth: png::BitDepth,
        plte: &'a [u8],
    },
    /// 8-bit RGB, for mosaics using more than 256 distinct colors
    Truecolor,
}

/// Smallest PNG bit depth that can address `colors` brick colors
fn brick_index_depth(colors: usize) -> (png::BitDepth, u8) {
    match colors {
        0..=2 => (png::BitDepth::One, 1),
        3..=4 => (png::BitDepth::Two, 2),
        5..=16 => (png::BitDepth::Four, 4),
        _ => (png::BitDepth::Eight, 8),
    }
}

/// Write the mosaic scanlines, already laid out for `layout`, as a PNG stream
fn write_mosaic_png(
    width: u32,
    height: u32,
    layout: PngLayout<'_>,
    scanlines: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        match layout {
            PngLayout::Indexed { depth, plte } => {
                encoder.set_color(png::ColorType::Indexed);
                encoder.set_depth(depth);
                encoder.set_palette(plte);
            }
            PngLayout::Truecolor => {
                encoder.set_color(png::ColorType::Rgb);
                encoder.set_depth(png::BitDepth::Eight);
            }
        }
        // oxipng picks filters and compression when optimizing
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(scanlines)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(out)
}

/// Pack one brick palette index per output pixel into `bits`-wide PNG
/// scanlines, most significant bits first. Each scanline starts on a fresh
/// byte; at 8 bits the indices already are the scanlines.
fn pack_brick_indices(indices: Vec<u8>, width: u32, bits: u8) -> Vec<u8> {
    if bits == 8 {
        return indices;
    }
    let per_byte = usize::from(8 / bits);
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(indices.len().div_ceil(per_byte));

    for scanline in indices.chunks(width as usize) {
        for group in scanline.chunks(per_byte) {
            let byte = group.iter().zip(1u8..).fold(0u8, |byte, (&index, slot)| {
                byte | ((index & mask) << (8 - bits * slot))
            });
            packed.push(byte);
        }
    }
    packed
}
