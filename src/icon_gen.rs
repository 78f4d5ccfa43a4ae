use crate::geometry::Geometry;
use crate::palette::{BACKGROUND, PRIMARY_ACCENT, SECONDARY_ACCENT, TRANSPARENT};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageBuffer, ImageEncoder, RgbaImage,
};
use serde::Serialize;
use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Which flavour of the launcher icon to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconVariant {
    /// Transparent adaptive-icon foreground layer
    Foreground,
    /// Opaque adaptive-icon background layer
    Background,
    /// Flattened icon clipped to a rounded square
    Legacy,
    /// Flattened icon clipped to a circle
    Round,
}

impl IconVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconVariant::Foreground => "foreground",
            IconVariant::Background => "background",
            IconVariant::Legacy => "legacy",
            IconVariant::Round => "round",
        }
    }
}

impl fmt::Display for IconVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render one variant at `size`x`size` pixels
pub fn render(variant: IconVariant, size: u32) -> RgbaImage {
    match variant {
        IconVariant::Foreground => render_foreground(size),
        IconVariant::Background => render_background(size),
        IconVariant::Legacy => render_legacy(size),
        IconVariant::Round => render_round(size),
    }
}

/// Draw the split circle on a transparent canvas
///
/// Two half-disks of the main radius sit either side of the center, each pushed outward by
/// the split offset: teal on the left with its flat edge facing right, purple on the right
/// with its flat edge facing left. A background-colored bar covers the gap between them,
/// slightly shorter than the full circle height.
pub fn render_foreground(size: u32) -> RgbaImage {
    let geometry = Geometry::new(size);

    ImageBuffer::from_fn(size, size, |x, y| {
        if geometry.in_divider(x, y) {
            BACKGROUND
        } else if geometry.in_left_half_disk(x, y) {
            PRIMARY_ACCENT
        } else if geometry.in_right_half_disk(x, y) {
            SECONDARY_ACCENT
        } else {
            TRANSPARENT
        }
    })
}

/// Solid background layer for adaptive icons
pub fn render_background(size: u32) -> RgbaImage {
    ImageBuffer::from_fn(size, size, |_, _| BACKGROUND)
}

/// Foreground over a rounded square, clipped to the same rounded square
pub fn render_legacy(size: u32) -> RgbaImage {
    let geometry = Geometry::new(size);
    compose_clipped(size, |x, y| geometry.in_rounded_rect(x, y))
}

/// Foreground over a circle, clipped to the same circle
pub fn render_round(size: u32) -> RgbaImage {
    let geometry = Geometry::new(size);
    compose_clipped(size, |x, y| geometry.in_inscribed_circle(x, y))
}

fn compose_clipped<F>(size: u32, inside: F) -> RgbaImage
where
    F: Fn(u32, u32) -> bool,
{
    let mut base = ImageBuffer::from_fn(size, size, |x, y| {
        if inside(x, y) {
            BACKGROUND
        } else {
            TRANSPARENT
        }
    });

    let foreground = render_foreground(size);
    image::imageops::overlay(&mut base, &foreground, 0, 0);

    // The foreground may reach past the base shape; clip it again.
    apply_mask(&mut base, inside);
    base
}

/// Clear every pixel for which `inside` is false
pub fn apply_mask<F>(img: &mut RgbaImage, inside: F)
where
    F: Fn(u32, u32) -> bool,
{
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if !inside(x, y) {
            *pixel = TRANSPARENT;
        }
    }
}

/// Encode `image` as PNG and write it to `path`, replacing any existing file
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(image, &mut out_file)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file
        .flush()
        .with_context(|| format!("Failed to flush PNG {}", path.display()))?;
    Ok(())
}

// Encode image data as PNG with compression
pub fn write_png<W: Write>(image: &RgbaImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
    Ok(())
}
