//! The fixed icon palette.

use image::Rgba;

/// Deep navy, used for the background layer and the center divider.
pub const BACKGROUND: Rgba<u8> = Rgba([10, 14, 39, 255]);

/// Teal, fills the left half-disk.
pub const PRIMARY_ACCENT: Rgba<u8> = Rgba([0, 217, 192, 255]);

/// Purple, fills the right half-disk.
pub const SECONDARY_ACCENT: Rgba<u8> = Rgba([168, 85, 247, 255]);

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Format the RGB channels of a color as a lowercase `#rrggbb` string
pub fn to_hex(color: Rgba<u8>) -> String {
    let [r, g, b, _] = color.0;
    format!("#{r:02x}{g:02x}{b:02x}")
}
