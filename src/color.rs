use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Color of an unlit pixel
pub const OFF_COLOR: Rgb = rgb_from_u32(0x0000_0000);

/// Convert a packed `0x00RRGGBB` value to [`Rgb`]
///
/// The top byte is ignored.
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack [`Rgb`] into `0x00RRGGBB`
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    (color.r as u32) << 16 | (color.g as u32) << 8 | color.b as u32
}
