//! Segment colors

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#0080FF`
    pub fn css(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Shift every channel by `amount` of full scale, clamped to range.
    /// Negative amounts darken.
    pub fn lighten(&self, amount: f32) -> Rgb {
        let amt = (255.0 * amount).round() as i16;
        let shift = |c: u8| (c as i16 + amt).clamp(0, 255) as u8;
        Rgb::new(shift(self.r), shift(self.g), shift(self.b))
    }
}

/// Segment fill colors, assigned round-robin by index
pub const PALETTE: [Rgb; 12] = [
    Rgb::new(0x00, 0x80, 0xFF), // blue
    Rgb::new(0x03, 0x1B, 0x4E), // dark blue
    Rgb::new(0x10, 0xB9, 0x81), // green
    Rgb::new(0xF5, 0x9E, 0x0B), // amber
    Rgb::new(0xEF, 0x44, 0x44), // red
    Rgb::new(0x8B, 0x5C, 0xF6), // purple
    Rgb::new(0x06, 0xB6, 0xD4), // cyan
    Rgb::new(0x84, 0xCC, 0x16), // lime
    Rgb::new(0xF9, 0x73, 0x16), // orange
    Rgb::new(0xEC, 0x48, 0x99), // pink
    Rgb::new(0x63, 0x66, 0xF1), // indigo
    Rgb::new(0x14, 0xB8, 0xA6), // teal
];

/// Fill color for segment `index`
pub fn segment_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

/// Fixed chrome colors
pub mod ui {
    use super::Rgb;

    /// Hub disc fill
    pub const HUB_FILL: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    /// Hub ring, wheel rim and resting pointer
    pub const WHEEL_RING: Rgb = Rgb::new(0x00, 0x80, 0xFF);
    /// Empty-wheel gradient, center stop
    pub const EMPTY_CENTER: Rgb = Rgb::new(0xEB, 0xF5, 0xFF);
    /// Empty-wheel gradient, rim stop
    pub const EMPTY_RIM: Rgb = Rgb::new(0xCB, 0xD5, 0xE1);
    /// Empty-wheel prompt text
    pub const PROMPT_TEXT: Rgb = Rgb::new(0x64, 0x74, 0x8B);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_format() {
        assert_eq!(PALETTE[0].css(), "#0080FF");
        assert_eq!(Rgb::new(3, 27, 78).css(), "#031B4E");
    }

    #[test]
    fn test_lighten_adds_and_clamps() {
        // 0.3 of full scale rounds to +77 per channel
        assert_eq!(PALETTE[0].lighten(0.3), Rgb::new(77, 205, 255));
    }

    #[test]
    fn test_darken_clamps_at_zero() {
        assert_eq!(Rgb::new(10, 200, 0).lighten(-0.5), Rgb::new(0, 72, 0));
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(segment_color(0), segment_color(12));
        assert_eq!(segment_color(25), PALETTE[1]);
    }
}
