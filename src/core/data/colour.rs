/// Alpha byte of every packed pixel. The channel is reserved, always opaque.
pub const OPAQUE_ALPHA: u32 = 0xFF00_0000;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };

    /// Packs into a 32-bit ARGB8888 value.
    #[must_use]
    pub fn to_argb(self) -> u32 {
        OPAQUE_ALPHA | (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_argb_channel_layout() {
        let colour = Colour {
            r: 0x12,
            g: 0x34,
            b: 0x56,
        };

        assert_eq!(colour.to_argb(), 0xFF12_3456);
    }

    #[test]
    fn test_black_is_opaque() {
        assert_eq!(Colour::BLACK.to_argb(), 0xFF00_0000);
    }
}
