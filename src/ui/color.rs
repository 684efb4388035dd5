//! RGB color value with packed-integer and web-color representations

use gtk4::cairo;
use serde::{Deserialize, Serialize};

/// Neutral gray used when no initial color is supplied
pub const DEFAULT_COLOR: Rgb = Rgb {
    r: 127,
    g: 127,
    b: 127,
};

/// One of the three color channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// 8-bit per channel RGB color
///
/// The packed exchange form is `0xRRGGBB` with no alpha byte set, so a
/// packed value always round-trips through the channel triple.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Extract channels from a packed `0xRRGGBB` value
    ///
    /// Bits above the low 24 are discarded, so any integer is a valid
    /// input.
    pub fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Pack into `0xRRGGBB`, no alpha byte set
    pub fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
    }

    /// Web-color form without alpha, e.g. `#287F7F`
    pub fn to_web_color(self) -> String {
        to_web_color(self.to_packed(), false)
    }

    /// Apply to a Cairo context as a fully opaque source color
    pub fn apply_to_cairo(&self, cr: &cairo::Context) {
        cr.set_source_rgb(
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        );
    }
}

impl Default for Rgb {
    fn default() -> Self {
        DEFAULT_COLOR
    }
}

/// Format a packed color as a web color string
///
/// The input is masked to 24 bits (`with_alpha == false`) or taken
/// whole (`with_alpha == true`, leading byte is the alpha channel) and
/// rendered as `#` followed by 6 or 8 uppercase hex digits, zero-padded
/// to full width.
pub fn to_web_color(color: u32, with_alpha: bool) -> String {
    if with_alpha {
        format!("#{:08X}", color)
    } else {
        format!("#{:06X}", color & 0xFF_FFFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_color_masks_to_24_bits() {
        assert_eq!(to_web_color(0x0011_2233, false), "#112233");
        assert_eq!(to_web_color(0xAB11_2233, false), "#112233");
        assert_eq!(to_web_color(u32::MAX, false), "#FFFFFF");
    }

    #[test]
    fn test_web_color_with_alpha_keeps_leading_byte() {
        assert_eq!(to_web_color(0x0011_2233, true), "#00112233");
        assert_eq!(to_web_color(0xAB11_2233, true), "#AB112233");
    }

    #[test]
    fn test_web_color_zero_pads_and_uppercases() {
        assert_eq!(to_web_color(0x0000_000A, false), "#00000A");
        assert_eq!(to_web_color(0x00AB_CDEF, false), "#ABCDEF");
        assert_eq!(to_web_color(0, true), "#00000000");
    }

    #[test]
    fn test_pack_round_trip() {
        let color = Rgb::new(10, 20, 30);
        assert_eq!(Rgb::from_packed(color.to_packed()), color);
        assert_eq!(Rgb::from_packed(0xFF28_7F7F), Rgb::new(0x28, 0x7F, 0x7F));
        assert_eq!(Rgb::from_packed(0xFF28_7F7F).to_packed(), 0x287F7F);
    }

    #[test]
    fn test_channel_access() {
        let mut color = Rgb::default();
        assert_eq!(color, Rgb::new(127, 127, 127));
        color.set_channel(Channel::Red, 40);
        assert_eq!(color.channel(Channel::Red), 40);
        assert_eq!(color.channel(Channel::Green), 127);
        assert_eq!(color.to_web_color(), "#287F7F");
    }
}
