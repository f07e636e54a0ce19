use serde::Serialize;

use super::models::{ColorModel, Hex, Hsb, Hsl, Lch, Oklch, Rgb};
use super::ColorValue;

/// A string representation a color can be formatted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `#rrggbb`
    Hex { uppercase: bool, prefix: bool },
    /// `hsl(Hdeg S% L%)`
    Hsl,
    /// `rgb(R G B)`
    Rgb,
    /// `oklch(L% C% Hdeg)`
    Oklch,
    /// `lch(L% C% Hdeg)`
    Lch,
    /// `hsl(H, S%, L%)`
    HslLegacy,
    /// `rgb(R, G, B)`
    RgbLegacy,
    /// `H S% B%`
    Hsb,
}

impl ColorFormat {
    /// Lowercase hex with a `#` prefix.
    pub const fn hex() -> Self {
        ColorFormat::Hex { uppercase: false, prefix: true }
    }
}

impl Default for ColorFormat {
    fn default() -> Self {
        Self::hex()
    }
}

/// Every supported representation of one color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorStrings {
    pub hex: String,
    pub hsl: String,
    pub rgb: String,
    pub oklch: String,
    pub lch: String,
    pub hsl_legacy: String,
    pub rgb_legacy: String,
    pub hsb: String,
}

impl ColorValue {
    /// Formats the color, clamping every component to `0...1` first.
    pub fn format(self, format: ColorFormat) -> String {
        let color = self.clamped();

        match format {
            ColorFormat::Hex { uppercase, prefix } => Hex::from_color(color).format(uppercase, prefix),
            ColorFormat::Hsl => Hsl::from_color(color).into_string(),
            ColorFormat::Rgb => Rgb::from_color(color).into_string(),
            ColorFormat::Oklch => Oklch::from_color(color).into_string(),
            ColorFormat::Lch => Lch::from_color(color).into_string(),
            ColorFormat::HslLegacy => Hsl::from_color(color).into_legacy_string(),
            ColorFormat::RgbLegacy => Rgb::from_color(color).into_legacy_string(),
            ColorFormat::Hsb => Hsb::from_color(color).into_string(),
        }
    }

    pub fn all_formats(self) -> ColorStrings {
        ColorStrings {
            hex: self.format(ColorFormat::hex()),
            hsl: self.format(ColorFormat::Hsl),
            rgb: self.format(ColorFormat::Rgb),
            oklch: self.format(ColorFormat::Oklch),
            lch: self.format(ColorFormat::Lch),
            hsl_legacy: self.format(ColorFormat::HslLegacy),
            rgb_legacy: self.format(ColorFormat::RgbLegacy),
            hsb: self.format(ColorFormat::Hsb),
        }
    }

    pub fn to_hsb(self) -> Hsb {
        Hsb::from_color(self)
    }

    pub fn to_hsl(self) -> Hsl {
        Hsl::from_color(self)
    }

    pub fn to_lch(self) -> Lch {
        Lch::from_color(self)
    }

    pub fn to_oklch(self) -> Oklch {
        Oklch::from_color(self)
    }

    /// All components normalized to `0...1`; they are not clamped.
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Hsb { hue, saturation, brightness, alpha }.into_color()
    }

    /// All components normalized to `0...1`; they are not clamped.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Hsl { hue, saturation, lightness, alpha }.into_color()
    }

    pub fn from_lch(lch: Lch) -> Self {
        lch.into_color()
    }

    pub fn from_oklch(oklch: Oklch) -> Self {
        oklch.into_color()
    }
}
