use rand::Rng;

use super::error::ConversionError;
use super::models::{ColorModel as _, Hsb};

/// An sRGB color with straight alpha.
///
/// Components are nominally in `0...1` but may lie outside of it (wide-gamut
/// results, extended sRGB input). Conversions never clamp; formatting does.
///
/// A plain `Copy` value with public fields. Methods such as
/// [`with_alpha`](Self::with_alpha) and [`clamped`](Self::clamped) return a new
/// value and leave the receiver as it was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorValue {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Default for ColorValue {
    fn default() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl ColorValue {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self { red, green, blue, alpha }
    }

    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Builds a color from a raw component list, as handed over by a host
    /// color picker. Only RGB and RGBA lists are representable.
    pub fn try_from_components(components: &[f64]) -> Result<Self, ConversionError> {
        let (red, green, blue, alpha) = match *components {
            [red, green, blue] => (red, green, blue, 1.0),
            [red, green, blue, alpha] => (red, green, blue, alpha),
            _ => return Err(ConversionError::UnsupportedComponents { count: components.len() }),
        };

        for (channel, value) in [("red", red), ("green", green), ("blue", blue), ("alpha", alpha)] {
            if !value.is_finite() {
                return Err(ConversionError::NonFinite { channel });
            }
        }

        Ok(Self { red, green, blue, alpha })
    }

    /// All components clamped to `0...1`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            red: self.red.clamp(0.0, 1.0),
            green: self.green.clamp(0.0, 1.0),
            blue: self.blue.clamp(0.0, 1.0),
            alpha: self.alpha.clamp(0.0, 1.0),
        }
    }

    /// The color channels quantized to 8 bits, after clamping.
    pub fn to_rgb8(self) -> [u8; 3] {
        let c = self.clamped();
        [quantize(c.red), quantize(c.green), quantize(c.blue)]
    }

    pub fn alpha8(self) -> u8 {
        quantize(self.alpha.clamp(0.0, 1.0))
    }

    /// `0xRRGGBB`. Alpha is ignored.
    pub fn hex(self) -> u32 {
        let [red, green, blue] = self.to_rgb8();
        u32::from(red) << 16 | u32::from(green) << 8 | u32::from(blue)
    }

    /// `0xRRGGBBAA`.
    pub fn hex_with_alpha(self) -> u32 {
        self.hex() << 8 | u32::from(self.alpha8())
    }

    /// Builds a color from `0xRRGGBB`; bits above the low 24 are ignored.
    pub fn from_hex_int(hex: u32, alpha: f64) -> Self {
        Self {
            red: f64::from((hex >> 16) & 0xFF) / 255.0,
            green: f64::from((hex >> 8) & 0xFF) / 255.0,
            blue: f64::from(hex & 0xFF) / 255.0,
            alpha,
        }
    }

    pub fn random_avoiding_black_and_white() -> Self {
        Self::random_avoiding_black_and_white_with(&mut rand::rng())
    }

    /// A fully opaque random color whose saturation and brightness stay in the
    /// upper half, so it is never close to black, white or gray.
    pub fn random_avoiding_black_and_white_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Hsb {
            hue: rng.random_range(0.0..=1.0),
            saturation: rng.random_range(0.5..=1.0),
            brightness: rng.random_range(0.5..=1.0),
            alpha: 1.0,
        }
        .into_color()
    }
}

impl TryFrom<&[f64]> for ColorValue {
    type Error = ConversionError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        Self::try_from_components(components)
    }
}

fn quantize(value: f64) -> u8 {
    (value * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn hex_getters_round_and_clamp() {
        let color = ColorValue::new(1.2, 0.5, -0.1, 0.5);

        assert_eq!(color.hex(), 0xFF8000);
        assert_eq!(color.hex_with_alpha(), 0xFF800080);
        assert_eq!(ColorValue::from_hex_int(0x00FF00, 1.0), ColorValue::rgb(0.0, 1.0, 0.0));
    }

    #[test]
    fn adjustments_return_new_values() {
        let color = ColorValue::new(1.5, 0.5, 0.25, 1.0);
        let translucent = color.with_alpha(0.5);
        let clamped = color.clamped();

        assert_eq!(color, ColorValue::new(1.5, 0.5, 0.25, 1.0));
        assert_eq!(translucent.alpha, 0.5);
        assert_eq!(clamped.red, 1.0);
    }

    #[test]
    fn components_must_be_rgb_or_rgba() {
        assert_eq!(
            ColorValue::try_from_components(&[0.5, 1.0]),
            Err(ConversionError::UnsupportedComponents { count: 2 })
        );
        assert_eq!(
            ColorValue::try_from(&[0.1, 0.2, 0.3, 0.4, 1.0][..]),
            Err(ConversionError::UnsupportedComponents { count: 5 })
        );
        assert_eq!(
            ColorValue::try_from_components(&[0.1, f64::NAN, 0.3]),
            Err(ConversionError::NonFinite { channel: "green" })
        );
        assert_eq!(
            ColorValue::try_from_components(&[0.1, 0.2, 0.3]),
            Ok(ColorValue::rgb(0.1, 0.2, 0.3))
        );
    }

    #[test]
    fn random_colors_avoid_black_and_white() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let color = ColorValue::random_avoiding_black_and_white_with(&mut rng);
            let max = color.red.max(color.green).max(color.blue);
            let min = color.red.min(color.green).min(color.blue);

            assert!(max >= 0.5 - 1e-9, "too dark: {color:?}");
            assert!(max - min >= 0.25 - 1e-9, "too gray: {color:?}");
            assert_eq!(color.alpha, 1.0);
        }
    }
}
