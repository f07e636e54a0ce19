use std::sync::LazyLock;
use regex::Regex;

use crate::color::parse::{self, alpha_group, NUMBER, SEPARATOR, TAIL};
use crate::color::ColorValue;

pub static HSL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*hsla?\(\s*(?P<hue>{NUMBER})(?:deg)?{SEPARATOR}(?P<saturation>{NUMBER})%{SEPARATOR}(?P<lightness>{NUMBER})%{alpha}\s*\){TAIL}",
        alpha = alpha_group(",/"),
    ))
    .expect("Failed to compile hsl color regex")
});

/// Hue, saturation and lightness, each normalized to `0...1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl super::ColorModel for Hsl {
    fn from_color(color: ColorValue) -> Self {
        Self::from(super::Hsb::from_color(color))
    }

    fn from_string(s: &str) -> Option<Self> {
        let captures = HSL_PATTERN.captures(s)?;
        let hue = parse::number(&captures, "hue").filter(|h| (0.0..=360.0).contains(h))?;
        let saturation = parse::number(&captures, "saturation").filter(|s| (0.0..=100.0).contains(s))?;
        let lightness = parse::number(&captures, "lightness").filter(|l| (0.0..=100.0).contains(l))?;

        Some(Self {
            hue: hue / 360.0,
            saturation: saturation / 100.0,
            lightness: lightness / 100.0,
            alpha: parse::opacity(&captures)?,
        })
    }

    fn into_color(self) -> ColorValue {
        super::Hsb::from(self).into_color()
    }

    fn into_string(self) -> String {
        format!(
            "hsl({}deg {}% {}%{})",
            super::whole(self.hue * 360.0),
            super::whole(self.saturation * 100.0),
            super::whole(self.lightness * 100.0),
            super::modern_alpha(self.alpha)
        )
    }
}

impl Hsl {
    pub fn into_legacy_string(self) -> String {
        format!(
            "hsl({}, {}%, {}%{})",
            super::whole(self.hue * 360.0),
            super::whole(self.saturation * 100.0),
            super::whole(self.lightness * 100.0),
            super::legacy_alpha(self.alpha)
        )
    }
}

impl From<super::Hsb> for Hsl {
    fn from(hsb: super::Hsb) -> Self {
        let mut saturation = hsb.saturation * hsb.brightness;
        let lightness = (2.0 - hsb.saturation) * hsb.brightness;

        let divider = if lightness <= 1.0 { lightness } else { 2.0 - lightness };
        if divider != 0.0 {
            saturation /= divider;
        }

        Self {
            hue: hsb.hue,
            saturation,
            lightness: lightness / 2.0,
            alpha: hsb.alpha,
        }
    }
}

impl From<Hsl> for super::Hsb {
    fn from(hsl: Hsl) -> Self {
        let brightness = hsl.saturation.mul_add(hsl.lightness.min(1.0 - hsl.lightness), hsl.lightness);
        let saturation = if brightness == 0.0 { 0.0 } else { 2.0 * (1.0 - hsl.lightness / brightness) };

        Self {
            hue: hsl.hue,
            saturation,
            brightness,
            alpha: hsl.alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{ColorModel as _, Hsb};
    use super::*;

    #[test]
    fn red_is_full_saturation_half_lightness() {
        let hsl = Hsl::from_color(ColorValue::rgb(1.0, 0.0, 0.0));

        assert_eq!((hsl.hue, hsl.saturation, hsl.lightness), (0.0, 1.0, 0.5));
        assert_eq!(hsl.into_string(), "hsl(0deg 100% 50%)");
        assert_eq!(hsl.into_legacy_string(), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn white_and_black_have_no_saturation() {
        let white = Hsl::from_color(ColorValue::rgb(1.0, 1.0, 1.0));
        let black = Hsl::from_color(ColorValue::rgb(0.0, 0.0, 0.0));

        assert_eq!((white.saturation, white.lightness), (0.0, 1.0));
        assert_eq!((black.saturation, black.lightness), (0.0, 0.0));
        assert_eq!(Hsb::from(black).saturation, 0.0);
    }

    #[test]
    fn parses_modern_and_legacy_syntax() {
        let expected = Some(Hsl { hue: 120.0 / 360.0, saturation: 1.0, lightness: 0.5, alpha: 1.0 });

        assert_eq!(Hsl::from_string("hsl(120deg 100% 50%)"), expected);
        assert_eq!(Hsl::from_string("hsl(120, 100%, 50%)"), expected);
        assert_eq!(Hsl::from_string("hsla(120 100% 50%);"), expected);
        assert_eq!(Hsl::from_string("hsl(120deg 100% 50% / 25%)").map(|hsl| hsl.alpha), Some(0.25));
        assert_eq!(Hsl::from_string("hsl(120, 100%, 50%, 0.3)").map(|hsl| hsl.alpha), Some(0.3));
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert_eq!(Hsl::from_string("hsl(400deg 50% 50%)"), None);
        assert_eq!(Hsl::from_string("hsl(10deg 150% 50%)"), None);
        assert_eq!(Hsl::from_string("hsl(10deg 50 50%)"), None);
    }

    #[test]
    fn formats_alpha() {
        let hsl = Hsl { hue: 0.5, saturation: 0.25, lightness: 0.75, alpha: 0.4 };

        assert_eq!(hsl.into_string(), "hsl(180deg 25% 75% / 40%)");
        assert_eq!(hsl.into_legacy_string(), "hsl(180, 25%, 75%, 0.40)");
    }
}
