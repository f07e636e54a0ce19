use std::sync::LazyLock;
use regex::Regex;

use crate::color::parse::{self, alpha_group, NUMBER, SEPARATOR, TAIL};
use crate::color::ColorValue;

pub static HSB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*(?P<hue>{NUMBER})(?:deg)?{SEPARATOR}(?P<saturation>{NUMBER})%{SEPARATOR}(?P<brightness>{NUMBER})%{alpha}{TAIL}",
        alpha = alpha_group("/"),
    ))
    .expect("Failed to compile hsb color regex")
});

/// Hue, saturation and brightness, each normalized to `0...1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub alpha: f64,
}

impl super::ColorModel for Hsb {
    fn from_color(color: ColorValue) -> Self {
        let ColorValue { red, green, blue, alpha } = color;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == red {
            ((green - blue) / delta).rem_euclid(6.0) * 60.0
        } else if max == green {
            ((blue - red) / delta + 2.0) * 60.0
        } else {
            ((red - green) / delta + 4.0) * 60.0
        };

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Self { hue: hue / 360.0, saturation, brightness: max, alpha }
    }

    /// Parses the wrapper-less `H S% B%` form, optionally followed by `/ A%`.
    fn from_string(s: &str) -> Option<Self> {
        let captures = HSB_PATTERN.captures(s)?;
        let hue = parse::number(&captures, "hue").filter(|h| (0.0..=360.0).contains(h))?;
        let saturation = parse::number(&captures, "saturation").filter(|s| (0.0..=100.0).contains(s))?;
        let brightness = parse::number(&captures, "brightness").filter(|b| (0.0..=100.0).contains(b))?;

        Some(Self {
            hue: hue / 360.0,
            saturation: saturation / 100.0,
            brightness: brightness / 100.0,
            alpha: parse::opacity(&captures)?,
        })
    }

    fn into_color(self) -> ColorValue {
        let hue = (self.hue * 360.0).rem_euclid(360.0);
        let chroma = self.brightness * self.saturation;
        let intermediate = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let match_value = self.brightness - chroma;

        let (red_prime, green_prime, blue_prime) = if hue < 60.0 {
            (chroma, intermediate, 0.0)
        } else if hue < 120.0 {
            (intermediate, chroma, 0.0)
        } else if hue < 180.0 {
            (0.0, chroma, intermediate)
        } else if hue < 240.0 {
            (0.0, intermediate, chroma)
        } else if hue < 300.0 {
            (intermediate, 0.0, chroma)
        } else {
            (chroma, 0.0, intermediate)
        };

        ColorValue {
            red: red_prime + match_value,
            green: green_prime + match_value,
            blue: blue_prime + match_value,
            alpha: self.alpha,
        }
    }

    fn into_string(self) -> String {
        format!(
            "{} {}% {}%{}",
            super::whole(self.hue * 360.0),
            super::whole(self.saturation * 100.0),
            super::whole(self.brightness * 100.0),
            super::modern_alpha(self.alpha)
        )
    }
}
