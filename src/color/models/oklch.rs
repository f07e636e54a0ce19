use std::sync::LazyLock;
use regex::Regex;

use crate::color::parse::{self, polar_grammar};
use crate::color::space::{from_polar, normalize_hue, to_polar, Oklab};
use crate::color::ColorValue;

pub static OKLCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&polar_grammar("oklch")).expect("Failed to compile oklch color regex")
});

/// Chroma shown as `100%` in `oklch()`.
pub const CHROMA_AT_FULL_PERCENT: f64 = 0.4;

/// OKLCH. Lightness in `0...1`, hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub lightness: f64,
    pub chroma: f64,
    pub hue: f64,
    pub alpha: f64,
}

impl super::ColorModel for Oklch {
    fn from_color(color: ColorValue) -> Self {
        let oklab = color.into_linear().into_oklab();
        let (chroma, hue) = to_polar(oklab.a, oklab.b);

        Self { lightness: oklab.lightness, chroma, hue, alpha: oklab.alpha }
    }

    fn from_string(s: &str) -> Option<Self> {
        let captures = OKLCH_PATTERN.captures(s)?;

        let lightness = parse::number(&captures, "lightness")?;
        let lightness = if parse::has(&captures, "lightness_percent") {
            (0.0..=100.0).contains(&lightness).then(|| lightness / 100.0)?
        } else {
            (0.0..=1.0).contains(&lightness).then_some(lightness)?
        };

        let chroma = parse::number(&captures, "chroma")?;
        let chroma = if parse::has(&captures, "chroma_percent") {
            (0.0..=100.0).contains(&chroma).then(|| chroma / 100.0 * CHROMA_AT_FULL_PERCENT)?
        } else {
            chroma
        };

        Some(Self {
            lightness,
            chroma,
            hue: parse::hue(&captures, "hue")?,
            alpha: parse::opacity(&captures)?,
        })
    }

    fn into_color(self) -> ColorValue {
        let (a, b) = from_polar(self.chroma, self.hue);

        Oklab { lightness: self.lightness, a, b, alpha: self.alpha }
            .into_linear_rgba()
            .into_color()
    }

    fn into_string(self) -> String {
        // never print "-0", which does not parse
        let lightness = (self.lightness * 100.0).max(0.0) + 0.0;
        let chroma = format!("{:.0}", (self.chroma / CHROMA_AT_FULL_PERCENT * 100.0).max(0.0) + 0.0);
        // hue is noise when there is no visible chroma
        let hue = if chroma == "0" { 0.0 } else { normalize_hue(self.hue) };

        format!(
            "oklch({lightness:.0}% {chroma}% {hue:.0}deg{})",
            super::modern_alpha(self.alpha)
        )
    }
}
