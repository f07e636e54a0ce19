use std::sync::LazyLock;
use regex::Regex;

use crate::color::parse::{self, polar_grammar};
use crate::color::space::{from_polar, normalize_hue, to_polar, Lab};
use crate::color::ColorValue;

pub static LCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&polar_grammar("lch")).expect("Failed to compile lch color regex")
});

/// Chroma shown as `100%` in `lch()`.
pub const CHROMA_AT_FULL_PERCENT: f64 = 150.0;

/// CIE LCH (D50). Lightness in `0...100`, hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    pub lightness: f64,
    pub chroma: f64,
    pub hue: f64,
    pub alpha: f64,
}

impl super::ColorModel for Lch {
    fn from_color(color: ColorValue) -> Self {
        let lab = color
            .into_linear()
            .into_xyz_d65()
            .adapt_to_d50()
            .into_lab();

        let (chroma, hue) = to_polar(lab.a, lab.b);

        Self { lightness: lab.lightness, chroma, hue, alpha: lab.alpha }
    }

    /// Lightness may carry a `%`, which changes nothing since the range is
    /// already `0...100`. A chroma percentage is relative to 150.
    fn from_string(s: &str) -> Option<Self> {
        let captures = LCH_PATTERN.captures(s)?;
        let lightness = parse::number(&captures, "lightness").filter(|l| (0.0..=100.0).contains(l))?;

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

        Lab { lightness: self.lightness, a, b, alpha: self.alpha }
            .into_xyz_d50()
            .adapt_to_d65()
            .into_linear_rgba()
            .into_color()
    }

    fn into_string(self) -> String {
        // never print "-0", which does not parse
        let lightness = self.lightness.max(0.0) + 0.0;
        let chroma = format!("{:.0}", (self.chroma / CHROMA_AT_FULL_PERCENT * 100.0).max(0.0) + 0.0);
        // hue is noise when there is no visible chroma
        let hue = if chroma == "0" { 0.0 } else { normalize_hue(self.hue) };

        format!(
            "lch({lightness:.0}% {chroma}% {hue:.0}deg{})",
            super::modern_alpha(self.alpha)
        )
    }
}
