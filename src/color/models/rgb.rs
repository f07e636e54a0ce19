use std::sync::LazyLock;
use regex::{Captures, Regex};

use crate::color::parse::{self, alpha_group, NUMBER, SEPARATOR, TAIL};
use crate::color::ColorValue;

pub static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*rgba?\(\s*(?P<red>{NUMBER}){SEPARATOR}(?P<green>{NUMBER}){SEPARATOR}(?P<blue>{NUMBER}){alpha}\s*\){TAIL}",
        alpha = alpha_group(",/"),
    ))
    .expect("Failed to compile rgb color regex")
});

pub static RGB_PERCENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*rgba?\(\s*(?P<red>{NUMBER})%{SEPARATOR}(?P<green>{NUMBER})%{SEPARATOR}(?P<blue>{NUMBER})%{alpha}\s*\){TAIL}",
        alpha = alpha_group(",/"),
    ))
    .expect("Failed to compile percentage rgb color regex")
});

/// RGB with channels on the `0...255` scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl super::ColorModel for Rgb {
    fn from_color(color: ColorValue) -> Self {
        Self {
            red: color.red * 255.0,
            green: color.green * 255.0,
            blue: color.blue * 255.0,
            alpha: color.alpha,
        }
    }

    /// Accepts integer channels (`0...255`) or, when every channel carries a
    /// `%`, percentages (`0...100`).
    fn from_string(s: &str) -> Option<Self> {
        fn channels(captures: &Captures, percent: bool) -> Option<[f64; 3]> {
            let max = if percent { 100.0 } else { 255.0 };
            let mut values = [0.0; 3];

            for (value, name) in values.iter_mut().zip(["red", "green", "blue"]) {
                let number = parse::number(captures, name).filter(|v| (0.0..=max).contains(v))?;
                *value = if percent { number / 100.0 * 255.0 } else { number };
            }

            Some(values)
        }

        let (captures, [red, green, blue]) = if let Some(captures) = RGB_PATTERN.captures(s) {
            let values = channels(&captures, false)?;
            (captures, values)
        } else {
            let captures = RGB_PERCENT_PATTERN.captures(s)?;
            let values = channels(&captures, true)?;
            (captures, values)
        };

        Some(Self { red, green, blue, alpha: parse::opacity(&captures)? })
    }

    fn into_color(self) -> ColorValue {
        ColorValue {
            red: self.red / 255.0,
            green: self.green / 255.0,
            blue: self.blue / 255.0,
            alpha: self.alpha,
        }
    }

    fn into_string(self) -> String {
        format!(
            "rgb({} {} {}{})",
            super::whole(self.red),
            super::whole(self.green),
            super::whole(self.blue),
            super::modern_alpha(self.alpha)
        )
    }
}

impl Rgb {
    pub fn into_legacy_string(self) -> String {
        format!(
            "rgb({}, {}, {}{})",
            super::whole(self.red),
            super::whole(self.green),
            super::whole(self.blue),
            super::legacy_alpha(self.alpha)
        )
    }
}
