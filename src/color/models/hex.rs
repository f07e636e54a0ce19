use std::sync::LazyLock;
use regex::Regex;

use crate::color::parse::TAIL;
use crate::color::ColorValue;

pub static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^\s*#?(?P<digits>[0-9a-f]+){TAIL}")).expect("Failed to compile hex color regex")
});

/// An 8-bit-per-channel color as written in hex notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hex {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl super::ColorModel for Hex {
    fn from_color(color: ColorValue) -> Self {
        let [red, green, blue] = color.to_rgb8();
        Self { red, green, blue, alpha: color.alpha8() }
    }

    /// Accepts `RGB`, `RGBA`, `RRGGBB` and `RRGGBBAA` with an optional `#`.
    fn from_string(s: &str) -> Option<Self> {
        let captures = HEX_PATTERN.captures(s)?;
        let digits = captures.name("digits")?.as_str();

        let components: Vec<u8> = match digits.len() {
            3 | 4 => digits.chars()
                .map(|c| u8::from_str_radix(&c.to_string().repeat(2), 16).ok())
                .collect::<Option<_>>()?,

            6 | 8 => (0..digits.len()).step_by(2)
                .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
                .collect::<Option<_>>()?,

            _ => return None,
        };

        Some(Self {
            red: components[0],
            green: components[1],
            blue: components[2],
            alpha: components.get(3).copied().unwrap_or(255),
        })
    }

    fn into_color(self) -> ColorValue {
        ColorValue {
            red: f64::from(self.red) / 255.0,
            green: f64::from(self.green) / 255.0,
            blue: f64::from(self.blue) / 255.0,
            alpha: f64::from(self.alpha) / 255.0,
        }
    }

    fn into_string(self) -> String {
        self.format(false, true)
    }
}

impl Hex {
    /// Six digits; alpha is never written.
    pub fn format(self, uppercase: bool, prefix: bool) -> String {
        let digits = if uppercase {
            format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        } else {
            format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        };

        if prefix { format!("#{digits}") } else { digits }
    }
}

#[cfg(test)]
mod tests {
    use super::super::ColorModel as _;
    use super::*;

    #[test]
    fn accepts_all_lengths() {
        assert_eq!(Hex::from_string("#f00"), Some(Hex { red: 255, green: 0, blue: 0, alpha: 255 }));
        assert_eq!(Hex::from_string("f008"), Some(Hex { red: 255, green: 0, blue: 0, alpha: 0x88 }));
        assert_eq!(Hex::from_string("  #1a2B3c; "), Some(Hex { red: 0x1a, green: 0x2b, blue: 0x3c, alpha: 255 }));
        assert_eq!(Hex::from_string("#1a2b3c80").map(|hex| hex.alpha), Some(0x80));
    }

    #[test]
    fn rejects_other_lengths_and_digits() {
        assert_eq!(Hex::from_string("#12345"), None);
        assert_eq!(Hex::from_string("#1234567"), None);
        assert_eq!(Hex::from_string("#ggg"), None);
        assert_eq!(Hex::from_string("#"), None);
        assert_eq!(Hex::from_string("#ff 00 00"), None);
    }

    #[test]
    fn formats_case_and_prefix() {
        let hex = Hex { red: 0xab, green: 0xcd, blue: 0xef, alpha: 0x10 };

        assert_eq!(hex.into_string(), "#abcdef");
        assert_eq!(hex.format(true, true), "#ABCDEF");
        assert_eq!(hex.format(true, false), "ABCDEF");
        assert_eq!(hex.format(false, false), "abcdef");
    }
}
