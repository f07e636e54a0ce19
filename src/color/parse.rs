use std::str::FromStr as _;
use regex::Captures;
use strum::EnumString;

use super::space::normalize_hue;

/// An unsigned CSS number: `12`, `12.5` or `.5`.
pub const NUMBER: &str = r"(?:\d+(?:\.\d+)?|\.\d+)";

/// Separator between components that may be written with commas or spaces.
pub const SEPARATOR: &str = r"(?:\s*,\s*|\s+)";

/// Trailing `;` and surrounding whitespace that pasted CSS tends to carry.
pub const TAIL: &str = r"\s*;?\s*$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum AngleUnit {
    Deg,
    Rad,
    Grad,
    Turn,
}

impl AngleUnit {
    pub fn to_degrees(self, value: f64) -> f64 {
        match self {
            AngleUnit::Deg => value,
            AngleUnit::Rad => value.to_degrees(),
            AngleUnit::Grad => value * 0.9,
            AngleUnit::Turn => value * 360.0,
        }
    }
}

/// Reads a named numeric capture.
pub fn number(captures: &Captures, name: &str) -> Option<f64> {
    captures.name(name)?.as_str().parse::<f64>().ok()
}

/// Whether the named capture group took part in the match (used for `%` flags).
pub fn has(captures: &Captures, name: &str) -> bool {
    captures.name(name).is_some()
}

/// Reads an angle made of a `name` number and an optional `{name}_unit` suffix,
/// in degrees. A bare number is already in degrees.
pub fn angle(captures: &Captures, name: &str) -> Option<f64> {
    let value = number(captures, name)?;

    match captures.name(&format!("{name}_unit")) {
        Some(unit) => Some(AngleUnit::from_str(unit.as_str()).ok()?.to_degrees(value)),
        None => Some(value),
    }
}

/// Reads a hue angle that must lie within one turn once converted to
/// degrees. A full turn is the same hue as zero.
pub fn hue(captures: &Captures, name: &str) -> Option<f64> {
    angle(captures, name)
        .filter(|degrees| (0.0..=360.0).contains(degrees))
        .map(normalize_hue)
}

/// Reads the optional `alpha` capture: a bare fraction, or a percentage when
/// `alpha_percent` matched. Absent alpha is opaque. The result is clamped.
pub fn opacity(captures: &Captures) -> Option<f64> {
    if captures.name("alpha").is_none() {
        return Some(1.0);
    }

    let value = number(captures, "alpha")?;
    let value = if has(captures, "alpha_percent") { value / 100.0 } else { value };

    Some(value.clamp(0.0, 1.0))
}

/// The optional alpha tail shared by the functional grammars. `separators` is
/// a character class body such as `,/` or `/`.
pub fn alpha_group(separators: &str) -> String {
    format!(r"(?:\s*[{separators}]\s*(?P<alpha>{NUMBER})(?P<alpha_percent>%)?)?")
}

/// `family( <lightness>[%] <chroma>[%] <hue>[unit] [/ <alpha>[%]] )`, shared
/// by `lch()` and `oklch()`.
pub fn polar_grammar(family: &str) -> String {
    format!(
        r"(?i)^\s*{family}\(\s*(?P<lightness>{NUMBER})(?P<lightness_percent>%)?\s+(?P<chroma>{NUMBER})(?P<chroma_percent>%)?\s+(?P<hue>{NUMBER})(?P<hue_unit>deg|rad|grad|turn)?{alpha}\s*\){TAIL}",
        alpha = alpha_group("/"),
    )
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    fn alpha_of(input: &str) -> Option<f64> {
        let pattern = Regex::new(&format!(r"^x{}$", alpha_group(",/"))).unwrap();
        opacity(&pattern.captures(input)?)
    }

    #[test]
    fn opacity_forms() {
        assert_eq!(alpha_of("x"), Some(1.0));
        assert_eq!(alpha_of("x / 0.25"), Some(0.25));
        assert_eq!(alpha_of("x, .5"), Some(0.5));
        assert_eq!(alpha_of("x / 40%"), Some(0.4));
        assert_eq!(alpha_of("x / 150%"), Some(1.0));
        assert_eq!(alpha_of("x / 3"), Some(1.0));
    }

    #[test]
    fn angle_units() {
        assert_eq!(AngleUnit::from_str("TURN").unwrap().to_degrees(0.5), 180.0);
        assert_eq!(AngleUnit::Grad.to_degrees(100.0), 90.0);
        assert!((AngleUnit::Rad.to_degrees(std::f64::consts::PI) - 180.0).abs() < 1e-12);
        assert!(AngleUnit::from_str("deg").is_ok());
        assert!(AngleUnit::from_str("percent").is_err());
    }

    #[test]
    fn hue_stays_within_one_turn() {
        let pattern = Regex::new(&format!(r"^(?P<hue>{NUMBER})(?P<hue_unit>deg|rad|grad|turn)?$")).unwrap();
        let hue_of = |input: &str| hue(&pattern.captures(input)?, "hue");

        assert_eq!(hue_of("90"), Some(90.0));
        assert_eq!(hue_of("360deg"), Some(0.0));
        assert_eq!(hue_of("1turn"), Some(0.0));
        assert_eq!(hue_of("400grad"), Some(0.0));
        assert_eq!(hue_of("400deg"), None);
        assert_eq!(hue_of("2turn"), None);
        assert_eq!(hue_of("7rad"), None);
    }
}
