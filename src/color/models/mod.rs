pub mod hex;
pub mod rgb;
pub mod hsb;
pub mod hsl;
pub mod lch;
pub mod oklch;

pub use {
    hex::Hex,
    rgb::Rgb,
    hsb::Hsb,
    hsl::Hsl,
    lch::Lch,
    oklch::Oklch,
};

use super::ColorValue;

pub trait ColorModel {
    /// Gets this model from a color. Components are taken as they are; out of
    /// gamut values pass through unclamped.
    fn from_color(color: ColorValue) -> Self where Self: Sized;

    /// Parses this model from its CSS string representation.
    ///
    /// Returns `None` when the string does not follow the grammar or a
    /// component is out of its valid range.
    fn from_string(string: &str) -> Option<Self> where Self: Sized;

    /// Gets this color from another color model, through `ColorValue`.
    fn from_model<M: ColorModel>(source: M) -> Self where Self: Sized {
        Self::from_color(source.into_color())
    }

    /// Converts this model back into a color.
    fn into_color(self) -> ColorValue;

    /// Converts this model into its (modern) CSS string representation.
    fn into_string(self) -> String;
}

fn is_opaque(alpha: f64) -> bool {
    (alpha * 100.0).round() >= 100.0
}

/// ` / AA%`, or nothing when opaque.
pub(crate) fn modern_alpha(alpha: f64) -> String {
    if is_opaque(alpha) {
        String::new()
    } else {
        format!(" / {}%", (alpha.clamp(0.0, 1.0) * 100.0).round() as i64)
    }
}

/// `, A.AA`, or nothing when opaque.
pub(crate) fn legacy_alpha(alpha: f64) -> String {
    if is_opaque(alpha) {
        String::new()
    } else {
        format!(", {:.2}", alpha.clamp(0.0, 1.0))
    }
}

/// Rounds half away from zero into an integer for display.
pub(crate) fn whole(value: f64) -> i64 {
    value.round() as i64
}
