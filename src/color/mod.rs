pub mod error;
pub mod format;
pub mod linear;
pub mod models;
pub mod parse;
pub mod space;
pub mod value;

use tracing::trace;

pub use self::error::ConversionError;
pub use self::format::{ColorFormat, ColorStrings};
pub use self::value::ColorValue;

use self::models::{ColorModel, Hex, Hsl, Lch, Oklch, Rgb};

/// Parses a CSS color string, trying hex, `hsl()`, `rgb()`, `oklch()` and
/// `lch()` in that order.
pub fn parse_color(string: &str) -> Option<ColorValue> {
    let color = [
        |s: &str| Hex::from_string(s).map(Hex::into_color),
        |s: &str| Hsl::from_string(s).map(Hsl::into_color),
        |s: &str| Rgb::from_string(s).map(Rgb::into_color),
        |s: &str| Oklch::from_string(s).map(Oklch::into_color),
        |s: &str| Lch::from_string(s).map(Lch::into_color),
    ]
    .iter().find_map(|parse| parse(string))?;

    trace!(input = string, ?color, "Parsed color");
    Some(color)
}

/// Parses a color out of loosely formatted text such as clipboard contents.
///
/// Strips surrounding whitespace, a trailing `;` and one pair of matching
/// quotes or backticks before handing over to [`parse_color`].
pub fn parse_color_graceful(text: &str) -> Option<ColorValue> {
    let mut s = text.trim();
    s = s.strip_suffix(';').unwrap_or(s).trim_end();

    for quote in ['"', '\'', '`'] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|rest| rest.strip_suffix(quote)) {
            s = inner.trim();
            break;
        }
    }

    let color = parse_color(s);
    if color.is_none() {
        trace!(input = text, "No color found in text");
    }

    color
}
