use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum ColorFormatKind {
    #[strum(to_string = "hex", serialize = "#")]
    Hex,
    #[strum(to_string = "hsl")]
    Hsl,
    #[strum(to_string = "rgb")]
    Rgb,
    #[strum(to_string = "oklch")]
    Oklch,
    #[strum(to_string = "lch")]
    Lch,
    #[strum(to_string = "hsb", serialize = "hsv")]
    Hsb,
}

impl ColorFormatKind {
    pub fn title(self) -> &'static str {
        match self {
            ColorFormatKind::Hex => "Hex",
            ColorFormatKind::Hsl => "HSL",
            ColorFormatKind::Rgb => "RGB",
            ColorFormatKind::Oklch => "OKLCH",
            ColorFormatKind::Lch => "LCH",
            ColorFormatKind::Hsb => "HSB",
        }
    }
}
