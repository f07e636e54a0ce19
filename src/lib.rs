pub mod color;
pub mod config;
pub mod filesystem;

pub use color::{
    parse_color,
    parse_color_graceful,
    ColorValue,
    ColorFormat,
    ColorStrings,
    ConversionError,
};

pub const FLOAT_TOLERANCE: f64 = 0.0001;
