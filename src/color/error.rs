use thiserror::Error;

/// A color that cannot be brought into the sRGB working space.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    #[error("unsupported color space: expected 3 (RGB) or 4 (RGBA) components, got {count}")]
    UnsupportedComponents { count: usize },
    #[error("the {channel} component is not a finite number")]
    NonFinite { channel: &'static str },
}
