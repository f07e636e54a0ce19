use super::ColorValue;

/// Decodes one gamma-encoded sRGB component into linear light.
pub fn srgb_to_linear(component: f64) -> f64 {
    if component > 0.040_45 {
        ((component + 0.055) / 1.055).powf(2.4)
    } else {
        component / 12.92
    }
}

/// Encodes one linear-light component back into sRGB.
pub fn linear_to_srgb(component: f64) -> f64 {
    if component > 0.003_130_8 {
        1.055_f64.mul_add(component.powf(1.0 / 2.4), -0.055)
    } else {
        component * 12.92
    }
}

/// An RGBA color where the RGB components are in linear light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl LinearRgba {
    pub fn into_color(self) -> ColorValue {
        ColorValue {
            red: linear_to_srgb(self.red),
            green: linear_to_srgb(self.green),
            blue: linear_to_srgb(self.blue),
            alpha: self.alpha,
        }
    }
}

impl ColorValue {
    pub fn into_linear(self) -> LinearRgba {
        LinearRgba {
            red: srgb_to_linear(self.red),
            green: srgb_to_linear(self.green),
            blue: srgb_to_linear(self.blue),
            alpha: self.alpha,
        }
    }
}
