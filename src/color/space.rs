//! Matrix and polar transforms between linear sRGB, CIE XYZ, CIE Lab and Oklab.
//!
//! XYZ relative to D65 and XYZ relative to D50 are separate types; the only way
//! from one to the other is the Bradford adaptation.

use super::linear::LinearRgba;

type Matrix = [[f64; 3]; 3];

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ_D65: Matrix = [
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175_0],
    [0.019_333_9, 0.119_192_0, 0.950_304_1],
];

#[rustfmt::skip]
const XYZ_D65_TO_LINEAR_SRGB: Matrix = [
    [ 3.240_454_2, -1.537_138_5, -0.498_531_4],
    [-0.969_266_0,  1.876_010_8,  0.041_556_0],
    [ 0.055_643_4, -0.204_025_9,  1.057_225_2],
];

// Bradford
#[rustfmt::skip]
const D65_TO_D50: Matrix = [
    [ 1.047_811_2, 0.022_886_6, -0.050_127_0],
    [ 0.029_542_4, 0.990_484_4, -0.017_049_1],
    [-0.009_234_5, 0.015_043_6,  0.752_131_6],
];

#[rustfmt::skip]
const D50_TO_D65: Matrix = [
    [ 0.955_576_6, -0.023_039_3, 0.063_163_6],
    [-0.028_289_5,  1.009_941_6, 0.021_007_7],
    [ 0.012_298_2, -0.020_483_0, 1.329_909_8],
];

pub const D50_WHITE: [f64; 3] = [0.964_22, 1.0, 0.825_21];

/// CIE ε = 216/24389
pub const EPSILON: f64 = 216.0 / 24_389.0;
/// CIE κ = 24389/27
pub const KAPPA: f64 = 24_389.0 / 27.0;

fn multiply(matrix: &Matrix, [a, b, c]: [f64; 3]) -> [f64; 3] {
    let row = |r: &[f64; 3]| r[0].mul_add(a, r[1].mul_add(b, r[2] * c));
    [row(&matrix[0]), row(&matrix[1]), row(&matrix[2])]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyzD65 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyzD50 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub alpha: f64,
}

/// CIE Lab relative to D50.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub lightness: f64,
    pub a: f64,
    pub b: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub lightness: f64,
    pub a: f64,
    pub b: f64,
    pub alpha: f64,
}

impl LinearRgba {
    pub fn into_xyz_d65(self) -> XyzD65 {
        let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ_D65, [self.red, self.green, self.blue]);
        XyzD65 { x, y, z, alpha: self.alpha }
    }

    pub fn into_oklab(self) -> Oklab {
        // Linear RGB -> Cube-rooted LMS
        let lms_l = 0.051_445_992_9_f64
            .mul_add(self.blue, 0.412_221_470_8_f64.mul_add(self.red, 0.536_332_536_3 * self.green))
            .cbrt();

        let lms_m = 0.107_396_956_6_f64
            .mul_add(self.blue, 0.211_903_498_2_f64.mul_add(self.red, 0.680_699_545_1 * self.green))
            .cbrt();

        let lms_s = 0.629_978_700_5_f64
            .mul_add(self.blue, 0.088_302_461_9_f64.mul_add(self.red, 0.281_718_837_6 * self.green))
            .cbrt();

        // LMS -> Oklab
        Oklab {
            lightness: 0.004_072_046_8_f64.mul_add(-lms_s, 0.210_454_255_3_f64.mul_add(lms_l, 0.793_617_785_0 * lms_m)),
            a: 0.450_593_709_9_f64.mul_add(lms_s, 1.977_998_495_1_f64.mul_add(lms_l, -(2.428_592_205_0 * lms_m))),
            b: 0.808_675_766_0_f64.mul_add(-lms_s, 0.025_904_037_1_f64.mul_add(lms_l, 0.782_771_766_2 * lms_m)),
            alpha: self.alpha,
        }
    }
}

impl XyzD65 {
    pub fn into_linear_rgba(self) -> LinearRgba {
        let [red, green, blue] = multiply(&XYZ_D65_TO_LINEAR_SRGB, [self.x, self.y, self.z]);
        LinearRgba { red, green, blue, alpha: self.alpha }
    }

    pub fn adapt_to_d50(self) -> XyzD50 {
        let [x, y, z] = multiply(&D65_TO_D50, [self.x, self.y, self.z]);
        XyzD50 { x, y, z, alpha: self.alpha }
    }
}

impl XyzD50 {
    pub fn adapt_to_d65(self) -> XyzD65 {
        let [x, y, z] = multiply(&D50_TO_D65, [self.x, self.y, self.z]);
        XyzD65 { x, y, z, alpha: self.alpha }
    }

    pub fn into_lab(self) -> Lab {
        let f = |t: f64| if t > EPSILON { t.cbrt() } else { KAPPA.mul_add(t, 16.0) / 116.0 };

        let fx = f(self.x / D50_WHITE[0]);
        let fy = f(self.y / D50_WHITE[1]);
        let fz = f(self.z / D50_WHITE[2]);

        Lab {
            lightness: 116.0f64.mul_add(fy, -16.0),
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
            alpha: self.alpha,
        }
    }
}

impl Lab {
    pub fn into_xyz_d50(self) -> XyzD50 {
        let fy = (self.lightness + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        let inverse = |f: f64| {
            let cubed = f.powi(3);
            if cubed > EPSILON { cubed } else { 116.0f64.mul_add(f, -16.0) / KAPPA }
        };

        let y = if self.lightness > KAPPA * EPSILON {
            fy.powi(3)
        } else {
            self.lightness / KAPPA
        };

        XyzD50 {
            x: inverse(fx) * D50_WHITE[0],
            y: y * D50_WHITE[1],
            z: inverse(fz) * D50_WHITE[2],
            alpha: self.alpha,
        }
    }
}

impl Oklab {
    pub fn into_linear_rgba(self) -> LinearRgba {
        // Oklab -> Cubed LMS
        let lms_l = 0.215_803_757_3_f64.mul_add(self.b, 0.396_337_777_4_f64.mul_add(self.a, self.lightness)).powi(3);
        let lms_m = 0.063_854_172_8_f64.mul_add(-self.b, 0.105_561_345_8_f64.mul_add(-self.a, self.lightness)).powi(3);
        let lms_s = 1.291_485_548_0_f64.mul_add(-self.b, 0.089_484_177_5_f64.mul_add(-self.a, self.lightness)).powi(3);

        // Cubed LMS -> Linear RGB
        LinearRgba {
            red: 0.230_969_929_2_f64.mul_add(lms_s, 4.076_741_662_1_f64.mul_add(lms_l, -(3.307_711_591_3 * lms_m))),
            green: 0.341_319_396_5_f64.mul_add(-lms_s, (-1.268_438_004_6_f64).mul_add(lms_l, 2.609_757_401_1 * lms_m)),
            blue: 1.707_614_701_0_f64.mul_add(lms_s, (-0.004_196_086_3_f64).mul_add(lms_l, -(0.703_418_614_7 * lms_m))),
            alpha: self.alpha,
        }
    }
}

/// Wraps an angle in degrees into `[0, 360)`. Negative zero becomes zero.
pub fn normalize_hue(degrees: f64) -> f64 {
    let hue = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if hue >= 360.0 { 0.0 } else { hue + 0.0 }
}

/// Rectangular `(a, b)` to polar `(chroma, hue in degrees)`.
pub fn to_polar(a: f64, b: f64) -> (f64, f64) {
    (a.hypot(b), normalize_hue(b.atan2(a).to_degrees()))
}

/// Polar `(chroma, hue in degrees)` to rectangular `(a, b)`.
pub fn from_polar(chroma: f64, hue: f64) -> (f64, f64) {
    let (sin, cos) = hue.to_radians().sin_cos();
    (chroma * cos, chroma * sin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 3], b: [f64; 3], tolerance: f64) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < tolerance)
    }

    #[test]
    fn white_maps_to_reference_whites() {
        let white = LinearRgba { red: 1.0, green: 1.0, blue: 1.0, alpha: 1.0 };
        let d65 = white.into_xyz_d65();
        let d50 = d65.adapt_to_d50();

        assert!(close([d65.x, d65.y, d65.z], [0.950_47, 1.0, 1.088_83], 1e-4));
        assert!(close([d50.x, d50.y, d50.z], D50_WHITE, 1e-4));

        let lab = d50.into_lab();
        assert!((lab.lightness - 100.0).abs() < 0.01);
        assert!(lab.a.abs() < 0.01 && lab.b.abs() < 0.01);
    }

    #[test]
    fn bradford_matrices_are_inverse() {
        let xyz = XyzD65 { x: 0.3, y: 0.4, z: 0.5, alpha: 1.0 };
        let back = xyz.adapt_to_d50().adapt_to_d65();

        assert!(close([back.x, back.y, back.z], [0.3, 0.4, 0.5], 1e-6));
    }

    #[test]
    fn lab_inverts_including_the_linear_branch() {
        for xyz in [[0.2, 0.3, 0.1], [0.001, 0.002, 0.0015], [0.9, 0.95, 0.8]] {
            let lab = XyzD50 { x: xyz[0], y: xyz[1], z: xyz[2], alpha: 1.0 }.into_lab();
            let back = lab.into_xyz_d50();

            assert!(close([back.x, back.y, back.z], xyz, 1e-9), "{xyz:?} -> {lab:?} -> {back:?}");
        }
    }

    #[test]
    fn oklab_of_white_is_unit_lightness() {
        let white = LinearRgba { red: 1.0, green: 1.0, blue: 1.0, alpha: 1.0 }.into_oklab();

        assert!((white.lightness - 1.0).abs() < 1e-4);
        assert!(white.a.abs() < 1e-4 && white.b.abs() < 1e-4);
    }

    #[test]
    fn oklab_matrices_are_inverse() {
        for rgb in [[1.0, 0.0, 0.0], [0.0, 0.0, 0.2], [0.3, 0.6, 0.9], [0.001, 0.5, 0.0]] {
            let linear = LinearRgba { red: rgb[0], green: rgb[1], blue: rgb[2], alpha: 1.0 };
            let back = linear.into_oklab().into_linear_rgba();

            assert!(close([back.red, back.green, back.blue], rgb, 1e-6), "{rgb:?} -> {back:?}");
        }
    }

    #[test]
    fn hue_normalization() {
        assert_eq!(normalize_hue(-0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(-1e-18), 0.0);
        assert_eq!(to_polar(0.0, 0.0), (0.0, 0.0));
        assert_eq!(to_polar(0.0, -0.0).1.to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn polar_round_trip() {
        let (chroma, hue) = to_polar(-3.0, 4.0);
        let (a, b) = from_polar(chroma, hue);

        assert!((chroma - 5.0).abs() < 1e-12);
        assert!((a + 3.0).abs() < 1e-12 && (b - 4.0).abs() < 1e-12);
    }
}
