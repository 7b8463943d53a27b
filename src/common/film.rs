//! Display-side hand-off for converted colors. A tonemapper compresses linear
//! RGB into a displayable range before it is quantized into an image pixel.

use super::coefficients::RGBCoefficients;
use super::math::gamma_correct;

pub const DEFAULT_GAMMA: f64 = 2.2;

pub trait Tonemapper: Send + Sync {
    fn apply_tonemap(&self, rgb: &RGBCoefficients) -> RGBCoefficients;

    /// Power-law encoding, `c^(1/gamma)` per channel. Negative channels map to 0.
    fn apply_gamma_correction(&self, rgb: &RGBCoefficients, gamma: f64) -> RGBCoefficients {
        rgb.map(|c| c.max(0.0).powf(1.0 / gamma))
    }

    fn apply_default_gamma_correction(&self, rgb: &RGBCoefficients) -> RGBCoefficients {
        self.apply_gamma_correction(rgb, DEFAULT_GAMMA)
    }
}

/// Clips every channel to `[0, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClampTonemapper;

impl Tonemapper for ClampTonemapper {
    fn apply_tonemap(&self, rgb: &RGBCoefficients) -> RGBCoefficients {
        rgb.map(|c| c.max(0.0).min(1.0))
    }
}

/// Reinhard's global operator `c / (1 + c)`, optionally with a white point
/// that maps to 1.
#[derive(Debug, Clone, Copy)]
pub struct ReinhardTonemapper {
    white: Option<f64>,
}

impl ReinhardTonemapper {
    pub fn new() -> Self {
        Self { white: None }
    }

    pub fn with_white_point(white: f64) -> Self {
        Self { white: Some(white) }
    }
}

impl Default for ReinhardTonemapper {
    fn default() -> Self {
        Self::new()
    }
}

impl Tonemapper for ReinhardTonemapper {
    fn apply_tonemap(&self, rgb: &RGBCoefficients) -> RGBCoefficients {
        let white_sq = self.white.map(|w| w * w);
        rgb.map(|c| {
            let c = c.max(0.0);
            match white_sq {
                Some(w2) if w2 > 0.0 => c * (1.0 + c / w2) / (1.0 + c),
                _ => c / (1.0 + c),
            }
        })
    }
}

/// Quantizes already encoded channels (for instance the output of
/// [`Tonemapper::apply_gamma_correction`]) to 8 bits, no further transfer curve.
pub fn quantize(rgb: &RGBCoefficients) -> image::Rgb<u8> {
    let to_u8 = |c: f64| (c * 255.0 + 0.5).max(0.0).min(255.0) as u8;
    image::Rgb([to_u8(rgb.r()), to_u8(rgb.g()), to_u8(rgb.b())])
}

/// Encodes *linear* RGB with the sRGB transfer curve and quantizes it. Do not
/// feed it gamma corrected values, use [`quantize`] for those.
pub fn to_image_rgb(rgb: &RGBCoefficients) -> image::Rgb<u8> {
    quantize(&rgb.map(gamma_correct))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_correction() {
        let tonemapper = ClampTonemapper;
        let rgb = RGBCoefficients::from_floats(0.0, 0.25, 1.0);
        let corrected = tonemapper.apply_default_gamma_correction(&rgb);
        approx::assert_relative_eq!(corrected.r(), 0.0);
        approx::assert_relative_eq!(corrected.g(), 0.25f64.powf(1.0 / 2.2));
        approx::assert_relative_eq!(corrected.b(), 1.0);

        let linear = tonemapper.apply_gamma_correction(&rgb, 1.0);
        assert_eq!(linear, rgb);

        let negative = tonemapper.apply_gamma_correction(&RGBCoefficients::new(-0.5), 2.2);
        assert!(negative.is_black());
    }

    #[test]
    fn test_clamp_tonemapper() {
        let out = ClampTonemapper.apply_tonemap(&RGBCoefficients::from_floats(-0.1, 0.5, 3.0));
        assert_eq!(out, RGBCoefficients::from_floats(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_reinhard_tonemapper() {
        let tonemapper = ReinhardTonemapper::new();
        let out = tonemapper.apply_tonemap(&RGBCoefficients::from_floats(0.0, 1.0, 1000.0));
        approx::assert_relative_eq!(out.r(), 0.0);
        approx::assert_relative_eq!(out.g(), 0.5);
        assert!(out.b() < 1.0 && out.b() > 0.99);

        let white = ReinhardTonemapper::with_white_point(4.0);
        let out = white.apply_tonemap(&RGBCoefficients::new(4.0));
        approx::assert_relative_eq!(out.r(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_to_image_rgb() {
        assert_eq!(
            to_image_rgb(&RGBCoefficients::from_floats(0.0, 1.0, 2.0)),
            image::Rgb([0, 255, 255])
        );
        assert_eq!(to_image_rgb(&RGBCoefficients::new(-1.0)), image::Rgb([0, 0, 0]));
        // sRGB encodes mid gray 0.5 to 188
        assert_eq!(to_image_rgb(&RGBCoefficients::new(0.5)), image::Rgb([188, 188, 188]));
    }

    #[test]
    fn test_gamma_corrected_colors_are_encoded_once() {
        let tonemapper = ClampTonemapper;
        let gray = RGBCoefficients::new(0.5);
        let corrected = tonemapper.apply_default_gamma_correction(&tonemapper.apply_tonemap(&gray));

        // 0.5^(1/2.2) = 0.7297
        assert_eq!(quantize(&corrected), image::Rgb([186, 186, 186]));
        assert_eq!(quantize(&gray), image::Rgb([128, 128, 128]));
        assert_ne!(quantize(&corrected), to_image_rgb(&corrected));
        assert_eq!(
            quantize(&RGBCoefficients::from_floats(-0.5, 0.0, 1.5)),
            image::Rgb([0, 0, 255])
        );
    }
}
