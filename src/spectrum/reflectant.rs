use super::{
    sampled::SampledSpectrumConverter,
    tables::{Basis, SpectrumType, StandardCurveTable},
    SampledSpectrum,
};
use crate::common::coefficients::{RGBCoefficients, XYZCoefficients};

// two-channel basis made of the channels other than the smallest one
const PAIR_FOR_SMALLEST: [Basis; 3] = [Basis::Cyan, Basis::Magenta, Basis::Yellow];
const PRIMARY_FOR_LARGEST: [Basis; 3] = [Basis::Red, Basis::Green, Basis::Blue];

/// Ascending order of the three channels. Ties keep channel order.
fn ascending_channels(c: &[f64; 3]) -> [usize; 3] {
    let mut order = [0, 1, 2];
    order.sort_by(|&a, &b| c[a].total_cmp(&c[b]));
    order
}

/// Reconstructs smooth spectra from RGB triples by blending the basis spectra
/// of the curve table (Smits' method).
///
/// The smallest channel is carried by white, the gap up to the middle channel
/// by the two-channel basis complementary to the smallest channel, and the gap
/// up to the largest channel by that channel's primary. The result is then
/// scaled so its luminance matches the input, and negative bins clamped.
#[derive(Clone, Copy)]
pub struct ReflectantUpsampler<'a> {
    converter: SampledSpectrumConverter<'a>,
}

impl<'a> ReflectantUpsampler<'a> {
    pub fn new(table: &'a StandardCurveTable) -> Self {
        Self {
            converter: SampledSpectrumConverter::new(table),
        }
    }

    pub fn converter(&self) -> &SampledSpectrumConverter<'a> {
        &self.converter
    }

    pub fn upsample(&self, rgb: &RGBCoefficients, kind: SpectrumType) -> SampledSpectrum {
        let basis = self.converter.table().basis(kind);
        let c = rgb.to_array();
        let [smallest, middle, largest] = ascending_channels(&c);

        let mut result = SampledSpectrum::default();
        let mut blend = |b: Basis, weight: f64| {
            // equal channels leave a zero gap, which must add nothing at all
            if weight != 0.0 {
                result += basis[b] * weight;
            }
        };
        blend(Basis::White, c[smallest]);
        blend(PAIR_FOR_SMALLEST[smallest], c[middle] - c[smallest]);
        blend(PRIMARY_FOR_LARGEST[largest], c[largest] - c[middle]);

        let target = self.converter.rgb_to_xyz(rgb).y();
        let luminance = self.converter.y(&result);
        if luminance > 0.0 && target.is_finite() {
            result *= target / luminance;
        }

        result.clamp_zero();
        result
    }

    pub fn upsample_reflectance(&self, rgb: &RGBCoefficients) -> SampledSpectrum {
        self.upsample(rgb, SpectrumType::Reflectance)
    }

    pub fn from_xyz(&self, xyz: &XYZCoefficients, kind: SpectrumType) -> SampledSpectrum {
        self.upsample(&self.converter.xyz_to_rgb(xyz), kind)
    }
}
