use super::{
    error::MalformedInputError,
    fixed::FixedSpectrum,
    sample::{SpectralSample, SpectralSampleSet},
    tables::StandardCurveTable,
    SampledSpectrum, MAX_WAVELENGTH, MIN_WAVELENGTH,
};
use crate::common::{
    coefficients::{Coefficients, RGBCoefficients, XYZCoefficients},
    math::{find_interval, lerp},
};
use itertools::Itertools;
use rayon::prelude::*;

/// `[start, end)` wavelength range covered by bin `index` of an `N` bin spectrum.
pub fn wavelength_range<const N: usize>(index: usize) -> (f64, f64) {
    let start = lerp(index as f64 / N as f64, MIN_WAVELENGTH, MAX_WAVELENGTH);
    let end = lerp((index + 1) as f64 / N as f64, MIN_WAVELENGTH, MAX_WAVELENGTH);
    (start, end)
}

pub fn bin_center<const N: usize>(index: usize) -> f64 {
    let (start, end) = wavelength_range::<N>(index);
    0.5 * (start + end)
}

impl<const N: usize> FixedSpectrum<N> {
    /// Resample an empirical curve into `N` bins, each holding the average
    /// power of the piecewise-linear curve over the bin. Outside the curve's
    /// support the boundary sample's power is held constant.
    pub fn from_sorted_samples(samples: &SpectralSampleSet) -> Result<Self, MalformedInputError> {
        samples.validate()?;

        let samples = samples.samples();
        let mut spectrum = Self::default();
        for i in 0..N {
            let (start, end) = wavelength_range::<N>(i);
            spectrum[i] = average_in_range(samples, start, end);
        }

        Ok(spectrum)
    }

    pub fn from_sorted_raw_samples(
        lambda: &[f64],
        power: &[f64],
    ) -> Result<Self, MalformedInputError> {
        Self::from_sorted_samples(&SpectralSampleSet::from_raw(lambda, power)?)
    }
}

fn is_outside_left_boundary(samples: &[SpectralSample], right_bound: f64) -> bool {
    right_bound <= samples[0].wavelength
}

fn is_outside_right_boundary(samples: &[SpectralSample], left_bound: f64) -> bool {
    left_bound >= samples[samples.len() - 1].wavelength
}

// area of the constant extension past either end of the curve
fn boundary_area(samples: &[SpectralSample], left_bound: f64, right_bound: f64) -> f64 {
    let first = &samples[0];
    let last = &samples[samples.len() - 1];

    let mut area = 0.0;
    if left_bound < first.wavelength {
        area += first.power * (first.wavelength.min(right_bound) - left_bound);
    }
    if right_bound > last.wavelength {
        area += last.power * (right_bound - last.wavelength.max(left_bound));
    }

    area
}

fn segment_area(s1: &SpectralSample, s2: &SpectralSample, left_bound: f64, right_bound: f64) -> f64 {
    let start = s1.wavelength.max(left_bound);
    let end = s2.wavelength.min(right_bound);
    if end <= start {
        return 0.0;
    }

    let interp = |w: f64| {
        lerp(
            (w - s1.wavelength) / (s2.wavelength - s1.wavelength),
            s1.power,
            s2.power,
        )
    };

    0.5 * (interp(start) + interp(end)) * (end - start)
}

fn area_sum(samples: &[SpectralSample], left_bound: f64, right_bound: f64) -> f64 {
    let first = find_interval(samples.len(), |i| samples[i].wavelength <= left_bound);

    samples[first..]
        .iter()
        .tuple_windows()
        .take_while(|(s1, _)| s1.wavelength < right_bound)
        .map(|(s1, s2)| segment_area(s1, s2, left_bound, right_bound))
        .sum()
}

fn average_in_range(samples: &[SpectralSample], left_bound: f64, right_bound: f64) -> f64 {
    if is_outside_left_boundary(samples, right_bound) {
        return samples[0].power;
    }
    if is_outside_right_boundary(samples, left_bound) {
        return samples[samples.len() - 1].power;
    }
    if samples.len() == 1 {
        return samples[0].power;
    }

    let area = boundary_area(samples, left_bound, right_bound)
        + area_sum(samples, left_bound, right_bound);

    area / (right_bound - left_bound)
}

/// Projects sampled spectra onto the CIE observer and the working RGB space.
///
/// Cheap to copy, it only borrows the curve table.
#[derive(Clone, Copy)]
pub struct SampledSpectrumConverter<'a> {
    table: &'a StandardCurveTable,
}

impl<'a> SampledSpectrumConverter<'a> {
    pub fn new(table: &'a StandardCurveTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a StandardCurveTable {
        self.table
    }

    pub fn to_xyz(&self, s: &SampledSpectrum) -> XYZCoefficients {
        let norm = self.table.y_integral();
        Coefficients::from_floats(
            self.table.x().dot(s) / norm,
            self.table.y().dot(s) / norm,
            self.table.z().dot(s) / norm,
        )
    }

    /// Luminance, the Y component of [`to_xyz`](Self::to_xyz).
    pub fn y(&self, s: &SampledSpectrum) -> f64 {
        self.table.y().dot(s) / self.table.y_integral()
    }

    pub fn to_rgb(&self, s: &SampledSpectrum) -> RGBCoefficients {
        self.xyz_to_rgb(&self.to_xyz(s))
    }

    pub fn to_rgb_many(&self, spectra: &[SampledSpectrum]) -> Vec<RGBCoefficients> {
        spectra.par_iter().map(|s| self.to_rgb(s)).collect()
    }

    pub fn xyz_to_rgb(&self, xyz: &XYZCoefficients) -> RGBCoefficients {
        self.table.color_space().xyz_to_rgb(xyz)
    }

    pub fn rgb_to_xyz(&self, rgb: &RGBCoefficients) -> XYZCoefficients {
        self.table.color_space().rgb_to_xyz(rgb)
    }
}
