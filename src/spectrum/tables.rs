use super::SampledSpectrum;
use crate::common::coefficients::ColorSpace;
use crate::data::{cie::*, rgb_spectra::*};
use anyhow::Context;
use rayon::prelude::*;
use std::ops::Index;

/// How the light described by an RGB triple is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectrumType {
    Reflectance,
    Illuminant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basis {
    White,
    Cyan,
    Magenta,
    Yellow,
    Red,
    Green,
    Blue,
}

impl Basis {
    pub const ALL: [Basis; 7] = [
        Basis::White,
        Basis::Cyan,
        Basis::Magenta,
        Basis::Yellow,
        Basis::Red,
        Basis::Green,
        Basis::Blue,
    ];

    fn reflectance_data(self) -> &'static [f64; RGB_TO_SPECTRUM_SAMPLES] {
        match self {
            Basis::White => &RGB_REFLECTION_TO_SPECTRUM_WHITE,
            Basis::Cyan => &RGB_REFLECTION_TO_SPECTRUM_CYAN,
            Basis::Magenta => &RGB_REFLECTION_TO_SPECTRUM_MAGENTA,
            Basis::Yellow => &RGB_REFLECTION_TO_SPECTRUM_YELLOW,
            Basis::Red => &RGB_REFLECTION_TO_SPECTRUM_RED,
            Basis::Green => &RGB_REFLECTION_TO_SPECTRUM_GREEN,
            Basis::Blue => &RGB_REFLECTION_TO_SPECTRUM_BLUE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BasisSet {
    spectra: [SampledSpectrum; 7],
}

impl Index<Basis> for BasisSet {
    type Output = SampledSpectrum;

    fn index(&self, basis: Basis) -> &Self::Output {
        &self.spectra[basis as usize]
    }
}

fn resample(name: &str, lambda: &[f64], values: &[f64]) -> anyhow::Result<SampledSpectrum> {
    SampledSpectrum::from_sorted_raw_samples(lambda, values)
        .with_context(|| format!("could not resample the {} table", name))
}

/// Observer curves and upsampling basis spectra, resampled once into the
/// engine's bin layout.
///
/// Built by an explicit initialization step and read-only afterwards; share it
/// by reference (or `Arc`) across worker threads.
pub struct StandardCurveTable {
    x: SampledSpectrum,
    y: SampledSpectrum,
    z: SampledSpectrum,
    y_integral: f64,
    reflectance: BasisSet,
    illuminant: BasisSet,
    d65: SampledSpectrum,
    color_space: ColorSpace,
}

impl StandardCurveTable {
    pub fn new(log: &slog::Logger) -> anyhow::Result<Self> {
        Self::with_color_space(log, ColorSpace::srgb()?)
    }

    pub fn with_color_space(log: &slog::Logger, color_space: ColorSpace) -> anyhow::Result<Self> {
        let log = log.new(o!("module" => "spectrum"));
        debug!(
            log,
            "building standard curve table";
            "bins" => SampledSpectrum::SAMPLE_COUNT,
            "cie_samples" => CIE_SAMPLES
        );

        let x = resample("CIE X", &CIE_LAMBDA, &CIE_X)?;
        let y = resample("CIE Y", &CIE_LAMBDA, &CIE_Y)?;
        let z = resample("CIE Z", &CIE_LAMBDA, &CIE_Z)?;

        let y_integral = y.sum();
        anyhow::ensure!(
            y_integral > 0.0,
            "CIE Y integral must be positive, got {}",
            y_integral
        );
        trace!(log, "computed XYZ normalization"; "y_integral" => y_integral);

        let reflectance = Basis::ALL[..]
            .par_iter()
            .map(|basis| {
                resample(
                    &format!("{:?} reflectance", basis),
                    &RGB_TO_SPECTRUM_LAMBDA,
                    basis.reflectance_data(),
                )
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        // The emitted counterpart of a reflectance basis is that reflectance
        // lit by D65, the working space's white. D65 is scaled to unit luminance.
        let d65 = resample("CIE D65", &CIE_D65_LAMBDA, &CIE_D65)?;
        let d65_luminance = y.dot(&d65) / y_integral;
        anyhow::ensure!(
            d65_luminance > 0.0,
            "D65 luminance must be positive, got {}",
            d65_luminance
        );
        let d65 = d65 / d65_luminance;
        trace!(log, "normalized D65"; "luminance" => d65_luminance);

        let illuminant: Vec<_> = reflectance.iter().map(|r| *r * d65).collect();

        let to_set = |spectra: Vec<SampledSpectrum>| -> anyhow::Result<BasisSet> {
            let spectra: [SampledSpectrum; 7] = spectra
                .try_into()
                .map_err(|_| anyhow::anyhow!("expected one spectrum per basis"))?;
            Ok(BasisSet { spectra })
        };

        debug!(log, "standard curve table ready");

        Ok(Self {
            x,
            y,
            z,
            y_integral,
            reflectance: to_set(reflectance)?,
            illuminant: to_set(illuminant)?,
            d65,
            color_space,
        })
    }

    pub fn x(&self) -> &SampledSpectrum {
        &self.x
    }

    pub fn y(&self) -> &SampledSpectrum {
        &self.y
    }

    pub fn z(&self) -> &SampledSpectrum {
        &self.z
    }

    /// Sum of the binned Y curve, the XYZ normalization constant.
    pub fn y_integral(&self) -> f64 {
        self.y_integral
    }

    /// D65 spectral power distribution with unit luminance.
    pub fn d65(&self) -> &SampledSpectrum {
        &self.d65
    }

    pub fn basis(&self, kind: SpectrumType) -> &BasisSet {
        match kind {
            SpectrumType::Reflectance => &self.reflectance,
            SpectrumType::Illuminant => &self.illuminant,
        }
    }

    pub fn color_space(&self) -> &ColorSpace {
        &self.color_space
    }
}
