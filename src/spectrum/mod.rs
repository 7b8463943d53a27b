//! Spectral power distributions sampled over the visible range, and the
//! conversions between them and tristimulus colors.

mod error;
mod fixed;
mod reflectant;
mod sample;
mod sampled;
mod tables;

pub use error::MalformedInputError;
pub use fixed::FixedSpectrum;
pub use reflectant::ReflectantUpsampler;
pub use sample::{SpectralSample, SpectralSampleSet};
pub use sampled::{bin_center, wavelength_range, SampledSpectrumConverter};
pub use tables::{Basis, BasisSet, SpectrumType, StandardCurveTable};

pub const NUM_SPECTRAL_SAMPLES: usize = 60;
pub const MIN_WAVELENGTH: f64 = 360.0;
pub const MAX_WAVELENGTH: f64 = 830.0;

// bins are processed in groups of four
const _: () = assert!(NUM_SPECTRAL_SAMPLES % 4 == 0);

pub type SampledSpectrum = FixedSpectrum<NUM_SPECTRAL_SAMPLES>;
