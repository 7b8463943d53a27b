use thiserror::Error;

/// Tabulated spectral data that violates the resampler's contract.
///
/// These are upstream data bugs (a mistyped measurement table, a truncated
/// array) and are reported rather than corrected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedInputError {
    #[error("spectral sample set is empty")]
    Empty,
    #[error("sample {index} at {wavelength}nm is not ordered after the previous sample at {previous}nm")]
    Unsorted {
        index: usize,
        previous: f64,
        wavelength: f64,
    },
    #[error("{wavelengths} wavelengths were given for {powers} power values")]
    LengthMismatch { wavelengths: usize, powers: usize },
    #[error("could not parse spectral sample {token:?}")]
    Parse { token: String },
}
