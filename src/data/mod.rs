//! Literal empirical tables, kept apart from the logic that resamples them.

pub mod cie;
pub mod rgb_spectra;
