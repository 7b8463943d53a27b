use super::error::MalformedInputError;
use itertools::Itertools;
use std::iter::FromIterator;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SpectralSample {
    /// nanometers
    pub wavelength: f64,
    pub power: f64,
}

impl SpectralSample {
    pub fn new(wavelength: f64, power: f64) -> Self {
        Self { wavelength, power }
    }
}

/// Empirical spectral curve as a list of (wavelength, power) samples.
///
/// The set keeps the samples in the order they were given. Resampling requires
/// non-decreasing wavelengths and checks it through [`validate`], it never
/// reorders the data.
///
/// [`validate`]: SpectralSampleSet::validate
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SpectralSampleSet {
    samples: Vec<SpectralSample>,
}

impl SpectralSampleSet {
    pub fn new(samples: Vec<SpectralSample>) -> Self {
        Self { samples }
    }

    pub fn from_raw(lambda: &[f64], power: &[f64]) -> Result<Self, MalformedInputError> {
        if lambda.len() != power.len() {
            return Err(MalformedInputError::LengthMismatch {
                wavelengths: lambda.len(),
                powers: power.len(),
            });
        }

        Ok(itertools::zip_eq(lambda, power)
            .map(|(&wavelength, &power)| SpectralSample::new(wavelength, power))
            .collect())
    }

    pub fn samples(&self) -> &[SpectralSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        self.first_unsorted().is_none()
    }

    // NaN wavelengths never compare as ordered
    fn first_unsorted(&self) -> Option<usize> {
        self.samples
            .iter()
            .tuple_windows()
            .position(|(a, b)| !(a.wavelength <= b.wavelength))
            .map(|i| i + 1)
    }

    pub fn validate(&self) -> Result<(), MalformedInputError> {
        if self.samples.is_empty() {
            return Err(MalformedInputError::Empty);
        }

        match self.first_unsorted() {
            Some(index) => Err(MalformedInputError::Unsorted {
                index,
                previous: self.samples[index - 1].wavelength,
                wavelength: self.samples[index].wavelength,
            }),
            None => Ok(()),
        }
    }
}

impl FromIterator<SpectralSample> for SpectralSampleSet {
    fn from_iter<I: IntoIterator<Item = SpectralSample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<&[(f64, f64)]> for SpectralSampleSet {
    fn from(pairs: &[(f64, f64)]) -> Self {
        pairs
            .iter()
            .map(|&(wavelength, power)| SpectralSample::new(wavelength, power))
            .collect()
    }
}

/// Parses the `"400:0.12, 500:0.4, 600:0.9"` notation scene files use for
/// inline spectra. Pairs may be separated by commas and/or whitespace.
impl FromStr for SpectralSampleSet {
    type Err = MalformedInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let samples = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                let parse_error = || MalformedInputError::Parse {
                    token: token.to_string(),
                };
                let (wavelength, power) = token.split_once(':').ok_or_else(parse_error)?;
                Ok(SpectralSample::new(
                    wavelength.trim().parse().map_err(|_| parse_error())?,
                    power.trim().parse().map_err(|_| parse_error())?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if samples.is_empty() {
            return Err(MalformedInputError::Empty);
        }

        Ok(Self::new(samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        let set = SpectralSampleSet::from_raw(&[400.0, 500.0], &[0.1, 0.2]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.samples()[1], SpectralSample::new(500.0, 0.2));

        assert_eq!(
            SpectralSampleSet::from_raw(&[400.0, 500.0], &[0.1]),
            Err(MalformedInputError::LengthMismatch {
                wavelengths: 2,
                powers: 1
            })
        );
    }

    #[test]
    fn test_validate_sorted() {
        let set = SpectralSampleSet::from(&[(400.0, 1.0), (400.0, 2.0), (410.0, 3.0)][..]);
        assert!(set.is_sorted());
        assert_eq!(set.validate(), Ok(()));
    }

    #[test]
    fn test_validate_unsorted_is_reported_not_fixed() {
        let pairs = [(400.0, 1.0), (450.0, 2.0), (420.0, 3.0)];
        let set = SpectralSampleSet::from(&pairs[..]);
        assert!(!set.is_sorted());
        assert_eq!(
            set.validate(),
            Err(MalformedInputError::Unsorted {
                index: 2,
                previous: 450.0,
                wavelength: 420.0
            })
        );
        assert_eq!(set.samples()[2], SpectralSample::new(420.0, 3.0));
    }

    #[test]
    fn test_validate_nan_wavelength() {
        let set = SpectralSampleSet::from(&[(400.0, 1.0), (f64::NAN, 2.0)][..]);
        assert!(matches!(
            set.validate(),
            Err(MalformedInputError::Unsorted { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(
            SpectralSampleSet::default().validate(),
            Err(MalformedInputError::Empty)
        );
    }

    #[test]
    fn test_parse() {
        let set: SpectralSampleSet = "400:0.5, 500:0.25,600:1 700:2".parse().unwrap();
        assert_eq!(
            set,
            SpectralSampleSet::from(
                &[(400.0, 0.5), (500.0, 0.25), (600.0, 1.0), (700.0, 2.0)][..]
            )
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "400:0.5, 500".parse::<SpectralSampleSet>(),
            Err(MalformedInputError::Parse {
                token: "500".to_string()
            })
        );
        assert_eq!(
            "400:abc".parse::<SpectralSampleSet>(),
            Err(MalformedInputError::Parse {
                token: "400:abc".to_string()
            })
        );
        assert_eq!(
            " , ".parse::<SpectralSampleSet>(),
            Err(MalformedInputError::Empty)
        );
    }
}
