use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Power distribution discretized into `N` equal-width wavelength bins.
///
/// The algebra never fails: dividing by a zero bin or feeding NaN in simply
/// propagates through the floating point domain and is only observable
/// through [`FixedSpectrum::has_nans`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedSpectrum<const N: usize> {
    pub c: [f64; N],
}

impl<const N: usize> FixedSpectrum<N> {
    pub const SAMPLE_COUNT: usize = N;

    pub fn new(v: f64) -> Self {
        Self { c: [v; N] }
    }

    pub fn from_coefficients(c: [f64; N]) -> Self {
        Self { c }
    }

    pub fn is_black(&self) -> bool {
        self.c.iter().all(|&v| v == 0.0)
    }

    pub fn has_nans(&self) -> bool {
        self.c.iter().any(|v| v.is_nan())
    }

    /// Exact bin-wise comparison, no tolerance.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.c.iter().zip(other.c.iter()).all(|(a, b)| a == b)
    }

    pub fn clamp_zero(&mut self) {
        for v in &mut self.c {
            if *v < 0.0 {
                *v = 0.0;
            }
        }
    }

    pub fn max_component_value(&self) -> f64 {
        self.c.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn sum(&self) -> f64 {
        self.c.iter().sum()
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.c.iter().zip(other.c.iter()).map(|(a, b)| a * b).sum()
    }

    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        let mut result = *self;
        for v in &mut result.c {
            *v = f(*v);
        }
        result
    }

    pub fn zip_map<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> Self {
        let mut result = *self;
        for (v, o) in result.c.iter_mut().zip(other.c.iter()) {
            *v = f(*v, *o);
        }
        result
    }

    pub fn sqrt(s: &Self) -> Self {
        s.map(f64::sqrt)
    }

    pub fn pow(s: &Self, e: f64) -> Self {
        s.map(|v| v.powf(e))
    }

    pub fn lerp(s1: &Self, s2: &Self, t: f64) -> Self {
        *s1 * (1.0 - t) + *s2 * t
    }

    pub fn clamp(s: &Self, low: &Self, high: &Self) -> Self {
        let mut result = *s;
        for ((v, l), h) in result.c.iter_mut().zip(low.c.iter()).zip(high.c.iter()) {
            *v = if *v < *l {
                *l
            } else if *v > *h {
                *h
            } else {
                *v
            };
        }
        result
    }

    pub fn min(s1: &Self, s2: &Self) -> Self {
        s1.zip_map(s2, |a, b| if a < b { a } else { b })
    }

    pub fn max(s1: &Self, s2: &Self) -> Self {
        s1.zip_map(s2, |a, b| if a > b { a } else { b })
    }
}

impl<const N: usize> Default for FixedSpectrum<N> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<const N: usize> AddAssign for FixedSpectrum<N> {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.c.iter_mut().zip(rhs.c.iter()) {
            *lhs += rhs;
        }
    }
}

impl<const N: usize> Add for FixedSpectrum<N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<const N: usize> Add<f64> for FixedSpectrum<N> {
    type Output = Self;

    fn add(self, rhs: f64) -> Self::Output {
        self.map(|v| v + rhs)
    }
}

impl<const N: usize> SubAssign for FixedSpectrum<N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.c.iter_mut().zip(rhs.c.iter()) {
            *lhs -= rhs;
        }
    }
}

impl<const N: usize> Sub for FixedSpectrum<N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<const N: usize> MulAssign for FixedSpectrum<N> {
    fn mul_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.c.iter_mut().zip(rhs.c.iter()) {
            *lhs *= rhs;
        }
    }
}

impl<const N: usize> Mul for FixedSpectrum<N> {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<const N: usize> MulAssign<f64> for FixedSpectrum<N> {
    fn mul_assign(&mut self, rhs: f64) {
        for lhs in &mut self.c {
            *lhs *= rhs;
        }
    }
}

impl<const N: usize> Mul<f64> for FixedSpectrum<N> {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<const N: usize> Mul<FixedSpectrum<N>> for f64 {
    type Output = FixedSpectrum<N>;

    fn mul(self, rhs: FixedSpectrum<N>) -> Self::Output {
        rhs * self
    }
}

impl<const N: usize> DivAssign for FixedSpectrum<N> {
    fn div_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.c.iter_mut().zip(rhs.c.iter()) {
            *lhs /= rhs;
        }
    }
}

impl<const N: usize> Div for FixedSpectrum<N> {
    type Output = Self;

    fn div(mut self, rhs: Self) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<const N: usize> DivAssign<f64> for FixedSpectrum<N> {
    fn div_assign(&mut self, rhs: f64) {
        for lhs in &mut self.c {
            *lhs /= rhs;
        }
    }
}

impl<const N: usize> Div<f64> for FixedSpectrum<N> {
    type Output = Self;

    fn div(mut self, rhs: f64) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<const N: usize> Neg for FixedSpectrum<N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl<const N: usize> Index<usize> for FixedSpectrum<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.c[index]
    }
}

impl<const N: usize> IndexMut<usize> for FixedSpectrum<N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.c[index]
    }
}

impl<const N: usize> num::Zero for FixedSpectrum<N> {
    fn zero() -> Self {
        Self::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.is_black()
    }
}

impl<const N: usize> num::One for FixedSpectrum<N> {
    fn one() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::SampledSpectrum;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    type Spectrum = FixedSpectrum<8>;

    fn random_spectrum<const N: usize>(rng: &mut SmallRng) -> FixedSpectrum<N> {
        // integer valued bins keep the algebra exact
        let mut s = FixedSpectrum::<N>::default();
        for v in &mut s.c {
            *v = rng.gen_range(-1000, 1000) as f64;
        }
        s
    }

    #[test]
    fn test_add_sub_cancel() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for _ in 0..100 {
            let a: Spectrum = random_spectrum(&mut rng);
            let b = random_spectrum(&mut rng);
            assert_eq!(a + b - b, a);

            let mut c = a;
            c += b;
            c -= b;
            assert!(c.is_equal(&a));
        }
    }

    #[test]
    fn test_algebra_at_full_resolution() {
        let mut rng = SmallRng::seed_from_u64(60);
        for _ in 0..100 {
            let a: SampledSpectrum = random_spectrum(&mut rng);
            let b: SampledSpectrum = random_spectrum(&mut rng);
            assert_eq!(a + b - b, a);
            assert_eq!(a * SampledSpectrum::new(1.0), a);

            let mut clamped = a;
            clamped.clamp_zero();
            assert!(clamped.c.iter().all(|&v| v >= 0.0));
            let once = clamped;
            clamped.clamp_zero();
            assert_eq!(clamped, once);
        }
    }

    #[test]
    fn test_mul_identity() {
        let mut rng = SmallRng::seed_from_u64(17);
        let a: Spectrum = random_spectrum(&mut rng);
        assert_eq!(a * Spectrum::new(1.0), a);
        assert_eq!(a * <Spectrum as num::One>::one(), a);
        assert_eq!(a / Spectrum::new(1.0), a);
    }

    #[test]
    fn test_elementwise_ops() {
        let a = Spectrum::from_coefficients([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let b = Spectrum::new(2.0);

        assert_eq!((a * b)[3], 8.0);
        assert_eq!((a / b)[3], 2.0);
        assert_eq!((a - b)[0], -1.0);
        assert_eq!((a + 0.5)[7], 8.5);
        assert_eq!((2.0 * a)[1], 4.0);
        assert_eq!((-a)[2], -3.0);
        assert_eq!(a.sum(), 36.0);
        assert_eq!(a.dot(&b), 72.0);
        assert_eq!(a.max_component_value(), 8.0);

        let mut c = a;
        c *= b;
        c /= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_is_black() {
        assert!(Spectrum::new(0.0).is_black());
        assert!(Spectrum::default().is_black());
        assert!(num::Zero::is_zero(&Spectrum::default()));

        let mut s = Spectrum::new(0.0);
        s[5] = 1e-300;
        assert!(!s.is_black());
        s[5] = -0.0;
        assert!(s.is_black());
    }

    #[test]
    fn test_has_nans() {
        let zero = Spectrum::new(0.0);
        assert!(!zero.has_nans());
        assert!((zero / zero).has_nans());

        let mut s = Spectrum::new(1.0);
        s[2] = f64::NAN;
        assert!(s.has_nans());
        assert!(s != s);
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Spectrum::new(0.3);
        let mut b = a;
        assert!(a == b);
        b[0] += 1e-16;
        assert!(a != b);
        assert!(!a.is_equal(&b));
    }

    #[test]
    fn test_clamp_zero() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut s: Spectrum = random_spectrum(&mut rng);
        s.clamp_zero();
        assert!(s.c.iter().all(|&v| v >= 0.0));

        let once = s;
        s.clamp_zero();
        assert_eq!(s, once);

        let mut t = Spectrum::from_coefficients([-1.0, 2.0, -3.0, 4.0, 0.0, -0.5, 0.5, 9.0]);
        t.clamp_zero();
        assert_eq!(t.c, [0.0, 2.0, 0.0, 4.0, 0.0, 0.0, 0.5, 9.0]);
    }

    #[test]
    fn test_sqrt_pow() {
        let s = Spectrum::new(16.0);
        assert_eq!(Spectrum::sqrt(&s), Spectrum::new(4.0));
        assert_eq!(Spectrum::pow(&s, 0.5), Spectrum::new(4.0));
        assert_eq!(Spectrum::pow(&Spectrum::new(2.0), 3.0), Spectrum::new(8.0));
        assert!(Spectrum::sqrt(&Spectrum::new(-1.0)).has_nans());
    }

    #[test]
    fn test_lerp_extrapolates() {
        let a = Spectrum::new(1.0);
        let b = Spectrum::new(3.0);
        assert_eq!(Spectrum::lerp(&a, &b, 0.0), a);
        assert_eq!(Spectrum::lerp(&a, &b, 1.0), b);
        assert_eq!(Spectrum::lerp(&a, &b, 0.5), Spectrum::new(2.0));
        assert_eq!(Spectrum::lerp(&a, &b, 2.0), Spectrum::new(5.0));
        assert_eq!(Spectrum::lerp(&a, &b, -1.0), Spectrum::new(-1.0));
    }

    #[test]
    fn test_clamp_min_max() {
        let s = Spectrum::from_coefficients([-2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        let low = Spectrum::new(0.0);
        let high = Spectrum::from_coefficients([1.0, 1.0, 1.0, 1.0, 1.0, 10.0, 10.0, 4.5]);

        let clamped = Spectrum::clamp(&s, &low, &high);
        assert_eq!(clamped.c, [0.0, 0.0, 0.0, 1.0, 1.0, 3.0, 4.0, 4.5]);

        let m = Spectrum::new(1.5);
        assert_eq!(
            Spectrum::min(&s, &m).c,
            [-2.0, -1.0, 0.0, 1.0, 1.5, 1.5, 1.5, 1.5]
        );
        assert_eq!(
            Spectrum::max(&s, &m).c,
            [1.5, 1.5, 1.5, 1.5, 2.0, 3.0, 4.0, 5.0]
        );
    }
}
