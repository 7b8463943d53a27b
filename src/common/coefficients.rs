use std::ops::{Add, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub};

/// Three color components in some linear color space (RGB or CIE XYZ).
///
/// No range invariant is enforced: negative and greater than one components
/// are legal here and left to gamut mapping / tonemapping downstream.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Coefficients(pub na::Vector3<f64>);

pub type RGBCoefficients = Coefficients;
pub type XYZCoefficients = Coefficients;

impl Coefficients {
    pub fn new(c: f64) -> Self {
        Self(na::Vector3::new(c, c, c))
    }

    pub fn from_floats(c0: f64, c1: f64, c2: f64) -> Self {
        Self(na::Vector3::new(c0, c1, c2))
    }

    pub fn r(&self) -> f64 {
        self.0[0]
    }
    pub fn g(&self) -> f64 {
        self.0[1]
    }
    pub fn b(&self) -> f64 {
        self.0[2]
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }
    pub fn y(&self) -> f64 {
        self.0[1]
    }
    pub fn z(&self) -> f64 {
        self.0[2]
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    pub fn is_black(&self) -> bool {
        self.0.iter().all(|&c| c == 0.0)
    }

    pub fn has_nan(&self) -> bool {
        self.0.iter().any(|c| c.is_nan())
    }

    pub fn max_component_value(&self) -> f64 {
        self.0[0].max(self.0[1]).max(self.0[2])
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (self.0 - other.0).norm()
    }

    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self(self.0.map(f))
    }
}

impl From<[f64; 3]> for Coefficients {
    fn from(c: [f64; 3]) -> Self {
        Self::from_floats(c[0], c[1], c[2])
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Index<usize> for Coefficients {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for Coefficients {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl Add for Coefficients {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Coefficients {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Coefficients {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Mul<Coefficients> for f64 {
    type Output = Coefficients;

    fn mul(self, rhs: Coefficients) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<f64> for Coefficients {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs
    }
}

impl Div<f64> for Coefficients {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl DivAssign<f64> for Coefficients {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs
    }
}

/// Linear map between CIE XYZ and a working RGB space.
///
/// Only the XYZ to RGB matrix is given; the reverse direction is its computed
/// inverse so both directions stay consistent to machine precision.
#[derive(Clone, Debug)]
pub struct ColorSpace {
    xyz_to_rgb: na::Matrix3<f64>,
    rgb_to_xyz: na::Matrix3<f64>,
}

lazy_static::lazy_static! {
    // linear sRGB / Rec. 709 primaries, D65 white
    static ref SRGB_XYZ_TO_RGB: na::Matrix3<f64> = na::Matrix3::new(
        3.240479, -1.537150, -0.498535,
        -0.969256, 1.875991, 0.041556,
        0.055648, -0.204043, 1.057311,
    );
}

impl ColorSpace {
    pub fn new(xyz_to_rgb: na::Matrix3<f64>) -> anyhow::Result<Self> {
        let rgb_to_xyz = xyz_to_rgb
            .try_inverse()
            .ok_or_else(|| anyhow::anyhow!("XYZ to RGB matrix is singular: {}", xyz_to_rgb))?;

        Ok(Self {
            xyz_to_rgb,
            rgb_to_xyz,
        })
    }

    pub fn srgb() -> anyhow::Result<Self> {
        Self::new(*SRGB_XYZ_TO_RGB)
    }

    pub fn xyz_to_rgb(&self, xyz: &XYZCoefficients) -> RGBCoefficients {
        Coefficients(self.xyz_to_rgb * xyz.0)
    }

    pub fn rgb_to_xyz(&self, rgb: &RGBCoefficients) -> XYZCoefficients {
        Coefficients(self.rgb_to_xyz * rgb.0)
    }
}
