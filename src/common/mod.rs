pub mod coefficients;
pub mod film;
pub mod math;

pub use coefficients::{ColorSpace, Coefficients, RGBCoefficients, XYZCoefficients};
pub use film::{ClampTonemapper, ReinhardTonemapper, Tonemapper};
