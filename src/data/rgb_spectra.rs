//! Reflectance basis spectra for RGB to spectrum upsampling (Smits 1999,
//! "An RGB-to-Spectrum Conversion for Reflectances"). Ten equal bins over
//! 380nm..720nm, tabulated at the bin centers.

pub const RGB_TO_SPECTRUM_SAMPLES: usize = 10;

pub const RGB_TO_SPECTRUM_LAMBDA: [f64; RGB_TO_SPECTRUM_SAMPLES] = [
    397.0, 431.0, 465.0, 499.0, 533.0, 567.0, 601.0, 635.0, 669.0, 703.0,
];

pub const RGB_REFLECTION_TO_SPECTRUM_WHITE: [f64; RGB_TO_SPECTRUM_SAMPLES] = [
    1.0000, 1.0000, 0.9999, 0.9993, 0.9992, 0.9998, 1.0000, 1.0000, 1.0000, 1.0000,
];

pub const RGB_REFLECTION_TO_SPECTRUM_CYAN: [f64; RGB_TO_SPECTRUM_SAMPLES] = [
    0.9710, 0.9426, 1.0007, 1.0007, 1.0007, 1.0007, 0.1564, 0.0000, 0.0000, 0.0000,
];

pub const RGB_REFLECTION_TO_SPECTRUM_MAGENTA: [f64; RGB_TO_SPECTRUM_SAMPLES] = [
    1.0000, 1.0000, 0.9685, 0.2229, 0.0000, 0.0458, 0.8369, 1.0000, 1.0000, 0.9959,
];

pub const RGB_REFLECTION_TO_SPECTRUM_YELLOW: [f64; RGB_TO_SPECTRUM_SAMPLES] = [
    0.0001, 0.0000, 0.1088, 0.6651, 1.0000, 1.0000, 0.9996, 0.9586, 0.9685, 0.9840,
];

pub const RGB_REFLECTION_TO_SPECTRUM_RED: [f64; RGB_TO_SPECTRUM_SAMPLES] = [
    0.1012, 0.0515, 0.0000, 0.0000, 0.0000, 0.0000, 0.8325, 1.0149, 1.0149, 1.0149,
];

pub const RGB_REFLECTION_TO_SPECTRUM_GREEN: [f64; RGB_TO_SPECTRUM_SAMPLES] = [
    0.0000, 0.0000, 0.0273, 0.7937, 1.0000, 0.9418, 0.1719, 0.0000, 0.0000, 0.0025,
];

pub const RGB_REFLECTION_TO_SPECTRUM_BLUE: [f64; RGB_TO_SPECTRUM_SAMPLES] = [
    1.0000, 1.0000, 0.8916, 0.3323, 0.0000, 0.0000, 0.0003, 0.0369, 0.0483, 0.0496,
];
