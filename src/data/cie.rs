//! CIE 1931 2 degree standard observer, tabulated every 5nm from 360nm to 830nm,
//! and the CIE D65 standard illuminant, tabulated every 10nm from 300nm to 830nm.

pub const CIE_SAMPLES: usize = 95;

pub const CIE_LAMBDA: [f64; CIE_SAMPLES] = [
    360.0, 365.0, 370.0, 375.0, 380.0, 385.0,
    390.0, 395.0, 400.0, 405.0, 410.0, 415.0,
    420.0, 425.0, 430.0, 435.0, 440.0, 445.0,
    450.0, 455.0, 460.0, 465.0, 470.0, 475.0,
    480.0, 485.0, 490.0, 495.0, 500.0, 505.0,
    510.0, 515.0, 520.0, 525.0, 530.0, 535.0,
    540.0, 545.0, 550.0, 555.0, 560.0, 565.0,
    570.0, 575.0, 580.0, 585.0, 590.0, 595.0,
    600.0, 605.0, 610.0, 615.0, 620.0, 625.0,
    630.0, 635.0, 640.0, 645.0, 650.0, 655.0,
    660.0, 665.0, 670.0, 675.0, 680.0, 685.0,
    690.0, 695.0, 700.0, 705.0, 710.0, 715.0,
    720.0, 725.0, 730.0, 735.0, 740.0, 745.0,
    750.0, 755.0, 760.0, 765.0, 770.0, 775.0,
    780.0, 785.0, 790.0, 795.0, 800.0, 805.0,
    810.0, 815.0, 820.0, 825.0, 830.0,
];

pub const CIE_X: [f64; CIE_SAMPLES] = [
    0.0001299, 0.0002321, 0.0004149, 0.0007416, 0.001368, 0.002236,
    0.004243, 0.00765, 0.01431, 0.02319, 0.04351, 0.07763,
    0.13438, 0.21477, 0.2839, 0.3285, 0.34828, 0.34806,
    0.3362, 0.3187, 0.2908, 0.2511, 0.19536, 0.1421,
    0.09564, 0.05801, 0.03201, 0.0147, 0.0049, 0.0024,
    0.0093, 0.0291, 0.06327, 0.1096, 0.1655, 0.22575,
    0.2904, 0.3597, 0.43345, 0.51205, 0.5945, 0.6784,
    0.7621, 0.8425, 0.9163, 0.9786, 1.0263, 1.0567,
    1.0622, 1.0456, 1.0026, 0.9384, 0.85445, 0.7514,
    0.6424, 0.5419, 0.4479, 0.3608, 0.2835, 0.2187,
    0.1649, 0.1212, 0.0874, 0.0636, 0.04677, 0.0329,
    0.0227, 0.01584, 0.011359, 0.008111, 0.00579, 0.004109,
    0.002899, 0.002049, 0.00144, 0.001, 0.00069, 0.000476,
    0.000332, 0.000235, 0.000166, 0.000117, 8.3e-05, 5.9e-05,
    4.2e-05, 2.931e-05, 2.066e-05, 1.455e-05, 1.025e-05, 7.226e-06,
    5.093e-06, 3.597e-06, 2.546e-06, 1.798e-06, 1.251e-06,
];

pub const CIE_Y: [f64; CIE_SAMPLES] = [
    3.917e-06, 6.965e-06, 1.239e-05, 2.202e-05, 3.9e-05, 6.4e-05,
    0.00012, 0.000217, 0.000396, 0.00064, 0.00121, 0.00218,
    0.004, 0.0073, 0.0116, 0.01684, 0.023, 0.0298,
    0.038, 0.048, 0.06, 0.0739, 0.09098, 0.1126,
    0.13902, 0.1693, 0.20802, 0.2586, 0.323, 0.4073,
    0.503, 0.6082, 0.71, 0.7932, 0.862, 0.91485,
    0.954, 0.9803, 0.99495, 1.0, 0.995, 0.9786,
    0.952, 0.9154, 0.87, 0.8163, 0.757, 0.6949,
    0.631, 0.5668, 0.503, 0.4412, 0.381, 0.321,
    0.265, 0.217, 0.175, 0.1382, 0.107, 0.0816,
    0.061, 0.04458, 0.032, 0.0232, 0.017, 0.01192,
    0.00821, 0.005723, 0.004102, 0.002929, 0.002091, 0.001484,
    0.001047, 0.00074, 0.00052, 0.000361, 0.000249, 0.000172,
    0.00012, 8.5e-05, 6e-05, 4.2e-05, 3e-05, 2.1e-05,
    1.5e-05, 1.058e-05, 7.465e-06, 5.257e-06, 3.702e-06, 2.607e-06,
    1.836e-06, 1.298e-06, 9.188e-07, 6.49e-07, 4.517e-07,
];

pub const CIE_Z: [f64; CIE_SAMPLES] = [
    0.0006061, 0.001086, 0.001946, 0.003486, 0.00645, 0.01055,
    0.02005, 0.03621, 0.06785, 0.1102, 0.2074, 0.3713,
    0.6456, 1.03905, 1.3856, 1.62296, 1.74706, 1.7826,
    1.77211, 1.7441, 1.6692, 1.5281, 1.28764, 1.0419,
    0.81295, 0.6162, 0.46518, 0.3533, 0.272, 0.2123,
    0.1582, 0.1117, 0.07825, 0.05725, 0.04216, 0.02984,
    0.0203, 0.0134, 0.00875, 0.00575, 0.0039, 0.00275,
    0.0021, 0.0018, 0.00165, 0.0014, 0.0011, 0.001,
    0.0008, 0.0006, 0.00034, 0.00024, 0.00019, 0.0001,
    5e-05, 3e-05, 2e-05, 1e-05, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0,
];

pub const CIE_D65_SAMPLES: usize = 54;

pub const CIE_D65_LAMBDA: [f64; CIE_D65_SAMPLES] = [
    300.0, 310.0, 320.0, 330.0, 340.0, 350.0,
    360.0, 370.0, 380.0, 390.0, 400.0, 410.0,
    420.0, 430.0, 440.0, 450.0, 460.0, 470.0,
    480.0, 490.0, 500.0, 510.0, 520.0, 530.0,
    540.0, 550.0, 560.0, 570.0, 580.0, 590.0,
    600.0, 610.0, 620.0, 630.0, 640.0, 650.0,
    660.0, 670.0, 680.0, 690.0, 700.0, 710.0,
    720.0, 730.0, 740.0, 750.0, 760.0, 770.0,
    780.0, 790.0, 800.0, 810.0, 820.0, 830.0,
];

/// Relative spectral power, normalized to 100 at 560nm.
pub const CIE_D65: [f64; CIE_D65_SAMPLES] = [
    0.0341, 3.2945, 20.236, 37.0535, 39.9488, 44.9117,
    46.6383, 52.0891, 49.9755, 54.6482, 82.7549, 91.486,
    93.4318, 86.6823, 104.865, 117.008, 117.812, 114.861,
    115.923, 108.811, 109.354, 107.802, 104.79, 107.689,
    104.405, 104.046, 100.0, 96.3342, 95.788, 88.6856,
    90.0062, 89.5991, 87.6987, 83.2886, 83.6992, 80.0268,
    80.2146, 82.2778, 78.2842, 69.7213, 71.6091, 74.349,
    61.604, 69.8856, 75.087, 63.5927, 46.4182, 66.8054,
    63.3828, 64.304, 59.4519, 51.959, 57.4406, 60.3125,
];
