#[macro_use]
extern crate slog;

use anyhow::Context;
use clap::clap_app;
use slog::Drain;
use spectre_rs::common::{film, ClampTonemapper, RGBCoefficients, Tonemapper};
use spectre_rs::spectrum::{
    bin_center, ReflectantUpsampler, SampledSpectrum, SpectralSampleSet, SpectrumType,
    StandardCurveTable, NUM_SPECTRAL_SAMPLES,
};

fn channel_arg_legal(val: String) -> Result<(), String> {
    match val.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(()),
        Ok(_) => Err(String::from("channel must be finite")),
        Err(_) => Err(String::from("could not parse channel")),
    }
}

fn new_drain(level: slog::Level) -> slog::Fuse<slog::LevelFilter<slog::Fuse<slog_async::Async>>> {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    drain.filter_level(level).fuse()
}

fn print_spectrum(name: &str, s: &SampledSpectrum) {
    println!("{}:", name);
    for i in 0..NUM_SPECTRAL_SAMPLES {
        println!("  {:7.2}nm {:.6}", bin_center::<NUM_SPECTRAL_SAMPLES>(i), s[i]);
    }
}

fn main() -> anyhow::Result<()> {
    let info_drain = new_drain(slog::Level::Info);
    let drain = slog_atomic::AtomicSwitch::new(info_drain);
    let ctrl = drain.ctrl();
    let log = slog::Logger::root(drain.fuse(), o!());

    let matches = clap_app!(spectre_rs =>
        (version: "0.1")
        (about: "Upsamples an RGB triple into a sampled spectrum and converts it back")
        (@arg R: +required validator(channel_arg_legal) "Red channel (linear)")
        (@arg G: +required validator(channel_arg_legal) "Green channel (linear)")
        (@arg B: +required validator(channel_arg_legal) "Blue channel (linear)")
        (@arg illuminant: -i --illuminant "Treat the color as emitted light rather than a reflectance")
        (@arg samples: -s --samples +takes_value "Also resample a measured curve given as \"nm:value, nm:value, ...\"")
        (@arg verbose: -v --verbose "Print trace information")
    )
    .get_matches();

    if matches.is_present("verbose") {
        ctrl.set(new_drain(slog::Level::Trace));
    }

    let channel = |name: &str| -> anyhow::Result<f64> {
        matches
            .value_of(name)
            .context("missing channel")?
            .parse::<f64>()
            .with_context(|| format!("could not parse channel {}", name))
    };
    let rgb = RGBCoefficients::from_floats(channel("R")?, channel("G")?, channel("B")?);
    let kind = if matches.is_present("illuminant") {
        SpectrumType::Illuminant
    } else {
        SpectrumType::Reflectance
    };

    let table = StandardCurveTable::new(&log)?;
    let upsampler = ReflectantUpsampler::new(&table);
    let converter = upsampler.converter();

    let spectrum = upsampler.upsample(&rgb, kind);
    if spectrum.has_nans() {
        warn!(log, "upsampled spectrum contains NaN"; "rgb" => ?rgb.to_array());
    }
    print_spectrum(&format!("{:?} spectrum", kind), &spectrum);

    let xyz = converter.to_xyz(&spectrum);
    let round_trip = converter.to_rgb(&spectrum);
    if round_trip.has_nan() {
        warn!(log, "round trip color contains NaN"; "xyz" => ?xyz.to_array());
    }
    info!(log, "round trip"; "input" => ?rgb.to_array(), "xyz" => ?xyz.to_array(), "rgb" => ?round_trip.to_array());
    debug!(log, "round trip error"; "distance" => round_trip.distance(&rgb));

    let display = ClampTonemapper.apply_tonemap(&round_trip);
    let pixel = film::to_image_rgb(&display);
    println!("display pixel: {:?}", pixel.0);

    if let Some(samples) = matches.value_of("samples") {
        let samples: SpectralSampleSet = samples
            .parse()
            .context("could not parse --samples")?;
        let measured = SampledSpectrum::from_sorted_samples(&samples)
            .context("could not resample --samples")?;
        print_spectrum("measured spectrum", &measured);
        info!(log, "measured spectrum"; "samples" => samples.len(), "rgb" => ?converter.to_rgb(&measured).to_array());
    }

    Ok(())
}
