extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelbrot::config::{DEFAULT_PIXEL_STEP, DEFAULT_WORKERS};
use mandelbrot::escape::DEFAULT_MAX_ITERATIONS;
use mandelbrot::output::ImageFormat;
use mandelbrot::{write_image, PlaneWindow, RenderConfig, Renderer};
use num::Complex;
use std::path::Path;
use std::str::FromStr;

/// Reads a corner written as "re,im".
fn parse_complex(s: &str) -> Option<Complex<f64>> {
    let mut parts = s.splitn(2, ',');
    let re = parts.next()?.trim().parse().ok()?;
    let im = parts.next()?.trim().parse().ok()?;
    Some(Complex::new(re, im))
}

fn validate_complex(s: &str, err: &str) -> Result<(), String> {
    parse_complex(s).map(|_| ()).ok_or_else(|| err.to_string())
}

fn validate_positive<T: FromStr + PartialOrd + Default>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) if i > T::default() => Ok(()),
        _ => Err(err.to_string()),
    }
}

const OUTPUT: &str = "output";
const STEP: &str = "step";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";

fn args<'a>(threads: &'a str, iterations: &'a str, step: &'a str) -> ArgMatches<'a> {
    App::new("mandel")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Parallel Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (.png, .pgm or .pnm)"),
        )
        .arg(
            Arg::with_name(STEP)
                .required(false)
                .long(STEP)
                .short("s")
                .takes_value(true)
                .default_value(step)
                .validator(|s| validate_positive::<f64>(&s, "Pixel step must be a positive number"))
                .help("Distance between pixels on the complex plane"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.25,-1.5")
                .validator(|s| validate_complex(&s, "Could not parse left lower corner"))
                .help("Left lower corner of the mandelbrot space"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0.75,1.5")
                .validator(|s| validate_complex(&s, "Could not parse right upper corner"))
                .help("Right upper corner of the mandelbrot space"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value(threads)
                .validator(|s| validate_positive::<usize>(&s, "Thread count must be at least 1"))
                .help("Number of threads to use in solver"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value(iterations)
                .validator(|s| validate_positive::<usize>(&s, "Iteration count must be at least 1"))
                .help("Maximum number of iterations per point"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> mandelbrot::Result<()> {
    // The validators have already vetted every value below.
    let leftlower = parse_complex(matches.value_of(LEFTLOWER).unwrap())
        .expect("Error parsing left lower point");
    let rightupper = parse_complex(matches.value_of(RIGHTUPPER).unwrap())
        .expect("Error parsing right upper point");
    let step = f64::from_str(matches.value_of(STEP).unwrap()).expect("Could not parse pixel step.");
    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Could not parse thread count.");
    let iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration count.");
    let output = matches.value_of(OUTPUT).unwrap();

    let cores = num_cpus::get();
    if threads > cores {
        warn!("{} threads requested but only {} cores available", threads, cores);
    }

    // Check the output format before rendering.
    ImageFormat::from_path(Path::new(output))?;
    let window = PlaneWindow::from_corners(leftlower, rightupper)?;
    let config = RenderConfig::new(window, step, iterations, threads)?;
    let raster = Renderer::new(config).render()?;
    write_image(output, &raster)
}

fn main() {
    env_logger::init();
    let (threads, iterations, step) = (
        DEFAULT_WORKERS.to_string(),
        DEFAULT_MAX_ITERATIONS.to_string(),
        DEFAULT_PIXEL_STEP.to_string(),
    );
    let matches = args(&threads, &iterations, &step);
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
