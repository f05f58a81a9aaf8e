// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong, from configuration through to
//! writing the finished image.

use std::io;

/// The failures the renderer can report.  Every configuration
/// variant is raised before a raster is allocated or a thread is
/// spawned.
#[derive(Debug, Fail)]
pub enum MandelbrotError {
    /// The window's corners are inverted, degenerate, or not finite.
    #[fail(
        display = "Invalid plane window: ({}, {}) to ({}, {}) must have min < max on both axes",
        x_min, y_min, x_max, y_max
    )]
    InvalidWindow {
        /// Left edge
        x_min: f64,
        /// Right edge
        x_max: f64,
        /// Bottom edge
        y_min: f64,
        /// Top edge
        y_max: f64,
    },

    /// The distance between adjacent pixels must be a positive number.
    #[fail(display = "Pixel step must be positive, got {}", _0)]
    InvalidPixelStep(f64),

    /// The window is smaller than a single pixel on one of its axes.
    #[fail(display = "Resolution {}x{} has no pixels", _0, _1)]
    EmptyResolution(usize, usize),

    /// The window holds more pixels than can be addressed or encoded.
    #[fail(display = "Resolution {}x{} is too large to render", _0, _1)]
    ResolutionTooLarge(f64, f64),

    /// At least one worker is needed to render anything.
    #[fail(display = "Worker count must be at least 1")]
    InvalidWorkerCount,

    /// At least one iteration is needed to test a point.
    #[fail(display = "Iteration count must be at least 1")]
    InvalidIterationCount,

    /// A worker thread died before finishing its segment.
    #[fail(display = "A render worker panicked; no image was produced")]
    WorkerPanicked,

    /// The output file could not be created or written.
    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] io::Error),

    /// The output path names a format we do not know how to write.
    #[fail(display = "Unsupported output format: {}", _0)]
    UnsupportedFormat(String),
}

impl From<io::Error> for MandelbrotError {
    fn from(err: io::Error) -> Self {
        MandelbrotError::Io(err)
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = ::std::result::Result<T, MandelbrotError>;
