#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points c on the complex plane for
//! which repeatedly squaring z and adding c, starting from z = 0,
//! never sends z off to infinity.  The escape-time picture shades
//! every point by how many iterations it took to leave a circle of
//! radius 2; points that never leave are painted white.
//!
//! Every pixel is independent of every other, so the work splits
//! cleanly: the columns of the image are divided into one contiguous
//! segment per worker, each worker owns the matching slice of the
//! output raster, and the render returns once every worker is done.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

#[cfg(test)]
extern crate tempfile;

pub mod config;
pub mod errors;
pub mod escape;
pub mod output;
pub mod partition;
pub mod planes;
pub mod raster;
pub mod render;

pub use config::RenderConfig;
pub use errors::{MandelbrotError, Result};
pub use escape::{escape_iterations, intensity};
pub use output::write_image;
pub use partition::{partition, Segment};
pub use planes::{Pixel, PlaneWindow, Resolution};
pub use raster::{PixelSink, Raster};
pub use render::{render, run_segment, Renderer};
