// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The parameters of a render, checked once and frozen.

use errors::{MandelbrotError, Result};
use escape::DEFAULT_MAX_ITERATIONS;
use planes::{PlaneMapper, PlaneWindow, Resolution};

/// Distance between neighbouring pixels on the complex plane.
pub const DEFAULT_PIXEL_STEP: f64 = 0.0001;

/// Number of workers the plane is split between.
pub const DEFAULT_WORKERS: usize = 8;

/// Everything a render needs to know.  A value of this type has
/// always passed validation, so the renderer never has to check it
/// again.
#[derive(Copy, Clone, Debug)]
pub struct RenderConfig {
    plane: PlaneMapper,
    max_iterations: usize,
    workers: usize,
}

impl RenderConfig {
    /// Validates the parameters.  Fails on an inverted window, a
    /// non-positive step, a window smaller than one pixel, or a zero
    /// worker or iteration count.
    pub fn new(
        window: PlaneWindow,
        pixel_step: f64,
        max_iterations: usize,
        workers: usize,
    ) -> Result<RenderConfig> {
        // Windows built by hand can skip PlaneWindow::new.
        let window = PlaneWindow::new(window.x_min, window.x_max, window.y_min, window.y_max)?;
        if workers == 0 {
            return Err(MandelbrotError::InvalidWorkerCount);
        }
        if max_iterations == 0 {
            return Err(MandelbrotError::InvalidIterationCount);
        }
        Ok(RenderConfig {
            plane: PlaneMapper::new(window, pixel_step)?,
            max_iterations,
            workers,
        })
    }

    /// The complex-plane rectangle.
    pub fn window(&self) -> PlaneWindow {
        self.plane.window
    }

    /// Distance between pixels.
    pub fn pixel_step(&self) -> f64 {
        self.plane.pixel_step
    }

    /// Image size derived from the window and step.
    pub fn resolution(&self) -> Resolution {
        self.plane.resolution
    }

    /// Iteration cap for the escape test.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Number of segments, and so of threads.
    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        let window = PlaneWindow::default();
        let resolution = Resolution(
            (window.real_extent() / DEFAULT_PIXEL_STEP) as usize,
            (window.imag_extent() / DEFAULT_PIXEL_STEP) as usize,
        );
        RenderConfig {
            plane: PlaneMapper {
                window,
                pixel_step: DEFAULT_PIXEL_STEP,
                resolution,
            },
            max_iterations: DEFAULT_MAX_ITERATIONS,
            workers: DEFAULT_WORKERS,
        }
    }
}
