// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The parallel escape-time renderer.
//!
//! The columns of the image are partitioned into one segment per
//! worker.  The raster is cut into matching column bands up front, so
//! each worker owns its band outright: no two workers can ever touch
//! the same pixel, and the borrow checker holds us to that.  Leaving
//! the crossbeam scope joins every worker, so the raster handed back
//! is always complete.

use std::time::Instant;

use crossbeam;
use itertools::iproduct;

use config::RenderConfig;
use errors::{MandelbrotError, Result};
use escape::{escape_iterations, intensity, DEFAULT_MAX_ITERATIONS};
use partition::{partition, Segment};
use planes::{pixel_to_point, Pixel, PlaneWindow};
use raster::{PixelSink, Raster};

/// Runs one worker's share of the image: every pixel in the
/// segment's columns, top to bottom, escape-tested and written as a
/// grey level.  An empty segment does nothing.
pub fn run_segment<S: PixelSink>(
    segment: Segment,
    height: usize,
    window: &PlaneWindow,
    pixel_step: f64,
    max_iterations: usize,
    raster: &mut S,
) {
    debug!("Worker starting on columns {}..{}", segment.start, segment.end);
    for (x, y) in iproduct!(segment.columns(), 0..height) {
        let pixel = Pixel(x, y);
        let c = pixel_to_point(window, pixel_step, &pixel);
        let escape = escape_iterations(c, max_iterations);
        raster.set(pixel, intensity(escape, max_iterations));
    }
    debug!("Worker on columns {}..{} finished", segment.start, segment.end);
}

/// Holds a validated configuration and renders it on demand.
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Wraps a configuration.  The configuration is already known to
    /// be good, so this cannot fail.
    pub fn new(config: RenderConfig) -> Renderer {
        Renderer { config }
    }

    /// Renders the whole window, one thread per segment, and blocks
    /// until every thread has finished.  If any worker panics the
    /// raster is discarded and `WorkerPanicked` is returned instead.
    pub fn render(&self) -> Result<Raster> {
        let started = Instant::now();
        let resolution = self.config.resolution();
        let window = self.config.window();
        let pixel_step = self.config.pixel_step();
        let max_iterations = self.config.max_iterations();

        let segments = partition(resolution.0, self.config.workers());
        info!(
            "Rendering {}x{} in {} segments, {} iterations",
            resolution.0,
            resolution.1,
            segments.len(),
            max_iterations
        );

        let mut raster = Raster::new(resolution);
        {
            let bands = raster.bands_mut(&segments);
            crossbeam::scope(|spawner| {
                for mut band in bands {
                    spawner.spawn(move |_| {
                        let (segment, height) = (band.segment(), band.height());
                        run_segment(segment, height, &window, pixel_step, max_iterations, &mut band);
                    });
                }
            })
            .map_err(|_| MandelbrotError::WorkerPanicked)?;
        }

        let elapsed = started.elapsed();
        info!(
            "Rendered {} pixels in {}.{:03}s",
            resolution.len(),
            elapsed.as_secs(),
            elapsed.subsec_millis()
        );
        Ok(raster)
    }
}

/// Renders `window` at `pixel_step` with `workers` threads and the
/// default iteration cap.  Fails before any work is scheduled if the
/// parameters are invalid.
pub fn render(window: PlaneWindow, pixel_step: f64, workers: usize) -> Result<Raster> {
    let config = RenderConfig::new(window, pixel_step, DEFAULT_MAX_ITERATIONS, workers)?;
    Renderer::new(config).render()
}
