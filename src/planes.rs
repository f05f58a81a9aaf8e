//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane with its lower-left corner at
//! (x_min, y_min).  Unlike a free-sized image, the integral plane here
//! is derived from the complex one: each pixel covers a fixed step of
//! the complex plane, and the resolution is however many steps fit.
use num::Complex;

use errors::{MandelbrotError, Result};

/// The visible rectangle of the complex plane, treating the real part
/// as the x-component and the imaginary part as the y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaneWindow {
    /// Left edge (smallest real part)
    pub x_min: f64,
    /// Right edge (largest real part)
    pub x_max: f64,
    /// Bottom edge (smallest imaginary part)
    pub y_min: f64,
    /// Top edge (largest imaginary part)
    pub y_max: f64,
}

impl PlaneWindow {
    /// Constructor.  Rejects windows whose corners are inverted or
    /// collapsed onto one another.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<PlaneWindow> {
        let finite = x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite();
        if !finite || x_max <= x_min || y_max <= y_min {
            return Err(MandelbrotError::InvalidWindow {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }
        Ok(PlaneWindow {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Builds a window from its left-lower and right-upper corners.
    pub fn from_corners(leftlower: Complex<f64>, rightupper: Complex<f64>) -> Result<PlaneWindow> {
        PlaneWindow::new(leftlower.re, rightupper.re, leftlower.im, rightupper.im)
    }

    /// Width of the window on the real axis.
    pub fn real_extent(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the window on the imaginary axis.
    pub fn imag_extent(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl Default for PlaneWindow {
    /// The classic full view of the set, [-2.25, 0.75] x [-1.5, 1.5].
    fn default() -> Self {
        PlaneWindow {
            x_min: -2.25,
            x_max: 0.75,
            y_min: -1.5,
            y_max: 1.5,
        }
    }
}

// Image encoders take their dimensions as u32.
const MAX_SIDE: f64 = ::std::u32::MAX as f64;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution(pub usize, pub usize);

impl Resolution {
    /// How many whole pixel steps fit across and up the window.
    /// Partial steps at the far edges are dropped.  Fails if either
    /// side is empty, wider than an encoder can describe, or if the
    /// RGBA export of the whole image would not fit in memory's
    /// address range.
    pub fn derive(window: &PlaneWindow, pixel_step: f64) -> Result<Resolution> {
        if !(pixel_step > 0.0) || !pixel_step.is_finite() {
            return Err(MandelbrotError::InvalidPixelStep(pixel_step));
        }
        let across = window.real_extent() / pixel_step;
        let up = window.imag_extent() / pixel_step;
        if !across.is_finite() || !up.is_finite() || across > MAX_SIDE || up > MAX_SIDE {
            return Err(MandelbrotError::ResolutionTooLarge(across, up));
        }
        let resolution = Resolution(across as usize, up as usize);
        if resolution.is_empty() {
            return Err(MandelbrotError::EmptyResolution(resolution.0, resolution.1));
        }
        match resolution.0.checked_mul(resolution.1).and_then(|n| n.checked_mul(4)) {
            Some(_) => Ok(resolution),
            None => Err(MandelbrotError::ResolutionTooLarge(across, up)),
        }
    }

    /// Pixel count; used to size the raster.  `derive` guarantees this
    /// cannot overflow.
    pub fn len(&self) -> usize {
        self.0 * self.1
    }

    /// True if either axis has no pixels.
    pub fn is_empty(&self) -> bool {
        self.0 == 0 || self.1 == 0
    }
}

/// Describes the x, y of a pixel on the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels on the integral plane onto the complex plane.  Read
/// only once built, so every worker may share one by reference.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The complex-plane rectangle being rendered.
    pub window: PlaneWindow,
    /// Distance on the complex plane between neighbouring pixels.
    pub pixel_step: f64,
    /// The integral plane derived from the window and step.
    pub resolution: Resolution,
}

impl PlaneMapper {
    /// Constructor.  Fails if the step is not positive or the window is
    /// too small to hold a single pixel.
    pub fn new(window: PlaneWindow, pixel_step: f64) -> Result<PlaneMapper> {
        let resolution = Resolution::derive(&window, pixel_step)?;
        Ok(PlaneMapper {
            window,
            pixel_step,
            resolution,
        })
    }
}

/// Given a pixel on the integral cartesian plane, return the point
/// on the complex plane at its lower-left corner.
#[inline]
pub fn pixel_to_point(window: &PlaneWindow, pixel_step: f64, pixel: &Pixel) -> Complex<f64> {
    Complex::new(
        (pixel.0 as f64) * pixel_step + window.x_min,
        (pixel.1 as f64) * pixel_step + window.y_min,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_fails_on_bad_shape() {
        assert!(PlaneWindow::new(1.0, -1.0, -1.0, 1.0).is_err());
        assert!(PlaneWindow::new(-1.0, 1.0, 1.0, -1.0).is_err());
        assert!(PlaneWindow::new(0.0, 0.0, -1.0, 1.0).is_err());
        assert!(PlaneWindow::new(-1.0, ::std::f64::NAN, -1.0, 1.0).is_err());
    }

    #[test]
    fn window_passes_on_good_shape() {
        let w = PlaneWindow::from_corners(Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0)).unwrap();
        assert_eq!(w.real_extent(), 2.0);
        assert_eq!(w.imag_extent(), 2.0);
    }

    #[test]
    fn resolution_counts_whole_steps() {
        let w = PlaneWindow::new(0.0, 1.0, 0.0, 0.5).unwrap();
        assert_eq!(Resolution::derive(&w, 0.25).unwrap(), Resolution(4, 2));
        // 0.3 fits into 1.0 three times; the leftover sliver is dropped.
        assert_eq!(Resolution::derive(&w, 0.3).unwrap(), Resolution(3, 1));
    }

    #[test]
    fn resolution_rejects_bad_steps() {
        let w = PlaneWindow::default();
        match Resolution::derive(&w, 0.0) {
            Err(MandelbrotError::InvalidPixelStep(_)) => (),
            other => panic!("unexpected {:?}", other),
        }
        assert!(Resolution::derive(&w, -0.1).is_err());
        assert!(Resolution::derive(&w, ::std::f64::NAN).is_err());
        match Resolution::derive(&w, 10.0) {
            Err(MandelbrotError::EmptyResolution(0, 0)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn resolution_rejects_sizes_that_cannot_be_allocated() {
        match Resolution::derive(&PlaneWindow::default(), 1e-12) {
            Err(MandelbrotError::ResolutionTooLarge(_, _)) => (),
            other => panic!("unexpected {:?}", other),
        }
        // Both corners are finite, but the extent overflows to infinity.
        let huge = PlaneWindow::new(-1e308, 1e308, -1.0, 1.0).unwrap();
        assert!(huge.real_extent().is_infinite());
        match Resolution::derive(&huge, 1.0) {
            Err(MandelbrotError::ResolutionTooLarge(_, _)) => (),
            other => panic!("unexpected {:?}", other),
        }
        // Each side fits a u32, but four bytes a pixel overflows a 32-bit
        // usize; 64-bit targets still accept it.
        let wide = PlaneWindow::new(0.0, 131_072.0, 0.0, 131_072.0).unwrap();
        let r = Resolution::derive(&wide, 1.0);
        if cfg!(target_pointer_width = "64") {
            assert_eq!(r.unwrap(), Resolution(131_072, 131_072));
        } else {
            assert!(r.is_err());
        }
    }

    #[test]
    fn pixel_to_point_starts_at_lower_left() {
        let pm = PlaneMapper::new(PlaneWindow::default(), 0.25).unwrap();
        assert_eq!(pm.resolution, Resolution(12, 12));
        let point = |x, y| pixel_to_point(&pm.window, pm.pixel_step, &Pixel(x, y));
        assert_eq!(point(0, 0), Complex::new(-2.25, -1.5));
        assert_eq!(point(9, 6), Complex::new(0.0, 0.0));
        assert_eq!(point(11, 11), Complex::new(0.5, 1.25));
    }

    #[test]
    fn pixel_to_point_on_positive_planes() {
        let pm = PlaneMapper::new(PlaneWindow::new(0.0, 5.0, 0.0, 5.0).unwrap(), 1.0).unwrap();
        let point = |x, y| pixel_to_point(&pm.window, pm.pixel_step, &Pixel(x, y));
        assert_eq!(point(0, 0), Complex::new(0.0, 0.0));
        assert_eq!(point(2, 2), Complex::new(2.0, 2.0));
        assert_eq!(point(4, 3), Complex::new(4.0, 3.0));
    }
}
