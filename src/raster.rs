// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The output grid.  Samples are stored column-major, so the columns
//! of one segment are a single contiguous run of memory.  That lets
//! the renderer carve the buffer into one exclusive `&mut [u8]` per
//! worker and hand them out without locks.

use partition::Segment;
use planes::{Pixel, Resolution};

/// Anything a worker can write a grey level into.
pub trait PixelSink {
    /// Store `value` at `pixel`.  Each pixel is written at most once
    /// per render.
    fn set(&mut self, pixel: Pixel, value: u8);
}

/// A width x height grid of 8-bit intensity samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Raster {
    /// A zero-filled raster of the given resolution.
    pub fn new(resolution: Resolution) -> Raster {
        Raster {
            width: resolution.0,
            height: resolution.1,
            pixels: vec![0 as u8; resolution.len()],
        }
    }

    /// Columns in the raster.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows in the raster.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The sample at `pixel`, or None if it lies outside the raster.
    pub fn get(&self, pixel: Pixel) -> Option<u8> {
        if pixel.0 >= self.width || pixel.1 >= self.height {
            return None;
        }
        Some(self.pixels[pixel.0 * self.height + pixel.1])
    }

    /// The raw column-major samples.
    pub fn as_column_major(&self) -> &[u8] {
        &self.pixels
    }

    /// Splits the raster into one exclusive band per segment.  The
    /// segments must be ordered, contiguous, and cover `[0, width)`,
    /// which is exactly what `partition` produces.
    pub(crate) fn bands_mut(&mut self, segments: &[Segment]) -> Vec<ColumnBand> {
        let height = self.height;
        let mut rest: &mut [u8] = &mut self.pixels;
        let mut bands = Vec::with_capacity(segments.len());
        let mut next = 0;
        for segment in segments {
            assert_eq!(segment.start, next, "segments must be contiguous");
            let (head, tail) = { rest }.split_at_mut(segment.len() * height);
            bands.push(ColumnBand {
                segment: *segment,
                height,
                pixels: head,
            });
            rest = tail;
            next = segment.end;
        }
        assert!(rest.is_empty(), "segments must cover the whole raster");
        bands
    }

    /// Row-major 8-bit greyscale, the layout graymap encoders expect.
    pub fn to_gray(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len());
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.pixels[x * self.height + y]);
            }
        }
        out
    }

    /// Row-major RGBA, grey replicated across the colour channels at
    /// full opacity.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 * self.pixels.len());
        for y in 0..self.height {
            for x in 0..self.width {
                let v = self.pixels[x * self.height + y];
                out.extend_from_slice(&[v, v, v, 255]);
            }
        }
        out
    }
}

impl PixelSink for Raster {
    fn set(&mut self, pixel: Pixel, value: u8) {
        assert!(pixel.0 < self.width && pixel.1 < self.height);
        self.pixels[pixel.0 * self.height + pixel.1] = value;
    }
}

/// A worker's exclusive view of the columns in its segment.  Pixels
/// are addressed by their coordinates in the whole raster.
#[derive(Debug)]
pub struct ColumnBand<'a> {
    segment: Segment,
    height: usize,
    pixels: &'a mut [u8],
}

impl<'a> ColumnBand<'a> {
    /// The columns this band may write.
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// Rows in every column of the band.
    pub fn height(&self) -> usize {
        self.height
    }
}

impl<'a> PixelSink for ColumnBand<'a> {
    fn set(&mut self, pixel: Pixel, value: u8) {
        assert!(
            pixel.0 >= self.segment.start && pixel.0 < self.segment.end && pixel.1 < self.height,
            "pixel {:?} outside band {:?}",
            pixel,
            self.segment
        );
        self.pixels[(pixel.0 - self.segment.start) * self.height + pixel.1] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partition::partition;

    #[test]
    fn bands_write_through_to_raster() {
        let mut raster = Raster::new(Resolution(5, 2));
        {
            let segments = partition(5, 2);
            let mut bands = raster.bands_mut(&segments);
            assert_eq!(bands.len(), 2);
            bands[0].set(Pixel(1, 1), 7);
            bands[1].set(Pixel(4, 0), 9);
        }
        assert_eq!(raster.get(Pixel(1, 1)), Some(7));
        assert_eq!(raster.get(Pixel(4, 0)), Some(9));
        assert_eq!(raster.get(Pixel(0, 0)), Some(0));
        assert_eq!(raster.get(Pixel(5, 0)), None);
    }

    #[test]
    fn empty_segments_get_empty_bands() {
        let mut raster = Raster::new(Resolution(2, 3));
        let segments = partition(2, 4);
        let bands = raster.bands_mut(&segments);
        assert_eq!(bands.len(), 4);
        assert!(bands[..3].iter().all(|b| b.segment().is_empty()));
        assert_eq!(bands[3].segment(), Segment { start: 0, end: 2 });
    }

    #[test]
    #[should_panic]
    fn band_refuses_foreign_columns() {
        let mut raster = Raster::new(Resolution(4, 1));
        let segments = partition(4, 2);
        let mut bands = raster.bands_mut(&segments);
        bands[0].set(Pixel(3, 0), 1);
    }

    #[test]
    fn exports_are_row_major() {
        let mut raster = Raster::new(Resolution(3, 2));
        raster.set(Pixel(0, 0), 1);
        raster.set(Pixel(1, 0), 2);
        raster.set(Pixel(2, 0), 3);
        raster.set(Pixel(0, 1), 4);
        assert_eq!(raster.as_column_major(), &[1, 4, 2, 0, 3, 0]);
        assert_eq!(raster.to_gray(), vec![1, 2, 3, 4, 0, 0]);
        assert_eq!(&raster.to_rgba()[..8], &[1, 1, 1, 255, 2, 2, 2, 255]);
    }

    #[test]
    fn rgba_matches_gray_on_every_pixel() {
        let mut raster = Raster::new(Resolution(5, 3));
        for x in 0..5 {
            for y in 0..3 {
                raster.set(Pixel(x, y), (10 * x + y) as u8);
            }
        }
        let gray = raster.to_gray();
        let rgba = raster.to_rgba();
        assert_eq!(rgba.len(), 4 * gray.len());
        for (i, chunk) in rgba.chunks(4).enumerate() {
            assert_eq!(chunk, &[gray[i], gray[i], gray[i], 255]);
        }
        // Second row starts at (0, 1).
        assert_eq!(&rgba[20..24], &[1, 1, 1, 255]);
    }
}
