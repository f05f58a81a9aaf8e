// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Splits the columns of the integral plane among the workers.

use std::ops::Range;

/// A half-open range of pixel columns, `[start, end)`, owned by
/// exactly one worker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// First column in the segment.
    pub start: usize,
    /// One past the last column in the segment.
    pub end: usize,
}

impl Segment {
    /// Number of columns in the segment.  May be zero when there are
    /// more workers than columns.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a segment with no columns.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The columns as an iterable range.
    pub fn columns(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Cuts `[0, width)` into `workers` contiguous segments, ordered by
/// start.  Every segment but the last is `width / workers` columns
/// wide; the last also takes the `width % workers` leftover columns.
/// When `width < workers` the leading segments come out empty.
///
/// Both arguments must be at least 1; the renderer checks this before
/// calling.
pub fn partition(width: usize, workers: usize) -> Vec<Segment> {
    debug_assert!(width >= 1 && workers >= 1);
    let base = width / workers;
    let remainder = width % workers;
    (0..workers)
        .map(|i| {
            let start = i * base;
            let end = if i + 1 == workers {
                start + base + remainder
            } else {
                start + base
            };
            Segment { start, end }
        })
        .collect()
}
