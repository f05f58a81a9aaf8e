// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time test itself.  Both functions here are pure, so any
//! number of workers may call them at once.

use num::Complex;

/// Iteration cap used when nothing else is configured.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// An orbit whose modulus passes this radius is gone for good.
pub const ESCAPE_RADIUS: f64 = 2.0;

const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// This is our classic iterator function.  Iterates z <- z^2 + c from
/// z = 0 and returns the first (1-based) iteration after which |z|
/// exceeds the escape radius.  Points that survive every iteration
/// are taken to be inside the set and report `max_iterations`, so the
/// answer always lies in `[1, max_iterations]`.
pub fn escape_iterations(c: Complex<f64>, max_iterations: usize) -> usize {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for i in 1..=max_iterations {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_RADIUS_SQUARED {
            return i;
        }
    }
    max_iterations
}

/// Turns an escape count into a grey level.  Points inside the set are
/// white; escaped points get darker the faster they escaped.
pub fn intensity(escape: usize, max_iterations: usize) -> u8 {
    if escape >= max_iterations {
        return 255;
    }
    ((255 * escape) / max_iterations) as u8
}
