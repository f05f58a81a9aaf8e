// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes a finished raster to disk.  The format is chosen by the
//! file's extension: `.png` is written as RGBA, `.pgm` and `.pnm` as
//! a binary 8-bit graymap.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::png::PNGEncoder;
use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::ColorType;

use errors::{MandelbrotError, Result};
use raster::Raster;

/// The on-disk formats we can produce.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ImageFormat {
    /// Portable Network Graphics, RGBA.
    Png,
    /// Binary portable graymap.
    Pgm,
}

impl ImageFormat {
    /// Picks a format from a path's extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<ImageFormat> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_ref().map(String::as_str) {
            Some("png") => Ok(ImageFormat::Png),
            Some("pgm") | Some("pnm") => Ok(ImageFormat::Pgm),
            _ => Err(MandelbrotError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// Encodes the raster and writes it to `path`, replacing any file
/// already there.
pub fn write_image<P: AsRef<Path>>(path: P, raster: &Raster) -> Result<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    let output = BufWriter::new(File::create(path)?);
    let (width, height) = (raster.width() as u32, raster.height() as u32);
    match format {
        ImageFormat::Png => {
            PNGEncoder::new(output).encode(&raster.to_rgba(), width, height, ColorType::RGBA(8))?
        }
        ImageFormat::Pgm => {
            let mut encoder =
                PNMEncoder::new(output).with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
            encoder.encode(&raster.to_gray()[..], width, height, ColorType::Gray(8))?
        }
    }
    info!("Wrote {}x{} image to {}", width, height, path.display());
    Ok(())
}
