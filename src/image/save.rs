//! Image saving utilities.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::{Error, Result};

/// Save an RGBA raster as a PNG file.
///
/// The file is created (or truncated) at `path` and always PNG-encoded,
/// whatever extension the name carries.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the encode fails.
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();

    let output = File::create(path)?;
    let encoder = PngEncoder::new(BufWriter::new(output));

    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_to_missing_directory() {
        let image = RgbaImage::new(2, 2);
        let err = save_png(&image, "no/such/dir/out.png").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
