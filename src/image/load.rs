//! Image loading utilities.

use std::path::Path;

use image::DynamicImage;

use crate::error::{Error, Result};

/// Load an image from disk.
///
/// The format is detected from the file contents; anything the `image` crate
/// can decode (PNG, JPEG, GIF, ...) is accepted. The decoded image keeps its
/// native bit depth — conversion to the comparison color space happens later.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();

    image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Load both input images, failing fast on the first error.
///
/// # Errors
///
/// Returns an error if either file cannot be opened or decoded.
pub fn load_pair<P: AsRef<Path>, Q: AsRef<Path>>(
    first: P,
    second: Q,
) -> Result<(DynamicImage, DynamicImage)> {
    let first = load_image(first)?;
    let second = load_image(second)?;
    Ok((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file() {
        let err = load_image("no/such/file.png").unwrap_err();
        assert!(matches!(err, Error::ImageLoad { .. }));
    }

    #[test]
    fn test_load_pair_fails_on_first() {
        let err = load_pair("missing-a.png", "missing-b.png").unwrap_err();
        match err {
            Error::ImageLoad { path, .. } => {
                assert_eq!(path, std::path::PathBuf::from("missing-a.png"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
