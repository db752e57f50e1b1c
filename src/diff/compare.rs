//! The comparison core: pure per-pixel difference over two images.

use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

use crate::error::{Error, Result};

use super::differ::Config;

/// Marker written for matching pixels in mask mode.
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Marker written for differing pixels in mask mode.
pub const MAGENTA: Rgba<u8> = Rgba([255, 0, 255, 255]);

/// Output raster plus the number of pixels flagged as differing.
#[derive(Debug)]
pub struct DiffResult {
    /// The diff visualization, same bounds as the inputs.
    pub image: RgbaImage,
    /// Number of pixels whose colors differ beyond the threshold.
    pub differing: u64,
}

/// Broadcast an 8-bit threshold into the 16-bit comparison space.
///
/// Channel values are promoted from 8 to 16 bits by duplicating the byte
/// (`v | v << 8`), so the threshold must be replicated the same way to keep
/// the 8-bit mental model.
fn broadcast_threshold(min: u32) -> u32 {
    min | (min << 8)
}

/// Premultiply the color channels by alpha in the 16-bit space.
///
/// Colors are compared premultiplied, so fully transparent pixels compare
/// equal whatever their color channels hold.
fn premultiply(p: Rgba<u16>) -> Rgba<u16> {
    let [r, g, b, a] = p.0;
    // 0xffff * 0xffff fits in u32.
    let scale = |c: u16| (u32::from(c) * u32::from(a) / 0xffff) as u16;
    Rgba([scale(r), scale(g), scale(b), a])
}

/// Image B's pixel as it lands in the 8-bit output raster.
///
/// The value round-trips through premultiplied alpha (premultiply, quantize
/// to 8 bits, unmultiply), so color under fully transparent alpha collapses
/// to zero and translucent channels may lose a rounding step. Opaque pixels
/// come through unchanged.
fn to_output_pixel(p: Rgba<u16>) -> Rgba<u8> {
    let pm = premultiply(p);
    let a8 = (pm.0[3] >> 8) as u8;
    if a8 == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let a16 = u32::from(a8) * 0x101;
    let unmul = |c: u16| {
        let c16 = u32::from(c >> 8) * 0x101;
        ((c16 * 0xffff / a16) >> 8) as u8
    };
    Rgba([unmul(pm.0[0]), unmul(pm.0[1]), unmul(pm.0[2]), a8])
}

/// Whether two RGBA16 pixels differ beyond `threshold` on any channel.
///
/// Channels are compared alpha-premultiplied. Uses strict `>`, so a
/// difference exactly equal to the threshold counts as a match. Symmetric in
/// `p` and `q`.
fn pixels_differ(p: Rgba<u16>, q: Rgba<u16>, threshold: u32) -> bool {
    let p = premultiply(p);
    let q = premultiply(q);
    p.0.iter()
        .zip(q.0.iter())
        .any(|(&a, &b)| u32::from(a).abs_diff(u32::from(b)) > threshold)
}

/// Compare two images pixel-by-pixel and synthesize the diff raster.
///
/// Both images are promoted to a canonical 16-bit-per-channel RGBA space and
/// compared alpha-premultiplied, so inputs stored at different native bit
/// depths compare consistently. For each coordinate the per-channel absolute
/// differences are taken; the pixel differs when any channel strictly exceeds
/// the broadcast threshold.
///
/// Differing pixels are written as magenta in mask mode and as image B's
/// pixel value otherwise; matching pixels are opaque black in mask mode and
/// left transparent otherwise.
///
/// # Errors
///
/// Returns [`Error::BoundsMismatch`] if the images have different dimensions.
pub fn difference(a: &DynamicImage, b: &DynamicImage, config: &Config) -> Result<DiffResult> {
    if a.dimensions() != b.dimensions() {
        return Err(Error::BoundsMismatch {
            first: a.dimensions(),
            second: b.dimensions(),
        });
    }

    let (width, height) = a.dimensions();
    let threshold = broadcast_threshold(config.threshold);

    let a16 = a.to_rgba16();
    let b16 = b.to_rgba16();

    // Zero-initialized, i.e. fully transparent black.
    let mut out = RgbaImage::new(width, height);
    let mut differing = 0u64;

    for y in 0..height {
        for x in 0..width {
            let q = *b16.get_pixel(x, y);
            if pixels_differ(*a16.get_pixel(x, y), q, threshold) {
                differing += 1;
                if config.mask {
                    out.put_pixel(x, y, MAGENTA);
                } else {
                    out.put_pixel(x, y, to_output_pixel(q));
                }
            } else if config.mask {
                out.put_pixel(x, y, BLACK);
            }
        }
    }

    Ok(DiffResult {
        image: out,
        differing,
    })
}
