//! Image decoding helpers
//!
//! Decodes any format supported by the `image` crate and reduces it to a
//! single luma channel, so colour inputs are accepted as grayscale.

use std::path::Path;
use image::DynamicImage;
use log::{debug, info};

use crate::errors::{TumorError, TumorResult};
use super::scan::Scan;

/// Load a scan from an image file
///
/// # Arguments
/// * `path` - Path to the image file
///
/// # Returns
/// The grayscale scan, or `InvalidImage` if the file cannot be decoded
pub fn load_scan(path: &str) -> TumorResult<Scan> {
    info!("Loading image {}", path);

    if !Path::new(path).exists() {
        return Err(TumorError::InvalidImage(format!("Could not read image: {}", path)));
    }

    let image = image::open(path)?;
    scan_from_dynamic(&image)
}

/// Decode a scan from an in-memory encoded image (e.g. an upload body)
pub fn scan_from_bytes(bytes: &[u8]) -> TumorResult<Scan> {
    if bytes.is_empty() {
        return Err(TumorError::InvalidImage("empty image buffer".to_string()));
    }

    let image = image::load_from_memory(bytes)?;
    scan_from_dynamic(&image)
}

/// Convert a decoded image to a scan
pub fn scan_from_dynamic(image: &DynamicImage) -> TumorResult<Scan> {
    let gray = image.to_luma8();
    let (width, height) = gray.dimensions();
    debug!("Decoded {}x{} image ({:?})", width, height, image.color());

    Scan::new(width as usize, height as usize, gray.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn test_rgb_reduces_to_luma() {
        let mut rgb = RgbImage::new(3, 2);
        for (_, _, pixel) in rgb.enumerate_pixels_mut() {
            *pixel = Rgb([200, 200, 200]);
        }
        let scan = scan_from_dynamic(&DynamicImage::ImageRgb8(rgb)).unwrap();
        assert_eq!(scan.width(), 3);
        assert_eq!(scan.height(), 2);
        assert!(scan.pixels().iter().all(|&p| p == 200));
    }

    #[test]
    fn test_png_round_trip_through_bytes() {
        let gray = GrayImage::from_fn(8, 4, |x, y| Luma([(x * 10 + y) as u8]));
        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(gray)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let scan = scan_from_bytes(&bytes).unwrap();
        assert_eq!(scan.get(3, 5), 53);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(scan_from_bytes(&[]), Err(TumorError::InvalidImage(_))));
        assert!(matches!(scan_from_bytes(b"not an image"), Err(TumorError::InvalidImage(_))));
        assert!(matches!(load_scan("/nonexistent/scan.png"), Err(TumorError::InvalidImage(_))));
    }
}
