//! Image normalization and raster-image OCR.
//!
//! Recognition quality depends on a clean black/white input, so every image
//! headed for OCR is grayscaled and binarized with a global Otsu threshold
//! first.

use docsage_core::{Error, Result};
use image::{DynamicImage, GrayImage};

use crate::ocr;

/// Fallback threshold when the histogram is degenerate (a flat image gives
/// Otsu nothing to separate).
pub const BASE_THRESHOLD: u8 = 150;

/// Convert an arbitrary color or grayscale image into a black/white image of
/// identical dimensions. Pixels above the computed threshold become 255,
/// the rest 0. Deterministic for a given input.
pub fn binarize(img: &DynamicImage) -> GrayImage {
    let mut gray = img.to_luma8();
    let threshold = otsu_threshold(&gray).unwrap_or(BASE_THRESHOLD);
    for pixel in gray.pixels_mut() {
        pixel.0[0] = if pixel.0[0] > threshold { 255 } else { 0 };
    }
    gray
}

/// Otsu's method: pick the threshold that maximizes between-class variance
/// of the intensity histogram. Returns `None` when every pixel has the same
/// intensity.
fn otsu_threshold(gray: &GrayImage) -> Option<u8> {
    let mut histogram = [0u64; 256];
    for pixel in gray.pixels() {
        histogram[pixel.0[0] as usize] += 1;
    }

    let total: u64 = histogram.iter().sum();
    if total == 0 {
        return None;
    }

    let sum_all: f64 = histogram
        .iter()
        .enumerate()
        .map(|(value, &count)| value as f64 * count as f64)
        .sum();

    let mut sum_background = 0.0;
    let mut weight_background = 0u64;
    let mut best_variance = 0.0;
    let mut best_threshold = None;

    for (value, &count) in histogram.iter().enumerate() {
        weight_background += count;
        if weight_background == 0 {
            continue;
        }
        let weight_foreground = total - weight_background;
        if weight_foreground == 0 {
            break;
        }

        sum_background += value as f64 * count as f64;
        let mean_background = sum_background / weight_background as f64;
        let mean_foreground = (sum_all - sum_background) / weight_foreground as f64;

        let variance = weight_background as f64
            * weight_foreground as f64
            * (mean_background - mean_foreground).powi(2);

        if variance > best_variance {
            best_variance = variance;
            best_threshold = Some(value as u8);
        }
    }

    best_threshold
}

/// Extract text from a raster image: binarize, then OCR. No page concept.
pub fn extract(bytes: &[u8]) -> Result<String> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| Error::Decode(format!("image decode failed: {e}")))?;
    let binary = binarize(&img);
    ocr::recognize(&binary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tone(dark: u8, light: u8) -> DynamicImage {
        let gray = GrayImage::from_fn(8, 8, |x, _| {
            if x < 4 {
                image::Luma([dark])
            } else {
                image::Luma([light])
            }
        });
        DynamicImage::ImageLuma8(gray)
    }

    #[test]
    fn test_binarize_separates_two_tones() {
        let binary = binarize(&two_tone(20, 220));
        assert_eq!(binary.dimensions(), (8, 8));
        assert_eq!(binary.get_pixel(0, 0).0[0], 0);
        assert_eq!(binary.get_pixel(7, 0).0[0], 255);
        assert!(binary.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn test_binarize_is_deterministic() {
        let a = binarize(&two_tone(50, 180));
        let b = binarize(&two_tone(50, 180));
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_flat_image_uses_base_threshold() {
        // Uniform histogram: Otsu has no split, so the base threshold
        // decides. 100 < 150 classifies everything as background.
        let flat = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, image::Luma([100])));
        let binary = binarize(&flat);
        assert!(binary.pixels().all(|p| p.0[0] == 0));

        let bright = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, image::Luma([200])));
        let binary = binarize(&bright);
        assert!(binary.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn test_otsu_threshold_between_clusters() {
        let threshold = otsu_threshold(&two_tone(20, 220).to_luma8()).unwrap();
        assert!(threshold >= 20 && threshold < 220);
    }
}
