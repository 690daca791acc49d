// THEORY:
// File I/O is not part of detection, but something has to turn image files into
// grayscale frames and show where the detector thinks the motion is. These helpers
// lean entirely on the `image` crate: decoding any supported format down to 8-bit
// luma, and encoding a PNG that overlays the centroid on the analyzed frame.

use crate::core_modules::frame::Frame;
use crate::detector::Detection;
use image::{GrayImage, ImageEncoder, Rgba, RgbaImage};
use std::path::Path;

const MARKER_ARM: i64 = 5;
const MARKER_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Decodes an image file and converts it to 8-bit grayscale.
pub fn load_gray<P: AsRef<Path>>(path: P) -> Result<GrayImage, image::ImageError> {
    Ok(image::open(path)?.to_luma8())
}

/// Renders `frame` as RGBA with a cross on the detected centroid.
///
/// Nothing is drawn when the detection carries the no-motion sentinel.
pub fn render_overlay(frame: &Frame, detection: &Detection) -> RgbaImage {
    let (width, height) = frame.dimensions();
    let mut image = RgbaImage::from_fn(width as u32, height as u32, |x, y| {
        let v = frame.get(x as usize, y as usize);
        Rgba([v, v, v, 255])
    });

    if let Some((cx, cy)) = detection.centroid() {
        let (cx, cy) = (cx.round() as i64, cy.round() as i64);
        for d in -MARKER_ARM..=MARKER_ARM {
            for (x, y) in [(cx + d, cy), (cx, cy + d)] {
                if (0..width as i64).contains(&x) && (0..height as i64).contains(&y) {
                    image.put_pixel(x as u32, y as u32, MARKER_COLOR);
                }
            }
        }
    }
    image
}

/// Writes the overlay from [`render_overlay`] as a PNG file.
pub fn save_overlay<P: AsRef<Path>>(
    path: P,
    frame: &Frame,
    detection: &Detection,
) -> Result<(), image::ImageError> {
    let overlay = render_overlay(frame, detection);
    let output = std::fs::File::create(path)?;
    let encoder = image::codecs::png::PngEncoder::new(output);

    encoder.write_image(
        overlay.as_raw(),
        overlay.width(),
        overlay.height(),
        image::ExtendedColorType::Rgba8,
    )?;

    Ok(())
}
