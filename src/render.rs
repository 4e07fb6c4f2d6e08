use image::{ImageBuffer, Luma, Rgba};
use ndarray::Array2;
use rayon::prelude::*;

#[inline]
fn normalize_to_u8(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Grayscale image of a frame, one byte per pixel.
pub fn to_luma_image(frame: &Array2<f32>) -> Option<ImageBuffer<Luma<u8>, Vec<u8>>> {
    let (height, width) = frame.dim();
    let pixel_data: Vec<u8> = frame
        .as_standard_layout()
        .as_slice()?
        .par_iter()
        .map(|&v| normalize_to_u8(v))
        .collect();
    ImageBuffer::from_raw(width as u32, height as u32, pixel_data)
}

/// Opaque RGBA image of a frame with R = G = B = intensity.
pub fn to_rgba_image(frame: &Array2<f32>) -> Option<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    let (height, width) = frame.dim();
    let pixel_data: Vec<u8> = frame
        .as_standard_layout()
        .as_slice()?
        .par_iter()
        .flat_map_iter(|&v| {
            let c = normalize_to_u8(v);
            [c, c, c, u8::MAX]
        })
        .collect();
    ImageBuffer::from_raw(width as u32, height as u32, pixel_data)
}
