//! Conversion between encoded images and intensity matrices.
//!
//! Decoded images are converted to 8-bit luma and returned as an
//! `(height, width)` matrix with intensities in [0, 255], the input expected by
//! [`compress`](crate::svd_compression::compress). Compressed output with
//! values in [0, 1] is turned back into an 8-bit grayscale image.

use crate::types::{ImageCompressionError, ImageScalar, Result};
use image::{DynamicImage, GrayImage, ImageBuffer, ImageOutputFormat, Luma};
use ndarray::{Array2, ArrayView2};
use num::ToPrimitive;
use std::io::Cursor;
use std::path::Path;

/// Convert a decoded image of any color type into a grayscale intensity matrix.
pub fn grayscale_matrix(img: &DynamicImage) -> Array2<f64> {
    let luma = img.to_luma8();
    let (w, h) = luma.dimensions();

    let mut arr = Array2::<f64>::zeros((h as usize, w as usize));
    for (arr_elem, img_elem) in arr.iter_mut().zip(luma.as_raw().iter()) {
        *arr_elem = f64::from(*img_elem);
    }

    arr
}

/// Decode JPEG or PNG bytes into a grayscale intensity matrix.
pub fn decode_grayscale(bytes: &[u8]) -> Result<Array2<f64>> {
    let img = image::load_from_memory(bytes)?;
    log::debug!("Decoded {}x{} {:?} image", img.width(), img.height(), img.color());
    Ok(grayscale_matrix(&img))
}

/// Read an image file into a grayscale intensity matrix.
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<Array2<f64>> {
    let img = image::open(path.as_ref())?;
    log::debug!(
        "Loaded {}x{} image from {}",
        img.width(),
        img.height(),
        path.as_ref().display()
    );
    Ok(grayscale_matrix(&img))
}

/// Convert a matrix with values in [0, 1] into an 8-bit grayscale image.
pub fn to_gray_image<A: ImageScalar>(mat: ArrayView2<A>) -> Result<GrayImage> {
    let unit = A::zero()..=A::one();
    if let Some(((row, col), value)) = mat
        .indexed_iter()
        .find(|(_, item)| !unit.contains(*item))
    {
        return Err(ImageCompressionError::InvalidInput(format!(
            "Intensity {} at ({}, {}) is outside of [0, 1]",
            value, row, col
        )));
    }

    let (h, w) = mat.dim();
    let mut img: GrayImage = ImageBuffer::new(w as u32, h as u32);

    for (img_elem, arr_elem) in img.pixels_mut().zip(mat.iter()) {
        let value = arr_elem.to_f64().unwrap_or(0.0);
        *img_elem = Luma::from([(value * 255.0).round() as u8]);
    }

    Ok(img)
}

/// Encode a matrix with values in [0, 1] as a grayscale PNG.
pub fn encode_png<A: ImageScalar>(mat: ArrayView2<A>) -> Result<Vec<u8>> {
    let img = DynamicImage::ImageLuma8(to_gray_image(mat)?);

    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageOutputFormat::Png)?;

    Ok(bytes.into_inner())
}

/// Write a matrix with values in [0, 1] as a grayscale image. The format
/// follows the file extension.
pub fn save_grayscale<A, P>(mat: ArrayView2<A>, path: P) -> Result<()>
where
    A: ImageScalar,
    P: AsRef<Path>,
{
    to_gray_image(mat)?.save(path.as_ref())?;
    log::info!("Wrote {}", path.as_ref().display());
    Ok(())
}
