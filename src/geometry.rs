//! Per-image transforms: side cropping, resizing and letterboxing.
//!
//! Everything works on 3-channel `RgbImage` buffers; sources are normalized
//! to RGB when they are decoded.

use image::{
    imageops::{self, FilterType},
    Rgb, RgbImage,
};

use thiserror::Error;

use tracing::debug;

/// Resampling filter for every resize.
pub const FILTER: FilterType = FilterType::Lanczos3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError{
    #[error("cannot crop {left}px left and {right}px right from an image {width}px wide")]
    InvalidCrop{ left: u32, right: u32, width: u32 },

    #[error("source image has no area ({width}x{height})")]
    EmptySource{ width: u32, height: u32 },

    #[error("target size has no area ({width}x{height})")]
    EmptyTarget{ width: u32, height: u32 },
}

/// Remove `left` columns from the left edge and `right` columns from the
/// right edge, keeping the full height.
pub fn crop_sides(img: &RgbImage, left: u32, right: u32) -> Result<RgbImage, GeometryError>{
    let (w, h) = img.dimensions();
    if left as u64 + right as u64 >= w as u64 {
        return Err(GeometryError::InvalidCrop{ left, right, width: w });
    }
    let cropped = imageops::crop_imm(img, left, 0, w - left - right, h).to_image();
    debug!(left, right, width = cropped.width(), height = cropped.height(), "Cropped sides");
    Ok(cropped)
}

/// Scale to exactly `w`x`h`, ignoring the aspect ratio.
pub fn resize_exact(img: RgbImage, w: u32, h: u32) -> Result<RgbImage, GeometryError>{
    if w == 0 || h == 0 {
        return Err(GeometryError::EmptyTarget{ width: w, height: h });
    }
    if img.width() == 0 || img.height() == 0 {
        return Err(GeometryError::EmptySource{ width: img.width(), height: img.height() });
    }
    if img.dimensions() == (w, h) {
        return Ok(img);
    }
    Ok(imageops::resize(&img, w, h, FILTER))
}

/// Largest `(w, h)` with the source's aspect ratio that fits in `boxw`x`boxh`,
/// and the `(x, y)` that centers it there. Returned as `(x, y, w, h)`.
///
/// Uses exact integer math for `floor(src * min(boxw / srcw, boxh / srch))`.
/// Odd leftovers put the extra pixel on the right/bottom.
pub fn fit_dims(imgw: u32, imgh: u32, boxw: u32, boxh: u32)
    -> Result<(u32, u32, u32, u32), GeometryError>
{
    if imgw == 0 || imgh == 0 {
        return Err(GeometryError::EmptySource{ width: imgw, height: imgh });
    }
    if boxw == 0 || boxh == 0 {
        return Err(GeometryError::EmptyTarget{ width: boxw, height: boxh });
    }
    let (iw, ih) = (imgw as u64, imgh as u64);
    let (bw, bh) = (boxw as u64, boxh as u64);
    // bw/iw <= bh/ih: width is the binding side
    let (w, h) = if bw * ih <= bh * iw {
        (bw, (ih * bw / iw).max(1))
    } else {
        ((iw * bh / ih).max(1), bh)
    };
    let (w, h) = (w as u32, h as u32);
    Ok(((boxw - w) / 2, (boxh - h) / 2, w, h))
}

/// Scale into `w`x`h` keeping the aspect ratio, then center the result on a
/// `background` canvas of exactly `w`x`h`.
pub fn resize_and_pad(img: RgbImage, w: u32, h: u32, background: Rgb<u8>)
    -> Result<RgbImage, GeometryError>
{
    let (x, y, fitw, fith) = fit_dims(img.width(), img.height(), w, h)?;
    if (x, y, fitw, fith) == (0, 0, w, h) && img.dimensions() == (w, h) {
        return Ok(img);
    }
    let scaled = resize_exact(img, fitw, fith)?;
    let mut padded = RgbImage::from_pixel(w, h, background);
    imageops::replace(&mut padded, &scaled, x as i64, y as i64);
    debug!(x, y, fitw, fith, w, h, "Padded to target");
    Ok(padded)
}
