//! Builds the collage: load every source, turn it into a tile, paste the
//! tiles row by row onto one canvas and encode it.
//!
//! Nothing touches the output path until every tile is ready and the canvas
//! has been encoded in memory.

use crate::{
    error::{ CollageError, Result },
    geometry::{ crop_sides, resize_and_pad, resize_exact, GeometryError },
    layout::{ Crop, LayoutConfig, ResizeMode },
    timer::Timer,
};

use image::{
    imageops,
    ImageFormat,
    ImageReader as IR,
    RgbImage,
};

use std::{
    fmt::Display,
    io::Cursor,
    path::{ Path, PathBuf },
};

use tracing::{ debug, info, instrument };

/// One grid entry: an image file and the tile kind it is made into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source{
    pub path: PathBuf,
    pub kind: String,
}

impl Source{
    pub fn new(path: impl Into<PathBuf>, kind: &str) -> Self{
        Self{ path: path.into(), kind: kind.to_string() }
    }
}

fn decode_err(path: &Path, err: impl Display) -> CollageError{
    CollageError::Decode{ path: path.to_path_buf(), reason: err.to_string() }
}

fn encode_err(path: &Path, err: impl Display) -> CollageError{
    CollageError::Encode{ path: path.to_path_buf(), reason: err.to_string() }
}

/// Decode `path` and normalize it to 8-bit RGB.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_source(path: &Path) -> Result<RgbImage>{
    if !path.is_file() {
        return Err(CollageError::SourceNotFound(path.to_path_buf()));
    }
    let img = IR::open(path)
        .map_err(|e| decode_err(path, e))?
        .with_guessed_format()
        .map_err(|e| decode_err(path, e))?
        .decode()
        .map_err(|e| decode_err(path, e))?;
    debug!(width = img.width(), height = img.height(), "Decoded");
    Ok(img.into_rgb8())
}

/// Crop, resize and pad one source into a tile of exactly `size`.
pub fn make_tile(img: RgbImage, size: (u32, u32), layout: &LayoutConfig, path: &Path)
    -> Result<RgbImage>
{
    let geo = |source: GeometryError| CollageError::Geometry{ path: path.to_path_buf(), source };
    let (w, h) = size;
    let img = match layout.crop {
        Some(Crop{ left, right }) => {
            let cropped = crop_sides(&img, left, right).map_err(geo)?;
            info!(path = %path.display(), left, right, "Cropped");
            cropped
        },
        None => img,
    };
    let img = match layout.resize {
        ResizeMode::Stretch => {
            let resized = resize_exact(img, w, h).map_err(geo)?;
            info!(path = %path.display(), w, h, "Resized");
            resized
        },
        ResizeMode::Fit => img,
    };
    let tile = resize_and_pad(img, w, h, layout.background).map_err(geo)?;
    info!(path = %path.display(), w, h, background = ?layout.background.0, "Padded");
    Ok(tile)
}

/// Compose `sources` into one canvas laid out by `layout`.
///
/// The source count is checked before anything is read. Sources are then
/// loaded and turned into tiles in order; the first failure ends the run.
#[instrument(skip_all, fields(rows = layout.rows, cols = layout.cols))]
pub fn compose(sources: &[Source], layout: &LayoutConfig) -> Result<RgbImage>{
    let mut timer = Timer::new();
    if sources.len() != layout.cells() {
        return Err(CollageError::CountMismatch{ expected: layout.cells(), actual: sources.len() });
    }
    layout.validate()?;

    let mut tiles = Vec::with_capacity(sources.len());
    for Source{ path, kind } in sources {
        let img = load_source(path)?;
        let size = layout.kind_size(kind).ok_or_else(|| CollageError::UnknownTileKind{
            path: path.clone(),
            kind: kind.clone(),
        })?;
        tiles.push(make_tile(img, size, layout, path)?);
    }
    info!(tiles = tiles.len(), ms = timer.lap().as_millis() as u64, "Tiles ready");

    let (w, h) = layout.canvas_dims();
    let mut canvas = RgbImage::from_pixel(w, h, layout.background);
    info!(width = w, height = h, background = ?layout.background.0, "Created canvas");

    for (i, tile) in tiles.iter().enumerate() {
        let (x, y) = layout.cell_origin(i);
        imageops::replace(&mut canvas, tile, x as i64, y as i64);
        info!(tile = i + 1, x, y, "Pasted");
    }
    info!(ms = timer.lap().as_millis() as u64, "Canvas filled");
    Ok(canvas)
}

/// Encode `canvas` in the format named by the extension of `path`, then write it.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn save(canvas: &RgbImage, path: &Path) -> Result<()>{
    let format = ImageFormat::from_path(path).map_err(|e| encode_err(path, e))?;
    let mut buffer = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut buffer), format)
        .map_err(|e| encode_err(path, e))?;
    std::fs::write(path, &buffer).map_err(|e| encode_err(path, e))?;
    info!(bytes = buffer.len(), "Saved");
    Ok(())
}

/// `compose` followed by `save`.
pub fn compose_to_file(sources: &[Source], layout: &LayoutConfig, output: &Path) -> Result<()>{
    let canvas = compose(sources, layout)?;
    save(&canvas, output)
}
