//! Grid layout parameters and the arithmetic placing tiles on the canvas.

use crate::error::{CollageError, Result};

use image::Rgb;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Columns removed from each side of a source before it is resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crop{
    pub left: u32,
    pub right: u32,
}

/// How a source is brought to its tile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode{
    /// Scale to the exact tile size, distorting the aspect ratio.
    Stretch,
    /// Scale to fit inside the tile, then letterbox with the background color.
    Fit,
}

/// A recognized tile-kind label and the size its tiles are made at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileKind{
    pub name: String,
    pub size: (u32, u32),
}

/// Everything that decides what the collage looks like, apart from the images.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig{
    pub rows: u32,
    pub cols: u32,
    pub tile: (u32, u32),
    pub spacing: u32,
    /// Extra horizontal gap after every column except the last.
    pub column_margin: u32,
    pub background: Rgb<u8>,
    pub crop: Option<Crop>,
    pub resize: ResizeMode,
    pub kinds: Vec<TileKind>,
}

impl LayoutConfig{
    /// A `rows`x`cols` grid of `tile` cells with no gaps, white background,
    /// no cropping, aspect-preserving resize, and kinds `type1`/`type2`
    /// both sized to the cell.
    pub fn new(rows: u32, cols: u32, tile: (u32, u32)) -> Self {
        Self{
            rows,
            cols,
            tile,
            spacing: 0,
            column_margin: 0,
            background: WHITE,
            crop: None,
            resize: ResizeMode::Fit,
            kinds: vec![
                TileKind{ name: "type1".to_string(), size: tile },
                TileKind{ name: "type2".to_string(), size: tile },
            ],
        }
    }

    pub fn spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn column_margin(mut self, margin: u32) -> Self {
        self.column_margin = margin;
        self
    }

    pub fn background(mut self, color: Rgb<u8>) -> Self {
        self.background = color;
        self
    }

    pub fn crop(mut self, left: u32, right: u32) -> Self {
        self.crop = Some(Crop{ left, right });
        self
    }

    pub fn resize(mut self, mode: ResizeMode) -> Self {
        self.resize = mode;
        self
    }

    /// Register `name`, or change its size if it is already known.
    pub fn kind(mut self, name: &str, size: (u32, u32)) -> Self {
        match self.kinds.iter_mut().find(|k| k.name == name) {
            Some(k) => k.size = size,
            None => self.kinds.push(TileKind{ name: name.to_string(), size }),
        }
        self
    }

    pub fn cells(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn kind_size(&self, name: &str) -> Option<(u32, u32)> {
        self.kinds.iter().find(|k| k.name == name).map(|k| k.size)
    }

    /// Checks that the grid is non-empty, every kind fits its cell, and the
    /// canvas size fits in `u32`.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(CollageError::InvalidLayout(
                format!("grid of {}x{} has no cells", self.rows, self.cols)
            ));
        }
        let (tw, th) = self.tile;
        if tw == 0 || th == 0 {
            return Err(CollageError::InvalidLayout(format!("tile size {tw}x{th} has no area")));
        }
        for TileKind{ name, size: (kw, kh) } in &self.kinds {
            if *kw == 0 || *kh == 0 || *kw > tw || *kh > th {
                return Err(CollageError::InvalidLayout(
                    format!("tile kind {name:?} is {kw}x{kh}, cells are {tw}x{th}")
                ));
            }
        }
        let (cw, ch) = self.canvas_dims_wide();
        if cw > u32::MAX as u64 || ch > u32::MAX as u64 {
            return Err(CollageError::InvalidLayout(format!("canvas of {cw}x{ch} is too large")));
        }
        Ok(())
    }

    fn canvas_dims_wide(&self) -> (u64, u64) {
        let (tw, th) = (self.tile.0 as u64, self.tile.1 as u64);
        let (rows, cols) = (self.rows as u64, self.cols as u64);
        let gap_x = self.spacing as u64 + self.column_margin as u64;
        let gap_y = self.spacing as u64;
        (
            cols * tw + cols.saturating_sub(1) * gap_x,
            rows * th + rows.saturating_sub(1) * gap_y,
        )
    }

    /// Canvas `(width, height)`. Only meaningful after `validate` succeeded.
    pub fn canvas_dims(&self) -> (u32, u32) {
        let (w, h) = self.canvas_dims_wide();
        (w as u32, h as u32)
    }

    /// Top-left corner of cell `index`, filled in row-major order.
    pub fn cell_origin(&self, index: usize) -> (u32, u32) {
        let cols = self.cols.max(1) as usize;
        let (row, col) = ((index / cols) as u32, (index % cols) as u32);
        (
            col * (self.tile.0 + self.spacing + self.column_margin),
            row * (self.tile.1 + self.spacing),
        )
    }
}

#[cfg(test)]
mod tests{

    use super::*;

    #[test]
    fn test_canvas_dims(){
        let l = LayoutConfig::new(4, 2, (700, 700)).column_margin(200);
        assert_eq!(l.canvas_dims(), (2 * 700 + 200, 4 * 700));

        let l = LayoutConfig::new(4, 2, (1000, 800));
        assert_eq!(l.canvas_dims(), (2000, 3200));

        let l = LayoutConfig::new(4, 2, (1000, 500)).spacing(2);
        assert_eq!(l.canvas_dims(), (2 * 1000 + 2, 4 * 500 + 3 * 2));

        let l = LayoutConfig::new(1, 1, (30, 20)).spacing(5).column_margin(9);
        assert_eq!(l.canvas_dims(), (30, 20));

        let l = LayoutConfig::new(2, 3, (10, 10)).spacing(1).column_margin(4);
        assert_eq!(l.canvas_dims(), (3 * 10 + 2 * 5, 2 * 10 + 1));
    }

    #[test]
    fn test_cell_origin_row_major(){
        let l = LayoutConfig::new(4, 2, (700, 700)).column_margin(200);
        let origins: Vec<_> = (0..8).map(|i| l.cell_origin(i)).collect();
        assert_eq!(origins, vec![
            (0, 0), (900, 0),
            (0, 700), (900, 700),
            (0, 1400), (900, 1400),
            (0, 2100), (900, 2100),
        ]);
    }

    #[test]
    fn test_every_cell_inside_canvas(){
        let l = LayoutConfig::new(3, 4, (11, 7)).spacing(3).column_margin(5);
        let (cw, ch) = l.canvas_dims();
        for i in 0..l.cells() {
            let (x, y) = l.cell_origin(i);
            assert!(x + l.tile.0 <= cw && y + l.tile.1 <= ch);
        }
        let (x, y) = l.cell_origin(l.cells() - 1);
        assert_eq!((x + l.tile.0, y + l.tile.1), (cw, ch));
    }

    #[test]
    fn test_kinds(){
        let l = LayoutConfig::new(1, 1, (100, 80)).kind("type1", (50, 40)).kind("wide", (100, 10));
        assert_eq!(l.kind_size("type1"), Some((50, 40)));
        assert_eq!(l.kind_size("type2"), Some((100, 80)));
        assert_eq!(l.kind_size("wide"), Some((100, 10)));
        assert_eq!(l.kind_size("type3"), None);
        assert!(l.validate().is_ok());
    }

    #[test]
    fn test_validate(){
        assert!(LayoutConfig::new(4, 2, (700, 700)).validate().is_ok());
        assert!(matches!(
            LayoutConfig::new(0, 2, (700, 700)).validate(),
            Err(CollageError::InvalidLayout(_))
        ));
        assert!(matches!(
            LayoutConfig::new(1, 1, (0, 700)).validate(),
            Err(CollageError::InvalidLayout(_))
        ));
        assert!(matches!(
            LayoutConfig::new(1, 1, (100, 100)).kind("big", (101, 50)).validate(),
            Err(CollageError::InvalidLayout(_))
        ));
        assert!(matches!(
            LayoutConfig::new(2, 2, (u32::MAX, 1)).validate(),
            Err(CollageError::InvalidLayout(_))
        ));
    }
}
