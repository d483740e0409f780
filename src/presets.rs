//! The built-in collages: which frames go into them and how they are laid out.

use crate::{
    compose::Source,
    layout::{ LayoutConfig, ResizeMode, WHITE },
};

use clap::ValueEnum;

use std::path::{ Path, PathBuf };

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset{
    /// Side-cropped 700x700 frames, 4 rows of 2, 200px between the columns.
    Cropped,
    /// Letterboxed 1000x800 frames, 4 rows of 2, no gaps.
    Letterboxed,
}

const CROPPED_FRAMES: [(&str, &str); 8] = [
    ("frame_0001.png", "type1"),
    ("frame_0045.png", "type1"),
    ("frame_0080.png", "type1"),
    ("frame_0175.png", "type1"),
    ("frame_0250.png", "type1"),
    ("frame_0380.png", "type1"),
    ("frame_0490.png", "type1"),
    ("frame_0500.png", "type1"),
];

const LETTERBOXED_FRAMES: [(&str, &str); 8] = [
    ("takeoff_0001.png", "type2"),
    ("takeoff_0030.png", "type2"),
    ("formation_0080.png", "type2"),
    ("formation_0120.png", "type2"),
    ("formation_0160.png", "type2"),
    ("formation_0200.png", "type2"),
    ("formation_0240.png", "type2"),
    ("formation_0500.png", "type2"),
];

impl Preset{
    pub fn frames(&self) -> &'static [(&'static str, &'static str)]{
        match self {
            Preset::Cropped => &CROPPED_FRAMES,
            Preset::Letterboxed => &LETTERBOXED_FRAMES,
        }
    }

    /// The frames as sources, relative to `dir`.
    pub fn sources(&self, dir: &Path) -> Vec<Source>{
        self.frames()
            .iter()
            .map(|(file, kind)| Source::new(dir.join(file), kind))
            .collect()
    }

    pub fn layout(&self) -> LayoutConfig{
        match self {
            Preset::Cropped => LayoutConfig::new(4, 2, (700, 700))
                .spacing(0)
                .column_margin(200)
                .background(WHITE)
                .crop(700, 700)
                .resize(ResizeMode::Stretch),
            Preset::Letterboxed => LayoutConfig::new(4, 2, (1000, 800))
                .background(WHITE)
                .resize(ResizeMode::Fit),
        }
    }

    pub fn output(&self) -> &'static str{
        match self {
            Preset::Cropped => "AAAAMerged_image.png",
            Preset::Letterboxed => "AAAAAmerged_image.png",
        }
    }

    pub fn output_in(&self, dir: &Path) -> PathBuf{
        dir.join(self.output())
    }
}
