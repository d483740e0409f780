mod compose;
mod error;
mod geometry;
mod layout;
mod presets;
mod timer;

use crate::{
    compose::compose_to_file,
    presets::Preset,
    timer::Timer,
};

use clap::Parser;

use std::path::PathBuf;

use tracing::info;

/// Paste a fixed set of frames into one grid image.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Which collage to build.
    #[arg(value_enum, default_value_t = Preset::Cropped)]
    preset: Preset,
    /// Directory holding the frames.
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
    /// Where to write the collage (default: the preset's file name inside --dir).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let timer = Timer::new();

    let sources = args.preset.sources(&args.dir);
    let layout = args.preset.layout();
    let output = args.output.unwrap_or_else(|| args.preset.output_in(&args.dir));
    info!(preset = ?args.preset, dir = %args.dir.display(), output = %output.display(), "Framegrid starting");

    compose_to_file(&sources, &layout, &output).vital("Framegrid: could not build the collage");

    info!(ms = timer.total().as_millis() as u64, "Framegrid: saved {}", output.display());
}

trait Vital<T> {
    fn vital(self, msg: &str) -> T;
}

impl<T, U: std::fmt::Display> Vital<T> for Result<T, U> {
    fn vital(self, msg: &str) -> T {
        match self {
            Ok(res) => res,
            Err(err) => {
                tracing::error!("{msg}: {err}");
                std::process::exit(1);
            },
        }
    }
}
