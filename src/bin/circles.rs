//! circles: render a scene of rasterized circles headlessly and save it as PNG.
//!
//! Run: `circles --frames 120 --output circles.png`

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use circle_texture::prelude::*;

/// Render a scene of circles to a PNG file
#[derive(Parser, Debug)]
#[command(name = "circles")]
#[command(version)]
#[command(about = "Rasterize circles into streaming textures and composite them", long_about = None)]
struct Cli {
    /// Scene config file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value = "60")]
    frames: u32,

    /// RNG seed, overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output PNG path
    #[arg(short, long, default_value = "circles.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SceneConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    log::info!(
        "{}: {}x{}, {} circles, {:?} fill, {:?} chords",
        config.title,
        config.screen_width,
        config.screen_height,
        config.circle_count,
        config.fill,
        config.strategy
    );

    let presenter = Rc::new(SoftwarePresenter::new(config.screen_width, config.screen_height)?);
    let mut scene = Scene::populate(Rc::clone(&presenter), &config)?;

    // One frame interval per frame, so every frame runs exactly one tick.
    let frame = config.tick_interval();
    let mut total_ticks = 0u64;
    for _ in 0..cli.frames {
        if !scene.is_running() {
            break;
        }
        total_ticks += u64::from(scene.run_frame(frame)?);
    }
    scene.request_shutdown();

    let canvas = presenter.canvas();
    let stats = canvas.luminance_stats();
    log::info!(
        "{} frames, {total_ticks} ticks, {} pixels covered, luminance min {:.1} max {:.1} mean {:.1} ({:?})",
        cli.frames,
        canvas.count_not(Rgba::BLACK),
        stats.min,
        stats.max,
        stats.mean,
        Canvas::backend()
    );

    PngEncoder::write_to_file(&canvas, &cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    log::info!("wrote {}", cli.output.display());

    Ok(())
}
