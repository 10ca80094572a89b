use ascii_flipbook::{
    load_frames, AsciiFrame, Cli, FrameConverter, PlaybackHandle, Player, PlayerConfig, Renderer,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info, warn};
use std::collections::BTreeMap;

/// Print a summary of the converted frames
fn print_info(config: &PlayerConfig, frames: &[AsciiFrame]) {
    let mut sizes: BTreeMap<(usize, usize), usize> = BTreeMap::new();
    for frame in frames {
        *sizes.entry((frame.columns(), frame.rows())).or_default() += 1;
    }
    let total_bytes: usize = frames.iter().map(|frame| frame.text().len()).sum();

    println!("Frame Information:");
    println!("  Source: {}", config.frame_source().path_for(0).display());
    println!("  Frames: {}", frames.len());
    for ((columns, rows), count) in &sizes {
        println!("  Size: {}x{} characters ({} frames)", columns, rows, count);
    }
    println!("  Delay: {} ms", config.delay_ms);
    println!("  Total Text: {} bytes", total_bytes);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG still wins over --verbose
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    // Validate CLI arguments
    if let Err(e) = cli.validate() {
        error!("Invalid arguments: {}", e);
        std::process::exit(1);
    }

    info!("Starting ASCII Flipbook v{}", ascii_flipbook::VERSION);

    let config = PlayerConfig::resolve(&cli).context("Invalid configuration")?;
    debug!("Effective configuration: {:?}", config);

    // Load phase: every frame is converted before anything is shown
    let converter = FrameConverter::new(config.conversion_config()?);
    println!("Loading frames...");
    let frames = load_frames(&config.frame_source(), &config.image_loader(), &converter)
        .context("Failed to load frames")?;

    if cli.info_only {
        print_info(&config, &frames);
        return Ok(());
    }

    let mut renderer = Renderer::stdout(config.clear);

    if cli.single_frame {
        if let Some(frame) = frames.first() {
            renderer.print(frame)?;
        }
        return Ok(());
    }

    let player = Player::new(frames, config.delay())?;

    let (handle, stop) = PlaybackHandle::channel();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl+C pressed, stopping playback");
                handle.stop();
            }
            Err(e) => warn!("Failed to listen for Ctrl+C: {}", e),
        }
    });

    let shown = player.run(&mut renderer, stop).await?;

    info!("Playback finished. Total frames: {}", shown);
    Ok(())
}
