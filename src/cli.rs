use std::path::PathBuf;
use clap::Parser;

use crate::renderer::ClearMethod;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with player settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the frame images
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Frame file name prefix (followed by the zero-based frame index)
    #[arg(short, long)]
    pub base_name: Option<String>,

    /// Frame file extension
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Number of frames to load
    #[arg(short = 'n', long)]
    pub frames: Option<usize>,

    /// Pause between frames in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Maximum frame height in characters
    #[arg(long)]
    pub max_height: Option<u32>,

    /// Maximum frame width in characters, before stretching
    #[arg(long)]
    pub max_width: Option<u32>,

    /// Horizontal repeat count per character
    #[arg(short, long)]
    pub stretch: Option<usize>,

    /// Glyphs ordered from sparsest to densest
    #[arg(short, long)]
    pub gradient: Option<String>,

    /// How to clear the terminal between frames
    #[arg(long, value_enum)]
    pub clear: Option<ClearMethod>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Load every frame, print a summary and exit
    #[arg(long)]
    pub info_only: bool,

    /// Print the first frame once and exit
    #[arg(long, conflicts_with = "info_only")]
    pub single_frame: bool,
}

impl Cli {
    /// Validate command line arguments
    pub fn validate(&self) -> Result<(), String> {
        if let Some(config) = &self.config {
            if !config.exists() {
                return Err(format!("Config file does not exist: {}", config.display()));
            }
        }

        if let Some(dir) = &self.dir {
            if !dir.is_dir() {
                return Err(format!("Frame directory does not exist: {}", dir.display()));
            }
        }

        if self.frames == Some(0) {
            return Err("Frame count must be greater than 0".to_string());
        }

        if self.stretch == Some(0) {
            return Err("Stretch factor must be greater than 0".to_string());
        }

        if self.max_height == Some(0) || self.max_width == Some(0) {
            return Err("Maximum frame size must be greater than 0".to_string());
        }

        if let Some(gradient) = &self.gradient {
            if gradient.is_empty() {
                return Err("Glyph gradient must not be empty".to_string());
            }
        }

        Ok(())
    }
}
