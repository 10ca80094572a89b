//! ASCII Flipbook - plays a numbered sequence of images as ASCII art in the terminal
//!
//! Every frame is loaded, reduced to luminance, mapped onto a glyph gradient and
//! assembled into a printable text block before playback starts. The player then
//! cycles through the cached frames at a fixed cadence until it is told to stop.

pub mod cli;
pub mod config;
pub mod grid;
pub mod loader;
pub mod converter;
pub mod renderer;
pub mod player;
pub mod prelude;

use std::path::PathBuf;

pub use cli::Cli;
pub use config::PlayerConfig;
pub use grid::{Grid, PixelGrid, IntensityGrid, CharGrid};
pub use loader::{FrameSource, ImageLoader, load_frames};
pub use converter::{AsciiFrame, ConversionConfig, FrameConverter, GlyphGradient, luminance};
pub use renderer::{AnsiClear, ClearDisplay, ClearMethod, Renderer, ScreenClearer, SystemClear};
pub use player::{Player, PlaybackHandle, StopSignal, next_index};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Glyphs ordered by how much of the cell background they cover, sparse to dense
pub const DEFAULT_GRADIENT: &str =
    "`^\",:;Il!i~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// 69-step ramp that starts from a blank cell
pub const EXTENDED_GRADIENT: &str =
    " `.'^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@";

/// Brightness value that maps onto the densest glyph
pub const MAX_INTENSITY: u8 = 255;

/// Terminal cells are roughly three times taller than wide
pub const DEFAULT_STRETCH: usize = 3;

/// Error types used throughout the application
#[derive(thiserror::Error, Debug)]
pub enum AsciiPlayerError {
    #[error("Failed to load image '{}': {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, AsciiPlayerError>;
