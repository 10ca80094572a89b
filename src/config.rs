//! Player configuration: built-in defaults, an optional JSON file, then CLI overrides.

use crate::cli::Cli;
use crate::converter::{ConversionConfig, GlyphGradient};
use crate::loader::{FrameSource, ImageLoader};
use crate::renderer::ClearMethod;
use crate::{AsciiPlayerError, Result, DEFAULT_GRADIENT, DEFAULT_STRETCH, MAX_INTENSITY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Everything the loader, converter and player need
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Directory holding the frame images
    pub frames_dir: PathBuf,
    /// File name prefix, followed by the frame index
    pub base_name: String,
    /// File extension, without the dot
    pub extension: String,
    /// Number of frames in the sequence
    pub frame_count: usize,
    /// Pause between frames, in milliseconds
    pub delay_ms: u64,
    /// Maximum sampled image height in pixels (= text rows)
    pub max_height: u32,
    /// Maximum sampled image width in pixels
    pub max_width: u32,
    /// Brightness that maps onto the densest glyph
    pub max_intensity: u8,
    /// Glyphs from sparsest to densest
    pub gradient: String,
    /// Horizontal repeat count per glyph
    pub stretch: usize,
    /// How the display is cleared between frames
    pub clear: ClearMethod,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            frames_dir: PathBuf::from("images"),
            base_name: "rick-roll-".to_string(),
            extension: "jpg".to_string(),
            frame_count: 90,
            delay_ms: 50,
            max_height: 150,
            max_width: 1000,
            max_intensity: MAX_INTENSITY,
            gradient: DEFAULT_GRADIENT.to_string(),
            stretch: DEFAULT_STRETCH,
            clear: ClearMethod::System,
        }
    }
}

impl PlayerConfig {
    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| AsciiPlayerError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the effective configuration for a command line.
    ///
    /// Flags win over the config file, which wins over the defaults.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Overlay every flag that was given on the command line
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(dir) = &cli.dir {
            self.frames_dir = dir.clone();
        }
        if let Some(base_name) = &cli.base_name {
            self.base_name = base_name.clone();
        }
        if let Some(extension) = &cli.extension {
            self.extension = extension.trim_start_matches('.').to_string();
        }
        if let Some(frames) = cli.frames {
            self.frame_count = frames;
        }
        if let Some(delay_ms) = cli.delay_ms {
            self.delay_ms = delay_ms;
        }
        if let Some(max_height) = cli.max_height {
            self.max_height = max_height;
        }
        if let Some(max_width) = cli.max_width {
            self.max_width = max_width;
        }
        if let Some(stretch) = cli.stretch {
            self.stretch = stretch;
        }
        if let Some(gradient) = &cli.gradient {
            self.gradient = gradient.clone();
        }
        if let Some(clear) = cli.clear {
            self.clear = clear;
        }
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.frame_count == 0 {
            return Err(invalid("frame count must be greater than 0"));
        }
        if self.max_height == 0 || self.max_width == 0 {
            return Err(invalid("maximum frame size must be greater than 0"));
        }
        if self.max_intensity == 0 {
            return Err(invalid("max intensity must be greater than 0"));
        }
        if self.stretch == 0 {
            return Err(invalid("stretch factor must be greater than 0"));
        }
        if self.gradient.is_empty() {
            return Err(invalid("glyph gradient must not be empty"));
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn frame_source(&self) -> FrameSource {
        FrameSource::new(
            &self.frames_dir,
            &self.base_name,
            &self.extension,
            self.frame_count,
        )
    }

    pub fn image_loader(&self) -> ImageLoader {
        ImageLoader::new(self.max_width, self.max_height)
    }

    pub fn conversion_config(&self) -> Result<ConversionConfig> {
        let gradient = GlyphGradient::new(&self.gradient)?;
        ConversionConfig::new(gradient, self.max_intensity, self.stretch)
    }
}

fn invalid(message: &str) -> AsciiPlayerError {
    AsciiPlayerError::InvalidConfig(message.to_string())
}
