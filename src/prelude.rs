// Re-export commonly used types for convenience
pub use crate::cli::Cli;
pub use crate::config::PlayerConfig;
pub use crate::grid::{Grid, PixelGrid, IntensityGrid, CharGrid};
pub use crate::loader::{FrameSource, ImageLoader, load_frames};
pub use crate::converter::{AsciiFrame, ConversionConfig, FrameConverter, GlyphGradient, luminance};
pub use crate::renderer::{AnsiClear, ClearDisplay, ClearMethod, Renderer, ScreenClearer, SystemClear};
pub use crate::player::{Player, PlaybackHandle, StopSignal, next_index};
pub use crate::{AsciiPlayerError, Result};
pub use crate::{DEFAULT_GRADIENT, EXTENDED_GRADIENT, MAX_INTENSITY, DEFAULT_STRETCH};

// Re-export external types commonly used in tests
pub use std::path::Path;
