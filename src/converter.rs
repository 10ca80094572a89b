use crate::grid::{CharGrid, IntensityGrid, PixelGrid};
use crate::{AsciiPlayerError, Result, DEFAULT_GRADIENT, DEFAULT_STRETCH, MAX_INTENSITY};
use log::debug;

/// One fully assembled, ready-to-print frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiFrame {
    text: String,
    index: usize,
    rows: usize,
    columns: usize,
}

impl AsciiFrame {
    /// Printable text, one `\n`-terminated line per character row
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Position of the frame in the sequence
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of text lines
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Printed width of every line, stretch included
    pub fn columns(&self) -> usize {
        self.columns
    }
}

/// Glyphs ordered from visually sparsest to densest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGradient {
    glyphs: Vec<char>,
}

impl GlyphGradient {
    /// Build a gradient from its glyphs, sparsest first
    pub fn new(glyphs: &str) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(AsciiPlayerError::InvalidConfig(
                "glyph gradient must contain at least one character".to_string(),
            ));
        }
        Ok(Self { glyphs })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; an empty gradient cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// `floor(brightness / max_intensity * (len - 1))`, clamped to the last glyph.
    ///
    /// Evaluated in `f64` in exactly that order and truncated, never rounded.
    pub fn glyph_index(&self, brightness: u8, max_intensity: u8) -> usize {
        let last = self.glyphs.len() - 1;
        let scaled = f64::from(brightness) / f64::from(max_intensity) * last as f64;
        (scaled as usize).min(last)
    }

    /// Glyph for a brightness value
    pub fn glyph_for(&self, brightness: u8, max_intensity: u8) -> char {
        self.glyphs[self.glyph_index(brightness, max_intensity)]
    }
}

impl Default for GlyphGradient {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_GRADIENT.chars().collect(),
        }
    }
}

/// ASCII conversion configuration
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Lookup table for brightness values
    pub gradient: GlyphGradient,
    /// Brightness that maps onto the densest glyph
    pub max_intensity: u8,
    /// How many times each glyph is repeated horizontally
    pub stretch: usize,
}

impl ConversionConfig {
    pub fn new(gradient: GlyphGradient, max_intensity: u8, stretch: usize) -> Result<Self> {
        if max_intensity == 0 {
            return Err(AsciiPlayerError::InvalidConfig(
                "max intensity must be greater than 0".to_string(),
            ));
        }
        if stretch == 0 {
            return Err(AsciiPlayerError::InvalidConfig(
                "stretch factor must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            gradient,
            max_intensity,
            stretch,
        })
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            gradient: GlyphGradient::default(),
            max_intensity: MAX_INTENSITY,
            stretch: DEFAULT_STRETCH,
        }
    }
}

/// Brightness of a pixel: the truncated mean of its three channels
pub fn luminance([r, g, b]: [u8; 3]) -> u8 {
    // the mean of three u8 values always fits back into a u8
    ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8
}

/// Pixel grid to ASCII frame converter
#[derive(Debug, Clone)]
pub struct FrameConverter {
    config: ConversionConfig,
}

impl FrameConverter {
    /// Create a new frame converter with the given configuration
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Reduce every pixel to its brightness
    pub fn intensity_grid(&self, pixels: &PixelGrid) -> IntensityGrid {
        pixels.map(|pixel| luminance(*pixel))
    }

    /// Map every brightness value onto the gradient
    pub fn char_grid(&self, intensities: &IntensityGrid) -> CharGrid {
        let gradient = &self.config.gradient;
        let max_intensity = self.config.max_intensity;
        intensities.map(|brightness| gradient.glyph_for(*brightness, max_intensity))
    }

    /// Lay a character grid out as printable text
    pub fn assemble(&self, chars: &CharGrid) -> String {
        let stretch = self.config.stretch;
        let mut text = String::with_capacity(chars.height() * (chars.width() * stretch + 1));

        for row in chars.rows() {
            for &glyph in row {
                text.extend(std::iter::repeat(glyph).take(stretch));
            }
            text.push('\n');
        }

        text
    }

    /// Run the whole pipeline on one sampled image
    pub fn convert(&self, pixels: &PixelGrid, index: usize) -> AsciiFrame {
        let intensities = self.intensity_grid(pixels);
        let chars = self.char_grid(&intensities);
        let text = self.assemble(&chars);

        debug!(
            "Converted frame {} ({}x{} cells, {} bytes)",
            index,
            chars.width(),
            chars.height(),
            text.len()
        );

        AsciiFrame {
            text,
            index,
            rows: chars.height(),
            columns: chars.width() * self.config.stretch,
        }
    }
}
