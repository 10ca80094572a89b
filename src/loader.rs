use crate::converter::{AsciiFrame, FrameConverter};
use crate::grid::{Grid, PixelGrid};
use crate::{AsciiPlayerError, Result};
use image::{DynamicImage, GenericImageView};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// A numbered sequence of image files: `<dir>/<base_name><index>.<extension>`
#[derive(Debug, Clone)]
pub struct FrameSource {
    dir: PathBuf,
    base_name: String,
    extension: String,
    count: usize,
}

impl FrameSource {
    /// Create a frame source covering indices `0..count`
    pub fn new(
        dir: impl Into<PathBuf>,
        base_name: impl Into<String>,
        extension: impl Into<String>,
        count: usize,
    ) -> Self {
        Self {
            dir: dir.into(),
            base_name: base_name.into(),
            extension: extension.into(),
            count,
        }
    }

    /// Path of the image holding frame `index`
    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir
            .join(format!("{}{}.{}", self.base_name, index, self.extension))
    }

    /// Paths of every frame, in playback order
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        (0..self.count).map(move |index| self.path_for(index))
    }

    /// Number of frames in the sequence
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Opens images and shrinks them to a bounded display size
#[derive(Debug, Clone, Copy)]
pub struct ImageLoader {
    max_width: u32,
    max_height: u32,
}

impl ImageLoader {
    /// Create a loader that keeps images within `max_width` x `max_height` pixels
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self { max_width, max_height }
    }

    /// Open the image at `path` and sample it into a pixel grid
    pub fn load(&self, path: &Path) -> Result<PixelGrid> {
        debug!("Opening frame image: {}", path.display());
        let image = image::open(path).map_err(|source| AsciiPlayerError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.sample(&image))
    }

    /// Downsample an already decoded image.
    ///
    /// Images larger than the bounding box are shrunk to fit it with their aspect
    /// ratio preserved. Smaller images are kept as they are, never upscaled.
    pub fn sample(&self, image: &DynamicImage) -> PixelGrid {
        let (width, height) = image.dimensions();
        let rgb = if width > self.max_width || height > self.max_height {
            image.thumbnail(self.max_width, self.max_height).to_rgb8()
        } else {
            image.to_rgb8()
        };

        let (width, height) = rgb.dimensions();
        debug!("Sampled image to {}x{}", width, height);

        Grid::from_fn(width as usize, height as usize, |x, y| {
            rgb.get_pixel(x as u32, y as u32).0
        })
    }
}

/// Load and convert every frame of `source`, in order.
///
/// The first missing or undecodable image aborts the whole load.
pub fn load_frames(
    source: &FrameSource,
    loader: &ImageLoader,
    converter: &FrameConverter,
) -> Result<Vec<AsciiFrame>> {
    info!(
        "Loading {} frames from {}",
        source.len(),
        source.dir().display()
    );

    let mut frames = Vec::with_capacity(source.len());
    for (index, path) in source.paths().enumerate() {
        let pixels = loader.load(&path)?;
        let frame = converter.convert(&pixels, index);
        debug!(
            "Frame {}: {} rows x {} columns",
            index,
            frame.rows(),
            frame.columns()
        );
        frames.push(frame);
    }

    info!("Loaded {} frames", frames.len());
    Ok(frames)
}
