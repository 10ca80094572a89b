//! Frame playback loop.
//!
//! The player owns the precomputed frames and cycles through them forever,
//! wrapping from the last frame back to the first. A [`PlaybackHandle`] is the
//! only way to end the loop.

use crate::converter::AsciiFrame;
use crate::renderer::{ClearDisplay, Renderer};
use crate::{AsciiPlayerError, Result};
use log::{debug, info};
use std::io::Write;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::sleep;

/// Index of the frame shown after `index` in a sequence of `len` frames
pub fn next_index(index: usize, len: usize) -> usize {
    if index + 1 >= len {
        0
    } else {
        index + 1
    }
}

/// Requests that a running [`Player`] stop
#[derive(Debug)]
pub struct PlaybackHandle {
    tx: watch::Sender<bool>,
}

/// Receiving side of a [`PlaybackHandle`], passed to [`Player::run`]
#[derive(Debug, Clone)]
pub struct StopSignal {
    rx: watch::Receiver<bool>,
}

impl PlaybackHandle {
    /// Create a handle together with the signal it controls
    pub fn channel() -> (Self, StopSignal) {
        let (tx, rx) = watch::channel(false);
        (Self { tx }, StopSignal { rx })
    }

    /// Ask the player to stop after the frame it is currently showing
    pub fn stop(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_stopped(&self) -> bool {
        *self.tx.borrow()
    }
}

impl StopSignal {
    pub fn is_stopped(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once a stop has been requested.
    ///
    /// If every handle is dropped without stopping, this never resolves.
    async fn stopped(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

/// Cycles precomputed frames at a fixed interval
#[derive(Debug)]
pub struct Player {
    frames: Vec<AsciiFrame>,
    delay: Duration,
}

impl Player {
    /// Create a player for a non-empty, ordered list of frames
    pub fn new(frames: Vec<AsciiFrame>, delay: Duration) -> Result<Self> {
        if frames.is_empty() {
            return Err(AsciiPlayerError::InvalidConfig(
                "cannot play an empty frame sequence".to_string(),
            ));
        }
        Ok(Self { frames, delay })
    }

    /// Show frames until `stop` fires, returning how many were shown.
    ///
    /// Each iteration clears the display, prints the current frame, waits for
    /// the frame delay and advances with wraparound. The delay does not account
    /// for render time.
    pub async fn run<W, C>(
        &self,
        renderer: &mut Renderer<W, C>,
        mut stop: StopSignal,
    ) -> Result<u64>
    where
        W: Write,
        C: ClearDisplay,
    {
        info!(
            "Playing {} frames every {}ms",
            self.frames.len(),
            self.delay.as_millis()
        );

        let mut index = 0;
        let mut shown = 0u64;

        while !stop.is_stopped() {
            renderer.show(&self.frames[index])?;
            shown += 1;

            tokio::select! {
                _ = sleep(self.delay) => {}
                _ = stop.stopped() => break,
            }

            index = next_index(index, self.frames.len());
        }

        debug!("Playback stopped on frame {}", index);
        info!("Playback stopped after {} frames", shown);
        Ok(shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::{ConversionConfig, FrameConverter, GlyphGradient};
    use crate::grid::Grid;
    use std::io;

    /// Writes a marker for each clear and stops playback after `limit` clears
    struct StopAfter {
        handle: PlaybackHandle,
        limit: usize,
        clears: usize,
    }

    impl ClearDisplay for StopAfter {
        fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
            self.clears += 1;
            if self.clears >= self.limit {
                self.handle.stop();
            }
            write!(out, "|")
        }
    }

    /// Three 1x1 frames rendering as "a", "b" and "c"
    fn create_test_frames() -> Vec<AsciiFrame> {
        let gradient = GlyphGradient::new("abc").unwrap();
        let converter = FrameConverter::new(ConversionConfig::new(gradient, 255, 1).unwrap());
        [0u8, 128, 255]
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let pixels = Grid::from_fn(1, 1, |_, _| [value, value, value]);
                converter.convert(&pixels, index)
            })
            .collect()
    }

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(1, 3), 2);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(0, 1), 0);
    }

    #[test]
    fn test_empty_player_is_rejected() {
        assert!(Player::new(Vec::new(), Duration::from_millis(1)).is_err());
    }

    #[test]
    fn test_handle_stop_is_visible_to_signal() {
        let (handle, signal) = PlaybackHandle::channel();
        assert!(!handle.is_stopped());
        assert!(!signal.is_stopped());

        handle.stop();
        assert!(handle.is_stopped());
        assert!(signal.is_stopped());
    }

    #[tokio::test]
    async fn test_stopped_before_start_shows_nothing() {
        let player = Player::new(create_test_frames(), Duration::from_millis(1)).unwrap();
        let (handle, signal) = PlaybackHandle::channel();
        handle.stop();

        let mut renderer = Renderer::new(Vec::new(), crate::renderer::AnsiClear);
        let shown = player.run(&mut renderer, signal).await.unwrap();

        assert_eq!(shown, 0);
        assert!(renderer.into_inner().is_empty());
    }

    #[tokio::test]
    async fn test_playback_wraps_around_in_order() {
        let player = Player::new(create_test_frames(), Duration::from_millis(1)).unwrap();
        let (handle, signal) = PlaybackHandle::channel();
        let clear = StopAfter {
            handle,
            limit: 5,
            clears: 0,
        };

        let mut renderer = Renderer::new(Vec::new(), clear);
        let shown = player.run(&mut renderer, signal).await.unwrap();

        assert_eq!(shown, 5);
        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(output, "|a\n\n|b\n\n|c\n\n|a\n\n|b\n\n");
    }

    #[tokio::test]
    async fn test_stop_interrupts_long_delay() {
        let player = Player::new(create_test_frames(), Duration::from_secs(3600)).unwrap();
        let (handle, signal) = PlaybackHandle::channel();

        let stopper = tokio::spawn(async move {
            sleep(Duration::from_millis(10)).await;
            handle.stop();
        });

        let mut renderer = Renderer::new(Vec::new(), crate::renderer::AnsiClear);
        let shown = tokio::time::timeout(Duration::from_secs(5), player.run(&mut renderer, signal))
            .await
            .expect("player did not stop")
            .unwrap();
        stopper.await.unwrap();

        assert_eq!(shown, 1);
    }
}
