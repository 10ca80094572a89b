use crate::converter::AsciiFrame;
use crate::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::io::{self, stdout, Stdout, Write};
use std::process::Command;

/// Something that can wipe the display before a frame is printed
pub trait ClearDisplay {
    /// Clear the display that `out` is connected to
    fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()>;
}

/// Clears the screen by running the platform's clear command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClear {
    program: &'static str,
    args: &'static [&'static str],
}

impl SystemClear {
    /// `cls` on Windows, `clear` everywhere else
    pub fn for_current_platform() -> Self {
        if cfg!(windows) {
            Self {
                program: "cmd",
                args: &["/C", "cls"],
            }
        } else {
            Self {
                program: "clear",
                args: &[],
            }
        }
    }

    pub fn program(&self) -> &str {
        self.program
    }

    pub fn args(&self) -> &[&str] {
        self.args
    }
}

impl ClearDisplay for SystemClear {
    fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        // anything still buffered would land after the clear
        out.flush()?;

        let status = Command::new(self.program).args(self.args).status()?;
        if !status.success() {
            warn!("'{}' exited with {}", self.program, status);
        }
        Ok(())
    }
}

/// Clears the screen with ANSI escape sequences written to the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnsiClear;

impl ClearDisplay for AnsiClear {
    fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))
    }
}

/// Clear strategy, chosen once at startup
#[derive(clap::ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClearMethod {
    /// Run the operating system's clear command
    System,
    /// Emit ANSI escape sequences
    Ansi,
}

impl ClearMethod {
    pub fn clearer(self) -> ScreenClearer {
        match self {
            ClearMethod::System => ScreenClearer::System(SystemClear::for_current_platform()),
            ClearMethod::Ansi => ScreenClearer::Ansi(AnsiClear),
        }
    }
}

/// Runtime-selected [`ClearDisplay`] implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenClearer {
    System(SystemClear),
    Ansi(AnsiClear),
}

impl ClearDisplay for ScreenClearer {
    fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self {
            ScreenClearer::System(clear) => clear.clear(out),
            ScreenClearer::Ansi(clear) => clear.clear(out),
        }
    }
}

/// Writes frames to a terminal
pub struct Renderer<W: Write, C: ClearDisplay> {
    out: W,
    clear: C,
    frames_rendered: u64,
}

impl Renderer<Stdout, ScreenClearer> {
    /// Render to standard output with the given clear strategy
    pub fn stdout(method: ClearMethod) -> Self {
        debug!("Rendering to stdout, clearing with {:?}", method);
        Self::new(stdout(), method.clearer())
    }
}

impl<W: Write, C: ClearDisplay> Renderer<W, C> {
    /// Create a new renderer
    pub fn new(out: W, clear: C) -> Self {
        Self {
            out,
            clear,
            frames_rendered: 0,
        }
    }

    /// Clear the display, then print the frame
    pub fn show(&mut self, frame: &AsciiFrame) -> Result<()> {
        self.clear.clear(&mut self.out)?;
        self.print(frame)
    }

    /// Print the frame below whatever is already on screen
    pub fn print(&mut self, frame: &AsciiFrame) -> Result<()> {
        // the frame text already ends in a newline; the extra one leaves a blank
        // separator line after the last row
        writeln!(self.out, "{}", frame.text())?;
        self.out.flush()?;

        self.frames_rendered += 1;
        debug!(
            "Frame {} rendered ({}x{})",
            frame.index(),
            frame.columns(),
            frame.rows()
        );
        Ok(())
    }

    /// Number of frames printed so far
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Consume the renderer, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
