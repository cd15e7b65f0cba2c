//! Terminal handling for the live dashboard.

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Output target of `watch`. When clearing, each frame replaces the previous
/// one and the cursor stays hidden until the screen is dropped.
pub struct LiveScreen<'a, W: Write> {
    out: &'a mut W,
    clear: bool,
}

impl<'a, W: Write> LiveScreen<'a, W> {
    pub fn new(out: &'a mut W, clear: bool) -> io::Result<Self> {
        if clear {
            execute!(out, cursor::Hide)?;
        }
        Ok(Self { out, clear })
    }

    /// Draw one frame, wiping the previous one first when clearing.
    pub fn draw(&mut self, frame: &str) -> io::Result<()> {
        if self.clear {
            execute!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        }
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> Drop for LiveScreen<'_, W> {
    fn drop(&mut self) {
        if self.clear {
            let _ = execute!(self.out, cursor::Show);
        }
    }
}
