//! TerminalRenderer: writes whole frames to a terminal.
//!
//! Each frame is encoded as a cursor-home command followed by the frame bytes
//! and written with a single `write_all`. Unchanged frames are skipped. A
//! failed write is reported once and retried on the next frame.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use crossterm::{cursor, terminal, QueueableCommand};
use tracing::warn;

use crate::fb::FrameBuffer;

/// Set while the terminal is in game mode.
///
/// One flag for the whole process: every renderer, `Drop` and the panic hook
/// swap it off before tearing down, so teardown runs at most once per `enter`.
static TERMINAL_ENTERED: AtomicBool = AtomicBool::new(false);

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    last: Option<Vec<u8>>,
    entered: &'static AtomicBool,
    write_failing: bool,
}

impl TerminalRenderer<io::Stdout> {
    /// Renderer writing to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Renderer writing to any sink; tests use a `Vec<u8>`.
    pub fn with_writer(out: W) -> Self {
        Self::with_flag(out, &TERMINAL_ENTERED)
    }

    fn with_flag(out: W, entered: &'static AtomicBool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64 * 1024),
            last: None,
            entered,
            write_failing: false,
        }
    }

    /// Switch the terminal into game mode (raw, alternate screen, no cursor).
    pub fn enter(&mut self, title: &str) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered.store(true, Ordering::SeqCst);
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::SetTitle(title))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal.
    ///
    /// Only the first call after [`TerminalRenderer::enter`] does anything,
    /// whichever renderer makes it.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered.swap(false, Ordering::SeqCst) {
            return Ok(());
        }

        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        let flushed = self.flush_buf();
        terminal::disable_raw_mode()?;
        flushed
    }

    /// Force the next draw to be written even if unchanged.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Write `fb` if it differs from the last frame written.
    ///
    /// Returns whether a frame was written. Write errors are not returned: the
    /// first one is logged, and the frame stays pending for the next call.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<bool> {
        if self.last.as_deref() == Some(fb.as_bytes()) {
            return Ok(false);
        }

        self.buf.clear();
        encode_frame_into(fb, &mut self.buf)?;

        match self.flush_buf() {
            Ok(()) => {
                self.write_failing = false;
                match self.last.as_mut() {
                    Some(last) => {
                        last.clear();
                        last.extend_from_slice(fb.as_bytes());
                    }
                    None => self.last = Some(fb.as_bytes().to_vec()),
                }
                Ok(true)
            }
            Err(e) => {
                if !self.write_failing {
                    self.write_failing = true;
                    warn!("unable to render game graphics: {e:#}");
                }
                Ok(false)
            }
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Restore the terminal from outside the frame loop (the panic hook).
///
/// A no-op when the terminal is not in game mode or was already restored.
pub fn restore_terminal() -> Result<()> {
    TerminalRenderer::new().exit()
}

/// Encode cursor-home plus the frame bytes into `out`.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.extend_from_slice(fb.as_bytes());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::FLOOR;
    use crate::core::BoardDims;

    fn frame() -> FrameBuffer {
        let dims = BoardDims::new(2, 2).unwrap();
        let mut fb = FrameBuffer::allocate(dims, 2).unwrap();
        fb.format(&[FLOOR; 16]);
        fb
    }

    struct Flaky {
        fail: bool,
        writes: usize,
        data: Vec<u8>,
    }

    impl Write for Flaky {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::Other, "console gone"));
            }
            self.writes += 1;
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_frame_is_written_once_until_it_changes() {
        let mut fb = frame();
        let mut r = TerminalRenderer::with_writer(Vec::new());

        assert!(r.draw(&fb).unwrap());
        assert!(!r.draw(&fb).unwrap());

        *fb.interior_glyph_mut(0, 0) = b'#';
        assert!(r.draw(&fb).unwrap());

        r.invalidate();
        assert!(r.draw(&fb).unwrap());
    }

    #[test]
    fn test_written_bytes_end_with_the_frame() {
        let fb = frame();
        let mut r = TerminalRenderer::with_writer(Vec::new());
        r.draw(&fb).unwrap();
        assert!(r.writer().ends_with(fb.as_bytes()));
    }

    #[test]
    fn test_failed_write_is_retried() {
        let fb = frame();
        let mut r = TerminalRenderer::with_writer(Flaky {
            fail: true,
            writes: 0,
            data: Vec::new(),
        });

        assert!(!r.draw(&fb).unwrap());
        assert!(!r.draw(&fb).unwrap());
        assert!(r.write_failing);

        r.out.fail = false;
        assert!(r.draw(&fb).unwrap());
        assert!(!r.write_failing);
        assert_eq!(r.writer().writes, 1);
        assert!(r.writer().data.ends_with(fb.as_bytes()));
    }

    #[test]
    fn test_exit_without_enter_is_a_no_op() {
        static ENTERED: AtomicBool = AtomicBool::new(false);
        let mut r = TerminalRenderer::with_flag(Vec::new(), &ENTERED);
        r.exit().unwrap();
        r.exit().unwrap();
        assert!(r.writer().is_empty());
    }

    #[test]
    fn test_teardown_runs_once_across_renderers() {
        static ENTERED: AtomicBool = AtomicBool::new(false);
        let mut game = TerminalRenderer::with_flag(Vec::new(), &ENTERED);
        let mut hook = TerminalRenderer::with_flag(Vec::new(), &ENTERED);

        // As after `enter`, without touching the real terminal.
        ENTERED.store(true, Ordering::SeqCst);
        hook.exit().unwrap();
        game.exit().unwrap();

        assert!(!hook.writer().is_empty());
        assert!(game.writer().is_empty());
        assert!(!ENTERED.load(Ordering::SeqCst));
    }
}
