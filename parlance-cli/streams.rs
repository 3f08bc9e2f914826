//! The three byte channels every display operation reads from or writes to.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use console::Term;

/// Capability check reporting whether the `out` channel is a terminal.
pub type TerminalCheck = Box<dyn Fn() -> bool>;

/// Input, normal-output and diagnostic-output channels.
///
/// Each channel is exclusively owned; nothing here synchronizes concurrent
/// writers.
pub struct Streams {
    /// Source for interactive answers
    pub input: Box<dyn BufRead>,
    /// Sink for normal output
    pub out: Box<dyn Write>,
    /// Sink for warnings and error messages
    pub err: Box<dyn Write>,
    out_terminal: TerminalCheck,
}

impl Streams {
    /// Creates streams from arbitrary channels.
    ///
    /// The `out` channel is reported as not being a terminal; use
    /// [`Streams::with_terminal_check`] to change that.
    pub fn new(input: Box<dyn BufRead>, out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self {
            input,
            out,
            err,
            out_terminal: Box::new(|| false),
        }
    }

    /// Binds the process standard input, output and error.
    pub fn stdio() -> Self {
        Self::new(
            Box::new(io::BufReader::new(io::stdin())),
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        )
        .with_terminal_check(|| Term::stdout().is_term())
    }

    /// Binds in-memory channels.
    ///
    /// # Parameters
    ///
    /// * `input` - Bytes served to the input channel
    ///
    /// # Returns
    ///
    /// The streams together with handles to the captured `out` and `err`
    /// bytes.
    pub fn capture(input: impl Into<Vec<u8>>) -> (Self, CaptureBuffer, CaptureBuffer) {
        let out = CaptureBuffer::default();
        let err = CaptureBuffer::default();
        let streams = Self::new(
            Box::new(io::Cursor::new(input.into())),
            Box::new(out.clone()),
            Box::new(err.clone()),
        );
        (streams, out, err)
    }

    /// Replaces the terminal check for the `out` channel.
    #[must_use]
    pub fn with_terminal_check(mut self, check: impl Fn() -> bool + 'static) -> Self {
        self.out_terminal = Box::new(check);
        self
    }

    /// Reports whether the `out` channel is a terminal.
    pub fn out_is_terminal(&self) -> bool {
        (self.out_terminal)()
    }
}

impl fmt::Debug for Streams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Streams").finish_non_exhaustive()
    }
}

/// Shared in-memory sink; clones write to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Copy of the bytes written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.bytes.borrow().clone()
    }

    /// Bytes written so far, decoded lossily as UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.bytes.borrow_mut().clear();
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
