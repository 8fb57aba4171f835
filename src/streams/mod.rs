//! Byte input and output handles
//!
//! The `,` and `.` commands talk to the outside world one byte at a time
//! through [`ByteSource`] and [`ByteSink`]. Both are implemented for every
//! [`std::io::Read`] / [`std::io::Write`], so stdin, files, byte slices and
//! `Vec<u8>` plug in directly.
//!
//! [`OutputCapture`] is a shared in-memory sink: the runner owns one handle
//! while the host keeps a clone to inspect what the program printed.

use std::cell::RefCell;
use std::io::{self, Read, Write};
use std::rc::Rc;

/// Source of input bytes for the `,` command
pub trait ByteSource {
    /// Next byte, or `None` once the input is exhausted
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// Destination of output bytes for the `.` command
pub trait ByteSink {
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<R: Read + ?Sized> ByteSource for R {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match self.read(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }
}

impl<W: Write + ?Sized> ByteSink for W {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.write_all(&[byte])
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(self)
    }
}

/// Cloneable sink that records every byte written to it
#[derive(Debug, Clone, Default)]
pub struct OutputCapture {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl OutputCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.borrow().clone()
    }

    /// Output decoded as UTF-8, invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.bytes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.borrow().is_empty()
    }
}

impl Write for OutputCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_source_reports_end_of_input() {
        let mut source: &[u8] = &[1, 2];
        assert_eq!(source.read_byte().unwrap(), Some(1));
        assert_eq!(source.read_byte().unwrap(), Some(2));
        assert_eq!(source.read_byte().unwrap(), None);
        assert_eq!(source.read_byte().unwrap(), None);
    }

    #[test]
    fn test_capture_clones_share_buffer() {
        let capture = OutputCapture::new();
        let mut handle = capture.clone();
        handle.write_byte(b'h').unwrap();
        handle.write_byte(b'i').unwrap();

        assert_eq!(capture.bytes(), b"hi".to_vec());
        assert_eq!(capture.text(), "hi");
        assert_eq!(capture.len(), 2);
    }
}
