//! Serial line assembly
//!
//! Bytes collect here until CR or LF. A line longer than `LINE_SIZE` is
//! kept as overflowed: the tail is gone, so the caller must reject the
//! whole line rather than run what is left of it.

use crate::config::LINE_SIZE;

pub struct LineBuffer {
    buf: [u8; LINE_SIZE],
    len: usize,
    /// At least one byte of the current line did not fit
    overflowed: bool,
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; LINE_SIZE],
            len: 0,
            overflowed: false,
        }
    }

    /// Append one byte. Returns false (and marks the line) when it was dropped.
    pub fn push(&mut self, byte: u8) -> bool {
        match self.buf.get_mut(self.len) {
            Some(slot) => {
                *slot = byte;
                self.len += 1;
                true
            }
            None => {
                self.overflowed = true;
                false
            }
        }
    }

    /// Start a new line
    pub fn clear(&mut self) {
        self.len = 0;
        self.overflowed = false;
    }

    /// Bytes kept so far. Only printable ASCII is ever pushed by the console.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == LINE_SIZE
    }

    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
