//! Bounded output buffer handed to command handlers
//!
//! Wraps a caller-owned byte slice. One byte is always reserved for the
//! trailing NUL so the contents can be handed to C-style UART drivers as-is.

use super::ConsoleError;

/// Output buffer, always NUL-terminated when capacity > 0
pub struct OutputBuffer<'b> {
    buf: &'b mut [u8],
    len: usize,
}

impl<'b> OutputBuffer<'b> {
    /// Wrap `buf` and clear it to the empty string
    pub fn new(buf: &'b mut [u8]) -> Self {
        let mut out = Self { buf, len: 0 };
        out.clear();
        out
    }

    /// Reset to the empty string
    pub fn clear(&mut self) {
        self.len = 0;
        if let Some(first) = self.buf.first_mut() {
            *first = 0;
        }
    }

    /// Total size of the underlying buffer, terminator included
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes written so far, terminator excluded
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes that can still be appended
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.len + 1)
    }

    /// Append `s` verbatim, or fail without writing anything
    pub fn append(&mut self, s: &str) -> Result<(), ConsoleError> {
        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Ok(());
        }
        if bytes.len() > self.remaining() {
            return Err(ConsoleError::BufferOverflow);
        }

        let end = self.len + bytes.len();
        self.buf[self.len..end].copy_from_slice(bytes);
        self.buf[end] = 0;
        self.len = end;
        Ok(())
    }

    /// Contents as text
    pub fn as_str(&self) -> &str {
        // Only whole `&str`s are ever appended
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Contents including the terminator (empty when capacity is zero)
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.buf.is_empty() {
            &[]
        } else {
            &self.buf[..=self.len]
        }
    }
}

impl core::fmt::Write for OutputBuffer<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.append(s).map_err(|_| core::fmt::Error)
    }
}
