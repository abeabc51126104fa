// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Caller-owned output buffers for the renderers.
//!
//! A renderer writes only through a [`BufferSink`]: it asks for capacity up
//! front, writes into the granted buffer, and marks the final length when
//! done. Allocation refusal is an error the renderer propagates — never a
//! panic. The renderer keeps no reference to the sink after returning.
//!
//! Two implementations ship here: [`VecSink`], backed by a growable byte
//! vector, and [`CappedSink`], which refuses to grow past a byte cap
//! (4 GiB unless configured otherwise).

use crate::VtError;

/// Granularity renderers use when asking for more room.
pub(crate) const GROW_CHUNK: usize = 4096;

/// Default cap for [`CappedSink`]: 4 GiB.
pub const DEFAULT_SINK_CAP: u64 = 4 << 30;

/// A growable byte buffer owned by the caller.
pub trait BufferSink {
    /// The currently usable buffer. Infallible.
    fn buf(&mut self) -> &mut [u8];

    /// Ensure the buffer holds at least `bytes_used + extra` bytes,
    /// preserving the first `bytes_used`. The sink may grant more than
    /// asked.
    ///
    /// # Errors
    ///
    /// [`VtError::OutOfMemory`] when the sink cannot or will not grow that
    /// far; the renderer aborts with this error.
    fn grow(&mut self, bytes_used: usize, extra: usize) -> Result<(), VtError>;

    /// Mark the final written length.
    fn finalize(&mut self, bytes_used: usize);

    /// Reset the length to zero; capacity is implementation-defined.
    fn clear(&mut self);
}

impl<T: BufferSink + ?Sized> BufferSink for &mut T {
    fn buf(&mut self) -> &mut [u8] {
        (**self).buf()
    }

    fn grow(&mut self, bytes_used: usize, extra: usize) -> Result<(), VtError> {
        (**self).grow(bytes_used, extra)
    }

    fn finalize(&mut self, bytes_used: usize) {
        (**self).finalize(bytes_used)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

/// The default sink: a plain growable byte vector.
#[derive(Debug, Default)]
pub struct VecSink {
    data: Vec<u8>,
}

impl VecSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalized content.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl BufferSink for VecSink {
    fn buf(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn grow(&mut self, bytes_used: usize, extra: usize) -> Result<(), VtError> {
        let requested = bytes_used
            .checked_add(extra)
            .ok_or(VtError::OutOfMemory {
                requested: usize::MAX,
            })?;
        if requested > self.data.len() {
            let additional = requested - self.data.len();
            self.data
                .try_reserve(additional)
                .map_err(|_| VtError::OutOfMemory { requested })?;
            self.data.resize(requested, 0);
        }
        Ok(())
    }

    fn finalize(&mut self, bytes_used: usize) {
        self.data.truncate(bytes_used);
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

/// A sink that refuses to grow past a byte cap.
#[derive(Debug, Default)]
pub struct CappedSink<S: BufferSink = VecSink> {
    inner: S,
    cap: Option<u64>,
}

impl CappedSink<VecSink> {
    /// A vector-backed sink with the default 4 GiB cap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cap(DEFAULT_SINK_CAP)
    }

    /// A vector-backed sink with an explicit cap.
    #[must_use]
    pub fn with_cap(cap: u64) -> Self {
        Self {
            inner: VecSink::new(),
            cap: Some(cap),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.inner.into_bytes()
    }
}

impl<S: BufferSink> BufferSink for CappedSink<S> {
    fn buf(&mut self) -> &mut [u8] {
        self.inner.buf()
    }

    fn grow(&mut self, bytes_used: usize, extra: usize) -> Result<(), VtError> {
        let requested = bytes_used as u64 + extra as u64;
        if requested > self.cap.unwrap_or(DEFAULT_SINK_CAP) {
            return Err(VtError::OutOfMemory {
                requested: usize::try_from(requested).unwrap_or(usize::MAX),
            });
        }
        self.inner.grow(bytes_used, extra)
    }

    fn finalize(&mut self, bytes_used: usize) {
        self.inner.finalize(bytes_used);
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

/// Streaming writer over a sink: tracks how much is written, grows ahead of
/// need, and knows the escaping rules shared by the renderers.
#[derive(Debug)]
pub struct SinkWriter<S: BufferSink> {
    sink: S,
    used: usize,
}

impl<S: BufferSink> SinkWriter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, used: 0 }
    }

    #[must_use]
    pub fn bytes_used(&self) -> usize {
        self.used
    }

    fn remaining(&mut self) -> usize {
        self.sink.buf().len() - self.used
    }

    /// Ensure at least `min_remaining` writable bytes, growing by
    /// `extra.max(min_remaining)` when short.
    ///
    /// # Errors
    ///
    /// Propagates the sink's [`VtError::OutOfMemory`].
    pub fn prepare(&mut self, min_remaining: usize, extra: usize) -> Result<(), VtError> {
        if self.remaining() < min_remaining {
            self.sink.grow(self.used, extra.max(min_remaining))?;
        }
        Ok(())
    }

    /// Append raw bytes, growing as needed.
    ///
    /// # Errors
    ///
    /// Propagates the sink's [`VtError::OutOfMemory`].
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), VtError> {
        if self.remaining() < bytes.len() {
            self.sink.grow(self.used, bytes.len().max(GROW_CHUNK))?;
        }
        let buf = self.sink.buf();
        buf[self.used..self.used + bytes.len()].copy_from_slice(bytes);
        self.used += bytes.len();
        Ok(())
    }

    /// Append one byte.
    ///
    /// # Errors
    ///
    /// Propagates the sink's [`VtError::OutOfMemory`].
    pub fn write_byte(&mut self, byte: u8) -> Result<(), VtError> {
        self.write(&[byte])
    }

    /// Append a decimal integer.
    ///
    /// # Errors
    ///
    /// Propagates the sink's [`VtError::OutOfMemory`].
    pub fn write_number(&mut self, value: u64) -> Result<(), VtError> {
        let mut digits = [0u8; 20];
        let mut at = digits.len();
        let mut value = value;
        loop {
            at -= 1;
            digits[at] = b'0' + (value % 10) as u8;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        self.write(&digits[at..])
    }

    /// Append a code point as UTF-8; anything that is not a Unicode scalar
    /// becomes U+FFFD.
    ///
    /// # Errors
    ///
    /// Propagates the sink's [`VtError::OutOfMemory`].
    pub fn write_code_point(&mut self, cp: u32) -> Result<(), VtError> {
        let ch = char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER);
        let mut utf8 = [0u8; 4];
        self.write(ch.encode_utf8(&mut utf8).as_bytes())
    }

    /// Append a code point with `\` and `"` backslash-escaped, as both the
    /// JSON and the ANSI renderer require.
    ///
    /// # Errors
    ///
    /// Propagates the sink's [`VtError::OutOfMemory`].
    pub fn write_code_point_escaped(&mut self, cp: u32) -> Result<(), VtError> {
        match cp {
            0x5C => self.write(b"\\\\"),
            0x22 => self.write(b"\\\""),
            _ => self.write_code_point(cp),
        }
    }

    /// Drop the last written byte (used to remove a trailing separator).
    pub fn pop_byte(&mut self) {
        debug_assert!(self.used > 0);
        self.used = self.used.saturating_sub(1);
    }

    /// Mark the final length and hand the sink back.
    pub fn finalize(mut self) -> S {
        let used = self.used;
        self.sink.finalize(used);
        self.sink
    }
}
