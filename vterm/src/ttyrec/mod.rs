// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ttyrec replay: reconstruct a recorded byte stream through the emulator
//! and emit the session as a plain transcript.
//!
//! A ttyrec stream is a sequence of frames, each a little-endian 12-byte
//! header followed by the payload:
//!
//! ```text
//! ┌────────────┬─────────────┬────────────┬───────────────┐
//! │ sec: u32 LE│ usec: u32 LE│ len: u32 LE│ len bytes ... │
//! └────────────┴─────────────┴────────────┴───────────────┘
//! ```
//!
//! Replay feeds each payload through the UTF-8 decoder into the emulator;
//! rows scrolling off the screen stream into the transcript as they are
//! lost, stamped (under the datetime prefix) with the current frame's
//! wall-clock second. A truncated trailing frame is a soft error: replay
//! stops at the last complete frame and the condition is surfaced once.

pub mod replay;

pub use replay::*;

use crate::VtError;

/// Size of the frame header.
pub const FRAME_HEADER_LEN: usize = 12;

/// One parsed frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub sec: u32,
    pub usec: u32,
    pub len: u32,
}

impl FrameHeader {
    /// Parse the first [`FRAME_HEADER_LEN`] bytes of `bytes`.
    #[must_use]
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < FRAME_HEADER_LEN {
            return None;
        }
        let word = |at: usize| {
            u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };
        Some(Self {
            sec: word(0),
            usec: word(4),
            len: word(8),
        })
    }
}

/// Split the next frame off `input`: `Ok(None)` at clean end of input,
/// `Ok(Some((header, payload, rest)))` for a complete frame.
///
/// # Errors
///
/// [`VtError::Malformed`] when the remaining bytes are a partial header or
/// a payload shorter than the header promises.
pub fn split_frame(input: &[u8]) -> Result<Option<(FrameHeader, &[u8], &[u8])>, VtError> {
    if input.is_empty() {
        return Ok(None);
    }
    let header =
        FrameHeader::parse(input).ok_or(VtError::Malformed("truncated ttyrec header"))?;
    let body = &input[FRAME_HEADER_LEN..];
    let len = header.len as usize;
    if body.len() < len {
        return Err(VtError::Malformed("truncated ttyrec payload"));
    }
    let (payload, rest) = body.split_at(len);
    Ok(Some((header, payload, rest)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn frame(sec: u32, usec: u32, payload: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(FRAME_HEADER_LEN + payload.len());
        bytes.extend_from_slice(&sec.to_le_bytes());
        bytes.extend_from_slice(&usec.to_le_bytes());
        bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn test_parse_little_endian_header() {
        let bytes = frame(0x0102_0304, 7, b"abc");
        let header = FrameHeader::parse(&bytes).unwrap();
        assert_eq!(header.sec, 0x0102_0304);
        assert_eq!(header.usec, 7);
        assert_eq!(header.len, 3);
    }

    #[test]
    fn test_split_walks_frames() {
        let mut bytes = frame(1, 0, b"one");
        bytes.extend_from_slice(&frame(2, 0, b"two"));

        let (h1, p1, rest) = split_frame(&bytes).unwrap().unwrap();
        assert_eq!((h1.sec, p1), (1, &b"one"[..]));
        let (h2, p2, rest) = split_frame(rest).unwrap().unwrap();
        assert_eq!((h2.sec, p2), (2, &b"two"[..]));
        assert!(split_frame(rest).unwrap().is_none());
    }

    #[test]
    fn test_truncation_is_an_error() {
        let bytes = frame(1, 0, b"payload");
        assert!(split_frame(&bytes[..5]).is_err()); // partial header
        assert!(split_frame(&bytes[..15]).is_err()); // partial payload
    }
}
