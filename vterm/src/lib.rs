// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_vterm`
//!
//! A VT100/xterm-compatible terminal emulator engine, pure in-memory: feed
//! it the byte stream a program writes to what it believes is a DEC/xterm
//! terminal, and it maintains a snapshot of the visible screen — a grid of
//! styled cells plus cursor, window title, scroll regions, mode flags, and
//! an alternate buffer. The snapshot serializes to a structured JSON form
//! or to SGR-escaped ANSI text, and recorded sessions (ttyrec) replay into
//! plain transcripts.
//!
//! ## Pipeline
//!
//! ```text
//! bytes ──▶ Utf8Decoder ──▶ VtEmulator ──▶ Screen ──▶ renderers ──▶ BufferSink
//!           (code points)   (state machine) (cell grid)  json / ansi /
//!                                                        transcript
//! ```
//!
//! ## Example
//!
//! ```
//! use r3bl_vterm::{VGA_PALETTE, VecSink, VtEmulator, json_render};
//!
//! let mut emulator = VtEmulator::new(3, 10)?;
//! emulator.receive_chars("ABC".chars().map(u32::from));
//!
//! let mut sink = VecSink::new();
//! json_render(
//!     emulator.window_title(),
//!     emulator.screen(),
//!     &VGA_PALETTE,
//!     &mut sink,
//!     b"",
//! )?;
//! assert!(sink.as_bytes().starts_with(br#"{"x":3,"y":0"#));
//! # Ok::<(), r3bl_vterm::VtError>(())
//! ```
//!
//! ## Boundaries
//!
//! No pty, no signals, no drawing, no file I/O, no stdio: diagnostics go
//! through a pluggable log callback (or `tracing`), failures through
//! [`VtError`], and all output through the caller-owned [`BufferSink`].
//! Every emulator instance is an independent, single-threaded state
//! machine.

pub mod cell;
pub mod decoder;
pub mod emulator;
pub mod error;
pub mod render;
pub mod screen;
pub mod ttyrec;

#[cfg(test)]
mod conformance_tests;

pub use cell::*;
pub use decoder::*;
pub use emulator::{CsiParams, LogFn, MAX_TITLE_LEN, VtEmulator};
pub use error::*;
pub use render::*;
pub use screen::*;
pub use ttyrec::*;
