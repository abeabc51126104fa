// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Renderers: serialize a [`Screen`](crate::Screen) to JSON, ANSI text, or
//! a plain transcript, streaming through a caller-owned [`BufferSink`].
//!
//! All renderers are read-only over the screen and idempotent: rendering
//! the same screen twice yields byte-identical output.

pub mod ansi;
pub mod buffer_sink;
pub mod json;
pub mod transcript;

pub use ansi::*;
pub use buffer_sink::*;
pub use json::json_render;
pub use transcript::*;
