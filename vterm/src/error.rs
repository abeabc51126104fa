// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error type shared by the emulator, the renderers, and ttyrec replay.
//!
//! The library never aborts and never writes to stdio: every failure is
//! either returned as a [`VtError`], surfaced through the emulator's log
//! callback, or traced. [`VtError::code`] gives the stable integer mapping
//! used when the library sits behind a foreign-function boundary.

use miette::Diagnostic;
use thiserror::Error;

/// All failure kinds, in order of severity.
#[derive(Debug, Error, Diagnostic)]
pub enum VtError {
    /// A caller-supplied argument is out of contract (zero or oversized
    /// screen dimensions, an empty render region, and the like).
    #[error("invalid argument: {0}")]
    #[diagnostic(code(r3bl_vterm::invalid_argument))]
    InvalidArgument(&'static str),

    /// A [`BufferSink`] refused to grow. Callers can retry with a smaller
    /// cap or a different sink.
    ///
    /// [`BufferSink`]: crate::BufferSink
    #[error("out of memory: sink refused to grow to {requested} bytes")]
    #[diagnostic(code(r3bl_vterm::out_of_memory))]
    OutOfMemory {
        /// Total capacity the renderer asked for.
        requested: usize,
    },

    /// Malformed input data. Not fatal for the parser (it logs and resyncs);
    /// ttyrec replay stops at the first truncated frame and reports this.
    #[error("malformed input: {0}")]
    #[diagnostic(code(r3bl_vterm::malformed))]
    Malformed(&'static str),

    /// System-level I/O failure, carried through from a boundary shim.
    #[error("i/o error: errno {errno}")]
    #[diagnostic(code(r3bl_vterm::io))]
    Io {
        /// Raw OS error number.
        errno: i32,
    },
}

impl VtError {
    /// Stable integer code for foreign-function boundaries: `0` is success
    /// (never produced here), `-2` invalid argument, `-3` out of memory,
    /// `-1` unspecified internal error, positive values are `errno`.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            VtError::InvalidArgument(_) => -2,
            VtError::OutOfMemory { .. } => -3,
            VtError::Malformed(_) => -1,
            VtError::Io { errno } => *errno,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_codes() {
        assert_eq!(VtError::InvalidArgument("size").code(), -2);
        assert_eq!(VtError::OutOfMemory { requested: 1 }.code(), -3);
        assert_eq!(VtError::Malformed("frame").code(), -1);
        assert_eq!(VtError::Io { errno: 2 }.code(), 2);
    }
}
