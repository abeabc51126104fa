// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The VT emulator: a deterministic state machine that consumes decoded
//! code points and drives a [`Screen`].
//!
//! # Architecture
//!
//! ```text
//! bytes → Utf8Decoder → code points → VtEmulator::receive_char
//!                                           ↓
//!                              state machine (performer.rs)
//!                                           ↓
//!                         operations/* thin shims (per concern)
//!                                           ↓
//!                                   Screen mutations
//! ```
//!
//! The emulator owns the screen, the window title, and a pluggable log
//! callback. It never writes to stdio: unrecognized sequences are reported
//! through the callback as `Undecodable sequence: \x1b[324a` (ESC rendered
//! as `\x1b`, everything else literal), and ambient diagnostics go through
//! `tracing`.
//!
//! The implementation mirrors the screen split, one shim file per concern:
//!
//! ```text
//! emulator/operations/         screen/
//! ├── cursor_ops        →      ├── cursor_ops
//! ├── char_ops          →      ├── edit_ops / erase_ops
//! ├── line_ops          →      ├── scroll_ops
//! ├── margin_ops        →      ├── scroll_ops
//! ├── mode_ops          →      ├── mod / buffer_ops
//! ├── scroll_ops        →      ├── scroll_ops
//! ├── sgr_ops           →      ├── mod (attributes)
//! ├── osc_ops           →      └── (emulator-owned title)
//! └── terminal_ops      →      buffer_ops (reset, resize, DECALN)
//! ```

pub mod char_class;
pub mod operations;
pub mod params;
pub mod performer;
pub mod protocols;

pub use params::CsiParams;

use crate::{LineSaver, Screen, VtError};

/// Maximum number of code points kept in the window title.
pub const MAX_TITLE_LEN: usize = 255;

/// Cap on the raw code points retained for the undecodable-sequence
/// diagnostic.
const MAX_SEQ_DIAGNOSTIC: usize = 64;

/// Diagnostic sink: `(message)` per event. The emulator never writes to
/// stdio.
pub type LogFn = Box<dyn FnMut(&str)>;

/// Parser state. One code point advances the machine at most one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum State {
    /// Printable code points display; controls dispatch; ESC leaves.
    #[default]
    Ground,
    /// After ESC: the next code point selects the sequence family.
    Escape,
    /// After `ESC #`: DEC line attributes.
    EscapeHash,
    /// After `ESC %`: coding-system selection, one code point consumed.
    EscapePercent,
    /// After an SCS introducer: one code point designates the set.
    Scs { slot: usize },
    /// Collecting CSI parameters and the final byte.
    Csi,
    /// Collecting the OSC selector number.
    OscNumber,
    /// Collecting the OSC payload until BEL or ST.
    OscString,
    /// Saw ESC inside an OSC; `\` completes ST, anything else aborts.
    OscEsc,
}

/// A VT/xterm-compatible terminal emulator.
pub struct VtEmulator {
    pub(crate) screen: Screen,
    pub(crate) title: Vec<u32>,
    pub(crate) log_fn: Option<LogFn>,

    /// DECCKM: application cursor keys. Tracked for completeness; the
    /// engine generates no key sequences itself.
    pub(crate) app_cursor_keys: bool,

    pub(crate) state: State,
    /// Raw code points of the sequence in flight, for diagnostics.
    pub(crate) seq: Vec<u32>,
    pub(crate) params: CsiParams,
    pub(crate) private_marker: bool,
    /// A CSI collected a marker this engine does not interpret (`>`, `=`,
    /// `<`, `!`); the whole sequence is reported instead of dispatched.
    pub(crate) csi_ignored: bool,
    pub(crate) osc_code: u32,
    pub(crate) osc_text: Vec<u32>,
}

impl std::fmt::Debug for VtEmulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VtEmulator")
            .field("screen", &self.screen)
            .field("state", &self.state)
            .field("title_len", &self.title.len())
            .finish_non_exhaustive()
    }
}

impl VtEmulator {
    /// Create an emulator with a `lines × columns` screen.
    ///
    /// # Errors
    ///
    /// [`VtError::InvalidArgument`] for out-of-range dimensions.
    pub fn new(lines: usize, columns: usize) -> Result<Self, VtError> {
        Ok(Self {
            screen: Screen::new(lines, columns)?,
            title: Vec::new(),
            log_fn: None,
            app_cursor_keys: false,
            state: State::Ground,
            seq: Vec::new(),
            params: CsiParams::default(),
            private_marker: false,
            csi_ignored: false,
            osc_code: 0,
            osc_text: Vec::new(),
        })
    }

    /// Create an emulator whose screen reports scrolled-off rows to
    /// `saver`.
    ///
    /// # Errors
    ///
    /// [`VtError::InvalidArgument`] for out-of-range dimensions.
    pub fn with_line_saver(
        lines: usize,
        columns: usize,
        saver: LineSaver,
    ) -> Result<Self, VtError> {
        let mut emulator = Self::new(lines, columns)?;
        emulator.screen.set_line_saver(saver);
        Ok(emulator)
    }

    /// The current screen (primary or alternate, whichever is active).
    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Install the diagnostic callback.
    pub fn set_log_fn(&mut self, log_fn: LogFn) {
        self.log_fn = Some(log_fn);
    }

    /// The stored window title as a code-point view.
    #[must_use]
    pub fn window_title(&self) -> &[u32] {
        &self.title
    }

    /// Store a window title, truncated to [`MAX_TITLE_LEN`] code points.
    pub fn set_window_title(&mut self, title: &[u32]) {
        self.title.clear();
        self.title
            .extend_from_slice(&title[..title.len().min(MAX_TITLE_LEN)]);
    }

    /// Whether DECCKM (application cursor keys) is set.
    #[must_use]
    pub fn app_cursor_keys(&self) -> bool {
        self.app_cursor_keys
    }

    /// Resize the screen in place.
    ///
    /// # Errors
    ///
    /// [`VtError::InvalidArgument`] for out-of-range dimensions.
    pub fn set_screen_size(&mut self, lines: usize, columns: usize) -> Result<(), VtError> {
        self.screen.set_screen_size(lines, columns)
    }

    /// Feed a sequence of already-decoded code points.
    pub fn receive_chars<I: IntoIterator<Item = u32>>(&mut self, code_points: I) {
        for cp in code_points {
            self.receive_char(cp);
        }
    }

    // Internals shared with the performer and operations.

    pub(crate) fn log(&mut self, message: &str) {
        if let Some(log_fn) = self.log_fn.as_mut() {
            log_fn(message);
        }
    }

    /// Record a raw code point of the sequence in flight.
    pub(crate) fn track_seq(&mut self, cp: u32) {
        if self.seq.len() < MAX_SEQ_DIAGNOSTIC {
            self.seq.push(cp);
        }
    }

    /// Report the sequence in flight as undecodable and resync.
    pub(crate) fn report_undecodable(&mut self) {
        let mut message = String::from("Undecodable sequence: ");
        for &cp in &self.seq {
            if cp == protocols::esc_codes::ESC {
                message.push_str("\\x1b");
            } else if let Some(ch) = char::from_u32(cp) {
                message.push(ch);
            }
        }
        tracing::warn!(%message, "unrecognized escape sequence");
        self.log(&message);
        self.state = State::Ground;
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    fn feed(emulator: &mut VtEmulator, text: &str) {
        emulator.receive_chars(text.chars().map(u32::from));
    }

    #[test]
    fn test_undecodable_sequence_goes_to_log_callback() {
        let mut emulator = VtEmulator::new(3, 10).unwrap();
        let messages = Rc::new(RefCell::new(Vec::new()));
        let sink = messages.clone();
        emulator.set_log_fn(Box::new(move |msg| sink.borrow_mut().push(msg.to_owned())));

        feed(&mut emulator, "\x1b[324a");
        assert_eq!(messages.borrow().last().unwrap(), "Undecodable sequence: \\x1b[324a");

        // The parser resynced: ordinary text still displays.
        feed(&mut emulator, "ok");
        assert_eq!(emulator.screen().screen_lines()[0].len(), 2);
    }

    #[test]
    fn test_title_is_truncated_to_255_code_points() {
        let mut emulator = VtEmulator::new(3, 10).unwrap();
        let long: Vec<u32> = (0..400u32).map(|i| u32::from('a') + (i % 26)).collect();
        emulator.set_window_title(&long);
        assert_eq!(emulator.window_title().len(), MAX_TITLE_LEN);
    }
}
