// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End-to-end conformance tests: escape streams in, exact bytes out.
//!
//! The unit tests beside each module cover single operations; the tests
//! here drive the full pipeline (decoder → emulator → screen → renderer)
//! the way a recorded session would, and pin exact output bytes.

pub mod test_emulator_scenarios;
pub mod test_rendering;
pub mod test_state_properties;

use crate::{VGA_PALETTE, VecSink, VtEmulator, json_render};

/// Feed a UTF-8 string through the real decoder into the emulator.
pub fn feed(emulator: &mut VtEmulator, text: &str) {
    let mut decoder = crate::Utf8Decoder::new();
    decoder.decode(text.as_bytes(), |cp| emulator.receive_char(cp));
    decoder.end_decode(|cp| emulator.receive_char(cp));
}

/// JSON render against the VGA palette, as a string.
pub fn render_json(emulator: &VtEmulator, extra: &[u8]) -> String {
    let mut sink = VecSink::new();
    json_render(
        emulator.window_title(),
        emulator.screen(),
        &VGA_PALETTE,
        &mut sink,
        extra,
    )
    .unwrap();
    String::from_utf8(sink.into_bytes()).unwrap()
}

/// The stored text of row `y`, code points only.
pub fn row_text(emulator: &VtEmulator, y: usize) -> String {
    emulator.screen().screen_lines()[y]
        .iter()
        .map(|c| {
            if c.is_real {
                char::from_u32(c.code_point).unwrap_or(' ')
            } else {
                ' '
            }
        })
        .collect()
}
