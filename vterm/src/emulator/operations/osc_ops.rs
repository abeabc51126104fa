// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Operating System Command dispatch.
//!
//! `ESC ] code ; text` terminated by BEL or ST. Codes 0/1/2 set the window
//! title; code 4 sets a 256-color palette entry — it is parsed and consumed
//! (renderers resolve against a caller-supplied palette, so the entry is
//! not persisted). Anything else is consumed without corrupting state.

use super::super::{VtEmulator, protocols::esc_codes};
use crate::cell::Rgb;

/// Complete the OSC in flight.
pub fn dispatch(emulator: &mut VtEmulator) {
    let code = emulator.osc_code;
    let text = std::mem::take(&mut emulator.osc_text);
    match code {
        esc_codes::OSC_TITLE_AND_ICON | esc_codes::OSC_ICON | esc_codes::OSC_TITLE => {
            emulator.set_window_title(&text);
        }
        esc_codes::OSC_SET_PALETTE => set_palette_entry(&text),
        other => {
            tracing::debug!(code = other, "OSC ignored");
        }
    }
}

/// OSC 4 payload: `index ; colorspec` where the spec is `rgb:RR/GG/BB` or
/// `#RRGGBB`.
fn set_palette_entry(text: &[u32]) {
    let payload: String = text
        .iter()
        .filter_map(|&cp| char::from_u32(cp))
        .collect();
    let Some((index, spec)) = payload.split_once(';') else {
        tracing::debug!(%payload, "OSC 4: missing color spec");
        return;
    };
    let Ok(index) = index.parse::<u8>() else {
        tracing::debug!(%payload, "OSC 4: bad palette index");
        return;
    };
    match parse_color_spec(spec) {
        Some(color) => {
            tracing::debug!(index, ?color, "OSC 4 palette entry parsed (not persisted)");
        }
        None => tracing::debug!(%payload, "OSC 4: unparseable color spec"),
    }
}

pub(crate) fn parse_color_spec(spec: &str) -> Option<Rgb> {
    if let Some(body) = spec.strip_prefix("rgb:") {
        let mut channels = body.split('/');
        let red = u8::from_str_radix(channels.next()?, 16).ok()?;
        let green = u8::from_str_radix(channels.next()?, 16).ok()?;
        let blue = u8::from_str_radix(channels.next()?, 16).ok()?;
        if channels.next().is_some() {
            return None;
        }
        return Some(Rgb::new(red, green, blue));
    }
    if let Some(body) = spec.strip_prefix('#') {
        if body.len() != 6 {
            return None;
        }
        let red = u8::from_str_radix(&body[0..2], 16).ok()?;
        let green = u8::from_str_radix(&body[2..4], 16).ok()?;
        let blue = u8::from_str_radix(&body[4..6], 16).ok()?;
        return Some(Rgb::new(red, green, blue));
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_color_spec_formats() {
        assert_eq!(parse_color_spec("rgb:aa/bb/cc"), Some(Rgb::new(0xAA, 0xBB, 0xCC)));
        assert_eq!(parse_color_spec("#aabbcc"), Some(Rgb::new(0xAA, 0xBB, 0xCC)));
        assert_eq!(parse_color_spec("#abc"), None);
        assert_eq!(parse_color_spec("rgb:aa/bb"), None);
        assert_eq!(parse_color_spec("cornflower"), None);
    }

    #[test]
    fn test_osc_4_is_consumed_without_state_damage() {
        let mut emulator = VtEmulator::new(3, 10).unwrap();
        emulator.receive_chars("\x1b]4;1;rgb:aa/bb/cc\x07ok".chars().map(u32::from));
        // The sequence was swallowed; the following text displays normally.
        assert_eq!(emulator.screen().screen_lines()[0].len(), 2);
        assert!(emulator.window_title().is_empty());
    }
}
