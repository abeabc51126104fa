// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI renderer: the screen as SGR-escaped text.
//!
//! Output shape:
//!
//! 1. `ESC ]` + title + `BEL` (a title-only OSC, no selector number — kept
//!    source-exact; downstream consumers that want `0;` must add it).
//! 2. Per cell: when `(fg, bg, rendition)` differs from the previous cell,
//!    `ESC [ 0` then `;1` `;3` `;4` `;5` `;6` for bold/italic/underline/
//!    blink/reverse (fixed order), then `;38;2;R;G;B` if the foreground
//!    changed and `;48;2;R;G;B` if the background changed, then `m`. The
//!    comparison seed is the default cell and carries across rows.
//! 3. The cell text: `\` and `"` backslash-escaped (retained for
//!    embeddability), non-real cells as one space, extended cells fully
//!    expanded.
//! 4. `\n` after every row; the raw extra payload at the end.

use super::{buffer_sink::{BufferSink, GROW_CHUNK, SinkWriter},
            json::write_cell};
use crate::{Palette, Screen, VtError,
            cell::{Cell, CharacterColor, Rendition}};

// Worst case for one cell's escape plus text, approximately.
const MAX_BYTES_PER_CELL: usize = 64;

/// Render `screen` as ANSI text into `sink`. Never mutates the screen;
/// byte-identical on repeated calls.
///
/// # Errors
///
/// [`VtError::OutOfMemory`] when the sink refuses to grow.
pub fn ansi_render(
    title: &[u32],
    screen: &Screen,
    palette: &Palette,
    sink: &mut dyn BufferSink,
    extra_data: &[u8],
) -> Result<(), VtError> {
    let mut w = SinkWriter::new(sink);
    w.prepare(GROW_CHUNK, (title.len() * 4 + 512).max(GROW_CHUNK))?;

    w.write(b"\x1b]")?;
    for &cp in title {
        w.write_code_point_escaped(cp)?;
    }
    w.write_byte(0x07)?;

    let extended = screen.extended_char_table();
    let mut previous = Cell::default();

    for line in screen.screen_lines() {
        for &cell in line {
            w.prepare(MAX_BYTES_PER_CELL, GROW_CHUNK)?;

            let same_fg = cell.fg == previous.fg;
            let same_bg = cell.bg == previous.bg;
            let same_rendition = cell.rendition == previous.rendition;

            if !(same_fg && same_bg && same_rendition) {
                w.write(b"\x1b[0")?;
                let rendition = cell.rendition;
                if rendition.contains(Rendition::BOLD) {
                    w.write(b";1")?;
                }
                if rendition.contains(Rendition::ITALIC) {
                    w.write(b";3")?;
                }
                if rendition.contains(Rendition::UNDERLINE) {
                    w.write(b";4")?;
                }
                if rendition.contains(Rendition::BLINK) {
                    w.write(b";5")?;
                }
                if rendition.contains(Rendition::REVERSE) {
                    w.write(b";6")?;
                }
                if !same_fg {
                    write_color(&mut w, b'3', cell.fg, palette)?;
                }
                if !same_bg {
                    write_color(&mut w, b'4', cell.bg, palette)?;
                }
                w.write_byte(b'm')?;
            }

            write_cell(&mut w, cell, extended)?;
            previous = cell;
        }
        w.prepare(1, GROW_CHUNK)?;
        w.write_byte(b'\n')?;
    }

    if !extra_data.is_empty() {
        w.write(extra_data)?;
    }

    w.finalize();
    Ok(())
}

/// `;38;2;R;G;B` / `;48;2;R;G;B`, resolved through the palette (dim
/// included).
fn write_color<S: BufferSink>(
    w: &mut SinkWriter<S>,
    command: u8,
    color: CharacterColor,
    palette: &Palette,
) -> Result<(), VtError> {
    let rgb = color.resolve(palette);
    w.write_byte(b';')?;
    w.write_byte(command)?;
    w.write(b"8;2;")?;
    w.write_number(u64::from(rgb.red))?;
    w.write_byte(b';')?;
    w.write_number(u64::from(rgb.green))?;
    w.write_byte(b';')?;
    w.write_number(u64::from(rgb.blue))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{VGA_PALETTE, VecSink, VtEmulator};

    fn render(emulator: &VtEmulator) -> String {
        let mut sink = VecSink::new();
        ansi_render(
            emulator.window_title(),
            emulator.screen(),
            &VGA_PALETTE,
            &mut sink,
            b"",
        )
        .unwrap();
        String::from_utf8(sink.into_bytes()).unwrap()
    }

    fn feed(emulator: &mut VtEmulator, text: &str) {
        emulator.receive_chars(text.chars().map(u32::from));
    }

    #[test]
    fn test_title_and_default_text_emit_no_leading_escape() {
        let mut emulator = VtEmulator::new(2, 10).unwrap();
        feed(&mut emulator, "\x1b]2;T\x07ab");
        // Default-styled cells match the seed: the text follows the title
        // OSC directly.
        assert_eq!(render(&emulator), "\x1b]T\x07ab\n\n");
    }

    #[test]
    fn test_style_change_resets_then_restates() {
        let mut emulator = VtEmulator::new(1, 10).unwrap();
        feed(&mut emulator, "a\x1b[1;31mb");
        assert_eq!(
            render(&emulator),
            "\x1b]\x07a\x1b[0;1;38;2;178;24;24mb\n"
        );
    }

    #[test]
    fn test_reverse_uses_code_six() {
        let mut emulator = VtEmulator::new(1, 10).unwrap();
        feed(&mut emulator, "\x1b[7mx");
        assert_eq!(render(&emulator), "\x1b]\x07\x1b[0;6mx\n");
    }

    #[test]
    fn test_wide_padding_renders_as_space() {
        let mut emulator = VtEmulator::new(1, 10).unwrap();
        emulator.receive_char(0xAC00); // 가 (wide)
        feed(&mut emulator, "b");
        assert_eq!(render(&emulator), "\x1b]\x07가 b\n");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let mut emulator = VtEmulator::new(3, 12).unwrap();
        feed(&mut emulator, "x\x1b[44my\x1b[0mz");
        assert_eq!(render(&emulator), render(&emulator));
    }
}
