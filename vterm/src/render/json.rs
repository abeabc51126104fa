// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! JSON renderer.
//!
//! Emits one compact JSON object (exact key order, no whitespace):
//!
//! ```text
//! {"x":3,"y":0,              x omitted and y:-1 when the cursor is hidden
//!  "lines":3,"columns":10,
//!  "title":"…",
//!  "style":{"r":0,"f":<fg 0xRRGGBB>,"b":<bg 0xRRGGBB>},
//!  "data":[ [[{run},{run}]], … ],   one [[…]] per row; the outer slot is
//!                                   reserved for future row properties
//!  "extra":<raw json>}              only when extra data is supplied
//! ```
//!
//! A run object may carry `"r"` (bold|italic<<1|underline<<2|blink<<3),
//! `"f"`/`"b"` (resolved 0xRRGGBB), and `"s"` (the run's text). Runs are
//! maximal spans of cells whose `(fg, bg, rendition ∩ mask)` matches the
//! previous cell; the comparison seed is the default cell and carries
//! across rows. Attributes equal to the previous run's are omitted.

use super::buffer_sink::{BufferSink, GROW_CHUNK, SinkWriter};
use crate::{Palette, Screen, VtError,
            cell::{Cell, ExtendedCharTable, Rendition}};

/// The rendition bits the JSON renderer distinguishes.
pub const JSON_RENDITION_MASK: Rendition = Rendition::BOLD
    .union(Rendition::ITALIC)
    .union(Rendition::UNDERLINE)
    .union(Rendition::BLINK);

// Worst case for one cell plus a fresh run header, approximately.
const MAX_BYTES_PER_CELL: usize = 111;

/// Render `screen` as JSON into `sink`. `extra_data`, when non-empty, must
/// be well-formed JSON; it is appended raw under the `"extra"` key.
///
/// The screen is not mutated; rendering the same screen twice produces
/// byte-identical output.
///
/// # Errors
///
/// [`VtError::OutOfMemory`] when the sink refuses to grow.
pub fn json_render(
    title: &[u32],
    screen: &Screen,
    palette: &Palette,
    sink: &mut dyn BufferSink,
    extra_data: &[u8],
) -> Result<(), VtError> {
    let mut w = SinkWriter::new(sink);
    w.prepare(GROW_CHUNK, (title.len() * 4 + 512).max(GROW_CHUNK))?;

    if screen.has_cursor_visible() {
        w.write(b"{\"x\":")?;
        w.write_number(screen.cursor_x() as u64)?;
        w.write(b",\"y\":")?;
        w.write_number(screen.cursor_y() as u64)?;
    } else {
        w.write(b"{\"y\":-1")?;
    }
    w.write(b",\"lines\":")?;
    w.write_number(screen.lines() as u64)?;
    w.write(b",\"columns\":")?;
    w.write_number(screen.columns() as u64)?;
    w.write(b",\"title\":\"")?;
    for &cp in title {
        w.write_code_point_escaped(cp)?;
    }
    w.write(b"\",\"style\":{\"r\":0,\"f\":")?;
    w.write_number(u64::from(palette[0].as_u32()))?;
    w.write(b",\"b\":")?;
    w.write_number(u64::from(palette[1].as_u32()))?;
    w.write(b"},\"data\":[")?;

    let extended = screen.extended_char_table();
    let mut previous = Cell::default();

    for line in screen.screen_lines() {
        w.write(b"[[{")?;
        let mut s_open = false;

        for &cell in line {
            w.prepare(MAX_BYTES_PER_CELL, GROW_CHUNK)?;

            let same_fg = cell.fg == previous.fg;
            let same_bg = cell.bg == previous.bg;
            let same_rendition = (cell.rendition & JSON_RENDITION_MASK)
                == (previous.rendition & JSON_RENDITION_MASK);

            if !(same_fg && same_bg && same_rendition) {
                if s_open {
                    w.write(b"\"},{")?;
                }
                if !same_rendition {
                    w.write(b"\"r\":")?;
                    w.write_number(u64::from(
                        (cell.rendition & JSON_RENDITION_MASK).bits(),
                    ))?;
                    w.write_byte(b',')?;
                }
                if !same_fg {
                    w.write(b"\"f\":")?;
                    w.write_number(u64::from(cell.fg.resolve(palette).as_u32()))?;
                    w.write_byte(b',')?;
                }
                if !same_bg {
                    w.write(b"\"b\":")?;
                    w.write_number(u64::from(cell.bg.resolve(palette).as_u32()))?;
                    w.write_byte(b',')?;
                }
                s_open = false;
            }

            if !s_open {
                s_open = true;
                w.write(b"\"s\":\"")?;
            }
            write_cell(&mut w, cell, extended)?;

            previous = cell;
        }

        w.prepare(8, GROW_CHUNK)?;
        if s_open {
            w.write_byte(b'"')?;
        }
        w.write(b"}]],")?;
    }
    // Replace the trailing row separator with the closing of "data".
    w.pop_byte();

    if extra_data.is_empty() {
        w.write(b"]}")?;
    } else {
        w.write(b"],\"extra\":")?;
        w.write(extra_data)?;
        w.write_byte(b'}')?;
    }

    w.finalize();
    Ok(())
}

/// One cell's characters: a space for non-real cells, the full interned
/// sequence for extended cells, the code point otherwise. `\` and `"` are
/// escaped.
pub(crate) fn write_cell<S: BufferSink>(
    w: &mut SinkWriter<S>,
    cell: Cell,
    extended: &ExtendedCharTable,
) -> Result<(), VtError> {
    if !cell.is_real {
        return w.write_byte(b' ');
    }
    if cell.is_extended() {
        for &cp in extended.get(cell.code_point) {
            w.write_code_point_escaped(cp)?;
        }
        return Ok(());
    }
    w.write_code_point_escaped(cell.code_point)
}
