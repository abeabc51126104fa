// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Transcript renderer: plain UTF-8 text of a row region, honoring wrap
//! continuation.
//!
//! A *logical* line is a run of rows chained by
//! [`LineProperty::WRAPPED`]: if the row before the region start is
//! wrapped, the walk steps back to the true beginning; if a row inside the
//! region is wrapped, the walk keeps going past the region end until the
//! continuation stops. Each logical line ends with `\n`. Non-real cells
//! come out as spaces and extended cells are fully expanded; no escaping.
//!
//! This renderer is built to be driven by the scrolled-line callback, so
//! that rows leaving the top of the scroll region stream out as they are
//! lost; with [`TranscriptPrefix::Datetime`] every logical line is prefixed
//! with the wall-clock `YYYY-MM-DD HH:MM:SS ` of the ttyrec frame being
//! replayed.

use chrono::TimeZone;

use super::buffer_sink::{BufferSink, GROW_CHUNK, SinkWriter};
use crate::{Screen, VtError,
            cell::ExtendedCharTable,
            screen::{LineProperty, ScreenLine}};

/// What to put in front of each logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranscriptPrefix {
    /// Bare text.
    #[default]
    None,
    /// `YYYY-MM-DD HH:MM:SS ` in local time.
    Datetime,
}

/// Streams logical lines of a screen (or of a scrolled-rows view) as plain
/// text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptWriter {
    prefix: TranscriptPrefix,
}

impl TranscriptWriter {
    #[must_use]
    pub fn new(prefix: TranscriptPrefix) -> Self {
        Self { prefix }
    }

    /// Write the logical lines covering rows `[start, end)` of `lines`.
    /// `clock_sec` is the wall-clock second stamped on each logical line
    /// under the datetime prefix.
    ///
    /// # Errors
    ///
    /// [`VtError::OutOfMemory`] when the sink refuses to grow.
    pub fn write_rows<S: BufferSink>(
        &self,
        lines: &[ScreenLine],
        properties: &[LineProperty],
        extended: &ExtendedCharTable,
        start: usize,
        end: usize,
        clock_sec: i64,
        w: &mut SinkWriter<S>,
    ) -> Result<(), VtError> {
        let total = lines.len();
        let end = end.min(total);
        let mut y = start.min(end);

        // Step back to the beginning of a continuation in progress.
        while y > 0 && properties[y - 1].contains(LineProperty::WRAPPED) {
            y -= 1;
        }

        while y < end {
            self.write_prefix(clock_sec, w)?;
            write_line_cells(&lines[y], extended, w)?;
            if properties[y].contains(LineProperty::WRAPPED) {
                loop {
                    y += 1;
                    if y >= total {
                        break;
                    }
                    write_line_cells(&lines[y], extended, w)?;
                    if !properties[y].contains(LineProperty::WRAPPED) {
                        break;
                    }
                }
            }
            y += 1;
            w.prepare(1, GROW_CHUNK)?;
            w.write_byte(b'\n')?;
        }
        Ok(())
    }

    fn write_prefix<S: BufferSink>(
        &self,
        clock_sec: i64,
        w: &mut SinkWriter<S>,
    ) -> Result<(), VtError> {
        if self.prefix != TranscriptPrefix::Datetime {
            return Ok(());
        }
        match chrono::Local.timestamp_opt(clock_sec, 0).single() {
            Some(stamp) => {
                let formatted = stamp.format("%Y-%m-%d %H:%M:%S ").to_string();
                w.write(formatted.as_bytes())
            }
            None => {
                tracing::warn!(clock_sec, "unrepresentable frame timestamp, no prefix");
                Ok(())
            }
        }
    }
}

/// Render rows `[y_start, y_end)` of `screen` as a plain transcript into
/// `sink`. The bounds clamp to the screen; the screen is not mutated.
///
/// # Errors
///
/// [`VtError::OutOfMemory`] when the sink refuses to grow.
pub fn transcript_render(
    screen: &Screen,
    y_start: usize,
    y_end: usize,
    sink: &mut dyn BufferSink,
) -> Result<(), VtError> {
    let mut w = SinkWriter::new(sink);
    TranscriptWriter::new(TranscriptPrefix::None).write_rows(
        screen.screen_lines(),
        screen.line_properties(),
        screen.extended_char_table(),
        y_start,
        y_end,
        0,
        &mut w,
    )?;
    w.finalize();
    Ok(())
}

fn write_line_cells<S: BufferSink>(
    line: &ScreenLine,
    extended: &ExtendedCharTable,
    w: &mut SinkWriter<S>,
) -> Result<(), VtError> {
    for cell in line {
        w.prepare(4, GROW_CHUNK)?;
        if !cell.is_real {
            w.write_byte(b' ')?;
        } else if cell.is_extended() {
            for &cp in extended.get(cell.code_point) {
                w.write_code_point(cp)?;
            }
        } else {
            w.write_code_point(cell.code_point)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{VecSink, VtEmulator};

    fn feed(emulator: &mut VtEmulator, text: &str) {
        emulator.receive_chars(text.chars().map(u32::from));
    }

    fn render_region(emulator: &VtEmulator, start: usize, end: usize) -> String {
        let mut sink = VecSink::new();
        transcript_render(emulator.screen(), start, end, &mut sink).unwrap();
        String::from_utf8(sink.into_bytes()).unwrap()
    }

    #[test]
    fn test_plain_lines() {
        let mut emulator = VtEmulator::new(3, 10).unwrap();
        feed(&mut emulator, "one\r\ntwo");
        assert_eq!(render_region(&emulator, 0, 2), "one\ntwo\n");
    }

    #[test]
    fn test_wrapped_rows_join_into_one_logical_line() {
        let mut emulator = VtEmulator::new(4, 5).unwrap();
        feed(&mut emulator, "abcdefghij\r\ntail");
        // Rows 0 and 1 are one logical line; "tail" follows on its own.
        assert_eq!(render_region(&emulator, 0, 4), "abcdefghij\ntail\n");
    }

    #[test]
    fn test_region_steps_back_into_a_continuation() {
        let mut emulator = VtEmulator::new(4, 5).unwrap();
        feed(&mut emulator, "abcdefgh");
        // Row 1 is the continuation of row 0; asking for [1, 2) must print
        // the whole logical line.
        assert_eq!(render_region(&emulator, 1, 2), "abcdefgh\n");
    }

    #[test]
    fn test_extended_and_padding_cells() {
        let mut emulator = VtEmulator::new(2, 10).unwrap();
        feed(&mut emulator, "e");
        emulator.receive_char(0x311); // combining breve
        emulator.receive_char(0xAC00); // wide
        assert_eq!(render_region(&emulator, 0, 1), "e\u{311}가 \n");
    }

    #[test]
    fn test_datetime_prefix_per_logical_line() {
        let mut emulator = VtEmulator::new(3, 10).unwrap();
        feed(&mut emulator, "aa\r\nbb");
        let mut sink = VecSink::new();
        let mut w = SinkWriter::new(&mut sink);
        let screen = emulator.screen();
        TranscriptWriter::new(TranscriptPrefix::Datetime)
            .write_rows(
                screen.screen_lines(),
                screen.line_properties(),
                screen.extended_char_table(),
                0,
                2,
                0,
                &mut w,
            )
            .unwrap();
        w.finalize();
        let text = String::from_utf8(sink.into_bytes()).unwrap();

        let mut lines = text.lines();
        for expected_tail in ["aa", "bb"] {
            let line = lines.next().unwrap();
            // "YYYY-MM-DD HH:MM:SS " is 20 bytes.
            assert_eq!(&line[20..], expected_tail);
            assert_eq!(line.as_bytes()[4], b'-');
            assert_eq!(line.as_bytes()[13], b':');
        }
    }
}
