// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The state machine: one code point in, at most one transition out.
//!
//! Dispatch routing:
//!
//! | Input                  | State    | Handler                         |
//! |------------------------|----------|---------------------------------|
//! | printable              | Ground   | `Screen::display_character`     |
//! | C0 control             | any      | [`execute_control`] (immediate) |
//! | C1 control             | any      | [`execute_c1`]                  |
//! | `ESC …`                | Escape   | [`handle_escape`]               |
//! | `ESC [ … final`        | Csi      | [`dispatch_csi`] → operations   |
//! | `ESC ] n ; text BEL/ST`| Osc*     | `operations::osc_ops`           |
//! | `ESC ( ) * + X`        | Scs      | charset designation             |
//! | `ESC # n`              | Hash     | line marks / DECALN             |
//!
//! C0 controls received mid-sequence execute immediately without disturbing
//! the sequence; CAN and SUB abort it. Malformed or unknown sequences are
//! reported through the log callback and the machine resyncs to Ground —
//! state is never corrupted.
//!
//! [`execute_control`]: VtEmulator::execute_control
//! [`execute_c1`]: VtEmulator::execute_c1
//! [`handle_escape`]: VtEmulator::handle_escape
//! [`dispatch_csi`]: VtEmulator::dispatch_csi

use super::{State, VtEmulator,
            char_class::{DIG, class_of},
            operations::{char_ops, cursor_ops, line_ops, margin_ops, mode_ops, osc_ops,
                         scroll_ops, sgr_ops, terminal_ops},
            protocols::{csi_codes, esc_codes}};
use crate::screen::CharsetId;

impl VtEmulator {
    /// Feed one decoded code point.
    pub fn receive_char(&mut self, cp: u32) {
        if cp == esc_codes::ESC {
            match self.state {
                State::OscNumber | State::OscString => {
                    self.track_seq(cp);
                    self.state = State::OscEsc;
                }
                _ => {
                    self.seq.clear();
                    self.track_seq(cp);
                    self.state = State::Escape;
                }
            }
            return;
        }

        if cp < 0x20 {
            self.execute_control(cp);
            return;
        }

        if (0x80..0xA0).contains(&cp) {
            self.execute_c1(cp);
            return;
        }

        match self.state {
            State::Ground => self.screen.display_character(cp),
            State::Escape => {
                self.track_seq(cp);
                self.handle_escape(cp);
            }
            State::EscapeHash => {
                self.track_seq(cp);
                self.handle_escape_hash(cp);
            }
            State::EscapePercent => {
                // Coding-system selection: consumed without effect.
                self.state = State::Ground;
            }
            State::Scs { slot } => {
                self.track_seq(cp);
                self.handle_scs(slot, cp);
            }
            State::Csi => {
                self.track_seq(cp);
                self.handle_csi(cp);
            }
            State::OscNumber => {
                self.track_seq(cp);
                self.handle_osc_number(cp);
            }
            State::OscString => {
                self.track_seq(cp);
                self.osc_text.push(cp);
            }
            State::OscEsc => {
                if cp == esc_codes::ST_STRING_TERMINATOR {
                    osc_ops::dispatch(self);
                    self.state = State::Ground;
                } else {
                    // The ESC aborted the OSC and opened a new sequence.
                    self.seq.clear();
                    self.track_seq(esc_codes::ESC);
                    self.track_seq(cp);
                    self.handle_escape(cp);
                }
            }
        }
    }

    /// C0 controls act immediately, in any state.
    fn execute_control(&mut self, cp: u32) {
        match cp {
            esc_codes::BEL => match self.state {
                State::OscNumber | State::OscString | State::OscEsc => {
                    osc_ops::dispatch(self);
                    self.state = State::Ground;
                }
                _ => self.log("Bell"),
            },
            esc_codes::BS => self.screen.backspace(),
            esc_codes::HT => self.screen.tab(),
            esc_codes::LF | esc_codes::VT | esc_codes::FF => self.screen.new_line(),
            esc_codes::CR => self.screen.carriage_return(),
            esc_codes::SO => self.screen.use_charset(1),
            esc_codes::SI => self.screen.use_charset(0),
            esc_codes::CAN | esc_codes::SUB => self.state = State::Ground,
            _ => {}
        }
    }

    /// 8-bit C1 controls.
    fn execute_c1(&mut self, cp: u32) {
        match cp {
            esc_codes::C1_IND => self.screen.index(),
            esc_codes::C1_NEL => self.screen.next_line(),
            esc_codes::C1_RI => self.screen.reverse_index(),
            esc_codes::C1_CSI => {
                self.seq.clear();
                self.track_seq(esc_codes::ESC);
                self.track_seq(u32::from('['));
                self.begin_csi();
            }
            esc_codes::C1_OSC => {
                self.seq.clear();
                self.track_seq(esc_codes::ESC);
                self.track_seq(u32::from(']'));
                self.begin_osc();
            }
            _ => {}
        }
    }

    fn begin_csi(&mut self) {
        self.params.clear();
        self.private_marker = false;
        self.csi_ignored = false;
        self.state = State::Csi;
    }

    fn begin_osc(&mut self) {
        self.osc_code = 0;
        self.osc_text.clear();
        self.state = State::OscNumber;
    }

    fn handle_escape(&mut self, cp: u32) {
        self.state = State::Ground;
        match cp {
            _ if cp == u32::from('[') => self.begin_csi(),
            _ if cp == u32::from(']') => self.begin_osc(),
            _ if cp == u32::from('#') => self.state = State::EscapeHash,
            _ if cp == u32::from('%') => self.state = State::EscapePercent,
            _ if cp == u32::from('(') => self.state = State::Scs { slot: 0 },
            _ if cp == u32::from(')') => self.state = State::Scs { slot: 1 },
            _ if cp == u32::from('*') => self.state = State::Scs { slot: 2 },
            _ if cp == u32::from('+') => self.state = State::Scs { slot: 3 },
            esc_codes::DECSC_SAVE_CURSOR => self.screen.save_cursor(),
            esc_codes::DECRC_RESTORE_CURSOR => self.screen.restore_cursor(),
            esc_codes::IND_INDEX => self.screen.index(),
            esc_codes::NEL_NEXT_LINE => self.screen.next_line(),
            esc_codes::RI_REVERSE_INDEX => self.screen.reverse_index(),
            esc_codes::RIS_RESET => terminal_ops::reset(self),
            esc_codes::DECID_IDENTIFY => terminal_ops::report_identity(self),
            esc_codes::DECKPAM_APP_KEYPAD | esc_codes::DECKPNM_NUMERIC_KEYPAD => {
                tracing::debug!(keypad = cp, "keypad mode escape consumed");
            }
            esc_codes::ST_STRING_TERMINATOR => {}
            _ => self.report_undecodable(),
        }
    }

    fn handle_escape_hash(&mut self, cp: u32) {
        self.state = State::Ground;
        match cp {
            esc_codes::DECDHL_TOP | esc_codes::DECDHL_BOTTOM => {
                terminal_ops::mark_line_double_height(self);
            }
            esc_codes::DECSWL_SINGLE_WIDTH => terminal_ops::mark_line_single_width(self),
            esc_codes::DECDWL_DOUBLE_WIDTH => terminal_ops::mark_line_double_width(self),
            esc_codes::DECALN_ALIGNMENT => {
                self.screen.fill_with_alignment_pattern();
            }
            _ => self.report_undecodable(),
        }
    }

    fn handle_scs(&mut self, slot: usize, cp: u32) {
        self.state = State::Ground;
        let id = match cp {
            esc_codes::CHARSET_ASCII => CharsetId::Latin1,
            esc_codes::CHARSET_UK => CharsetId::Uk,
            esc_codes::CHARSET_DEC_GRAPHICS => CharsetId::DecGraphics,
            _ => {
                tracing::debug!(slot, designator = cp, "unknown character set, using ASCII");
                CharsetId::Latin1
            }
        };
        self.screen.designate_charset(slot, id);
    }

    fn handle_csi(&mut self, cp: u32) {
        if class_of(cp) & DIG != 0 {
            self.params.push_digit((cp - u32::from('0')) as u16);
            return;
        }
        match cp {
            _ if cp == u32::from(';') => self.params.next_param(),
            _ if cp == u32::from('?') => {
                if self.params.is_empty() {
                    self.private_marker = true;
                } else {
                    self.csi_ignored = true;
                }
            }
            _ if cp == u32::from('>')
                || cp == u32::from('=')
                || cp == u32::from('<')
                || cp == u32::from('!') =>
            {
                self.csi_ignored = true;
            }
            _ => self.dispatch_csi(cp),
        }
    }

    /// Route a CSI final byte to its operation. Unknown finals and
    /// uninterpreted markers log the whole sequence.
    fn dispatch_csi(&mut self, cp: u32) {
        self.state = State::Ground;
        if self.csi_ignored {
            self.report_undecodable();
            return;
        }
        let params = std::mem::take(&mut self.params);
        let private = self.private_marker;

        match cp {
            csi_codes::CUU_CURSOR_UP => cursor_ops::cursor_up(self, &params),
            csi_codes::CUD_CURSOR_DOWN => cursor_ops::cursor_down(self, &params),
            csi_codes::CUF_CURSOR_FORWARD => cursor_ops::cursor_forward(self, &params),
            csi_codes::CUB_CURSOR_BACKWARD => cursor_ops::cursor_backward(self, &params),
            csi_codes::CNL_CURSOR_NEXT_LINE => cursor_ops::cursor_next_line(self, &params),
            csi_codes::CPL_CURSOR_PREV_LINE => cursor_ops::cursor_prev_line(self, &params),
            csi_codes::CHA_CURSOR_COLUMN => cursor_ops::cursor_column(self, &params),
            csi_codes::CUP_CURSOR_POSITION | csi_codes::HVP_CURSOR_POSITION => {
                cursor_ops::cursor_position(self, &params);
            }
            csi_codes::VPA_VERTICAL_POSITION => {
                cursor_ops::vertical_position_absolute(self, &params);
            }
            csi_codes::CBT_BACKWARD_TAB => cursor_ops::backward_tab(self, &params),

            csi_codes::ED_ERASE_DISPLAY => char_ops::erase_in_display(self, &params),
            csi_codes::EL_ERASE_LINE => char_ops::erase_in_line(self, &params),
            csi_codes::ECH_ERASE_CHAR => char_ops::erase_chars(self, &params),
            csi_codes::ICH_INSERT_CHAR => char_ops::insert_chars(self, &params),
            csi_codes::DCH_DELETE_CHAR => char_ops::delete_chars(self, &params),

            csi_codes::IL_INSERT_LINE => line_ops::insert_lines(self, &params),
            csi_codes::DL_DELETE_LINE => line_ops::delete_lines(self, &params),

            csi_codes::SU_SCROLL_UP => scroll_ops::scroll_up(self, &params),
            csi_codes::SD_SCROLL_DOWN => scroll_ops::scroll_down(self, &params),
            csi_codes::DECSTBM_SET_MARGINS if !private => {
                margin_ops::set_margins(self, &params);
            }
            csi_codes::DECSTBM_SET_MARGINS => {
                mode_ops::restore_private_modes(self, &params);
            }

            csi_codes::SM_SET_MODE => mode_ops::set_mode(self, &params, private, true),
            csi_codes::RM_RESET_MODE => mode_ops::set_mode(self, &params, private, false),
            csi_codes::SGR_SET_GRAPHICS => sgr_ops::set_graphics_rendition(self, &params),

            csi_codes::SCP_SAVE_CURSOR if !private => self.screen.save_cursor(),
            csi_codes::SCP_SAVE_CURSOR => mode_ops::save_private_modes(self, &params),
            csi_codes::RCP_RESTORE_CURSOR => self.screen.restore_cursor(),

            csi_codes::DA_DEVICE_ATTRIBUTES if !private => {
                terminal_ops::report_identity(self);
            }
            csi_codes::WINDOW_OP => terminal_ops::window_op(self, &params),

            _ => self.report_undecodable(),
        }
    }

    fn handle_osc_number(&mut self, cp: u32) {
        if class_of(cp) & DIG != 0 {
            self.osc_code = self
                .osc_code
                .saturating_mul(10)
                .saturating_add(cp - u32::from('0'));
        } else if cp == u32::from(';') {
            self.state = State::OscString;
        } else {
            self.report_undecodable();
        }
    }
}
