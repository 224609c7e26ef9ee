// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The literal matcher (spec.md §4.5): groups, `\` escapes and classes,
//! `.`, and plain byte literals. The single atom-level entry point every
//! quantifier in [`crate::repetition`] repeats.

use crate::alternation::parse_sub_expr;
use crate::classes::{char_eq, decode_escape, invert, is_digit, is_hex, is_option_letter, is_whitespace, is_word};
use crate::state::MatcherState;
use crate::Error;

#[derive(Clone, Copy, PartialEq, Eq)]
enum GroupMode {
    Capture,
    NonCapture,
    PosLookAhead,
    NegLookAhead,
}

/// Parse and match exactly one atom, advancing both cursors past whatever it
/// consumed. Returns `Ok(false)` for a clean non-match; never silently
/// "skips" the atom — a no-match here always means the whole expression
/// fails on the current path.
pub fn parse_literal(state: &mut MatcherState) -> Result<bool, Error> {
    let c = state.peek_input();

    let rc = match state.peek_pattern() {
        Some(b) => {
            state.advance_pattern();
            b
        }
        None => return Ok(false),
    };

    match rc {
        b'(' => parse_group(state),
        b'\\' => parse_escape_atom(state, c),
        b'.' => {
            let matched = c.is_some();
            if matched {
                state.input_cursor += 1;
            }
            Ok(matched)
        }
        _ => {
            let matched = c.map_or(false, |cb| char_eq(state.options, cb, rc));
            if matched {
                state.input_cursor += 1;
            }
            Ok(matched)
        }
    }
}

fn parse_group(state: &mut MatcherState) -> Result<bool, Error> {
    state.enter_group()?;
    let input_start = state.input_cursor;

    if state.peek_pattern() == Some(b'?') {
        state.advance_pattern();
        return parse_group_after_question(state, input_start);
    }

    let mode = if state.max_captures() > 0 {
        GroupMode::Capture
    } else {
        GroupMode::NonCapture
    };

    finish_group(state, mode, input_start)
}

fn parse_group_after_question(state: &mut MatcherState, input_start: usize) -> Result<bool, Error> {
    match state.peek_pattern() {
        Some(b':') => {
            state.advance_pattern();
            finish_group(state, GroupMode::NonCapture, input_start)
        }
        Some(b'=') => {
            state.advance_pattern();
            finish_group(state, GroupMode::PosLookAhead, input_start)
        }
        Some(b'!') => {
            state.advance_pattern();
            finish_group(state, GroupMode::NegLookAhead, input_start)
        }
        Some(letter) if is_option_letter(letter) => {
            match letter {
                b'i' => state.options.set_nocase(),
                b'I' => state.options.clear_nocase(),
                _ => {
                    return Err(Error::InvalidOption {
                        pattern_pos: state.pattern_cursor,
                        option: letter,
                    })
                }
            }
            state.advance_pattern();
            match state.peek_pattern() {
                Some(b')') => state.advance_pattern(),
                _ => return Err(Error::MissingBracket { pattern_pos: state.pattern_cursor }),
            }
            // The depth bump from `enter_group` above must still unwind on
            // this path. See DESIGN.md Open Question OQ-3.
            state.leave_group();
            Ok(true)
        }
        _ => Err(Error::IllegalExpression { pattern_pos: state.pattern_cursor }),
    }
}

fn finish_group(state: &mut MatcherState, mode: GroupMode, input_start: usize) -> Result<bool, Error> {
    let mut result = parse_sub_expr(state)?;

    match state.peek_pattern() {
        Some(b')') => state.advance_pattern(),
        _ => return Err(Error::MissingBracket { pattern_pos: state.pattern_cursor }),
    }

    match mode {
        GroupMode::Capture => {
            if result {
                state.push_capture(input_start, state.input_cursor - input_start)?;
            }
        }
        GroupMode::PosLookAhead => {
            state.input_cursor = input_start;
        }
        GroupMode::NegLookAhead => {
            state.input_cursor = input_start;
            result = !result;
        }
        GroupMode::NonCapture => {}
    }

    state.leave_group();
    Ok(result)
}

fn parse_escape_atom(state: &mut MatcherState, c: Option<u8>) -> Result<bool, Error> {
    let rc = state
        .peek_pattern()
        .ok_or(Error::InvalidMetacharacter { pattern_pos: state.pattern_cursor })?;

    let matched = match rc {
        b'D' => {
            state.advance_pattern();
            invert(c, is_digit)
        }
        b'H' => {
            state.advance_pattern();
            invert(c, is_hex)
        }
        b'S' => {
            state.advance_pattern();
            invert(c, is_whitespace)
        }
        b'W' => {
            state.advance_pattern();
            invert(c, is_word)
        }
        b'd' => {
            state.advance_pattern();
            c.map_or(false, is_digit)
        }
        b'h' => {
            state.advance_pattern();
            c.map_or(false, is_hex)
        }
        b's' => {
            state.advance_pattern();
            c.map_or(false, is_whitespace)
        }
        b'w' => {
            state.advance_pattern();
            c.map_or(false, is_word)
        }
        b'!' => {
            state.advance_pattern();
            let target = parse_negated_target(state)?;
            match c {
                None => return Ok(false),
                Some(cb) => !char_eq(state.options, cb, target),
            }
        }
        _ => {
            let mut cursor = state.pattern_cursor;
            let decoded = decode_escape(state.pattern, &mut cursor)?;
            state.pattern_cursor = cursor;
            let matched = c.map_or(false, |cb| char_eq(state.options, cb, decoded));
            if matched {
                state.input_cursor += 1;
            }
            return Ok(matched);
        }
    };

    if matched {
        state.input_cursor += 1;
    }
    Ok(matched)
}

/// Decode the single byte a `\!` negates against: either a bare literal byte
/// or a nested `\` escape. Unlike the C original, this never over-advances
/// the pattern cursor past a nested escape's own consumed bytes — see
/// DESIGN.md Open Question OQ-4.
fn parse_negated_target(state: &mut MatcherState) -> Result<u8, Error> {
    let rc = state
        .peek_pattern()
        .ok_or(Error::InvalidMetacharacter { pattern_pos: state.pattern_cursor })?;

    if rc == b'\\' {
        state.advance_pattern();
        let mut cursor = state.pattern_cursor;
        let decoded = decode_escape(state.pattern, &mut cursor)?;
        state.pattern_cursor = cursor;
        Ok(decoded)
    } else {
        state.advance_pattern();
        Ok(rc)
    }
}
