// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Alternation and sub-expression option scoping (spec.md §4.8 and
//! `SPEC_FULL.md` §4.10).

use crate::concat::parse_concatenation;
use crate::skip::skip_block;
use crate::state::MatcherState;
use crate::Error;

/// Try each `|`-separated arm in turn against the input starting at the
/// position on entry, taking the first that matches. On a match, skips the
/// winning arm's own trailing alternatives (they're dead once one arm
/// wins) up to the enclosing `)`/end. On total failure, every input
/// position tried has already been rolled back by the caller of the
/// failing arm.
pub fn parse_alternation(state: &mut MatcherState) -> Result<bool, Error> {
    let input_begin = state.input_cursor;

    loop {
        if parse_concatenation(state)? {
            loop {
                skip_block(state)?;
                if state.peek_pattern() == Some(b'|') {
                    state.advance_pattern();
                } else {
                    return Ok(true);
                }
            }
        }

        skip_block(state)?;

        if state.peek_pattern() != Some(b'|') {
            return Ok(false);
        }

        state.advance_pattern();
        state.input_cursor = input_begin;
    }
}

/// Save and restore `NOCASE` (and any future inline option) around a
/// parenthesized sub-expression, so `(?i)` and `(?I)` only ever affect the
/// group they appear in. Restored unconditionally, including when
/// `parse_alternation` returns an error — an inline option set just before
/// a later syntax error must not leak out to whatever handles that error.
pub fn parse_sub_expr(state: &mut MatcherState) -> Result<bool, Error> {
    let saved_options = state.options;
    let result = parse_alternation(state);
    state.options = saved_options;
    result
}
