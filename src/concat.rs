// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Concatenation (spec.md §4.7): a run of repetitions, each of which must
//! match for the whole run to match.

use crate::repetition::parse_repetition;
use crate::state::MatcherState;
use crate::Error;

fn is_block_boundary(rc: Option<u8>) -> bool {
    matches!(rc, None | Some(b'|') | Some(b'$'))
}

pub fn parse_concatenation(state: &mut MatcherState) -> Result<bool, Error> {
    loop {
        if state.peek_pattern() == Some(b')') {
            break;
        }

        if !parse_repetition(state)? {
            return Ok(false);
        }

        if is_block_boundary(state.peek_pattern()) {
            break;
        }
    }

    Ok(true)
}
