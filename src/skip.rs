// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Skip-ahead: advance the pattern cursor past the rest of the current
//! alternation arm or group without matching (spec.md §4.4).

use crate::state::MatcherState;
use crate::Error;

fn is_internal_block_boundary(c: u8) -> bool {
    c == b'|' || c == b'$'
}

/// Advance `state.pattern_cursor` past the remainder of the current
/// alternation arm, stopping at end-of-pattern, `)`, `|` or `$` seen at the
/// entry nesting depth. Used both to jump a matched arm to its group's
/// closing `)` and to advance a failed arm to the next `|`.
pub fn skip_block(state: &mut MatcherState) -> Result<(), Error> {
    let entry_depth = state.depth;

    loop {
        let rc = match state.peek_pattern() {
            None => {
                if state.depth > entry_depth {
                    return Err(Error::MissingBracket { pattern_pos: state.pattern_cursor });
                }
                break;
            }
            Some(b) => b,
        };

        if rc == b'(' {
            state.enter_group()?;
        } else if rc == b')' {
            if state.depth == entry_depth {
                break;
            }
            state.leave_group();
        } else if is_internal_block_boundary(rc) {
            if state.depth == entry_depth {
                break;
            }
        } else {
            if rc == b'\\' {
                state.advance_pattern();
            }
            if state.peek_pattern().is_none() {
                return Err(Error::InvalidMetacharacter { pattern_pos: state.pattern_cursor });
            }
        }

        state.advance_pattern();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Capture;

    fn state_at<'p, 't, 'c>(
        pattern: &'p str,
        cursor: usize,
        captures: &'c mut [Capture],
    ) -> MatcherState<'p, 't, 'c>
    where
        't: 'p,
    {
        let mut st = MatcherState::new(pattern, "", captures, 16);
        st.pattern_cursor = cursor;
        st
    }

    #[test]
    fn skip_over_simple_arm_stops_at_close_paren() {
        let mut caps: [Capture; 0] = [];
        let mut st = state_at("abc)rest", 0, &mut caps);
        skip_block(&mut st).unwrap();
        assert_eq!(st.pattern_cursor, 3);
    }

    #[test]
    fn skip_over_arm_stops_at_pipe() {
        let mut caps: [Capture; 0] = [];
        let mut st = state_at("abc|def", 0, &mut caps);
        skip_block(&mut st).unwrap();
        assert_eq!(st.pattern_cursor, 3);
    }

    #[test]
    fn skip_honors_nested_groups() {
        let mut caps: [Capture; 0] = [];
        let mut st = state_at("a(b|c)d)rest", 0, &mut caps);
        skip_block(&mut st).unwrap();
        assert_eq!(st.pattern_cursor, 7);
    }

    #[test]
    fn skip_rejects_dangling_escape() {
        let mut caps: [Capture; 0] = [];
        let mut st = state_at("abc\\", 0, &mut caps);
        assert!(matches!(
            skip_block(&mut st),
            Err(Error::InvalidMetacharacter { .. })
        ));
    }

    #[test]
    fn skip_unterminated_group_is_missing_bracket() {
        let mut caps: [Capture; 0] = [];
        let mut st = state_at("a(bcd", 0, &mut caps);
        assert!(matches!(skip_block(&mut st), Err(Error::MissingBracket { .. })));
    }
}
