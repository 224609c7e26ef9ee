// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Greedy `?`, `*`, `+` repetition (spec.md §4.6).
//!
//! There is no backtracking across a quantifier once it has committed to a
//! number of repetitions: `A*A` does not match `A`, because `A*` greedily
//! consumes every `A` and never gives one back to let the trailing `A`
//! atom match. This is a real, documented quirk of the dialect, not a bug
//! to paper over — see DESIGN.md's Open Question entry for it.

use crate::literal::parse_literal;
use crate::state::MatcherState;
use crate::Error;

pub fn parse_repetition(state: &mut MatcherState) -> Result<bool, Error> {
    let atom_begin = state.pattern_cursor;
    let mut checkpoint = state.input_cursor;

    let mut result = parse_literal(state)?;

    match state.peek_pattern() {
        None => return Ok(result),
        Some(b'?') => {
            state.advance_pattern();
            if !result {
                state.input_cursor = checkpoint;
            }
            return Ok(true);
        }
        Some(b'+') => {
            if !result {
                return Ok(false);
            }
        }
        Some(b'*') => {
            if !result {
                state.advance_pattern();
                state.input_cursor = checkpoint;
                return Ok(true);
            }
        }
        Some(_) => return Ok(result),
    }

    // `+` with a first match, or `*` with a first match: greedily repeat
    // the same atom, re-parsing it from `atom_begin` each time, until it
    // stops matching. The quantifier byte itself is consumed only once we
    // commit to this loop, via `atom_end` below.
    let atom_end = state.pattern_cursor + 1;
    loop {
        state.pattern_cursor = atom_begin;
        checkpoint = state.input_cursor;
        result = parse_literal(state)?;
        if !result {
            state.input_cursor = checkpoint;
            break;
        }
    }
    state.pattern_cursor = atom_end;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Capture;

    fn run(pattern: &str, input: &str) -> (bool, usize, usize) {
        let mut caps: [Capture; 0] = [];
        let mut st = MatcherState::new(pattern, input, &mut caps, 16);
        let result = parse_repetition(&mut st).unwrap();
        (result, st.pattern_cursor, st.input_cursor)
    }

    #[test]
    fn star_matches_zero_occurrences() {
        let (r, p, i) = run("a*", "");
        assert!(r);
        assert_eq!((p, i), (2, 0));
    }

    #[test]
    fn star_matches_greedily() {
        let (r, _, i) = run("a*", "aaab");
        assert!(r);
        assert_eq!(i, 3);
    }

    #[test]
    fn plus_requires_one_occurrence() {
        let (r, _, i) = run("a+", "");
        assert!(!r);
        assert_eq!(i, 0);

        let (r, _, i) = run("a+", "aaa");
        assert!(r);
        assert_eq!(i, 3);
    }

    #[test]
    fn question_mark_is_optional() {
        let (r, _, i) = run("a?", "");
        assert!(r);
        assert_eq!(i, 0);

        let (r, _, i) = run("a?", "a");
        assert!(r);
        assert_eq!(i, 1);
    }

    #[test]
    fn star_consumes_greedily_leaving_nothing_for_a_following_atom() {
        // parse_repetition only handles the quantified atom itself ("a*"
        // here); it reports a match having eaten the only 'a'. The
        // no-backtracking quirk this module's doc comment describes only
        // becomes externally visible one level up, in concatenation - see
        // `concat::tests::star_then_same_atom_does_not_backtrack`.
        let (r, p, i) = run("a*a", "a");
        assert!(r);
        assert_eq!((p, i), (2, 1));
    }

    #[test]
    fn plain_atom_without_quantifier_passes_through() {
        let (r, p, i) = run("a", "a");
        assert!(r);
        assert_eq!((p, i), (1, 1));
    }
}
