// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The top-level driver (spec.md §4.9) and the public entry point,
//! [`match_pattern`] (spec.md §6).

use crate::alternation::parse_sub_expr;
use crate::state::{Capture, MatcherState};
use crate::Error;

/// Parse the whole pattern: optional leading `^`, the body, optional
/// trailing `$`, and then require the pattern to be fully consumed and the
/// input to be fully consumed too. `^` and `$` are accepted but have no
/// effect beyond being consumed - every match in this dialect is already
/// anchored to the entire input.
fn parse_expr(state: &mut MatcherState) -> Result<bool, Error> {
    if state.peek_pattern() == Some(b'^') {
        state.advance_pattern();
    }

    if !parse_sub_expr(state)? {
        return Ok(false);
    }

    if state.peek_pattern() == Some(b'$') {
        state.advance_pattern();
    }

    if state.peek_pattern().is_some() {
        return Err(Error::IllegalExpression { pattern_pos: state.pattern_cursor });
    }

    Ok(state.peek_input().is_none())
}

/// Match `input` against `pattern` in its entirety.
///
/// On success, returns `Ok(n)` where `n` is the number of captures
/// populated in `captures` (including capture 0, the whole match) - so
/// `n > 0` signals a match and `n == 0` signals a clean non-match. `n` can
/// exceed `captures.len()` only in the sense that it is capped at it:
/// captures beyond the buffer's capacity cause [`Error::CaptureOverflow`]
/// rather than being silently dropped.
///
/// `captures` may be empty; in that case a match still succeeds, it simply
/// records nothing (spec.md §5 "max_captures = 0 still returns a match").
///
/// `max_depth` bounds the recursion used for nested groups and alternation
/// arms; exceeding it returns [`Error::MaxDepthExceeded`] rather than
/// overflowing the call stack.
///
/// Every byte of `input` must be consumed for a match to succeed - this
/// dialect has no unanchored substring search.
pub fn match_pattern(
    pattern: &str,
    input: &str,
    captures: &mut [Capture],
    max_depth: u32,
) -> Result<u32, Error> {
    let mut state = MatcherState::new(pattern, input, captures, max_depth);

    if !parse_expr(&mut state)? {
        return Ok(0);
    }

    if state.max_captures() > 0 {
        state.captures[0] = Capture { start: 0, length: state.input_cursor };
    }

    Ok(state.capture_index as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_match_populates_capture_zero() {
        let mut caps = [Capture::default(); 1];
        let n = match_pattern("abc", "abc", &mut caps, 16).unwrap();
        assert_eq!(n, 1);
        assert_eq!(caps[0], Capture { start: 0, length: 3 });
    }

    #[test]
    fn no_match_returns_zero() {
        let mut caps = [Capture::default(); 1];
        let n = match_pattern("abc", "abd", &mut caps, 16).unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn zero_capacity_buffer_still_matches() {
        // A match with a zero-capacity capture buffer still reports 1 (the
        // implicit whole-match capture), it just isn't stored anywhere.
        let mut caps: [Capture; 0] = [];
        let n = match_pattern("abc", "abc", &mut caps, 16).unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn anchors_require_full_input_consumption() {
        let mut caps: [Capture; 0] = [];
        let n = match_pattern("abc", "abcd", &mut caps, 16).unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn leading_caret_and_trailing_dollar_are_accepted_no_ops() {
        let mut caps: [Capture; 0] = [];
        assert_eq!(match_pattern("^abc$", "abc", &mut caps, 16).unwrap(), 1);
    }

    #[test]
    fn trailing_garbage_after_dollar_is_illegal_expression() {
        let mut caps: [Capture; 0] = [];
        let err = match_pattern("abc$def", "abc", &mut caps, 16).unwrap_err();
        assert!(matches!(err, Error::IllegalExpression { .. }));
    }

    #[test]
    fn nested_groups_record_in_closing_order() {
        // Three capturing groups - the inner "(a)", the inner "(b)" and the
        // outer one - plus capture 0 for the whole match.
        let mut caps = vec![Capture::default(); 4];
        let n = match_pattern("((a)(b))", "ab", &mut caps, 16).unwrap();
        assert_eq!(n, 4);
        assert_eq!(caps[0].as_str("ab"), Some("ab"));
        assert_eq!(caps[1].as_str("ab"), Some("a"));
        assert_eq!(caps[2].as_str("ab"), Some("b"));
        assert_eq!(caps[3].as_str("ab"), Some("ab"));
    }

    #[test]
    fn max_depth_exceeded_on_deep_nesting() {
        let mut caps: [Capture; 0] = [];
        let err = match_pattern("((()))", "", &mut caps, 2).unwrap_err();
        assert!(matches!(err, Error::MaxDepthExceeded { .. }));
    }

    #[test]
    fn unclosed_group_is_missing_bracket() {
        let mut caps: [Capture; 0] = [];
        let err = match_pattern("(abc", "abc", &mut caps, 16).unwrap_err();
        assert!(matches!(err, Error::MissingBracket { .. }));
    }

    #[test]
    fn capture_overflow_when_buffer_too_small() {
        let mut caps = vec![Capture::default(); 1];
        let err = match_pattern("(a)(b)", "ab", &mut caps, 16).unwrap_err();
        assert!(matches!(err, Error::CaptureOverflow { .. }));
    }
}
