// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `subreg` is a small-footprint, anchored regular expression matcher.
//!
//! It matches a restricted regex dialect against a `&str` input in a single
//! recursive-descent pass that simultaneously parses the pattern and drives
//! the match: there is no compile step, no NFA/DFA construction, and no
//! heap allocation anywhere in [`match_pattern`] — capture storage is a
//! caller-provided buffer and recursion depth is bounded by an explicit
//! `max_depth` argument.
//!
//! The dialect deliberately excludes bracket character classes, counted
//! repetition (`{m,n}`) and backreferences. See the crate's `spec.md` for
//! the full grammar; the short version is in [`match_pattern`]'s docs.
//!
//! A match is always anchored to the *entire* input — `^` and `$` are
//! accepted in patterns but redundant, since there is no unanchored search.
//!
//! ```
//! use subreg::{match_pattern, Capture};
//!
//! let mut caps = [Capture::default(); 3];
//! let n = match_pattern("(foo) (bar)", "foo bar", &mut caps, 8).unwrap();
//! assert_eq!(n, 3);
//! assert_eq!(caps[0].as_str("foo bar"), Some("foo bar"));
//! assert_eq!(caps[1].as_str("foo bar"), Some("foo"));
//! assert_eq!(caps[2].as_str("foo bar"), Some("bar"));
//! ```
//!
//! [`Capture::as_str`] returns `Option<&str>` rather than a plain `&str`:
//! the dialect's atoms (`.`, `\xHH`, the character classes, `\!X`) match one
//! *byte*, not one UTF-8 scalar value, so a capture can end mid-character on
//! non-ASCII input. Use [`Capture::as_bytes`] when a raw byte slice is all
//! that's needed.

mod alternation;
mod classes;
mod concat;
mod driver;
mod literal;
mod repetition;
mod skip;
mod state;

pub use state::Capture;

/// Errors `match_pattern` can return, per the stable result-code taxonomy
/// this crate's ABI inherits from `subreg_match` in the C original: each
/// variant's discriminant (see [`Error::code`]) is fixed and will not
/// change across versions.
///
/// No variant carries a heap-allocated payload — every field is `Copy` —
/// so constructing and propagating an `Error` never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Null pattern or input, or a null capture buffer with a non-zero
    /// capture capacity. Unreachable through the safe `&str`/`&mut [Capture]`
    /// public API (there is no null-pointer case in Rust) but kept as a
    /// variant because it is part of the documented, stable taxonomy and
    /// internal helpers reason about the same cases the C original did.
    /// See `DESIGN.md` Open Question OQ-1.
    #[error("invalid argument")]
    InvalidArgument,

    /// A generic syntax error: a stray `(?`-prefix the parser does not
    /// recognize, a class escape (`\d`, `\W`, ...) used where the literal
    /// matcher requires a non-class atom, trailing content after a `$`, or
    /// an unescapable `\!` context.
    #[error("illegal expression at pattern byte {pattern_pos}")]
    IllegalExpression { pattern_pos: usize },

    /// A `)` was expected but not found before the pattern ended.
    #[error("missing closing bracket at pattern byte {pattern_pos}")]
    MissingBracket { pattern_pos: usize },

    /// Reserved: a stray `)` with no matching `(` currently surfaces as
    /// [`Error::IllegalExpression`] via the trailing-content check in the
    /// top-level driver, not as this variant. See `DESIGN.md` Open
    /// Question OQ-2 for why this is kept as dead-but-documented ABI
    /// rather than removed.
    #[error("surplus closing bracket at pattern byte {pattern_pos}")]
    SurplusBracket { pattern_pos: usize },

    /// A `\` at the end of the pattern, a `\xHH` escape with a missing or
    /// non-hex nibble, or a `\!` with no following byte to negate.
    #[error("invalid metacharacter at pattern byte {pattern_pos}")]
    InvalidMetacharacter { pattern_pos: usize },

    /// A `(` would push the current nesting depth past the caller-supplied
    /// `max_depth` bound.
    #[error("maximum group nesting depth exceeded at pattern byte {pattern_pos}")]
    MaxDepthExceeded { pattern_pos: usize },

    /// A capturing group closed successfully but the capture buffer has no
    /// free slot to record it in.
    #[error("capture buffer exhausted at pattern byte {pattern_pos}")]
    CaptureOverflow { pattern_pos: usize },

    /// `(?x)` where `x` is a letter but not one of the recognized option
    /// letters (`i`, `I`).
    #[error("invalid inline option {option:?} at pattern byte {pattern_pos}")]
    InvalidOption { pattern_pos: usize, option: u8 },
}

impl Error {
    /// The stable, signed result code this error corresponds to in the
    /// original `subreg.h` ABI (`SUBREG_RESULT_*`). Negative by
    /// convention; see [`match_pattern`]'s return-value documentation.
    pub fn code(self) -> i32 {
        match self {
            Error::InvalidArgument => -1,
            Error::IllegalExpression { .. } => -2,
            Error::MissingBracket { .. } => -3,
            Error::SurplusBracket { .. } => -4,
            Error::InvalidMetacharacter { .. } => -5,
            Error::MaxDepthExceeded { .. } => -6,
            Error::CaptureOverflow { .. } => -7,
            Error::InvalidOption { .. } => -8,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

pub use driver::match_pattern;

/// An ergonomic wrapper over [`match_pattern`] for repeated use against one
/// pattern string.
///
/// `Regex` performs no compilation: `Regex::new` just stores the pattern
/// string (spec.md §1 rules precompilation out of scope), so constructing
/// one is free and every match still re-parses the pattern. This mirrors
/// the public-facing shape of the teacher crate's `Regex` type (and of
/// `huntwj-tinyfugue`'s `pattern::Pattern`) without inheriting its compiled
/// internal representation.
#[derive(Debug, Clone, Copy)]
pub struct Regex<'p> {
    pattern: &'p str,
}

/// Recursion-depth bound used by the [`Regex`] convenience methods. Chosen
/// generously for a small-footprint matcher; callers who need a tighter
/// stack budget should call [`match_pattern`] directly with their own bound.
const DEFAULT_MAX_DEPTH: u32 = 32;

impl<'p> Regex<'p> {
    /// Borrow `pattern` for later matching. Does not validate the pattern;
    /// a malformed pattern is only detected when a match is attempted,
    /// exactly as in the C original (there is no separate compile step to
    /// validate it up front).
    pub fn new(pattern: &'p str) -> Regex<'p> {
        Regex { pattern }
    }

    /// The original pattern string.
    pub fn as_str(&self) -> &'p str {
        self.pattern
    }

    /// Whether `input` matches this pattern in its entirety.
    pub fn is_match(&self, input: &str) -> Result<bool> {
        let mut no_captures: [Capture; 0] = [];
        match match_pattern(self.pattern, input, &mut no_captures, DEFAULT_MAX_DEPTH) {
            Ok(n) => Ok(n > 0),
            Err(e) => Err(e),
        }
    }

    /// Match `input` and, on success, return the populated captures.
    ///
    /// The capture buffer is sized by a quick prescan of the pattern that
    /// counts plausible capturing groups (see [`count_capturing_groups`]);
    /// this is bookkeeping for buffer sizing only, not a compile step — it
    /// performs no validation and the real parse in `match_pattern` is the
    /// sole authority on whether the pattern is well-formed.
    pub fn captures<'t>(&self, input: &'t str) -> Result<Option<Captures<'t>>> {
        let slots = count_capturing_groups(self.pattern) + 1;
        let mut buf = vec![Capture::default(); slots];
        let n = match_pattern(self.pattern, input, &mut buf, DEFAULT_MAX_DEPTH)?;
        if n == 0 {
            return Ok(None);
        }
        buf.truncate(n as usize);
        Ok(Some(Captures { input, slots: buf }))
    }
}

/// The result of a successful [`Regex::captures`] call.
pub struct Captures<'t> {
    input: &'t str,
    slots: std::vec::Vec<Capture>,
}

impl<'t> Captures<'t> {
    /// Capture 0: the entire match.
    ///
    /// Infallible, unlike [`Captures::get`]: capture 0 always spans
    /// `0..input.len()` (the driver requires the whole input be consumed
    /// for a match), which is always a valid UTF-8 boundary on both ends
    /// since it's the whole string.
    pub fn whole(&self) -> &'t str {
        self.input
    }

    /// The `n`th capturing group, 1-based. `None` if `n` is out of range,
    /// or if the recorded span doesn't land on a UTF-8 character boundary
    /// (see [`Capture::as_str`]) — use [`Captures::get_bytes`] if a raw
    /// byte slice suffices.
    pub fn get(&self, n: usize) -> Option<&'t str> {
        self.slots.get(n).and_then(|c| c.as_str(self.input))
    }

    /// The `n`th capturing group, 1-based, as raw bytes. `None` only if
    /// `n` is out of range; never fails on a non-UTF-8 boundary.
    pub fn get_bytes(&self, n: usize) -> Option<&'t [u8]> {
        self.slots.get(n).map(|c| c.as_bytes(self.input))
    }

    /// Number of populated slots, including capture 0.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Count pattern bytes that look like the opening `(` of a capturing group
/// (i.e. not immediately followed by `?`, and not themselves escaped or
/// inside an escape sequence). Used only to size the convenience buffer in
/// [`Regex::captures`]; `match_pattern` does not use this and does not
/// require it to be exact.
fn count_capturing_groups(pattern: &str) -> usize {
    let bytes = pattern.as_bytes();
    let mut i = 0;
    let mut count = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'(' => {
                if bytes.get(i + 1) != Some(&b'?') {
                    count += 1;
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    count
}
