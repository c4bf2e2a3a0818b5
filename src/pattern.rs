//! Regex backend abstraction.
//!
//! The filters only need "compile a pattern" and "test a string"; this
//! trait keeps them independent of the concrete engine. The default
//! backend is the `regex` crate, which matches in linear time, so no
//! translated glob can trigger catastrophic backtracking.

use regex::Regex;

/// A compiled pattern that can be tested against whole strings.
pub trait MatchEngine: Sized {
    /// Compile `pattern`, or `None` when the backend rejects it.
    ///
    /// Callers treat a rejected pattern as a rule that never matches.
    fn compile(pattern: &str) -> Option<Self>;

    /// Whether `haystack` matches the pattern in its entirety.
    fn is_match(&self, haystack: &str) -> bool;
}

/// The default backend.
#[derive(Debug, Clone)]
pub struct RegexEngine(Regex);

impl MatchEngine for RegexEngine {
    fn compile(pattern: &str) -> Option<Self> {
        // Full-string semantics via explicit anchoring.
        Regex::new(&format!("^(?:{pattern})$")).ok().map(Self)
    }

    fn is_match(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
