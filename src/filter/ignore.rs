use std::path::Path;

use super::Decision;
use crate::fs::DirEntry;
use crate::glob::{DecomposeMode, Decomposition, decompose, to_regex};
use crate::path_utils::{glob_escaped_anchor, lossy_file_name, to_slash_string};
use crate::pattern::{MatchEngine, RegexEngine};

/// One compiled rule of an ignore or select filter.
#[derive(Debug, Clone)]
pub(crate) struct IgnoreRule<E> {
    pub(crate) is_inverted: bool,
    is_anchored: bool,
    is_directory: bool,
    engine: Option<E>,
}

impl<E: MatchEngine> IgnoreRule<E> {
    /// Compile a decomposed glob, anchoring it under `anchor_prefix`
    /// when required. A pattern the backend rejects yields a rule that
    /// never matches.
    pub(crate) fn compile(glob: &Decomposition<'_>, anchor_prefix: &str) -> Self {
        let pattern = if glob.is_anchored {
            format!("{anchor_prefix}{}", glob.pattern)
        } else {
            glob.pattern.to_string()
        };
        Self {
            is_inverted: glob.is_inverted,
            is_anchored: glob.is_anchored,
            is_directory: glob.is_directory,
            engine: E::compile(&to_regex(&pattern)),
        }
    }

    /// Whether the rule matches `entry`. Anchored rules match the full
    /// slash-normalized path, unanchored ones the basename; a
    /// directory-only rule never matches a non-directory.
    pub(crate) fn matches(&self, entry: &DirEntry, full_path: &str, file_name: &str) -> bool {
        if self.is_directory && !entry.is_dir() {
            return false;
        }
        let haystack = if self.is_anchored { full_path } else { file_name };
        self.engine
            .as_ref()
            .is_some_and(|engine| engine.is_match(haystack))
    }
}

/// An ordered list of gitignore rules, evaluated last-match-wins.
///
/// `anchor` is the directory the rules were sourced from; anchored
/// patterns are matched against paths below it.
#[derive(Debug, Clone)]
pub struct IgnoreFilter<E: MatchEngine = RegexEngine> {
    rules: Vec<IgnoreRule<E>>,
}

impl<E: MatchEngine> IgnoreFilter<E> {
    #[must_use]
    pub fn new(globs: &[Decomposition<'_>], anchor: &Path) -> Self {
        let anchor_prefix = glob_escaped_anchor(anchor);
        let rules = globs
            .iter()
            .filter(|glob| !glob.is_empty())
            .map(|glob| IgnoreRule::compile(glob, &anchor_prefix))
            .collect();
        Self { rules }
    }

    /// Build a filter from the raw lines of a `.gitignore` file.
    #[must_use]
    pub fn from_lines<S: AsRef<str>>(lines: &[S], anchor: &Path) -> Self {
        let globs: Vec<_> = lines
            .iter()
            .map(|line| decompose(line.as_ref(), DecomposeMode::Ignore))
            .collect();
        Self::new(&globs, anchor)
    }

    /// Check an entry against the rules, last match deciding.
    #[must_use]
    pub fn apply(&self, entry: &DirEntry) -> Decision {
        let full_path = to_slash_string(entry.path());
        let file_name = lossy_file_name(entry.path());
        let matched = self
            .rules
            .iter()
            .rev()
            .find(|rule| rule.matches(entry, &full_path, &file_name));
        match matched {
            None => Decision::Undecided,
            Some(rule) if rule.is_inverted => Decision::Included,
            Some(_) => Decision::Excluded,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

impl<E: MatchEngine> Default for IgnoreFilter<E> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

#[cfg(test)]
#[path = "ignore_tests.rs"]
mod tests;
