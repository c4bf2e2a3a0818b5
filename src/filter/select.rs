use std::path::Path;

use super::Decision;
use super::ignore::IgnoreRule;
use crate::fs::DirEntry;
use crate::glob::{DecomposeMode, Decomposition, decompose, split};
use crate::path_utils::{glob_escaped_anchor, lossy_file_name, to_slash_string};
use crate::pattern::{MatchEngine, RegexEngine};

#[derive(Debug, Clone)]
struct RuleList<E> {
    rules: Vec<IgnoreRule<E>>,
    fallback: Decision,
}

impl<E> Default for RuleList<E> {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            fallback: Decision::Undecided,
        }
    }
}

/// A user-supplied selection filter: include-by-default dialect where
/// `-` inverts a rule and a trailing `/` routes it to directories.
///
/// File and directory rules are kept apart; each list falls back to
/// `Excluded` once it holds any positive rule, so a bare positive glob
/// implicitly drops the siblings it does not match. An entry whose
/// list is empty is left `Undecided`.
#[derive(Debug, Clone)]
pub struct SelectFilter<E: MatchEngine = RegexEngine> {
    files: RuleList<E>,
    directories: RuleList<E>,
}

impl<E: MatchEngine> SelectFilter<E> {
    #[must_use]
    pub fn new(globs: &[Decomposition<'_>], anchor: &Path) -> Self {
        let anchor_prefix = glob_escaped_anchor(anchor);
        let mut files = RuleList::default();
        let mut directories = RuleList::default();
        for glob in globs.iter().filter(|glob| !glob.is_empty()) {
            let list = if glob.is_directory {
                &mut directories
            } else {
                &mut files
            };
            if !glob.is_inverted {
                list.fallback = Decision::Excluded;
            }
            list.rules.push(IgnoreRule::compile(glob, &anchor_prefix));
        }
        Self { files, directories }
    }

    /// Build a filter from a comma-separated select expression,
    /// anchored at the search root.
    #[must_use]
    pub fn from_expr(expr: &str, anchor: &Path) -> Self {
        let globs: Vec<_> = split(expr, ',')
            .into_iter()
            .map(|token| decompose(token, DecomposeMode::Select))
            .collect();
        Self::new(&globs, anchor)
    }

    /// Check an entry against the list matching its kind.
    #[must_use]
    pub fn apply(&self, entry: &DirEntry) -> Decision {
        let list = if entry.is_dir() {
            &self.directories
        } else {
            &self.files
        };
        if list.rules.is_empty() {
            return Decision::Undecided;
        }

        let full_path = to_slash_string(entry.path());
        let file_name = lossy_file_name(entry.path());
        let matched = list
            .rules
            .iter()
            .rev()
            .find(|rule| rule.matches(entry, &full_path, &file_name));
        match matched {
            None => list.fallback,
            Some(rule) if rule.is_inverted => Decision::Excluded,
            Some(_) => Decision::Included,
        }
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
