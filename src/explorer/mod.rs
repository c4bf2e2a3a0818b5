//! Recursive directory explorer.
//!
//! Lists a tree depth-first the way `git ls-files` would: `.gitignore`
//! filters stack up per directory (including those found above the
//! root), recursion halts at repository boundaries, siblings come out
//! files-first in lexicographic order, and only regular files are
//! emitted. The recursion is reified as a stack of levels, one per
//! open directory, so the iterator advances in amortised constant
//! work and drops cheaply at any point.

use std::collections::VecDeque;
use std::path::Path;

use crate::error::{GlistError, Result};
use crate::filter::{Decision, IgnoreFilter, SelectFilter};
use crate::fs::{DirEntry, FileSystem, RealFileSystem};

/// One open directory: its ignore filter and the entries still to be
/// emitted. `is_root` marks a repository root, where upward filter
/// resolution stops.
#[derive(Debug)]
struct Level {
    filter: IgnoreFilter,
    entries: VecDeque<DirEntry>,
    is_root: bool,
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        // Filters and root flags are transient caches: identical
        // entries must have encountered the same filters, which could
        // be rediscovered from the entries' parents.
        self.entries == other.entries
    }
}

/// Depth-first iterator over the non-ignored regular files of a tree.
///
/// Construction positions the explorer on the first file; `next`
/// yields it and repositions. Two explorers compare equal when their
/// remaining entries are equal; the exhausted explorer has an empty
/// stack.
#[derive(Debug)]
pub struct Explorer<FS: FileSystem = RealFileSystem> {
    stack: Vec<Level>,
    select: Option<SelectFilter>,
    fs: FS,
}

impl Explorer<RealFileSystem> {
    /// Explore `root` on the real filesystem.
    ///
    /// # Errors
    /// Returns an error if `root` cannot be canonicalized.
    pub fn new(root: &Path) -> Result<Self> {
        Self::with_filesystem(root, None, RealFileSystem)
    }

    /// Explore `root`, narrowing the output with a selection filter.
    ///
    /// # Errors
    /// Returns an error if `root` cannot be canonicalized.
    pub fn with_select(root: &Path, select: SelectFilter) -> Result<Self> {
        Self::with_filesystem(root, Some(select), RealFileSystem)
    }
}

impl<FS: FileSystem> Explorer<FS> {
    /// Explore `root` through an arbitrary [`FileSystem`].
    ///
    /// # Errors
    /// Returns an error if `root` cannot be canonicalized.
    pub fn with_filesystem(root: &Path, select: Option<SelectFilter>, fs: FS) -> Result<Self> {
        let mut explorer = Self {
            stack: Vec::new(),
            select,
            fs,
        };
        explorer.add_outer_filters(root)?;
        explorer.populate(root);
        explorer.prune();
        explorer.recurse();
        Ok(explorer)
    }

    /// Whether the walk is exhausted.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.stack.is_empty()
    }

    /// Collect `.gitignore` filters from the ancestors of `root`, up to
    /// and including the nearest enclosing repository root.
    ///
    /// When the user points the explorer at a subdirectory of a
    /// repository, rules from enclosing `.gitignore`s are honored, but
    /// never from beyond the repository boundary. A root that is
    /// itself a repository root has no outer filters at all.
    fn add_outer_filters(&mut self, root: &Path) -> Result<()> {
        let canonical = self.fs.canonicalize(root).map_err(|source| GlistError::Path {
            path: root.to_path_buf(),
            source,
        })?;
        if self.fs.is_dir(&canonical.join(".git")) {
            return Ok(());
        }

        let mut levels = Vec::new();
        let mut current = canonical.as_path();
        while let Some(ancestor) = current.parent() {
            let is_root = self.fs.is_dir(&ancestor.join(".git"));
            let ignore_file = ancestor.join(".gitignore");
            if is_root || self.fs.is_file(&ignore_file) {
                levels.push(Level {
                    filter: self.load_filter(ancestor),
                    entries: VecDeque::new(),
                    is_root,
                });
            }
            if is_root {
                break;
            }
            current = ancestor;
        }

        // Outermost ancestor at the bottom of the stack.
        levels.reverse();
        self.stack = levels;
        Ok(())
    }

    /// Build the ignore filter for `dir` from its `.gitignore`, if any.
    /// An unreadable file counts as empty.
    fn load_filter(&self, dir: &Path) -> IgnoreFilter {
        let path = dir.join(".gitignore");
        if !self.fs.is_file(&path) {
            return IgnoreFilter::default();
        }
        let lines = self.fs.read_lines(&path).unwrap_or_default();
        IgnoreFilter::from_lines(&lines, dir)
    }

    /// Open `path` as a new level: read its entries, refuse nested
    /// repositories, build the local filter, then filter and sort.
    /// Unreadable directories count as empty.
    fn populate(&mut self, path: &Path) {
        let Ok(entries) = self.fs.read_dir(path) else {
            return;
        };
        if entries.is_empty() {
            return;
        }

        let is_root = entries
            .iter()
            .any(|entry| entry.is_dir() && entry.file_name() == ".git");
        if is_root && self.stack.iter().any(|level| level.is_root) {
            // A repository nested under another: an opaque boundary.
            return;
        }

        self.stack.push(Level {
            filter: self.load_filter(path),
            entries: entries.into(),
            is_root,
        });
        self.filter_and_sort();
    }

    /// Drop rejected entries from the top level and order the rest
    /// files-first, each kind lexicographically. Pops the level if
    /// nothing survived.
    fn filter_and_sort(&mut self) {
        let Some(mut level) = self.stack.pop() else {
            return;
        };
        let mut entries = std::mem::take(&mut level.entries);
        entries.retain(|entry| self.keep_entry(entry, &level));
        if entries.is_empty() {
            return;
        }
        entries
            .make_contiguous()
            .sort_by(|a, b| (a.is_dir(), a.path()).cmp(&(b.is_dir(), b.path())));
        level.entries = entries;
        self.stack.push(level);
    }

    /// Whether `entry` survives the selection filter and the stack of
    /// ignore filters. `level` is the entry's own level, consulted
    /// before the rest of the stack (deepest first); the climb stops
    /// at the first decision, or at a repository root.
    fn keep_entry(&self, entry: &DirEntry, level: &Level) -> bool {
        if entry.is_symlink() || (!entry.is_file() && !entry.is_dir()) {
            return false;
        }
        if entry.file_name() == ".git" {
            return false;
        }
        if let Some(select) = &self.select
            && select.apply(entry) == Decision::Excluded
        {
            return false;
        }

        for stacked in std::iter::once(level).chain(self.stack.iter().rev()) {
            match stacked.filter.apply(entry) {
                Decision::Excluded => return false,
                Decision::Included => return true,
                Decision::Undecided => {
                    if stacked.is_root {
                        return true;
                    }
                }
            }
        }
        true
    }

    /// Descend while the next entry is a directory, so that the top of
    /// the stack always fronts a regular file (or the stack is empty).
    fn recurse(&mut self) {
        loop {
            let Some(level) = self.stack.last_mut() else {
                return;
            };
            let Some(front) = level.entries.front() else {
                return;
            };
            if !front.is_dir() {
                return;
            }
            let dir = front.path().to_path_buf();
            level.entries.pop_front();
            self.populate(&dir);
            self.prune();
        }
    }

    /// Pop exhausted levels off the top of the stack.
    fn prune(&mut self) {
        while self
            .stack
            .last()
            .is_some_and(|level| level.entries.is_empty())
        {
            self.stack.pop();
        }
    }

    /// Consume the current entry and reposition on the next one.
    fn advance(&mut self) {
        if let Some(level) = self.stack.last_mut() {
            level.entries.pop_front();
        }
        self.prune();
        self.recurse();
    }
}

impl<FS: FileSystem> Iterator for Explorer<FS> {
    type Item = DirEntry;

    fn next(&mut self) -> Option<DirEntry> {
        let current = self.stack.last()?.entries.front()?.clone();
        self.advance();
        Some(current)
    }
}

impl<FS: FileSystem> PartialEq for Explorer<FS> {
    fn eq(&self, other: &Self) -> bool {
        self.stack == other.stack
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
