use std::collections::BTreeMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use crate::fs::{DirEntry, EntryKind, FileSystem};

/// In-memory filesystem for driving the explorer over synthetic trees.
///
/// Registering a node creates its ancestor directories implicitly.
pub struct MockFileSystem {
    nodes: BTreeMap<PathBuf, EntryKind>,
    contents: BTreeMap<PathBuf, String>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            contents: BTreeMap::new(),
        }
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.register(path, EntryKind::File);
        self.contents.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        self.register(path, EntryKind::Directory);
        self
    }

    pub fn with_symlink(mut self, path: &str) -> Self {
        self.register(path, EntryKind::Symlink);
        self
    }

    fn register(&mut self, path: &str, kind: EntryKind) {
        let path = PathBuf::from(path);
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes
                .entry(ancestor.to_path_buf())
                .or_insert(EntryKind::Directory);
        }
        self.nodes.insert(path, kind);
    }
}

impl FileSystem for MockFileSystem {
    fn read_dir(&self, path: &Path) -> std::io::Result<Vec<DirEntry>> {
        if !self.is_dir(path) {
            return Err(Error::new(ErrorKind::NotFound, "not a directory"));
        }
        Ok(self
            .nodes
            .iter()
            .filter(|(candidate, _)| candidate.parent() == Some(path))
            .map(|(candidate, &kind)| DirEntry::new(candidate.clone(), kind))
            .collect())
    }

    fn read_lines(&self, path: &Path) -> std::io::Result<Vec<String>> {
        self.contents
            .get(path)
            .map(|content| content.lines().map(str::to_string).collect())
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.nodes.get(path) == Some(&EntryKind::Directory)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.nodes.get(path) == Some(&EntryKind::File)
    }

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
        if self.nodes.contains_key(path) {
            Ok(path.to_path_buf())
        } else {
            Err(Error::new(ErrorKind::NotFound, "path not found"))
        }
    }
}
