use std::path::Path;

use super::*;
use crate::fs::EntryKind;

fn file(path: &str) -> DirEntry {
    DirEntry::new(Path::new("/t").join(path), EntryKind::File)
}

fn dir(path: &str) -> DirEntry {
    DirEntry::new(Path::new("/t").join(path), EntryKind::Directory)
}

fn select(expr: &str) -> SelectFilter {
    SelectFilter::from_expr(expr, Path::new("/t"))
}

#[test]
fn empty_expression_decides_nothing() {
    let filter = select("");
    assert_eq!(filter.apply(&file("README.md")), Decision::Undecided);
    assert_eq!(filter.apply(&file("main.cpp")), Decision::Undecided);
    assert_eq!(filter.apply(&dir("src")), Decision::Undecided);
}

#[test]
fn positive_glob_excludes_nonmatching_files() {
    let filter = select("*.md");
    assert_eq!(filter.apply(&file("README.md")), Decision::Included);
    assert_eq!(filter.apply(&dir("README.md")), Decision::Undecided);
    assert_eq!(filter.apply(&file("readme.md")), Decision::Included);
    assert_eq!(filter.apply(&file("main.cpp")), Decision::Excluded);
}

#[test]
fn negative_glob_overrides_catch_all() {
    let filter = select("*,-*.md");
    assert_eq!(filter.apply(&file("README.md")), Decision::Excluded);
    assert_eq!(filter.apply(&dir("README.md")), Decision::Undecided);
    assert_eq!(filter.apply(&file("main.cpp")), Decision::Included);
    assert_eq!(filter.apply(&file("foo.hpp")), Decision::Included);
}

#[test]
fn lone_negative_glob_leaves_rest_undecided() {
    let filter = select("-*.md");
    assert_eq!(filter.apply(&file("README.md")), Decision::Excluded);
    assert_eq!(filter.apply(&dir("README.md")), Decision::Undecided);
    assert_eq!(filter.apply(&file("main.cpp")), Decision::Undecided);
    assert_eq!(filter.apply(&file("foo.hpp")), Decision::Undecided);
}

#[test]
fn last_match_wins_across_positives_and_negatives() {
    let filter = select("*.cpp,*.hpp,-main.*");
    assert_eq!(filter.apply(&file("main.cpp")), Decision::Excluded);
    assert_eq!(filter.apply(&file("main.log")), Decision::Excluded);
    assert_eq!(filter.apply(&file("foo.cpp")), Decision::Included);
    assert_eq!(filter.apply(&file("foo.hpp")), Decision::Included);
    assert_eq!(filter.apply(&file("README.md")), Decision::Excluded);
}

#[test]
fn directory_rule_routes_to_directories_only() {
    let filter = select("src/");
    assert_eq!(filter.apply(&dir("src")), Decision::Included);
    assert_eq!(filter.apply(&dir("extra/src")), Decision::Included);
    assert_eq!(filter.apply(&dir("extra")), Decision::Excluded);
    assert_eq!(filter.apply(&dir("include")), Decision::Excluded);
    // No file rules at all, so files stay undecided.
    assert_eq!(filter.apply(&file("README.md")), Decision::Undecided);
}

#[test]
fn anchored_glob_selects_direct_children() {
    let filter = select("src/*.cpp");
    assert_eq!(filter.apply(&dir("src")), Decision::Undecided);
    assert_eq!(filter.apply(&file("src/lib.cpp")), Decision::Included);
    assert_eq!(filter.apply(&file("src/detail/impl.cpp")), Decision::Excluded);
    assert_eq!(filter.apply(&file("extra/src/extra.cpp")), Decision::Excluded);
    assert_eq!(filter.apply(&file("main.cpp")), Decision::Excluded);
}

#[test]
fn double_star_glob_selects_whole_subtree() {
    let filter = select("src/**/*.cpp");
    assert_eq!(filter.apply(&dir("src")), Decision::Undecided);
    assert_eq!(filter.apply(&file("src/lib.cpp")), Decision::Included);
    assert_eq!(filter.apply(&file("src/detail/impl.cpp")), Decision::Included);
    assert_eq!(filter.apply(&file("extra/src/extra.cpp")), Decision::Excluded);
    assert_eq!(filter.apply(&file("main.cpp")), Decision::Excluded);
}

#[test]
fn expanded_typetag_expression_selects_by_extension() {
    let db = crate::glob::TypetagDatabase::new([("cpp", "*.cpp,*.hpp")]);
    let tokens = db.expand("#cpp,-main.*");
    let globs: Vec<_> = tokens
        .iter()
        .map(|token| crate::glob::decompose(token, crate::glob::DecomposeMode::Select))
        .collect();
    let filter: SelectFilter = SelectFilter::new(&globs, Path::new("/t"));

    assert_eq!(filter.apply(&file("src/foo.cpp")), Decision::Included);
    assert_eq!(filter.apply(&file("include/foo.hpp")), Decision::Included);
    assert_eq!(filter.apply(&file("src/main.cpp")), Decision::Excluded);
    assert_eq!(filter.apply(&file("README.md")), Decision::Excluded);
}
