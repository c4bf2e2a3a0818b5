use super::*;

#[test]
fn match_is_full_string() {
    let engine = RegexEngine::compile("a[^/]*").unwrap();
    assert!(engine.is_match("abc"));
    assert!(!engine.is_match("xabc"));
    assert!(!engine.is_match("abc/d"));
}

#[test]
fn empty_pattern_matches_only_empty_string() {
    let engine = RegexEngine::compile("").unwrap();
    assert!(engine.is_match(""));
    assert!(!engine.is_match("a"));
}

#[test]
fn invalid_pattern_fails_to_compile() {
    assert!(RegexEngine::compile("(unclosed").is_none());
}

#[test]
fn escaped_punctuation_is_accepted() {
    // The glob translator emits escapes like `\,` and `\ `.
    let engine = RegexEngine::compile("a\\,b\\ c\\-d").unwrap();
    assert!(engine.is_match("a,b c-d"));
}

#[test]
fn clones_share_the_compiled_pattern() {
    let engine = RegexEngine::compile("x+").unwrap();
    let copy = engine.clone();
    assert!(engine.is_match("xxx"));
    assert!(copy.is_match("xxx"));
}

#[test]
fn matches_unicode_names() {
    let engine = RegexEngine::compile("[^/]+\\.md").unwrap();
    assert!(engine.is_match("українська.md"));
    assert!(!engine.is_match("dir/한국어.md"));
}
