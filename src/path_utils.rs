use std::borrow::Cow;
use std::path::Path;

/// Render a path with forward slashes regardless of platform.
///
/// Gitignore matching is defined on `/`-separated paths, so all full-path
/// comparisons in the filters go through this helper.
#[must_use]
pub fn to_slash_string(path: &Path) -> String {
    let s = path.to_string_lossy();
    if cfg!(windows) {
        s.replace('\\', "/")
    } else {
        s.into_owned()
    }
}

/// Render a path for output: forward slashes, without a leading `./`.
#[must_use]
pub fn display_path(path: &Path) -> String {
    let s = to_slash_string(path);
    match s.strip_prefix("./") {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => s,
    }
}

/// Escape a rendered path into a literal glob fragment.
///
/// Used when a filesystem path becomes the anchor prefix of an anchored
/// pattern, so that glob metacharacters in directory names stay literal.
#[must_use]
pub fn glob_escaped_anchor(path: &Path) -> String {
    let mut anchor = crate::glob::glob_escape(&to_slash_string(path));
    anchor.push('/');
    anchor
}

#[must_use]
pub(crate) fn lossy_file_name(path: &Path) -> Cow<'_, str> {
    path.file_name().unwrap_or_default().to_string_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_path_strips_dot_slash() {
        assert_eq!(display_path(Path::new("./src/main.rs")), "src/main.rs");
    }

    #[test]
    fn display_path_keeps_plain_relative() {
        assert_eq!(display_path(Path::new("src/main.rs")), "src/main.rs");
    }

    #[test]
    fn display_path_keeps_bare_dot_slash() {
        assert_eq!(display_path(Path::new("./")), "./");
    }

    #[test]
    fn anchor_escapes_glob_metacharacters() {
        assert_eq!(
            glob_escaped_anchor(Path::new("/tmp/[weird]")),
            "/tmp/\\[weird]/"
        );
    }

    #[test]
    fn lossy_file_name_of_root_is_empty() {
        assert_eq!(lossy_file_name(Path::new("/")), "");
    }
}
