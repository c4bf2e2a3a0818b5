/// Dialect a glob line is parsed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecomposeMode {
    /// `.gitignore` dialect: `#` starts a comment, `!` inverts a rule.
    #[default]
    Ignore,
    /// Selection dialect: no comments, `-` inverts a rule.
    Select,
}

impl DecomposeMode {
    const fn marker(self) -> char {
        match self {
            Self::Ignore => '!',
            Self::Select => '-',
        }
    }
}

/// A glob line broken into its pattern text and qualifier flags.
///
/// An empty `pattern` marks a line carrying no rule (blank, comment, or
/// reduced to nothing by trimming); callers drop such decompositions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decomposition<'a> {
    pub pattern: &'a str,
    pub is_inverted: bool,
    pub is_anchored: bool,
    pub is_directory: bool,
}

impl Decomposition<'_> {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

/// Parse one glob line into a [`Decomposition`].
///
/// A single leading `\` escapes the following character, suppressing
/// comment and inversion-marker handling. Unescaped trailing spaces are
/// stripped; a `\ `-escaped trailing space is kept, backslash included,
/// for the translator to unescape. Leading `/`s anchor the pattern and
/// are stripped; a trailing `/` marks a directory-only rule.
#[must_use]
pub fn decompose(line: &str, mode: DecomposeMode) -> Decomposition<'_> {
    if line.is_empty() || (mode == DecomposeMode::Ignore && line.starts_with('#')) {
        return Decomposition::default();
    }

    let mut rest = line;
    let mut is_inverted = false;
    if let Some(stripped) = rest.strip_prefix('\\') {
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix(mode.marker()) {
        rest = stripped;
        is_inverted = true;
    }

    while let Some(stripped) = rest.strip_suffix(' ') {
        if stripped.ends_with('\\') {
            break;
        }
        rest = stripped;
    }
    if rest.is_empty() {
        return Decomposition::default();
    }

    // `/` anywhere but the final byte anchors the pattern.
    let is_anchored = rest.as_bytes()[..rest.len() - 1].contains(&b'/');
    let is_directory = rest.ends_with('/');
    if is_directory {
        rest = &rest[..rest.len() - 1];
    }
    let rest = rest.trim_start_matches('/');
    if rest.is_empty() {
        return Decomposition::default();
    }

    Decomposition {
        pattern: rest,
        is_inverted,
        is_anchored,
        is_directory,
    }
}

#[cfg(test)]
#[path = "decompose_tests.rs"]
mod tests;
