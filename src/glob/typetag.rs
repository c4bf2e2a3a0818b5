use std::collections::BTreeMap;

use super::split;

/// Named groups of globs, referenced as `#name` (or `-#name` for the
/// negated form) inside select expressions.
#[derive(Debug, Clone)]
pub struct TypetagDatabase {
    tags: BTreeMap<String, Expansion>,
}

#[derive(Debug, Clone)]
struct Expansion {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl TypetagDatabase {
    /// Build a database from `(name, comma-joined globs)` pairs.
    pub fn new<I, N, G>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, G)>,
        N: Into<String>,
        G: AsRef<str>,
    {
        let tags = entries
            .into_iter()
            .map(|(name, globs)| {
                let positive: Vec<String> = split(globs.as_ref(), ',')
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                let negative = positive.iter().map(|glob| format!("-{glob}")).collect();
                (name.into(), Expansion { positive, negative })
            })
            .collect();
        Self { tags }
    }

    /// A database with no tags at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tags: BTreeMap::new(),
        }
    }

    /// Split a select expression and expand every tag reference in place.
    #[must_use]
    pub fn expand<'a>(&'a self, globs: &'a str) -> Vec<&'a str> {
        self.expand_tokens(split(globs, ','))
    }

    /// Expand tag references in an already-split token sequence.
    ///
    /// Non-tag tokens (empty ones included) and unknown tags pass
    /// through unchanged, in their original positions.
    pub fn expand_tokens<'a>(&'a self, tokens: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        let mut result = Vec::new();
        for token in tokens {
            let expansion = match token.strip_prefix('#') {
                Some(name) => self.tags.get(name).map(|tag| &tag.positive),
                None => token
                    .strip_prefix("-#")
                    .and_then(|name| self.tags.get(name))
                    .map(|tag| &tag.negative),
            };
            match expansion {
                Some(globs) => result.extend(globs.iter().map(String::as_str)),
                None => result.push(token),
            }
        }
        result
    }

    /// Tag names with their positive expansions, in name order.
    pub fn tags(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.tags
            .iter()
            .map(|(name, expansion)| (name.as_str(), expansion.positive.as_slice()))
    }
}

/// The built-in tag table.
impl Default for TypetagDatabase {
    fn default() -> Self {
        Self::new([
            ("c", "*.c,*.h"),
            ("cmake", "CMakeLists.txt,*.cmake"),
            ("cpp", "*.cpp,*.cxx,*.hpp,*.hxx"),
            ("cs", "*.cs"),
            ("css", "*.css,*.scss"),
            ("go", "*.go"),
            ("html", "*.html,*.htm"),
            ("java", "*.java"),
            ("js", "*.js,*.jsx,*.mjs"),
            ("json", "*.json"),
            ("make", "Makefile,makefile,*.mk"),
            ("md", "*.md"),
            ("py", "*.py"),
            ("rb", "*.rb"),
            ("rust", "*.rs"),
            ("sh", "*.sh,*.bash"),
            ("toml", "*.toml"),
            ("ts", "*.ts,*.tsx"),
            ("yaml", "*.yaml,*.yml"),
        ])
    }
}

#[cfg(test)]
#[path = "typetag_tests.rs"]
mod tests;
