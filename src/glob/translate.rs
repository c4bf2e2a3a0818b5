//! Glob to regular-expression translation.
//!
//! The translation preserves the gitignore rule that `/` only ever
//! matches itself: `?`, `*` and character classes all exclude the path
//! separator. Classes whose ranges straddle `/` are split around it
//! instead of using lookahead, so the output stays valid for simple
//! regex engines.

/// Matches any single character except the path separator.
const ATOM: &str = "[^/]";

const fn is_regex_meta(c: char, hyphen: bool) -> bool {
    matches!(
        c,
        ' ' | '#'
            | '$'
            | '&'
            | '('
            | ')'
            | '*'
            | '+'
            | '.'
            | '?'
            | '['
            | '\\'
            | ']'
            | '^'
            | '{'
            | '|'
            | '}'
            | '~'
    ) || (hyphen && c == '-')
}

fn push_escaped(out: &mut String, c: char, hyphen: bool) {
    if is_regex_meta(c, hyphen) {
        out.push('\\');
    }
    out.push(c);
}

fn escape_run(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len() * 2);
    for &c in chars {
        push_escaped(&mut out, c, true);
    }
    out
}

/// Translate a run of `*`s starting at `i`; returns the regex fragment
/// and the number of glob characters consumed.
fn star_run(chars: &[char], i: usize) -> (String, usize) {
    let len = chars.len();
    let mut count = 1;
    while i + count < len && chars[i + count] == '*' {
        count += 1;
    }

    let bound_left = i == 0 || chars[i - 1] == '/';
    let dir_right = i + count < len && chars[i + count] == '/';
    let bound_right = i + count >= len || dir_right;

    if count == 2 && bound_left && bound_right {
        // `**/` collapses to zero or more whole path segments.
        return if dir_right {
            ("(.+/)?".to_string(), count + 1)
        } else {
            (".*".to_string(), count)
        };
    }

    let quantifier = if bound_left && bound_right { '+' } else { '*' };
    (format!("{ATOM}{quantifier}"), count)
}

/// Translate the body of a positive character class, splitting ranges
/// that straddle `/` so the separator stays unmatchable.
fn range_to_regex(inner: &[char]) -> String {
    let mut out = String::with_capacity(inner.len() * 2);
    let mut i = 0;
    while i < inner.len() {
        if i + 2 >= inner.len() || inner[i + 1] != '-' {
            push_escaped(&mut out, inner[i], true);
            i += 1;
            continue;
        }

        let from = inner[i];
        let to = inner[i + 2];
        push_escaped(&mut out, from, true);
        out.push('-');
        if from > to || from > '/' || to < '/' {
            push_escaped(&mut out, to, true);
        } else {
            // Split at the characters flanking '/' in ASCII.
            push_escaped(&mut out, '.', true);
            out.push('0');
            out.push('-');
            push_escaped(&mut out, to, true);
        }
        i += 3;
    }
    out
}

/// Translate a character class starting at `i`; returns the regex
/// fragment and the number of glob characters consumed.
///
/// An unterminated class, or one containing `/`, is not a class at all
/// and is escaped literally.
fn class_run(chars: &[char], i: usize) -> (String, usize) {
    let len = chars.len();
    let negative = i + 1 < len && chars[i + 1] == '!';
    let search_from = i + 2 + usize::from(negative);
    let Some(close) = (search_from..len).find(|&j| chars[j] == ']') else {
        return (escape_run(&chars[i..]), len - i);
    };

    let count = close - i + 1;
    if chars[i..=close].contains(&'/') {
        return (escape_run(&chars[i..=close]), count);
    }

    if negative {
        let mut out = String::from("[^/");
        for &c in &chars[i + 2..close] {
            push_escaped(&mut out, c, false);
        }
        out.push(']');
        return (out, count);
    }

    let has_range = i + 2 < close && chars[i + 2..close - 1].contains(&'-');
    let mut out = String::from("[");
    if has_range {
        out.push_str(&range_to_regex(&chars[i + 1..close]));
    } else {
        for &c in &chars[i + 1..close] {
            push_escaped(&mut out, c, true);
        }
    }
    out.push(']');
    (out, count)
}

/// Convert a glob pattern to an equivalent regular expression.
///
/// The result is meant to be matched against the full string.
#[must_use]
pub fn to_regex(glob: &str) -> String {
    let chars: Vec<char> = glob.chars().collect();
    let mut out = String::with_capacity(glob.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '?' => {
                out.push_str(ATOM);
                i += 1;
            }
            '*' => {
                let (fragment, consumed) = star_run(&chars, i);
                out.push_str(&fragment);
                i += consumed;
            }
            '[' => {
                let (fragment, consumed) = class_run(&chars, i);
                out.push_str(&fragment);
                i += consumed;
            }
            '\\' => {
                if let Some(&next) = chars.get(i + 1) {
                    // Keep the escape for punctuation; drop it for
                    // alphanumerics so no regex class is fabricated.
                    if next.is_alphanumeric() {
                        out.push(next);
                    } else {
                        out.push('\\');
                        out.push(next);
                    }
                    i += 2;
                } else {
                    out.push_str("\\\\");
                    i += 1;
                }
            }
            c => {
                push_escaped(&mut out, c, true);
                i += 1;
            }
        }
    }
    out
}

/// Escape a literal string into a glob fragment: `?`, `*` and `[` lose
/// their special meaning.
#[must_use]
pub fn glob_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '?' | '*' | '[') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[path = "translate_tests.rs"]
mod tests;
