use std::path::PathBuf;

use clap::Parser;

use crate::error::{GlistError, Result};

/// Searches paths for lines matching given patterns. Paths that are
/// directories are recursively enumerated, using any encountered
/// `.gitignore` files as filter.
#[derive(Parser, Debug)]
#[command(name = "glist", version, about, max_term_width = 80)]
pub struct Cli {
    /// Search for lines matching PATTERN.
    #[arg(value_name = "PATTERN")]
    pub positional: Option<String>,

    /// Search files in given PATH, defaults to current directory.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Search for lines matching PATTERN. Can be used to specify
    /// multiple patterns, or ones starting with a dash.
    #[arg(
        short = 'e',
        long = "regexp",
        value_name = "PATTERN",
        allow_hyphen_values = true
    )]
    pub patterns: Vec<String>,

    /// Print all files that would be searched.
    #[arg(
        short = 'E',
        long = "no-regexp",
        visible_alias = "list",
        conflicts_with = "patterns"
    )]
    pub list: bool,

    /// Only search in files that match given filter.
    #[arg(
        short = 'f',
        long = "filter",
        value_name = "FILTER",
        allow_hyphen_values = true
    )]
    pub filters: Vec<String>,

    /// Print license information and exit.
    #[arg(long, help_heading = "Help")]
    pub license: bool,

    /// Print the known typetags and their globs, then exit.
    #[arg(long = "help-tags", help_heading = "Help")]
    pub help_tags: bool,
}

/// A validated invocation, with the leading positional routed to
/// either the pattern list or the path list.
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub patterns: Vec<String>,
    pub paths: Vec<PathBuf>,
    pub filters: Vec<String>,
    pub list: bool,
}

impl Invocation {
    /// Resolve the parsed arguments.
    ///
    /// The first positional is a search pattern when no pattern was
    /// given through `--regexp` and `--list` is not set; otherwise it
    /// is a path. Exactly one of a pattern or `--list` must be chosen.
    ///
    /// # Errors
    /// Returns a usage error when neither a pattern nor `--list` was
    /// supplied.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let mut patterns = cli.patterns;
        let mut paths = cli.paths;
        if let Some(positional) = cli.positional {
            if !cli.list && patterns.is_empty() {
                patterns.insert(0, positional);
            } else {
                paths.insert(0, PathBuf::from(positional));
            }
        }

        if !cli.list && patterns.is_empty() {
            return Err(GlistError::Usage(
                "Exactly 1 option from [PATTERN,--regexp,--no-regexp] is required".to_string(),
            ));
        }

        if paths.is_empty() {
            paths.push(PathBuf::from("."));
        }

        Ok(Self {
            patterns,
            paths,
            filters: cli.filters,
            list: cli.list,
        })
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
