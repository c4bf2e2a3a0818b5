use std::io::Write;
use std::path::Path;

use clap::Parser;

use glist::cli::{Cli, Invocation};
use glist::explorer::Explorer;
use glist::filter::SelectFilter;
use glist::glob::{DecomposeMode, TypetagDatabase, decompose};
use glist::path_utils::display_path;
use glist::{EXIT_SUCCESS, EXIT_USAGE_ERROR};

const LICENSE: &str = "\
glist is provided under the MIT license.

Permission is hereby granted, free of charge, to any person obtaining a
copy of this software and associated documentation files (the
\"Software\"), to deal in the Software without restriction, including
without limitation the rights to use, copy, modify, merge, publish,
distribute, sublicense, and/or sell copies of the Software, and to
permit persons to whom the Software is furnished to do so, subject to
the following conditions:

The above copyright notice and this permission notice shall be included
in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND,
EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY
CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE
SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
";

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            // Parse failures are user-input errors: exit 1, not clap's 2.
            eprint!("{err}");
            return EXIT_USAGE_ERROR;
        }
        Err(err) => {
            // --help or --version.
            print!("{err}");
            return EXIT_SUCCESS;
        }
    };

    if cli.license {
        print!("{LICENSE}");
        return EXIT_SUCCESS;
    }
    if cli.help_tags {
        print_tags(&TypetagDatabase::default());
        return EXIT_SUCCESS;
    }

    let invocation = match Invocation::from_cli(cli) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("Try '--help' for more information.");
            return EXIT_USAGE_ERROR;
        }
    };

    if invocation.list {
        run_list(&invocation)
    } else {
        eprintln!("Error: pattern search is not implemented yet, use --list to enumerate files");
        EXIT_USAGE_ERROR
    }
}

fn run_list(invocation: &Invocation) -> i32 {
    // Validate every root up front so output is never cut off mid-stream.
    let mut all_valid = true;
    for root in &invocation.paths {
        if !root.is_dir() {
            eprintln!("Error: Cannot access path: {}", root.display());
            all_valid = false;
        }
    }
    if !all_valid {
        return EXIT_USAGE_ERROR;
    }

    let database = TypetagDatabase::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for root in &invocation.paths {
        let explorer = match build_explorer(invocation, &database, root) {
            Ok(explorer) => explorer,
            Err(err) => {
                eprintln!("Error: {err}");
                return EXIT_USAGE_ERROR;
            }
        };
        for entry in explorer {
            if writeln!(out, "{}", display_path(entry.path())).is_err() {
                // Downstream closed the pipe; stop quietly.
                return EXIT_SUCCESS;
            }
        }
    }
    EXIT_SUCCESS
}

fn build_explorer(
    invocation: &Invocation,
    database: &TypetagDatabase,
    root: &Path,
) -> glist::Result<Explorer> {
    match build_select(&invocation.filters, database, root) {
        Some(select) => Explorer::with_select(root, select),
        None => Explorer::new(root),
    }
}

/// Expand typetag references and compile all `--filter` expressions
/// into one selection filter, rules in argument order.
fn build_select(
    filters: &[String],
    database: &TypetagDatabase,
    root: &Path,
) -> Option<SelectFilter> {
    if filters.is_empty() {
        return None;
    }
    let mut globs = Vec::new();
    for expr in filters {
        for token in database.expand(expr) {
            globs.push(decompose(token, DecomposeMode::Select));
        }
    }
    Some(SelectFilter::new(&globs, root))
}

fn print_tags(database: &TypetagDatabase) {
    for (name, globs) in database.tags() {
        println!("#{name}: {}", globs.join(","));
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
