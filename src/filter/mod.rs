mod ignore;
mod select;

pub use ignore::IgnoreFilter;
pub use select::SelectFilter;

use std::fmt;

/// A filter's verdict about a directory entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Decision {
    /// The filter does not consider the entry.
    ///
    /// Filters in parent directories should be checked next; if none
    /// decides either, the entry is not excluded.
    #[default]
    Undecided,
    /// The filter excludes the entry.
    Excluded,
    /// The filter explicitly includes the entry.
    ///
    /// Filters in parent directories are not consulted.
    Included,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undecided => "undecided",
            Self::Excluded => "excluded",
            Self::Included => "included",
        };
        f.write_str(name)
    }
}
