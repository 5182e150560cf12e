//! Package order notation and the rank table it produces.
//!
//! Notation: package names separated by commas. Each name gets its own rank, in
//! increasing order starting at 0. Names inside parentheses share one rank:
//!
//! ```text
//! com.acme.util, (com.acme.model, com.acme.net), com.acme.ui
//! ```
//!
//! gives `util = 0`, `model = net = 1`, `ui = 2`. Whitespace is ignored everywhere.

use std::collections::BTreeMap;
use std::io::Read;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankParseError {
    /// A comma with no package name before it (`a,,b` or `,a`).
    #[error("package order parse error: too many commas (',') at position {position}")]
    TooManyCommas { position: usize },

    /// The notation ended inside a parenthesized group.
    #[error("package order parse error: parentheses mismatch")]
    ParenthesesMismatch,

    #[error("package order read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Package name to rank, plus the packages of each rank in notation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankTable {
    rank_of: BTreeMap<String, usize>,
    groups: Vec<Vec<String>>,
}

impl Default for RankTable {
    fn default() -> Self {
        Self {
            rank_of: BTreeMap::new(),
            groups: vec![Vec::new()],
        }
    }
}

impl RankTable {
    pub fn parse(notation: &str) -> Result<Self, RankParseError> {
        Self::from_chars(notation.chars())
    }

    /// Parse notation from a reader (a notation file, stdin, ...).
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, RankParseError> {
        let text = std::io::read_to_string(&mut reader)?;
        Self::parse(&text)
    }

    /// Single forward scan over the notation.
    pub fn from_chars<I>(chars: I) -> Result<Self, RankParseError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut table = RankTable::default();
        let mut buf = String::new();
        let mut in_group = false;

        for (position, ch) in chars.into_iter().enumerate() {
            match ch {
                ',' => {
                    if buf.is_empty() {
                        return Err(RankParseError::TooManyCommas { position });
                    }
                    table.add_package(std::mem::take(&mut buf));
                    if !in_group {
                        table.groups.push(Vec::new());
                    }
                }
                '(' => in_group = true,
                // An unmatched ')' at top level is tolerated.
                ')' => in_group = false,
                c if c.is_whitespace() => {}
                c => buf.push(c),
            }
        }

        if !buf.is_empty() {
            table.add_package(buf);
        }

        if in_group {
            return Err(RankParseError::ParenthesesMismatch);
        }

        Ok(table)
    }

    /// Assign `name` to the current (last) rank. Last assignment wins for `rank`; a
    /// group never lists the same name twice.
    fn add_package(&mut self, name: String) {
        let rank = self.groups.len() - 1;
        let group = &mut self.groups[rank];
        if !group.contains(&name) {
            group.push(name.clone());
        }
        self.rank_of.insert(name, rank);
    }

    /// Rank of `package`, or `None` if the notation does not mention it.
    pub fn rank(&self, package: &str) -> Option<usize> {
        self.rank_of.get(package).copied()
    }

    /// Packages assigned to `rank`, in notation order. Empty when out of bounds.
    pub fn packages_at_rank(&self, rank: usize) -> &[String] {
        self.groups.get(rank).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of rank groups, including a trailing empty group left by a final comma.
    pub fn rank_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of distinct ranked packages.
    pub fn len(&self) -> usize {
        self.rank_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rank_of.is_empty()
    }
}

impl FromStr for RankTable {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RankTable::parse(s)
    }
}
