use std::fmt;

use crate::nav::params::SearchParams;

/// A client-side location: path plus query parameters. The query string is
/// the only state this app persists anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub params: SearchParams,
}

impl Location {
    /// Lenient parse of `path?query`. Everything after the first `?` is
    /// treated as the query string. Never fails.
    pub fn parse(s: &str) -> Self {
        match s.split_once('?') {
            Some((path, query)) => Self {
                path: path.to_string(),
                params: SearchParams::parse(query),
            },
            None => Self {
                path: s.to_string(),
                params: SearchParams::new(),
            },
        }
    }

}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}?{}", self.path, self.params.serialize())
        }
    }
}
