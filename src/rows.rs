use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::nav::SearchParams;

/// Rows the search box filters. One row per line; blank lines are skipped.
#[derive(Debug, Clone)]
pub struct RowSet {
    rows: Vec<String>,
}

impl RowSet {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read rows file {}", path.display()))?;
        let rows = content
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Self { rows })
    }

    /// Built-in demo data, used when no rows file is configured.
    pub fn sample() -> Self {
        let rows = [
            "Amy Burns <amy@burns.com> - $1,200 pending",
            "Balazs Orban <balazs@orban.dev> - $450 paid",
            "Delba de Oliveira <delba@oliveira.com> - $8,945 paid",
            "Evil Rabbit <evil@rabbit.com> - $666 pending",
            "Guillermo Rauch <guillermo@rauch.dev> - $32,545 paid",
            "Hector Simpson <hector@simpson.com> - $250 paid",
            "Jared Palmer <jared@palmer.dev> - $3,040 pending",
            "Lee Robinson <lee@robinson.tech> - $500 paid",
            "Michael Novotny <michael@novotny.dev> - $1,000 pending",
            "Steph Dietz <steph@dietz.io> - $448 paid",
            "Steven Tey <steven@tey.sh> - $120 pending",
        ];
        Self {
            rows: rows.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Case-insensitive substring filter. An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&str> {
        if query.is_empty() {
            return self.rows.iter().map(String::as_str).collect();
        }
        let needle = query.to_lowercase();
        self.rows
            .iter()
            .filter(|row| row.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Current 1-based page from the `page` query parameter. Absent, garbage,
/// or zero all mean page 1.
pub fn page_param(params: &SearchParams) -> usize {
    params
        .get("page")
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}

/// Total page count for `total` rows; at least 1 so an empty result still
/// renders as page 1/1.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size).max(1)
}

/// Slice of `rows` for a 1-based page. Pages past the end are empty.
pub fn page_of<'a>(rows: &'a [&'a str], page: usize, page_size: usize) -> &'a [&'a str] {
    let start = (page - 1).saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = (start + page_size).min(rows.len());
    &rows[start..end]
}
