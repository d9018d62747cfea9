use tracing::debug;

use crate::nav::Location;

/// Single-line search input. The value is seeded from the location's
/// `query` parameter at mount; edits flow through the debouncer before
/// they touch navigation.
#[derive(Debug, Clone)]
pub struct SearchBox {
    pub input: String,
    /// Cursor position in chars, not bytes.
    pub cursor: usize,
    pub placeholder: String,
}

impl SearchBox {
    pub fn mount(placeholder: impl Into<String>, location: &Location) -> Self {
        let input = location.params.get("query").unwrap_or("").to_string();
        let cursor = input.chars().count();
        Self {
            input,
            cursor,
            placeholder: placeholder.into(),
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    pub fn insert_at_cursor(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace_at_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_index(self.cursor - 1);
        self.input.remove(at);
        self.cursor -= 1;
        true
    }

    pub fn delete_at_cursor(&mut self) -> bool {
        if self.cursor >= self.input.chars().count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.input.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.input.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.chars().count();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }
}

/// The debounced search effect: copy the current params, reset to the
/// first page, then set or delete `query` depending on the trimmed term.
/// Unrelated parameters and the path are left alone.
pub fn apply_search(current: &Location, term: &str) -> Location {
    debug!(target: "search", term, "debounced search");
    let mut params = current.params.clone();
    params.set("page", "1");
    let term = term.trim();
    if term.is_empty() {
        params.delete("query");
    } else {
        params.set("query", term);
    }
    Location {
        path: current.path.clone(),
        params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_sets_query_and_resets_page() {
        let current = Location::parse("/dashboard/invoices?query=abc&page=2");
        let next = apply_search(&current, "xyz");
        assert_eq!(next.to_string(), "/dashboard/invoices?query=xyz&page=1");
    }

    #[test]
    fn clearing_removes_query_and_resets_page() {
        let current = Location::parse("/dashboard/invoices?query=abc&page=2");
        let next = apply_search(&current, "");
        assert_eq!(next.to_string(), "/dashboard/invoices?page=1");
    }

    #[test]
    fn whitespace_only_term_behaves_as_empty() {
        let current = Location::parse("/a?query=abc");
        let next = apply_search(&current, "   ");
        assert_eq!(next.params.get("query"), None);
        assert_eq!(next.params.get("page"), Some("1"));
    }

    #[test]
    fn unrelated_params_are_preserved_in_order() {
        let current = Location::parse("/a?sort=amount&query=abc&dir=desc&page=5");
        let next = apply_search(&current, "new");
        assert_eq!(next.to_string(), "/a?sort=amount&query=new&dir=desc&page=1");
    }

    #[test]
    fn search_from_bare_location_adds_both_params() {
        let current = Location::parse("/a");
        let next = apply_search(&current, "term");
        assert_eq!(next.to_string(), "/a?page=1&query=term");
    }

    #[test]
    fn mount_seeds_input_from_query_param() {
        let loc = Location::parse("/a?query=hello&page=2");
        let search = SearchBox::mount("Search invoices...", &loc);
        assert_eq!(search.input, "hello");
        assert_eq!(search.cursor, 5);

        let bare = SearchBox::mount("Search invoices...", &Location::parse("/a"));
        assert_eq!(bare.input, "");
    }

    #[test]
    fn cursor_editing_is_char_based() {
        let mut search = SearchBox::mount("", &Location::parse("/"));
        for c in "héllo".chars() {
            search.insert_at_cursor(c);
        }
        assert_eq!(search.input, "héllo");
        search.move_home();
        search.move_right();
        assert!(search.delete_at_cursor());
        assert_eq!(search.input, "hllo");
        search.move_end();
        assert!(search.backspace_at_cursor());
        assert_eq!(search.input, "hll");
        assert!(!search.delete_at_cursor());
    }
}
