use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::AppConfig;
use crate::debounce::Debouncer;
use crate::nav::{History, Location};
use crate::rows::{RowSet, page_count, page_of, page_param};
use crate::tui::search::{SearchBox, apply_search};
use crate::tui::theme::Theme;

/// Messages delivered to the event loop from deferred work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A debounced search fired with this term.
    Search(String),
}

pub struct App {
    pub history: History,
    pub search: SearchBox,
    pub rows: RowSet,
    pub page_size: usize,
    pub theme: Theme,
    pub debouncer: Debouncer,
    inbox_tx: Sender<Msg>,
    inbox_rx: Receiver<Msg>,
}

impl App {
    pub fn new(cfg: &AppConfig, rows: RowSet) -> Self {
        let start = Location::parse(&cfg.start_location);
        let search = SearchBox::mount(cfg.placeholder.clone(), &start);
        let (inbox_tx, inbox_rx) = mpsc::channel();
        Self {
            history: History::new(start),
            search,
            rows,
            page_size: cfg.page_size,
            theme: Theme::by_name(&cfg.theme),
            debouncer: Debouncer::new(Duration::from_millis(cfg.debounce_ms)),
            inbox_tx,
            inbox_rx,
        }
    }

    /// (Re)arm the debouncer after an edit. When the quiet interval
    /// elapses the current input value lands in the inbox.
    pub fn on_edit(&mut self) {
        let tx = self.inbox_tx.clone();
        let term = self.search.input.clone();
        self.debouncer.call(move || {
            tx.send(Msg::Search(term)).ok();
        });
    }

    /// Drain deferred messages. Returns true when anything changed.
    pub fn drain_inbox(&mut self) -> bool {
        let drained: Vec<Msg> = self.inbox_rx.try_iter().collect();
        let dirty = !drained.is_empty();
        for msg in drained {
            match msg {
                Msg::Search(term) => self.handle_search(&term),
            }
        }
        dirty
    }

    /// The debounced navigation update: replace, never push.
    pub fn handle_search(&mut self, term: &str) {
        let next = apply_search(self.history.current(), term);
        self.history.replace(next);
    }

    pub fn query(&self) -> &str {
        self.history.current().params.get("query").unwrap_or("")
    }

    pub fn current_page(&self) -> usize {
        page_param(&self.history.current().params)
    }

    pub fn matches(&self) -> Vec<&str> {
        self.rows.filter(self.query())
    }

    /// Pagination navigates like a link click: a new history entry.
    fn goto_page(&mut self, page: usize) {
        let current = self.history.current();
        let mut params = current.params.clone();
        params.set("page", &page.to_string());
        let next = Location {
            path: current.path.clone(),
            params,
        };
        self.history.push(next);
    }

    pub fn next_page(&mut self) {
        let pages = page_count(self.matches().len(), self.page_size);
        let page = self.current_page();
        if page < pages {
            self.goto_page(page + 1);
        }
    }

    pub fn prev_page(&mut self) {
        let page = self.current_page();
        if page > 1 {
            self.goto_page(page - 1);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub header_line: String,
    pub row_lines: Vec<String>,
    pub footer_line: String,
    pub input_line: String,
    pub input_is_placeholder: bool,
    /// Display column of the cursor within the input text.
    pub cursor_col: u16,
}

pub fn truncate_display(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let mut width = 0usize;
    let mut out = String::new();
    for ch in s.chars() {
        let ch_w = ch.width().unwrap_or(0);
        if ch_w == 0 {
            out.push(ch);
            continue;
        }
        if width + ch_w > max {
            break;
        }
        out.push(ch);
        width += ch_w;
    }
    out
}

pub fn build_render_plan(app: &App, w: u16) -> RenderPlan {
    let w_usize = w as usize;
    let location = app.history.current();
    let header_line = truncate_display(&format!("searchbox  {location}"), w_usize);

    let matches = app.matches();
    let total = matches.len();
    let pages = page_count(total, app.page_size);
    let page = app.current_page();
    let row_lines = page_of(&matches, page, app.page_size)
        .iter()
        .map(|row| truncate_display(row, w_usize))
        .collect();

    let mut footer_line = format!("page {page}/{pages}  ({total} matches)");
    if app.debouncer.is_pending() {
        footer_line.push_str("  [searching...]");
    }
    let footer_line = truncate_display(&footer_line, w_usize);

    let input_is_placeholder = app.search.input.is_empty();
    let input_line = if input_is_placeholder {
        truncate_display(&app.search.placeholder, w_usize)
    } else {
        truncate_display(&app.search.input, w_usize)
    };
    let cursor_col = app
        .search
        .input
        .chars()
        .take(app.search.cursor)
        .collect::<String>()
        .width() as u16;

    RenderPlan {
        header_line,
        row_lines,
        footer_line,
        input_line,
        input_is_placeholder,
        cursor_col,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(start: &str) -> App {
        let cfg = AppConfig {
            start_location: start.to_string(),
            ..AppConfig::default()
        };
        App::new(&cfg, RowSet::sample())
    }

    // Let the debounce task get polled so its sleep registers against the
    // paused clock before we advance it.
    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_edits_produce_exactly_one_navigation() {
        let mut app = test_app("/dashboard/invoices");
        for c in "xyz".chars() {
            app.search.insert_at_cursor(c);
            app.on_edit();
            settle().await;
            tokio::time::advance(Duration::from_millis(100)).await;
        }
        assert!(!app.drain_inbox());
        tokio::time::advance(Duration::from_millis(600)).await;
        settle().await;
        assert!(app.drain_inbox());
        assert_eq!(
            app.history.current().to_string(),
            "/dashboard/invoices?page=1&query=xyz"
        );
        // Replace navigation: still a single history entry.
        assert_eq!(app.history.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_input_drops_query_param() {
        let mut app = test_app("/dashboard/invoices?query=abc&page=2");
        assert_eq!(app.search.input, "abc");
        app.search.clear();
        app.on_edit();
        settle().await;
        tokio::time::advance(Duration::from_millis(501)).await;
        settle().await;
        app.drain_inbox();
        assert_eq!(app.history.current().to_string(), "/dashboard/invoices?page=1");
    }

    #[test]
    fn pagination_pushes_history_entries() {
        let mut app = test_app("/a");
        app.page_size = 5;
        app.next_page();
        assert_eq!(app.current_page(), 2);
        assert_eq!(app.history.len(), 2);
        app.prev_page();
        assert_eq!(app.current_page(), 1);
        // At the last page, next is a no-op.
        app.page_size = 100;
        let len = app.history.len();
        app.next_page();
        assert_eq!(app.history.len(), len);
    }

    #[test]
    fn render_plan_shows_placeholder_when_empty() {
        let mut app = test_app("/a");
        app.search.placeholder = "Search invoices...".to_string();
        let plan = build_render_plan(&app, 80);
        assert!(plan.input_is_placeholder);
        assert_eq!(plan.input_line, "Search invoices...");
        assert_eq!(plan.cursor_col, 0);

        app.search.insert_at_cursor('a');
        let plan = build_render_plan(&app, 80);
        assert!(!plan.input_is_placeholder);
        assert_eq!(plan.input_line, "a");
        assert_eq!(plan.cursor_col, 1);
    }

    #[test]
    fn render_plan_filters_and_paginates() {
        let mut app = test_app("/a?query=pending");
        app.page_size = 3;
        let plan = build_render_plan(&app, 120);
        assert_eq!(plan.row_lines.len(), 3);
        assert!(plan.footer_line.starts_with("page 1/2"));
        assert!(plan.row_lines.iter().all(|r| r.contains("pending")));
    }

    #[test]
    fn truncate_display_is_width_aware() {
        assert_eq!(truncate_display("hello", 3), "hel");
        assert_eq!(truncate_display("hello", 10), "hello");
        assert_eq!(truncate_display("日本語", 4), "日本");
        assert_eq!(truncate_display("hello", 0), "");
    }
}
