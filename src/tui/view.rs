use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::tui::state::{App, build_render_plan};

impl App {
    pub fn view(&self, f: &mut Frame) {
        let size = f.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header: current location
                Constraint::Length(3), // search input
                Constraint::Min(1),    // rows
                Constraint::Length(1), // footer: page / match count
            ])
            .split(size);

        let plan = build_render_plan(self, size.width);

        let header = Paragraph::new(plan.header_line).style(self.theme.header_style);
        f.render_widget(header, chunks[0]);

        let input_style = if plan.input_is_placeholder {
            self.theme.placeholder_style
        } else {
            self.theme.input_style
        };
        let input = Paragraph::new(plan.input_line)
            .style(input_style)
            .block(Block::default().borders(Borders::ALL).title("Search"));
        f.render_widget(input, chunks[1]);
        // Block border is one cell on each side.
        f.set_cursor_position(Position::new(
            chunks[1].x + 1 + plan.cursor_col,
            chunks[1].y + 1,
        ));

        let items: Vec<ListItem> = plan
            .row_lines
            .iter()
            .map(|line| ListItem::new(line.clone()))
            .collect();
        let list = List::new(items).style(self.theme.row_style);
        f.render_widget(list, chunks[2]);

        let footer = Paragraph::new(plan.footer_line).style(self.theme.footer_style);
        f.render_widget(footer, chunks[3]);
    }
}
