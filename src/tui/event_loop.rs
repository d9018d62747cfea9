use std::io::Stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::tui::state::App;

impl App {
    pub fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut dirty = true;
        loop {
            if self.drain_inbox() {
                dirty = true;
            }
            // Keep the "searching..." hint in the footer fresh while a
            // debounce is pending.
            if self.debouncer.is_pending() {
                dirty = true;
            }

            if event::poll(Duration::from_millis(50))?
                && let Event::Key(k) = event::read()?
            {
                match k.code {
                    KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.search.clear();
                        self.on_edit();
                    }
                    KeyCode::Esc => {
                        return Ok(());
                    }
                    KeyCode::Char(c) if !k.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.search.insert_at_cursor(c);
                        self.on_edit();
                    }
                    KeyCode::Backspace => {
                        if self.search.backspace_at_cursor() {
                            self.on_edit();
                        }
                    }
                    KeyCode::Delete => {
                        if self.search.delete_at_cursor() {
                            self.on_edit();
                        }
                    }
                    KeyCode::Left if k.modifiers.contains(KeyModifiers::ALT) => {
                        self.history.back();
                    }
                    KeyCode::Right if k.modifiers.contains(KeyModifiers::ALT) => {
                        self.history.forward();
                    }
                    KeyCode::Left => self.search.move_left(),
                    KeyCode::Right => self.search.move_right(),
                    KeyCode::Home => self.search.move_home(),
                    KeyCode::End => self.search.move_end(),
                    KeyCode::PageDown => self.next_page(),
                    KeyCode::PageUp => self.prev_page(),
                    _ => {}
                }
                dirty = true;
            }

            if dirty {
                terminal.draw(|f| self.view(f))?;
                dirty = false;
            }
        }
    }
}
