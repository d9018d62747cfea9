use ratatui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub header_style: Style,
    pub row_style: Style,
    pub footer_style: Style,
    pub input_style: Style,
    pub placeholder_style: Style,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            header_style: Style::default().fg(Color::Cyan),
            row_style: Style::default().fg(Color::White),
            footer_style: Style::default().fg(Color::DarkGray),
            input_style: Style::default().fg(Color::White),
            placeholder_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            header_style: Style::default().fg(Color::Blue),
            row_style: Style::default().fg(Color::Black),
            footer_style: Style::default().fg(Color::Gray),
            input_style: Style::default().fg(Color::Black),
            placeholder_style: Style::default().fg(Color::Gray),
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}
