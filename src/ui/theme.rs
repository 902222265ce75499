use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Rgb(99, 102, 241);
    pub const BG_SURFACE: Color = Color::Rgb(31, 41, 55);

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::Black).bg(Color::Gray)
    }

    pub fn button_selected() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn menu_item() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn menu_item_active() -> Style {
        Style::default().fg(Color::White).bg(Self::ACCENT)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White).bg(Self::BG_SURFACE)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Color::LightRed).bg(Color::DarkGray)
    }
}
