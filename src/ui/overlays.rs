use crate::app::state::AppState;
use crate::i18n::Language;
use crate::ui::layout::{self, AppLayout};
use crate::ui::palette;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render_language_menu(frame: &mut Frame, app_layout: &AppLayout, state: &AppState) {
    let Some(menu) = state.language_menu.as_ref() else {
        return;
    };
    let area = layout::language_menu_area(app_layout, Language::ALL.len(), frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default()
            .title(format!(" {} ", state.strings().language))
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::border_focused())
            .style(Style::default().bg(Theme::BG_SURFACE)),
        area,
    );

    for (i, lang) in Language::ALL.iter().enumerate() {
        let style = if i == menu.selected {
            Theme::menu_item_active()
        } else {
            Theme::menu_item()
        };
        let mark = if *lang == state.language { "✓" } else { " " };
        let text = format!(" {} {}", mark, lang.code().to_uppercase());
        frame.render_widget(
            Paragraph::new(Span::styled(text, style)),
            layout::menu_item_rect(area, i),
        );
    }
}

pub fn render_color_picker(frame: &mut Frame, state: &AppState) {
    let Some(picker) = state.picker.as_ref() else {
        return;
    };
    let s = state.strings();
    let label = state
        .tally
        .candidate(&picker.candidate)
        .map(|c| c.label.as_str())
        .unwrap_or_default();

    let area = layout::color_picker_area(frame.area());
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {} · {} ", s.change_color, label))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, (_, hex)) in palette::SWATCHES.iter().enumerate() {
        let color = palette::display_color(hex);
        let selected = i == picker.swatch && picker.hex.text.is_empty();
        let (open, close) = if selected { ("[", "]") } else { (" ", " ") };
        let line = Line::from(vec![
            Span::styled(open, Theme::title()),
            Span::styled("██", Style::default().fg(color)),
            Span::styled(close, Theme::title()),
        ]);
        frame.render_widget(Paragraph::new(line), layout::swatch_rect(area, i));
    }

    let hex_row = Rect::new(inner.x + 1, inner.y + 2, inner.width.saturating_sub(2), 1);
    let prompt = s.hex_prompt;
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(prompt, Theme::text()),
            Span::styled(picker.hex.text.as_str(), Theme::input_text()),
        ])),
        hex_row,
    );
    let cursor_x = hex_row.x + prompt.width() as u16 + picker.hex.before_cursor().width() as u16;
    frame.set_cursor_position((cursor_x.min(hex_row.right().saturating_sub(1)), hex_row.y));

    let preview_row = Rect::new(inner.x + 1, inner.y + 3, inner.width.saturating_sub(2), 1);
    let preview = match picker.chosen() {
        Some(hex) => Line::from(vec![
            Span::styled("      ", Style::default().bg(palette::display_color(&hex))),
            Span::styled(format!(" {}", hex), Theme::text()),
        ]),
        None => Line::from(Span::styled(s.invalid_hex, Style::default().fg(Color::LightRed))),
    };
    frame.render_widget(Paragraph::new(preview), preview_row);

    let hint_row = Rect::new(inner.x + 1, inner.bottom().saturating_sub(1), inner.width.saturating_sub(2), 1);
    frame.render_widget(Paragraph::new(Span::styled(s.picker_hint, Theme::hint())), hint_row);
}
