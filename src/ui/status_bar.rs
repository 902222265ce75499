use crate::app::state::AppState;
use crate::tally::Phase;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" [{}] ", state.language.code().to_uppercase()),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    match &state.status {
        Some(msg) if msg.is_error => {
            parts.push(Span::styled(format!(" {} ", msg.text), Theme::status_error()))
        }
        Some(msg) => parts.push(Span::styled(format!(" {} ", msg.text), Theme::status_bar())),
        None => parts.push(Span::styled(
            format!(
                " {} {} ",
                state.strings().total_votes,
                state.tally.total_votes()
            ),
            Theme::status_bar(),
        )),
    }

    // Mode indicator
    let s = state.strings();
    let mode_name = if state.language_menu.is_some() {
        s.mode_language
    } else if state.picker.is_some() {
        s.mode_color
    } else if state.editor.is_some() {
        s.mode_edit
    } else {
        match state.tally.phase() {
            Phase::Voting => s.mode_voting,
            Phase::Revealed => s.mode_revealed,
        }
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + mode_name.width() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", mode_name),
        Style::default().fg(Theme::ACCENT).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
