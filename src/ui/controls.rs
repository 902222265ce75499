use crate::app::state::AppState;
use crate::config::UiMode;
use crate::i18n;
use crate::tally::{Candidate, Outcome};
use crate::ui::layout;
use crate::ui::palette;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render_buttons(frame: &mut Frame, area: Rect, state: &AppState) {
    let s = state.strings();

    if state.tally.is_revealed() {
        let button = Paragraph::new(Span::styled(
            layout::button_text(s.start_new_vote),
            Theme::button_selected(),
        ))
        .centered();
        frame.render_widget(button, area);
        return;
    }

    let candidates = state.tally.candidates();
    let columns = layout::candidate_columns(area, candidates.len());
    for (i, (candidate, col)) in candidates.iter().zip(columns).enumerate() {
        let bg = palette::display_color(&candidate.color);
        let mut style = Style::default().fg(palette::contrast_text(bg)).bg(bg);
        if i == state.selected {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        let text = layout::button_text(&format!("{} {}", s.vote, candidate.label));
        frame.render_widget(Paragraph::new(Span::styled(text, style)).centered(), col);
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let s = state.strings();
    let total = state.tally.total_votes();
    let with_reveal = state.mode == UiMode::Reveal && !state.tally.is_revealed();
    let footer = layout::footer_layout(area, s, total, with_reveal);

    frame.render_widget(
        Paragraph::new(Span::styled(layout::total_text(s, total), Theme::text())),
        footer.total,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(layout::button_text(s.reset), Theme::button())),
        footer.reset,
    );
    if let Some(reveal) = footer.reveal {
        frame.render_widget(
            Paragraph::new(Span::styled(
                layout::button_text(s.show_final_results),
                Theme::button_selected(),
            )),
            reveal,
        );
    }
}

pub fn render_results(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.tally.is_revealed() {
        render_banner(frame, area, state);
        return;
    }

    if state.tally.total_votes() == 0 {
        return;
    }

    let s = state.strings();
    let mut spans = Vec::new();
    for share in state.tally.percentages() {
        let Some(candidate) = state.tally.candidate(&share.id).filter(|c| c.count > 0) else {
            continue;
        };
        if !spans.is_empty() {
            spans.push(Span::raw("    "));
        }
        spans.push(Span::styled(
            format!("{}: {:.1}%", candidate.label, share.percent),
            Style::default().fg(palette::display_color(&candidate.color)),
        ));
    }
    let lines = vec![
        Line::from(Span::styled(s.current_results, Theme::title())),
        Line::from(spans),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), area);
}

/// Winner of the round, or `None` on a tie. Two candidates are compared head
/// to head; with more, the single leader wins.
fn winner(state: &AppState) -> Option<&Candidate> {
    let candidates = state.tally.candidates();
    if let [first, second] = candidates {
        return match state.tally.determine_outcome(&first.id, &second.id) {
            Ok(Outcome::FirstWins) => Some(first),
            Ok(Outcome::SecondWins) => Some(second),
            Ok(Outcome::Tie) | Err(_) => None,
        };
    }
    match state.tally.leaders().as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}

fn render_banner(frame: &mut Frame, area: Rect, state: &AppState) {
    let s = state.strings();
    let (text, bg) = match winner(state) {
        Some(c) => (
            i18n::fill(s.wins, &c.label.to_uppercase()),
            palette::display_color(&c.color),
        ),
        None => (s.tie.to_string(), Theme::BG_SURFACE),
    };
    let style = Style::default()
        .fg(palette::contrast_text(bg))
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let banner = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", text), style)),
    ])
    .centered();
    frame.render_widget(banner, area);
}

pub fn render_hint(frame: &mut Frame, area: Rect, state: &AppState) {
    let s = state.strings();
    let lines = vec![
        Line::from(Span::styled(s.customize, Theme::hint())),
        Line::from(Span::styled(s.keys, Theme::hint())),
        Line::from(Span::styled(s.keys_edit, Theme::hint())),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), area);
}
