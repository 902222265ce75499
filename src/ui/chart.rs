use crate::app::state::AppState;
use crate::ui::layout;
use crate::ui::palette;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Ticks per half cycle of the "just voted" pulse (50 ms ticks).
pub(crate) const PULSE_TICKS: u64 = 6;

pub fn render_labels(frame: &mut Frame, area: Rect, state: &AppState) {
    let candidates = state.tally.candidates();
    let columns = layout::candidate_columns(area, candidates.len());

    for (i, (candidate, col)) in candidates.iter().zip(columns).enumerate() {
        if let Some(editor) = state.editor.as_ref().filter(|e| e.candidate == candidate.id) {
            let line = Line::from(vec![
                Span::styled("✎ ", Style::default().fg(Theme::ACCENT)),
                Span::styled(editor.input.text.as_str(), Theme::input_text()),
            ]);
            frame.render_widget(Paragraph::new(line), col);

            let cursor_x = col.x + 2 + editor.input.before_cursor().width() as u16;
            frame.set_cursor_position((cursor_x.min(col.right().saturating_sub(1)), col.y));
            continue;
        }

        let mut style = Style::default()
            .fg(palette::display_color(&candidate.color))
            .add_modifier(Modifier::BOLD);
        if i == state.selected {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        let text = format!("{}: {}", candidate.label, candidate.count);
        frame.render_widget(Paragraph::new(Span::styled(text, style)).centered(), col);
    }
}

pub fn render_bars(frame: &mut Frame, area: Rect, state: &AppState) {
    let percents: Vec<f64> = state.tally.percentages().iter().map(|s| s.percent).collect();
    let segments = layout::bar_segments(area, &percents);
    let pulse_on = (state.tick_count / PULSE_TICKS) % 2 == 0;

    for (candidate, seg) in state.tally.candidates().iter().zip(segments) {
        if seg.width == 0 {
            continue;
        }
        let bg = palette::display_color(&candidate.color);
        frame.render_widget(Block::default().style(Style::default().bg(bg)), seg);
        if candidate.count == 0 {
            continue;
        }

        let mut count_style = Style::default()
            .fg(palette::contrast_text(bg))
            .bg(bg)
            .add_modifier(Modifier::BOLD);
        if state.pulse && state.tally.just_voted(&candidate.id) && !pulse_on {
            count_style = count_style.remove_modifier(Modifier::BOLD).add_modifier(Modifier::DIM);
        }
        // Count sits at the bottom of the bar
        let count_row = Rect::new(seg.x, seg.bottom().saturating_sub(2).max(seg.y), seg.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(candidate.count.to_string(), count_style)).centered(),
            count_row,
        );
    }
}
