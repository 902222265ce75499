pub(crate) mod chart;
mod controls;
pub mod layout;
mod overlays;
pub mod palette;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::config::UiMode;
use crate::tally::Phase;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_header(frame, &app_layout, state);
    chart::render_labels(frame, app_layout.labels, state);
    chart::render_bars(frame, app_layout.bars, state);
    controls::render_buttons(frame, app_layout.buttons, state);
    controls::render_footer(frame, app_layout.footer, state);
    controls::render_results(frame, app_layout.results, state);
    controls::render_hint(frame, app_layout.hint, state);
    status_bar::render(frame, app_layout.status_bar, state);

    if state.picker.is_some() {
        overlays::render_color_picker(frame, state);
    }
    if state.language_menu.is_some() {
        overlays::render_language_menu(frame, &app_layout, state);
    }
}

/// Localized heading for the current mode and phase.
pub fn heading(state: &AppState) -> &'static str {
    let s = state.strings();
    match (state.mode, state.tally.phase()) {
        (UiMode::Counter, _) => s.title,
        (UiMode::Reveal, Phase::Voting) => s.cast_your_vote,
        (UiMode::Reveal, Phase::Revealed) => s.final_results,
    }
}

fn render_header(frame: &mut Frame, app_layout: &layout::AppLayout, state: &AppState) {
    let title = Paragraph::new(Span::styled(heading(state), Theme::title())).centered();
    frame.render_widget(title, app_layout.header);

    let style = if state.language_menu.is_some() {
        Theme::menu_item_active()
    } else {
        Theme::button()
    };
    let button = Paragraph::new(Span::styled(
        format!(" {} ▾", state.language.code().to_uppercase()),
        style,
    ));
    frame.render_widget(button, app_layout.language_button);
}
