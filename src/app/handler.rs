use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::config::UiMode;
use crate::i18n::Language;
use crate::ui::chart::PULSE_TICKS;
use crate::ui::{layout, palette};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) {
    state.tick_count = state.tick_count.wrapping_add(1);
    if state.pulse
        && state.tally.last_voted().is_some()
        && state.tick_count % PULSE_TICKS == 0
    {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Overlays capture all input while open
    if state.language_menu.is_some() {
        return handle_language_menu_key(state, key);
    }
    if state.picker.is_some() {
        return handle_picker_key(state, key);
    }
    if state.editor.is_some() {
        return handle_editor_key(state, key);
    }

    let revealed = state.tally.is_revealed();
    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
            state.select_prev();
            vec![]
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
            state.select_next();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') if revealed => vec![Action::Reset],
        KeyCode::Enter | KeyCode::Char(' ') => {
            vec![Action::Vote(state.selected_candidate().id.clone())]
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            match state.candidate_at(index) {
                Some(id) => {
                    state.selected = index;
                    vec![Action::Vote(id)]
                }
                None => vec![],
            }
        }
        KeyCode::Char('r') => vec![Action::Reset],
        KeyCode::Char('n') if revealed => vec![Action::Reset],
        KeyCode::Char('s') if state.mode == UiMode::Reveal && !revealed => vec![Action::Reveal],
        KeyCode::Char('e') => {
            state.open_editor(state.selected);
            vec![]
        }
        KeyCode::Char('d') => vec![Action::ResetLabel(state.selected_candidate().id.clone())],
        KeyCode::Char('c') => {
            state.open_picker();
            vec![]
        }
        KeyCode::Char('L') | KeyCode::F(2) => {
            state.open_language_menu();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_editor_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(editor) = state.editor.as_mut() else {
        return vec![];
    };
    match key.code {
        KeyCode::Esc => {
            state.editor = None;
            vec![]
        }
        KeyCode::Enter => commit_editor(state),
        KeyCode::Char(c) => {
            editor.input.insert_char(c);
            vec![]
        }
        KeyCode::Backspace => {
            editor.input.delete_back();
            vec![]
        }
        KeyCode::Delete => {
            editor.input.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            editor.input.move_left();
            vec![]
        }
        KeyCode::Right => {
            editor.input.move_right();
            vec![]
        }
        KeyCode::Home => {
            editor.input.move_home();
            vec![]
        }
        KeyCode::End => {
            editor.input.move_end();
            vec![]
        }
        _ => vec![],
    }
}

fn commit_editor(state: &mut AppState) -> Vec<Action> {
    match state.editor.take() {
        Some(editor) => vec![Action::Rename {
            id: editor.candidate,
            label: editor.input.text,
        }],
        None => vec![],
    }
}

fn handle_picker_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(picker) = state.picker.as_mut() else {
        return vec![];
    };
    match key.code {
        KeyCode::Esc => {
            state.picker = None;
            vec![]
        }
        KeyCode::Enter => commit_picker(state),
        KeyCode::Left => {
            picker.move_left();
            vec![]
        }
        KeyCode::Right => {
            picker.move_right();
            vec![]
        }
        KeyCode::Char(c) if c == '#' || c.is_ascii_hexdigit() => {
            if picker.hex.text.is_empty() && c != '#' {
                picker.hex.insert_char('#');
            }
            if picker.hex.text.chars().count() < 7 {
                picker.hex.insert_char(c);
            }
            vec![]
        }
        KeyCode::Backspace => {
            picker.hex.delete_back();
            vec![]
        }
        _ => vec![],
    }
}

fn commit_picker(state: &mut AppState) -> Vec<Action> {
    let Some(picker) = state.picker.as_ref() else {
        return vec![];
    };
    match picker.chosen() {
        Some(color) => {
            let id = picker.candidate.clone();
            state.picker = None;
            vec![Action::Recolor { id, color }]
        }
        None => {
            let text = format!("{} '{}'", state.strings().bad_hex, picker.hex.text);
            state.error(text);
            vec![]
        }
    }
}

fn handle_language_menu_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(menu) = state.language_menu.as_mut() else {
        return vec![];
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('L') | KeyCode::F(2) => {
            state.language_menu = None;
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            menu.move_up();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            menu.move_down();
            vec![]
        }
        KeyCode::Enter => {
            let language = Language::ALL[menu.selected];
            state.language_menu = None;
            vec![Action::SetLanguage(language)]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let (col, row) = (mouse.column, mouse.row);
    let app_layout = layout::compute_layout(state.viewport);

    if state.language_menu.is_some() {
        let menu = layout::language_menu_area(&app_layout, Language::ALL.len(), state.viewport);
        state.language_menu = None;
        return Language::ALL
            .iter()
            .enumerate()
            .find(|(i, _)| layout::contains(layout::menu_item_rect(menu, *i), col, row))
            .map(|(_, lang)| vec![Action::SetLanguage(*lang)])
            .unwrap_or_default();
    }

    if let Some(picker) = state.picker.as_mut() {
        let area = layout::color_picker_area(state.viewport);
        if !layout::contains(area, col, row) {
            state.picker = None;
            return vec![];
        }
        if let Some(i) = (0..palette::SWATCHES.len())
            .find(|i| layout::contains(layout::swatch_rect(area, *i), col, row))
        {
            picker.swatch = i;
            picker.hex = TextInput::default();
        }
        return vec![];
    }

    // Clicking anywhere else commits a label being edited
    let mut actions = commit_editor(state);

    if layout::contains(app_layout.language_button, col, row) {
        state.open_language_menu();
        return actions;
    }

    let candidates = state.tally.candidates().len();
    let revealed = state.tally.is_revealed();

    if let Some(i) = column_at(app_layout.labels, candidates, col, row) {
        state.open_editor(i);
        return actions;
    }

    if !revealed {
        let percents: Vec<f64> = state.tally.percentages().iter().map(|s| s.percent).collect();
        let bar = layout::bar_segments(app_layout.bars, &percents)
            .into_iter()
            .position(|seg| layout::contains(seg, col, row));
        let button = column_at(app_layout.buttons, candidates, col, row);
        if let Some(i) = bar.or(button) {
            if let Some(id) = state.candidate_at(i) {
                state.selected = i;
                actions.push(Action::Vote(id));
            }
            return actions;
        }
    } else if layout::contains(app_layout.buttons, col, row) {
        actions.push(Action::Reset);
        return actions;
    }

    let footer = layout::footer_layout(
        app_layout.footer,
        state.strings(),
        state.tally.total_votes(),
        state.mode == UiMode::Reveal && !revealed,
    );
    if layout::contains(footer.reset, col, row) {
        actions.push(Action::Reset);
    } else if footer.reveal.is_some_and(|r| layout::contains(r, col, row)) {
        actions.push(Action::Reveal);
    }
    actions
}

fn column_at(area: Rect, count: usize, col: u16, row: u16) -> Option<usize> {
    layout::candidate_columns(area, count)
        .into_iter()
        .position(|r| layout::contains(r, col, row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::KeyEventState;

    fn state(mode: UiMode) -> AppState {
        let mut cfg = AppConfig::default();
        cfg.ui.mode = mode;
        let tally = cfg.build_tally().unwrap();
        let mut state = AppState::new(&cfg, tally);
        state.viewport = Rect::new(0, 0, 100, 30);
        state
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn click(column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    /// Feed events through the handler and apply the resulting actions.
    fn run(state: &mut AppState, events: Vec<AppEvent>) {
        for event in events {
            for action in handle_event(state, event) {
                state.apply(action);
            }
        }
    }

    fn counts(state: &AppState) -> Vec<u64> {
        state.tally.candidates().iter().map(|c| c.count).collect()
    }

    #[test]
    fn test_vote_keys() {
        let mut s = state(UiMode::Counter);
        run(
            &mut s,
            vec![
                key(KeyCode::Enter),
                key(KeyCode::Right),
                key(KeyCode::Char(' ')),
                key(KeyCode::Char('1')),
                key(KeyCode::Char('2')),
                key(KeyCode::Char('9')),
            ],
        );
        assert_eq!(counts(&s), vec![2, 2]);
        assert_eq!(s.selected, 1);
        assert!(s.tally.just_voted(&"red".into()));

        run(&mut s, vec![key(KeyCode::Char('r'))]);
        assert_eq!(counts(&s), vec![0, 0]);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut s = state(UiMode::Counter);
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        run(&mut s, vec![AppEvent::Terminal(CEvent::Key(release))]);
        assert_eq!(s.tally.total_votes(), 0);
    }

    #[test]
    fn test_quit() {
        let mut s = state(UiMode::Counter);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handle_event(&mut s, AppEvent::Terminal(CEvent::Key(ctrl_c))),
            vec![Action::Quit]
        );
        assert_eq!(handle_event(&mut s, key(KeyCode::Char('q'))), vec![Action::Quit]);
    }

    #[test]
    fn test_edit_label() {
        let mut s = state(UiMode::Counter);
        let mut events = vec![key(KeyCode::Char('e'))];
        for _ in 0.."Blue".len() {
            events.push(key(KeyCode::Backspace));
        }
        events.extend("Team A".chars().map(|c| key(KeyCode::Char(c))));
        events.push(key(KeyCode::Enter));
        events.push(key(KeyCode::Enter));
        run(&mut s, events);

        let blue = s.tally.candidate(&"blue".into()).unwrap();
        assert_eq!(blue.label, "Team A");
        assert_eq!(blue.count, 1);
        assert!(s.editor.is_none());
    }

    #[test]
    fn test_edit_label_escape_and_empty() {
        let mut s = state(UiMode::Counter);
        run(
            &mut s,
            vec![key(KeyCode::Char('e')), key(KeyCode::Char('x')), key(KeyCode::Esc)],
        );
        assert_eq!(s.tally.candidates()[0].label, "Blue");

        let mut events = vec![key(KeyCode::Char('e'))];
        events.extend((0..4).map(|_| key(KeyCode::Backspace)));
        events.push(key(KeyCode::Enter));
        run(&mut s, events);
        assert_eq!(s.tally.candidates()[0].label, "Blue");
        assert!(s.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_reset_label() {
        let mut s = state(UiMode::Counter);
        s.apply(Action::Rename {
            id: "blue".into(),
            label: "Sky".into(),
        });
        run(&mut s, vec![key(KeyCode::Char('d'))]);
        assert_eq!(s.tally.candidates()[0].label, "Blue");
    }

    #[test]
    fn test_color_picker_swatch_and_hex() {
        let mut s = state(UiMode::Counter);
        // blue swatch is preselected; one step right is indigo
        run(
            &mut s,
            vec![key(KeyCode::Char('c')), key(KeyCode::Right), key(KeyCode::Enter)],
        );
        assert_eq!(s.tally.candidates()[0].color, "#6366f1");
        assert!(s.picker.is_none());

        let mut events = vec![key(KeyCode::Right), key(KeyCode::Char('c'))];
        events.extend("0a0".chars().map(|c| key(KeyCode::Char(c))));
        events.push(key(KeyCode::Enter));
        run(&mut s, events);
        assert_eq!(s.tally.candidates()[1].color, "#00aa00");
    }

    #[test]
    fn test_color_picker_rejects_bad_hex() {
        let mut s = state(UiMode::Counter);
        let mut events = vec![key(KeyCode::Char('c'))];
        events.extend("12345".chars().map(|c| key(KeyCode::Char(c))));
        events.push(key(KeyCode::Enter));
        run(&mut s, events);
        assert!(s.picker.is_some());
        let status = s.status.clone().unwrap();
        assert!(status.is_error);
        assert_eq!(status.text, "Not a #rgb or #rrggbb color: '#12345'");
        assert_eq!(s.tally.candidates()[0].color, "#3b82f6");

        run(&mut s, vec![key(KeyCode::Esc)]);
        assert!(s.picker.is_none());
    }

    #[test]
    fn test_language_menu() {
        let mut s = state(UiMode::Counter);
        s.apply(Action::Vote("blue".into()));
        run(
            &mut s,
            vec![
                key(KeyCode::Char('L')),
                key(KeyCode::Down),
                key(KeyCode::Down),
                key(KeyCode::Enter),
            ],
        );
        assert_eq!(s.language, Language::Fr);
        assert!(s.language_menu.is_none());
        assert_eq!(s.tally.total_votes(), 1);

        // Keys are captured by the open menu
        run(&mut s, vec![key(KeyCode::F(2)), key(KeyCode::Enter), key(KeyCode::Esc)]);
        assert_eq!(s.tally.total_votes(), 1);
    }

    #[test]
    fn test_reveal_flow() {
        let mut s = state(UiMode::Reveal);
        run(
            &mut s,
            vec![
                key(KeyCode::Enter),
                key(KeyCode::Enter),
                key(KeyCode::Char('s')),
                key(KeyCode::Char('2')),
            ],
        );
        assert!(s.tally.is_revealed());
        assert_eq!(counts(&s), vec![2, 0]);
        assert!(s.status.as_ref().unwrap().is_error);

        run(&mut s, vec![key(KeyCode::Enter)]);
        assert!(!s.tally.is_revealed());
        assert_eq!(counts(&s), vec![0, 0]);
    }

    #[test]
    fn test_reveal_key_ignored_in_counter_mode() {
        let mut s = state(UiMode::Counter);
        run(&mut s, vec![key(KeyCode::Char('s'))]);
        assert!(!s.tally.is_revealed());
    }

    #[test]
    fn test_mouse_votes_on_bars_and_buttons() {
        let mut s = state(UiMode::Counter);
        let app_layout = layout::compute_layout(s.viewport);
        let bars = app_layout.bars;
        let buttons = app_layout.buttons;

        run(
            &mut s,
            vec![
                click(bars.x + 1, bars.y + 1),
                click(buttons.right() - 2, buttons.y),
                // back at 50/50, so the right edge is red's bar
                click(bars.right() - 1, bars.y),
            ],
        );
        assert_eq!(counts(&s), vec![1, 2]);

        let footer = layout::footer_layout(app_layout.footer, s.strings(), 3, false);
        run(&mut s, vec![click(footer.reset.x, footer.reset.y)]);
        assert_eq!(counts(&s), vec![0, 0]);
    }

    #[test]
    fn test_mouse_label_edit_commits_on_click_away() {
        let mut s = state(UiMode::Counter);
        let app_layout = layout::compute_layout(s.viewport);
        let labels = app_layout.labels;

        run(&mut s, vec![click(labels.right() - 3, labels.y)]);
        assert_eq!(
            s.editor.as_ref().map(|e| e.candidate.as_str()),
            Some("red")
        );
        run(&mut s, vec![key(KeyCode::Char('!'))]);
        run(&mut s, vec![click(0, 0)]);
        assert!(s.editor.is_none());
        assert_eq!(s.tally.candidates()[1].label, "Red!");
    }

    #[test]
    fn test_mouse_language_menu() {
        let mut s = state(UiMode::Counter);
        let app_layout = layout::compute_layout(s.viewport);
        let button = app_layout.language_button;
        run(&mut s, vec![click(button.x + 1, button.y)]);
        assert!(s.language_menu.is_some());

        let menu = layout::language_menu_area(&app_layout, Language::ALL.len(), s.viewport);
        let ja = layout::menu_item_rect(menu, 3);
        run(&mut s, vec![click(ja.x + 1, ja.y)]);
        assert_eq!(s.language, Language::Ja);
        assert!(s.language_menu.is_none());
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut s = state(UiMode::Counter);
        run(&mut s, vec![AppEvent::Terminal(CEvent::Resize(120, 40))]);
        assert_eq!(s.viewport, Rect::new(0, 0, 120, 40));
    }

    #[test]
    fn test_tick_marks_dirty_only_while_pulsing() {
        let mut s = state(UiMode::Counter);
        s.dirty = false;
        for _ in 0..PULSE_TICKS {
            handle_event(&mut s, AppEvent::Tick);
        }
        assert!(!s.dirty);

        s.apply(Action::Vote("blue".into()));
        s.dirty = false;
        for _ in 0..PULSE_TICKS {
            handle_event(&mut s, AppEvent::Tick);
        }
        assert!(s.dirty);
    }
}
