//! Screen geometry shared by rendering and mouse hit-testing.

use crate::i18n::Strings;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

/// Content never grows wider than this.
pub(crate) const MAX_CONTENT_WIDTH: u16 = 72;
const LANGUAGE_BUTTON_WIDTH: u16 = 6;

pub struct AppLayout {
    pub header: Rect,
    pub language_button: Rect,
    pub labels: Rect,
    pub bars: Rect,
    pub buttons: Rect,
    pub footer: Rect,
    pub results: Rect,
    pub hint: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(area);

    let content = centered_width(main_chunks[0], MAX_CONTENT_WIDTH);
    let status_bar = main_chunks[1];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Labels
            Constraint::Min(3),    // Bars
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Vote buttons
            Constraint::Length(1), // Total + reset
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Results
            Constraint::Length(3), // Hint
        ])
        .split(content);

    let header = chunks[0];
    let language_button = Rect::new(
        header.right().saturating_sub(LANGUAGE_BUTTON_WIDTH),
        header.y,
        LANGUAGE_BUTTON_WIDTH.min(header.width),
        header.height,
    );

    AppLayout {
        header,
        language_button,
        labels: chunks[2],
        bars: chunks[3],
        buttons: chunks[5],
        footer: chunks[6],
        results: chunks[8],
        hint: chunks[9],
        status_bar,
    }
}

fn centered_width(area: Rect, max: u16) -> Rect {
    let width = area.width.min(max);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

/// Centered popup of the given size, clamped to `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// One equal-width column per candidate.
pub fn candidate_columns(area: Rect, count: usize) -> Vec<Rect> {
    let count = count.max(1) as u32;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area)
        .to_vec()
}

/// Split `total` cells by percentage with the largest remainder method, so
/// the widths always add up to `total`.
pub fn split_widths(total: u16, percents: &[f64]) -> Vec<u16> {
    if percents.is_empty() {
        return Vec::new();
    }
    let exact: Vec<f64> = percents
        .iter()
        .map(|p| p.max(0.0) * total as f64 / 100.0)
        .collect();
    let mut widths: Vec<u16> = exact.iter().map(|w| w.floor() as u16).collect();
    let assigned: u16 = widths.iter().sum();
    let mut order: Vec<usize> = (0..exact.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.partial_cmp(&ra).unwrap_or(std::cmp::Ordering::Equal)
    });
    for &i in order.iter().cycle().take(total.saturating_sub(assigned) as usize) {
        widths[i] += 1;
    }
    widths
}

/// Bar segment per candidate, left to right.
pub fn bar_segments(area: Rect, percents: &[f64]) -> Vec<Rect> {
    let mut x = area.x;
    split_widths(area.width, percents)
        .into_iter()
        .map(|w| {
            let r = Rect::new(x, area.y, w, area.height);
            x += w;
            r
        })
        .collect()
}

pub fn button_text(label: &str) -> String {
    format!("[ {} ]", label)
}

pub struct FooterLayout {
    pub total: Rect,
    pub reset: Rect,
    pub reveal: Option<Rect>,
}

pub fn total_text(strings: &Strings, total: u64) -> String {
    format!("{} {}", strings.total_votes, total)
}

/// Footer row: total, reset button and, in reveal mode, the reveal button.
pub fn footer_layout(area: Rect, strings: &Strings, total: u64, with_reveal: bool) -> FooterLayout {
    const GAP: u16 = 3;
    let total_w = total_text(strings, total).width() as u16;
    let reset_w = button_text(strings.reset).width() as u16;
    let reveal_w = if with_reveal {
        button_text(strings.show_final_results).width() as u16
    } else {
        0
    };
    let mut needed = total_w + GAP + reset_w;
    if with_reveal {
        needed += GAP + reveal_w;
    }
    let mut x = area.x + area.width.saturating_sub(needed) / 2;
    let mut next = |w: u16| {
        let r = Rect::new(x, area.y, w, area.height).intersection(area);
        x = x.saturating_add(w + GAP);
        r
    };
    let total_rect = next(total_w);
    let reset = next(reset_w);
    let reveal = with_reveal.then(|| next(reveal_w));
    FooterLayout {
        total: total_rect,
        reset,
        reveal,
    }
}

/// Dropdown under the language button, one row per language.
pub fn language_menu_area(layout: &AppLayout, items: usize, screen: Rect) -> Rect {
    let width = 10;
    let height = items as u16 + 2;
    let x = layout.header.right().saturating_sub(width).max(screen.x);
    Rect::new(x, layout.header.bottom(), width, height).intersection(screen)
}

pub fn color_picker_area(screen: Rect) -> Rect {
    centered_rect(screen, 64, 9)
}

/// Menu row for the `index`th item inside a bordered menu.
pub fn menu_item_rect(menu: Rect, index: usize) -> Rect {
    Rect::new(menu.x + 1, menu.y + 1 + index as u16, menu.width.saturating_sub(2), 1)
        .intersection(menu)
}

pub const SWATCH_WIDTH: u16 = 4;

/// Swatch cell inside the color picker popup.
pub fn swatch_rect(picker: Rect, index: usize) -> Rect {
    Rect::new(picker.x + 2 + index as u16 * SWATCH_WIDTH, picker.y + 1, SWATCH_WIDTH, 1)
        .intersection(picker)
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_split_widths_sum_to_total() {
        for (total, pct) in [
            (70u16, vec![50.0, 50.0]),
            (71, vec![50.0, 50.0]),
            (70, vec![75.0, 25.0]),
            (10, vec![100.0 / 3.0; 3]),
            (37, vec![12.5, 0.0, 87.5]),
        ] {
            let widths = split_widths(total, &pct);
            assert_eq!(widths.iter().sum::<u16>(), total, "{:?}", pct);
        }
        assert_eq!(split_widths(80, &[75.0, 25.0]), vec![60, 20]);
        assert_eq!(split_widths(80, &[100.0, 0.0]), vec![80, 0]);
        assert!(split_widths(10, &[]).is_empty());
    }

    #[test]
    fn test_bar_segments_are_adjacent() {
        let area = Rect::new(4, 3, 60, 5);
        let segs = bar_segments(area, &[30.0, 70.0]);
        assert_eq!(segs[0], Rect::new(4, 3, 18, 5));
        assert_eq!(segs[1], Rect::new(22, 3, 42, 5));
    }

    #[test]
    fn test_layout_fits_screen() {
        let screen = Rect::new(0, 0, 100, 30);
        let layout = compute_layout(screen);
        assert_eq!(layout.status_bar, Rect::new(0, 29, 100, 1));
        assert_eq!(layout.header.width, MAX_CONTENT_WIDTH);
        assert_eq!(layout.header.x, 14);
        assert!(layout.bars.height >= 3);
        assert_eq!(layout.language_button.right(), layout.header.right());
    }

    #[test]
    fn test_hint_text_fits() {
        let picker_hint_width = color_picker_area(Rect::new(0, 0, 200, 50)).width - 4;
        for language in Language::ALL {
            let s = language.strings();
            for text in [s.customize, s.keys, s.keys_edit] {
                assert!(text.width() <= MAX_CONTENT_WIDTH as usize, "{:?}", text);
            }
            assert!(s.picker_hint.width() <= picker_hint_width as usize, "{:?}", s.picker_hint);
        }
    }

    #[test]
    fn test_footer_buttons_do_not_overlap() {
        let area = Rect::new(0, 10, 72, 1);
        let strings = Language::En.strings();
        let footer = footer_layout(area, strings, 12, true);
        let reveal = footer.reveal.unwrap();
        assert!(footer.total.right() < footer.reset.x);
        assert!(footer.reset.right() < reveal.x);
        assert!(reveal.right() <= area.right());

        let footer = footer_layout(area, strings, 0, false);
        assert!(footer.reveal.is_none());
    }
}
