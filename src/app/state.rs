use crate::app::action::Action;
use crate::config::{AppConfig, UiMode};
use crate::i18n::{Language, Strings};
use crate::tally::{Candidate, CandidateId, Tally, TallyError};
use crate::ui::palette;
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

/// Single-line text field used by the label editor and the hex input.
#[derive(Debug, Default)]
pub struct TextInput {
    pub text: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Text before the cursor, for cursor placement.
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.cursor]
    }
}

#[derive(Debug)]
pub struct LabelEditor {
    pub candidate: CandidateId,
    pub input: TextInput,
}

#[derive(Debug)]
pub struct ColorPicker {
    pub candidate: CandidateId,
    pub swatch: usize,
    pub hex: TextInput,
}

impl ColorPicker {
    pub fn move_left(&mut self) {
        let n = palette::SWATCHES.len();
        self.swatch = (self.swatch + n - 1) % n;
    }

    pub fn move_right(&mut self) {
        self.swatch = (self.swatch + 1) % palette::SWATCHES.len();
    }

    /// Color the picker would apply right now: typed hex wins over the swatch.
    pub fn chosen(&self) -> Option<String> {
        if self.hex.text.is_empty() {
            Some(palette::SWATCHES[self.swatch].1.to_string())
        } else {
            palette::normalize_hex(&self.hex.text)
        }
    }
}

#[derive(Debug)]
pub struct LanguageMenu {
    pub selected: usize,
}

impl LanguageMenu {
    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < Language::ALL.len() {
            self.selected += 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

pub struct AppState {
    pub tally: Tally,
    pub mode: UiMode,
    pub language: Language,
    pub pulse: bool,
    pub selected: usize,
    pub editor: Option<LabelEditor>,
    pub picker: Option<ColorPicker>,
    pub language_menu: Option<LanguageMenu>,
    pub status: Option<StatusMessage>,
    pub viewport: Rect,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: &AppConfig, tally: Tally) -> Self {
        Self {
            tally,
            mode: config.ui.mode,
            language: config.ui.language,
            pulse: config.ui.pulse,
            selected: 0,
            editor: None,
            picker: None,
            language_menu: None,
            status: None,
            viewport: Rect::default(),
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        self.language.strings()
    }

    pub fn selected_candidate(&self) -> &Candidate {
        let candidates = self.tally.candidates();
        &candidates[self.selected.min(candidates.len() - 1)]
    }

    pub fn candidate_at(&self, index: usize) -> Option<CandidateId> {
        self.tally.candidates().get(index).map(|c| c.id.clone())
    }

    pub fn select_next(&mut self) {
        let n = self.tally.candidates().len();
        self.selected = (self.selected + 1) % n;
        self.dirty = true;
    }

    pub fn select_prev(&mut self) {
        let n = self.tally.candidates().len();
        self.selected = (self.selected + n - 1) % n;
        self.dirty = true;
    }

    pub fn open_editor(&mut self, index: usize) {
        if let Some(c) = self.tally.candidates().get(index) {
            self.editor = Some(LabelEditor {
                candidate: c.id.clone(),
                input: TextInput::with_text(&c.label),
            });
            self.selected = index;
            self.dirty = true;
        }
    }

    pub fn open_picker(&mut self) {
        let c = self.selected_candidate();
        let swatch = palette::swatch_index(&c.color).unwrap_or(0);
        self.picker = Some(ColorPicker {
            candidate: c.id.clone(),
            swatch,
            hex: TextInput::default(),
        });
        self.dirty = true;
    }

    pub fn open_language_menu(&mut self) {
        self.language_menu = Some(LanguageMenu {
            selected: self.language.index(),
        });
        self.dirty = true;
    }

    pub fn notice(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
        self.dirty = true;
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
        self.dirty = true;
    }

    /// Apply one user action. Rejected actions leave the tally untouched and
    /// surface on the status bar.
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "applying action");
        self.dirty = true;
        let result = match action {
            Action::Vote(id) => self.tally.cast_vote(&id).map(|count| {
                debug!(candidate = %id, count, "vote cast");
                self.status = None;
            }),
            Action::Reset => {
                self.tally.reset();
                info!("tally reset");
                self.status = None;
                Ok(())
            }
            Action::Reveal => {
                self.tally.reveal();
                info!(total = self.tally.total_votes(), "results revealed");
                Ok(())
            }
            Action::Rename { id, label } => self
                .tally
                .rename_candidate(&id, &label)
                .map(|()| self.status = None),
            Action::ResetLabel(id) => self
                .tally
                .reset_label(&id)
                .map(|()| {
                    let text = self.strings().reset_name;
                    self.notice(text);
                }),
            Action::Recolor { id, color } => self
                .tally
                .recolor_candidate(&id, &color)
                .map(|()| self.status = None),
            Action::SetLanguage(language) => {
                info!(language = language.code(), "language changed");
                self.language = language;
                Ok(())
            }
            Action::Quit => {
                self.should_quit = true;
                Ok(())
            }
        };
        if let Err(e) = result {
            self.reject(e);
        }
    }

    fn reject(&mut self, e: TallyError) {
        warn!(error = %e, "action rejected");
        self.error(e.to_string());
    }
}
