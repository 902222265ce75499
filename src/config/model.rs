//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::tally::{Candidate, Tally, TallyError};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_candidates")]
    pub candidates: Vec<CandidateConfig>,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Fresh tally with every configured candidate at zero votes.
    pub fn build_tally(&self) -> Result<Tally, TallyError> {
        Tally::new(
            self.candidates
                .iter()
                .map(|c| Candidate::new(c.id.clone(), c.label.clone(), c.color.clone()))
                .collect(),
        )
    }
}

fn default_candidates() -> Vec<CandidateConfig> {
    vec![
        CandidateConfig {
            id: "blue".into(),
            label: "Blue".into(),
            color: "#3b82f6".into(),
        },
        CandidateConfig {
            id: "red".into(),
            label: "Red".into(),
            color: "#ef4444".into(),
        },
    ]
}

/// One votable option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateConfig {
    /// Stable key. Label edits never change it.
    pub id: String,
    /// Initial label; "reset name" goes back to this.
    pub label: String,
    #[serde(default = "default_color")]
    pub color: String,
}

/// Which flavour of the widget to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    /// Running tally with live percentages.
    #[default]
    Counter,
    /// Voting round that ends with a "show final results" step.
    Reveal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub mode: UiMode,
    #[serde(default = "default_true")]
    pub pulse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            mode: UiMode::Counter,
            pulse: true,
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_color() -> String {
    "#6b7280".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/votetally/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn test_empty_document_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.candidates.len(), 2);
        assert_eq!(cfg.candidates[0].color, "#3b82f6");
        assert_eq!(cfg.candidates[1].label, "Red");
        assert_eq!(cfg.ui.language, Language::En);
        assert_eq!(cfg.ui.mode, UiMode::Counter);
        assert!(cfg.ui.pulse);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_reveal_preset() {
        let cfg = parse_config(
            r##"
            [ui]
            language = "fr"
            mode = "reveal"

            [[candidates]]
            id = "fled"
            label = "Fled"
            color = "#ef4444"

            [[candidates]]
            id = "stay"
            label = "Stay"
            "##,
        )
        .unwrap();
        assert_eq!(cfg.ui.mode, UiMode::Reveal);
        assert_eq!(cfg.ui.language, Language::Fr);
        assert_eq!(cfg.candidates[1].color, "#6b7280");

        let tally = cfg.build_tally().unwrap();
        assert_eq!(tally.candidates()[0].id.as_str(), "fled");
        assert_eq!(tally.total_votes(), 0);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = parse_config(
            r#"
            [[candidates]]
            id = "a"
            label = "A"

            [[candidates]]
            id = "a"
            label = "B"
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_empty_candidate_list() {
        assert!(parse_config("candidates = []").is_err());
    }

    #[test]
    fn test_rejects_unknown_language() {
        assert!(parse_config("[ui]\nlanguage = \"de\"").is_err());
    }
}
