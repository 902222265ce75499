use crate::i18n::Language;
use crate::tally::CandidateId;

/// User intents produced by the view. Everything except `SetLanguage` and
/// `Quit` is applied to the tally.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Vote(CandidateId),
    Reset,
    Reveal,
    Rename { id: CandidateId, label: String },
    ResetLabel(CandidateId),
    Recolor { id: CandidateId, color: String },
    SetLanguage(Language),
    Quit,
}
