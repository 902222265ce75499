use super::CandidateId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    #[error("no candidate with id '{0}'")]
    InvalidCandidate(CandidateId),
    #[error("voting is closed until the tally is reset")]
    VotingClosed,
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("a tally needs at least one candidate")]
    NoCandidates,
    #[error("candidate id '{0}' is used more than once")]
    DuplicateCandidate(CandidateId),
}
