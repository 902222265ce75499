//! Vote tally state: candidates, counts, last-voted marker and reveal phase.
//!
//! Everything derived from the counts (totals, percentages, outcomes) is
//! computed on demand so it always reflects the current counts.

mod candidate;
mod error;

pub use candidate::{Candidate, CandidateId};
pub use error::TallyError;

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Voting,
    Revealed,
}

/// Result of comparing two candidates' counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Tie,
}

impl Outcome {
    pub fn compare(first: u64, second: u64) -> Self {
        match first.cmp(&second) {
            Ordering::Greater => Outcome::FirstWins,
            Ordering::Less => Outcome::SecondWins,
            Ordering::Equal => Outcome::Tie,
        }
    }

    /// The outcome seen from the other side.
    pub fn flip(self) -> Self {
        match self {
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

/// Percentage of the total held by one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub id: CandidateId,
    pub percent: f64,
}

#[derive(Debug, Clone)]
pub struct Tally {
    candidates: Vec<Candidate>,
    last_voted: Option<CandidateId>,
    phase: Phase,
}

impl Tally {
    pub fn new(candidates: Vec<Candidate>) -> Result<Self, TallyError> {
        if candidates.is_empty() {
            return Err(TallyError::NoCandidates);
        }
        for (i, c) in candidates.iter().enumerate() {
            if candidates[..i].iter().any(|other| other.id == c.id) {
                return Err(TallyError::DuplicateCandidate(c.id.clone()));
            }
        }
        let mut tally = Self {
            candidates,
            last_voted: None,
            phase: Phase::Voting,
        };
        tally.reset();
        Ok(tally)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn candidate(&self, id: &CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|c| &c.id == id)
    }

    fn candidate_mut(&mut self, id: &CandidateId) -> Result<&mut Candidate, TallyError> {
        self.candidates
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| TallyError::InvalidCandidate(id.clone()))
    }

    pub fn total_votes(&self) -> u64 {
        self.candidates.iter().map(|c| c.count).sum()
    }

    pub fn last_voted(&self) -> Option<&CandidateId> {
        self.last_voted.as_ref()
    }

    /// True for the candidate that received the most recent vote, until the
    /// next vote or reset.
    pub fn just_voted(&self, id: &CandidateId) -> bool {
        self.last_voted.as_ref() == Some(id)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == Phase::Revealed
    }

    pub fn cast_vote(&mut self, id: &CandidateId) -> Result<u64, TallyError> {
        if self.is_revealed() {
            return Err(TallyError::VotingClosed);
        }
        let candidate = self.candidate_mut(id)?;
        candidate.count += 1;
        let count = candidate.count;
        self.last_voted = Some(id.clone());
        Ok(count)
    }

    pub fn reset(&mut self) {
        for c in &mut self.candidates {
            c.count = 0;
        }
        self.last_voted = None;
        self.phase = Phase::Voting;
    }

    pub fn reveal(&mut self) {
        self.phase = Phase::Revealed;
    }

    /// Per-candidate share of the total, in candidate order. With no votes
    /// cast every candidate gets an even share.
    pub fn percentages(&self) -> Vec<Share> {
        let total = self.total_votes();
        let even = 100.0 / self.candidates.len() as f64;
        self.candidates
            .iter()
            .map(|c| Share {
                id: c.id.clone(),
                percent: if total > 0 {
                    c.count as f64 / total as f64 * 100.0
                } else {
                    even
                },
            })
            .collect()
    }

    pub fn determine_outcome(
        &self,
        first: &CandidateId,
        second: &CandidateId,
    ) -> Result<Outcome, TallyError> {
        let a = self
            .candidate(first)
            .ok_or_else(|| TallyError::InvalidCandidate(first.clone()))?;
        let b = self
            .candidate(second)
            .ok_or_else(|| TallyError::InvalidCandidate(second.clone()))?;
        Ok(Outcome::compare(a.count, b.count))
    }

    /// Candidates sharing the highest count. More than one entry means a tie.
    pub fn leaders(&self) -> Vec<&Candidate> {
        let max = self.candidates.iter().map(|c| c.count).max().unwrap_or(0);
        self.candidates.iter().filter(|c| c.count == max).collect()
    }

    pub fn rename_candidate(&mut self, id: &CandidateId, label: &str) -> Result<(), TallyError> {
        let label = label.trim();
        if self.candidate(id).is_none() {
            return Err(TallyError::InvalidCandidate(id.clone()));
        }
        if label.is_empty() {
            return Err(TallyError::EmptyLabel);
        }
        self.candidate_mut(id)?.label = label.to_string();
        Ok(())
    }

    pub fn reset_label(&mut self, id: &CandidateId) -> Result<(), TallyError> {
        let candidate = self.candidate_mut(id)?;
        candidate.label = candidate.default_label.clone();
        Ok(())
    }

    pub fn recolor_candidate(&mut self, id: &CandidateId, color: &str) -> Result<(), TallyError> {
        self.candidate_mut(id)?.color = color.to_string();
        Ok(())
    }
}
