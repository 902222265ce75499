use std::fmt;

/// Stable key of a candidate. Never changes when the label is edited.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateId(String);

impl CandidateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CandidateId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: CandidateId,
    pub label: String,
    pub default_label: String,
    pub count: u64,
    /// Display color. Opaque here; the view decides how to parse it.
    pub color: String,
}

impl Candidate {
    pub fn new(id: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: CandidateId::new(id),
            default_label: label.clone(),
            label,
            count: 0,
            color: color.into(),
        }
    }
}
