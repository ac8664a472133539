use serde::Serialize;

/// Outcome of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Accept,
    Reject(String),
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }

    pub fn is_reject(&self) -> bool {
        matches!(self, Verdict::Reject(_))
    }

    /// Message to show the user, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Accept => None,
            Verdict::Reject(msg) => Some(msg),
        }
    }
}

/// Per-cycle submit state. Nothing carries over between cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubmitState {
    Pending,
    Rejected,
    Accepted,
}

impl SubmitState {
    pub fn after(verdict: &Verdict) -> Self {
        match verdict {
            Verdict::Accept => SubmitState::Accepted,
            Verdict::Reject(_) => SubmitState::Rejected,
        }
    }

    /// A rejected attempt leaves the form displayed and editable.
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmitState::Pending | SubmitState::Rejected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitState::Pending => "pending",
            SubmitState::Rejected => "rejected",
            SubmitState::Accepted => "accepted",
        }
    }
}
