use serde::{Deserialize, Serialize};

/// Values of the two time controls, captured when the form is submitted.
///
/// The strings are kept exactly as the controls report them (`HH:MM` for a
/// native time input, or empty when the control was left blank).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitSnapshot {
    pub login_time: String,
    pub logout_time: String,
}

impl SubmitSnapshot {
    pub fn new(login_time: impl Into<String>, logout_time: impl Into<String>) -> Self {
        Self {
            login_time: login_time.into(),
            logout_time: logout_time.into(),
        }
    }

    /// Log out strictly after log in, compared as zero-padded `HH:MM` strings.
    pub fn is_ordered(&self) -> bool {
        self.logout_time > self.login_time
    }
}
