use serde::{Deserialize, Serialize};

/// Digit-entry widget messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginMsg {
    Append(char),
    Clear,
    /// The deferred success/mismatch reaction is due
    FeedbackDue,
}
