use serde::{Deserialize, Serialize};

use crate::domain::view::ViewId;

/// Panel navigation handled by the view coordinator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMsg {
    Activate(ViewId),
    /// Activate a panel by its textual id; unknown ids are reported, not applied
    ActivateNamed(String),
    /// Return to the dashboard from any unlocked panel
    Back,
}
