use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoriesMsg {
    Next,
    Previous,
    /// Slideshow tick while the view is playing
    Advance,
}
