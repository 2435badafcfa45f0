use serde::{Deserialize, Serialize};

use crate::domain::timer::{Schedule, TimerId};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render is orchestrated by AppRunner, not via TuiCommand.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions.
/// Intents returned by `update`; the runtime decides how to carry them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Scheduler
    /// Start (or restart) the task keyed by `id`; a live task with the same id is cancelled first
    StartTimer { id: TimerId, schedule: Schedule },
    StopTimer { id: TimerId },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render outside the regular frame cadence
    RequestRender,

    // Logging related
    LogError { message: String },
    LogInfo { message: String },
}

impl Cmd {
    pub fn start(id: TimerId, schedule: Schedule) -> Cmd {
        Cmd::StartTimer { id, schedule }
    }

    pub fn stop(id: TimerId) -> Cmd {
        Cmd::StopTimer { id }
    }

    pub fn name(&self) -> String {
        match self {
            Cmd::StartTimer { id, .. } => format!("StartTimer({id})"),
            Cmd::StopTimer { id } => format!("StopTimer({id})"),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
        }
    }
}
