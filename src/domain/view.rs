use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::domain::error::ConfigurationError;

/// Identifier of a full-screen panel. Exactly one is active at a time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    #[default]
    Login,
    Dashboard,
    Calendar,
    Game,
    Memories,
    Letter,
}

impl ViewId {
    /// Resolve a textual panel id such as `calendar` or `view-calendar`.
    pub fn parse(name: &str) -> Result<Self, ConfigurationError> {
        let trimmed = name.trim();
        let bare = trimmed.strip_prefix("view-").unwrap_or(trimmed);
        ViewId::from_str(bare).map_err(|_| ConfigurationError::UnknownView(name.to_string()))
    }

    /// Title shown in the panel border
    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Login => "Locked",
            ViewId::Dashboard => "Home",
            ViewId::Calendar => "Our Time",
            ViewId::Game => "Puzzle",
            ViewId::Memories => "Memories",
            ViewId::Letter => "A Letter",
        }
    }

    /// Views reachable from the dashboard menu, in display order
    pub fn menu() -> [ViewId; 4] {
        [
            ViewId::Calendar,
            ViewId::Game,
            ViewId::Memories,
            ViewId::Letter,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("login", ViewId::Login)]
    #[case("dashboard", ViewId::Dashboard)]
    #[case("view-calendar", ViewId::Calendar)]
    #[case("Game", ViewId::Game)]
    #[case(" memories ", ViewId::Memories)]
    #[case("view-letter", ViewId::Letter)]
    fn parses_known_views(#[case] name: &str, #[case] expected: ViewId) {
        assert_eq!(ViewId::parse(name), Ok(expected));
    }

    #[test]
    fn rejects_unknown_view() {
        assert_eq!(
            ViewId::parse("view-gallery"),
            Err(ConfigurationError::UnknownView("view-gallery".into()))
        );
    }

    #[test]
    fn display_is_kebab_case() {
        assert_eq!(ViewId::Calendar.to_string(), "calendar");
        assert_eq!(ViewId::default(), ViewId::Login);
    }
}
