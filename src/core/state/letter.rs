use crate::{
    core::{cmd::Cmd, msg::letter::LetterMsg},
    domain::timer::{Schedule, TimerId, ENVELOPE_REVEAL_DELAY_MS},
};

/// Envelope and letter modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterState {
    pub envelope_open: bool,
    pub letter_visible: bool,
}

impl LetterState {
    pub fn update(&mut self, msg: LetterMsg) -> Vec<Cmd> {
        match msg {
            LetterMsg::ToggleEnvelope => {
                self.envelope_open = !self.envelope_open;
                if self.envelope_open {
                    vec![Cmd::start(
                        TimerId::EnvelopeReveal,
                        Schedule::after_ms(ENVELOPE_REVEAL_DELAY_MS),
                    )]
                } else {
                    self.letter_visible = false;
                    vec![Cmd::stop(TimerId::EnvelopeReveal)]
                }
            }
            LetterMsg::Reveal => {
                if self.envelope_open {
                    self.letter_visible = true;
                }
                vec![]
            }
            LetterMsg::Dismiss => {
                self.letter_visible = false;
                vec![]
            }
        }
    }

    /// Closed envelope, no modal. Cancels a reveal still in flight.
    pub fn reset(&mut self) -> Vec<Cmd> {
        let was_opening = self.envelope_open && !self.letter_visible;
        *self = Self::default();
        if was_opening {
            vec![Cmd::stop(TimerId::EnvelopeReveal)]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn opening_schedules_reveal_after_one_second() {
        let mut letter = LetterState::default();
        let cmds = letter.update(LetterMsg::ToggleEnvelope);
        assert_eq!(
            cmds,
            vec![Cmd::start(TimerId::EnvelopeReveal, Schedule::after_ms(1_000))]
        );
        assert!(letter.envelope_open);
        assert!(!letter.letter_visible);

        letter.update(LetterMsg::Reveal);
        assert!(letter.letter_visible);
    }

    #[test]
    fn closing_hides_letter_and_cancels_reveal() {
        let mut letter = LetterState::default();
        letter.update(LetterMsg::ToggleEnvelope);
        let cmds = letter.update(LetterMsg::ToggleEnvelope);
        assert_eq!(cmds, vec![Cmd::stop(TimerId::EnvelopeReveal)]);

        // a late reveal for a closed envelope is ignored
        letter.update(LetterMsg::Reveal);
        assert!(!letter.letter_visible);
    }

    #[test]
    fn reset_stops_reveal_in_flight() {
        let mut letter = LetterState::default();
        letter.update(LetterMsg::ToggleEnvelope);
        assert_eq!(letter.reset(), vec![Cmd::stop(TimerId::EnvelopeReveal)]);
        assert_eq!(letter, LetterState::default());
        assert!(letter.reset().is_empty());
    }
}
