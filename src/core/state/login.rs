use crate::{
    core::cmd::Cmd,
    domain::{
        passcode::{Passcode, PasscodeBuffer},
        timer::{Schedule, TimerId, PASSCODE_MISMATCH_DELAY_MS, PASSCODE_SUCCESS_DELAY_MS},
    },
};

/// Outcome of evaluating a complete passcode, applied when its delay elapses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Accepted,
    Rejected,
}

/// Digit-entry widget state
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub buffer: PasscodeBuffer,
    pub show_error: bool,
    pub pending: Option<Feedback>,
}

impl LoginState {
    /// Appends a digit. The fourth digit is evaluated immediately and
    /// schedules the deferred feedback; anything typed while feedback is
    /// pending is ignored.
    pub fn append(&mut self, symbol: char, passcode: &Passcode) -> Vec<Cmd> {
        if !symbol.is_ascii_digit() || self.pending.is_some() || !self.buffer.push(symbol) {
            return vec![];
        }
        if !self.buffer.is_full() {
            return vec![];
        }

        if passcode.matches(&self.buffer) {
            log::info!("passcode accepted");
            self.pending = Some(Feedback::Accepted);
            vec![Cmd::start(
                TimerId::PasscodeFeedback,
                Schedule::after_ms(PASSCODE_SUCCESS_DELAY_MS),
            )]
        } else {
            log::info!("passcode rejected");
            self.pending = Some(Feedback::Rejected);
            self.show_error = true;
            vec![Cmd::start(
                TimerId::PasscodeFeedback,
                Schedule::after_ms(PASSCODE_MISMATCH_DELAY_MS),
            )]
        }
    }

    /// Empties the buffer and hides the error indicator. A pending mismatch
    /// reset is cancelled; a pending success is left to fire.
    pub fn clear(&mut self) -> Vec<Cmd> {
        self.buffer.clear();
        self.show_error = false;
        if self.pending == Some(Feedback::Rejected) {
            self.pending = None;
            return vec![Cmd::stop(TimerId::PasscodeFeedback)];
        }
        vec![]
    }

    /// Consumes the pending feedback. A mismatch is fully handled here; a
    /// success is returned so the coordinator can switch views first.
    pub fn feedback_due(&mut self) -> Option<Feedback> {
        let feedback = self.pending.take()?;
        if feedback == Feedback::Rejected {
            self.buffer.clear();
            self.show_error = false;
        }
        Some(feedback)
    }

    pub fn filled(&self) -> usize {
        self.buffer.len()
    }
}
