use std::{collections::VecDeque, sync::Arc};

use chrono::{DateTime, Local};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    domain::{
        clock::{Clock, SystemClock},
        entropy::{Entropy, ThreadEntropy},
        timer::TimerId,
    },
};

/// Owns the state and drives translate -> update -> execute
pub struct Runtime {
    clock: Arc<dyn Clock>,
    entropy: Arc<dyn Entropy>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    /// Create a new Runtime on the system clock and thread-local randomness
    pub fn new(initial_state: AppState) -> Self {
        Self::new_with_context(
            initial_state,
            Arc::new(SystemClock),
            Arc::new(ThreadEntropy),
        )
    }

    pub fn new_with_context(
        initial_state: AppState,
        clock: Arc<dyn Clock>,
        entropy: Arc<dyn Entropy>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            clock,
            entropy,
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: CmdExecutor::new(),
        }
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Route TuiCommand execution to the host
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(tui_sender);
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(&mut self, render_sender: mpsc::UnboundedSender<()>) {
        self.cmd_executor.set_render_request_sender(render_sender);
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Current time on the runtime's clock
    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn executor(&self) -> &CmdExecutor {
        &self.cmd_executor
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Waits for the next live timer firing
    pub async fn next_timer(&mut self) -> Option<TimerId> {
        self.cmd_executor.next_fired().await
    }

    /// Queues every timer firing that is already due
    pub fn drain_timers(&mut self) -> usize {
        let fired = self.cmd_executor.drain_fired();
        let count = fired.len();
        self.raw_msg_queue
            .extend(fired.into_iter().map(RawMsg::Timer));
        count
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Vec<String> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return vec![];
        }
        let log = self.cmd_executor.execute_commands(&commands);
        for failure in log.iter().filter_map(|line| line.strip_prefix("✗ ")) {
            self.raw_msg_queue
                .push_back(RawMsg::SystemMessage(failure.to_string()));
        }
        log
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("update: {msg:?}");
        }
        let ctx = UpdateContext {
            clock: self.clock.as_ref(),
            entropy: self.entropy.as_ref(),
        };
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update_with_context(msg, state, &ctx);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw messages are translated against the state at the time they are
        // taken from the queue, so earlier messages can change later routing
        loop {
            let raw_msg = match self.raw_msg_queue.pop_front() {
                Some(raw_msg) => raw_msg,
                None => match self.raw_msg_rx.try_recv() {
                    Ok(raw_msg) => raw_msg,
                    Err(_) => break,
                },
            };
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                all_commands.extend(self.process_message(msg));
            }
        }

        // Process domain messages in internal queue
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        // Process domain messages from external sources
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step. Failed
    /// commands are reported to the status line within the same cycle.
    pub fn run_update_cycle(&mut self) -> Vec<String> {
        let _commands = self.process_all_messages();
        let mut log = self.execute_pending_commands();
        if !self.raw_msg_queue.is_empty() {
            self.process_all_messages();
            log.extend(self.execute_pending_commands());
        }
        log
    }

    /// Cancel all scheduled work
    pub fn shutdown(&mut self) {
        self.cmd_executor.shutdown();
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            live_timers: self.cmd_executor.scheduler().live_count(),
            active_view: self.state.active_view.to_string(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub live_timers: usize,
    pub active_view: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::msg::{login::LoginMsg, nav::NavMsg, system::SystemMsg},
        domain::{clock::FixedClock, entropy::FixedEntropy, view::ViewId},
    };
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn create_test_runtime() -> Runtime {
        Runtime::new_with_context(
            AppState::default(),
            Arc::new(FixedClock(Local::now())),
            Arc::new(FixedEntropy::default()),
        )
    }

    fn digit(c: char) -> RawMsg {
        RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_runtime_creation() {
        let runtime = create_test_runtime();
        let stats = runtime.get_stats();

        assert_eq!(stats.queued_messages, 0);
        assert_eq!(stats.queued_commands, 0);
        assert_eq!(stats.live_timers, 0);
        assert_eq!(stats.active_view, "login");
    }

    #[test]
    fn test_process_message() {
        let mut runtime = create_test_runtime();

        let commands = runtime.process_message(Msg::System(SystemMsg::Quit));
        assert!(commands.is_empty());
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_send_message() {
        let mut runtime = create_test_runtime();

        runtime.send_msg(Msg::Nav(NavMsg::Activate(ViewId::Game)));
        assert_eq!(runtime.get_stats().queued_messages, 1);

        let commands = runtime.process_all_messages();
        assert_eq!(runtime.get_stats().queued_messages, 0);
        assert!(runtime.state().is_active(ViewId::Game));
        assert!(commands.is_empty());
    }

    #[test]
    fn raw_keys_are_translated_in_order() {
        let mut runtime = create_test_runtime();
        for c in "200".chars() {
            runtime.send_raw_msg(digit(c));
        }
        runtime.process_all_messages();
        assert_eq!(runtime.state().login.filled(), 3);
    }

    #[test]
    fn test_external_message_channel() {
        let mut runtime = create_test_runtime();
        let sender = runtime.get_sender();
        let raw_sender = runtime.get_raw_sender();

        raw_sender.send(digit('1')).expect("runtime alive");
        sender
            .send(Msg::Login(LoginMsg::Append('2')))
            .expect("runtime alive");

        // Not processed yet
        assert_eq!(runtime.state().login.filled(), 0);

        runtime.process_all_messages();
        assert_eq!(runtime.state().login.filled(), 2);
    }

    #[test]
    fn test_pending_commands() {
        let mut runtime = create_test_runtime();
        runtime.process_message(Msg::Nav(NavMsg::Activate(ViewId::Calendar)));
        runtime.process_message(Msg::Nav(NavMsg::Activate(ViewId::Dashboard)));

        let pending = runtime.pending_commands();
        assert_eq!(pending.len(), 2);
        assert!(runtime.pending_commands().is_empty());
    }

    #[test]
    fn failed_command_is_shown_in_the_status_line() {
        // no tokio runtime here, so starting the tick fails
        let mut runtime = create_test_runtime();
        runtime.send_msg(Msg::Nav(NavMsg::Activate(ViewId::Calendar)));
        let log = runtime.run_update_cycle();

        assert_eq!(log.len(), 1);
        assert!(log[0].starts_with("✗ Failed to execute StartTimer(ElapsedTick)"));
        let status = runtime
            .state()
            .system
            .status_message
            .clone()
            .expect("failure reported");
        assert!(status.starts_with("Failed to execute StartTimer(ElapsedTick)"));
        assert_eq!(runtime.get_stats().queued_raw_messages, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn update_cycle_starts_and_stops_timers() {
        let mut runtime = create_test_runtime();
        runtime.send_msg(Msg::Nav(NavMsg::Activate(ViewId::Calendar)));
        let log = runtime.run_update_cycle();
        assert_eq!(log, vec!["✓ Executed: StartTimer(ElapsedTick)".to_string()]);
        assert_eq!(runtime.get_stats().live_timers, 1);

        runtime.send_msg(Msg::Nav(NavMsg::Back));
        runtime.run_update_cycle();
        assert_eq!(runtime.get_stats().live_timers, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_firing_reaches_the_widget() {
        let mut runtime = create_test_runtime();
        runtime.send_msg(Msg::Nav(NavMsg::Activate(ViewId::Calendar)));
        runtime.run_update_cycle();
        assert_eq!(runtime.state().calendar.published, 1);

        let fired = runtime.next_timer().await;
        assert_eq!(fired, Some(TimerId::ElapsedTick));
        runtime.send_raw_msg(RawMsg::Timer(TimerId::ElapsedTick));
        runtime.run_update_cycle();
        assert_eq!(runtime.state().calendar.published, 2);
    }
}
