use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{decor::DecorMsg, nav::NavMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        config::Config,
        tui::{self, event_source::EventSource, real::RealTui},
    },
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Drives the card: terminal events and timer firings in, frames out.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    event_source: EventSource,
    renderer: Renderer,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_rx: mpsc::UnboundedReceiver<()>,
    start_view: Option<String>,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Runner over an existing runtime and terminal
    pub fn new_with_runtime(
        mut runtime: Runtime,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        event_source: EventSource,
    ) -> Self {
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx);
        runtime.add_render_request_sender(render_tx);

        Self {
            runtime,
            tui,
            event_source,
            renderer: Renderer::new(),
            tui_cmd_rx,
            render_rx,
            start_view: None,
        }
    }

    pub fn new_with_config(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        event_source: EventSource,
    ) -> Self {
        let runtime = Runtime::new(AppState::new_with_config(config));
        Self::new_with_runtime(runtime, tui, event_source)
    }

    /// Runner on the real terminal, reading events from it
    pub fn new_with_real(config: Config, tui: RealTui) -> Self {
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = Arc::new(Mutex::new(tui));
        let event_source = EventSource::real(Arc::clone(&tui));
        Self::new_with_config(config, tui, event_source)
    }

    /// Panel to open right after start, skipping the passcode gate
    pub fn with_start_view(mut self, view: Option<String>) -> Self {
        self.start_view = view;
        self
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.start().await?;

        while !self.runtime.state().system.should_quit {
            self.run_one_cycle().await?;
        }

        self.runtime.shutdown();
        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Session timers, the optional start panel, and a first frame
    pub async fn start(&mut self) -> Result<()> {
        self.runtime.send_msg(Msg::Decor(DecorMsg::Start));
        if let Some(view) = self.start_view.take() {
            self.runtime.send_msg(Msg::Nav(NavMsg::ActivateNamed(view)));
        }
        self.runtime.run_update_cycle();
        self.render().await
    }

    /// Waits for one terminal event or timer firing and processes it
    pub async fn run_one_cycle(&mut self) -> Result<()> {
        let mut needs_render = false;

        tokio::select! {
            biased;
            Some(id) = self.runtime.next_timer() => {
                self.runtime.send_raw_msg(RawMsg::Timer(id));
                needs_render = true;
            }
            event = self.event_source.next() => {
                needs_render |= self.handle_event(event);
            }
        }

        self.runtime.drain_timers();
        self.runtime.run_update_cycle();

        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                    needs_render = true;
                }
            }
        }
        while self.render_rx.try_recv().is_ok() {
            needs_render = true;
        }

        if self.runtime.state().system.should_suspend {
            self.suspend().await?;
            needs_render = true;
        }

        if needs_render && !self.runtime.state().system.should_quit {
            self.render().await?;
        }
        Ok(())
    }

    /// Queues the raw message for `event`; true when a frame should follow
    fn handle_event(&mut self, event: Option<tui::Event>) -> bool {
        let Some(event) = event else {
            log::info!("terminal event stream ended");
            self.runtime.send_raw_msg(RawMsg::Quit);
            return false;
        };

        match event {
            tui::Event::Quit | tui::Event::Closed => {
                self.runtime.send_raw_msg(RawMsg::Quit);
                false
            }
            tui::Event::Error => {
                self.runtime
                    .send_raw_msg(RawMsg::Error("terminal input error".to_string()));
                true
            }
            tui::Event::Tick => {
                self.runtime.send_raw_msg(RawMsg::Tick);
                false
            }
            tui::Event::Render | tui::Event::Init | tui::Event::FocusGained => true,
            tui::Event::Resize(w, h) => {
                self.runtime.send_raw_msg(RawMsg::Resize(w, h));
                true
            }
            tui::Event::Key(key) => {
                self.runtime.send_raw_msg(RawMsg::Key(key));
                true
            }
            tui::Event::FocusLost | tui::Event::Paste(_) | tui::Event::Mouse(_) => false,
        }
    }

    async fn suspend(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.runtime.run_update_cycle();
        Ok(())
    }

    pub async fn render(&mut self) -> Result<()> {
        let now = self.runtime.now();
        self.renderer
            .render(&self.tui, self.runtime.state(), now)
            .await
    }
}
