use std::sync::Arc;

use chrono::{DateTime, Local};
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState,
    infrastructure::tui::{self, Frame},
    presentation::components::Components,
};

/// Draws the whole card into whatever terminal it is handed
#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render(
        &self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
        now: DateTime<Local>,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut Frame<'_>| self.components.render(f, state, now);
        guard.draw(&mut draw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::view::ViewId, infrastructure::tui::test::TestTui};

    #[tokio::test]
    async fn renderer_renders_with_test_tui() {
        let test_tui = Arc::new(Mutex::new(
            TestTui::new(80, 24).expect("failed to create TestTui"),
        ));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = Arc::<Mutex<TestTui>>::clone(&test_tui);
        let renderer = Renderer::new();

        let mut state = AppState::default();
        renderer
            .render(&tui, &state, Local::now())
            .await
            .expect("render should succeed");

        state.active_view = ViewId::Dashboard;
        renderer
            .render(&tui, &state, Local::now())
            .await
            .expect("render should succeed");

        let guard = test_tui.lock().await;
        assert_eq!(guard.draw_count(), 2);
        assert!(guard.contains("Home"));
    }
}
