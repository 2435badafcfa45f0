use std::{path::PathBuf, sync::Arc, time::Duration};

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keepsake::{
    core::state::AppState,
    domain::{clock::FixedClock, entropy::FixedEntropy, timer::TimerId, view::ViewId},
    infrastructure::config::Config,
    RawMsg, Runtime,
};
use pretty_assertions::assert_eq;
use tokio::time::Instant;

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("keepsake-passcode-flow-{name}-{}", std::process::id()))
}

fn runtime(name: &str) -> Runtime {
    let config = Config::load_from(&scratch_dir(name), &scratch_dir(name)).expect("default config");
    Runtime::new_with_context(
        AppState::new_with_config(config),
        Arc::new(FixedClock(Local::now())),
        Arc::new(FixedEntropy::default()),
    )
}

fn type_code(runtime: &mut Runtime, code: &str) {
    for c in code.chars() {
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
    }
    runtime.run_update_cycle();
}

#[tokio::test(start_paused = true)]
async fn secret_unlocks_after_one_short_delay() {
    let mut runtime = runtime("secret");
    type_code(&mut runtime, "2004");
    assert!(runtime.state().is_active(ViewId::Login));

    let started = Instant::now();
    let fired = runtime.next_timer().await;
    assert_eq!(fired, Some(TimerId::PasscodeFeedback));
    assert_eq!(started.elapsed(), Duration::from_millis(300));

    runtime.send_raw_msg(RawMsg::Timer(TimerId::PasscodeFeedback));
    runtime.run_update_cycle();

    let state = runtime.state();
    assert!(state.is_active(ViewId::Dashboard));
    assert!(state.login.buffer.is_empty());
    assert_eq!(runtime.get_stats().live_timers, 0);
}

#[tokio::test(start_paused = true)]
async fn wrong_code_recovers_after_one_second() {
    let mut runtime = runtime("wrong");
    type_code(&mut runtime, "1234");
    assert!(runtime.state().login.show_error);

    // typing during the evaluation window is ignored
    type_code(&mut runtime, "5");
    assert_eq!(runtime.state().login.buffer.as_str(), "1234");

    let started = Instant::now();
    assert_eq!(runtime.next_timer().await, Some(TimerId::PasscodeFeedback));
    assert_eq!(started.elapsed(), Duration::from_millis(1_000));

    runtime.send_raw_msg(RawMsg::Timer(TimerId::PasscodeFeedback));
    runtime.run_update_cycle();

    let state = runtime.state();
    assert!(state.is_active(ViewId::Login));
    assert!(!state.login.show_error);
    assert!(state.login.buffer.is_empty());
}

#[tokio::test(start_paused = true)]
async fn clearing_cancels_pending_mismatch() {
    let mut runtime = runtime("clear");
    type_code(&mut runtime, "9999");
    assert_eq!(runtime.get_stats().live_timers, 1);

    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
    runtime.run_update_cycle();

    assert_eq!(runtime.get_stats().live_timers, 0);
    assert!(runtime.state().login.buffer.is_empty());

    // and the code can be typed again right away
    type_code(&mut runtime, "2004");
    assert_eq!(runtime.next_timer().await, Some(TimerId::PasscodeFeedback));
}

#[tokio::test(start_paused = true)]
async fn panels_stay_locked_until_unlocked() {
    let mut runtime = runtime("locked");
    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
    runtime.run_update_cycle();
    assert!(runtime.state().is_active(ViewId::Login));
}
