use crate::{
    core::{
        cmd::Cmd,
        msg::{
            calendar::CalendarMsg, decor::DecorMsg, login::LoginMsg, nav::NavMsg,
            system::SystemMsg, Msg,
        },
        state::{login::Feedback, AppState},
    },
    domain::{
        clock::{Clock, SystemClock},
        entropy::{Entropy, ThreadEntropy},
        view::ViewId,
    },
};

/// Impure inputs the update function may consult
#[derive(Clone, Copy)]
pub struct UpdateContext<'a> {
    pub clock: &'a dyn Clock,
    pub entropy: &'a dyn Entropy,
}

impl UpdateContext<'static> {
    pub fn system() -> Self {
        static CLOCK: SystemClock = SystemClock;
        static ENTROPY: ThreadEntropy = ThreadEntropy;
        Self {
            clock: &CLOCK,
            entropy: &ENTROPY,
        }
    }
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_with_context(msg, state, &UpdateContext::system())
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Nav(nav_msg) => {
            let commands = match nav_msg {
                NavMsg::Activate(view) => state.activate(view, ctx),
                NavMsg::ActivateNamed(name) => match ViewId::parse(&name) {
                    Ok(view) => state.activate(view, ctx),
                    Err(e) => state.system.update(SystemMsg::ShowError(e.to_string())),
                },
                NavMsg::Back => {
                    if state.is_unlocked() {
                        state.activate(ViewId::Dashboard, ctx)
                    } else {
                        vec![]
                    }
                }
            };
            (state, commands)
        }

        Msg::Login(login_msg) => {
            let commands = match login_msg {
                LoginMsg::Append(symbol) => {
                    let passcode = &state.config.config.passcode;
                    state.login.append(symbol, passcode)
                }
                LoginMsg::Clear => state.login.clear(),
                LoginMsg::FeedbackDue => match state.login.feedback_due() {
                    Some(Feedback::Accepted) => {
                        let cmds = state.activate(ViewId::Dashboard, ctx);
                        state.login.buffer.clear();
                        cmds
                    }
                    Some(Feedback::Rejected) | None => vec![],
                },
            };
            (state, commands)
        }

        Msg::Calendar(CalendarMsg::Tick) => {
            let epoch = state.config.config.epoch;
            state.calendar.tick(&epoch, ctx.clock.now());
            (state, vec![])
        }

        Msg::Game(game_msg) => {
            let commands = if state.is_active(ViewId::Game) {
                state.game.update(game_msg)
            } else {
                vec![]
            };
            (state, commands)
        }

        Msg::Letter(letter_msg) => {
            let commands = state.letter.update(letter_msg);
            (state, commands)
        }

        Msg::Memories(memories_msg) => {
            let count = state.config.config.memories.captions.len();
            let commands = state.memories.update(memories_msg, count);
            (state, commands)
        }

        Msg::Decor(DecorMsg::Start) => {
            let cmds = state.decor.start(state.config.config.hearts.enabled);
            state
                .decor
                .clock_tick(ctx.clock.now(), &state.config.config.clock.format);
            (state, cmds)
        }

        Msg::Decor(DecorMsg::SpawnHeart) => {
            state.decor.spawn_heart(ctx.clock.now(), ctx.entropy);
            (state, vec![])
        }

        Msg::Decor(DecorMsg::ClockTick) => {
            let now = ctx.clock.now();
            state.decor.clock_tick(now, &state.config.config.clock.format);
            (state, vec![])
        }
    }
}
