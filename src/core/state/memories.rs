use crate::{
    core::{cmd::Cmd, msg::memories::MemoriesMsg},
    domain::timer::{Schedule, TimerId},
};

/// Captions slideshow. Plays only while its view is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoriesState {
    pub index: usize,
    pub playing: bool,
}

impl MemoriesState {
    pub fn update(&mut self, msg: MemoriesMsg, count: usize) -> Vec<Cmd> {
        match msg {
            MemoriesMsg::Next => self.step_forward(count),
            MemoriesMsg::Previous => {
                if count > 0 {
                    self.index = (self.index + count - 1) % count;
                }
            }
            MemoriesMsg::Advance => {
                if self.playing {
                    self.step_forward(count);
                }
            }
        }
        vec![]
    }

    pub fn play(&mut self, interval_ms: u64) -> Vec<Cmd> {
        self.playing = true;
        vec![Cmd::start(
            TimerId::MemoriesAdvance,
            Schedule::every_ms(interval_ms),
        )]
    }

    pub fn pause(&mut self) -> Vec<Cmd> {
        if !self.playing {
            return vec![];
        }
        self.playing = false;
        vec![Cmd::stop(TimerId::MemoriesAdvance)]
    }

    fn step_forward(&mut self, count: usize) {
        if count > 0 {
            self.index = (self.index + 1) % count;
        }
    }
}
