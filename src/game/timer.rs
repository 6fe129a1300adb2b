use serde::Serialize;

/// What a call to [`Countdown::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The countdown wasn't running.
    Ignored,
    Running(u32),
    /// The countdown just reached zero and stopped.
    Expired,
}

/// Seconds-resolution countdown. The host drives it once per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    pub const fn new() -> Self {
        Self {
            remaining: 0,
            running: false,
        }
    }

    pub fn start(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.running = seconds > 0;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining == 0 {
            self.running = false;
            Tick::Expired
        } else {
            Tick::Running(self.remaining)
        }
    }
}
