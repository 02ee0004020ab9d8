//! Countdown that drives the automatic redirect on the disclaimer page.
//!
//! Every disclaimer page is built from a [`Countdown`], which supplies its length
//! and initial progress. The page script follows the same rules: one timer, one
//! tick per second, cancelling clears the timer so a later tick can never navigate,
//! and "go now" navigates whether or not the timer still runs.
//! [`run_countdown`] drives a [`Countdown`] on the tokio clock.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Default countdown length in seconds.
pub const DEFAULT_COUNTDOWN_SECONDS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running { remaining: u32 },
    Cancelled,
    Navigated,
}

/// Result of a single timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Remaining(u32),
    Navigate,
    /// The countdown already finished or was cancelled; the tick has no effect.
    Ignored,
}

/// User actions available while the countdown runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Cancel button, Escape key or history back.
    Cancel,
    /// "Go now" button.
    GoNow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    state: CountdownState,
}

impl Countdown {
    /// A zero length is bumped to one second so the disclaimer is always visible.
    pub fn new(seconds: u32) -> Self {
        let total = seconds.max(1);
        Self {
            total,
            state: CountdownState::Running { remaining: total },
        }
    }

    /// Length in seconds after the zero bump.
    pub fn seconds(&self) -> u32 {
        self.total
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, CountdownState::Running { .. })
    }

    pub fn tick(&mut self) -> Tick {
        match self.state {
            CountdownState::Running { remaining } if remaining > 1 => {
                self.state = CountdownState::Running {
                    remaining: remaining - 1,
                };
                Tick::Remaining(remaining - 1)
            }
            CountdownState::Running { .. } => {
                self.state = CountdownState::Navigated;
                Tick::Navigate
            }
            CountdownState::Cancelled | CountdownState::Navigated => Tick::Ignored,
        }
    }

    /// Returns true if the countdown was running and is now cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.is_running() {
            self.state = CountdownState::Cancelled;
            true
        } else {
            false
        }
    }

    /// Navigates immediately, also after a cancel. Returns false only if the
    /// countdown already navigated.
    pub fn go_now(&mut self) -> bool {
        if self.state == CountdownState::Navigated {
            return false;
        }
        self.state = CountdownState::Navigated;
        true
    }

    /// Progress bar fill in percent.
    pub fn progress_percent(&self) -> u8 {
        match self.state {
            CountdownState::Running { remaining } => {
                let elapsed = self.total - remaining;
                (elapsed * 100 / self.total) as u8
            }
            CountdownState::Navigated => 100,
            CountdownState::Cancelled => 0,
        }
    }
}

/// How a driven countdown ended and how long it ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    Navigated { after: Duration },
    Cancelled { after: Duration },
}

/// Drives `countdown` with one tick every `period` until it navigates or is cancelled.
///
/// Control messages are polled before the timer, so a cancel that is already
/// queued when a tick falls due wins. A closed control channel counts as a cancel
/// (the page went away).
pub async fn run_countdown(
    mut countdown: Countdown,
    period: Duration,
    mut control: mpsc::Receiver<Control>,
) -> CountdownOutcome {
    let started = Instant::now();
    let mut ticker = interval_at(started + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            message = control.recv() => {
                match message {
                    Some(Control::GoNow) if countdown.go_now() => {
                        return CountdownOutcome::Navigated { after: started.elapsed() };
                    }
                    Some(Control::GoNow) => {}
                    Some(Control::Cancel) | None => {
                        countdown.cancel();
                        return CountdownOutcome::Cancelled { after: started.elapsed() };
                    }
                }
            }
            _ = ticker.tick() => {
                if countdown.tick() == Tick::Navigate {
                    return CountdownOutcome::Navigated { after: started.elapsed() };
                }
            }
        }
    }
}
