/*
 * Tick Driver Module
 *
 * The frame loop is driven through the TickDriver trait so the simulation
 * does not depend on a particular windowing environment. Each tick is
 * consumed with `take_tick`, and the loop asks for the following one with
 * `request_next_tick`. Once `cancel` returns no further tick is handed out.
 *
 * - FixedTicks yields a fixed number of ticks (tests, benchmarks).
 * - RefreshTicks yields one tick per host refresh callback (the nannou app).
 */

pub trait TickDriver {
    /// Schedule another tick after the current one.
    fn request_next_tick(&mut self);

    /// Stop scheduling. No tick is handed out after this returns.
    fn cancel(&mut self);

    fn is_cancelled(&self) -> bool;

    /// Consume the pending tick, if one is due.
    fn take_tick(&mut self) -> bool;
}

// Hands out at most `remaining` ticks
#[derive(Debug, Clone)]
pub struct FixedTicks {
    remaining: u64,
    requested: bool,
    cancelled: bool,
}

impl FixedTicks {
    pub fn new(count: u64) -> Self {
        Self {
            remaining: count,
            requested: count > 0,
            cancelled: false,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl TickDriver for FixedTicks {
    fn request_next_tick(&mut self) {
        if !self.cancelled && self.remaining > 0 {
            self.requested = true;
        }
    }

    fn cancel(&mut self) {
        self.cancelled = true;
        self.requested = false;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn take_tick(&mut self) -> bool {
        if self.cancelled || !self.requested || self.remaining == 0 {
            return false;
        }
        self.requested = false;
        self.remaining -= 1;
        true
    }
}

// One tick per display refresh while a tick is requested
#[derive(Debug, Clone)]
pub struct RefreshTicks {
    requested: bool,
    cancelled: bool,
    ticks: u64,
}

impl RefreshTicks {
    pub fn new() -> Self {
        Self {
            requested: true,
            cancelled: false,
            ticks: 0,
        }
    }

    // Number of ticks handed out so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for RefreshTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl TickDriver for RefreshTicks {
    fn request_next_tick(&mut self) {
        if !self.cancelled {
            self.requested = true;
        }
    }

    fn cancel(&mut self) {
        self.cancelled = true;
        self.requested = false;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn take_tick(&mut self) -> bool {
        if self.cancelled || !self.requested {
            return false;
        }
        self.requested = false;
        self.ticks += 1;
        true
    }
}
