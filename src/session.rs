//! Layout session: holds the latest layout and drives the shuffle transition.
//!
//! `Idle(P) → Clearing(∅) → Idle(P')`. A shuffle clears the positions so the
//! host can animate the cards out, and the new layout is computed on the
//! first `poll` after the clear delay. Time comes from a [`Scheduler`] the
//! host owns, so tests advance a [`ManualClock`] instead of sleeping.

use std::cell::Cell;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::config::LayoutConfig;
use crate::layout::{Container, Item, PlacedItem, Placement, compute_layout_detailed};

// ─── Scheduler ───────────────────────────────────────────────────────────────

/// Source of monotonic time for the session.
pub trait Scheduler {
    /// Time elapsed since some fixed origin.
    fn now(&self) -> Duration;
}

/// Virtual clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Scheduler for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Wall-clock time since the clock was created.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

// ─── Phase / policy ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Positions are cleared; the next layout is due at `resume_at`.
    Clearing { resume_at: Duration },
}

/// What a shuffle does while another one is still clearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReshufflePolicy {
    /// Fold into the pending shuffle; its deadline stays.
    #[default]
    Coalesce,
    /// Push the pending deadline back by a full clear delay.
    Restart,
}

/// Returned by [`LayoutSession::regenerate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleTicket {
    pub resume_at: Duration,
    /// True if this call joined a shuffle that was already pending.
    pub coalesced: bool,
}

// ─── LayoutSession ───────────────────────────────────────────────────────────

/// Owns the item list, the container size, the RNG and the current layout.
///
/// Every layout is computed from scratch; the position list is replaced
/// whole, never edited in place.
pub struct LayoutSession<R: Rng> {
    items: Vec<Item>,
    container: Container,
    config: LayoutConfig,
    policy: ReshufflePolicy,
    rng: R,
    positions: Vec<PlacedItem>,
    phase: Phase,
    busy_until: Option<Duration>,
    generation: u64,
    disposed: bool,
}

impl<R: Rng> LayoutSession<R> {
    pub fn new(items: Vec<Item>, config: LayoutConfig, rng: R) -> Self {
        Self {
            items,
            container: Container::default(),
            config,
            policy: ReshufflePolicy::default(),
            rng,
            positions: Vec::new(),
            phase: Phase::Idle,
            busy_until: None,
            generation: 0,
            disposed: false,
        }
    }

    pub fn with_policy(mut self, policy: ReshufflePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn container(&self) -> Container {
        self.container
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of layouts computed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Current layout with diagnostics; empty while clearing or before the
    /// first layout.
    pub fn placed(&self) -> &[PlacedItem] {
        &self.positions
    }

    pub fn positions(&self) -> Vec<Placement> {
        self.positions.iter().map(|p| p.placement).collect()
    }

    /// New measured container size. Recomputes right away when idle and the
    /// size actually changed; returns whether positions changed.
    pub fn set_container(&mut self, container: Container) -> bool {
        if self.disposed || container == self.container {
            return false;
        }
        self.container = container;
        match self.phase {
            Phase::Idle => self.recompute(),
            // The pending shuffle picks up the new size.
            Phase::Clearing { .. } => false,
        }
    }

    /// Replace the item list. Recomputes right away when idle.
    pub fn set_items(&mut self, items: Vec<Item>) -> bool {
        if self.disposed {
            return false;
        }
        self.items = items;
        match self.phase {
            Phase::Idle if !self.container.is_ready() => {
                // Old positions belong to the old list; defer until measured.
                let had_positions = !self.positions.is_empty();
                self.positions = Vec::new();
                had_positions
            }
            Phase::Idle => self.recompute(),
            Phase::Clearing { .. } => false,
        }
    }

    /// Start a shuffle: clear the positions now, repopulate after the clear
    /// delay (see [`poll`](Self::poll)).
    pub fn regenerate(&mut self, clock: &impl Scheduler) -> ShuffleTicket {
        let now = clock.now();
        if self.disposed {
            return ShuffleTicket {
                resume_at: now,
                coalesced: false,
            };
        }
        self.busy_until = Some(now + self.config.busy_window());

        if let Phase::Clearing { resume_at } = self.phase {
            let resume_at = match self.policy {
                ReshufflePolicy::Coalesce => resume_at,
                ReshufflePolicy::Restart => now + self.config.clear_delay(),
            };
            self.phase = Phase::Clearing { resume_at };
            debug!(?resume_at, policy = ?self.policy, "shuffle already pending");
            return ShuffleTicket {
                resume_at,
                coalesced: true,
            };
        }

        let resume_at = now + self.config.clear_delay();
        self.positions = Vec::new();
        self.phase = Phase::Clearing { resume_at };
        debug!(?resume_at, "shuffle started, positions cleared");
        ShuffleTicket {
            resume_at,
            coalesced: false,
        }
    }

    /// Run the pending shuffle if its delay has elapsed. Runs at most once
    /// per shuffle; returns whether positions changed.
    pub fn poll(&mut self, clock: &impl Scheduler) -> bool {
        if self.disposed {
            return false;
        }
        match self.phase {
            Phase::Clearing { resume_at } if clock.now() >= resume_at => {
                self.phase = Phase::Idle;
                self.recompute()
            }
            _ => false,
        }
    }

    /// Whether the host should keep its shuffle control disabled.
    pub fn is_busy(&self, clock: &impl Scheduler) -> bool {
        if matches!(self.phase, Phase::Clearing { .. }) {
            return true;
        }
        self.busy_until.is_some_and(|until| clock.now() < until)
    }

    /// Drop any pending shuffle. Later calls leave the session untouched.
    pub fn dispose(&mut self) {
        if let Phase::Clearing { .. } = self.phase {
            debug!("disposing session with a pending shuffle");
        }
        self.phase = Phase::Idle;
        self.busy_until = None;
        self.disposed = true;
    }

    fn recompute(&mut self) -> bool {
        // Not ready: keep whatever is on screen until geometry is valid.
        if !self.container.is_ready() {
            return false;
        }
        let next = compute_layout_detailed(&self.items, self.container, &self.config, &mut self.rng);
        self.generation += 1;
        let degraded = next.iter().filter(|p| p.outcome.is_degraded()).count();
        info!(
            generation = self.generation,
            items = next.len(),
            degraded,
            "layout computed"
        );
        self.positions = next;
        true
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_session.rs"]
mod tests;
