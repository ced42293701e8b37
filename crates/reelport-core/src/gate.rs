//! Countdown-gated download reveal
//!
//! Each quality tier runs its own `idle → counting → revealed` machine:
//! the real download URL is only surfaced after a fixed-duration countdown
//! for that tier. Tiers are fully independent; starting one never blocks or
//! cancels another. Once counting starts there is no user-facing cancel;
//! teardown-only cancellation happens by dropping the [`run_countdown`]
//! future.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;

use crate::types::Quality;

/// Reference reveal delay, in seconds
pub const DEFAULT_GATE_DELAY_SECS: u32 = 10;

/// Per-tier gate state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TierState {
    /// No countdown requested yet
    Idle,
    /// Counting down; the tier's control is disabled and shows `remaining`
    Counting { remaining: u32 },
    /// Countdown finished; the control is a direct download affordance and
    /// can be invoked again without re-gating
    Revealed,
}

/// Download gate for one entry's quality tiers
#[derive(Debug, Clone)]
pub struct DownloadGate {
    delay_secs: u32,
    tiers: HashMap<Quality, TierState>,
}

impl Default for DownloadGate {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadGate {
    /// Gate with the reference 10-second delay
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_GATE_DELAY_SECS)
    }

    /// Gate with a custom delay (shorter delays are useful in tests)
    pub fn with_delay(delay_secs: u32) -> Self {
        Self {
            delay_secs,
            tiers: HashMap::new(),
        }
    }

    pub fn delay_secs(&self) -> u32 {
        self.delay_secs
    }

    /// Current state for a tier; tiers never started report `Idle`
    pub fn state(&self, quality: Quality) -> TierState {
        self.tiers.get(&quality).copied().unwrap_or(TierState::Idle)
    }

    pub fn is_revealed(&self, quality: Quality) -> bool {
        self.state(quality) == TierState::Revealed
    }

    /// User-initiated "get link" action for a tier
    ///
    /// Only transitions `Idle → Counting(delay)`. A tier already counting
    /// keeps its remaining time (no restart), and a revealed tier stays
    /// revealed.
    pub fn start(&mut self, quality: Quality) -> TierState {
        let state = self.state(quality);
        if state == TierState::Idle {
            let counting = TierState::Counting {
                remaining: self.delay_secs,
            };
            self.tiers.insert(quality, counting);
            return counting;
        }
        state
    }

    /// One-second tick for a tier
    ///
    /// Decrements the remaining time; reaching zero transitions to
    /// `Revealed`. Idle and revealed tiers are unaffected.
    pub fn tick(&mut self, quality: Quality) -> TierState {
        let next = match self.state(quality) {
            TierState::Counting { remaining } if remaining <= 1 => TierState::Revealed,
            TierState::Counting { remaining } => TierState::Counting {
                remaining: remaining - 1,
            },
            other => other,
        };
        self.tiers.insert(quality, next);
        next
    }
}

/// Drives one tier's countdown in real time, ticking once per second
///
/// Starts the tier (a no-op if already counting or revealed) and resolves
/// once it reaches `Revealed`, at which point the caller performs the
/// navigation side effect with the real download URL. Dropping the future
/// (e.g. on page teardown) abandons the countdown; other tiers sharing the
/// gate are unaffected.
pub async fn run_countdown(gate: &Mutex<DownloadGate>, quality: Quality) {
    {
        let mut gate = gate.lock().await;
        if gate.start(quality) == TierState::Revealed {
            return;
        }
    }

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first tick of a tokio interval completes immediately
    interval.tick().await;

    loop {
        interval.tick().await;
        let mut gate = gate.lock().await;
        if gate.tick(quality) == TierState::Revealed {
            return;
        }
    }
}
