//! Activation state machine: dormant preview → timed transition → activated.
//!
//! Transitions are guarded by a generation counter. Every reset bumps the
//! generation, so a transition timer scheduled before the reset carries a
//! stale token and its completion is discarded.

use serde::Serialize;

use crate::extensions::easing::{ease, Easing};

/// Prominence of the dormant preview (the activated view is 1.0).
pub const DORMANT_PROMINENCE: f32 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationPhase {
    /// Preview only: reduced prominence, no pointer interaction with renderers.
    Dormant,
    /// Fixed-duration visual transition toward activation.
    Transitioning,
    /// Fully interactive, possibly fullscreen.
    Activated,
}

/// Identifies one pending transition. Only the token of the current
/// generation may complete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionToken(u64);

pub struct ActivationLifecycle {
    phase: ActivationPhase,
    generation: u64,
    transition_secs: f32,
    easing: Easing,
    /// Seconds spent in the current transition (drives prominence only).
    elapsed: f32,
}

impl ActivationLifecycle {
    pub fn new(initial: ActivationPhase, transition_secs: f32, easing: Easing) -> Self {
        Self {
            phase: initial,
            generation: 0,
            transition_secs: transition_secs.max(0.0),
            easing,
            elapsed: 0.0,
        }
    }

    pub fn phase(&self) -> ActivationPhase {
        self.phase
    }

    /// Renderers accept pointer input only when activated.
    pub fn is_interactive(&self) -> bool {
        self.phase == ActivationPhase::Activated
    }

    pub fn transition_secs(&self) -> f32 {
        self.transition_secs
    }

    /// Start the transition. Only valid from dormant; returns the token the
    /// caller must schedule for `transition_secs`, or None when the call is a no-op.
    pub fn begin(&mut self) -> Option<TransitionToken> {
        if self.phase != ActivationPhase::Dormant {
            return None;
        }
        self.generation += 1;
        self.phase = ActivationPhase::Transitioning;
        self.elapsed = 0.0;
        Some(TransitionToken(self.generation))
    }

    /// Apply a fired transition timer. Returns true if the view became
    /// activated; false if the token is stale or the transition was superseded.
    pub fn complete(&mut self, token: TransitionToken) -> bool {
        if self.phase != ActivationPhase::Transitioning || token.0 != self.generation {
            return false;
        }
        self.phase = ActivationPhase::Activated;
        true
    }

    /// Whether `token` belongs to the latest activation. Any reset or forced
    /// activation since the token was issued supersedes it.
    pub fn is_current(&self, token: TransitionToken) -> bool {
        token.0 == self.generation
    }

    /// Return to dormant from any phase. Invalidates any pending transition.
    /// Returns true if the phase changed.
    pub fn reset(&mut self) -> bool {
        self.generation += 1;
        self.elapsed = 0.0;
        let changed = self.phase != ActivationPhase::Dormant;
        self.phase = ActivationPhase::Dormant;
        changed
    }

    /// Jump straight from dormant to activated, without a transition or
    /// fullscreen. Used when the device becomes desktop-class.
    pub fn force_activated(&mut self) -> bool {
        if self.phase != ActivationPhase::Dormant {
            return false;
        }
        self.generation += 1;
        self.phase = ActivationPhase::Activated;
        true
    }

    /// Advance the transition clock by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.phase == ActivationPhase::Transitioning {
            self.elapsed = (self.elapsed + dt.max(0.0)).min(self.transition_secs);
        }
    }

    /// Visual prominence in [DORMANT_PROMINENCE, 1.0].
    pub fn prominence(&self) -> f32 {
        match self.phase {
            ActivationPhase::Dormant => DORMANT_PROMINENCE,
            ActivationPhase::Activated => 1.0,
            ActivationPhase::Transitioning => {
                let t = if self.transition_secs > 0.0 {
                    self.elapsed / self.transition_secs
                } else {
                    1.0
                };
                ease(DORMANT_PROMINENCE, 1.0, t, self.easing)
            }
        }
    }
}
