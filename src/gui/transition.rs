//! Exit-then-enter slide transition.
//!
//! The outgoing slide fades out while drifting down, then the incoming slide
//! fades in while rising into place. Only one slide is drawn at any instant.

use log::debug;

use crate::config::TransitionConfig;
use crate::models::view::SlideId;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Exiting { started: f64, next: SlideId },
    Entering { started: f64 },
}

/// What to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideFrame {
    pub slide: SlideId,
    pub opacity: f32,
    /// Downward offset in points.
    pub offset: f32,
}

pub struct SlideTransition {
    shown: SlideId,
    phase: Phase,
    exit_secs: f64,
    enter_secs: f64,
    shift: f32,
}

impl SlideTransition {
    pub fn new(initial: SlideId, config: &TransitionConfig) -> Self {
        Self {
            shown: initial,
            phase: Phase::Idle,
            exit_secs: config.exit_secs(),
            enter_secs: config.enter_secs(),
            shift: config.shift_px,
        }
    }

    /// Shows `slide` immediately, cancelling any running transition.
    pub fn snap(&mut self, slide: SlideId) {
        self.shown = slide;
        self.phase = Phase::Idle;
    }

    pub fn retarget(&mut self, target: SlideId, now: f64) {
        self.advance(now);
        self.phase = match self.phase {
            Phase::Idle if target == self.shown => Phase::Idle,
            Phase::Idle => Phase::Exiting { started: now, next: target },
            Phase::Exiting { started, .. } if target == self.shown => {
                // Turn around and fade back in from the opacity already reached.
                let reached = progress(now - started, self.exit_secs);
                Phase::Entering {
                    started: now - (1.0 - reached) * self.enter_secs,
                }
            }
            Phase::Exiting { started, .. } => Phase::Exiting { started, next: target },
            Phase::Entering { .. } if target == self.shown => self.phase,
            Phase::Entering { started } => {
                // Pick up the exit at the opacity the entering slide has reached.
                let reached = progress(now - started, self.enter_secs);
                Phase::Exiting {
                    started: now - (1.0 - reached) * self.exit_secs,
                    next: target,
                }
            }
        };
        debug!("Transition retargeted to {}: {:?}", target, self.phase);
    }

    pub fn frame(&mut self, now: f64) -> SlideFrame {
        self.advance(now);
        match self.phase {
            Phase::Idle => SlideFrame {
                slide: self.shown,
                opacity: 1.0,
                offset: 0.0,
            },
            Phase::Exiting { started, .. } => {
                let t = progress(now - started, self.exit_secs);
                SlideFrame {
                    slide: self.shown,
                    opacity: (1.0 - t) as f32,
                    offset: self.shift * ease_out(t),
                }
            }
            Phase::Entering { started } => {
                let t = progress(now - started, self.enter_secs);
                SlideFrame {
                    slide: self.shown,
                    opacity: t as f32,
                    offset: self.shift * (1.0 - ease_out(t)),
                }
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    fn advance(&mut self, now: f64) {
        if let Phase::Exiting { started, next } = self.phase {
            if now - started >= self.exit_secs {
                self.shown = next;
                self.phase = Phase::Entering {
                    started: started + self.exit_secs,
                };
            }
        }
        if let Phase::Entering { started } = self.phase {
            if now - started >= self.enter_secs {
                self.phase = Phase::Idle;
            }
        }
    }
}

fn progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).clamp(0.0, 1.0)
    }
}

fn ease_out(t: f64) -> f32 {
    let inv = 1.0 - t;
    (1.0 - inv * inv * inv) as f32
}
