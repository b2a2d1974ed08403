//! Answer gate
//!
//! Couples the answer to the outstanding question with permission to fire and
//! with the next question request. A correct answer fires and defers the
//! request until that shot is resolved; an incorrect answer requests at once.
//! At most one request is ever outstanding.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pool::{ProjectileHandle, ProjectilePool};
use super::state::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerGateState {
    /// A question is on screen and may be answered once
    AwaitingAnswer,
    /// The current question was answered (or none was asked yet)
    Resolved,
}

/// Result of an answer reaching the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// A projectile was launched; the next request waits for its outcome
    Fired(ProjectileHandle),
    /// Correct, but every pool slot was live; next question requested instead
    PoolExhausted,
    /// Incorrect; next question requested
    Skipped,
    /// No question was awaiting an answer
    Ignored,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerGate {
    state: AnswerGateState,
    /// Shot whose resolution triggers the next request
    in_flight: Option<ProjectileHandle>,
}

impl Default for AnswerGate {
    fn default() -> Self {
        Self {
            state: AnswerGateState::Resolved,
            in_flight: None,
        }
    }
}

impl AnswerGate {
    pub fn state(&self) -> AnswerGateState {
        self.state
    }

    /// Projectile the gate is waiting on, if any
    pub fn in_flight(&self) -> Option<ProjectileHandle> {
        self.in_flight
    }

    /// Emit a question request and wait for its answer
    pub fn request_question(&mut self, events: &mut Vec<GameEvent>) {
        if self.state == AnswerGateState::AwaitingAnswer {
            log::debug!("Question already outstanding, request dropped");
            return;
        }
        log::debug!("Requesting new question");
        self.state = AnswerGateState::AwaitingAnswer;
        self.in_flight = None;
        events.push(GameEvent::QuestionRequested);
    }

    pub fn on_correct_answer(
        &mut self,
        pool: &mut ProjectilePool,
        muzzle: Vec2,
        events: &mut Vec<GameEvent>,
    ) -> GateOutcome {
        if self.state != AnswerGateState::AwaitingAnswer {
            log::debug!("Correct answer ignored, no question awaiting");
            return GateOutcome::Ignored;
        }
        self.state = AnswerGateState::Resolved;

        match pool.acquire(muzzle) {
            Some(handle) => {
                log::debug!("Firing projectile {}", handle.slot());
                self.in_flight = Some(handle);
                events.push(GameEvent::ShotFired { slot: handle.slot() });
                GateOutcome::Fired(handle)
            }
            None => {
                log::warn!("Projectile pool exhausted, skipping to next question");
                self.request_question(events);
                GateOutcome::PoolExhausted
            }
        }
    }

    pub fn on_incorrect_answer(&mut self, events: &mut Vec<GameEvent>) -> GateOutcome {
        if self.state != AnswerGateState::AwaitingAnswer {
            log::debug!("Incorrect answer ignored, no question awaiting");
            return GateOutcome::Ignored;
        }
        self.state = AnswerGateState::Resolved;
        self.request_question(events);
        GateOutcome::Skipped
    }

    /// A projectile was released by a hit or by leaving the world
    pub fn shot_resolved(&mut self, handle: ProjectileHandle, events: &mut Vec<GameEvent>) {
        if self.in_flight == Some(handle) {
            self.in_flight = None;
            self.request_question(events);
        }
    }
}
