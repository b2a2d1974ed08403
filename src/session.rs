//! Session lifecycle and the question bridge
//!
//! A [`Session`] owns the simulation and the question subsystem's sink. It is
//! one-shot: `init` wires the sink and starts the game exactly once, and
//! `teardown` ends it for good. The sink cannot be rebound while running.
//!
//! Inbound: `fire()` / `skip()` (or `submit(verdict)`) from the UI.
//! Outbound: [`QuestionSink::question_requested`], delivered before the call
//! that produced the request returns.

use crate::error::SessionError;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, GateOutcome, TickInput, tick};
use crate::ui::Verdict;

/// Receiver for the loop's outbound notifications
pub trait QuestionSink {
    /// Present a new question. Called at most once per answered question.
    fn question_requested(&mut self);

    /// Every event the loop produced, in order. Default ignores them.
    fn observe(&mut self, _event: &GameEvent) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Running,
    TornDown,
}

pub struct Session<S: QuestionSink> {
    settings: Settings,
    lifecycle: Lifecycle,
    game: Option<GameState>,
    sink: Option<S>,
}

impl<S: QuestionSink> Session<S> {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            lifecycle: Lifecycle::Created,
            game: None,
            sink: None,
        }
    }

    /// Wire the sink, build the game and request the first question
    pub fn init(&mut self, sink: S) -> Result<(), SessionError> {
        if self.lifecycle != Lifecycle::Created {
            log::warn!("Session init called twice, ignoring");
            return Err(SessionError::AlreadyInitialized);
        }
        if let Err(err) = self.settings.validate() {
            log::error!("Session not started: {err}");
            return Err(SessionError::InvalidSettings(err.to_string()));
        }

        let mut game = GameState::new(self.settings.seed, self.settings.tuning.clone());
        game.request_question();
        self.game = Some(game);
        self.sink = Some(sink);
        self.lifecycle = Lifecycle::Running;
        log::info!("Session started (seed {})", self.settings.seed);

        self.flush();
        Ok(())
    }

    /// Stop the game and hand back the sink. Further calls are rejected.
    pub fn teardown(&mut self) -> Option<S> {
        if self.lifecycle == Lifecycle::Running {
            log::info!("Session torn down");
        }
        self.lifecycle = Lifecycle::TornDown;
        self.game = None;
        self.sink.take()
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.sink.as_mut()
    }

    /// Run one frame
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Result<(), SessionError> {
        let game = self.running_game("tick")?;
        tick(game, input, dt);
        self.flush();
        Ok(())
    }

    /// Correct answer
    pub fn fire(&mut self) -> Result<GateOutcome, SessionError> {
        let outcome = self.running_game("fire")?.fire();
        self.flush();
        Ok(outcome)
    }

    /// Incorrect answer
    pub fn skip(&mut self) -> Result<GateOutcome, SessionError> {
        let outcome = self.running_game("skip")?.skip();
        self.flush();
        Ok(outcome)
    }

    pub fn submit(&mut self, verdict: Verdict) -> Result<GateOutcome, SessionError> {
        match verdict {
            Verdict::Correct => self.fire(),
            Verdict::Incorrect { .. } => self.skip(),
        }
    }

    fn running_game(&mut self, call: &str) -> Result<&mut GameState, SessionError> {
        match (self.lifecycle, self.game.as_mut()) {
            (Lifecycle::Running, Some(game)) => Ok(game),
            _ => {
                log::warn!("Session::{call} while not running, skipped");
                Err(SessionError::NotRunning)
            }
        }
    }

    /// Deliver pending events to the sink
    fn flush(&mut self) {
        let (Some(game), Some(sink)) = (self.game.as_mut(), self.sink.as_mut()) else {
            return;
        };
        for event in game.drain_events() {
            sink.observe(&event);
            if event == GameEvent::QuestionRequested {
                sink.question_requested();
            }
        }
    }
}
