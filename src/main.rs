//! Math Invaders headless driver
//!
//! Runs the simulation at a fixed 60 Hz with an automatic player that steers
//! under the lowest enemy and answers questions after a short "think" delay.
//!
//! Usage: `math-invaders [settings.json]` (log level via `RUST_LOG`).

use std::path::PathBuf;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use math_invaders::consts::SIM_DT;
use math_invaders::question::{AdditionQuestions, QuestionSource};
use math_invaders::settings::DemoSettings;
use math_invaders::sim::{GameEvent, GameState, TickInput};
use math_invaders::ui::{AnswerPanel, Verdict};
use math_invaders::{QuestionSink, Session, Settings};

/// Question subsystem plus a simulated player at the answer panel
struct AutoPlayer {
    questions: AdditionQuestions,
    panel: AnswerPanel,
    rng: Pcg32,
    config: DemoSettings,
    think_ticks: u32,
    stats: Stats,
}

#[derive(Debug, Default)]
struct Stats {
    questions: u32,
    shots: u32,
    hits: u32,
    misses: u32,
    waves: u32,
}

impl AutoPlayer {
    fn new(seed: u64, config: DemoSettings) -> Self {
        Self {
            questions: AdditionQuestions::new(seed),
            panel: AnswerPanel::new(),
            rng: Pcg32::seed_from_u64(seed ^ 0xa11ce),
            config,
            think_ticks: 0,
            stats: Stats::default(),
        }
    }

    /// Pick an option once the think delay has elapsed
    fn poll_answer(&mut self) -> Option<Verdict> {
        let question = self.panel.question()?;
        if self.panel.is_answered() {
            return None;
        }
        if self.think_ticks > 0 {
            self.think_ticks -= 1;
            return None;
        }

        let choice = if self.rng.random_bool(self.config.accuracy) {
            question.answer()
        } else {
            let wrong: Vec<u32> = question
                .options()
                .iter()
                .copied()
                .filter(|&o| !question.is_correct(o))
                .collect();
            wrong[self.rng.random_range(0..wrong.len())]
        };
        let verdict = self.panel.select(choice);
        if let Some(feedback) = self.panel.feedback() {
            log::info!("Answered {choice}: {feedback}");
        }
        verdict
    }
}

impl QuestionSink for AutoPlayer {
    fn question_requested(&mut self) {
        let question = self.questions.generate();
        log::info!("Question: {} {:?}", question.text(), question.options());
        self.panel.present(question);
        self.think_ticks = self.config.answer_delay_ticks;
        self.stats.questions += 1;
    }

    fn observe(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ShotFired { .. } => self.stats.shots += 1,
            GameEvent::EnemyDestroyed { slot } => {
                self.stats.hits += 1;
                log::debug!("Enemy {slot} destroyed");
            }
            GameEvent::ProjectileExpired { .. } => self.stats.misses += 1,
            GameEvent::WaveCleared { wave } => {
                self.stats.waves += 1;
                log::info!("Wave {wave} cleared!");
            }
            GameEvent::QuestionRequested | GameEvent::EnemyWrapped { .. } => {}
        }
    }
}

/// Steer toward the lowest active enemy
fn steer(state: &GameState) -> TickInput {
    let target = state
        .enemies
        .iter()
        .filter(|e| e.active)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    let Some(target) = target else {
        return TickInput::default();
    };
    let dx = target.pos.x - state.player.pos.x;
    TickInput {
        left: dx < -2.0,
        right: dx > 2.0,
    }
}

fn main() {
    env_logger::init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref());
    log::info!("Math Invaders (headless) starting...");

    let ticks = settings.demo.ticks;
    let player = AutoPlayer::new(settings.seed, settings.demo.clone());
    let mut session = Session::new(settings);
    if let Err(err) = session.init(player) {
        log::error!("Could not start session: {err}");
        return;
    }

    for _ in 0..ticks {
        let input = session.state().map(steer).unwrap_or_default();
        if let Err(err) = session.tick(&input, SIM_DT) {
            log::warn!("Tick skipped: {err}");
            break;
        }

        let verdict = session.sink_mut().and_then(AutoPlayer::poll_answer);
        if let Some(verdict) = verdict {
            if let Err(err) = session.submit(verdict) {
                log::warn!("Answer dropped: {err}");
            }
        }
    }

    let waves_on_field = session
        .state()
        .map(|s| s.wave().waves_cleared())
        .unwrap_or_default();
    if let Some(player) = session.teardown() {
        let Stats {
            questions,
            shots,
            hits,
            misses,
            waves,
        } = player.stats;
        println!(
            "{ticks} ticks: {questions} questions, {shots} shots, {hits} hits, {misses} misses, {waves} waves cleared"
        );
        debug_assert_eq!(waves, waves_on_field);
    }
}
