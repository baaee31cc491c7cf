use anyhow::{anyhow, Result};
use engine_core::Environment;
use games_planestrike::{EpisodeStatus, GameSession};
use std::fmt;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::policy::{Policy, RandomPolicy};

/// Result of one finished episode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeStats {
    pub strikes: u32,
    pub hits: u32,
    pub total_reward: f32,
    pub final_reward: f32,
    pub status: EpisodeStatus,
}

/// Aggregate over all episodes of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub episodes: u32,
    pub finished: u32,
    pub total_reward: f64,
    pub total_strikes: u64,
}

impl RunSummary {
    pub fn record(&mut self, stats: &EpisodeStats) {
        self.episodes += 1;
        if stats.status == EpisodeStatus::Finished {
            self.finished += 1;
        }
        self.total_reward += stats.total_reward as f64;
        self.total_strikes += stats.strikes as u64;
    }

    pub fn finished_ratio(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.finished as f64 / self.episodes as f64
    }

    pub fn mean_reward(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.total_reward / self.episodes as f64
    }

    pub fn mean_strikes(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.total_strikes as f64 / self.episodes as f64
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "episodes={} finished={:.1}% mean_reward={:.2} mean_strikes={:.2}",
            self.episodes,
            self.finished_ratio() * 100.0,
            self.mean_reward(),
            self.mean_strikes()
        )
    }
}

pub struct Runner {
    run_id: Uuid,
    episodes: u32,
    render: bool,
    session: GameSession,
    policy: Box<dyn Policy>,
}

impl Runner {
    pub fn new(config: &Config) -> Result<Self> {
        let session_config = config.session_config()?;
        let (session, policy) = match config.seed {
            Some(seed) => (
                GameSession::with_seed(session_config, seed)?,
                RandomPolicy::with_seed(config.avoid_repeats, seed.wrapping_add(1)),
            ),
            None => (
                GameSession::new(session_config)?,
                RandomPolicy::new(config.avoid_repeats),
            ),
        };

        Ok(Self::with_parts(session, Box::new(policy), config.episodes, config.render))
    }

    pub fn with_parts(
        session: GameSession,
        policy: Box<dyn Policy>,
        episodes: u32,
        render: bool,
    ) -> Self {
        Self { run_id: Uuid::new_v4(), episodes, render, session, policy }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        let caps = self.session.capabilities();
        info!(
            run_id = %self.run_id,
            env_id = %caps.id.env_id,
            board_size = self.session.board_size(),
            max_steps = caps.max_horizon,
            "starting run of {} episodes",
            self.episodes
        );

        let mut summary = RunSummary::default();
        for episode in 0..self.episodes {
            let stats = self.run_episode(episode)?;
            summary.record(&stats);
            if (episode + 1) % 10 == 0 {
                info!(run_id = %self.run_id, "Completed {} episodes", episode + 1);
            }
        }

        info!(run_id = %self.run_id, "{}", summary);
        Ok(summary)
    }

    pub fn run_episode(&mut self, episode: u32) -> Result<EpisodeStats> {
        let mut time_step = self.session.reset();
        let mut total_reward = 0.0f32;

        // Every step counts against the budget, so this loop is bounded
        while !time_step.is_last() {
            let action = self
                .policy
                .select_action(&time_step.observation)
                .map_err(|e| anyhow!("Failed to select action: {}", e))?;
            time_step = self.session.step(action)?;
            total_reward += time_step.reward;
        }

        let stats = EpisodeStats {
            strikes: self.session.strike_count(),
            hits: self.session.hit_count(),
            total_reward,
            final_reward: time_step.reward,
            status: self.session.status(),
        };

        debug!(
            run_id = %self.run_id,
            episode,
            strikes = stats.strikes,
            hits = stats.hits,
            total_reward = stats.total_reward,
            status = ?stats.status,
            "episode complete"
        );

        if self.render {
            println!("episode {} ({:?}):", episode, stats.status);
            print!("{}", self.session.render("human")?);
        }

        Ok(stats)
    }
}
