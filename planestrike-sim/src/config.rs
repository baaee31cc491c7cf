use anyhow::{anyhow, Context, Result};
use clap::Parser;
use games_planestrike::SessionConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(name = "planestrike-sim")]
#[command(about = "Plane Strike episode simulator")]
#[command(long_about = "Plays Plane Strike episodes with a random strike picker.

Useful for smoke-testing the engine and for getting a baseline of the
rewards a policy with no knowledge of the board achieves.")]
pub struct Config {
    /// TOML file with a [session] table
    #[arg(long, env = "PLANESTRIKE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Board side length (overrides the config file)
    #[arg(long, env = "PLANESTRIKE_BOARD_SIZE")]
    pub board_size: Option<usize>,

    /// Discount for non-terminal steps (overrides the config file)
    #[arg(long, env = "PLANESTRIKE_DISCOUNT")]
    pub discount: Option<f32>,

    /// Strike budget per episode (overrides the config file)
    #[arg(long, env = "PLANESTRIKE_MAX_STEPS")]
    pub max_steps: Option<u32>,

    /// Number of episodes to play
    #[arg(long, env = "PLANESTRIKE_EPISODES", default_value = "100")]
    pub episodes: u32,

    /// Seed for boards and strikes; random when omitted
    #[arg(long, env = "PLANESTRIKE_SEED")]
    pub seed: Option<u64>,

    /// Only strike cells that have not been tried yet
    #[arg(long, env = "PLANESTRIKE_AVOID_REPEATS")]
    pub avoid_repeats: bool,

    /// Print the final board of every episode
    #[arg(long)]
    pub render: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PLANESTRIKE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    session: SessionConfig,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.episodes == 0 {
            return Err(anyhow!("episodes must be greater than 0"));
        }

        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<Level> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| anyhow!("unknown log level: {}", self.log_level))
    }

    /// Session settings from the config file with command-line overrides applied
    pub fn session_config(&self) -> Result<SessionConfig> {
        let mut session = match &self.config {
            Some(path) => load_session_config(path)?,
            None => SessionConfig::default(),
        };

        if let Some(board_size) = self.board_size {
            session.board_size = board_size;
        }
        if let Some(discount) = self.discount {
            session.discount = discount;
        }
        if let Some(max_steps) = self.max_steps {
            session.max_steps = Some(max_steps);
        }

        session.validate()?;
        Ok(session)
    }
}

fn load_session_config(path: &Path) -> Result<SessionConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_session_config(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

fn parse_session_config(text: &str) -> Result<SessionConfig> {
    let file: FileConfig = toml::from_str(text)?;
    Ok(file.session)
}
