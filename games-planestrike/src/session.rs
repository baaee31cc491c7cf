//! Episode lifecycle and authoritative game state

use engine_core::typed::{BoundedSpec, Capabilities, EngineId, Environment};
use engine_core::{EnvError, TimeStep};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use crate::board::{HiddenBoard, Observation, VisibleBoard};
use crate::config::SessionConfig;
use crate::constants::HUMAN_RENDER_MODE;
use crate::resolver::{EpisodeStatus, StrikeResolver};
use crate::shape::ShapeGenerator;

/// Plane Strike environment
///
/// Owns the hidden and visible boards, the episode counters and the random
/// source used to place the plane. Construction starts the first episode, so
/// `step` can be called right away.
///
/// # Example
///
/// ```rust
/// use games_planestrike::{GameSession, SessionConfig};
///
/// let mut session = GameSession::with_seed(SessionConfig::default(), 42).unwrap();
/// let first = session.reset();
/// assert!(first.is_first());
///
/// let ts = session.step(0).unwrap();
/// assert!(!ts.is_first());
/// assert_eq!(session.strike_count(), 1);
/// ```
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    max_steps: u32,
    generator: ShapeGenerator,
    resolver: StrikeResolver,
    rng: ChaCha20Rng,
    strike_count: u32,
    hit_count: u32,
    status: EpisodeStatus,
    hidden: HiddenBoard,
    visible: VisibleBoard,
    current: TimeStep<Observation>,
}

impl GameSession {
    /// Create a session whose boards are seeded from OS entropy
    pub fn new(config: SessionConfig) -> Result<Self, EnvError> {
        Self::with_rng(config, ChaCha20Rng::from_entropy())
    }

    /// Create a session with reproducible board generation
    pub fn with_seed(config: SessionConfig, seed: u64) -> Result<Self, EnvError> {
        Self::with_rng(config, ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn with_rng(config: SessionConfig, rng: ChaCha20Rng) -> Result<Self, EnvError> {
        config.validate()?;
        let board_size = config.board_size;
        let max_steps = config.max_steps();
        let visible = VisibleBoard::new(board_size);
        let current = TimeStep::restart(visible.to_observation());

        let mut session = Self {
            generator: ShapeGenerator::new(board_size)?,
            resolver: StrikeResolver::new(board_size, max_steps),
            config,
            max_steps,
            rng,
            strike_count: 0,
            hit_count: 0,
            status: EpisodeStatus::InProgress,
            hidden: HiddenBoard::empty(board_size),
            visible,
            current,
        };
        session.reset();
        Ok(session)
    }

    /// Re-seed the random source; takes effect at the next reset
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha20Rng::seed_from_u64(seed);
    }

    /// Start a new episode with a freshly placed plane
    pub fn reset(&mut self) -> TimeStep<Observation> {
        let placement = self.generator.place(&mut self.rng);
        debug!(
            heading = ?placement.heading(),
            core_row = placement.core().row,
            core_col = placement.core().col,
            "placed plane for new episode"
        );

        self.strike_count = 0;
        self.hit_count = 0;
        self.status = EpisodeStatus::InProgress;
        self.hidden = placement.to_board(self.config.board_size);
        self.visible = VisibleBoard::new(self.config.board_size);
        self.current = TimeStep::restart(self.visible.to_observation());
        self.current.clone()
    }

    /// Strike one cell
    ///
    /// # Errors
    ///
    /// Returns `EnvError::InvalidState` once the episode has ended and
    /// `EnvError::InvalidAction` for an out-of-range action. Neither
    /// changes the session.
    pub fn step(&mut self, action: u32) -> Result<TimeStep<Observation>, EnvError> {
        if self.is_episode_ended() {
            return Err(EnvError::InvalidState(format!(
                "episode ended ({:?}) after {} strikes; call reset first",
                self.status, self.strike_count
            )));
        }

        let strike = self.resolver.resolve(
            action,
            self.strike_count,
            self.hit_count,
            &self.hidden,
            &self.visible,
        )?;

        if let Some(cell) = strike.reveal {
            self.visible.set(strike.coord, cell);
        }
        self.strike_count = strike.strike_count;
        self.hit_count = strike.hit_count;
        self.status = strike.status;

        trace!(
            action,
            row = strike.coord.row,
            col = strike.coord.col,
            reveal = ?strike.reveal,
            reward = strike.reward,
            "resolved strike"
        );

        let observation = self.visible.to_observation();
        self.current = if strike.status.is_terminal() {
            debug!(
                status = ?strike.status,
                strikes = self.strike_count,
                hits = self.hit_count,
                "episode ended"
            );
            TimeStep::termination(observation, strike.reward)
        } else {
            TimeStep::transition(observation, strike.reward, self.config.discount)
        };
        Ok(self.current.clone())
    }

    /// Visible board for display
    ///
    /// # Errors
    ///
    /// Only the `"human"` mode is supported; anything else is an
    /// `EnvError::InvalidArgument`.
    pub fn render(&self, mode: &str) -> Result<&VisibleBoard, EnvError> {
        if mode != HUMAN_RENDER_MODE {
            return Err(EnvError::InvalidArgument(format!(
                "only rendering mode supported is '{}', got '{}' instead",
                HUMAN_RENDER_MODE, mode
            )));
        }
        Ok(&self.visible)
    }

    pub fn board_size(&self) -> usize {
        self.config.board_size
    }

    pub fn discount(&self) -> f32 {
        self.config.discount
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    pub fn strike_count(&self) -> u32 {
        self.strike_count
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    pub fn status(&self) -> EpisodeStatus {
        self.status
    }

    pub fn is_episode_ended(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn visible_board(&self) -> &VisibleBoard {
        &self.visible
    }

    /// The plane's location; for diagnostics and tests, not for agents
    pub fn hidden_board(&self) -> &HiddenBoard {
        &self.hidden
    }

    pub fn current_time_step(&self) -> &TimeStep<Observation> {
        &self.current
    }

    pub fn action_spec(&self) -> BoundedSpec<i64> {
        BoundedSpec::scalar(0, self.resolver.max_action() as i64)
    }

    pub fn observation_spec(&self) -> BoundedSpec<f32> {
        let n = self.config.board_size as u32;
        BoundedSpec::array(vec![n, n], -1.0, 1.0)
    }
}

impl Environment for GameSession {
    type Action = u32;
    type Obs = Observation;

    fn engine_id(&self) -> EngineId {
        EngineId {
            env_id: "planestrike".to_string(),
            build_id: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            id: self.engine_id(),
            action_spec: GameSession::action_spec(self),
            observation_spec: GameSession::observation_spec(self),
            max_horizon: self.max_steps,
        }
    }

    fn action_spec(&self) -> BoundedSpec<i64> {
        GameSession::action_spec(self)
    }

    fn observation_spec(&self) -> BoundedSpec<f32> {
        GameSession::observation_spec(self)
    }

    fn reset(&mut self) -> TimeStep<Self::Obs> {
        GameSession::reset(self)
    }

    fn step(&mut self, action: Self::Action) -> Result<TimeStep<Self::Obs>, EnvError> {
        GameSession::step(self, action)
    }

    fn current_time_step(&self) -> &TimeStep<Self::Obs> {
        GameSession::current_time_step(self)
    }
}
