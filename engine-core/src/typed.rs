//! Typed Environment trait for single-agent episodic games
//!
//! Game crates implement this trait with their own action and observation
//! types. Anything that drives an environment (a training adapter, a
//! simulation binary, a benchmark) only needs this interface.

use crate::error::EnvError;
use crate::time_step::TimeStep;

/// Engine identification information
#[derive(Debug, Clone, PartialEq)]
pub struct EngineId {
    pub env_id: String,
    pub build_id: String,
}

/// Shape and inclusive bounds of an array-valued action or observation
///
/// An empty `shape` describes a scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedSpec<T> {
    pub shape: Vec<u32>,
    pub minimum: T,
    pub maximum: T,
}

impl<T: PartialOrd + Copy> BoundedSpec<T> {
    pub fn scalar(minimum: T, maximum: T) -> Self {
        Self { shape: Vec::new(), minimum, maximum }
    }

    pub fn array(shape: Vec<u32>, minimum: T, maximum: T) -> Self {
        Self { shape, minimum, maximum }
    }

    /// Number of elements in one value of this spec
    pub fn num_elements(&self) -> usize {
        self.shape.iter().map(|&d| d as usize).product()
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.minimum && value <= self.maximum
    }
}

impl BoundedSpec<i64> {
    /// Number of distinct values a discrete scalar can take
    pub fn num_values(&self) -> u64 {
        if self.maximum < self.minimum {
            return 0;
        }
        (self.maximum - self.minimum) as u64 + 1
    }
}

/// Environment capabilities and configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Capabilities {
    pub id: EngineId,
    pub action_spec: BoundedSpec<i64>,
    pub observation_spec: BoundedSpec<f32>,
    pub max_horizon: u32,
}

/// Main trait for environment implementations
///
/// An environment owns all of its episode state. `reset` always succeeds and
/// starts a new episode; `step` advances the current one and fails without
/// mutating anything when the action or the episode state is invalid.
///
/// # Type Parameters
///
/// * `Action` - Action type, small and `Copy`
/// * `Obs` - Observation type, often a contiguous array of f32
pub trait Environment: Send + 'static {
    /// Action type - should be small and Copy
    type Action: Copy + Send + 'static;

    /// Observation type - often contiguous arrays of f32
    type Obs: Clone + Send + 'static;

    /// Get engine identification information
    fn engine_id(&self) -> EngineId;

    /// Get environment capabilities and configuration
    fn capabilities(&self) -> Capabilities;

    /// Shape and range of valid actions
    fn action_spec(&self) -> BoundedSpec<i64>;

    /// Shape and range of observations
    fn observation_spec(&self) -> BoundedSpec<f32>;

    /// Start a new episode and return its first time step
    fn reset(&mut self) -> TimeStep<Self::Obs>;

    /// Apply one action to the current episode
    ///
    /// # Errors
    ///
    /// Returns `EnvError` if the action is out of range or the episode has
    /// already ended.
    fn step(&mut self, action: Self::Action) -> Result<TimeStep<Self::Obs>, EnvError>;

    /// The most recent time step emitted by `reset` or `step`
    fn current_time_step(&self) -> &TimeStep<Self::Obs>;
}
