//! Time steps emitted by environments
//!
//! A `TimeStep` bundles the observation with the reward and discount earned by
//! the action that produced it. `StepType` marks where in the episode it sits.

/// Position of a time step within its episode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepType {
    /// Emitted by reset; carries no reward
    First,
    /// Any non-terminal step after the first
    Mid,
    /// The terminal step of an episode
    Last,
}

/// Result of a reset or step
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStep<O> {
    pub step_type: StepType,
    pub reward: f32,
    pub discount: f32,
    pub observation: O,
}

impl<O> TimeStep<O> {
    /// First step of an episode: zero reward, full discount
    pub fn restart(observation: O) -> Self {
        Self {
            step_type: StepType::First,
            reward: 0.0,
            discount: 1.0,
            observation,
        }
    }

    /// Non-terminal step
    pub fn transition(observation: O, reward: f32, discount: f32) -> Self {
        Self {
            step_type: StepType::Mid,
            reward,
            discount,
            observation,
        }
    }

    /// Terminal step; discount is always zero
    pub fn termination(observation: O, reward: f32) -> Self {
        Self {
            step_type: StepType::Last,
            reward,
            discount: 0.0,
            observation,
        }
    }

    pub fn is_first(&self) -> bool {
        self.step_type == StepType::First
    }

    pub fn is_mid(&self) -> bool {
        self.step_type == StepType::Mid
    }

    pub fn is_last(&self) -> bool {
        self.step_type == StepType::Last
    }

    /// Transform the observation while keeping reward and discount
    pub fn map_observation<P>(self, f: impl FnOnce(O) -> P) -> TimeStep<P> {
        TimeStep {
            step_type: self.step_type,
            reward: self.reward,
            discount: self.discount,
            observation: f(self.observation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart() {
        let ts = TimeStep::restart(vec![0.0f32; 4]);
        assert!(ts.is_first());
        assert!(!ts.is_last());
        assert_eq!(ts.reward, 0.0);
        assert_eq!(ts.discount, 1.0);
    }

    #[test]
    fn test_transition_keeps_discount() {
        let ts = TimeStep::transition((), -1.0, 0.9);
        assert!(ts.is_mid());
        assert_eq!(ts.reward, -1.0);
        assert_eq!(ts.discount, 0.9);
    }

    #[test]
    fn test_termination_zeroes_discount() {
        let ts = TimeStep::termination((), 11.0);
        assert!(ts.is_last());
        assert_eq!(ts.reward, 11.0);
        assert_eq!(ts.discount, 0.0);
    }

    #[test]
    fn test_map_observation() {
        let ts = TimeStep::transition(3u8, 1.0, 0.5).map_observation(|v| v as f32 * 2.0);
        assert_eq!(ts.observation, 6.0);
        assert_eq!(ts.step_type, StepType::Mid);
        assert_eq!(ts.reward, 1.0);
        assert_eq!(ts.discount, 0.5);
    }
}
