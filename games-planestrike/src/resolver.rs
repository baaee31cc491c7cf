//! Strike resolution
//!
//! `StrikeResolver` decides what one strike does without touching any state.
//! It returns a `Strike` describing the cell to reveal, the updated counters,
//! the reward and the episode status; the session applies it.

use engine_core::EnvError;

use crate::board::{CellState, Coord, HiddenBoard, VisibleBoard};
use crate::constants::{
    FINISHED_GAME_REWARD, HIT_REWARD, MISS_REWARD, PLANE_SIZE, REPEAT_STRIKE_REWARD,
    UNFINISHED_GAME_REWARD,
};

/// Where an episode stands after a strike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EpisodeStatus {
    #[default]
    InProgress,
    /// Every plane cell was hit within the step budget
    Finished,
    /// The step budget ran out first
    Exhausted,
}

impl EpisodeStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, EpisodeStatus::InProgress)
    }
}

/// Outcome of one strike, not yet applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    pub coord: Coord,
    /// New value for the struck cell; `None` for a repeat strike
    pub reveal: Option<CellState>,
    pub strike_count: u32,
    pub hit_count: u32,
    /// Reward for the cell alone
    pub base_reward: f32,
    /// Base reward plus any end-of-episode bonus or penalty
    pub reward: f32,
    pub status: EpisodeStatus,
}

impl Strike {
    pub fn is_repeat(&self) -> bool {
        self.reveal.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StrikeResolver {
    board_size: usize,
    max_steps: u32,
}

impl StrikeResolver {
    pub fn new(board_size: usize, max_steps: u32) -> Self {
        Self { board_size, max_steps }
    }

    /// Largest valid action
    pub fn max_action(&self) -> u32 {
        (self.board_size * self.board_size - 1) as u32
    }

    /// Turn a flattened action into a board coordinate
    pub fn decode_action(&self, action: u32) -> Result<Coord, EnvError> {
        let max = self.max_action();
        if action > max {
            return Err(EnvError::InvalidAction { action: action as i64, max: max as i64 });
        }
        Ok(Coord::from_index(action as usize, self.board_size))
    }

    /// Work out what striking `action` does to the current episode
    pub fn resolve(
        &self,
        action: u32,
        strike_count: u32,
        hit_count: u32,
        hidden: &HiddenBoard,
        visible: &VisibleBoard,
    ) -> Result<Strike, EnvError> {
        let coord = self.decode_action(action)?;
        let strike_count = strike_count.saturating_add(1);

        let (reveal, hit_count, base_reward) = match visible.get(coord) {
            CellState::Untried if hidden.is_occupied(coord) => {
                (Some(CellState::Hit), hit_count + 1, HIT_REWARD)
            }
            CellState::Untried => (Some(CellState::Miss), hit_count, MISS_REWARD),
            CellState::Hit | CellState::Miss => (None, hit_count, REPEAT_STRIKE_REWARD),
        };

        let (status, reward) = if hit_count >= PLANE_SIZE {
            (EpisodeStatus::Finished, base_reward + FINISHED_GAME_REWARD)
        } else if strike_count >= self.max_steps {
            (EpisodeStatus::Exhausted, base_reward + UNFINISHED_GAME_REWARD)
        } else {
            (EpisodeStatus::InProgress, base_reward)
        };

        Ok(Strike { coord, reveal, strike_count, hit_count, base_reward, reward, status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Heading, PlanePlacement};

    fn fixture() -> (StrikeResolver, HiddenBoard, VisibleBoard) {
        let placement = PlanePlacement::new(Heading::Up, Coord::new(1, 1), 8).unwrap();
        (StrikeResolver::new(8, 64), placement.to_board(8), VisibleBoard::new(8))
    }

    #[test]
    fn test_decode_action() {
        let resolver = StrikeResolver::new(8, 64);
        assert_eq!(resolver.decode_action(0).unwrap(), Coord::new(0, 0));
        assert_eq!(resolver.decode_action(63).unwrap(), Coord::new(7, 7));
        assert_eq!(resolver.decode_action(17).unwrap(), Coord::new(2, 1));
        assert_eq!(
            resolver.decode_action(64),
            Err(EnvError::InvalidAction { action: 64, max: 63 })
        );
    }

    #[test]
    fn test_first_strike_hit() {
        let (resolver, hidden, visible) = fixture();
        // Core of the plane
        let strike = resolver.resolve(9, 0, 0, &hidden, &visible).unwrap();
        assert_eq!(strike.reveal, Some(CellState::Hit));
        assert_eq!(strike.strike_count, 1);
        assert_eq!(strike.hit_count, 1);
        assert_eq!(strike.reward, HIT_REWARD);
        assert_eq!(strike.status, EpisodeStatus::InProgress);
    }

    #[test]
    fn test_first_strike_miss() {
        let (resolver, hidden, visible) = fixture();
        let strike = resolver.resolve(63, 4, 2, &hidden, &visible).unwrap();
        assert_eq!(strike.reveal, Some(CellState::Miss));
        assert_eq!(strike.strike_count, 5);
        assert_eq!(strike.hit_count, 2);
        assert_eq!(strike.reward, MISS_REWARD);
        assert!(!strike.status.is_terminal());
    }

    #[test]
    fn test_repeat_strike() {
        let (resolver, hidden, mut visible) = fixture();
        visible.set(Coord::new(1, 1), CellState::Hit);

        let strike = resolver.resolve(9, 1, 1, &hidden, &visible).unwrap();
        assert!(strike.is_repeat());
        assert_eq!(strike.hit_count, 1);
        assert_eq!(strike.base_reward, REPEAT_STRIKE_REWARD);
        assert_eq!(strike.reward, -1.0);
    }

    #[test]
    fn test_final_hit_finishes() {
        let (resolver, hidden, visible) = fixture();
        let strike = resolver.resolve(9, 20, 7, &hidden, &visible).unwrap();
        assert_eq!(strike.status, EpisodeStatus::Finished);
        assert_eq!(strike.reward, 11.0);
    }

    #[test]
    fn test_final_hit_on_last_step_finishes() {
        let (resolver, hidden, visible) = fixture();
        let strike = resolver.resolve(9, 63, 7, &hidden, &visible).unwrap();
        assert_eq!(strike.status, EpisodeStatus::Finished);
        assert_eq!(strike.reward, 11.0);
    }

    #[test]
    fn test_budget_exhausted() {
        let (resolver, hidden, mut visible) = fixture();

        let strike = resolver.resolve(63, 63, 3, &hidden, &visible).unwrap();
        assert_eq!(strike.status, EpisodeStatus::Exhausted);
        assert_eq!(strike.reward, -10.0);

        let strike = resolver.resolve(9, 63, 3, &hidden, &visible).unwrap();
        assert_eq!(strike.status, EpisodeStatus::Exhausted);
        assert_eq!(strike.reward, -9.0);

        // A repeat strike still spends the budget
        visible.set(Coord::new(7, 7), CellState::Miss);
        let strike = resolver.resolve(63, 63, 3, &hidden, &visible).unwrap();
        assert_eq!(strike.status, EpisodeStatus::Exhausted);
        assert_eq!(strike.reward, -11.0);
    }

    #[test]
    fn test_invalid_action_rejected() {
        let (resolver, hidden, visible) = fixture();
        let result = resolver.resolve(64, 0, 0, &hidden, &visible);
        assert!(matches!(result, Err(EnvError::InvalidAction { .. })));
    }
}
