//! Session configuration

use engine_core::EnvError;
use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, DEFAULT_DISCOUNT, MIN_BOARD_SIZE};

/// Construction parameters for a `GameSession`
///
/// Every field has a default, so a partial `[session]` table in a config file
/// is enough. `max_steps` falls back to one strike per cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Side length of the square board
    pub board_size: usize,
    /// Discount reported on non-terminal steps
    pub discount: f32,
    /// Strike budget per episode; `None` means `board_size²`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<u32>,
}

impl SessionConfig {
    pub fn with_board_size(board_size: usize) -> Self {
        Self { board_size, ..Self::default() }
    }

    /// Effective strike budget
    pub fn max_steps(&self) -> u32 {
        self.max_steps
            .unwrap_or_else(|| (self.board_size * self.board_size) as u32)
    }

    pub fn validate(&self) -> Result<(), EnvError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(EnvError::Config(format!(
                "board_size must be at least {}, got {}",
                MIN_BOARD_SIZE, self.board_size
            )));
        }

        // Actions are encoded as i64 and observations sized from u32 shapes
        if self.board_size > u16::MAX as usize {
            return Err(EnvError::Config(format!(
                "board_size must be at most {}, got {}",
                u16::MAX, self.board_size
            )));
        }

        if !(0.0..=1.0).contains(&self.discount) {
            return Err(EnvError::Config(format!(
                "discount must be within [0, 1], got {}",
                self.discount
            )));
        }

        if self.max_steps == Some(0) {
            return Err(EnvError::Config("max_steps must be greater than 0".to_string()));
        }

        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            discount: DEFAULT_DISCOUNT,
            max_steps: None,
        }
    }
}
