//! Plane shape and random placement
//!
//! The plane is a cross (core plus its four orthogonal neighbours) and a
//! three-cell tail bar two steps behind the core. The heading decides which
//! side the tail sits on:
//!
//! ```text
//!   | |      |      | |    ---
//!   |-*-    -*-    -*-|     |
//!   | |      |      | |    -*-
//!           ---             |
//!  right     up     left   down
//! ```
//!
//! Each heading has its own range of legal core cells, chosen so that every
//! cell of the plane stays on the board. No bounds checks are needed after a
//! core is drawn from that range.

use std::ops::RangeInclusive;

use engine_core::EnvError;
use rand::Rng;

use crate::board::{Coord, HiddenBoard};
use crate::constants::MIN_BOARD_SIZE;

const CROSS_OFFSETS: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Direction the plane's nose points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Right,
    Up,
    Left,
    Down,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Right, Heading::Up, Heading::Left, Heading::Down];

    /// Legal core rows and columns on a board of the given size
    ///
    /// Callers must ensure `board_size >= MIN_BOARD_SIZE`.
    pub fn core_ranges(self, board_size: usize) -> (RangeInclusive<usize>, RangeInclusive<usize>) {
        let n = board_size;
        match self {
            Heading::Right => (1..=n - 2, 2..=n - 2),
            Heading::Up => (1..=n - 3, 1..=n - 3),
            Heading::Left => (1..=n - 2, 1..=n - 3),
            Heading::Down => (2..=n - 2, 1..=n - 2),
        }
    }

    /// Tail cells relative to the core
    pub fn tail_offsets(self) -> [(isize, isize); 3] {
        match self {
            Heading::Right => [(-1, -2), (0, -2), (1, -2)],
            Heading::Up => [(2, -1), (2, 0), (2, 1)],
            Heading::Left => [(-1, 2), (0, 2), (1, 2)],
            Heading::Down => [(-2, -1), (-2, 0), (-2, 1)],
        }
    }
}

/// A heading plus a core cell inside that heading's legal range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanePlacement {
    heading: Heading,
    core: Coord,
}

impl PlanePlacement {
    /// Validate a placement against the board size
    pub fn new(heading: Heading, core: Coord, board_size: usize) -> Result<Self, EnvError> {
        check_board_size(board_size)?;
        let (rows, cols) = heading.core_ranges(board_size);
        if !rows.contains(&core.row) || !cols.contains(&core.col) {
            return Err(EnvError::InvalidArgument(format!(
                "core ({}, {}) is outside the legal range for heading {:?} on a {}x{} board",
                core.row, core.col, heading, board_size, board_size
            )));
        }
        Ok(Self { heading, core })
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn core(&self) -> Coord {
        self.core
    }

    /// The eight plane cells: cross first, then tail
    pub fn cells(&self) -> [Coord; 8] {
        let shift = |(d_row, d_col): (isize, isize)| {
            Coord::new(
                self.core.row.wrapping_add_signed(d_row),
                self.core.col.wrapping_add_signed(d_col),
            )
        };

        let mut cells = [self.core; 8];
        for (slot, offset) in cells
            .iter_mut()
            .zip(CROSS_OFFSETS.into_iter().chain(self.heading.tail_offsets()))
        {
            *slot = shift(offset);
        }
        cells
    }

    pub fn to_board(&self, board_size: usize) -> HiddenBoard {
        let mut board = HiddenBoard::empty(board_size);
        for cell in self.cells() {
            board.occupy(cell);
        }
        board
    }
}

/// Every legal placement on a board of the given size
pub fn placements(board_size: usize) -> Result<Vec<PlanePlacement>, EnvError> {
    check_board_size(board_size)?;
    let mut all = Vec::new();
    for heading in Heading::ALL {
        let (rows, cols) = heading.core_ranges(board_size);
        for row in rows {
            for col in cols.clone() {
                all.push(PlanePlacement { heading, core: Coord::new(row, col) });
            }
        }
    }
    Ok(all)
}

/// Find the placement that produced a hidden board, if any
pub fn identify(board: &HiddenBoard) -> Option<PlanePlacement> {
    let board_size = board.board_size();
    placements(board_size)
        .ok()?
        .into_iter()
        .find(|p| p.to_board(board_size) == *board)
}

/// Draws random plane placements for a fixed board size
#[derive(Debug, Clone, Copy)]
pub struct ShapeGenerator {
    board_size: usize,
}

impl ShapeGenerator {
    pub fn new(board_size: usize) -> Result<Self, EnvError> {
        check_board_size(board_size)?;
        Ok(Self { board_size })
    }

    /// Pick a heading uniformly, then a core uniformly from its legal range
    pub fn place<R: Rng + ?Sized>(&self, rng: &mut R) -> PlanePlacement {
        let heading = Heading::ALL[rng.gen_range(0..Heading::ALL.len())];
        let (rows, cols) = heading.core_ranges(self.board_size);
        let core = Coord::new(rng.gen_range(rows), rng.gen_range(cols));
        PlanePlacement { heading, core }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> HiddenBoard {
        self.place(rng).to_board(self.board_size)
    }
}

fn check_board_size(board_size: usize) -> Result<(), EnvError> {
    if board_size < MIN_BOARD_SIZE {
        return Err(EnvError::Config(format!(
            "board_size must be at least {} to fit a plane, got {}",
            MIN_BOARD_SIZE, board_size
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashSet;

    #[test]
    fn test_heading_right_cells() {
        let placement = PlanePlacement::new(Heading::Right, Coord::new(3, 4), 8).unwrap();
        let cells: HashSet<Coord> = placement.cells().into_iter().collect();
        let expected: HashSet<Coord> = [
            (3, 4), (2, 4), (4, 4), (3, 3), (3, 5),
            (2, 2), (3, 2), (4, 2),
        ]
        .into_iter()
        .map(|(r, c)| Coord::new(r, c))
        .collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_heading_down_cells() {
        let placement = PlanePlacement::new(Heading::Down, Coord::new(2, 1), 4).unwrap();
        let board = placement.to_board(4);
        assert_eq!(board.occupied_count(), 8);
        for (r, c) in [(0, 0), (0, 1), (0, 2)] {
            assert!(board.is_occupied(Coord::new(r, c)));
        }
    }

    #[test]
    fn test_placement_outside_range_rejected() {
        // Tail would fall off the left edge
        let result = PlanePlacement::new(Heading::Right, Coord::new(3, 1), 8);
        assert!(matches!(result, Err(EnvError::InvalidArgument(_))));

        let result = PlanePlacement::new(Heading::Up, Coord::new(6, 3), 8);
        assert!(result.is_err());
    }

    #[test]
    fn test_generator_requires_minimum_board() {
        assert!(matches!(ShapeGenerator::new(3), Err(EnvError::Config(_))));
        assert!(ShapeGenerator::new(4).is_ok());
    }

    #[test]
    fn test_every_placement_fits_smallest_board() {
        let all = placements(4).unwrap();
        let expected: usize = Heading::ALL
            .iter()
            .map(|h| {
                let (rows, cols) = h.core_ranges(4);
                rows.count() * cols.count()
            })
            .sum();
        assert_eq!(all.len(), expected);
        for placement in all {
            let board = placement.to_board(4);
            assert_eq!(board.occupied_count(), 8, "{:?}", placement);
        }
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let generator = ShapeGenerator::new(8).unwrap();
        let mut a = ChaCha20Rng::seed_from_u64(7);
        let mut b = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(generator.generate(&mut a), generator.generate(&mut b));
        }
    }

    #[test]
    fn test_generated_boards_are_identified() {
        let generator = ShapeGenerator::new(8).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for _ in 0..50 {
            let placement = generator.place(&mut rng);
            let board = placement.to_board(8);
            assert_eq!(identify(&board), Some(placement));
        }
    }

    #[test]
    fn test_all_headings_drawn() {
        let generator = ShapeGenerator::new(8).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let seen: HashSet<Heading> = (0..200).map(|_| generator.place(&mut rng).heading()).collect();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_identify_rejects_non_plane() {
        let mut board = HiddenBoard::empty(8);
        board.occupy(Coord::new(0, 0));
        assert_eq!(identify(&board), None);
    }
}
