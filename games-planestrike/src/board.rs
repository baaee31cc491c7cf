//! Board representations
//!
//! The hidden board records where the plane is. The visible board records
//! what the player has learned so far. Both are square and stored row-major.

use std::fmt;

/// Grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Decode a row-major flattened action
    pub fn from_index(index: usize, board_size: usize) -> Self {
        Self { row: index / board_size, col: index % board_size }
    }

    pub fn to_index(self, board_size: usize) -> usize {
        self.row * board_size + self.col
    }
}

/// Occupancy grid holding the plane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenBoard {
    board_size: usize,
    cells: Vec<bool>,
}

impl HiddenBoard {
    /// Create an all-unoccupied board
    pub fn empty(board_size: usize) -> Self {
        Self { board_size, cells: vec![false; board_size * board_size] }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.cells[coord.to_index(self.board_size)]
    }

    pub(crate) fn occupy(&mut self, coord: Coord) {
        let index = coord.to_index(self.board_size);
        self.cells[index] = true;
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Occupied cells in row-major order
    pub fn occupied_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &occupied)| occupied)
            .map(|(i, _)| Coord::from_index(i, self.board_size))
            .collect()
    }
}

/// What the player knows about a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Untried,
    Hit,
    Miss,
}

impl CellState {
    /// Observation encoding
    pub fn value(self) -> f32 {
        match self {
            CellState::Untried => 0.0,
            CellState::Hit => 1.0,
            CellState::Miss => -1.0,
        }
    }

    fn symbol(self) -> char {
        match self {
            CellState::Untried => '.',
            CellState::Hit => 'X',
            CellState::Miss => 'o',
        }
    }
}

/// Grid of strike results seen by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleBoard {
    board_size: usize,
    cells: Vec<CellState>,
}

impl VisibleBoard {
    /// Create an all-untried board
    pub fn new(board_size: usize) -> Self {
        Self { board_size, cells: vec![CellState::Untried; board_size * board_size] }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn get(&self, coord: Coord) -> CellState {
        self.cells[coord.to_index(self.board_size)]
    }

    pub(crate) fn set(&mut self, coord: Coord, state: CellState) {
        let index = coord.to_index(self.board_size);
        self.cells[index] = state;
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Flattened indices of cells that have not been struck yet
    pub fn untried_actions(&self) -> Vec<u32> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == CellState::Untried)
            .map(|(i, _)| i as u32)
            .collect()
    }

    pub fn to_observation(&self) -> Observation {
        Observation {
            board_size: self.board_size,
            cells: self.cells.iter().map(|c| c.value()).collect(),
        }
    }
}

impl fmt::Display for VisibleBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.board_size) {
            let line: String = row
                .iter()
                .map(|c| c.symbol())
                .flat_map(|s| [s, ' '])
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Observation handed to the agent
///
/// `board_size × board_size` values in `{-1.0, 0.0, 1.0}` for miss, untried
/// and hit, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    board_size: usize,
    cells: Vec<f32>,
}

impl Observation {
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.cells[row * self.board_size + col]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.cells.chunks(self.board_size)
    }
}
