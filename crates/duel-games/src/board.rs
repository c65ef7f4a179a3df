//! Three-in-a-row board game on a 3x3 grid.
//!
//! Cells are indexed 0-8 row by row. A move claims an empty cell for a mark;
//! after every move the board is re-evaluated against the eight winning
//! triples in a fixed order. Moves onto occupied cells, out-of-range cells,
//! or a finished board are ignored rather than rejected.

use serde::{Deserialize, Serialize};
use tracing::debug;

use duel_core::{PlayerSlot, RoundWinner};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The eight winning triples, checked in this order: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's symbol on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player 1's mark. Moves first.
    X,
    /// Player 2's mark.
    O,
}

impl Mark {
    /// The opposing mark.
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// The seat that owns this mark.
    pub fn slot(self) -> PlayerSlot {
        match self {
            Self::X => PlayerSlot::Player1,
            Self::O => PlayerSlot::Player2,
        }
    }

    /// The mark played by `slot`.
    pub fn for_slot(slot: PlayerSlot) -> Self {
        match slot {
            PlayerSlot::Player1 => Self::X,
            PlayerSlot::Player2 => Self::O,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::O => write!(f, "O"),
        }
    }
}

/// Where the board game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardStatus {
    /// Moves are still accepted.
    InProgress,
    /// A mark owns a full winning triple.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The triple that won, as cell indices.
        line: [usize; 3],
    },
    /// Every cell is filled and no triple is owned.
    Draw,
}

impl BoardStatus {
    /// Whether the game is over.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// The round result for a finished board.
    pub fn winner(self) -> Option<RoundWinner> {
        match self {
            Self::InProgress => None,
            Self::Won { mark, .. } => Some(mark.slot().into()),
            Self::Draw => Some(RoundWinner::Draw),
        }
    }
}

/// The grid, whose turn it is, and the derived status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    cells: [Option<Mark>; CELL_COUNT],
    next_mark: Mark,
    status: BoardStatus,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// An empty board with X to move.
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            next_mark: Mark::X,
            status: BoardStatus::InProgress,
        }
    }

    /// All nine cells, row by row.
    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// The mark in `index`, or `None` if empty or out of range.
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// The mark expected to move next.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// The current status.
    pub fn status(&self) -> BoardStatus {
        self.status
    }

    /// The winning triple, if the game has been won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.status {
            BoardStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Indices of the empty cells, in ascending order.
    pub fn available_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Place `mark` on `index` and return the resulting board.
    ///
    /// The board is returned unchanged if the game is over, the cell is
    /// occupied, or the index is out of range. After a legal move the turn
    /// passes to the other mark.
    pub fn apply_move(&self, index: usize, mark: Mark) -> Self {
        if self.status.is_terminal() {
            debug!(index, "move ignored: board is finished");
            return *self;
        }
        match self.cells.get(index) {
            Some(None) => {}
            Some(Some(_)) => {
                debug!(index, "move ignored: cell occupied");
                return *self;
            }
            None => {
                debug!(index, "move ignored: cell out of range");
                return *self;
            }
        }

        let mut next = *self;
        next.cells[index] = Some(mark);
        next.next_mark = mark.other();
        next.status = evaluate(&next.cells);
        next
    }

    /// Place the mark whose turn it is on `index`.
    pub fn play(&self, index: usize) -> Self {
        self.apply_move(index, self.next_mark)
    }
}

/// Evaluate a grid: the first owned triple wins, a full grid draws.
pub fn evaluate(cells: &[Option<Mark>; CELL_COUNT]) -> BoardStatus {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Some(mark) = cells[a] {
            if cells[b] == Some(mark) && cells[c] == Some(mark) {
                return BoardStatus::Won { mark, line };
            }
        }
    }
    if cells.iter().all(Option::is_some) {
        BoardStatus::Draw
    } else {
        BoardStatus::InProgress
    }
}

/// Count the winning triples fully owned by a single mark.
pub fn owned_lines(cells: &[Option<Mark>; CELL_COUNT]) -> usize {
    WINNING_LINES
        .iter()
        .filter(|&&[a, b, c]| cells[a].is_some() && cells[a] == cells[b] && cells[a] == cells[c])
        .count()
}
