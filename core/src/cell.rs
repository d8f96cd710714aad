use serde::{Deserialize, Serialize};

/// Neighbor count stored on cells that hold a mine themselves.
pub const MINE_SENTINEL: i8 = -1;

/// One hex tile, as stored by the board and handed out to observers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub has_mine: bool,
    pub flagged: bool,
    pub hidden: bool,
    /// [`MINE_SENTINEL`] on a mine, otherwise the number of mine-bearing neighbors.
    pub mine_neighbor_count: i8,
}

impl Cell {
    pub(crate) const fn new(has_mine: bool, adjacent_mines: u8) -> Self {
        Self {
            has_mine,
            flagged: false,
            hidden: true,
            mine_neighbor_count: if has_mine {
                MINE_SENTINEL
            } else {
                adjacent_mines as i8
            },
        }
    }

    /// Adjacent mine count, `None` for a mine cell.
    pub const fn adjacent_mines(self) -> Option<u8> {
        if self.has_mine {
            None
        } else {
            Some(self.mine_neighbor_count as u8)
        }
    }

    pub const fn is_revealed(self) -> bool {
        !self.hidden
    }

    /// Whether a reveal (direct or by flood fill) may uncover this cell.
    pub const fn can_reveal(self) -> bool {
        self.hidden && !self.flagged
    }

    /// Whether the cell is in its winning state: a flagged mine or an uncovered safe cell.
    pub const fn is_settled(self) -> bool {
        if self.has_mine {
            self.flagged
        } else {
            !self.hidden
        }
    }

    /// Single character used by the text dump of the board.
    pub fn symbol(self) -> char {
        match (self.hidden, self.flagged, self.has_mine) {
            (true, true, _) => 'F',
            (true, false, _) => 'H',
            (false, _, true) => '*',
            (false, _, false) if self.mine_neighbor_count == 0 => 'U',
            (false, _, false) => {
                char::from_digit(self.mine_neighbor_count as u32, 10).unwrap_or('?')
            }
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(false, 0)
    }
}
