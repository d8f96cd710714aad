use alloc::collections::VecDeque;
use core::fmt::{self, Write};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Board built, no move has changed it yet.
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The rules engine for one game: owns every cell and reports each change to `O`.
///
/// A board is never reset; start a new game by building a new board.
#[derive(Debug)]
pub struct Board<O = ()> {
    cells: Array2<Cell>,
    size: Coord2,
    mine_count: CellCount,
    flags_used: CellCount,
    /// Cells that are neither a flagged mine nor an uncovered safe cell. Zero means won.
    unsettled: CellCount,
    state: EngineState,
    observer: O,
}

impl<O: BoardObserver> Board<O> {
    /// Plants mines at random from `seed` and syncs the full board to `observer`.
    pub fn new(config: GameConfig, seed: u64, observer: O) -> Result<Self> {
        Self::generate(config, RandomMineLayout::new(seed), observer)
    }

    pub fn generate(
        config: GameConfig,
        generator: impl MineLayoutGenerator,
        observer: O,
    ) -> Result<Self> {
        config.validate()?;
        let mine_layout = generator.generate(config)?;
        Ok(Self::from_layout(&mine_layout, observer))
    }

    /// Builds the board over a finished layout, so every count sees every mine.
    pub fn from_layout(mine_layout: &MineLayout, mut observer: O) -> Self {
        let size = mine_layout.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            Cell::new(
                mine_layout.contains_mine(coords),
                mine_layout.adjacent_mine_count(coords),
            )
        });

        for ((row, col), &cell) in cells.indexed_iter() {
            observer.cell_changed((row as Coord, col as Coord), cell);
        }
        observer.board_refresh_requested();

        log::debug!(
            "New {}x{} board with {} mines",
            size.0,
            size.1,
            mine_layout.mine_count()
        );

        Self {
            cells,
            size,
            mine_count: mine_layout.mine_count(),
            flags_used: 0,
            unsettled: mine_layout.total_cells(),
            state: EngineState::Ready,
            observer,
        }
    }

    /// Uncovers a cell. Hitting a mine uncovers all mines and loses; a cell with no adjacent
    /// mines also uncovers its neighbors, spreading through the whole zero region.
    ///
    /// Out-of-bounds, flagged or already revealed cells, and any move after the game ended, are
    /// ignored without notifying the observer.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.state.is_finished() {
            return RevealOutcome::NoChange;
        }
        let Some(cell) = self.cell(coords) else {
            return RevealOutcome::NoChange;
        };
        if !cell.can_reveal() {
            return RevealOutcome::NoChange;
        }

        self.mark_started();

        let outcome = if cell.has_mine {
            log::debug!("Mine hit at {:?}", coords);
            self.reveal_all_mines();
            self.end_game(false);
            RevealOutcome::HitMine
        } else {
            self.flood_fill(coords);
            if self.check_win() {
                RevealOutcome::Won
            } else {
                RevealOutcome::Revealed
            }
        };

        log::trace!("Board after reveal at {:?}:\n{}", coords, self);
        outcome
    }

    /// Places or removes a flag on a hidden cell. Ignored when out of bounds, on a revealed
    /// cell, or after the game ended.
    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        if self.state.is_finished() {
            return FlagOutcome::NoChange;
        }
        let Some(cell) = self.cells.get_mut(coords.to_nd_index()) else {
            return FlagOutcome::NoChange;
        };
        if cell.is_revealed() {
            return FlagOutcome::NoChange;
        }

        cell.flagged = !cell.flagged;
        let cell = *cell;

        if cell.flagged {
            self.flags_used += 1;
        } else {
            self.flags_used -= 1;
        }
        if cell.has_mine {
            if cell.flagged {
                self.unsettled -= 1;
            } else {
                self.unsettled += 1;
            }
        }
        log::debug!("Flags used: {}", self.flags_used);

        self.mark_started();
        self.observer.cell_changed(coords, cell);
        self.observer.flags_used_changed(self.flags_used);

        let outcome = if self.check_win() {
            FlagOutcome::Won
        } else if cell.flagged {
            FlagOutcome::Flagged
        } else {
            FlagOutcome::Unflagged
        };

        log::trace!("Board after flag at {:?}:\n{}", coords, self);
        outcome
    }

    fn flood_fill(&mut self, origin: Coord2) {
        let mut to_visit = VecDeque::from([origin]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = &mut self.cells[coords.to_nd_index()];
            // queued more than once, or reached through a zero next to a mine or flag
            if cell.has_mine || !cell.can_reveal() {
                continue;
            }

            cell.hidden = false;
            let cell = *cell;
            self.unsettled -= 1;
            self.observer.cell_changed(coords, cell);
            log::trace!(
                "Revealed {:?}, adjacent mines: {}",
                coords,
                cell.mine_neighbor_count
            );

            if cell.mine_neighbor_count == 0 {
                let cells = &self.cells;
                to_visit.extend(
                    neighbors(coords, self.size)
                        .filter(|&pos| cells[pos.to_nd_index()].can_reveal()),
                );
            }
        }
    }

    fn reveal_all_mines(&mut self) {
        let flags_before = self.flags_used;

        for ((row, col), cell) in self.cells.indexed_iter_mut() {
            if !cell.has_mine {
                continue;
            }
            cell.hidden = false;
            if cell.flagged {
                cell.flagged = false;
                self.flags_used -= 1;
                self.unsettled += 1;
            }
            self.observer.cell_changed((row as Coord, col as Coord), *cell);
        }

        if self.flags_used != flags_before {
            self.observer.flags_used_changed(self.flags_used);
        }
    }

    /// Ends the game as won once every cell is settled.
    fn check_win(&mut self) -> bool {
        debug_assert_eq!(self.unsettled == 0, self.is_win_satisfied());

        if self.unsettled == 0 {
            self.end_game(true);
            true
        } else {
            false
        }
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            log::debug!("Game started");
            self.state = EngineState::Active;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            EngineState::Won
        } else {
            EngineState::Lost
        };
        log::debug!("Game ended, won: {}", won);

        self.observer.game_ended(won);
        self.observer.board_refresh_requested();
    }
}

impl<O> Board<O> {
    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flags_used(&self) -> CellCount {
        self.flags_used
    }

    /// Mines not yet accounted for by a flag. Negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.mine_count as isize) - (self.flags_used as isize)
    }

    /// Copy of the cell at `coords`, `None` when out of bounds.
    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Copies of every cell with its coordinates, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        neighbors(coords, self.size)
    }

    /// Full scan of the win condition: every mine flagged and every safe cell uncovered.
    pub fn is_win_satisfied(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_settled())
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}

/// Text dump with odd rows shifted right, matching the hex layout.
impl<O> fmt::Display for Board<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.outer_iter().enumerate() {
            if row % 2 == 1 {
                f.write_char(' ')?;
            }
            for cell in cells.iter() {
                f.write_char(cell.symbol())?;
                f.write_char(' ')?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
