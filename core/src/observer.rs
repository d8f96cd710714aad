use alloc::boxed::Box;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Receives every change the board makes, synchronously and in order.
///
/// Implementations must not call back into the board that is notifying them.
pub trait BoardObserver {
    /// A cell's visible state changed, or the board is syncing its initial state.
    fn cell_changed(&mut self, coords: Coord2, cell: Cell) {
        let _ = (coords, cell);
    }

    /// A batch of cell changes is complete and the view should be repainted.
    fn board_refresh_requested(&mut self) {}

    /// The game reached its terminal state. Fired exactly once per board.
    fn game_ended(&mut self, won: bool) {
        let _ = won;
    }

    /// The number of flags currently placed changed.
    fn flags_used_changed(&mut self, count: CellCount) {
        let _ = count;
    }
}

/// Discards all notifications.
impl BoardObserver for () {}

impl<T: BoardObserver + ?Sized> BoardObserver for &mut T {
    fn cell_changed(&mut self, coords: Coord2, cell: Cell) {
        (**self).cell_changed(coords, cell)
    }

    fn board_refresh_requested(&mut self) {
        (**self).board_refresh_requested()
    }

    fn game_ended(&mut self, won: bool) {
        (**self).game_ended(won)
    }

    fn flags_used_changed(&mut self, count: CellCount) {
        (**self).flags_used_changed(count)
    }
}

impl<T: BoardObserver + ?Sized> BoardObserver for Box<T> {
    fn cell_changed(&mut self, coords: Coord2, cell: Cell) {
        (**self).cell_changed(coords, cell)
    }

    fn board_refresh_requested(&mut self) {
        (**self).board_refresh_requested()
    }

    fn game_ended(&mut self, won: bool) {
        (**self).game_ended(won)
    }

    fn flags_used_changed(&mut self, count: CellCount) {
        (**self).flags_used_changed(count)
    }
}

/// A single notification, as recorded by [`EventLog`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    CellChanged { coords: Coord2, cell: Cell },
    BoardRefreshRequested,
    GameEnded { won: bool },
    FlagsUsedChanged { count: CellCount },
}

/// Observer that records every notification so it can be drained in batches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<BoardEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<BoardEvent> {
        core::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn changed_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.events.iter().filter_map(|event| match *event {
            BoardEvent::CellChanged { coords, cell } => Some((coords, cell)),
            _ => None,
        })
    }
}

impl BoardObserver for EventLog {
    fn cell_changed(&mut self, coords: Coord2, cell: Cell) {
        self.events.push(BoardEvent::CellChanged { coords, cell });
    }

    fn board_refresh_requested(&mut self) {
        self.events.push(BoardEvent::BoardRefreshRequested);
    }

    fn game_ended(&mut self, won: bool) {
        self.events.push(BoardEvent::GameEnded { won });
    }

    fn flags_used_changed(&mut self, count: CellCount) {
        self.events.push(BoardEvent::FlagsUsedChanged { count });
    }
}
