//! Shared board state for the demo pages.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use engine::board::Board;

/// Board-level state: the element collection and the single active id.
///
/// Read through an `RwSignal` context; elements mutate it by pushing
/// committed geometry and activation requests, never by reaching into each
/// other's interactive state.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pub board: Board,
}
