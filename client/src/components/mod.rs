//! UI components for the board demo.

pub mod drag_handle;
pub mod editable_board_element;
pub mod resize_bars;
