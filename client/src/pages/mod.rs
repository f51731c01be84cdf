//! Top-level routed pages.

pub mod board;
