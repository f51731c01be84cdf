//! # client
//!
//! Leptos + WASM frontend for the board-element kit. Renders editable
//! board elements — draggable by their handle, resizable from eight border
//! hotzones — and wires DOM pointer events into the `engine` crate's
//! interactive core.
//!
//! This crate contains the application shell, pages, components, and
//! shared state. All constraint math lives in `engine`; the components
//! only translate events and apply the resulting geometry to the DOM.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
