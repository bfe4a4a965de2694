//! Gridpaint
//!
//! An interactive terminal cell-grid session: drag a rectangle with the
//! mouse to paint it, watch the status box track the pointer and buttons,
//! press C to clear and ESC to quit. This crate provides:
//!
//! - `core`: cell buffer, styles, geometry, and the drag-select tracker
//! - `event`: the normalized input event model
//! - `terminal`: the crossterm-backed terminal collaborator
//! - `app`: event dispatch and the cooperative render loop

pub mod app;
pub mod core;
pub mod event;
pub mod terminal;
