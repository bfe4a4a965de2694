//! Grid Core
//!
//! Platform-independent grid state. This module contains:
//! - Cell representation with colors and attribute flags
//! - The addressable cell buffer with silent bounds clipping
//! - Rectangle geometry and text emission helpers
//! - The drag-select state machine and highlight procedure
//!
//! The core is completely deterministic and never touches the terminal:
//! given the same sequence of events it always produces the same buffer.

mod buffer;
mod cell;
mod geometry;
mod selection;

pub use buffer::CellBuffer;
pub use cell::{AttrFlags, Cell, Color, Style};
pub use geometry::{emit_str, Rect};
pub use selection::{apply_highlight, commit_color, SelectionTracker};
