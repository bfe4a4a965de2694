//! Event Dispatch and Render Loop
//!
//! [`App`] owns the cell buffer and selection state for the lifetime of
//! the session and consumes one normalized event at a time. The render
//! loop in [`run`] is cooperative and single-threaded: draw status,
//! present, block for the next event, dispatch, repeat.

use crate::core::{apply_highlight, emit_str, CellBuffer, Color, Rect, SelectionTracker, Style};
use crate::event::{Event, KeyPress};
use crate::terminal::{Result, Terminal};

/// What the loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Session state: the buffer, the drag tracker, and the status line
pub struct App {
    buffer: CellBuffer,
    selection: SelectionTracker,
    /// Extent of the highlight drawn last frame, reverted before the next
    /// event is applied
    previous_highlight: Option<Rect>,
    /// Substituted when a highlighted cell was never explicitly styled
    default_style: Style,
    /// Last known pointer position, (-1, -1) until the first mouse event
    pointer: (i32, i32),
    /// Button/wheel summary for the current frame only
    button_label: String,
}

impl App {
    pub fn new(cols: usize, rows: usize, default_style: Style) -> Self {
        Self {
            buffer: CellBuffer::new(cols, rows),
            selection: SelectionTracker::new(),
            previous_highlight: None,
            default_style,
            pointer: (-1, -1),
            button_label: String::new(),
        }
    }

    pub fn buffer(&self) -> &CellBuffer {
        &self.buffer
    }

    /// Draw the fixed status box showing the controls, the last pointer
    /// position, and the current frame's button summary.
    pub fn draw_status(&mut self) {
        let box_style = Style::DEFAULT.fg(Color::BRIGHT_WHITE).bg(Color::RED);
        self.buffer.fill_rect(Rect::new(1, 1, 31, 3), box_style, ' ');
        emit_str(&mut self.buffer, 1, 1, box_style, "Press ESC to exit, C to clear.");
        let pos = format!("Mouse: {}, {}  ", self.pointer.0, self.pointer.1);
        emit_str(&mut self.buffer, 1, 2, box_style, &pos);
        let btn = format!("Buttons: {:<20}", self.button_label);
        emit_str(&mut self.buffer, 1, 3, box_style, &btn);
    }

    /// Dispatch one event. Reverts last frame's highlight first, applies
    /// the event's mutations, then re-highlights an active drag. No event
    /// kind can fail; unrecognized input degrades to a diagnostic marker.
    pub fn handle(&mut self, event: Event) -> Control {
        if let Some(rect) = self.previous_highlight.take() {
            apply_highlight(&mut self.buffer, rect, false, self.default_style);
        }
        self.button_label.clear();

        let diag_style = Style::DEFAULT.bg(Color::BRIGHT_RED);
        match event {
            Event::Resize { cols, rows } => {
                tracing::debug!(cols, rows, "resize");
                self.buffer.resize(cols as usize, rows as usize);
                self.mark_diag(diag_style, 'R');
            }
            Event::Key(key) => {
                match key {
                    KeyPress::Escape => {
                        // an in-progress drag is abandoned, not committed
                        self.selection.abandon();
                        tracing::info!("escape pressed, quitting");
                        return Control::Quit;
                    }
                    KeyPress::Char(c) => {
                        if c == 'C' || c == 'c' {
                            self.buffer.clear();
                        }
                        let (w, h) = self.size();
                        self.buffer.set(w - 2, h - 2, diag_style, c);
                    }
                    KeyPress::Other => {}
                }
                self.mark_diag(diag_style, 'K');
            }
            Event::Mouse(mouse) => {
                self.button_label = mouse.buttons.label();
                self.pointer = (mouse.col, mouse.row);
                self.selection
                    .handle_mouse(&mut self.buffer, mouse.col, mouse.row, mouse.buttons);
                self.mark_diag(diag_style, 'M');
            }
            Event::Other => {
                self.mark_diag(diag_style, 'X');
            }
        }

        if let Some(rect) = self.selection.active_rect() {
            apply_highlight(&mut self.buffer, rect, true, self.default_style);
            self.previous_highlight = Some(rect);
        }
        Control::Continue
    }

    fn size(&self) -> (i32, i32) {
        (self.buffer.cols() as i32, self.buffer.rows() as i32)
    }

    /// Diagnostic cell in the bottom-right corner showing the kind of the
    /// last event processed
    fn mark_diag(&mut self, style: Style, glyph: char) {
        let (w, h) = self.size();
        self.buffer.set(w - 1, h - 1, style, glyph);
    }
}

/// Top-level cooperative loop. Runs until the escape key; the sole
/// suspension point is the blocking event read.
pub fn run(terminal: &mut Terminal) -> Result<()> {
    let default_style = Style::DEFAULT.fg(Color::WHITE).bg(Color::BLACK);
    terminal.set_default_style(default_style);

    let (cols, rows) = terminal.size()?;
    let mut app = App::new(cols as usize, rows as usize, default_style);
    tracing::info!(cols, rows, "session started");

    loop {
        app.draw_status();
        terminal.present(app.buffer())?;
        let event = terminal.poll_event()?;
        if app.handle(event) == Control::Quit {
            return Ok(());
        }
    }
}
