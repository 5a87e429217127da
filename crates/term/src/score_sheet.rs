//! ScoreSheetView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (frames 1-9 are 5 columns wide, the tenth is 7):
//!
//! ```text
//! ┌─────┬─────┬ ... ┬───────┐
//! │  1  │  2  │     │  10   │
//! ├─────┼─────┼ ... ┼───────┤
//! │ 6 / │ 6 3 │     │ 4 / X │
//! │  16 │  25 │     │   156 │
//! └─────┴─────┴ ... ┴───────┘
//!
//!  TOTAL 156   MAX 156   FRAME -   PINS 0
//!  <message>
//!
//!  0-9 pins   x strike   / spare   r restart   q quit
//! ```

use crate::core::{FrameSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::FRAME_COUNT;

/// Inner width of frames 1-9.
const CELL_W: u16 = 5;
/// Inner width of the tenth frame (three marks).
const TENTH_CELL_W: u16 = 7;

/// Columns used by the ten-box sheet, borders included.
pub const SHEET_WIDTH: u16 = 1 + (CELL_W + 1) * (FRAME_COUNT as u16 - 1) + TENTH_CELL_W + 1;

/// Rows used by the whole view (sheet, status, message, help).
pub const VIEW_HEIGHT: u16 = 11;

const HELP: &str = "0-9 pins   x strike   / spare   r restart   q quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Renders the classic ten-box bowling score sheet.
#[derive(Debug, Clone)]
pub struct ScoreSheetView {
    anchor_y: AnchorY,
    show_help: bool,
}

impl Default for ScoreSheetView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
            show_help: true,
        }
    }
}

impl ScoreSheetView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        message: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);

        let x = viewport.width.saturating_sub(SHEET_WIDTH) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(VIEW_HEIGHT) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::fg(Rgb::new(150, 150, 160));
        draw_rule(fb, x, y, ['┌', '┬', '┐'], border);
        draw_row(fb, x, y + 1, &snap.frames, border, |f| {
            header_cell(f, snap.current_frame)
        });
        draw_rule(fb, x, y + 2, ['├', '┼', '┤'], border);
        draw_row(fb, x, y + 3, &snap.frames, border, marks_cell);
        draw_row(fb, x, y + 4, &snap.frames, border, score_cell);
        draw_rule(fb, x, y + 5, ['└', '┴', '┘'], border);

        self.draw_status(fb, snap, message, x + 1, y + 7);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        message: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, message, viewport, &mut fb);
        fb
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        message: Option<&str>,
        x: u16,
        y: u16,
    ) {
        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let total = snap.score.map_or_else(|| "-".to_string(), |s| s.to_string());
        let frame = snap
            .current_frame
            .map_or_else(|| "-".to_string(), |f| f.to_string());

        let mut cx = x;
        for (name, text) in [
            ("TOTAL ", total),
            ("MAX ", snap.max_possible_score.to_string()),
            ("FRAME ", frame),
            ("PINS ", snap.pins_left.to_string()),
        ] {
            cx = fb.put_str(cx, y, name, label);
            cx = fb.put_str(cx, y, &text, value);
            cx = cx.saturating_add(3);
        }

        if snap.complete {
            let done = CellStyle::fg(Rgb::new(120, 220, 120)).bold();
            fb.put_str(cx, y, "GAME OVER", done);
        }

        if let Some(message) = message {
            let warn = CellStyle::fg(Rgb::new(230, 110, 100));
            fb.put_str(x, y + 1, message, warn);
        }

        if self.show_help {
            let help = CellStyle::default().dim();
            fb.put_str(x, y + 3, HELP, help);
        }
    }
}

fn cell_width(index: usize) -> u16 {
    if index == FRAME_COUNT {
        TENTH_CELL_W
    } else {
        CELL_W
    }
}

/// Horizontal rule with `[left, junction, right]` corner glyphs.
fn draw_rule(fb: &mut FrameBuffer, x: u16, y: u16, glyphs: [char; 3], style: CellStyle) {
    let [left, junction, right] = glyphs;
    fb.put_char(x, y, left, style);
    let mut cx = x;
    for index in 1..=FRAME_COUNT {
        let w = cell_width(index);
        fb.fill_rect(cx + 1, y, w, 1, '─', style);
        cx += w + 1;
        let glyph = if index == FRAME_COUNT { right } else { junction };
        fb.put_char(cx, y, glyph, style);
    }
}

/// One row of ten boxes; `cell` returns text already padded to the box width.
fn draw_row(
    fb: &mut FrameBuffer,
    x: u16,
    y: u16,
    frames: &[FrameSnapshot],
    border: CellStyle,
    cell: impl Fn(&FrameSnapshot) -> (String, CellStyle),
) {
    fb.put_char(x, y, '│', border);
    let mut cx = x;
    for frame in frames {
        let (text, style) = cell(frame);
        fb.put_str(cx + 1, y, &text, style);
        cx += cell_width(frame.index) + 1;
        fb.put_char(cx, y, '│', border);
    }
}

fn header_cell(frame: &FrameSnapshot, current: Option<usize>) -> (String, CellStyle) {
    let w = usize::from(cell_width(frame.index));
    let style = if current == Some(frame.index) {
        CellStyle::fg(Rgb::new(240, 220, 80)).bold()
    } else {
        CellStyle::default()
    };
    (format!("{:^w$}", frame.index), style)
}

fn marks_cell(frame: &FrameSnapshot) -> (String, CellStyle) {
    let w = usize::from(cell_width(frame.index)) - 1;
    let mut text = String::with_capacity(w);
    for (i, mark) in frame.marks.iter().enumerate() {
        if i > 0 {
            text.push(' ');
        }
        text.push(*mark);
    }
    let style = if frame.marks.iter().any(|&m| matches!(m, 'X' | '/')) {
        CellStyle::fg(Rgb::new(80, 200, 220)).bold()
    } else {
        CellStyle::default()
    };
    (format!("{text:>w$} "), style)
}

fn score_cell(frame: &FrameSnapshot) -> (String, CellStyle) {
    let w = usize::from(cell_width(frame.index)) - 1;
    let text = frame
        .partial_score
        .map_or_else(String::new, |s| s.to_string());
    (format!("{text:>w$} "), CellStyle::default())
}
