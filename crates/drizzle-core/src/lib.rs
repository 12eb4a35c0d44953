//! Core types for the drizzle rain animation.
//!
//! The animation model runs in a notional pixel space so its tuning
//! constants stay in familiar units: one terminal cell covers a
//! [`GLYPH_PX`]-sized square, and glyph cells fall a few pixels per frame.
//! Rasterization back to the character grid happens at render time.

use std::ops::Range;

/// Height (and width) of one glyph cell in pixels.
pub const GLYPH_PX: i32 = 24;

/// Minimum time between glyph re-randomizations for a cell.
pub const GLYPH_CHANGE_INTERVAL_MS: u64 = 300;

/// Per-frame alpha increment/decrement.
pub const ALPHA_STEP: u8 = 5;

/// While fading in, alpha climbs until it reaches a target drawn from here.
pub const FADE_IN_TARGET: Range<u8> = 100..255;

/// While fading out, alpha falls until it reaches a floor drawn from here.
pub const FADE_OUT_FLOOR: Range<u8> = 0..10;

/// Cells per column, drawn once at column construction.
pub const COLUMN_HEIGHT: Range<usize> = 8..25;

/// Fall speed in pixels per frame, drawn once at column construction.
pub const COLUMN_SPEED: Range<i32> = 3..6;

/// Target delay between frames (~60 fps).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Screen geometry in animation pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Screen {
    /// Screen width in pixels.
    pub width: i32,
    /// Screen height in pixels.
    pub height: i32,
}

impl Screen {
    /// Build the pixel-space geometry for a terminal character grid.
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        Self {
            width: cols as i32 * GLYPH_PX,
            height: rows as i32 * GLYPH_PX,
        }
    }

    /// X positions of the rain columns, one per screen-width slice.
    pub fn column_xs(&self) -> impl Iterator<Item = i32> {
        (0..self.width).step_by(GLYPH_PX as usize)
    }
}
