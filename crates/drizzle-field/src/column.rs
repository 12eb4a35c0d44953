//! A vertical stack of glyph cells sharing one speed and x position.

use drizzle_core::{COLUMN_HEIGHT, COLUMN_SPEED, GLYPH_PX, Screen};
use rand::Rng;

use crate::cell::GlyphCell;

/// State for one rain column.
///
/// Height and speed are drawn once at construction and never change.
#[derive(Debug, Clone)]
pub struct Column {
    /// Fixed horizontal position in pixels.
    pub x: i32,
    /// Fall speed shared by every cell.
    pub speed: i32,
    /// Cells ordered top to bottom, one glyph height apart.
    pub cells: Vec<GlyphCell>,
}

impl Column {
    /// Build a column anchored at `anchor_y`, stacking cells upward from
    /// the anchor. The topmost cells start above the screen, which staggers
    /// their entry.
    pub fn new(x: i32, anchor_y: i32, now_ms: u64, rng: &mut impl Rng) -> Self {
        let height = rng.gen_range(COLUMN_HEIGHT);
        let speed = rng.gen_range(COLUMN_SPEED);
        let cells = (0..height)
            .map(|i| {
                // index 0 is the topmost cell
                let y = anchor_y - GLYPH_PX * (height - 1 - i) as i32;
                GlyphCell::new(x, y, speed, now_ms, rng)
            })
            .collect();
        Self { x, speed, cells }
    }

    /// Advance every cell in order. Half the time, one random upper-half
    /// cell is flipped back toward opaque first, faking a bright head
    /// glyph re-appearing.
    pub fn update(&mut self, rng: &mut impl Rng, now_ms: u64, screen: Screen) {
        if rng.gen_bool(0.5) {
            let idx = rng.gen_range(0..self.cells.len() / 2);
            self.cells[idx].set_visible(true);
        }
        for cell in &mut self.cells {
            cell.update(rng, now_ms, screen);
        }
    }
}
