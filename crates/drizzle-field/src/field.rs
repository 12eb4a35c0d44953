//! The full-screen rain field.

use drizzle_core::{GLYPH_PX, Screen};
use rand::{Rng, SeedableRng, rngs::StdRng};
use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::column::Column;

/// Rain state for the whole screen.
///
/// Owns the run's random generator; every source of randomness in the
/// animation flows through it, so a seeded field replays identically.
#[derive(Debug)]
pub struct RainField {
    /// One rain column per terminal column.
    columns: Vec<Column>,
    /// Geometry the columns were built for.
    screen: Screen,
    /// The run's generator.
    rng: StdRng,
}

impl RainField {
    /// Create an empty field. Columns are built on the first render, once
    /// the frame dimensions are known.
    pub fn new(seed: u64) -> Self {
        Self {
            columns: Vec::new(),
            screen: Screen::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Update every column in creation order, then draw the frame.
    pub fn render(&mut self, frame: &mut Frame, elapsed_ms: u64) {
        let area = frame.area();
        let screen = Screen::from_cells(area.width, area.height);

        // Rebuild the columns when the terminal dimensions change
        if screen != self.screen || self.columns.is_empty() {
            self.screen = screen;
            self.init_columns(elapsed_ms);
        }

        for column in &mut self.columns {
            column.update(&mut self.rng, elapsed_ms, self.screen);
        }

        let cols = area.width as usize;
        let rows = area.height as usize;
        let mut grid: Vec<Vec<Span>> = vec![vec![Span::raw(" "); cols]; rows];
        for column in &self.columns {
            let col = (column.x / GLYPH_PX) as usize;
            for cell in &column.cells {
                let row = cell.y.div_euclid(GLYPH_PX);
                if col < cols && row >= 0 && (row as usize) < rows {
                    grid[row as usize][col] = cell.span();
                }
            }
        }

        let lines: Vec<Line> = grid.into_iter().map(Line::from).collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Columns currently driving the animation.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn init_columns(&mut self, now_ms: u64) {
        let height = self.screen.height.max(1);
        let xs: Vec<i32> = self.screen.column_xs().collect();
        self.columns = xs
            .into_iter()
            .map(|x| {
                let anchor = self.rng.gen_range(0..height);
                Column::new(x, anchor, now_ms, &mut self.rng)
            })
            .collect();
    }
}
