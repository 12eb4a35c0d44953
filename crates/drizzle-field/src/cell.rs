//! A single falling glyph cell.

use drizzle_core::{
    ALPHA_STEP, FADE_IN_TARGET, FADE_OUT_FLOOR, GLYPH_CHANGE_INTERVAL_MS, GLYPH_PX, Screen,
};
use rand::Rng;
use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::chars::RAIN_CHARS;

/// State for one falling glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphCell {
    /// Fixed horizontal position in pixels.
    pub x: i32,
    /// Current vertical position in pixels. Negative means off-screen above.
    pub y: i32,
    /// Fall speed in pixels per frame, inherited from the column.
    pub speed: i32,
    /// Current opacity.
    pub alpha: u8,
    /// Whether alpha is currently walking toward opaque.
    pub fading_in: bool,
    /// The character currently rendered.
    pub glyph: char,
    /// Time the glyph was last re-randomized.
    pub last_change_ms: u64,
}

impl GlyphCell {
    /// Create a cell starting fully transparent and fading in.
    pub fn new(x: i32, y: i32, speed: i32, now_ms: u64, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y,
            speed,
            alpha: 0,
            fading_in: true,
            glyph: random_glyph(rng),
            last_change_ms: now_ms,
        }
    }

    /// Advance the regeneration timer, the alpha walk, and the fall.
    pub fn update(&mut self, rng: &mut impl Rng, now_ms: u64, screen: Screen) {
        if now_ms.saturating_sub(self.last_change_ms) >= GLYPH_CHANGE_INTERVAL_MS {
            self.glyph = random_glyph(rng);
            self.last_change_ms = now_ms;
        }

        // Walk alpha toward a freshly randomized bound each frame; the
        // moving target is what makes the flicker look organic.
        if self.fading_in {
            if self.alpha < rng.gen_range(FADE_IN_TARGET) {
                self.alpha = self.alpha.saturating_add(ALPHA_STEP);
            } else {
                self.fading_in = false;
            }
        } else if self.alpha > rng.gen_range(FADE_OUT_FLOOR) {
            self.alpha = self.alpha.saturating_sub(ALPHA_STEP);
        } else {
            self.fading_in = true;
        }

        self.y += self.speed;
        if self.y > screen.height {
            self.y = -GLYPH_PX;
        }
    }

    /// Override the fade direction; `true` walks toward opaque.
    pub fn set_visible(&mut self, visible: bool) {
        self.fading_in = visible;
    }

    /// Render the glyph at its current opacity.
    pub fn span(&self) -> Span<'static> {
        if self.alpha == 0 {
            return Span::raw(" ");
        }
        // A fully opaque cell reads as the bright rain head
        let color = if self.alpha == u8::MAX {
            Color::Rgb(200, 255, 200)
        } else {
            Color::Rgb(0, self.alpha, 0)
        };
        Span::styled(self.glyph.to_string(), Style::new().fg(color))
    }
}

fn random_glyph(rng: &mut impl Rng) -> char {
    RAIN_CHARS[rng.gen_range(0..RAIN_CHARS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn screen() -> Screen {
        Screen::from_cells(80, 24)
    }

    #[test]
    fn test_alpha_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut cell = GlyphCell::new(0, 0, 4, 0, &mut rng);
        for frame in 0..2000 {
            cell.update(&mut rng, frame * 16, screen());
            // u8 bounds alpha by construction; the walk keeps it on the step grid
            assert_eq!(cell.alpha % ALPHA_STEP, 0);
        }
    }

    #[test]
    fn test_fade_flips_at_randomized_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut cell = GlyphCell::new(0, 0, 3, 0, &mut rng);

        let mut frames = 0u64;
        while cell.fading_in {
            cell.update(&mut rng, 0, screen());
            frames += 1;
            assert!(frames < 1000, "never reached the fade-in target");
        }
        assert!(cell.alpha >= FADE_IN_TARGET.start);

        while !cell.fading_in {
            cell.update(&mut rng, 0, screen());
            frames += 1;
            assert!(frames < 2000, "never fell back to the fade-out floor");
        }
        assert!(cell.alpha < FADE_OUT_FLOOR.end);
    }

    #[test]
    fn test_wraps_to_just_above_screen() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut cell = GlyphCell::new(0, screen().height, 5, 0, &mut rng);
        cell.update(&mut rng, 0, screen());
        assert_eq!(cell.y, -GLYPH_PX);
    }

    #[test]
    fn test_position_never_exceeds_screen_after_update() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut cell = GlyphCell::new(0, -GLYPH_PX, 5, 0, &mut rng);
        for frame in 0..5000 {
            cell.update(&mut rng, frame * 16, screen());
            assert!(cell.y <= screen().height);
            assert!(cell.y >= -GLYPH_PX);
        }
    }

    #[test]
    fn test_glyph_changes_only_after_interval() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut cell = GlyphCell::new(0, 0, 3, 0, &mut rng);
        let initial = cell.glyph;

        for now in [50, 100, 250, 299] {
            cell.update(&mut rng, now, screen());
            assert_eq!(cell.glyph, initial);
            assert_eq!(cell.last_change_ms, 0);
        }

        cell.update(&mut rng, 300, screen());
        assert_eq!(cell.last_change_ms, 300);
        assert!(RAIN_CHARS.contains(&cell.glyph));
    }

    #[test]
    fn test_set_visible_overrides_direction() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut cell = GlyphCell::new(0, 0, 3, 0, &mut rng);
        cell.set_visible(false);
        assert!(!cell.fading_in);
        cell.set_visible(true);
        assert!(cell.fading_in);
    }

    #[test]
    fn test_transparent_cell_renders_blank() {
        let mut rng = StdRng::seed_from_u64(7);
        let cell = GlyphCell::new(0, 0, 3, 0, &mut rng);
        assert_eq!(cell.span(), Span::raw(" "));
    }
}
