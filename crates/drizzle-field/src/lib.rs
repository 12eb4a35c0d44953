//! Falling-glyph animation for the drizzle rain.
//!
//! Three layers of state: a [`GlyphCell`] is one falling character slot
//! with its own alpha fade and re-randomization timer, a [`Column`] is a
//! vertical stack of cells sharing one speed, and a [`RainField`] owns one
//! column per terminal column plus the run's random generator.

mod cell;
mod chars;
mod column;
mod field;

pub use cell::GlyphCell;
pub use column::Column;
pub use field::RainField;
