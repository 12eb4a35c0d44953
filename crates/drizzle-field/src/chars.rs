//! Character constants for the rain animation.

/// Glyphs cycled by falling cells. The rain is deliberately binary.
pub const RAIN_CHARS: &[char] = &['0', '1'];
