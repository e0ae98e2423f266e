//! Glyph selection from the seed string, cyclic or uniformly random

use crate::io::error::{Result, invalid_parameter};
use rand::Rng;
use rand::rngs::StdRng;

#[derive(Debug, Clone)]
enum Order {
    Cyclic { cursor: usize },
    Random { rng: StdRng },
}

/// Yields the glyph to draw for each visited cell
///
/// Iteration never ends: the cyclic variant wraps back to the first glyph
/// after the last one, the random variant draws an independent index per call.
#[derive(Debug, Clone)]
pub struct GlyphSequencer {
    glyphs: Vec<char>,
    order: Order,
}

impl GlyphSequencer {
    /// Cycle through the seed string in order, starting at its first glyph
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `seed` is empty
    pub fn cyclic(seed: &str) -> Result<Self> {
        Ok(Self {
            glyphs: seed_glyphs(seed)?,
            order: Order::Cyclic { cursor: 0 },
        })
    }

    /// Pick a uniformly random glyph of the seed string on every call
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `seed` is empty
    pub fn random(seed: &str, rng: StdRng) -> Result<Self> {
        Ok(Self {
            glyphs: seed_glyphs(seed)?,
            order: Order::Random { rng },
        })
    }

    /// Glyphs of the seed string
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Index of the next glyph in cyclic mode, `None` in random mode
    pub const fn cursor(&self) -> Option<usize> {
        match self.order {
            Order::Cyclic { cursor } => Some(cursor),
            Order::Random { .. } => None,
        }
    }

    /// Whether glyphs are drawn at random
    pub const fn is_random(&self) -> bool {
        matches!(self.order, Order::Random { .. })
    }

    /// Rewind the cyclic cursor to the first glyph
    pub fn reset(&mut self) {
        if let Order::Cyclic { cursor } = &mut self.order {
            *cursor = 0;
        }
    }
}

impl Iterator for GlyphSequencer {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let len = self.glyphs.len();
        let index = match &mut self.order {
            Order::Cyclic { cursor } => {
                let current = *cursor;
                *cursor = (current + 1) % len;
                current
            }
            Order::Random { rng } => rng.random_range(0..len),
        };
        self.glyphs.get(index).copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

fn seed_glyphs(seed: &str) -> Result<Vec<char>> {
    let glyphs: Vec<char> = seed.chars().collect();
    if glyphs.is_empty() {
        return Err(invalid_parameter(
            "seed_string",
            &seed,
            &"seed string must contain at least one glyph",
        ));
    }
    Ok(glyphs)
}
