//! Sources of random die faces.
//!
//! Resolution functions never touch an RNG directly; they draw through
//! [`DieSource`] so that tests and replays can feed fixed faces.

use rand::Rng;
use rand::rngs::StdRng;

/// A uniform source of die faces and table indices.
pub trait DieSource {
    /// Draw a face uniformly from `1..=sides`.
    fn roll(&mut self, sides: u32) -> u32;

    /// Draw an index uniformly from `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl DieSource for StdRng {
    fn roll(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// A die source that replays a fixed sequence of faces, wrapping around.
///
/// `pick` consumes a face too and maps it onto the table (`face - 1`,
/// modulo the table length). An empty script always yields 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: Vec<u32>,
    next: usize,
}

impl ScriptedDice {
    /// Create a source that yields `faces` in order.
    pub fn new(faces: impl Into<Vec<u32>>) -> Self {
        Self {
            faces: faces.into(),
            next: 0,
        }
    }

    fn next_face(&mut self) -> u32 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }
}

impl DieSource for ScriptedDice {
    fn roll(&mut self, _sides: u32) -> u32 {
        self.next_face()
    }

    fn pick(&mut self, len: usize) -> usize {
        (self.next_face().saturating_sub(1) as usize) % len
    }
}
