//! Randomness sources for fragment selection.
//!
//! Composition only ever needs two primitives: a uniform index into a
//! fragment set and a uniform unit value for inclusion rolls. Any `rand`
//! generator provides both; `ScriptedSource` replays fixed values so
//! generation can be pinned down in tests and previews.

use rand::Rng;
use std::collections::VecDeque;

/// A source of uniformly distributed draws.
pub trait EntropySource {
    /// A uniform index in `[0, len)`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// A uniform value in `[0.0, 1.0)`.
    fn unit(&mut self) -> f64;

    /// Inclusion roll: succeeds when a unit draw falls below `probability`.
    fn roll(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }
}

impl<R: Rng + ?Sized> EntropySource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays scripted draws, falling back to fixed values once a script
/// runs dry.
///
/// Indices wrap modulo the set length, so a script written for one
/// lexicon stays in range for any other.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    indices: VecDeque<usize>,
    units: VecDeque<f64>,
    fallback_index: usize,
    fallback_unit: f64,
    index_draws: usize,
    unit_draws: usize,
}

impl ScriptedSource {
    /// Index 0 and unit 0.0 forever: every roll succeeds, every draw
    /// lands on the first entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The same index and unit value for every draw.
    pub fn constant(index: usize, unit: f64) -> Self {
        Self {
            fallback_index: index,
            fallback_unit: unit,
            ..Self::default()
        }
    }

    pub fn with_indices<I: IntoIterator<Item = usize>>(mut self, indices: I) -> Self {
        self.indices.extend(indices);
        self
    }

    pub fn with_units<I: IntoIterator<Item = f64>>(mut self, units: I) -> Self {
        self.units.extend(units);
        self
    }

    /// Number of index draws taken so far.
    pub fn index_draws(&self) -> usize {
        self.index_draws
    }

    /// Number of unit draws (inclusion rolls) taken so far.
    pub fn unit_draws(&self) -> usize {
        self.unit_draws
    }
}

impl EntropySource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.index_draws += 1;
        self.indices.pop_front().unwrap_or(self.fallback_index) % len
    }

    fn unit(&mut self) -> f64 {
        self.unit_draws += 1;
        self.units.pop_front().unwrap_or(self.fallback_unit)
    }
}
