//! Generation runtime: randomness, normalization, composition, and the
//! owning engine.

pub mod casing;
pub mod composer;
pub mod engine;
pub mod random;
