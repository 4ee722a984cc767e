//! Data types: fragment tiers, lexicons, and generated name values.

pub mod builtin;
pub mod lexicon;
pub mod name;
pub mod tier;
