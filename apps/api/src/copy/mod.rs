// Copy engine: heuristic quality scoring, style catalog, variant generation.
// Everything in here is pure and deterministic — handlers own all state.

pub mod generator;
pub mod handlers;
pub mod scorer;
pub mod styles;
