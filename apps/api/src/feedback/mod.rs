// Heuristic interview feedback engine.
// Signals → score / feedback items, plus independent STAR and delivery pipelines.
// Everything except `store` and `handlers` is synchronous and free of I/O.

pub mod category;
pub mod composer;
pub mod delivery;
pub mod engine;
pub mod handlers;
pub mod scoring;
pub mod signals;
pub mod star;
pub mod store;
