// src/core/mod.rs

pub mod duration;
pub mod sanitize;

pub use duration::{parse_duration, parse_duration_with, DurationHeuristics};
