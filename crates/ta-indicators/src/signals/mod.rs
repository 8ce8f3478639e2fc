//! Signals derived from pairs of series.
//!
//! - Crossover detection
//! - Segment intersection and area between curves

mod crossover;
mod geometry;

pub use crossover::{crossings, crossover, Crossing, Direction};
pub use geometry::{area_between, intersection};
