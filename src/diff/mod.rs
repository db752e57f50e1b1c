//! Pixel-by-pixel image comparison.

mod compare;
mod differ;

pub use compare::{difference, DiffResult};
pub use differ::{Config, Differ, DiffStats};
