//! # imgdiff
//!
//! A library for comparing two equally-sized images pixel-by-pixel and
//! producing a third image that highlights the differing pixels.
//!
//! Channels are compared in a canonical 16-bit, alpha-premultiplied RGBA
//! space, so inputs stored at different native bit depths are still compared
//! consistently. A pixel differs when any channel's absolute difference
//! strictly exceeds the configured threshold.
//!
//! ## Example
//!
//! ```no_run
//! use imgdiff::{Config, Differ};
//!
//! # fn main() -> imgdiff::Result<()> {
//! let differ = Differ::new(Config::default())?;
//! let stats = differ.process("before.png", "after.png", "diff.png")?;
//!
//! println!("{} of {} pixels differ", stats.differing, stats.total);
//! # Ok(())
//! # }
//! ```

pub mod diff;
pub mod error;
pub mod image;

pub use diff::{difference, Config, Differ, DiffResult, DiffStats};
pub use error::{Error, Result};
