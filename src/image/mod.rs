//! Image loading and saving utilities.

mod load;
mod save;

pub use load::{load_image, load_pair};
pub use save::save_png;
