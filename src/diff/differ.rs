//! Orchestration: load both inputs, run the comparison, write the PNG.

use std::path::Path;

use crate::error::{Error, Result};
use crate::image::{load_pair, save_png};

use super::compare::difference;

/// Configuration for a comparison run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Per-channel difference threshold in 8-bit space (0-255). Channel
    /// differences at or below this value count as matching.
    pub threshold: u32,

    /// Mask mode: true renders a binary black/magenta visualization, false
    /// renders image B's pixel where differing and transparent black where
    /// matching.
    pub mask: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: 1,
            mask: true,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold does not fit the 8-bit input space.
    pub fn validate(&self) -> Result<()> {
        if self.threshold > 255 {
            return Err(Error::InvalidParameter {
                name: "threshold".to_string(),
                reason: "must be between 0 and 255".to_string(),
            });
        }

        Ok(())
    }
}

/// Per-run statistics reported alongside the output image.
#[derive(Debug, Clone, Copy)]
pub struct DiffStats {
    /// Number of pixels flagged as differing.
    pub differing: u64,
    /// Total number of pixels compared.
    pub total: u64,
}

impl DiffStats {
    /// Fraction of pixels that differ, in percent.
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.differing as f64 / self.total as f64 * 100.0
    }
}

/// Compares two image files and writes the diff visualization.
pub struct Differ {
    config: Config,
}

impl Differ {
    /// Create a new differ with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid. Validation happens
    /// here, before any file is touched.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Compare `first` against `second` and write the diff PNG to `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if either input cannot be loaded, the inputs have
    /// different bounds, or the output cannot be written.
    pub fn process<P, Q, R>(&self, first: P, second: Q, output: R) -> Result<DiffStats>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        R: AsRef<Path>,
    {
        let first = first.as_ref();
        let second = second.as_ref();
        let output = output.as_ref();

        tracing::debug!(
            "Comparing {} against {} (threshold {}, mask {})",
            first.display(),
            second.display(),
            self.config.threshold,
            self.config.mask
        );

        let (a, b) = load_pair(first, second)?;

        let result = difference(&a, &b, &self.config)?;
        let stats = DiffStats {
            differing: result.differing,
            total: u64::from(result.image.width()) * u64::from(result.image.height()),
        };

        tracing::debug!("Writing diff to {}", output.display());
        save_png(&result.image, output)?;

        tracing::info!("Comparison complete");

        Ok(stats)
    }
}
