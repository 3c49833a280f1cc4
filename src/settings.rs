use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShowerError};
use crate::physics::{Partition, PhysicsOptions};
use crate::source::PrimarySource;

/// Run parameters of one shower simulation.
///
/// Every field has a default, so a settings file only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of depth bins
    pub n_points: usize,
    /// Total depth covered by the grid, meters
    pub depth_total: f64,
    pub primary: PrimarySource,
    /// Generator seed; drawn from entropy when absent
    pub seed: Option<u64>,
    pub partition: Partition,
    /// Largest share count of a random partition
    pub max_partition: usize,
    /// Calls deeper than this generation abort the run; unlimited when absent
    pub max_generation: Option<usize>,
    /// Log progress every this many particle calls (0 disables)
    pub progress_interval: u64,
    /// Follow the primary's children on separate threads
    pub parallel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            n_points: 300,
            depth_total: 20000.0,
            primary: PrimarySource::default(),
            seed: None,
            partition: Partition::Even,
            max_partition: 20,
            max_generation: None,
            progress_interval: 100_000,
            parallel: false,
        }
    }
}

impl Settings {
    /// Width of one depth bin, meters.
    pub fn depth_step(&self) -> f64 {
        self.depth_total / self.n_points as f64
    }

    pub fn physics_options(&self) -> PhysicsOptions {
        PhysicsOptions {
            partition: self.partition,
            max_partition: self.max_partition,
        }
    }

    /// Read settings from a JSON file and validate them.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_points == 0 {
            return Err(ShowerError::InvalidSettings(
                "n_points must be positive".to_string(),
            ));
        }
        if !(self.depth_total > 0.0) || !self.depth_total.is_finite() {
            return Err(ShowerError::InvalidSettings(format!(
                "depth_total must be positive and finite, got {}",
                self.depth_total
            )));
        }
        if !(self.primary.depth >= 0.0) || !self.primary.depth.is_finite() {
            return Err(ShowerError::InvalidSettings(format!(
                "primary depth must be non-negative, got {}",
                self.primary.depth
            )));
        }
        // A nucleus at zero energy decays into two more at zero energy, forever.
        if !(self.primary.energy > 0.0) || !self.primary.energy.is_finite() {
            return Err(ShowerError::InvalidSettings(format!(
                "primary energy must be positive and finite, got {}",
                self.primary.energy
            )));
        }
        if self.max_partition == 0 {
            return Err(ShowerError::InvalidSettings(
                "max_partition must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
