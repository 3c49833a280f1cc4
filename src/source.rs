use serde::{Deserialize, Serialize};

use crate::particle::{ParticleCall, Species};

/// The single primary particle that starts a shower.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimarySource {
    pub species: Species,
    /// Injection depth, meters
    pub depth: f64,
    /// Energy, eV
    pub energy: f64,
}

impl PrimarySource {
    pub fn new(species: Species, depth: f64, energy: f64) -> Self {
        Self {
            species,
            depth,
            energy,
        }
    }

    /// The generation-1 call the cascade starts from.
    pub fn sample(&self) -> ParticleCall {
        ParticleCall::new(self.species, self.depth, self.energy, 1)
    }
}

impl Default for PrimarySource {
    /// A 1 PeV nucleus injected at the top of the medium.
    fn default() -> Self {
        Self::new(Species::Nucleus, 0.0, 1e15)
    }
}
