use serde::{Deserialize, Serialize};

use crate::grid::Quantity;

/// Particle species followed by the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Nucleus,
    Pion,
    Muon,
    Electron,
    Photon,
    Neutrino,
}

impl Species {
    pub const COUNT: usize = 6;

    pub const ALL: [Species; Species::COUNT] = [
        Species::Nucleus,
        Species::Pion,
        Species::Muon,
        Species::Electron,
        Species::Photon,
        Species::Neutrino,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Grid column holding this species' track density.
    pub fn quantity(self) -> Quantity {
        match self {
            Species::Nucleus => Quantity::Nuclei,
            Species::Pion => Quantity::Pions,
            Species::Muon => Quantity::Muons,
            Species::Electron => Quantity::Electrons,
            Species::Photon => Quantity::Photons,
            Species::Neutrino => Quantity::Neutrinos,
        }
    }

    pub fn is_electromagnetic(self) -> bool {
        matches!(self, Species::Electron | Species::Photon)
    }
}

/// One pending particle of the cascade: where it starts, what it carries and
/// how many branchings separate it from the primary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleCall {
    pub species: Species,
    /// Start depth, meters
    pub depth: f64,
    /// Energy, eV
    pub energy: f64,
    /// Primary is generation 1
    pub generation: usize,
}

impl ParticleCall {
    pub fn new(species: Species, depth: f64, energy: f64, generation: usize) -> Self {
        Self {
            species,
            depth,
            energy,
            generation,
        }
    }

    /// A child of this call starting at `depth`, one generation further down.
    pub fn child(&self, species: Species, depth: f64, energy: f64) -> Self {
        Self::new(species, depth, energy, self.generation + 1)
    }
}
