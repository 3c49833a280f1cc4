// Process models, one per species.
//
// Each model draws its lengths from the shared sampler, records the particle's
// track over [depth, end_depth) and returns the secondaries it spawns at
// end_depth. The driver decides what to do with them.
pub mod electromagnetic;
pub mod muon;
pub mod neutrino;
pub mod nucleus;
pub mod pion;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::{DepthGrid, Quantity};
use crate::particle::{ParticleCall, Species};
use crate::sampler::Sampler;

pub use electromagnetic::electromagnetic;
pub use muon::muon;
pub use neutrino::neutrino;
pub use nucleus::nucleus;
pub use pion::pion;

/// How a multi-particle interaction shares energy among its products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    /// Fixed equal shares, no extra draws
    #[default]
    Even,
    /// Exponentially weighted random shares drawn after the length draws
    Random,
}

/// Model switches taken from the run settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsOptions {
    pub partition: Partition,
    /// Largest share count a random partition may request
    pub max_partition: usize,
}

impl Default for PhysicsOptions {
    fn default() -> Self {
        Self {
            partition: Partition::Even,
            max_partition: 20,
        }
    }
}

/// Which way a particle's life ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Interaction length won (or electromagnetic splitting)
    Interaction,
    /// Decay length won
    Decay,
    /// Stopped below the critical energy and ionized
    Absorption,
    /// Left the grid without interacting
    Escape,
}

impl Channel {
    pub const COUNT: usize = 4;

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Result of following one particle to the end of its track.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub end_depth: f64,
    pub channel: Channel,
    /// Children in the order they are to be followed
    pub secondaries: Vec<ParticleCall>,
}

impl Interaction {
    /// Energy handed on to the secondaries.
    pub fn secondary_energy(&self) -> f64 {
        self.secondaries.iter().map(|p| p.energy).sum()
    }
}

/// Record presence and energy in flight of `call` over `[call.depth, end_depth)`.
pub(crate) fn record_track(grid: &mut DepthGrid, call: &ParticleCall, end_depth: f64) {
    grid.trace(Quantity::RemainingEnergy, call.depth, end_depth, call.energy);
    grid.trace(call.species.quantity(), call.depth, end_depth, 1.0);
    grid.trace(Quantity::Particles, call.depth, end_depth, 1.0);
}

/// Decay length of a particle with lifetime `tau` and rest mass `mass`,
/// dilated by `energy / mass`. One draw.
pub(crate) fn sample_decay_length<R: Rng>(
    sampler: &mut Sampler<R>,
    tau: f64,
    mass: f64,
    energy: f64,
) -> f64 {
    sampler.exponential(1.0 / tau) * crate::constants::C_M_PER_US * energy / mass
}

/// Follow one particle with the model for its species.
pub fn transport<R: Rng>(
    call: &ParticleCall,
    sampler: &mut Sampler<R>,
    grid: &mut DepthGrid,
    options: &PhysicsOptions,
) -> Result<Interaction> {
    match call.species {
        Species::Electron | Species::Photon => Ok(electromagnetic(call, sampler, grid)),
        Species::Muon => Ok(muon(call, sampler, grid)),
        Species::Neutrino => Ok(neutrino(call, grid)),
        Species::Nucleus => nucleus(call, sampler, grid, options),
        Species::Pion => pion(call, sampler, grid, options),
    }
}
