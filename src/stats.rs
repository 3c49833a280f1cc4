use std::fmt;

use serde::Serialize;

use crate::particle::{ParticleCall, Species};
use crate::physics::{Channel, Interaction};

/// Diagnostic counters of a cascade. None of these feed back into the physics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CascadeStats {
    /// Particle calls processed
    pub particles_total: u64,
    /// Calls processed per species, indexed by `Species::index`
    pub per_species: [u64; Species::COUNT],
    /// Track endings per channel, indexed by `Channel::index`
    pub per_channel: [u64; Channel::COUNT],
    /// Deepest generation reached; the primary is generation 1
    pub max_generation: usize,
    /// Most particles waiting in the bank at once
    pub max_pending: usize,
}

impl CascadeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one processed call and how it ended.
    pub fn record(&mut self, call: &ParticleCall, outcome: &Interaction) {
        self.particles_total += 1;
        self.per_species[call.species.index()] += 1;
        self.per_channel[outcome.channel.index()] += 1;
        self.max_generation = self.max_generation.max(call.generation);
    }

    pub fn species_count(&self, species: Species) -> u64 {
        self.per_species[species.index()]
    }

    pub fn channel_count(&self, channel: Channel) -> u64 {
        self.per_channel[channel.index()]
    }

    /// Fold in the counters of an independently processed subtree.
    pub fn merge(&mut self, other: &CascadeStats) {
        self.particles_total += other.particles_total;
        for (a, b) in self.per_species.iter_mut().zip(other.per_species) {
            *a += b;
        }
        for (a, b) in self.per_channel.iter_mut().zip(other.per_channel) {
            *a += b;
        }
        self.max_generation = self.max_generation.max(other.max_generation);
        self.max_pending = self.max_pending.max(other.max_pending);
    }
}

impl fmt::Display for CascadeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Particles processed: {}", self.particles_total)?;
        for species in Species::ALL {
            writeln!(f, "  {:?}: {}", species, self.species_count(species))?;
        }
        writeln!(f, "  Max generation: {}", self.max_generation)?;
        write!(f, "  Max pending: {}", self.max_pending)
    }
}
