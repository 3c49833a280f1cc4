//! Longitudinal air shower simulation.
//!
//! A primary particle enters a medium split into depth bins. Each particle is
//! followed by the process model of its species, which samples how far it gets,
//! records its track on the [`DepthGrid`] and hands back the particles it
//! spawns. The [`Cascade`] keeps following spawned particles until none are
//! left; the grid then holds per-bin track densities for every species, the
//! energy still in flight and the energy deposited as ionization.
pub mod bank;
pub mod cascade;
pub mod constants;
pub mod error;
pub mod fast_rng;
pub mod grid;
pub mod particle;
pub mod physics;
pub mod sampler;
pub mod settings;
pub mod source;
pub mod stats;
pub mod tally;

pub use cascade::Cascade;
pub use error::{Result, ShowerError};
pub use fast_rng::FastRng;
pub use grid::{DepthGrid, Quantity};
pub use particle::{ParticleCall, Species};
pub use physics::{Channel, Interaction, Partition, PhysicsOptions};
pub use sampler::Sampler;
pub use settings::Settings;
pub use source::PrimarySource;
pub use stats::CascadeStats;
pub use tally::ShowerTable;
