use rand::Rng;

use crate::constants::{
    PION_CHARGED_MULTIPLICITY, PION_LAMBDA_INT, PION_MASS, PION_NEUTRAL_MULTIPLICITY, PION_TAU,
};
use crate::error::Result;
use crate::grid::DepthGrid;
use crate::particle::{ParticleCall, Species};
use crate::physics::{record_track, sample_decay_length, Channel, Interaction, Partition, PhysicsOptions};
use crate::sampler::Sampler;

/// Follow a charged pion.
///
/// Decay and interaction lengths are drawn in that order and the shorter one
/// wins. An interaction shares the energy over the charged and neutral pions
/// it produces; each neutral pion shows up as two photons of half its share.
/// A decay yields a neutrino and a muon at half energy each.
pub fn pion<R: Rng>(
    call: &ParticleCall,
    sampler: &mut Sampler<R>,
    grid: &mut DepthGrid,
    options: &PhysicsOptions,
) -> Result<Interaction> {
    let decay = sample_decay_length(sampler, PION_TAU, PION_MASS, call.energy);
    let interaction = sampler.exponential(1.0 / PION_LAMBDA_INT);
    let end_depth = call.depth + decay.min(interaction);

    record_track(grid, call, end_depth);

    if interaction < decay {
        let total = PION_CHARGED_MULTIPLICITY + PION_NEUTRAL_MULTIPLICITY;
        let shares = match options.partition {
            Partition::Even => vec![call.energy / total as f64; total],
            Partition::Random => sampler.partition(call.energy, total, options.max_partition)?,
        };
        let (charged, neutral) = shares.split_at(PION_CHARGED_MULTIPLICITY);

        let mut secondaries = Vec::with_capacity(PION_CHARGED_MULTIPLICITY + 2 * PION_NEUTRAL_MULTIPLICITY);
        for &share in charged {
            secondaries.push(call.child(Species::Pion, end_depth, share));
        }
        for &share in neutral {
            secondaries.push(call.child(Species::Photon, end_depth, share / 2.0));
            secondaries.push(call.child(Species::Photon, end_depth, share / 2.0));
        }
        Ok(Interaction {
            end_depth,
            channel: Channel::Interaction,
            secondaries,
        })
    } else {
        let half = call.energy / 2.0;
        Ok(Interaction {
            end_depth,
            channel: Channel::Decay,
            secondaries: vec![
                call.child(Species::Neutrino, end_depth, half),
                call.child(Species::Muon, end_depth, half),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Quantity;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid() -> DepthGrid {
        DepthGrid::new(300, 20000.0 / 300.0).unwrap()
    }

    #[test]
    fn test_pion_interaction_multiplicity() {
        // Time dilation at this energy pushes the decay length far beyond the
        // interaction length.
        let mut sampler = Sampler::new(StdRng::seed_from_u64(1));
        let mut grid = grid();
        let energy = 1.5e20;
        let call = ParticleCall::new(Species::Pion, 0.0, energy, 2);

        let out = pion(&call, &mut sampler, &mut grid, &PhysicsOptions::default()).unwrap();

        assert_eq!(out.channel, Channel::Interaction);
        let pions: Vec<&ParticleCall> = out.secondaries.iter().filter(|c| c.species == Species::Pion).collect();
        let photons: Vec<&ParticleCall> =
            out.secondaries.iter().filter(|c| c.species == Species::Photon).collect();
        assert_eq!(pions.len(), 10);
        assert_eq!(photons.len(), 10);
        assert!(pions.iter().all(|c| c.energy == energy / 15.0));
        assert!(photons.iter().all(|c| c.energy == energy / 15.0 / 2.0));
        assert!(out.secondaries.iter().all(|c| c.generation == 3 && c.depth == out.end_depth));
        assert!((out.secondary_energy() - energy).abs() / energy < 1e-12);
        assert!(grid.integral(Quantity::Pions) > 0.0);
    }

    #[test]
    fn test_pion_decay_into_neutrino_and_muon() {
        let mut sampler = Sampler::new(StdRng::seed_from_u64(2));
        let mut grid = grid();
        let call = ParticleCall::new(Species::Pion, 40.0, 1e6, 5);

        let out = pion(&call, &mut sampler, &mut grid, &PhysicsOptions::default()).unwrap();

        assert_eq!(out.channel, Channel::Decay);
        let species: Vec<Species> = out.secondaries.iter().map(|c| c.species).collect();
        assert_eq!(species, vec![Species::Neutrino, Species::Muon]);
        assert!(out.secondaries.iter().all(|c| c.energy == 5e5 && c.generation == 6));
        assert!(out.end_depth >= call.depth);
    }

    #[test]
    fn test_pion_random_partition_conserves_energy() {
        let mut sampler = Sampler::new(StdRng::seed_from_u64(3));
        let mut grid = grid();
        let options = PhysicsOptions {
            partition: Partition::Random,
            max_partition: 20,
        };
        let call = ParticleCall::new(Species::Pion, 0.0, 1.5e20, 1);

        let out = pion(&call, &mut sampler, &mut grid, &options).unwrap();

        assert_eq!(out.secondaries.len(), 20);
        assert!((out.secondary_energy() - 1.5e20).abs() / 1.5e20 < 1e-12);
        // Both photons of a neutral pion carry the same half share
        let photons: Vec<f64> = out.secondaries[10..].iter().map(|c| c.energy).collect();
        for pair in photons.chunks(2) {
            assert_eq!(pair[0], pair[1]);
        }
    }
}
