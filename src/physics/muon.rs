use rand::Rng;

use crate::constants::{MUON_MASS, MUON_TAU};
use crate::grid::DepthGrid;
use crate::particle::{ParticleCall, Species};
use crate::physics::{record_track, sample_decay_length, Channel, Interaction};
use crate::sampler::Sampler;

/// Follow a muon to its decay into a neutrino and an electron, each taking
/// half the energy.
pub fn muon<R: Rng>(call: &ParticleCall, sampler: &mut Sampler<R>, grid: &mut DepthGrid) -> Interaction {
    let decay = sample_decay_length(sampler, MUON_TAU, MUON_MASS, call.energy);
    let end_depth = call.depth + decay;

    record_track(grid, call, end_depth);

    let half = call.energy / 2.0;
    Interaction {
        end_depth,
        channel: Channel::Decay,
        secondaries: vec![
            call.child(Species::Neutrino, end_depth, half),
            call.child(Species::Electron, end_depth, half),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::C_M_PER_US;
    use crate::grid::Quantity;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_muon_decays_into_neutrino_and_electron() {
        let mut sampler = Sampler::new(StdRng::seed_from_u64(1));
        let mut grid = DepthGrid::new(300, 20000.0 / 300.0).unwrap();
        let call = ParticleCall::new(Species::Muon, 100.0, 4e9, 3);

        let out = muon(&call, &mut sampler, &mut grid);

        assert_eq!(out.channel, Channel::Decay);
        let species: Vec<Species> = out.secondaries.iter().map(|c| c.species).collect();
        assert_eq!(species, vec![Species::Neutrino, Species::Electron]);
        for child in &out.secondaries {
            assert_eq!(child.energy, 2e9);
            assert_eq!(child.generation, 4);
            assert_eq!(child.depth, out.end_depth);
        }
        assert!(out.end_depth >= call.depth);
        assert!(grid.integral(Quantity::Muons) > 0.0);
    }

    #[test]
    fn test_muon_mean_decay_length_is_dilated() {
        let mut sampler = Sampler::new(StdRng::seed_from_u64(2));
        let mut grid = DepthGrid::new(10, 1e9).unwrap();
        let energy = 1e9;
        let n = 20_000;
        let total: f64 = (0..n)
            .map(|_| {
                let call = ParticleCall::new(Species::Muon, 0.0, energy, 1);
                muon(&call, &mut sampler, &mut grid).end_depth
            })
            .sum();
        let expected = MUON_TAU * C_M_PER_US * energy / MUON_MASS;
        let mean = total / n as f64;
        assert!((mean - expected).abs() / expected < 0.05);
    }
}
