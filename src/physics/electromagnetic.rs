use rand::Rng;

use crate::constants::{EMAG_CRITICAL_ENERGY, EMAG_LAMBDA_INT, PHOTON_LAMBDA_SCALE};
use crate::grid::{DepthGrid, Quantity};
use crate::particle::{ParticleCall, Species};
use crate::physics::{record_track, Channel, Interaction};
use crate::sampler::Sampler;

/// Interaction length of an electron or photon, meters.
pub fn interaction_length(species: Species) -> f64 {
    if species == Species::Photon {
        EMAG_LAMBDA_INT * PHOTON_LAMBDA_SCALE
    } else {
        EMAG_LAMBDA_INT
    }
}

/// Follow an electron or photon.
///
/// Above the critical energy it splits in two at half energy: a photon into
/// two electrons, an electron into a photon and an electron. At or below it
/// the whole energy is deposited as ionization where the track ends.
pub fn electromagnetic<R: Rng>(
    call: &ParticleCall,
    sampler: &mut Sampler<R>,
    grid: &mut DepthGrid,
) -> Interaction {
    debug_assert!(call.species.is_electromagnetic());

    let length = sampler.exponential(1.0 / interaction_length(call.species));
    let end_depth = call.depth + length;

    record_track(grid, call, end_depth);

    if call.energy > EMAG_CRITICAL_ENERGY {
        let half = call.energy / 2.0;
        let first = match call.species {
            Species::Photon => Species::Electron,
            _ => Species::Photon,
        };
        Interaction {
            end_depth,
            channel: Channel::Interaction,
            secondaries: vec![
                call.child(first, end_depth, half),
                call.child(Species::Electron, end_depth, half),
            ],
        }
    } else {
        grid.deposit(Quantity::Ionization, end_depth, call.energy);
        Interaction {
            end_depth,
            channel: Channel::Absorption,
            secondaries: Vec::new(),
        }
    }
}
