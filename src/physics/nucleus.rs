use rand::Rng;

use crate::constants::{
    NUCLEUS_CHARGED_MULTIPLICITY, NUCLEUS_LAMBDA_INT, NUCLEUS_MASS_SCALE, NUCLEUS_MUON_FRACTION,
    NUCLEUS_PION_FRACTION, NUCLEUS_TAU,
};
use crate::error::Result;
use crate::grid::DepthGrid;
use crate::particle::{ParticleCall, Species};
use crate::physics::{record_track, sample_decay_length, Channel, Interaction, Partition, PhysicsOptions};
use crate::sampler::Sampler;

/// Follow a nucleus.
///
/// Decay and interaction lengths are drawn in that order and the shorter one
/// wins. An interaction produces pion/muon pairs sharing the energy, 90% to
/// the pion of each pair; a decay splits the nucleus into two halves.
pub fn nucleus<R: Rng>(
    call: &ParticleCall,
    sampler: &mut Sampler<R>,
    grid: &mut DepthGrid,
    options: &PhysicsOptions,
) -> Result<Interaction> {
    let decay = sample_decay_length(sampler, NUCLEUS_TAU, NUCLEUS_MASS_SCALE, call.energy);
    let interaction = sampler.exponential(1.0 / NUCLEUS_LAMBDA_INT);
    let end_depth = call.depth + decay.min(interaction);

    record_track(grid, call, end_depth);

    if interaction < decay {
        let shares = match options.partition {
            Partition::Even => {
                vec![call.energy / NUCLEUS_CHARGED_MULTIPLICITY as f64; NUCLEUS_CHARGED_MULTIPLICITY]
            }
            Partition::Random => {
                sampler.partition(call.energy, NUCLEUS_CHARGED_MULTIPLICITY, options.max_partition)?
            }
        };

        let mut secondaries = Vec::with_capacity(2 * shares.len());
        for share in shares {
            secondaries.push(call.child(Species::Pion, end_depth, NUCLEUS_PION_FRACTION * share));
            secondaries.push(call.child(Species::Muon, end_depth, NUCLEUS_MUON_FRACTION * share));
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
                call.child(Species::Nucleus, end_depth, half),
                call.child(Species::Nucleus, end_depth, half),
            ],
        })
    }
}
