use crate::grid::{DepthGrid, Quantity};
use crate::particle::ParticleCall;
use crate::physics::{Channel, Interaction};

/// Record a neutrino from its start depth to the far edge of the grid.
///
/// Neutrinos do not interact over the simulated range: no draw is taken and
/// nothing is spawned.
pub fn neutrino(call: &ParticleCall, grid: &mut DepthGrid) -> Interaction {
    let end_depth = call.depth + grid.depth_total();

    grid.trace(Quantity::Neutrinos, call.depth, end_depth, 1.0);
    grid.trace(Quantity::Particles, call.depth, end_depth, 1.0);

    Interaction {
        end_depth,
        channel: Channel::Escape,
        secondaries: Vec::new(),
    }
}
