use rand::Rng;
use rayon::prelude::*;

use crate::bank::ParticleBank;
use crate::error::{Result, ShowerError};
use crate::fast_rng::FastRng;
use crate::grid::DepthGrid;
use crate::particle::{ParticleCall, Species};
use crate::physics::{transport, Interaction, PhysicsOptions};
use crate::sampler::Sampler;
use crate::settings::Settings;
use crate::stats::CascadeStats;

/// Drives a shower: follows every particle from the primary down, feeding the
/// depth grid, until no particle is left.
///
/// Pending particles live in a [`ParticleBank`] instead of on the call stack,
/// so arbitrarily deep cascades run in constant stack space.
#[derive(Debug)]
pub struct Cascade<R = FastRng> {
    grid: DepthGrid,
    sampler: Sampler<R>,
    options: PhysicsOptions,
    max_generation: Option<usize>,
    progress_interval: u64,
    stats: CascadeStats,
}

impl Cascade<FastRng> {
    /// Build the grid and generator described by `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Cascade seed: {}", seed);

        let grid = DepthGrid::new(settings.n_points, settings.depth_step())?;
        Ok(Cascade::new(grid, FastRng::new(seed))
            .with_options(settings.physics_options())
            .with_max_generation(settings.max_generation)
            .with_progress_interval(settings.progress_interval))
    }

    /// Run the shower described by `settings` and hand back the filled grid.
    pub fn run(settings: &Settings) -> Result<(DepthGrid, CascadeStats)> {
        let mut cascade = Cascade::from_settings(settings)?;
        let primary = settings.primary;
        if settings.parallel {
            cascade.simulate_parallel(primary.species, primary.depth, primary.energy)?;
        } else {
            cascade.simulate(primary.species, primary.depth, primary.energy)?;
        }
        Ok(cascade.into_parts())
    }
}

impl<R: Rng> Cascade<R> {
    pub fn new(grid: DepthGrid, rng: R) -> Self {
        Self {
            grid,
            sampler: Sampler::new(rng),
            options: PhysicsOptions::default(),
            max_generation: None,
            progress_interval: 100_000,
            stats: CascadeStats::new(),
        }
    }

    pub fn with_options(mut self, options: PhysicsOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_max_generation(mut self, max_generation: Option<usize>) -> Self {
        self.max_generation = max_generation;
        self
    }

    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn grid(&self) -> &DepthGrid {
        &self.grid
    }

    pub fn stats(&self) -> &CascadeStats {
        &self.stats
    }

    pub fn into_parts(self) -> (DepthGrid, CascadeStats) {
        (self.grid, self.stats)
    }

    /// Follow one particle to the end of its track and return what it spawned.
    ///
    /// The secondaries are not followed; [`Cascade::simulate`] does that.
    pub fn step(&mut self, call: &ParticleCall) -> Result<Interaction> {
        if let Some(limit) = self.max_generation {
            if call.generation > limit {
                return Err(ShowerError::GenerationLimit {
                    generation: call.generation,
                    limit,
                });
            }
        }

        let outcome = transport(call, &mut self.sampler, &mut self.grid, &self.options)?;
        self.stats.record(call, &outcome);

        if self.progress_interval > 0 && self.stats.particles_total % self.progress_interval == 0 {
            log::info!(
                "{:>12} particles, generation {:>4}",
                self.stats.particles_total,
                call.generation
            );
        }
        Ok(outcome)
    }

    /// Simulate a full shower from a single primary particle.
    pub fn simulate(&mut self, species: Species, depth: f64, energy: f64) -> Result<&CascadeStats> {
        log::info!(
            "Simulating {:?} primary at {} m with {:.3e} eV",
            species,
            depth,
            energy
        );
        self.simulate_call(ParticleCall::new(species, depth, energy, 1))?;
        log::info!(
            "Cascade finished: {} particles, max generation {}",
            self.stats.particles_total,
            self.stats.max_generation
        );
        Ok(&self.stats)
    }

    /// Follow `primary` and everything it spawns, depth first.
    pub fn simulate_call(&mut self, primary: ParticleCall) -> Result<()> {
        let mut bank = ParticleBank::new();
        bank.add_source_particle(primary);

        while let Some(call) = bank.pop_particle() {
            let outcome = self.step(&call)?;
            debug_assert!(outcome.end_depth >= call.depth);
            bank.bank_secondaries(outcome.secondaries);
        }

        self.stats.max_pending = self.stats.max_pending.max(bank.high_water());
        Ok(())
    }

    /// Simulate a shower with the primary's children followed in parallel.
    ///
    /// The primary is resolved on this cascade's stream. Child `i` then runs
    /// on its own `FastRng::stream(base, i)`, where `base` is one further
    /// draw from this stream, and fills its own grid. Grids and counters are
    /// merged in child order, so a fixed seed gives the same result on any
    /// number of threads. It is not the result of the sequential run.
    pub fn simulate_parallel(&mut self, species: Species, depth: f64, energy: f64) -> Result<&CascadeStats> {
        log::info!(
            "Simulating {:?} primary at {} m with {:.3e} eV on {} threads",
            species,
            depth,
            energy,
            rayon::current_num_threads()
        );

        let primary = ParticleCall::new(species, depth, energy, 1);
        let outcome = self.step(&primary)?;
        let base = self.sampler.rng_mut().next_u64();

        let n_points = self.grid.n_points();
        let depth_step = self.grid.depth_step();
        let options = self.options;
        let max_generation = self.max_generation;
        let progress_interval = self.progress_interval;

        let subtrees = outcome
            .secondaries
            .into_par_iter()
            .enumerate()
            .map(|(i, child)| -> Result<(DepthGrid, CascadeStats)> {
                let grid = DepthGrid::new(n_points, depth_step)?;
                let mut sub = Cascade::new(grid, FastRng::stream(base, i as u64))
                    .with_options(options)
                    .with_max_generation(max_generation)
                    .with_progress_interval(progress_interval);
                sub.simulate_call(child)?;
                Ok(sub.into_parts())
            })
            .collect::<Result<Vec<_>>>()?;

        for (grid, stats) in &subtrees {
            self.grid.merge(grid)?;
            self.stats.merge(stats);
        }

        log::info!(
            "Cascade finished: {} particles in {} subtrees, max generation {}",
            self.stats.particles_total,
            subtrees.len(),
            self.stats.max_generation
        );
        Ok(&self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Quantity;
    use crate::physics::Channel;

    fn cascade(seed: u64) -> Cascade {
        Cascade::new(DepthGrid::new(200, 50.0).unwrap(), FastRng::new(seed))
    }

    #[test]
    fn test_single_electron_below_threshold() {
        let mut c = cascade(1);
        let stats = c.simulate(Species::Electron, 0.0, 1e6).unwrap().clone();
        assert_eq!(stats.particles_total, 1);
        assert_eq!(stats.channel_count(Channel::Absorption), 1);
        assert!((c.grid().integral(Quantity::Ionization) - 1e6).abs() < 1e-3);
    }

    #[test]
    fn test_electromagnetic_cascade_conserves_deposited_energy() {
        // Nothing escapes a grid this deep, so every eV ends up as ionization.
        let mut c = Cascade::new(DepthGrid::new(1000, 1000.0).unwrap(), FastRng::new(9));
        c.simulate(Species::Photon, 0.0, 1e10).unwrap();
        let deposited = c.grid().integral(Quantity::Ionization);
        assert!((deposited - 1e10).abs() / 1e10 < 1e-9);
    }

    #[test]
    fn test_muon_cascade_counts() {
        let mut c = cascade(2);
        let stats = c.simulate(Species::Muon, 0.0, 1e8).unwrap();
        // muon -> neutrino + electron(5e7), the electron stops right away
        assert_eq!(stats.particles_total, 3);
        assert_eq!(stats.species_count(Species::Neutrino), 1);
        assert_eq!(stats.species_count(Species::Electron), 1);
        assert_eq!(stats.max_generation, 2);
    }

    #[test]
    fn test_step_does_not_follow_children() {
        let mut c = cascade(3);
        let call = ParticleCall::new(Species::Muon, 0.0, 1e9, 1);
        let out = c.step(&call).unwrap();
        assert_eq!(out.secondaries.len(), 2);
        assert_eq!(c.stats().particles_total, 1);
    }

    #[test]
    fn test_generation_limit() {
        let mut c = cascade(4).with_max_generation(Some(2));
        let err = c.simulate(Species::Photon, 0.0, 1e12).unwrap_err();
        assert!(matches!(err, ShowerError::GenerationLimit { generation: 3, limit: 2 }));
    }

    #[test]
    fn test_same_seed_same_grid() {
        let mut a = cascade(77);
        let mut b = cascade(77);
        a.simulate(Species::Pion, 0.0, 1e11).unwrap();
        b.simulate(Species::Pion, 0.0, 1e11).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.stats(), b.stats());
    }

    #[test]
    fn test_parallel_is_reproducible() {
        let mut a = cascade(5);
        let mut b = cascade(5);
        a.simulate_parallel(Species::Nucleus, 0.0, 1e11).unwrap();
        b.simulate_parallel(Species::Nucleus, 0.0, 1e11).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.stats(), b.stats());
        assert!(a.stats().particles_total > 1);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            n_points: 40,
            depth_total: 4000.0,
            seed: Some(11),
            ..Settings::default()
        };
        let c = Cascade::from_settings(&settings).unwrap();
        assert_eq!(c.grid().n_points(), 40);
        assert_eq!(c.grid().depth_step(), 100.0);
    }
}
