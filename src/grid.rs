use serde::{Deserialize, Serialize};

use crate::error::{Result, ShowerError};

/// A per-bin quantity accumulated by the process models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Track density summed over all species
    Particles,
    Nuclei,
    Pions,
    Electrons,
    Photons,
    Muons,
    Neutrinos,
    /// Energy carried in flight, eV
    RemainingEnergy,
    /// Energy deposited as ionization, eV per meter
    Ionization,
}

impl Quantity {
    pub const COUNT: usize = 9;

    /// Every quantity, in output column order.
    pub const ALL: [Quantity; Quantity::COUNT] = [
        Quantity::Particles,
        Quantity::Nuclei,
        Quantity::Pions,
        Quantity::Electrons,
        Quantity::Photons,
        Quantity::Muons,
        Quantity::Neutrinos,
        Quantity::RemainingEnergy,
        Quantity::Ionization,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Quantity::Particles => "particles",
            Quantity::Nuclei => "nuclei",
            Quantity::Pions => "pions",
            Quantity::Electrons => "electrons",
            Quantity::Photons => "photons",
            Quantity::Muons => "muons",
            Quantity::Neutrinos => "neutrinos",
            Quantity::RemainingEnergy => "remaining_energy",
            Quantity::Ionization => "ionization",
        }
    }
}

/// Uniform 1-D depth grid covering `[0, n_points * depth_step)`.
///
/// Bin `i` holds depths `[i * depth_step, (i + 1) * depth_step)`. Anything
/// accumulated at or past the far edge is dropped without error: the particle
/// has left the simulated volume.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthGrid {
    n_points: usize,
    depth_step: f64,
    columns: Vec<Vec<f64>>,
}

impl DepthGrid {
    /// Zero-initialised grid. Both arguments must be positive.
    pub fn new(n_points: usize, depth_step: f64) -> Result<Self> {
        if n_points == 0 {
            return Err(ShowerError::InvalidGrid(
                "n_points must be positive".to_string(),
            ));
        }
        if !(depth_step > 0.0) || !depth_step.is_finite() {
            return Err(ShowerError::InvalidGrid(format!(
                "depth_step must be positive and finite, got {}",
                depth_step
            )));
        }
        Ok(Self {
            n_points,
            depth_step,
            columns: vec![vec![0.0; n_points]; Quantity::COUNT],
        })
    }

    /// Grid of `n_points` bins spanning `depth_total`.
    pub fn with_total_depth(n_points: usize, depth_total: f64) -> Result<Self> {
        if n_points == 0 {
            return Err(ShowerError::InvalidGrid(
                "n_points must be positive".to_string(),
            ));
        }
        Self::new(n_points, depth_total / n_points as f64)
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    pub fn depth_step(&self) -> f64 {
        self.depth_step
    }

    /// Exclusive upper bound of the grid, meters.
    pub fn depth_total(&self) -> f64 {
        self.depth_step * self.n_points as f64
    }

    /// Bin containing `depth`, or `None` outside `[0, depth_total)`.
    pub fn bin_index(&self, depth: f64) -> Option<usize> {
        if depth < 0.0 {
            return None;
        }
        let i = (depth / self.depth_step) as usize;
        (i < self.n_points).then_some(i)
    }

    /// Depth at the lower edge of bin `i`.
    pub fn depth_of(&self, i: usize) -> f64 {
        i as f64 * self.depth_step
    }

    pub fn column(&self, quantity: Quantity) -> &[f64] {
        &self.columns[quantity.index()]
    }

    /// Sum over bins times bin width: total energy for deposits, total
    /// path length for tracks.
    pub fn integral(&self, quantity: Quantity) -> f64 {
        self.column(quantity).iter().sum::<f64>() * self.depth_step
    }

    /// Add a point-like contribution at `depth`, stored as a density
    /// (`value / depth_step`).
    pub fn deposit(&mut self, quantity: Quantity, depth: f64, value: f64) {
        if let Some(i) = self.bin_index(depth) {
            self.columns[quantity.index()][i] += value / self.depth_step;
        }
    }

    /// Add `value` over the interval `[start, end)`.
    ///
    /// Whole bins between the two end bins receive `value`; the boundary bins
    /// receive the covered fraction of it. An interval reaching past either
    /// edge is clipped there; one lying wholly outside the grid is dropped.
    ///
    /// # Panics
    /// Panics if `start` falls in a later bin than `end`. Process models only
    /// ever move particles forward, so this is a logic error.
    pub fn trace(&mut self, quantity: Quantity, start: f64, end: f64, value: f64) {
        let start_norm = (start / self.depth_step).max(0.0);
        let mut end_norm = end / self.depth_step;

        let i_min = start_norm as usize;
        let mut i_max = end_norm as usize;

        if i_min > i_max {
            panic!(
                "trace: start bin {} lies after end bin {} (start {} m, end {} m)",
                i_min, i_max, start, end
            );
        }

        if i_min >= self.n_points || end_norm <= 0.0 {
            return;
        }

        if i_max >= self.n_points {
            i_max = self.n_points - 1;
            end_norm = self.n_points as f64;
        }

        let column = &mut self.columns[quantity.index()];
        for bin in &mut column[i_min..i_max] {
            *bin += value;
        }

        column[i_min] -= value * (start_norm - i_min as f64);
        column[i_max] += value * (end_norm - i_max as f64);
    }

    /// Add another grid of identical shape into this one, bin by bin.
    pub fn merge(&mut self, other: &DepthGrid) -> Result<()> {
        if other.n_points != self.n_points || other.depth_step != self.depth_step {
            return Err(ShowerError::InvalidGrid(format!(
                "cannot merge grid of {} x {} m into grid of {} x {} m",
                other.n_points, other.depth_step, self.n_points, self.depth_step
            )));
        }
        for (mine, theirs) in self.columns.iter_mut().zip(&other.columns) {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a += b;
            }
        }
        Ok(())
    }

}
