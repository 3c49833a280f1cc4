use std::fmt;

use serde::Serialize;

use crate::grid::{DepthGrid, Quantity};

/// One depth bin of a finished shower, in output column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShowerRow {
    /// Lower edge of the bin, meters
    pub depth: f64,
    pub particles: f64,
    pub nuclei: f64,
    pub pions: f64,
    pub electrons: f64,
    pub photons: f64,
    pub muons: f64,
    pub neutrinos: f64,
    pub remaining_energy: f64,
    pub ionization: f64,
}

/// Per-bin tabulation of a grid, ready for printing or serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowerTable {
    pub depth_step: f64,
    pub rows: Vec<ShowerRow>,
}

impl ShowerTable {
    pub fn new(grid: &DepthGrid) -> Self {
        let at = |q: Quantity, i: usize| grid.column(q)[i];
        let rows = (0..grid.n_points())
            .map(|i| ShowerRow {
                depth: grid.depth_of(i),
                particles: at(Quantity::Particles, i),
                nuclei: at(Quantity::Nuclei, i),
                pions: at(Quantity::Pions, i),
                electrons: at(Quantity::Electrons, i),
                photons: at(Quantity::Photons, i),
                muons: at(Quantity::Muons, i),
                neutrinos: at(Quantity::Neutrinos, i),
                remaining_energy: at(Quantity::RemainingEnergy, i),
                ionization: at(Quantity::Ionization, i),
            })
            .collect();
        Self {
            depth_step: grid.depth_step(),
            rows,
        }
    }

    /// Tab-separated column names matching the `Display` rows.
    pub fn header() -> String {
        let mut names = vec!["depth"];
        names.extend(Quantity::ALL.iter().map(|q| q.name()));
        names.join("\t")
    }
}

impl fmt::Display for ShowerRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.depth,
            self.particles,
            self.nuclei,
            self.pions,
            self.electrons,
            self.photons,
            self.muons,
            self.neutrinos,
            self.remaining_energy,
            self.ionization
        )
    }
}

impl fmt::Display for ShowerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
