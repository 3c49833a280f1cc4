//! Fixed physical constants of the process models.
//!
//! Depths are meters, energies eV, times microseconds.

/// Speed of light, meters per microsecond
pub const C_M_PER_US: f64 = 299.792458;

/// Electron interaction length, meters
pub const EMAG_LAMBDA_INT: f64 = 3.039e4 * 1e-2;
/// Photon interaction length relative to the electron one
pub const PHOTON_LAMBDA_SCALE: f64 = 9.0 / 7.0;
/// Electromagnetic particles at or below this energy stop and ionize, eV
pub const EMAG_CRITICAL_ENERGY: f64 = 77e6;

/// Muon lifetime, microseconds
pub const MUON_TAU: f64 = 2.2;
/// Muon rest mass, eV
pub const MUON_MASS: f64 = 105.6e6;

/// Nucleus decay lifetime, microseconds
pub const NUCLEUS_TAU: f64 = 1e10;
/// Nucleus interaction length, meters
pub const NUCLEUS_LAMBDA_INT: f64 = 205e-2;
/// Mass scale of the nucleus time dilation, eV (the charged pion mass)
pub const NUCLEUS_MASS_SCALE: f64 = 139.6e6;
/// Pion/muon pairs produced by a nucleus interaction
pub const NUCLEUS_CHARGED_MULTIPLICITY: usize = 10;
/// Energy fraction of each pair taken by the pion
pub const NUCLEUS_PION_FRACTION: f64 = 0.9;
/// Energy fraction of each pair taken by the muon
pub const NUCLEUS_MUON_FRACTION: f64 = 0.1;

/// Charged pion lifetime, microseconds
pub const PION_TAU: f64 = 2.6033e-2;
/// Pion interaction length, meters
pub const PION_LAMBDA_INT: f64 = 7.477e4 * 1e-2;
/// Charged pion rest mass, eV
pub const PION_MASS: f64 = 139.6e6;
/// Charged pions produced by a pion interaction
pub const PION_CHARGED_MULTIPLICITY: usize = 10;
/// Neutral pions produced by a pion interaction, each seen as two photons
pub const PION_NEUTRAL_MULTIPLICITY: usize = 5;
