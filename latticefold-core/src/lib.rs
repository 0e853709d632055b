//! 2D HP-lattice chain representation, move generators, and the annealed Metropolis Monte Carlo
//! engine that folds it.
//!
//! This crate owns the lattice geometry ([`LatticeChain`]), the three move kinds that mutate it
//! ([`moves`]), the contact energy and radius of gyration ([`HPEnergy`]), the deterministic random
//! source shared across both ([`RngFacade`]), and the Metropolis loop plus its simulated-annealing
//! driver ([`run_mmc`], [`anneal`]), built on the system-agnostic acceptance framework in
//! `latticefold-mc`. It knows nothing about where an initial chain comes from or where sample
//! traces end up - those are the concerns of a caller such as the workspace's CLI binary.

mod annealing;
mod energy;
mod error;
mod lattice_chain;
mod mc_engine;
pub mod moves;
mod monomer;
mod rng;

pub use annealing::{anneal, heat_capacity, AnnealingOutcome, AnnealingParams, TemperatureStepSamples};
pub use energy::HPEnergy;
pub use error::LatticeError;
pub use lattice_chain::{LatticeChain, MoveRecord};
pub use mc_engine::{run_mmc, MmcOutcome, MmcParams, MmcSamples};
pub use monomer::{Kind, Monomer};
pub use rng::RngFacade;
