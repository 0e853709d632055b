//! System-agnostic Monte Carlo acceptance framework.
//!
//! This crate provides the small set of traits and types that any Metropolis-style Markov
//! chain Monte Carlo simulation needs, independent of what is being sampled: a way to score
//! a system ([`Energy`]), a way to decide whether a proposed change should be kept
//! ([`AcceptanceCriterion`], [`MetropolisCriterion`]), and a way to keep a running tally of how
//! often moves succeed ([`AcceptanceStatistics`]).
//!
//! Domain-specific simulation engines (move generators, sampling loops) live in the crates that
//! know what a "move" means for their system; this crate only knows about energies and
//! temperatures.

mod trait_energy;
mod trait_acceptance_criterion;
mod metropolis_criterion;
mod acceptance_statistics;

pub use trait_energy::*;
pub use trait_acceptance_criterion::*;
pub use metropolis_criterion::*;
pub use acceptance_statistics::*;
