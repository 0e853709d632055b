use rand::{Rng, RngCore};

use crate::trait_acceptance_criterion::AcceptanceCriterion;

/// Classical Metropolis acceptance criterion.
///
/// A change of a system is accepted with probability `$P$`:
/// ```math
/// P(E_b \to E_a) = \begin{cases}\begin{align*}
///     1 &  \quad \text{when} \quad E_a \le E_b \\
///     e^{-\Delta E / (k T)} &  \quad \text{otherwise}
/// \end{align*}\end{cases}
/// ```
/// where `$\Delta E = E_a - E_b$`, `$T$` is the temperature and `$k$` is the Boltzmann constant
/// (kept as an explicit field rather than folded into `T`, since callers may want to report a
/// temperature in its own physical units). This criterion, used in an isothermal Monte Carlo
/// simulation, results in an NVT ensemble.
#[derive(Clone, Debug)]
pub struct MetropolisCriterion {
    pub temperature: f64,
    pub boltzmann_constant: f64,
}

impl MetropolisCriterion {
    /// Creates a new acceptance criterion for the Boltzmann distribution at the given temperature,
    /// with the Boltzmann constant set to `1.0`.
    pub fn new(temperature: f64) -> MetropolisCriterion {
        MetropolisCriterion { temperature, boltzmann_constant: 1.0 }
    }

    /// Creates a new acceptance criterion with an explicit Boltzmann constant.
    pub fn with_boltzmann_constant(temperature: f64, boltzmann_constant: f64) -> MetropolisCriterion {
        MetropolisCriterion { temperature, boltzmann_constant }
    }
}

impl AcceptanceCriterion for MetropolisCriterion {
    fn check(&mut self, energy_before: f64, energy_after: f64, rng: &mut dyn RngCore) -> bool {
        if energy_after < energy_before {
            return true;
        }
        let delta_e = energy_after - energy_before;
        let w = (-delta_e / (self.boltzmann_constant * self.temperature)).exp();
        let u: f64 = rng.gen_range(0.0..1.0);
        w > u
    }
}
