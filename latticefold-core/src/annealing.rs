use log::info;

use crate::energy::HPEnergy;
use crate::lattice_chain::LatticeChain;
use crate::mc_engine::{run_mmc, MmcParams};
use crate::rng::RngFacade;

/// Parameters of a full simulated-annealing run: a descending sequence of MMC invocations over
/// the same chain.
#[derive(Clone, Copy, Debug)]
pub struct AnnealingParams {
    pub temperature_steps: usize,
    pub iterations_per_step: usize,
    pub t_max: f64,
    pub t_min: f64,
    pub burn_in_fraction: f64,
    pub epsilon: f64,
    pub boltzmann_constant: f64,
    pub sampling_stride: usize,
    pub store_lowest: bool,
}

impl AnnealingParams {
    /// Creates parameters with `t_min = 0`, `burn_in_fraction = 0.1`, `boltzmann_constant = 1.0`,
    /// `sampling_stride = 1`, and lowest-energy tracking on.
    pub fn new(temperature_steps: usize, iterations_per_step: usize, t_max: f64, epsilon: f64) -> AnnealingParams {
        AnnealingParams {
            temperature_steps,
            iterations_per_step,
            t_max,
            t_min: 0.0,
            burn_in_fraction: 0.1,
            epsilon,
            boltzmann_constant: 1.0,
            sampling_stride: 1,
            store_lowest: true,
        }
    }

    fn temperature_at(&self, k: usize) -> f64 {
        self.t_max - ((self.t_max - self.t_min) / self.temperature_steps as f64) * k as f64
    }
}

/// Post-burn-in energy and radius-of-gyration traces collected at one annealing temperature.
#[derive(Clone, Debug)]
pub struct TemperatureStepSamples {
    pub temperature: f64,
    pub energy: Vec<f64>,
    pub gyration_radius: Vec<f64>,
}

/// Result of a full [`anneal`] run.
#[derive(Clone, Debug)]
pub struct AnnealingOutcome {
    pub lowest: Option<(LatticeChain, f64, f64)>,
    pub steps: Vec<TemperatureStepSamples>,
}

impl AnnealingOutcome {
    /// Maps every temperature step's post-burn-in energy trace through [`heat_capacity`].
    pub fn heat_capacity_curve(&self, k: f64) -> Vec<(f64, f64)> {
        self.steps.iter().map(|step| (step.temperature, heat_capacity(&step.energy, step.temperature, k))).collect()
    }
}

/// Computes `C(T) = (<E^2> - <E>^2) / (k * T)` over an energy trace sampled at a single
/// temperature. Returns `0.0` for an empty trace.
pub fn heat_capacity(energies: &[f64], temperature: f64, k: f64) -> f64 {
    if energies.is_empty() {
        return 0.0;
    }
    let n = energies.len() as f64;
    let mean = energies.iter().sum::<f64>() / n;
    let mean_sq = energies.iter().map(|e| e * e).sum::<f64>() / n;
    (mean_sq - mean * mean) / (k * temperature)
}

/// Runs a simulated-annealing schedule over `chain`, descending through `params.temperature_steps`
/// temperatures from `params.t_max` towards `params.t_min`.
///
/// At step `k`, one MMC run executes at `T_k = t_max - ((t_max - t_min) / steps) * k` on the
/// shared `chain`; the first `floor(burn_in_fraction * len)` entries of its sample trace are
/// dropped as thermalisation burn-in before the remainder is recorded. The globally lowest energy
/// conformation observed across all steps, and the temperature at which it occurred, are tracked
/// when `params.store_lowest` is set.
pub fn anneal(
    chain: &mut LatticeChain,
    energy: &HPEnergy,
    params: &AnnealingParams,
    rng: &mut RngFacade,
) -> AnnealingOutcome {
    let mut steps = Vec::with_capacity(params.temperature_steps);
    let mut lowest: Option<(LatticeChain, f64, f64)> = None;

    for k in 0..params.temperature_steps {
        let t_k = params.temperature_at(k);
        let mmc_params = MmcParams {
            temperature: t_k,
            epsilon: params.epsilon,
            boltzmann_constant: params.boltzmann_constant,
            n_iterations: params.iterations_per_step,
            sampling_stride: params.sampling_stride,
            store_lowest: params.store_lowest,
        };

        let outcome = run_mmc(chain, energy, &mmc_params, rng);

        if let Some((lowest_chain, lowest_energy)) = outcome.lowest {
            let is_new_global_minimum = match &lowest {
                Some((_, best_energy, _)) => lowest_energy < *best_energy,
                None => true,
            };
            if is_new_global_minimum {
                info!("step {k}: new global minimum E={lowest_energy:.4} at T={t_k:.4}");
                lowest = Some((lowest_chain, lowest_energy, t_k));
            }
        }

        let discard = (params.burn_in_fraction * outcome.samples.energy.len() as f64).floor() as usize;
        let discard = discard.min(outcome.samples.energy.len());
        let energy_trace = outcome.samples.energy[discard..].to_vec();
        let gyration_trace = outcome.samples.gyration_radius[discard..].to_vec();

        info!("step {k}: T={t_k:.4}, {} post-burn-in samples", energy_trace.len());
        steps.push(TemperatureStepSamples { temperature: t_k, energy: energy_trace, gyration_radius: gyration_trace });
    }

    AnnealingOutcome { lowest, steps }
}
