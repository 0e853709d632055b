use log::{debug, info, trace};

use latticefold_mc::{AcceptanceCriterion, AcceptanceStatistics, Energy, MetropolisCriterion};

use crate::energy::HPEnergy;
use crate::lattice_chain::LatticeChain;
use crate::moves::{endpoint_rotation, kink_jump, pivot, Direction, Part};
use crate::rng::RngFacade;

/// Parameters of a single Metropolis Monte Carlo run at a fixed temperature.
#[derive(Clone, Copy, Debug)]
pub struct MmcParams {
    pub temperature: f64,
    pub epsilon: f64,
    pub boltzmann_constant: f64,
    pub n_iterations: usize,
    pub sampling_stride: usize,
    pub store_lowest: bool,
}

impl MmcParams {
    /// Creates parameters with `boltzmann_constant = 1.0` and lowest-energy tracking off.
    pub fn new(temperature: f64, epsilon: f64, n_iterations: usize, sampling_stride: usize) -> MmcParams {
        MmcParams {
            temperature,
            epsilon,
            boltzmann_constant: 1.0,
            n_iterations,
            sampling_stride,
            store_lowest: false,
        }
    }
}

/// Energy and radius-of-gyration traces sampled every `sampling_stride` iterations of an MMC run,
/// plus one sample taken before the loop starts.
#[derive(Clone, Debug, Default)]
pub struct MmcSamples {
    pub energy: Vec<f64>,
    pub gyration_radius: Vec<f64>,
}

/// Result of a single [`run_mmc`] call.
#[derive(Clone, Debug)]
pub struct MmcOutcome {
    pub lowest: Option<(LatticeChain, f64)>,
    pub samples: MmcSamples,
    pub final_energy: f64,
    pub acceptance: AcceptanceStatistics,
}

/// Runs `params.n_iterations` Metropolis Monte Carlo steps on `chain`, mutating it in place.
///
/// Every iteration proposes a move - a kink jump or endpoint rotation if one can be found among a
/// shrinking set of untried indices, falling back to a pivot otherwise - evaluates the resulting
/// conformation's energy with `energy`, and accepts or rejects it through
/// [`MetropolisCriterion::check`]; a rejection is undone immediately, so the chain is restored
/// exactly. Every `params.sampling_stride` iterations (plus once before the loop starts), the
/// current energy and radius of gyration are appended to the returned traces.
///
/// All randomness is drawn from `rng` in a fixed sequence: two calls with the same seed and the
/// same parameters produce identical traces and final state.
pub fn run_mmc(
    chain: &mut LatticeChain,
    energy: &HPEnergy,
    params: &MmcParams,
    rng: &mut RngFacade,
) -> MmcOutcome {
    let mut criterion =
        MetropolisCriterion::with_boltzmann_constant(params.temperature, params.boltzmann_constant);
    let mut acceptance = AcceptanceStatistics::default();

    let mut current_energy = energy.energy(chain);
    let mut samples = MmcSamples::default();
    samples.energy.push(current_energy);
    samples.gyration_radius.push(chain.gyration_radius());

    let mut lowest: Option<(LatticeChain, f64)> =
        if params.store_lowest { Some((chain.clone(), current_energy)) } else { None };

    info!(
        "starting MMC run: T={:.4} eps={:.4} iterations={} stride={}",
        params.temperature, params.epsilon, params.n_iterations, params.sampling_stride
    );

    for step in 0..params.n_iterations {
        if propose_move(chain, rng) {
            let candidate_energy = energy.energy(chain);
            if criterion.check(current_energy, candidate_energy, rng) {
                current_energy = candidate_energy;
                acceptance.n_succ += 1;
                trace!("step {step}: accepted, E={current_energy:.4}");

                if params.store_lowest {
                    let is_new_minimum = match &lowest {
                        Some((_, lowest_e)) => current_energy < *lowest_e,
                        None => true,
                    };
                    if is_new_minimum {
                        lowest = Some((chain.clone(), current_energy));
                        debug!("step {step}: new lowest energy {current_energy:.4}");
                    }
                }
            } else {
                chain.undo_last_change();
                acceptance.n_failed += 1;
                trace!("step {step}: rejected, E unchanged at {current_energy:.4}");
            }
        } else {
            // every candidate index and every pivot draw failed in this iteration
            acceptance.n_failed += 1;
        }

        if (step + 1) % params.sampling_stride == 0 {
            samples.energy.push(current_energy);
            samples.gyration_radius.push(chain.gyration_radius());
        }
    }

    info!(
        "finished MMC run: final E={:.4}, acceptance rate={:.3}",
        current_energy,
        acceptance.success_rate()
    );

    MmcOutcome { lowest, samples, final_energy: current_energy, acceptance }
}

/// Proposes and applies one trial move: kink jump / endpoint rotation with probability 1/2,
/// pivot otherwise. Returns whether a move was actually applied to `chain`.
fn propose_move(chain: &mut LatticeChain, rng: &mut RngFacade) -> bool {
    if rng.uniform_index(2) == 0 {
        try_kink_or_endpoint(chain, rng) || try_pivot_until_success(chain, rng)
    } else {
        try_pivot_until_success(chain, rng)
    }
}

/// Tries kink jumps and endpoint rotations over a shrinking set of untried indices until one
/// succeeds or every index has failed.
fn try_kink_or_endpoint(chain: &mut LatticeChain, rng: &mut RngFacade) -> bool {
    let n = chain.len();
    let mut untried: Vec<usize> = (0..n).collect();

    while !untried.is_empty() {
        let pick = rng.uniform_index(untried.len());
        let idx = untried[pick];

        let succeeded =
            if idx == 0 || idx == n - 1 { endpoint_rotation(chain, idx) } else { kink_jump(chain, idx) };

        if succeeded {
            return true;
        }
        untried.swap_remove(pick);
    }
    false
}

/// Redraws a pivot (index, direction, part) until one succeeds. A pivot almost always succeeds on
/// the first try; this loop only protects against the rare empty-part or full-collision draw.
fn try_pivot_until_success(chain: &mut LatticeChain, rng: &mut RngFacade) -> bool {
    loop {
        let r = rng.uniform_index(chain.len());
        let direction = if rng.uniform_index(2) == 0 { Direction::Clockwise } else { Direction::CounterClockwise };
        let part = if rng.uniform_index(2) == 0 { Part::Left } else { Part::Right };
        if pivot(chain, r, direction, part) {
            return true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monomer::{Kind, Monomer};

    fn chain_of_length(n: usize, h_fraction_index_mod: usize) -> LatticeChain {
        let monomers: Vec<Monomer> = (0..n)
            .map(|i| {
                let kind = if i % h_fraction_index_mod == 0 { Kind::H } else { Kind::P };
                Monomer::new(kind, i as i32, 0)
            })
            .collect();
        LatticeChain::new(monomers).unwrap()
    }

    #[test]
    fn run_mmc_samples_have_expected_length() {
        let mut chain = chain_of_length(25, 2);
        let energy = HPEnergy::new(1.0);
        let params = MmcParams::new(0.25, 1.0, 10_000, 100);
        let mut rng = RngFacade::seeded(1234);

        let outcome = run_mmc(&mut chain, &energy, &params, &mut rng);
        assert_eq!(outcome.samples.energy.len(), 101);
        assert_eq!(outcome.samples.gyration_radius.len(), 101);
    }

    #[test]
    fn identical_seed_gives_identical_traces() {
        let params = MmcParams::new(0.5, 1.0, 2_000, 20);
        let energy = HPEnergy::new(1.0);

        let mut chain_a = chain_of_length(20, 3);
        let mut rng_a = RngFacade::seeded(77);
        let outcome_a = run_mmc(&mut chain_a, &energy, &params, &mut rng_a);

        let mut chain_b = chain_of_length(20, 3);
        let mut rng_b = RngFacade::seeded(77);
        let outcome_b = run_mmc(&mut chain_b, &energy, &params, &mut rng_b);

        assert_eq!(outcome_a.samples.energy, outcome_b.samples.energy);
        assert_eq!(outcome_a.samples.gyration_radius, outcome_b.samples.gyration_radius);
        assert_eq!(chain_a, chain_b);
    }

    #[test]
    fn invariants_hold_after_every_hundred_iterations() {
        let mut chain = chain_of_length(25, 2);
        let energy = HPEnergy::new(1.0);
        let mut rng = RngFacade::seeded(5);

        for _ in 0..500 {
            let params = MmcParams::new(0.5, 1.0, 100, 100);
            run_mmc(&mut chain, &energy, &params, &mut rng);

            assert_eq!(chain.len(), 25);
            for (i, m) in chain.chain().iter().enumerate() {
                assert_eq!(chain.get(m.x, m.y), Some((i, m.kind)));
            }
            for i in 0..chain.len() - 1 {
                let a = chain.monomer(i);
                let b = chain.monomer(i + 1);
                assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1);
            }
        }
    }

    #[test]
    fn final_energy_does_not_increase_at_low_temperature() {
        let mut chain = chain_of_length(25, 2);
        let energy = HPEnergy::new(1.0);
        let initial_energy = energy.energy(&chain);
        let params = MmcParams::new(0.25, 1.0, 10_000, 100);
        let mut rng = RngFacade::seeded(1234);

        let outcome = run_mmc(&mut chain, &energy, &params, &mut rng);
        assert!(outcome.final_energy <= initial_energy);
    }
}
