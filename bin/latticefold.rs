use std::collections::HashSet;
use std::env;

use clap::Parser;
use log::{error, info};

use latticefold_core::{
    anneal, AnnealingParams, HPEnergy, Kind, LatticeChain, LatticeError, Monomer, RngFacade,
};
use latticefold_mc::Energy;

#[derive(Parser, Debug)]
#[clap(name = "latticefold")]
#[clap(about = "Anneals a 2D HP-lattice protein chain by Metropolis Monte Carlo", long_about = None)]
struct Args {
    /// number of monomers in the chain
    #[clap(short = 'n', long, default_value_t = 25)]
    n_beads: usize,
    /// probability that a generated monomer is hydrophobic (H) rather than polar (P)
    #[clap(long, default_value_t = 0.5)]
    hydrophobicity: f64,
    /// interaction strength epsilon used by the H-H contact energy
    #[clap(short, long, default_value_t = 1.0)]
    epsilon: f64,
    /// Boltzmann constant used by the Metropolis acceptance criterion
    #[clap(long, default_value_t = 1.0)]
    boltzmann_constant: f64,
    /// number of temperature steps in the annealing schedule
    #[clap(short = 'k', long, default_value_t = 25)]
    temperature_steps: usize,
    /// MMC iterations run at each temperature step
    #[clap(short, long, default_value_t = 2000)]
    iterations_per_step: usize,
    /// highest temperature of the annealing schedule
    #[clap(long, default_value_t = 2.0)]
    t_max: f64,
    /// lowest temperature of the annealing schedule
    #[clap(long, default_value_t = 0.0)]
    t_min: f64,
    /// fraction of each temperature step's trace discarded as thermalisation burn-in
    #[clap(long, default_value_t = 0.1)]
    burn_in_fraction: f64,
    /// every how many MMC iterations a sample is recorded
    #[clap(short, long, default_value_t = 20)]
    sampling_stride: usize,
    /// track the lowest-energy conformation observed across the whole run
    #[clap(long, default_value_t = true)]
    store_lowest: bool,
    /// seed for the deterministic random source; omit for an OS-entropy seed
    #[clap(long)]
    seed: Option<u64>,
    /// prefix for output file names
    #[clap(long, default_value = "")]
    prefix: String,
}

/// Builds a self-avoiding chain of `n` monomers by a random walk with backtracking: a step that
/// walks into a fully enclosed dead end is undone and the site it came from is marked dead so it
/// is never retried.
fn generate_self_avoiding_chain(n: usize, hydrophobicity: f64, rng: &mut RngFacade) -> Result<Vec<Monomer>, LatticeError> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut chain: Vec<Monomer> = Vec::with_capacity(n);
    let mut occupied: HashSet<(i32, i32)> = HashSet::new();
    let mut dead: HashSet<(i32, i32)> = HashSet::new();

    chain.push(Monomer::new(draw_kind(hydrophobicity, rng), 0, 0));
    occupied.insert((0, 0));

    while chain.len() < n {
        let last = *chain.last().expect("chain is non-empty inside the loop");
        const OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        let mut candidates: Vec<(i32, i32)> = OFFSETS
            .iter()
            .map(|&(dx, dy)| (last.x + dx, last.y + dy))
            .filter(|site| !occupied.contains(site) && !dead.contains(site))
            .collect();

        if candidates.is_empty() {
            dead.insert((last.x, last.y));
            let removed = chain.pop().expect("chain is non-empty inside the loop");
            occupied.remove(&(removed.x, removed.y));
            if chain.is_empty() {
                return Err(LatticeError::GenerationExhausted);
            }
            continue;
        }

        let pick = rng.uniform_index(candidates.len());
        let (x, y) = candidates.swap_remove(pick);
        occupied.insert((x, y));
        chain.push(Monomer::new(draw_kind(hydrophobicity, rng), x, y));
    }

    Ok(chain)
}

fn draw_kind(hydrophobicity: f64, rng: &mut RngFacade) -> Kind {
    if rng.uniform_unit() < hydrophobicity { Kind::H } else { Kind::P }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => RngFacade::seeded(seed),
        None => RngFacade::from_entropy(),
    };

    let initial_chain = match generate_self_avoiding_chain(args.n_beads, args.hydrophobicity, &mut rng) {
        Ok(chain) => chain,
        Err(e) => {
            error!("could not generate a starting chain of {} monomers: {e}", args.n_beads);
            std::process::exit(1);
        }
    };

    let mut lattice = LatticeChain::new(initial_chain).expect("generated chain satisfies self-avoidance and bond-length invariants by construction");
    info!("generated a self-avoiding chain of {} monomers", lattice.len());

    let energy = HPEnergy::new(args.epsilon);

    let mut params = AnnealingParams::new(args.temperature_steps, args.iterations_per_step, args.t_max, args.epsilon);
    params.t_min = args.t_min;
    params.burn_in_fraction = args.burn_in_fraction;
    params.boltzmann_constant = args.boltzmann_constant;
    params.sampling_stride = args.sampling_stride;
    params.store_lowest = args.store_lowest;

    let outcome = anneal(&mut lattice, &energy, &params, &mut rng);

    let mut temperatures = Vec::with_capacity(outcome.steps.len());
    let mut mean_energies = Vec::with_capacity(outcome.steps.len());
    let mut mean_gyration_radii = Vec::with_capacity(outcome.steps.len());
    for step in &outcome.steps {
        temperatures.push(step.temperature);
        mean_energies.push(mean(&step.energy));
        mean_gyration_radii.push(mean(&step.gyration_radius));
    }

    let trace_fname = format!("{}_trace.tsv", &args.prefix);
    latticefold_io::write_table(
        &trace_fname,
        &["temperature", "mean_energy", "mean_gyration_radius"],
        &[temperatures, mean_energies, mean_gyration_radii],
    )
    .expect("failed to write the per-temperature sample trace");

    let (cv_temperatures, cv_values): (Vec<f64>, Vec<f64>) =
        outcome.heat_capacity_curve(args.boltzmann_constant).into_iter().unzip();
    let cv_fname = format!("{}_heat_capacity.tsv", &args.prefix);
    latticefold_io::write_table(&cv_fname, &["temperature", "heat_capacity"], &[cv_temperatures, cv_values])
        .expect("failed to write the heat capacity curve");

    if let Some((_, lowest_energy, lowest_temperature)) = &outcome.lowest {
        info!("lowest energy observed: {lowest_energy:.4} at T={lowest_temperature:.4}");
    }
    info!("final conformation energy: {:.4}", energy.energy(&lattice));
}
