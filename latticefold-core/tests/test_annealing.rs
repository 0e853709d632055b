use latticefold_core::{anneal, AnnealingParams, HPEnergy, Kind, LatticeChain, Monomer, RngFacade};

fn alternating_chain(n: usize) -> LatticeChain {
    let monomers: Vec<Monomer> =
        (0..n).map(|i| Monomer::new(if i % 2 == 0 { Kind::H } else { Kind::P }, i as i32, 0)).collect();
    LatticeChain::new(monomers).unwrap()
}

/// End-to-end scenario 6: N=25, K=25, M=15000, T_max=2.0, T_min=0.0. The heat-capacity curve must
/// be finite and non-negative everywhere, and its peak must fall at an interior temperature step
/// rather than at either end of the schedule.
#[test]
fn scenario_heat_capacity_curve_peaks_away_from_the_endpoints() {
    let mut chain = alternating_chain(25);
    let energy = HPEnergy::new(1.0);
    let params = AnnealingParams::new(25, 15_000, 2.0, 1.0);
    let mut rng = RngFacade::seeded(4242);

    let outcome = anneal(&mut chain, &energy, &params, &mut rng);
    let curve = outcome.heat_capacity_curve(1.0);
    assert_eq!(curve.len(), 25);

    for &(t, c) in &curve {
        assert!(t.is_finite());
        assert!(c.is_finite());
        assert!(c >= -1e-9);
    }

    let (peak_index, _) =
        curve.iter().enumerate().max_by(|(_, (_, a)), (_, (_, b))| a.partial_cmp(b).unwrap()).unwrap();
    assert!(peak_index > 0 && peak_index < curve.len() - 1, "heat capacity peak fell at a schedule endpoint");
}

#[test]
fn lowest_energy_conformation_is_tracked_across_steps() {
    let mut chain = alternating_chain(20);
    let energy = HPEnergy::new(1.0);
    let params = AnnealingParams::new(10, 2_000, 1.5, 1.0);
    let mut rng = RngFacade::seeded(17);

    let outcome = anneal(&mut chain, &energy, &params, &mut rng);
    let (lowest_chain, lowest_energy, _temperature) = outcome.lowest.expect("lowest conformation should be tracked");
    assert_eq!(lowest_chain.len(), 20);
    assert!(lowest_energy <= 0.0);
}
