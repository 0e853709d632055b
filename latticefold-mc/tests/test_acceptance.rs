use latticefold_mc::{AcceptanceCriterion, AcceptanceStatistics, MetropolisCriterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn acceptance_statistics_tracks_recent_window() {
    let mut stats = AcceptanceStatistics::default();
    stats.n_succ = 3;
    stats.n_failed = 1;
    let before = stats.clone();
    stats.n_succ += 2;
    stats.n_failed += 2;
    assert_eq!(stats.success_rate(), 5.0 / 8.0);
    assert_eq!(stats.recent_success_rate(&before), 2.0 / 4.0);
}

#[test]
fn empty_statistics_report_zero_rate() {
    let stats = AcceptanceStatistics::default();
    assert_eq!(stats.success_rate(), 0.0);
}

#[test]
fn lower_temperature_rejects_uphill_moves_more_often() {
    let mut cold = MetropolisCriterion::new(0.01);
    let mut hot = MetropolisCriterion::new(100.0);
    let mut rng = SmallRng::seed_from_u64(99);

    let mut cold_accepts = 0;
    let mut hot_accepts = 0;
    for _ in 0..200 {
        if cold.check(0.0, 1.0, &mut rng) {
            cold_accepts += 1;
        }
        if hot.check(0.0, 1.0, &mut rng) {
            hot_accepts += 1;
        }
    }
    assert!(cold_accepts < hot_accepts);
}
