use rand::RngCore;

/// Acceptance criterion for a Markov chain Monte Carlo.
///
/// `AcceptanceCriterion` returns `true` or `false` when a Markov chain Monte Carlo move
/// from energy `energy_before` to `energy_after` should be accepted or not, respectively.
///
/// The random draw a criterion needs is taken from the caller-supplied `rng` rather than from
/// a generator owned by the criterion itself, so that a whole simulation can be driven from a
/// single seeded random stream shared by move proposal and move acceptance alike.
pub trait AcceptanceCriterion {
    fn check(&mut self, energy_before: f64, energy_after: f64, rng: &mut dyn RngCore) -> bool;
}
