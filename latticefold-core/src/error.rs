use thiserror::Error;

/// Errors that may occur while assembling a [`crate::LatticeChain`] or generating a starting
/// conformation for one.
#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("initial chain is not self-avoiding: site ({0}, {1}) is occupied by more than one monomer")]
    NotSelfAvoiding(i32, i32),

    #[error("initial chain is broken between monomers {0} and {1}: they are not unit-distance neighbours")]
    BrokenBond(usize, usize),

    #[error("chain generation exhausted every backtracking option before reaching the requested length")]
    GenerationExhausted,
}
