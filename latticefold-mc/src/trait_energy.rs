/// Defines the way a system's energy is evaluated in a Monte Carlo simulation.
///
/// A type implementing `Energy<S>` knows how to score a system of type `S` as a single scalar;
/// it carries whatever constants (interaction strengths, cutoffs) its evaluation needs.
pub trait Energy<S> {
    /// Evaluates the total energy of a given system.
    fn energy(&self, system: &S) -> f64;

    /// Returns the name of this energy function, e.g. to label a sample column.
    fn name(&self) -> String;
}
