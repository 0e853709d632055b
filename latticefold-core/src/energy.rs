use latticefold_mc::Energy;

use crate::lattice_chain::LatticeChain;
use crate::monomer::Kind;

/// H-H contact energy for a 2D HP-lattice chain: `E = -epsilon * f`, where `f` is the number of
/// non-bonded H-H pairs occupying adjacent lattice sites.
///
/// Bonded neighbours (consecutive monomers in the chain) are excluded from `f`, the conventional
/// definition of the HP model's contact energy.
#[derive(Clone, Copy, Debug)]
pub struct HPEnergy {
    pub epsilon: f64,
}

impl HPEnergy {
    pub fn new(epsilon: f64) -> HPEnergy {
        HPEnergy { epsilon }
    }

    /// Counts non-bonded H-H contacts in `chain`, in O(N).
    pub fn contact_count(&self, chain: &LatticeChain) -> usize {
        let mut total = 0usize;
        for (i, m) in chain.chain().iter().enumerate() {
            if m.kind != Kind::H {
                continue;
            }
            for (j, neighbour_kind) in chain.neighbours(m.x, m.y) {
                if neighbour_kind != Kind::H {
                    continue;
                }
                let bonded = j + 1 == i || i + 1 == j;
                if !bonded {
                    total += 1;
                }
            }
        }
        total / 2 // every contact was counted once from each endpoint
    }
}

impl Energy<LatticeChain> for HPEnergy {
    fn energy(&self, system: &LatticeChain) -> f64 {
        -self.epsilon * self.contact_count(system) as f64
    }

    fn name(&self) -> String {
        String::from("HPEnergy")
    }
}
