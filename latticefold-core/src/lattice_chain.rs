use std::collections::HashMap;

use crate::error::LatticeError;
use crate::monomer::{Kind, Monomer};

/// Records a single monomer's displacement so that [`LatticeChain::undo_last_change`] can reverse
/// it exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub index: usize,
    pub old_xy: (i32, i32),
    pub new_xy: (i32, i32),
}

/// A self-avoiding chain of monomers on the 2D integer lattice, with O(1) coordinate lookups.
///
/// Bond connectivity is implicit in list order: monomer `i` is bonded to `i - 1` and `i + 1`.
/// `occupancy` is the inverse of `chain`, mapping every occupied site to the index of the monomer
/// sitting there; a site absent from the map is unoccupied. Only the most recent structural change
/// is retained for undo - this is not a history stack, since the engine never nests speculative
/// moves.
#[derive(Clone, Debug, PartialEq)]
pub struct LatticeChain {
    chain: Vec<Monomer>,
    occupancy: HashMap<(i32, i32), usize>,
    undo: Vec<MoveRecord>,
}

impl LatticeChain {
    /// Builds a lattice chain from an initial self-avoiding, unit-bonded sequence of monomers.
    ///
    /// Fails if two monomers share a site ([`LatticeError::NotSelfAvoiding`]) or if consecutive
    /// monomers are not Manhattan-distance 1 apart ([`LatticeError::BrokenBond`]).
    pub fn new(chain: Vec<Monomer>) -> Result<LatticeChain, LatticeError> {
        let n = chain.len();
        let mut occupancy = HashMap::with_capacity(n);
        for (i, m) in chain.iter().enumerate() {
            if occupancy.insert(m.xy(), i).is_some() {
                return Err(LatticeError::NotSelfAvoiding(m.x, m.y));
            }
        }
        for i in 0..n.saturating_sub(1) {
            let a = &chain[i];
            let b = &chain[i + 1];
            if (a.x - b.x).abs() + (a.y - b.y).abs() != 1 {
                return Err(LatticeError::BrokenBond(i, i + 1));
            }
        }
        Ok(LatticeChain { chain, occupancy, undo: Vec::new() })
    }

    /// Chain length N.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether the chain has no monomers.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Looks up the monomer occupying `(x, y)`, if any.
    pub fn get(&self, x: i32, y: i32) -> Option<(usize, Kind)> {
        self.occupancy.get(&(x, y)).map(|&i| (i, self.chain[i].kind))
    }

    /// Whether any monomer occupies `(x, y)`.
    pub fn has(&self, x: i32, y: i32) -> bool {
        self.occupancy.contains_key(&(x, y))
    }

    /// Returns the occupied axis neighbours of `(x, y)`, in the fixed order +x, -x, +y, -y.
    pub fn neighbours(&self, x: i32, y: i32) -> Vec<(usize, Kind)> {
        const OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        OFFSETS.iter().filter_map(|&(dx, dy)| self.get(x + dx, y + dy)).collect()
    }

    /// Read access to monomer `i`.
    pub fn monomer(&self, i: usize) -> &Monomer {
        &self.chain[i]
    }

    /// Read access to the whole chain, in bond order.
    pub fn chain(&self) -> &[Monomer] {
        &self.chain
    }

    /// Moves monomer `i` to `(x, y)`, overwriting the undo record with this single change.
    ///
    /// # Panics
    /// Panics if `(x, y)` is already occupied.
    pub fn move_monomer(&mut self, i: usize, x: i32, y: i32) {
        assert!(!self.has(x, y), "move_monomer target site ({x}, {y}) is already occupied");

        let old_xy = self.chain[i].xy();
        self.occupancy.remove(&old_xy);
        self.chain[i].x = x;
        self.chain[i].y = y;
        self.occupancy.insert((x, y), i);
        self.undo = vec![MoveRecord { index: i, old_xy, new_xy: (x, y) }];
    }

    /// Atomically moves several monomers at once, overwriting the undo record with the whole
    /// batch.
    ///
    /// All old sites are vacated before any new site is claimed, so a monomer may move onto the
    /// vacated site of another monomer in the same batch - as a pivot does.
    pub fn move_monomers(&mut self, moves: &[(usize, (i32, i32))]) {
        let records: Vec<MoveRecord> = moves
            .iter()
            .map(|&(index, new_xy)| MoveRecord { index, old_xy: self.chain[index].xy(), new_xy })
            .collect();

        for record in &records {
            self.occupancy.remove(&record.old_xy);
        }
        for record in &records {
            let m = &mut self.chain[record.index];
            m.x = record.new_xy.0;
            m.y = record.new_xy.1;
            self.occupancy.insert(record.new_xy, record.index);
        }
        self.undo = records;
    }

    /// Reverses the most recent [`move_monomer`](Self::move_monomer) or
    /// [`move_monomers`](Self::move_monomers) call exactly, then clears the undo record.
    ///
    /// # Panics
    /// Panics if no move is currently recorded.
    pub fn undo_last_change(&mut self) {
        assert!(!self.undo.is_empty(), "undo_last_change called with no recorded move");
        let records = std::mem::take(&mut self.undo);

        for record in &records {
            self.occupancy.remove(&record.new_xy);
        }
        for record in &records {
            let m = &mut self.chain[record.index];
            m.x = record.old_xy.0;
            m.y = record.old_xy.1;
            self.occupancy.insert(record.old_xy, record.index);
        }
    }

    /// The bounding-box centre `((minx+maxx)/2, (miny+maxy)/2)` of the current conformation.
    pub fn bounding_box_center(&self) -> (f64, f64) {
        let (mut minx, mut maxx) = (i32::MAX, i32::MIN);
        let (mut miny, mut maxy) = (i32::MAX, i32::MIN);
        for m in &self.chain {
            minx = minx.min(m.x);
            maxx = maxx.max(m.x);
            miny = miny.min(m.y);
            maxy = maxy.max(m.y);
        }
        ((minx as f64 + maxx as f64) / 2.0, (miny as f64 + maxy as f64) / 2.0)
    }

    /// Radius of gyration about the bounding-box centre.
    ///
    /// Carries an extra `1/N` factor beyond the textbook `1/N` already inside the sum - a
    /// deliberately preserved deviation, not a defect.
    pub fn gyration_radius(&self) -> f64 {
        let (cx, cy) = self.bounding_box_center();
        let n = self.chain.len() as f64;
        let sum_sq: f64 = self
            .chain
            .iter()
            .map(|m| {
                let dx = m.x as f64 - cx;
                let dy = m.y as f64 - cy;
                dx * dx + dy * dy
            })
            .sum();
        (sum_sq / (n * n)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_chain() -> LatticeChain {
        let chain = vec![
            Monomer::new(Kind::H, 0, 0),
            Monomer::new(Kind::P, 1, 0),
            Monomer::new(Kind::P, 2, 0),
            Monomer::new(Kind::H, 3, 0),
        ];
        LatticeChain::new(chain).unwrap()
    }

    #[test]
    fn new_rejects_overlapping_chain() {
        let chain = vec![Monomer::new(Kind::H, 0, 0), Monomer::new(Kind::H, 0, 0)];
        assert!(matches!(LatticeChain::new(chain), Err(LatticeError::NotSelfAvoiding(0, 0))));
    }

    #[test]
    fn new_rejects_broken_bond() {
        let chain = vec![Monomer::new(Kind::H, 0, 0), Monomer::new(Kind::H, 2, 0)];
        assert!(matches!(LatticeChain::new(chain), Err(LatticeError::BrokenBond(0, 1))));
    }

    #[test]
    fn occupancy_matches_chain_positions() {
        let lattice = straight_chain();
        for (i, m) in lattice.chain().iter().enumerate() {
            assert_eq!(lattice.get(m.x, m.y), Some((i, m.kind)));
        }
        assert_eq!(lattice.occupancy.len(), lattice.len());
    }

    #[test]
    fn neighbours_returns_fixed_axis_order() {
        let lattice = straight_chain();
        let found = lattice.neighbours(1, 0);
        // (2,0) is +x of (1,0) and exists; (0,0) is -x of (1,0) and exists; no +y/-y neighbours
        assert_eq!(found, vec![(2, Kind::P), (0, Kind::H)]);
    }

    #[test]
    fn move_then_undo_restores_exact_state() {
        let mut lattice = straight_chain();
        let before = lattice.clone();
        lattice.move_monomer(0, 0, 1);
        assert_ne!(lattice, before);
        lattice.undo_last_change();
        assert_eq!(lattice, before);
    }

    #[test]
    #[should_panic]
    fn move_onto_occupied_site_panics() {
        let mut lattice = straight_chain();
        lattice.move_monomer(0, 1, 0);
    }

    #[test]
    #[should_panic]
    fn undo_with_no_recorded_move_panics() {
        let mut lattice = straight_chain();
        lattice.undo_last_change();
    }

    #[test]
    fn move_monomers_batches_overlapping_swap() {
        // Two adjacent monomers swap sites - impossible one at a time without the batch API.
        let chain = vec![
            Monomer::new(Kind::H, 0, 0),
            Monomer::new(Kind::H, 1, 0),
            Monomer::new(Kind::H, 1, 1),
            Monomer::new(Kind::H, 0, 1),
        ];
        let mut lattice = LatticeChain::new(chain).unwrap();
        lattice.move_monomers(&[(0, (1, 1)), (2, (0, 0))]);
        assert_eq!(lattice.get(1, 1), Some((0, Kind::H)));
        assert_eq!(lattice.get(0, 0), Some((2, Kind::H)));
        lattice.undo_last_change();
        assert_eq!(lattice.get(0, 0), Some((0, Kind::H)));
        assert_eq!(lattice.get(1, 1), Some((2, Kind::H)));
    }

    #[test]
    fn gyration_radius_is_translation_invariant() {
        let lattice = straight_chain();
        let shifted = LatticeChain::new(
            lattice.chain().iter().map(|m| Monomer::new(m.kind, m.x + 5, m.y - 3)).collect(),
        )
        .unwrap();
        assert!((lattice.gyration_radius() - shifted.gyration_radius()).abs() < 1e-12);
    }
}
