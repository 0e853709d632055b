//! Move generators over a [`LatticeChain`]: kink jump, endpoint rotation, and pivot.
//!
//! Each function takes a `&mut LatticeChain` directly so it can be unit-tested without an RNG or
//! a Monte Carlo engine in the loop; the engine in [`crate::mc_engine`] is the only caller that
//! wires these up to random draws.

use std::collections::HashSet;

use crate::lattice_chain::LatticeChain;

/// Rotation direction for a [`pivot`] move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// Which arm of the chain a [`pivot`] rotates, relative to the pivot index `r`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    /// Monomers `[0, r)`.
    Left,
    /// Monomers `(r, len-1]`.
    Right,
}

/// Attempts a kink jump at interior index `i`.
///
/// Succeeds, and leaves exactly one undo record, iff monomers `i-1`, `i`, `i+1` form an "L"
/// corner (their two bonds lie on perpendicular axes) and the diagonally opposite site - the
/// fourth corner of that unit square - is unoccupied.
///
/// # Panics
/// Panics if `i` is not an interior index.
pub fn kink_jump(chain: &mut LatticeChain, i: usize) -> bool {
    let n = chain.len();
    assert!(i > 0 && i + 1 < n, "kink_jump requires an interior index, got {i} for a chain of length {n}");

    let prev = *chain.monomer(i - 1);
    let cur = *chain.monomer(i);
    let next = *chain.monomer(i + 1);

    if prev.x == next.x || prev.y == next.y {
        return false; // straight segment, not an "L"
    }

    let (cx, cy) = (prev.x + next.x - cur.x, prev.y + next.y - cur.y);
    if chain.has(cx, cy) {
        return false;
    }

    chain.move_monomer(i, cx, cy);
    true
}

/// Attempts an endpoint rotation at index `i`, which must be `0` or `chain.len() - 1`.
///
/// The endpoint's sole bonded neighbour `p` stays fixed; the two admissible destinations are `p`'s
/// axis-perpendicular neighbours relative to the current bond direction (the neighbour the
/// endpoint already occupies, and the one collinear with it on the far side of `p`, are both
/// excluded). Candidates are tried in a fixed order; the move succeeds at the first unoccupied
/// one.
///
/// # Panics
/// Panics if `i` is not an endpoint index.
pub fn endpoint_rotation(chain: &mut LatticeChain, i: usize) -> bool {
    let n = chain.len();
    assert!(i == 0 || i == n - 1, "endpoint_rotation requires an endpoint index, got {i} for a chain of length {n}");

    let p_index = if i == 0 { 1 } else { n - 2 };
    let p = *chain.monomer(p_index);
    let cur = *chain.monomer(i);
    let (dx, dy) = (cur.x - p.x, cur.y - p.y);

    let candidates: [(i32, i32); 2] =
        if dx != 0 { [(p.x, p.y + 1), (p.x, p.y - 1)] } else { [(p.x + 1, p.y), (p.x - 1, p.y)] };

    for &(cx, cy) in &candidates {
        if !chain.has(cx, cy) {
            chain.move_monomer(i, cx, cy);
            return true;
        }
    }
    false
}

/// Rigidly rotates one arm of the chain by +/-90 degrees about pivot index `r`.
///
/// `part` selects monomers strictly left of `r` ([`Part::Left`]) or strictly right of `r`
/// ([`Part::Right`]); the pivot monomer itself never moves. Succeeds iff the selected part is
/// non-empty and none of its rotated monomers lands on a site occupied by a monomer outside the
/// rotated batch - a monomer landing on another rotated monomer's *old* site is fine, since the
/// whole batch moves atomically.
///
/// # Panics
/// Panics if `r >= chain.len()`.
pub fn pivot(chain: &mut LatticeChain, r: usize, direction: Direction, part: Part) -> bool {
    let n = chain.len();
    assert!(r < n, "pivot index {r} out of range for a chain of length {n}");

    let indices: Vec<usize> = match part {
        Part::Left => (0..r).collect(),
        Part::Right => (r + 1..n).collect(),
    };
    if indices.is_empty() {
        return false;
    }

    let pivot_site = *chain.monomer(r);
    let s: i32 = match direction {
        Direction::Clockwise => -1,
        Direction::CounterClockwise => 1,
    };

    let moves: Vec<(usize, (i32, i32))> = indices
        .iter()
        .map(|&m_idx| {
            let m = chain.monomer(m_idx);
            let (dx, dy) = (m.x - pivot_site.x, m.y - pivot_site.y);
            (m_idx, (pivot_site.x - s * dy, pivot_site.y + s * dx))
        })
        .collect();

    let batch: HashSet<usize> = indices.into_iter().collect();
    for &(_, (nx, ny)) in &moves {
        if let Some((occupant, _)) = chain.get(nx, ny) {
            if !batch.contains(&occupant) {
                return false;
            }
        }
    }

    chain.move_monomers(&moves);
    true
}
