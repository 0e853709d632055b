use latticefold_core::{Kind, LatticeChain, LatticeError, Monomer};

fn monomer(kind: Kind, x: i32, y: i32) -> Monomer {
    Monomer::new(kind, x, y)
}

#[test]
fn rejects_chains_that_are_not_self_avoiding() {
    let chain = vec![monomer(Kind::H, 0, 0), monomer(Kind::H, 1, 0), monomer(Kind::H, 0, 0)];
    assert!(matches!(LatticeChain::new(chain), Err(LatticeError::NotSelfAvoiding(0, 0))));
}

#[test]
fn rejects_chains_with_a_non_unit_bond() {
    let chain = vec![monomer(Kind::H, 0, 0), monomer(Kind::H, 1, 0), monomer(Kind::H, 3, 0)];
    assert!(matches!(LatticeChain::new(chain), Err(LatticeError::BrokenBond(1, 2))));
}

#[test]
fn every_site_round_trips_through_occupancy() {
    let chain = vec![
        monomer(Kind::H, 0, 0),
        monomer(Kind::P, 1, 0),
        monomer(Kind::H, 1, 1),
        monomer(Kind::P, 0, 1),
        monomer(Kind::H, 0, 2),
    ];
    let lattice = LatticeChain::new(chain).unwrap();

    assert_eq!(lattice.len(), 5);
    for (i, m) in lattice.chain().iter().enumerate() {
        assert_eq!(lattice.get(m.x, m.y), Some((i, m.kind)));
        assert!(lattice.has(m.x, m.y));
    }
    assert!(!lattice.has(100, 100));
}

#[test]
fn bonds_stay_manhattan_unit_length() {
    let chain = vec![
        monomer(Kind::H, 0, 0),
        monomer(Kind::P, 1, 0),
        monomer(Kind::H, 1, 1),
        monomer(Kind::P, 0, 1),
    ];
    let lattice = LatticeChain::new(chain).unwrap();
    for i in 0..lattice.len() - 1 {
        let a = lattice.monomer(i);
        let b = lattice.monomer(i + 1);
        assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1);
    }
}
