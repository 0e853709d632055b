use std::fmt;

/// Hydrophobic or polar monomer kind in the HP lattice model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    H,
    P,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::H => write!(f, "H"),
            Kind::P => write!(f, "P"),
        }
    }
}

/// A single bead of a lattice chain: its kind and integer lattice position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Monomer {
    pub kind: Kind,
    pub x: i32,
    pub y: i32,
}

impl Monomer {
    pub fn new(kind: Kind, x: i32, y: i32) -> Monomer {
        Monomer { kind, x, y }
    }

    /// Returns this monomer's lattice coordinates as a tuple.
    pub fn xy(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
