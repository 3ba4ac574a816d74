pub mod dirichlet;

/// Side of the rectangular domain. Also used to name the four faces of a cell,
/// since a cell face points towards the side of the same name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryPosition {
    West,
    East,
    South,
    North,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl BoundaryPosition {
    pub const ALL: [BoundaryPosition; 4] = [
        BoundaryPosition::West,
        BoundaryPosition::East,
        BoundaryPosition::South,
        BoundaryPosition::North,
    ];

    pub fn axis(self) -> Axis {
        match self {
            BoundaryPosition::West | BoundaryPosition::East => Axis::X,
            BoundaryPosition::South | BoundaryPosition::North => Axis::Y,
        }
    }

    /// West and south faces look upstream for a flow in the positive axis direction.
    pub fn is_lower(self) -> bool {
        matches!(self, BoundaryPosition::West | BoundaryPosition::South)
    }
}
