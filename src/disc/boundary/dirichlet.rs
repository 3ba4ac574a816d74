use crate::disc::boundary::BoundaryPosition;
use crate::error::{AssemblyError, Result};

/// Fixed field values imposed uniformly along each side of the domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirichletBoundary {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
}
impl DirichletBoundary {
    pub fn new(west: f64, east: f64, south: f64, north: f64) -> Self {
        Self {
            west,
            east,
            south,
            north,
        }
    }
    /// Builds the boundary from values ordered `[west, east, south, north]`.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [west, east, south, north] => Ok(Self::new(west, east, south, north)),
            _ => Err(AssemblyError::InvalidBoundary {
                count: values.len(),
            }),
        }
    }
    pub fn value(&self, position: BoundaryPosition) -> f64 {
        match position {
            BoundaryPosition::West => self.west,
            BoundaryPosition::East => self.east,
            BoundaryPosition::South => self.south,
            BoundaryPosition::North => self.north,
        }
    }
}
