use ndarray::{Array1, Array2, ArrayView1};
use tracing::debug;

use crate::disc::boundary::BoundaryPosition;
use crate::error::{AssemblyError, Result};

/// Node indices lying on each side of the domain, in increasing order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridBoundaries {
    pub west: Vec<usize>,
    pub east: Vec<usize>,
    pub south: Vec<usize>,
    pub north: Vec<usize>,
}
impl GridBoundaries {
    pub fn nodes(&self, position: BoundaryPosition) -> &[usize] {
        match position {
            BoundaryPosition::West => &self.west,
            BoundaryPosition::East => &self.east,
            BoundaryPosition::South => &self.south,
            BoundaryPosition::North => &self.north,
        }
    }
}

/// Structured rectangular grid of `x_nodes * y_nodes` cell-centred nodes.
///
/// Nodes are numbered row by row with x varying fastest, so node `inode` lies
/// in row `inode / x_nodes` and column `inode % x_nodes`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StructuredMesh2d {
    pub x_nodes: usize,
    pub y_nodes: usize,
    pub node_num: usize,
}
impl StructuredMesh2d {
    pub fn new(x_nodes: usize, y_nodes: usize) -> Result<Self> {
        if x_nodes == 0 || y_nodes == 0 {
            return Err(AssemblyError::InvalidGrid { x_nodes, y_nodes });
        }
        Ok(Self {
            x_nodes,
            y_nodes,
            node_num: x_nodes * y_nodes,
        })
    }
    pub fn boundaries(&self) -> GridBoundaries {
        let (nx, ny) = (self.x_nodes, self.y_nodes);
        let south: Vec<usize> = (0..nx).collect();
        let north: Vec<usize> = (0..nx).map(|i| self.node_num - nx + i).collect();
        let west: Vec<usize> = (0..ny).map(|j| j * nx).collect();
        let east: Vec<usize> = (0..ny).map(|j| (j + 1) * nx - 1).collect();
        debug!(?west, ?east, ?south, ?north, "grid boundaries");
        GridBoundaries {
            west,
            east,
            south,
            north,
        }
    }
    /// Whether `inode` lies on the given side. Agrees with [`Self::boundaries`].
    pub fn is_on(&self, inode: usize, position: BoundaryPosition) -> bool {
        let nx = self.x_nodes;
        match position {
            BoundaryPosition::West => inode % nx == 0,
            BoundaryPosition::East => inode % nx == nx - 1,
            BoundaryPosition::South => inode < nx,
            BoundaryPosition::North => inode >= self.node_num - nx,
        }
    }
    /// Index of the node across the given face, `None` when the face lies on
    /// the domain boundary.
    pub fn neighbor(&self, inode: usize, face: BoundaryPosition) -> Option<usize> {
        if self.is_on(inode, face) {
            return None;
        }
        let nx = self.x_nodes;
        Some(match face {
            BoundaryPosition::West => inode - 1,
            BoundaryPosition::East => inode + 1,
            BoundaryPosition::South => inode - nx,
            BoundaryPosition::North => inode + nx,
        })
    }
    /// Cell-centre coordinates of every node for uniform cells of size `dx * dy`.
    /// The first centre sits at `(dx / 2, dy / 2)`.
    pub fn node_positions(&self, dx: f64, dy: f64) -> (Array1<f64>, Array1<f64>) {
        let nx = self.x_nodes;
        let x_pos =
            Array1::from_shape_fn(self.node_num, |inode| (0.5 + (inode % nx) as f64) * dx);
        let y_pos =
            Array1::from_shape_fn(self.node_num, |inode| (0.5 + (inode / nx) as f64) * dy);
        (x_pos, y_pos)
    }
    /// Lays a nodal vector out as a `(y_nodes, x_nodes)` array indexed `[row, col]`.
    pub fn reshape(&self, values: ArrayView1<f64>) -> Result<Array2<f64>> {
        AssemblyError::check_len("nodal values", self.node_num, values.len())?;
        let mut grid = Array2::<f64>::zeros((self.y_nodes, self.x_nodes));
        for (inode, &value) in values.iter().enumerate() {
            let (row, col) = (inode / self.x_nodes, inode % self.x_nodes);
            grid[[row, col]] = value;
        }
        Ok(grid)
    }
}
