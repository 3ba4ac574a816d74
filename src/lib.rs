pub mod disc;
pub mod error;
pub mod initialization;
pub mod io;

pub use disc::advection_diffusion2d::{
    LinearSystem, assemble, assemble_central_difference, assemble_upwind_difference,
};
pub use disc::boundary::{BoundaryPosition, dirichlet::DirichletBoundary};
pub use disc::csr::{CsrBuilder, CsrMatrix};
pub use disc::mesh::structured2d::{GridBoundaries, StructuredMesh2d};
pub use disc::scheme::{CentralDifference, ConvectionScheme, Diffusivity, UpwindDifference};
pub use disc::velocity_field::circular_velocity_field;
pub use error::{AssemblyError, Result};
