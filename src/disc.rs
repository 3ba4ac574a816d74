pub mod advection_diffusion2d;
pub mod boundary;
pub mod csr;
pub mod mesh;
pub mod scheme;
pub mod velocity_field;
