use crate::disc::boundary::{Axis, BoundaryPosition};

/// Diffusion coefficients along each axis, uniform over the domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Diffusivity {
    pub x: f64,
    pub y: f64,
}
impl Diffusivity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub fn along(&self, face: BoundaryPosition) -> f64 {
        match face.axis() {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Face coefficients of a finite-volume convection-diffusion scheme.
///
/// `face` names the side of the cell the coefficient belongs to. For interior
/// faces `flux` is the flux stored at the neighbouring node; for boundary faces
/// it is the flux stored at the node itself.
pub trait ConvectionScheme {
    fn name(&self) -> &'static str;
    /// Coefficient linking a node to its neighbour across an interior face.
    fn neighbor_coeff(&self, face: BoundaryPosition, diffusivity: f64, flux: f64) -> f64;
    /// Coefficient of a half cell against a Dirichlet boundary face. The node's
    /// diagonal grows by this amount.
    fn boundary_coeff(&self, face: BoundaryPosition, diffusivity: f64, flux: f64) -> f64;
    /// Multiplier of the boundary value added to the right-hand side.
    fn boundary_source_coeff(
        &self,
        face: BoundaryPosition,
        diffusivity: &Diffusivity,
        flux: f64,
    ) -> f64 {
        self.boundary_coeff(face, diffusivity.along(face), flux)
    }
}

/// Central differencing: face values are the average of the two adjacent nodes.
#[derive(Clone, Copy, Debug, Default)]
pub struct CentralDifference;

impl ConvectionScheme for CentralDifference {
    fn name(&self) -> &'static str {
        "central difference"
    }
    fn neighbor_coeff(&self, face: BoundaryPosition, diffusivity: f64, flux: f64) -> f64 {
        if face.is_lower() {
            diffusivity + 0.5 * flux
        } else {
            diffusivity - 0.5 * flux
        }
    }
    fn boundary_coeff(&self, face: BoundaryPosition, diffusivity: f64, flux: f64) -> f64 {
        if face.is_lower() {
            2.0 * diffusivity + flux
        } else {
            2.0 * diffusivity - flux
        }
    }
}

/// Upwind differencing: the face takes the value of the upstream node, so no
/// coefficient can drop below its diffusive part.
///
/// Known discrepancy: by default the north boundary source is scaled with
/// `2 D_x` while the diagonal uses `2 D_y`, matching the established results of
/// this assembly. The two disagree whenever `D_x != D_y`.
/// [`UpwindDifference::with_consistent_north_source`] uses `D_y` for both.
#[derive(Clone, Copy, Debug, Default)]
pub struct UpwindDifference {
    consistent_north_source: bool,
}
impl UpwindDifference {
    pub fn new() -> Self {
        Self::default()
    }
    /// Scales the north boundary source with `D_y`, so a uniform field with
    /// matching boundary values has zero residual for any diffusivity.
    pub fn with_consistent_north_source() -> Self {
        Self {
            consistent_north_source: true,
        }
    }
    pub fn consistent_north_source(&self) -> bool {
        self.consistent_north_source
    }
    fn upstream_part(face: BoundaryPosition, flux: f64) -> f64 {
        if face.is_lower() {
            flux.max(0.0)
        } else {
            (-flux).max(0.0)
        }
    }
}

impl ConvectionScheme for UpwindDifference {
    fn name(&self) -> &'static str {
        "upwind difference"
    }
    fn neighbor_coeff(&self, face: BoundaryPosition, diffusivity: f64, flux: f64) -> f64 {
        diffusivity + Self::upstream_part(face, flux)
    }
    fn boundary_coeff(&self, face: BoundaryPosition, diffusivity: f64, flux: f64) -> f64 {
        2.0 * diffusivity + Self::upstream_part(face, flux)
    }
    fn boundary_source_coeff(
        &self,
        face: BoundaryPosition,
        diffusivity: &Diffusivity,
        flux: f64,
    ) -> f64 {
        if !self.consistent_north_source && face == BoundaryPosition::North {
            self.boundary_coeff(face, diffusivity.x, flux)
        } else {
            self.boundary_coeff(face, diffusivity.along(face), flux)
        }
    }
}
