use std::{path::Path, str::FromStr};

use ndarray::Array1;
use tracing::Level;

use crate::{
    disc::{
        boundary::dirichlet::DirichletBoundary,
        mesh::structured2d::StructuredMesh2d,
        scheme::{Diffusivity, UpwindDifference},
        velocity_field::circular_velocity_field,
    },
    error::{AssemblyError, Result},
    io::param_parser::AssemblyParamParser,
};

/// Validated inputs for one assembly run.
#[derive(Clone, Debug)]
pub struct AssemblyParameters {
    pub mesh: StructuredMesh2d,
    pub diffusivity: Diffusivity,
    pub boundary: DirichletBoundary,
    pub x_length: f64,
    pub y_length: f64,
    pub dx: f64,
    pub dy: f64,
    pub flux_scale: f64,
    pub upwind: UpwindDifference,
    pub log_level: Level,
}
impl AssemblyParameters {
    pub fn from_parser(parser: AssemblyParamParser) -> Result<Self> {
        let mesh = StructuredMesh2d::new(parser.x_nodes, parser.y_nodes)?;
        let boundary = DirichletBoundary::from_slice(&parser.boundary)?;
        let upwind = if parser.consistent_north_source {
            UpwindDifference::with_consistent_north_source()
        } else {
            UpwindDifference::new()
        };
        let log_level =
            Level::from_str(&parser.log_level).map_err(|_| AssemblyError::InvalidLogLevel {
                value: parser.log_level.clone(),
            })?;
        Ok(Self {
            mesh,
            diffusivity: Diffusivity::new(parser.diffusivity[0], parser.diffusivity[1]),
            boundary,
            x_length: parser.x_length,
            y_length: parser.y_length,
            dx: parser.x_length / parser.x_nodes as f64,
            dy: parser.y_length / parser.y_nodes as f64,
            flux_scale: parser.flux_scale,
            upwind,
            log_level,
        })
    }
}

pub fn initialize_params_by_file(path: impl AsRef<Path>) -> Result<AssemblyParameters> {
    AssemblyParameters::from_parser(AssemblyParamParser::parse(path)?)
}
pub fn initialize_params_default() -> Result<AssemblyParameters> {
    AssemblyParameters::from_parser(AssemblyParamParser::default())
}
/// Rotating flow over the node centres, scaled into face fluxes `(F_x, F_y)`.
pub fn initialize_flux_field(params: &AssemblyParameters) -> Result<(Array1<f64>, Array1<f64>)> {
    let (x_pos, y_pos) = params.mesh.node_positions(params.dx, params.dy);
    let (u, v) =
        circular_velocity_field(x_pos.view(), y_pos.view(), params.x_length, params.y_length)?;
    Ok((u * params.flux_scale, v * params.flux_scale))
}
