use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{AssemblyError, Result};

fn default_log_level() -> String {
    "info".to_string()
}
fn default_flux_scale() -> f64 {
    1.0
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AssemblyParamParser {
    pub x_nodes: usize,
    pub y_nodes: usize,
    pub x_length: f64,
    pub y_length: f64,
    /// `[D_x, D_y]`
    pub diffusivity: [f64; 2],
    /// Dirichlet values ordered west, east, south, north.
    pub boundary: Vec<f64>,
    #[serde(default = "default_flux_scale")]
    pub flux_scale: f64,
    /// Scale the upwind north boundary source with `D_y` instead of `D_x`.
    #[serde(default)]
    pub consistent_north_source: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}
impl Default for AssemblyParamParser {
    fn default() -> Self {
        Self {
            x_nodes: 5,
            y_nodes: 5,
            x_length: 1.0,
            y_length: 1.0,
            diffusivity: [1.0, 1.0],
            boundary: vec![0.0, 0.0, 1.0, 0.0],
            flux_scale: default_flux_scale(),
            consistent_north_source: false,
            log_level: default_log_level(),
        }
    }
}
impl AssemblyParamParser {
    pub fn parse(file_path: impl AsRef<Path>) -> Result<Self> {
        let path = file_path.as_ref();
        let file_content = fs::read_to_string(path).map_err(|source| AssemblyError::ParamFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&file_content).map_err(|source| AssemblyError::ParamParse {
            path: path.to_path_buf(),
            source,
        })
    }
    pub fn parse_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}
