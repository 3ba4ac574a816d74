use fv_assembly::{
    LinearSystem, assemble, assemble_central_difference,
    initialization::{self, AssemblyParameters},
};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

fn summarize(name: &str, system: &LinearSystem) {
    let diagonal = system.matrix.diagonal();
    let min_diag = diagonal.iter().copied().fold(f64::INFINITY, f64::min);
    // rows where some neighbour pulls with the wrong sign, i.e. the scheme is no longer bounded
    let unbounded_rows = (0..system.dim())
        .filter(|&irow| {
            system
                .matrix
                .row(irow)
                .any(|(icol, value)| icol != irow && value > 0.0)
        })
        .count();
    info!(
        scheme = name,
        dim = system.dim(),
        nnz = system.matrix.nnz(),
        min_diag,
        rhs_sum = system.rhs.sum(),
        "assembled system"
    );
    if unbounded_rows > 0 {
        warn!(
            scheme = name,
            unbounded_rows, "positive off-diagonal coefficients, Peclet number too high"
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params: AssemblyParameters = match std::env::args().nth(1) {
        Some(path) => initialization::initialize_params_by_file(path)?,
        None => initialization::initialize_params_default()?,
    };
    FmtSubscriber::builder()
        .with_max_level(params.log_level)
        .with_target(false)
        .init();
    info!(
        x_nodes = params.mesh.x_nodes,
        y_nodes = params.mesh.y_nodes,
        "building rotating-flow advection-diffusion system"
    );

    let (flux_x, flux_y) = initialization::initialize_flux_field(&params)?;
    let central = assemble_central_difference(
        &params.mesh,
        params.diffusivity,
        flux_x.view(),
        flux_y.view(),
        &params.boundary,
    )?;
    summarize("central", &central);
    let upwind = assemble(
        &params.mesh,
        params.diffusivity,
        flux_x.view(),
        flux_y.view(),
        &params.boundary,
        &params.upwind,
    )?;
    summarize("upwind", &upwind);

    let diag = params.mesh.reshape(upwind.matrix.diagonal().view())?;
    info!("upwind diagonal by row:\n{:.3}", diag);
    Ok(())
}
