use ndarray::{Array1, ArrayView1, Zip};

use crate::error::{AssemblyError, Result};

/// Rigid rotation about the centre of a `x_length * y_length` domain,
/// returned as `(u, v)` per node.
///
/// With `r` the distance to the centre and `theta = atan2(dy, dx)`,
/// `u = -r sin(theta)` and `v = r cos(theta)`. A node exactly at the centre
/// gets `r = 0` and therefore zero velocity, whatever `atan2(0, 0)` returns.
pub fn circular_velocity_field(
    x_pos: ArrayView1<f64>,
    y_pos: ArrayView1<f64>,
    x_length: f64,
    y_length: f64,
) -> Result<(Array1<f64>, Array1<f64>)> {
    AssemblyError::check_len("y_pos", x_pos.len(), y_pos.len())?;
    let (xc, yc) = (0.5 * x_length, 0.5 * y_length);
    let mut u = Array1::<f64>::zeros(x_pos.len());
    let mut v = Array1::<f64>::zeros(x_pos.len());
    Zip::from(&mut u)
        .and(&mut v)
        .and(&x_pos)
        .and(&y_pos)
        .for_each(|u, v, &x, &y| {
            let (dx, dy) = (x - xc, y - yc);
            let r = dx.hypot(dy);
            let theta = dy.atan2(dx);
            *u = -r * theta.sin();
            *v = r * theta.cos();
        });
    Ok((u, v))
}
