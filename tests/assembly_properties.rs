use fv_assembly::{
    BoundaryPosition, Diffusivity, DirichletBoundary, StructuredMesh2d,
    assemble_central_difference, assemble_upwind_difference,
};
use ndarray::{Array1, Array2};
use proptest::collection::vec;
use proptest::prelude::*;

fn grid() -> impl Strategy<Value = (usize, usize)> {
    (1usize..12, 1usize..12)
}

/// Dense node-by-node assembly written against explicit boundary index lists,
/// with the north boundary source of the upwind scheme scaled by `D_x`.
fn dense_reference(
    nx: usize,
    ny: usize,
    d: (f64, f64),
    fx: &[f64],
    fy: &[f64],
    bnd: [f64; 4],
    upwind: bool,
) -> (Array2<f64>, Array1<f64>) {
    let dim = nx * ny;
    let (dx, dy) = d;
    let [phi_w, phi_e, phi_s, phi_n] = bnd;
    let south: Vec<usize> = (0..nx).collect();
    let north: Vec<usize> = (0..nx).map(|i| dim - nx + i).collect();
    let west: Vec<usize> = (0..ny).map(|j| j * nx).collect();
    let east: Vec<usize> = (0..ny).map(|j| (j + 1) * nx - 1).collect();
    let pos = |f: f64| f.max(0.0);
    let mut a = Array2::<f64>::zeros((dim, dim));
    let mut b = Array1::<f64>::zeros(dim);
    for i in 0..dim {
        if !west.contains(&i) {
            let aw = if upwind { dx + pos(fx[i - 1]) } else { dx + fx[i - 1] / 2.0 };
            a[[i, i - 1]] -= aw;
            a[[i, i]] += aw;
        }
        if !east.contains(&i) {
            let ae = if upwind { dx + pos(-fx[i + 1]) } else { dx - fx[i + 1] / 2.0 };
            a[[i, i + 1]] -= ae;
            a[[i, i]] += ae;
        }
        if !south.contains(&i) {
            let a_s = if upwind { dy + pos(fy[i - nx]) } else { dy + fy[i - nx] / 2.0 };
            a[[i, i - nx]] -= a_s;
            a[[i, i]] += a_s;
        }
        if !north.contains(&i) {
            let an = if upwind { dy + pos(-fy[i + nx]) } else { dy - fy[i + nx] / 2.0 };
            a[[i, i + nx]] -= an;
            a[[i, i]] += an;
        }
        if west.contains(&i) {
            let sp = if upwind { 2.0 * dx + pos(fx[i]) } else { 2.0 * dx + fx[i] };
            a[[i, i]] += sp;
            b[i] += sp * phi_w;
        }
        if east.contains(&i) {
            let sp = if upwind { 2.0 * dx + pos(-fx[i]) } else { 2.0 * dx - fx[i] };
            a[[i, i]] += sp;
            b[i] += sp * phi_e;
        }
        if south.contains(&i) {
            let sp = if upwind { 2.0 * dy + pos(fy[i]) } else { 2.0 * dy + fy[i] };
            a[[i, i]] += sp;
            b[i] += sp * phi_s;
        }
        if north.contains(&i) {
            if upwind {
                a[[i, i]] += 2.0 * dy + pos(-fy[i]);
                b[i] += (2.0 * dx + pos(-fy[i])) * phi_n;
            } else {
                let sp = 2.0 * dy - fy[i];
                a[[i, i]] += sp;
                b[i] += sp * phi_n;
            }
        }
    }
    (a, b)
}

fn random_flow() -> impl Strategy<Value = (usize, usize, Vec<f64>, Vec<f64>)> {
    (1usize..8, 1usize..8).prop_flat_map(|(nx, ny)| {
        let dim = nx * ny;
        (
            Just(nx),
            Just(ny),
            vec(-5.0f64..5.0, dim),
            vec(-5.0f64..5.0, dim),
        )
    })
}

proptest! {
    #[test]
    fn matches_dense_reference(
        (nx, ny, fx, fy) in random_flow(),
        dx in 0.1f64..3.0,
        dy in 0.1f64..3.0,
        bnd in prop::array::uniform4(-2.0f64..2.0),
    ) {
        let mesh = StructuredMesh2d::new(nx, ny).unwrap();
        let flux_x = Array1::from_vec(fx.clone());
        let flux_y = Array1::from_vec(fy.clone());
        let boundary = DirichletBoundary::from_slice(&bnd).unwrap();
        let d = Diffusivity::new(dx, dy);
        let cd = assemble_central_difference(&mesh, d, flux_x.view(), flux_y.view(), &boundary)
            .unwrap();
        let ud = assemble_upwind_difference(&mesh, d, flux_x.view(), flux_y.view(), &boundary)
            .unwrap();
        for (sys, upwind) in [(cd, false), (ud, true)] {
            let (a, b) = dense_reference(nx, ny, (dx, dy), &fx, &fy, bnd, upwind);
            let dense = sys.matrix.to_dense();
            for ((irow, icol), &expected) in a.indexed_iter() {
                let actual = dense[[irow, icol]];
                prop_assert!(
                    (actual - expected).abs() < 1e-12,
                    "upwind={} ({}, {}): {} vs {}", upwind, irow, icol, actual, expected
                );
            }
            for (irow, &expected) in b.indexed_iter() {
                prop_assert!(
                    (sys.rhs[irow] - expected).abs() < 1e-12,
                    "upwind={} rhs {}", upwind, irow
                );
            }
        }
    }

    #[test]
    fn boundary_sets_have_expected_shape((nx, ny) in grid()) {
        let mesh = StructuredMesh2d::new(nx, ny).unwrap();
        let dim = mesh.node_num;
        let bnds = mesh.boundaries();
        prop_assert_eq!(bnds.west.len(), ny);
        prop_assert_eq!(bnds.east.len(), ny);
        prop_assert_eq!(bnds.south.len(), nx);
        prop_assert_eq!(bnds.north.len(), nx);
        for position in BoundaryPosition::ALL {
            prop_assert!(bnds.nodes(position).iter().all(|&i| i < dim));
        }
        prop_assert_eq!(bnds.west[0], 0);
        prop_assert_eq!(bnds.east[ny - 1], dim - 1);
        prop_assert_eq!(bnds.south[0], 0);
        prop_assert_eq!(bnds.north[nx - 1], dim - 1);
    }

    #[test]
    fn membership_agrees_with_boundary_sets((nx, ny) in grid()) {
        let mesh = StructuredMesh2d::new(nx, ny).unwrap();
        let bnds = mesh.boundaries();
        for inode in 0..mesh.node_num {
            for position in BoundaryPosition::ALL {
                prop_assert_eq!(
                    mesh.is_on(inode, position),
                    bnds.nodes(position).contains(&inode)
                );
            }
        }
    }

    #[test]
    fn neighbours_stay_in_range((nx, ny) in grid()) {
        let mesh = StructuredMesh2d::new(nx, ny).unwrap();
        for inode in 0..mesh.node_num {
            for face in BoundaryPosition::ALL {
                if let Some(inb) = mesh.neighbor(inode, face) {
                    prop_assert!(inb < mesh.node_num);
                    let same_row = inb / nx == inode / nx;
                    let same_col = inb % nx == inode % nx;
                    prop_assert!(same_row ^ same_col, "node {} face {:?} -> {}", inode, face, inb);
                }
            }
        }
    }

    #[test]
    fn stencil_touches_only_neighbours(
        (nx, ny) in grid(),
        fx in -10.0f64..10.0,
        fy in -10.0f64..10.0,
    ) {
        let mesh = StructuredMesh2d::new(nx, ny).unwrap();
        let flux_x = Array1::from_elem(mesh.node_num, fx);
        let flux_y = Array1::from_elem(mesh.node_num, fy);
        let bnd = DirichletBoundary::new(1.0, 2.0, 3.0, 4.0);
        let sys = assemble_upwind_difference(
            &mesh, Diffusivity::new(1.0, 0.5), flux_x.view(), flux_y.view(), &bnd,
        ).unwrap();
        prop_assert_eq!(sys.matrix.nrows(), mesh.node_num);
        for inode in 0..mesh.node_num {
            let allowed: Vec<usize> = std::iter::once(inode)
                .chain(BoundaryPosition::ALL.iter().filter_map(|&f| mesh.neighbor(inode, f)))
                .collect();
            prop_assert!(sys.matrix.row(inode).count() <= 5);
            for (icol, _) in sys.matrix.row(inode) {
                prop_assert!(allowed.contains(&icol));
            }
        }
    }

    #[test]
    fn zero_flux_rows_are_conservative(
        (nx, ny) in grid(),
        d in 0.01f64..10.0,
    ) {
        let mesh = StructuredMesh2d::new(nx, ny).unwrap();
        let zero = Array1::<f64>::zeros(mesh.node_num);
        let bnd = DirichletBoundary::new(0.0, 0.0, 0.0, 0.0);
        let sys = assemble_central_difference(
            &mesh, Diffusivity::new(d, d), zero.view(), zero.view(), &bnd,
        ).unwrap();
        for inode in 0..mesh.node_num {
            let boundary_faces = BoundaryPosition::ALL
                .iter()
                .filter(|&&f| mesh.is_on(inode, f))
                .count() as f64;
            let row_sum: f64 = sys.matrix.row(inode).map(|(_, v)| v).sum();
            // interior faces cancel, each boundary face leaves its 2D half-cell term
            prop_assert!((row_sum - 2.0 * d * boundary_faces).abs() < 1e-9 * d.max(1.0));
        }
    }
}

#[test]
fn central_and_upwind_agree_without_flow() {
    let mesh = StructuredMesh2d::new(6, 3).unwrap();
    let zero = Array1::<f64>::zeros(mesh.node_num);
    let bnd = DirichletBoundary::new(0.5, -1.0, 2.0, 0.0);
    let d = Diffusivity::new(1.3, 1.3);
    let cd = assemble_central_difference(&mesh, d, zero.view(), zero.view(), &bnd).unwrap();
    let ud = assemble_upwind_difference(&mesh, d, zero.view(), zero.view(), &bnd).unwrap();
    assert_eq!(cd.matrix.to_dense(), ud.matrix.to_dense());
    assert_eq!(cd.rhs, ud.rhs);
}
