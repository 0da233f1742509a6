use crate::Field2;

/// Physical meaning of a field, which decides how walls reflect it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Density, pressure, divergence: mirrored across every wall.
    Scalar,
    /// Horizontal velocity: negated across the vertical walls `i = 0` and `i = N + 1`.
    VelocityX,
    /// Vertical velocity: negated across the horizontal walls `j = 0` and `j = N + 1`.
    VelocityY,
}

impl FieldKind {
    fn sign_across_vertical_walls(self) -> f32 {
        if self == FieldKind::VelocityX {
            -1.0
        } else {
            1.0
        }
    }

    fn sign_across_horizontal_walls(self) -> f32 {
        if self == FieldKind::VelocityY {
            -1.0
        } else {
            1.0
        }
    }
}

/// Closed reflective walls for `field`, using its own kind.
pub fn apply_boundary(field: &mut Field2) {
    let kind = field.kind();
    apply_boundary_as(field, kind);
}

/// Rewrites the ghost ring of `field` from its interior as if it were `kind`.
///
/// Only cells with `i` or `j` in `{0, N + 1}` are written. Edges are filled
/// first, then the four corners in a fixed order, each corner averaging its
/// two already-updated edge neighbours.
pub fn apply_boundary_as(field: &mut Field2, kind: FieldKind) {
    let grid = field.grid();
    let n = grid.n();
    let sx = kind.sign_across_vertical_walls();
    let sy = kind.sign_across_horizontal_walls();
    let x = field.as_mut_slice();

    for k in 1..=n {
        x[grid.idx(0, k)] = sx * x[grid.idx(1, k)];
        x[grid.idx(n + 1, k)] = sx * x[grid.idx(n, k)];
        x[grid.idx(k, 0)] = sy * x[grid.idx(k, 1)];
        x[grid.idx(k, n + 1)] = sy * x[grid.idx(k, n)];
    }

    x[grid.idx(0, 0)] = 0.5 * (x[grid.idx(1, 0)] + x[grid.idx(0, 1)]);
    x[grid.idx(0, n + 1)] = 0.5 * (x[grid.idx(1, n + 1)] + x[grid.idx(0, n)]);
    x[grid.idx(n + 1, 0)] = 0.5 * (x[grid.idx(n, 0)] + x[grid.idx(n + 1, 1)]);
    x[grid.idx(n + 1, n + 1)] = 0.5 * (x[grid.idx(n, n + 1)] + x[grid.idx(n + 1, n)]);
}
