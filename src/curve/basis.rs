use crate::math::Vector3;

/// Cubic segment basis: a 4×4 coefficient matrix and a uniform scale.
///
/// Row `k` of the matrix holds the polynomial coefficients of the weight of
/// window point `k`, highest power first, so the weight of point `k` at local
/// parameter `f` is `scale * (M[k][0] f³ + M[k][1] f² + M[k][2] f + M[k][3])`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBasis {
    pub matrix: [[f64; 4]; 4],
    pub scale: f64,
}

/// Cardinal (Catmull-Rom style) spline with tension 0.5. Interpolates the two
/// inner window points.
#[rustfmt::skip]
pub const CARDINAL: CubicBasis = CubicBasis {
    matrix: [
        [-1.0,  2.0, -1.0, 0.0],
        [ 3.0, -5.0,  0.0, 2.0],
        [-3.0,  4.0,  1.0, 0.0],
        [ 1.0, -1.0,  0.0, 0.0],
    ],
    scale: 0.5,
};

/// Uniform cubic B-spline. Approximates its control points with C² continuity.
#[rustfmt::skip]
pub const B_SPLINE: CubicBasis = CubicBasis {
    matrix: [
        [-1.0,  3.0, -3.0, 1.0],
        [ 3.0, -6.0,  0.0, 4.0],
        [-3.0,  3.0,  3.0, 1.0],
        [ 1.0,  0.0,  0.0, 0.0],
    ],
    scale: 1.0 / 6.0,
};

/// Monomial row `[f³, f², f, 1]` used for positions.
#[must_use]
pub fn position_powers(f: f64) -> [f64; 4] {
    [f * f * f, f * f, f, 1.0]
}

/// Derivative row `[3f², 2f, 1, 0]` used for tangents.
#[must_use]
pub fn tangent_powers(f: f64) -> [f64; 4] {
    [3.0 * f * f, 2.0 * f, 1.0, 0.0]
}

impl CubicBasis {
    /// Blend weight of each window point for the given power row.
    #[must_use]
    pub fn weights(&self, powers: &[f64; 4]) -> [f64; 4] {
        let mut weights = [0.0; 4];
        for (weight, row) in weights.iter_mut().zip(&self.matrix) {
            let dot: f64 = row.iter().zip(powers).map(|(m, t)| m * t).sum();
            *weight = dot * self.scale;
        }
        weights
    }

    /// `Σ window[k] * weight[k]` over the four window vectors.
    #[must_use]
    pub fn blend(&self, window: &[Vector3; 4], powers: &[f64; 4]) -> Vector3 {
        self.weights(powers)
            .iter()
            .zip(window)
            .fold(Vector3::zeros(), |acc, (w, g)| acc + g * *w)
    }
}
