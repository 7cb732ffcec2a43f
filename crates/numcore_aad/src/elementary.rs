use crate::Aad;

/// `exp(u)`, propagating first and second partials through `(e^u)' = e^u`.
///
/// ```
/// # use numcore_aad::{exp, Aad};
/// let x = Aad::x_seed(0.0);
/// let z = exp(x);
/// assert_eq!(z.v(), 1.0);
/// assert_eq!(z.x(), 1.0);
/// assert_eq!(z.xx(), 1.0);
/// ```
pub fn exp(u: Aad) -> Aad {
    let v = u.v().exp();
    Aad {
        v,
        d1x: v * u.x(),
        d1y: v * u.y(),
        d2xx: v * (u.xx() + u.x() * u.x()),
        d2yy: v * (u.yy() + u.y() * u.y()),
        d2xy: v * (u.xy() + u.x() * u.y()),
    }
}

/// `sin(u)`.
///
/// ```
/// # use numcore_aad::{sin, Aad};
/// let x = Aad::x_seed(0.0);
/// let z = sin(x);
/// assert_eq!(z.v(), 0.0);
/// assert_eq!(z.x(), 1.0);
/// ```
pub fn sin(u: Aad) -> Aad {
    let s = u.v().sin();
    let c = u.v().cos();
    Aad {
        v: s,
        d1x: c * u.x(),
        d1y: c * u.y(),
        d2xx: c * u.xx() - u.x() * u.x() * s,
        d2yy: c * u.yy() - u.y() * u.y() * s,
        d2xy: c * u.xy() - u.x() * u.y() * s,
    }
}

/// `cos(u)`.
///
/// ```
/// # use numcore_aad::{cos, Aad};
/// let x = Aad::x_seed(0.0);
/// let z = cos(x);
/// assert_eq!(z.v(), 1.0);
/// assert_eq!(z.x(), 0.0);
/// ```
pub fn cos(u: Aad) -> Aad {
    let s = u.v().sin();
    let c = u.v().cos();
    Aad {
        v: c,
        d1x: -s * u.x(),
        d1y: -s * u.y(),
        d2xx: -s * u.xx() - c * u.x() * u.x(),
        d2yy: -s * u.yy() - c * u.y() * u.y(),
        d2xy: -u.xy() * s - u.x() * u.y() * c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numcore_utils::assert_approx_equal;

    #[test]
    fn exp_of_xy_sum_matches_symbolic_derivatives() {
        // f(x, y) = exp(x + y) at (1, 2): all partials equal e^3.
        let x = Aad::x_seed(1.0);
        let y = Aad::y_seed(2.0);
        let z = exp(x + y);
        let want = 3.0_f64.exp();
        assert_approx_equal!(z.v(), want, 1e-9);
        assert_approx_equal!(z.x(), want, 1e-9);
        assert_approx_equal!(z.y(), want, 1e-9);
        assert_approx_equal!(z.xx(), want, 1e-9);
        assert_approx_equal!(z.yy(), want, 1e-9);
        assert_approx_equal!(z.xy(), want, 1e-9);
    }

    #[test]
    fn sin_of_exp_plus_y_squared_matches_the_worked_example() {
        // f(x, y) = sin(exp(x) + y^2), the reference example function.
        let x = Aad::x_seed(0.5);
        let y = Aad::y_seed(0.3);
        let z = sin(exp(x) + y * y);

        let a = 0.5_f64;
        let b = 0.3_f64;
        let inner = a.exp() + b * b;
        let want_v = inner.sin();
        let want_x = inner.cos() * a.exp();
        let want_y = inner.cos() * 2.0 * b;
        assert_approx_equal!(z.v(), want_v, 1e-9);
        assert_approx_equal!(z.x(), want_x, 1e-9);
        assert_approx_equal!(z.y(), want_y, 1e-9);
    }
}
