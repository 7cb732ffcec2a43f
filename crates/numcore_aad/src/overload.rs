use crate::Aad;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Overload the standard negation operator (`-`).
impl Neg for Aad {
    type Output = Aad;

    /// ```
    /// # use numcore_aad::Aad;
    /// let x = Aad::x_seed(2.0);
    /// let z = -x;
    /// assert_eq!(z.v(), -2.0);
    /// assert_eq!(z.x(), -1.0);
    /// ```
    fn neg(self) -> Self::Output {
        Aad {
            v: -self.v,
            d1x: -self.d1x,
            d1y: -self.d1y,
            d2xx: -self.d2xx,
            d2yy: -self.d2yy,
            d2xy: -self.d2xy,
        }
    }
}

/// Overload the standard addition operator (`+`).
/// `d/dx (u + w) = u_x + w_x`, and likewise for every other partial.
impl Add<Aad> for Aad {
    type Output = Aad;

    /// ```
    /// # use numcore_aad::Aad;
    /// let x = Aad::x_seed(2.0);
    /// let y = Aad::y_seed(3.0);
    /// let z = x + y;
    /// assert_eq!(z.v(), 5.0);
    /// assert_eq!((z.x(), z.y()), (1.0, 1.0));
    /// ```
    fn add(self, w: Aad) -> Self::Output {
        Aad {
            v: self.v + w.v,
            d1x: self.d1x + w.d1x,
            d1y: self.d1y + w.d1y,
            d2xx: self.d2xx + w.d2xx,
            d2yy: self.d2yy + w.d2yy,
            d2xy: self.d2xy + w.d2xy,
        }
    }
}

/// `Aad + f64`, the right-hand side treated as a constant.
impl Add<f64> for Aad {
    type Output = Aad;

    fn add(self, w: f64) -> Self::Output {
        self + Aad::constant(w)
    }
}

/// `f64 + Aad`, the left-hand side treated as a constant.
impl Add<Aad> for f64 {
    type Output = Aad;

    fn add(self, w: Aad) -> Self::Output {
        Aad::constant(self) + w
    }
}

/// Overload the compound addition-assignment operator (`+=`).
impl AddAssign<Aad> for Aad {
    /// ```
    /// # use numcore_aad::Aad;
    /// let mut x = Aad::x_seed(2.0);
    /// let y = Aad::y_seed(3.0);
    /// x += y;
    /// assert_eq!(x.v(), 5.0);
    /// ```
    fn add_assign(&mut self, w: Aad) {
        *self = *self + w;
    }
}

/// Overload the standard subtraction operator (`-`).
impl Sub<Aad> for Aad {
    type Output = Aad;

    /// ```
    /// # use numcore_aad::Aad;
    /// let x = Aad::x_seed(5.0);
    /// let y = Aad::y_seed(2.0);
    /// let z = x - y;
    /// assert_eq!(z.v(), 3.0);
    /// assert_eq!((z.x(), z.y()), (1.0, -1.0));
    /// ```
    fn sub(self, w: Aad) -> Self::Output {
        Aad {
            v: self.v - w.v,
            d1x: self.d1x - w.d1x,
            d1y: self.d1y - w.d1y,
            d2xx: self.d2xx - w.d2xx,
            d2yy: self.d2yy - w.d2yy,
            d2xy: self.d2xy - w.d2xy,
        }
    }
}

impl Sub<f64> for Aad {
    type Output = Aad;

    fn sub(self, w: f64) -> Self::Output {
        self - Aad::constant(w)
    }
}

impl Sub<Aad> for f64 {
    type Output = Aad;

    fn sub(self, w: Aad) -> Self::Output {
        Aad::constant(self) - w
    }
}

/// Overload the compound subtraction-assignment operator (`-=`).
impl SubAssign<Aad> for Aad {
    /// ```
    /// # use numcore_aad::Aad;
    /// let mut x = Aad::x_seed(5.0);
    /// let y = Aad::y_seed(2.0);
    /// x -= y;
    /// assert_eq!(x.v(), 3.0);
    /// ```
    fn sub_assign(&mut self, w: Aad) {
        *self = *self - w;
    }
}

/// Overload the standard multiplication operator (`*`).
/// Product rule through second order:
/// `(uw)_x = u_x w + u w_x`,
/// `(uw)_{xx} = u_{xx} w + 2 u_x w_x + u w_{xx}`,
/// `(uw)_{xy} = u_{xy} w + u_x w_y + u_y w_x + u w_{xy}`.
impl Mul<Aad> for Aad {
    type Output = Aad;

    /// ```
    /// # use numcore_aad::Aad;
    /// let x = Aad::x_seed(3.0);
    /// let z = x * x;
    /// assert_eq!(z.v(), 9.0);
    /// assert_eq!(z.x(), 6.0);
    /// assert_eq!(z.xx(), 2.0);
    /// ```
    fn mul(self, w: Aad) -> Self::Output {
        let u = self;
        Aad {
            v: u.v * w.v,
            d1x: u.d1x * w.v + w.d1x * u.v,
            d1y: u.d1y * w.v + w.d1y * u.v,
            d2xx: u.d2xx * w.v + 2.0 * u.d1x * w.d1x + w.d2xx * u.v,
            d2yy: u.d2yy * w.v + 2.0 * u.d1y * w.d1y + w.d2yy * u.v,
            d2xy: u.d2xy * w.v + u.d1x * w.d1y + u.d1y * w.d1x + u.v * w.d2xy,
        }
    }
}

impl Mul<f64> for Aad {
    type Output = Aad;

    fn mul(self, w: f64) -> Self::Output {
        self * Aad::constant(w)
    }
}

impl Mul<Aad> for f64 {
    type Output = Aad;

    fn mul(self, w: Aad) -> Self::Output {
        Aad::constant(self) * w
    }
}

/// Overload the compound multiplication-assignment operator (`*=`).
impl MulAssign<Aad> for Aad {
    /// ```
    /// # use numcore_aad::Aad;
    /// let mut x = Aad::x_seed(3.0);
    /// x *= x;
    /// assert_eq!(x.v(), 9.0);
    /// ```
    fn mul_assign(&mut self, w: Aad) {
        *self = *self * w;
    }
}

/// Overload the standard division operator (`/`).
///
/// The mixed partial `(u/w)_{xy}` is derived directly from differentiating
/// the quotient rule's `x`-partial a second time with respect to `y`:
/// `(u/w)_x = (u_x w - u w_x) / w^2`, so `(u/w)_{xy}` equals
/// `u_{xy}/w - u w_{xy}/w^2 - (u_x w_y + u_y w_x)/w^2 + 2 u w_x w_y / w^3`.
/// This is symmetric in swapping `x` and `y`, as the mixed partial of any
/// twice-differentiable function must be.
impl Div<Aad> for Aad {
    type Output = Aad;

    /// ```
    /// # use numcore_aad::Aad;
    /// let x = Aad::x_seed(6.0);
    /// let y = Aad::y_seed(2.0);
    /// let z = x / y;
    /// assert_eq!(z.v(), 3.0);
    /// assert_eq!(z.x(), 0.5);
    /// assert_eq!(z.y(), -1.5);
    /// ```
    fn div(self, w: Aad) -> Self::Output {
        let u = self;
        let g2 = w.v * w.v;
        let g3 = w.v * g2;
        Aad {
            v: u.v / w.v,
            d1x: (u.d1x * w.v - u.v * w.d1x) / g2,
            d1y: (u.d1y * w.v - u.v * w.d1y) / g2,
            d2xx: u.d2xx / w.v + (-w.d2xx * u.v - 2.0 * u.d1x * w.d1x) / g2
                + 2.0 * u.v * w.d1x * w.d1x / g3,
            d2yy: u.d2yy / w.v + (-w.d2yy * u.v - 2.0 * u.d1y * w.d1y) / g2
                + 2.0 * u.v * w.d1y * w.d1y / g3,
            d2xy: u.d2xy / w.v - u.v * w.d2xy / g2 - (u.d1x * w.d1y + u.d1y * w.d1x) / g2
                + 2.0 * u.v * w.d1x * w.d1y / g3,
        }
    }
}

impl Div<f64> for Aad {
    type Output = Aad;

    fn div(self, w: f64) -> Self::Output {
        self / Aad::constant(w)
    }
}

impl Div<Aad> for f64 {
    type Output = Aad;

    fn div(self, w: Aad) -> Self::Output {
        Aad::constant(self) / w
    }
}

/// Overload the compound division-assignment operator (`/=`).
impl DivAssign<Aad> for Aad {
    /// ```
    /// # use numcore_aad::Aad;
    /// let mut x = Aad::x_seed(6.0);
    /// let y = Aad::y_seed(2.0);
    /// x /= y;
    /// assert_eq!(x.v(), 3.0);
    /// ```
    fn div_assign(&mut self, w: Aad) {
        *self = *self / w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cos;
    use numcore_utils::assert_approx_equal;

    fn minus_x_squared_over_y_plus_cos_xy(x: Aad, y: Aad) -> Aad {
        -x * x / y + cos(x * y)
    }

    #[test]
    fn minus_x_squared_over_y_plus_cos_xy_matches_the_known_partials() {
        let x = Aad::x_seed(45.2);
        let y = Aad::y_seed(4653.0);
        let z = minus_x_squared_over_y_plus_cos_xy(x, y);

        assert_approx_equal!(z.y(), 44.9318047384, 1e-6);
        assert_approx_equal!(z.yy(), -222.269146379, 1e-5);
        assert_approx_equal!(z.xy(), -22879.9426109, 1e-3);
    }

    #[test]
    fn product_rule_matches_symbolic_expression_for_x_squared() {
        // f(x, y) = x * x: f_x = 2x, f_xx = 2, f_y = f_yy = f_xy = 0.
        let x = Aad::x_seed(5.0);
        let z = x * x;
        assert_approx_equal!(z.v(), 25.0, 1e-12);
        assert_approx_equal!(z.x(), 10.0, 1e-12);
        assert_approx_equal!(z.xx(), 2.0, 1e-12);
        assert_approx_equal!(z.y(), 0.0, 1e-12);
    }

    #[test]
    fn quotient_mixed_partial_is_symmetric_under_xy_swap() {
        // f(x, y) = x / y: f_xy = -1/y^2, matching d/dy[1/y] at x=1.
        let x = Aad::x_seed(7.0);
        let y = Aad::y_seed(3.0);
        let z = x / y;
        assert_approx_equal!(z.xy(), -1.0 / (3.0 * 3.0), 1e-12);
    }
}
