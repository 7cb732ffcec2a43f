use crate::D;

/// Centered 3-point stencil.
pub(crate) fn stencil3(d: D, f: &impl Fn(f64, f64) -> f64, x: f64, y: f64, h_x: f64, h_y: f64) -> f64 {
    match d {
        D::X => (f(x + h_x, y) - f(x - h_x, y)) / (2.0 * h_x),
        D::Y => (f(x, y + h_y) - f(x, y - h_y)) / (2.0 * h_y),
        D::Xx => (f(x + h_x, y) + f(x - h_x, y) - 2.0 * f(x, y)) / (h_x * h_x),
        D::Yy => (f(x, y + h_y) + f(x, y - h_y) - 2.0 * f(x, y)) / (h_y * h_y),
        D::Xy => {
            (f(x + h_x, y + h_y) - f(x - h_x, y + h_y) - f(x + h_x, y - h_y)
                + f(x - h_x, y - h_y))
                / (4.0 * h_x * h_y)
        }
    }
}

/// Richardson extrapolation of [`stencil3`]: combines the stencil at step
/// `h/n` and at step `h` to cancel the leading error term.
pub(crate) fn stencil3_extra(
    d: D,
    f: &impl Fn(f64, f64) -> f64,
    x: f64,
    y: f64,
    h_x: f64,
    h_y: f64,
    n: i32,
) -> f64 {
    let squared = (n * n) as f64;
    let fine = match d {
        D::X | D::Xx => stencil3(d, f, x, y, h_x / n as f64, h_y),
        D::Y | D::Yy => stencil3(d, f, x, y, h_x, h_y / n as f64),
        D::Xy => stencil3(d, f, x, y, h_x / n as f64, h_y / n as f64),
    };
    let coarse = stencil3(d, f, x, y, h_x, h_y);
    (squared * fine - coarse) / (squared - 1.0)
}

/// Centered 5-point stencil.
pub(crate) fn stencil5(d: D, f: &impl Fn(f64, f64) -> f64, x: f64, y: f64, h_x: f64, h_y: f64) -> f64 {
    match d {
        D::X => {
            (-f(x + 2.0 * h_x, y) + 8.0 * f(x + h_x, y) - 8.0 * f(x - h_x, y) + f(x - 2.0 * h_x, y))
                / (12.0 * h_x)
        }
        D::Y => {
            (-f(x, y + 2.0 * h_y) + 8.0 * f(x, y + h_y) - 8.0 * f(x, y - h_y) + f(x, y - 2.0 * h_y))
                / (12.0 * h_y)
        }
        D::Xx => {
            (-f(x + 2.0 * h_x, y) + 16.0 * f(x + h_x, y) - 30.0 * f(x, y) + 16.0 * f(x - h_x, y)
                - f(x - 2.0 * h_x, y))
                / (12.0 * h_x * h_x)
        }
        D::Yy => {
            (-f(x, y + 2.0 * h_y) + 16.0 * f(x, y + h_y) - 30.0 * f(x, y) + 16.0 * f(x, y - h_y)
                - f(x, y - 2.0 * h_y))
                / (12.0 * h_y * h_y)
        }
        D::Xy => {
            (-f(x + 2.0 * h_x, y + 2.0 * h_y) + 16.0 * f(x + h_x, y + h_y)
                + f(x + 2.0 * h_x, y - 2.0 * h_y)
                - 16.0 * f(x + h_x, y - h_y)
                + f(x - 2.0 * h_x, y + 2.0 * h_y)
                - 16.0 * f(x - h_x, y + h_y)
                - f(x - 2.0 * h_x, y - 2.0 * h_y)
                + 16.0 * f(x - h_x, y - h_y))
                / (48.0 * h_x * h_y)
        }
    }
}

/// Richardson extrapolation of [`stencil5`].
pub(crate) fn stencil5_extra(
    d: D,
    f: &impl Fn(f64, f64) -> f64,
    x: f64,
    y: f64,
    h_x: f64,
    h_y: f64,
    n: i32,
) -> f64 {
    let squared = (n * n) as f64;
    let fine = match d {
        D::X | D::Xx => stencil5(d, f, x, y, h_x / n as f64, h_y),
        D::Y | D::Yy => stencil5(d, f, x, y, h_x, h_y / n as f64),
        D::Xy => stencil5(d, f, x, y, h_x / n as f64, h_y / n as f64),
    };
    let coarse = stencil5(d, f, x, y, h_x, h_y);
    (squared * fine - coarse) / (squared - 1.0)
}
