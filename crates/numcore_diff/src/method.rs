use numcore_error::Error;
use std::str::FromStr;

/// Selects which finite-difference stencil [`crate::differentiate`] uses.
/// The forward-AAD path is a separate entry point ([`crate::differentiate_aad`])
/// since it takes an AAD-overloaded callable rather than a plain `f64`
/// function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Centered 3-point stencil.
    Stencil3,
    /// 3-point stencil, Richardson-extrapolated.
    Stencil3Extra,
    /// Centered 5-point stencil.
    Stencil5,
    /// 5-point stencil, Richardson-extrapolated.
    Stencil5Extra,
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Stencil3" => Ok(Method::Stencil3),
            "Stencil3Extra" => Ok(Method::Stencil3Extra),
            "Stencil5" => Ok(Method::Stencil5),
            "Stencil5Extra" => Ok(Method::Stencil5Extra),
            other => Err(Error::InvalidArgument(format!(
                "unknown differentiation method: {other}"
            ))),
        }
    }
}

/// Which partial derivative to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum D {
    /// `d/dx`.
    X,
    /// `d/dy`.
    Y,
    /// `d^2/dx^2`.
    Xx,
    /// `d^2/dy^2`.
    Yy,
    /// `d^2/dxdy`.
    Xy,
}

impl FromStr for D {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(D::X),
            "Y" => Ok(D::Y),
            "XX" => Ok(D::Xx),
            "YY" => Ok(D::Yy),
            "XY" => Ok(D::Xy),
            other => Err(Error::InvalidArgument(format!(
                "unknown derivative selector: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_method_is_invalid_argument() {
        assert!(matches!(
            "Bogus".parse::<Method>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn known_methods_and_selectors_round_trip() {
        assert_eq!("Stencil5".parse::<Method>().unwrap(), Method::Stencil5);
        assert_eq!("XY".parse::<D>().unwrap(), D::Xy);
    }
}
