//! Layered ISA atmosphere (pressure, density) and a tabulated Mach-number
//! drag coefficient, combined into a single aerodynamic-force helper.

use numcore_error::{Error, Result};
use std::sync::OnceLock;

/// Standard gravitational acceleration, m/s^2.
pub const G_FORCE: f64 = 9.806_55;

const R_AIR: f64 = 287.0528;

struct Layer {
    min_height: f64,
    max_height: f64,
    avg_temperature: f64,
    avg_pressure: f64,
    lapse_rate: f64,
}

const LAYERS: [Layer; 4] = [
    Layer {
        min_height: 0.0,
        max_height: 11_000.0,
        avg_temperature: 288.15,
        avg_pressure: 101_325.0,
        lapse_rate: 0.0065,
    },
    Layer {
        min_height: 11_000.0,
        max_height: 20_000.0,
        avg_temperature: 216.65,
        avg_pressure: 22_632.377_760_2,
        lapse_rate: 0.0,
    },
    Layer {
        min_height: 20_000.0,
        max_height: 32_000.0,
        avg_temperature: 216.65,
        avg_pressure: 5_475.036_446_46,
        lapse_rate: -0.001,
    },
    Layer {
        min_height: 32_000.0,
        max_height: 47_000.0,
        avg_temperature: 228.65,
        avg_pressure: 868.056_901_172,
        lapse_rate: -0.0028,
    },
];

fn find_layer(height: f64) -> Result<&'static Layer> {
    LAYERS
        .iter()
        .find(|layer| height >= layer.min_height && height <= layer.max_height)
        .ok_or_else(|| Error::InvalidArgument(format!("altitude {height} outside the ISA table (0..47000 m)")))
}

fn pressure_at(height: f64, layer: &Layer) -> f64 {
    let d_height = height - layer.min_height;
    if layer.lapse_rate == 0.0 {
        layer.avg_pressure * (-G_FORCE * d_height / (R_AIR * layer.avg_temperature)).exp()
    } else {
        layer.avg_pressure
            * ((G_FORCE / (R_AIR * layer.lapse_rate))
                * (1.0 - layer.lapse_rate * d_height / layer.avg_temperature).ln())
            .exp()
    }
}

/// Atmospheric pressure (Pa) at `height` meters above sea level.
pub fn pressure(height: f64) -> Result<f64> {
    let layer = find_layer(height)?;
    Ok(pressure_at(height, layer))
}

/// Atmospheric density (kg/m^3) at `height` meters above sea level.
pub fn density(height: f64) -> Result<f64> {
    let layer = find_layer(height)?;
    let p = pressure_at(height, layer);
    let temperature = layer.avg_temperature - layer.lapse_rate * (height - layer.min_height);
    Ok(p / (R_AIR * temperature))
}

const DRAG_TABLE_LEN: usize = 60;
const DRAG_STEP: f64 = 0.03;
const DRAG_START: f64 = 0.4;

fn g_strange(x: f64) -> f64 {
    1.0 / (x + 1.1) - 0.04
}

fn f_strange(x: f64) -> f64 {
    (1.0 / (2.05 - x)).powf(20.0) + 0.1
}

fn h_strange(x: f64) -> Result<f64> {
    if x < 0.3 {
        return Err(Error::InvalidArgument(format!(
            "drag coefficient template undefined below Mach 0.3, got {x}"
        )));
    }
    if x < 0.95 {
        return Ok(f_strange(x));
    }
    if x > 1.1 {
        return Ok(g_strange(x));
    }
    Ok(g_strange(x).min(f_strange(x)))
}

struct DragTable {
    cd: [f64; DRAG_TABLE_LEN],
    slope: [f64; DRAG_TABLE_LEN],
}

fn build_drag_table() -> DragTable {
    let mut cd = [0.0; DRAG_TABLE_LEN];
    for (i, entry) in cd.iter_mut().enumerate() {
        *entry = h_strange(DRAG_STEP * i as f64 + DRAG_START)
            .expect("drag table nodes lie within the template's supported domain");
    }
    let mut slope = [0.0; DRAG_TABLE_LEN];
    for i in 0..DRAG_TABLE_LEN - 1 {
        slope[i] = (cd[i + 1] - cd[i]) / DRAG_STEP;
    }
    DragTable { cd, slope }
}

static DRAG_TABLE: OnceLock<DragTable> = OnceLock::new();

/// Drag coefficient `C_D(M)` by linear interpolation over the 60-entry
/// tabulated curve (Mach grid of pitch 0.03 starting at M=0.4).
pub fn drag_coefficient(mach: f64) -> Result<f64> {
    if mach < DRAG_START {
        return Err(Error::InvalidArgument(format!(
            "Mach number {mach} below the drag table's lower bound {DRAG_START}"
        )));
    }
    let table = DRAG_TABLE.get_or_init(build_drag_table);
    let i = ((mach - DRAG_START) / DRAG_STEP) as usize;
    let i = i.min(DRAG_TABLE_LEN - 1);
    Ok(table.cd[i] + table.slope[i] * (mach - DRAG_START - DRAG_STEP * i as f64))
}

const CANNONBALL_CALIBRE: f64 = 0.216;

/// Combined aerodynamic drag force magnitude at altitude `y` for a
/// projectile of reference diameter [`CANNONBALL_CALIBRE`] moving at
/// squared speed `v2`.
pub fn aerodynamic_force(y: f64, v2: f64) -> Result<f64> {
    let cross_section = std::f64::consts::PI * CANNONBALL_CALIBRE * CANNONBALL_CALIBRE / 4.0;
    let p = pressure(y)?;
    let rho = density(y)?;
    let mach = (v2 * rho / p).sqrt();
    let cd = drag_coefficient(mach)?;
    Ok(cd * rho * v2 * cross_section / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use numcore_utils::assert_approx_equal;

    #[test]
    fn sea_level_pressure_and_density_match_isa_reference_values() {
        assert_approx_equal!(pressure(0.0).unwrap(), 101_325.0, 1e-6);
        assert_approx_equal!(density(0.0).unwrap(), 1.225, 1e-3);
    }

    #[test]
    fn pressure_is_continuous_across_the_first_layer_boundary() {
        let below = pressure(10_999.999).unwrap();
        let above = pressure(11_000.001).unwrap();
        assert_approx_equal!(below, above, 1e-2);
    }

    #[test]
    fn pressure_is_continuous_across_the_isothermal_layer_boundary() {
        let below = pressure(19_999.999).unwrap();
        let above = pressure(20_000.001).unwrap();
        assert_approx_equal!(below, above, 1e-2);
    }

    #[test]
    fn negative_altitude_is_rejected() {
        assert!(matches!(pressure(-1.0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn altitude_beyond_the_table_is_rejected() {
        assert!(matches!(pressure(100_000.0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn drag_coefficient_is_continuous_at_table_nodes() {
        let at_node = drag_coefficient(0.4 + 10.0 * DRAG_STEP).unwrap();
        let just_after = drag_coefficient(0.4 + 10.0 * DRAG_STEP + 1e-9).unwrap();
        assert_approx_equal!(at_node, just_after, 1e-6);
    }

    #[test]
    fn drag_coefficient_below_table_start_is_rejected() {
        assert!(matches!(drag_coefficient(0.1), Err(Error::InvalidArgument(_))));
    }
}
