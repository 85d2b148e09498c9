//! Interpolates `sin(x)` on a graded mesh of edges with the cubic Hermite basis and reports the
//! L2 interpolation error for a few refinement levels.
use eyre::eyre;
use femcore::element::EdgeElement;
use femcore::hermite::{par_compute_coefficients, HermiteBasis};
use femcore::quadrature::Quadrature;
use femcore::settings::QuadratureSettings;
use femcore::{ElementGeometry, Order};
use std::f64::consts::PI;

/// Splits `[0, length]` into `n` edges whose sizes grow geometrically.
fn graded_mesh(length: f64, n: usize, ratio: f64) -> Vec<EdgeElement<f64>> {
    let sizes: Vec<f64> = (0..n).map(|i| ratio.powi(i as i32)).collect();
    let scale = length / sizes.iter().sum::<f64>();
    let mut x0 = 0.0;
    sizes
        .iter()
        .map(|size| {
            let x1 = x0 + size * scale;
            let element = EdgeElement::from_interval([x0, x1]);
            x0 = x1;
            element
        })
        .collect()
}

fn l2_interpolation_error(
    elements: &[EdgeElement<f64>],
    settings: &QuadratureSettings,
    f: impl Fn(f64) -> f64,
    df: impl Fn(f64) -> f64,
) -> eyre::Result<f64> {
    let mut error_squared = 0.0;
    for element in elements {
        let basis = HermiteBasis::new(element, Order::THIRD)?;
        let rule = settings.rule_for_element(element, Some(Order::EIGHTH))?;
        let (a, b) = (element.vertex(0).x, element.vertex(1).x);
        let dofs = [f(a), df(a), f(b), df(b)];

        error_squared += rule.integrate(|p| {
            let mut phi = [0.0; 4];
            basis.populate_values(p.x, &mut phi);
            let u_h: f64 = dofs.iter().zip(&phi).map(|(u, phi)| u * phi).sum();
            let x = element.map_reference_coords(p.x).x;
            let jacobian = element.reference_jacobian(p.x).x.abs();
            (u_h - f(x)).powi(2) * jacobian
        });
    }
    Ok(error_squared.sqrt())
}

fn main() -> eyre::Result<()> {
    let settings = QuadratureSettings::default();
    let mut previous_error = None;

    println!("{:>8} {:>14} {:>8}", "elements", "L2 error", "rate");
    for n in [4, 8, 16, 32, 64] {
        let elements = graded_mesh(2.0 * PI, n, 1.05);

        let coefficients = par_compute_coefficients(&elements);
        if coefficients.iter().any(|c| c.d1xd1x <= 0.0 || c.d2xd2x <= 0.0) {
            return Err(eyre!("mesh contains inverted elements"));
        }

        let error = l2_interpolation_error(&elements, &settings, f64::sin, f64::cos)?;
        let rate = previous_error.map(|previous: f64| (previous / error).log2());
        match rate {
            Some(rate) => println!("{n:>8} {error:>14.6e} {rate:>8.2}"),
            None => println!("{n:>8} {error:>14.6e} {:>8}", "-"),
        }
        previous_error = Some(error);
    }
    Ok(())
}
