//! Initial buoyancy perturbation
use ndarray::{Array1, Array2, Axis};
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;

/// Random perturbation damped at the top and bottom walls
/// $$
/// b(x,z) = c \cdot \mathcal{N}(0,1) \cdot (z_t - z)(z - z_b)
/// $$
///
/// The noise is drawn on the full grid with a fixed `seed`,
/// so every run produces the same field. Returns an array of
/// shape (x.len(), z.len()).
pub fn random_perturbation(x: &Array1<f64>, z: &Array1<f64>, amp: f64, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pert: Array2<f64> = Array2::random_using((x.len(), z.len()), StandardNormal, &mut rng);
    if z.is_empty() {
        return pert;
    }
    let z_b = z.fold(f64::INFINITY, |a, b| a.min(*b));
    let z_t = z.fold(f64::NEG_INFINITY, |a, b| a.max(*b));
    let envelope = z.mapv(|zi| amp * (z_t - zi) * (zi - z_b));
    for mut row in pert.axis_iter_mut(Axis(0)) {
        row *= &envelope;
    }
    pert
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perturbation_vanishes_at_walls() {
        let x = Array1::linspace(0., 1., 8);
        let z = Array1::linspace(-1., 0., 9);
        let pert = random_perturbation(&x, &z, 1e-3, 42);
        assert_eq!(pert.shape(), &[8, 9]);
        for row in pert.axis_iter(Axis(0)) {
            assert!(row[0].abs() < 1e-15);
            assert!(row[8].abs() < 1e-15);
        }
        // envelope maximum is amp / 4
        assert!(pert.iter().all(|v| v.abs() < 1e-3 * 0.25 * 10.));
    }

    #[test]
    fn test_perturbation_is_reproducible() {
        let x = Array1::linspace(0., 1., 4);
        let z = Array1::linspace(-1., 0., 5);
        let a = random_perturbation(&x, &z, 1e-3, 7);
        let b = random_perturbation(&x, &z, 1e-3, 7);
        assert_eq!(a, b);
    }
}
