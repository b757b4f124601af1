//! Smooth step and bump functions
//!
//! All profiles of the experiment are composed of these
//! primitives. Each function comes in a scalar version
//! and a version which maps over a 1-D coordinate array.
use crate::types::{lit, Real};
use ndarray::{Array1, ArrayBase, Data, Ix1};

/// Hyperbolic tangent step from 0 to `height`
/// $$
/// f(z) = \frac{h}{2} \left( \tanh(s (z - c)) + 1 \right)
/// $$
/// A negative `slope` flips the direction of the step.
pub fn tanh_step_scalar<A: Real>(z: A, height: A, slope: A, center: A) -> A {
    lit::<A>(0.5) * height * ((slope * (z - center)).tanh() + A::one())
}

/// Squared hyperbolic secant pulse
/// $$
/// f(z) = \frac{h}{\cosh^2(s (z - c))}
/// $$
pub fn cosh2_scalar<A: Real>(z: A, height: A, slope: A, center: A) -> A {
    height / (slope * (z - center)).cosh().powi(2)
}

/// Bump of `height` and `width`, made of two opposite steps
pub fn tanh_bump_scalar<A: Real>(z: A, height: A, slope: A, center: A, width: A) -> A {
    let half = width * lit::<A>(0.5);
    let (c_l, c_r) = (center - half, center + half);
    // left side
    tanh_step_scalar(z, height, slope, c_l)
        // + right side
        + tanh_step_scalar(z, height, -slope, c_r)
        // correct for added height
        - height
}

/// Hyperbolic tangent step from 0 to `height`, see [`tanh_step_scalar`]
pub fn tanh_step<A, S>(z: &ArrayBase<S, Ix1>, height: A, slope: A, center: A) -> Array1<A>
where
    A: Real,
    S: Data<Elem = A>,
{
    z.mapv(|zi| tanh_step_scalar(zi, height, slope, center))
}

/// Squared hyperbolic secant pulse, see [`cosh2_scalar`]
pub fn cosh2<A, S>(z: &ArrayBase<S, Ix1>, height: A, slope: A, center: A) -> Array1<A>
where
    A: Real,
    S: Data<Elem = A>,
{
    z.mapv(|zi| cosh2_scalar(zi, height, slope, center))
}

/// Bump of `height` centered at `center`, see [`tanh_bump_scalar`]
pub fn tanh_bump<A, S>(
    z: &ArrayBase<S, Ix1>,
    height: A,
    slope: A,
    center: A,
    width: A,
) -> Array1<A>
where
    A: Real,
    S: Data<Elem = A>,
{
    z.mapv(|zi| tanh_bump_scalar(zi, height, slope, center, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn approx_eq(result: f64, expected: f64, dif: f64) {
        if (result - expected).abs() > dif {
            panic!("Large difference of values, got {} expected {}.", result, expected)
        }
    }

    #[test]
    fn test_tanh_step_midpoint() {
        let z = Array1::from(vec![0.3]);
        let step = tanh_step(&z, 2.0, 50.0, 0.3);
        approx_eq(step[0], 1.0, 1e-12);
        let step = tanh_step(&z, 2.0, -50.0, 0.3);
        approx_eq(step[0], 1.0, 1e-12);
    }

    #[test]
    fn test_tanh_step_monotonic_and_limits() {
        let z = Array1::linspace(-1., 1., 201);
        let step = tanh_step(&z, 0.6, 20.0, 0.0);
        for w in step.as_slice().unwrap().windows(2) {
            assert!(w[1] >= w[0]);
        }
        approx_eq(step[0], 0., 1e-12);
        approx_eq(step[200], 0.6, 1e-12);
        // negative slope reverses the direction
        let step = tanh_step(&z, 0.6, -20.0, 0.0);
        for w in step.as_slice().unwrap().windows(2) {
            assert!(w[1] <= w[0]);
        }
        approx_eq(step[0], 0.6, 1e-12);
        approx_eq(step[200], 0., 1e-12);
    }

    #[test]
    fn test_tanh_step_single_precision() {
        let z = Array1::from(vec![0f32, 10f32]);
        let step = tanh_step(&z, 1f32, 1f32, 0f32);
        assert!((step[0] - 0.5).abs() < 1e-6);
        assert!((step[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosh2_peak() {
        let z = Array1::linspace(-1., 1., 201);
        let pulse = cosh2(&z, 3.0, 10.0, 0.0);
        approx_eq(pulse[100], 3.0, 1e-12);
        assert!(pulse[0] < 1e-6);
        assert!(pulse[200] < 1e-6);
    }

    #[test]
    fn test_bump_vanishes_outside() {
        let (center, width) = (-0.25, 0.1);
        let z = Array1::linspace(-1., 0., 1001);
        let bump = tanh_bump(&z, 1.5, 200.0, center, width);
        for (zi, bi) in z.iter().zip(bump.iter()) {
            if *zi < center - width || *zi > center + width {
                approx_eq(*bi, 0., 1e-6);
            }
        }
        approx_eq(tanh_bump_scalar(center, 1.5, 200.0, center, width), 1.5, 1e-6);
    }
}
