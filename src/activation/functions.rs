//! Scalar activation transforms.
//!
//! Each function maps one element to one element. Parameters are not range
//! checked: `softplus(z, 0)` divides by zero and returns a non-finite value.

use crate::math::element::Element;

/// `1 / (1 + e^-z)`
pub fn sigmoid<T: Element>(z: T) -> T {
    T::one() / (T::one() + (-z).exp())
}

/// Hyperbolic tangent.
pub fn tanh<T: Element>(z: T) -> T {
    z.tanh()
}

/// `max(0, z)`
pub fn relu<T: Element>(z: T) -> T {
    T::zero().max(z)
}

/// Parametric ReLU: `z` for positive inputs, `alpha * z` otherwise.
pub fn prelu<T: Element>(z: T, alpha: T) -> T {
    if z > T::zero() { z } else { alpha * z }
}

/// Exponential linear unit: `z` for positive inputs, `alpha * (e^z - 1)` otherwise.
pub fn elu<T: Element>(z: T, alpha: T) -> T {
    if z > T::zero() { z } else { alpha * (z.exp() - T::one()) }
}

/// Gated linear unit, `z * sigmoid(z)`.
pub fn glu<T: Element>(z: T) -> T {
    z * sigmoid(z)
}

/// Same function as [`glu`].
pub fn swish<T: Element>(z: T) -> T {
    glu(z)
}

/// `ln(1 + e^(beta * z)) / beta`
pub fn softplus<T: Element>(z: T, beta: T) -> T {
    (T::one() + (z * beta).exp()).ln() / beta
}

/// `z * tanh(softplus(z, 1))`
pub fn mish<T: Element>(z: T) -> T {
    z * softplus(z, T::one()).tanh()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_sigmoid_known_values() {
        assert_eq!(sigmoid(0.0f64), 0.5);
        assert!(approx_eq(sigmoid(2.0), 0.880797, 1e-6));
        assert!(approx_eq(sigmoid(-2.0), 0.119203, 1e-6));
    }

    #[test]
    fn test_relu_family() {
        assert_eq!(relu(2.0f64), 2.0);
        assert_eq!(relu(-2.0f64), 0.0);
        assert_eq!(prelu(2.0f64, 0.1), 2.0);
        assert!(approx_eq(prelu(-2.0, 0.1), -0.2, 1e-12));
        // zero takes the non-positive branch
        assert_eq!(prelu(0.0f64, 0.1), 0.0);
    }

    #[test]
    fn test_elu() {
        assert_eq!(elu(2.0f64, 0.1), 2.0);
        assert!(approx_eq(elu(-1.0, 0.1), 0.1 * ((-1.0f64).exp() - 1.0), 1e-12));
    }

    #[test]
    fn test_glu_and_swish_agree() {
        for z in [-3.0f64, -0.5, 0.0, 0.5, 2.0] {
            assert_eq!(glu(z), swish(z));
        }
        assert!(approx_eq(glu(2.0), 1.761594, 1e-6));
    }

    #[test]
    fn test_softplus() {
        assert!(approx_eq(softplus(0.0, 1.0), std::f64::consts::LN_2, 1e-12));
        // beta = 0.1 at z = 2: ln(1 + e^0.2) / 0.1
        assert!(approx_eq(softplus(2.0, 0.1), 7.981389, 1e-6));
    }

    #[test]
    fn test_softplus_zero_beta_is_not_finite() {
        assert!(!softplus(2.0f64, 0.0).is_finite());
    }

    #[test]
    fn test_mish() {
        assert_eq!(mish(0.0f64), 0.0);
        assert!(approx_eq(mish(2.0), 1.943959, 1e-6));
    }

    #[test]
    fn test_f32_instantiation() {
        assert!((sigmoid(2.0f32) - 0.880797).abs() < 1e-5);
        assert!((tanh(2.0f32) - 0.964028).abs() < 1e-5);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(sigmoid(f64::NAN).is_nan());
        assert!(mish(f64::NAN).is_nan());
    }

    proptest! {
        #[test]
        fn prop_sigmoid_in_unit_interval(z in -30.0f64..30.0) {
            let s = sigmoid(z);
            prop_assert!(s > 0.0 && s < 1.0, "sigmoid({z}) = {s}");
        }

        #[test]
        fn prop_relu_non_negative(z in -1e6f64..1e6) {
            prop_assert!(relu(z) >= 0.0);
        }

        #[test]
        fn prop_positive_inputs_pass_through(z in 1e-6f64..1e3, alpha in -2.0f64..2.0) {
            prop_assert_eq!(prelu(z, alpha), z);
            prop_assert_eq!(elu(z, alpha), z);
        }
    }
}
