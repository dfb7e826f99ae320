use serde::{Deserialize, Serialize};

use crate::activation::functions;
use crate::math::element::Element;

/// A scalar activation together with its bound parameters.
///
/// Serializes as `{"kind": "prelu", "alpha": 0.1}` so activations can be
/// listed in a JSON config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Activation<T> {
    Sigmoid,
    Tanh,
    Relu,
    Prelu { alpha: T },
    Elu { alpha: T },
    Glu,
    Swish,
    Softplus { beta: T },
    Mish,
}

impl<T: Element> Activation<T> {
    /// Element-wise activation.
    pub fn apply(&self, z: T) -> T {
        match *self {
            Activation::Sigmoid => functions::sigmoid(z),
            Activation::Tanh => functions::tanh(z),
            Activation::Relu => functions::relu(z),
            Activation::Prelu { alpha } => functions::prelu(z, alpha),
            Activation::Elu { alpha } => functions::elu(z, alpha),
            Activation::Glu => functions::glu(z),
            Activation::Swish => functions::swish(z),
            Activation::Softplus { beta } => functions::softplus(z, beta),
            Activation::Mish => functions::mish(z),
        }
    }

    /// Applies the activation to every element, returning a new vector.
    pub fn map(&self, values: &[T]) -> Vec<T> {
        values.iter().map(|&z| self.apply(z)).collect()
    }
}

impl<T> Activation<T> {
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Sigmoid => "sigmoid",
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Prelu { .. } => "prelu",
            Activation::Elu { .. } => "elu",
            Activation::Glu => "glu",
            Activation::Swish => "swish",
            Activation::Softplus { .. } => "softplus",
            Activation::Mish => "mish",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_dispatches_with_parameters() {
        let prelu = Activation::Prelu { alpha: 0.1f64 };
        assert_eq!(prelu.apply(-1.0), functions::prelu(-1.0, 0.1));
        let softplus = Activation::Softplus { beta: 0.1f64 };
        assert_eq!(softplus.apply(2.0), functions::softplus(2.0, 0.1));
    }

    #[test]
    fn test_map_keeps_length() {
        let out = Activation::<f32>::Relu.map(&[-1.0, 0.5, 2.0]);
        assert_eq!(out, vec![0.0, 0.5, 2.0]);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&Activation::Elu { alpha: 0.5f64 }).unwrap();
        assert_eq!(json, r#"{"kind":"elu","alpha":0.5}"#);
        let back: Activation<f64> = serde_json::from_str(r#"{"kind":"mish"}"#).unwrap();
        assert_eq!(back, Activation::Mish);
        assert_eq!(back.name(), "mish");
    }
}
