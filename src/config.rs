//! Demo run configuration, loadable from JSON.
//!
//! ```json
//! {
//!   "ground": [0.1, 1.0, 0.3, 0.5, 0.7],
//!   "predicted": [0.1, 0.3, 0.4, 0.1, 0.2],
//!   "probe": 2.0,
//!   "activations": [{"kind": "sigmoid"}, {"kind": "prelu", "alpha": 0.1}],
//!   "losses": [{"kind": "l1"}, {"kind": "huber", "threshold": 0.2}],
//!   "contrastive_margin": 2.0,
//!   "contrastive_similar": true,
//!   "triplet_margin": 0.2
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::activation::activation::Activation;
use crate::error::KernelError;
use crate::loss::loss_type::LossType;

/// Inputs and kernel selection for one demonstration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Reference sequence.
    pub ground: Vec<f64>,
    /// Prediction, same length as `ground`.
    pub predicted: Vec<f64>,
    /// Scalar fed to every activation.
    pub probe: f64,
    pub activations: Vec<Activation<f64>>,
    pub losses: Vec<LossType<f64>>,
    pub contrastive_margin: f64,
    /// Whether `ground` and `predicted` form a similar pair for the contrastive loss.
    #[serde(default = "default_true")]
    pub contrastive_similar: bool,
    pub triplet_margin: f64,
}

fn default_true() -> bool {
    true
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            ground: vec![0.1, 1.0, 0.3, 0.5, 0.7],
            predicted: vec![0.1, 0.3, 0.4, 0.1, 0.2],
            probe: 2.0,
            activations: vec![
                Activation::Sigmoid,
                Activation::Tanh,
                Activation::Relu,
                Activation::Prelu { alpha: 0.1 },
                Activation::Elu { alpha: 0.1 },
                Activation::Glu,
                Activation::Swish,
                Activation::Softplus { beta: 0.1 },
                Activation::Mish,
            ],
            losses: vec![
                LossType::L1,
                LossType::L2,
                LossType::Huber { threshold: 0.2 },
                LossType::Bce,
                LossType::Ce,
                LossType::Kl,
                LossType::Hinge,
            ],
            contrastive_margin: 2.0,
            contrastive_similar: true,
            triplet_margin: 0.2,
        }
    }
}

impl DemoConfig {
    /// Parses a config from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, KernelError> {
        serde_json::from_str(content)
            .map_err(|e| KernelError::Config(format!("invalid demo config: {e}")))
    }

    /// Reads a config from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, KernelError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            KernelError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Writes the config as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<(), KernelError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| KernelError::Config(format!("cannot serialize config: {e}")))?;
        std::fs::write(path, json).map_err(|e| {
            KernelError::Config(format!("cannot write config '{}': {e}", path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_json() {
        let config = DemoConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(DemoConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_contrastive_similar_defaults_to_true() {
        let json = r#"{
            "ground": [1.0], "predicted": [0.5], "probe": 0.0,
            "activations": [], "losses": [{"kind": "l2"}],
            "contrastive_margin": 1.0, "triplet_margin": 0.1
        }"#;
        let config = DemoConfig::from_json(json).unwrap();
        assert!(config.contrastive_similar);
        assert_eq!(config.losses, vec![LossType::L2]);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = DemoConfig::from_json("{").unwrap_err();
        assert!(matches!(err, KernelError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = DemoConfig::load_json(Path::new("/nonexistent/demo.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read config"));
    }
}
