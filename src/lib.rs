pub mod math;
pub mod activation;
pub mod loss;
pub mod softmax;
pub mod error;
pub mod config;

// Convenience re-exports
pub use math::element::Element;
pub use activation::activation::Activation;
pub use loss::loss_type::LossType;
pub use loss::{
    BceLoss, ContrastiveLoss, CrossEntropyLoss, HingeLoss, HuberLoss, KlDivergence, L1Loss,
    L2Loss, TripletRankingLoss,
};
pub use softmax::{softmax, softmax_stable};
pub use error::KernelError;
pub use config::DemoConfig;
