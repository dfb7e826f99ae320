pub mod cross_entropy;
pub mod distance;
pub mod hinge;
pub mod huber;
pub mod kl;
pub mod loss_type;
pub mod margin;

pub use cross_entropy::{BceLoss, CrossEntropyLoss};
pub use distance::{L1Loss, L2Loss};
pub use hinge::HingeLoss;
pub use huber::HuberLoss;
pub use kl::KlDivergence;
pub use loss_type::LossType;
pub use margin::{ContrastiveLoss, TripletRankingLoss};
