pub mod activation;
pub mod functions;

pub use activation::Activation;
pub use functions::{elu, glu, mish, prelu, relu, sigmoid, softplus, swish, tanh};
