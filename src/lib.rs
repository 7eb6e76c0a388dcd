mod activation;
pub mod f;

pub use activation::{relu, sigmoid, Activation, Activations, Identity, Relu, Sigmoid};
