use std::fmt::Debug;
use std::rc::Rc;

use ndarray::{Array, ArrayD, Dimension};
use serde::{Deserialize, Serialize};

use crate::f;

pub fn sigmoid<D: Dimension>(z: &Array<f64, D>) -> Array<f64, D> {
    z.mapv(f::sigmoid)
}

pub fn relu<D: Dimension>(x: &Array<f64, D>) -> Array<f64, D> {
    x.mapv(f::relu)
}

pub trait Activation {
    fn a(&self, z: ArrayD<f64>) -> ArrayD<f64>;
}

impl Debug for dyn Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ActivationFn")
    }
}

pub struct Sigmoid;

impl Sigmoid {
    pub fn new() -> Rc<Sigmoid> {
        Rc::new(Sigmoid)
    }
}

impl Activation for Sigmoid {
    fn a(&self, z: ArrayD<f64>) -> ArrayD<f64> {
        sigmoid(&z)
    }
}

pub struct Relu;

impl Relu {
    pub fn new() -> Rc<Relu> {
        Rc::new(Relu)
    }
}

impl Activation for Relu {
    fn a(&self, z: ArrayD<f64>) -> ArrayD<f64> {
        relu(&z)
    }
}

pub struct Identity;

impl Identity {
    pub fn new() -> Rc<Identity> {
        Rc::new(Identity)
    }
}

impl Activation for Identity {
    fn a(&self, z: ArrayD<f64>) -> ArrayD<f64> {
        z
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activations {
    Sigmoid,
    Relu,
    Identity,
}

impl Activations {
    pub fn wake(&self) -> Rc<dyn Activation> {
        match self {
            Activations::Sigmoid => Sigmoid::new(),
            Activations::Relu => Relu::new(),
            Activations::Identity => Identity::new(),
        }
    }
}
