pub fn sigmoid(x: f64) -> f64 {
    1. / (1. + (-x).exp())
}

pub fn relu(x: f64) -> f64 {
    // <= keeps -0.0 out of the pass-through arm, matching max(0, x)
    if x <= 0. {
        return 0.;
    }
    x
}
