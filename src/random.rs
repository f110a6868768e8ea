/// A uniformly distributed number in `[0, 1)`.
#[cfg(not(test))]
pub fn random() -> f64 {
    js_sys::Math::random()
}

#[cfg(test)]
pub fn random() -> f64 {
    rand::random::<f64>()
}
