// File: crates/monod-core/src/kinetics.rs
// Summary: The Monod growth-rate formula, scalar and element-wise.

/// Specific growth rate `μ = μ_max · S / (K_s + S)`.
///
/// Expects `mu_max > 0`, `ks > 0` and `s >= 0`; zero at `s = 0`, `mu_max / 2` at `s = ks`,
/// and approaching `mu_max` from below as `s` grows.
///
/// The saturation ratio is formed first so it stays in `[0, 1)` and the product
/// cannot overflow for any finite `mu_max`.
#[inline]
pub fn growth_rate(s: f64, mu_max: f64, ks: f64) -> f64 {
    mu_max * (s / (ks + s))
}

/// [`growth_rate`] applied to every substrate value in order.
pub fn growth_rates(substrate: &[f64], mu_max: f64, ks: f64) -> Vec<f64> {
    substrate.iter().map(|&s| growth_rate(s, mu_max, ks)).collect()
}
