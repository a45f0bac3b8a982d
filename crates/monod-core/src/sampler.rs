// File: crates/monod-core/src/sampler.rs
// Summary: Uniform substrate grid over [0, 20·K_s] and the growth curve evaluated on it.

use crate::kinetics::growth_rates;
use crate::params::KineticParameters;

/// Number of points on the sampled curve.
pub const SAMPLE_COUNT: usize = 500;
/// Upper end of the substrate domain as a multiple of K_s; wide enough to show the plateau.
pub const DOMAIN_SPAN_FACTOR: f64 = 20.0;

/// `steps` evenly spaced values from `start` to `end`, both included.
/// The last value is pinned to `end` so rounding never shortens the range.
fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps - 1) as f64;
            let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
            out[steps - 1] = end;
            out
        }
    }
}

/// Substrate concentrations `0, …, 20·ks` (500 values, step `20·ks / 499`).
pub fn substrate_domain(ks: f64) -> Vec<f64> {
    linspace(0.0, DOMAIN_SPAN_FACTOR * ks, SAMPLE_COUNT)
}

/// Sampled `(substrate, growth rate)` curve for one parameter set. Read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSeries {
    substrate: Vec<f64>,
    growth_rate: Vec<f64>,
}

impl SampleSeries {
    pub fn sample(params: &KineticParameters) -> Self {
        let substrate = substrate_domain(params.ks());
        let growth_rate = growth_rates(&substrate, params.mu_max(), params.ks());
        tracing::debug!(
            points = substrate.len(),
            s_max = substrate.last().copied().unwrap_or_default(),
            mu_last = growth_rate.last().copied().unwrap_or_default(),
            "sampled growth curve"
        );
        Self { substrate, growth_rate }
    }

    pub fn len(&self) -> usize { self.substrate.len() }
    pub fn is_empty(&self) -> bool { self.substrate.is_empty() }

    pub fn substrate(&self) -> &[f64] { &self.substrate }
    pub fn growth_rates(&self) -> &[f64] { &self.growth_rate }

    /// Largest sampled substrate value (the x-axis upper bound).
    pub fn max_substrate(&self) -> f64 {
        self.substrate.last().copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.substrate.iter().copied().zip(self.growth_rate.iter().copied())
    }

    /// Owned `(x, y)` pairs in the layout chart series expect.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_edge_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn reference_domain_spans_zero_to_four() {
        let d = substrate_domain(0.2);
        assert_eq!(d.len(), 500);
        assert_eq!(d[0], 0.0);
        assert_eq!(d[499], 4.0);
        assert!((d[1] - 4.0 / 499.0).abs() < 1e-15);
    }

    #[test]
    fn series_pairs_line_up() {
        let p = KineticParameters::new(0.8, 0.2).unwrap();
        let s = SampleSeries::sample(&p);
        assert_eq!(s.len(), SAMPLE_COUNT);
        assert_eq!(s.max_substrate(), 4.0);
        let pts = s.points();
        assert_eq!(pts[0], (0.0, 0.0));
        assert_eq!(pts[499].0, 4.0);
        assert!((pts[499].1 - 0.8 * 4.0 / 4.2).abs() < 1e-12);
    }
}
