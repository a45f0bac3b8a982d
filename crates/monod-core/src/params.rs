// File: crates/monod-core/src/params.rs
// Summary: Validated kinetic parameters (μ_max in h⁻¹, K_s in g/L).

use crate::error::{Parameter, ParameterError};
use crate::kinetics::growth_rate;

/// The two Monod constants. Both strictly positive, finite and normal once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KineticParameters {
    mu_max: f64,
    ks: f64,
}

impl KineticParameters {
    pub fn new(mu_max: f64, ks: f64) -> Result<Self, ParameterError> {
        check_positive(Parameter::MuMax, mu_max)?;
        check_positive(Parameter::Ks, ks)?;
        Ok(Self { mu_max, ks })
    }

    /// Parse both raw values, then validate them.
    ///
    /// A value that is not a number is reported before any sign problem, so
    /// `("abc", "-1")` is a parse error rather than a validation error.
    pub fn parse(raw_mu_max: &str, raw_ks: &str) -> Result<Self, ParameterError> {
        let mu_max = parse_number(Parameter::MuMax, raw_mu_max)?;
        let ks = parse_number(Parameter::Ks, raw_ks)?;
        let params = Self::new(mu_max, ks)?;
        tracing::debug!(mu_max, ks, "kinetic parameters accepted");
        Ok(params)
    }

    pub fn mu_max(&self) -> f64 { self.mu_max }
    pub fn ks(&self) -> f64 { self.ks }

    pub fn growth_rate(&self, s: f64) -> f64 {
        growth_rate(s, self.mu_max, self.ks)
    }

    /// Growth rate at `s = K_s`, i.e. `μ_max / 2`.
    pub fn half_saturation_rate(&self) -> f64 {
        self.mu_max / 2.0
    }
}

fn parse_number(parameter: Parameter, raw: &str) -> Result<f64, ParameterError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ParameterError::Parse { parameter, raw: raw.trim().to_string() })
}

// Subnormals are rejected too: `20·ks / 499` would underflow and collapse the sampled domain.
fn check_positive(parameter: Parameter, value: f64) -> Result<(), ParameterError> {
    if value.is_normal() && value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::Validation { parameter, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reference_values() {
        let p = KineticParameters::parse("0.8", "0.2").unwrap();
        assert_eq!(p.mu_max(), 0.8);
        assert_eq!(p.ks(), 0.2);
        assert_eq!(p.half_saturation_rate(), 0.4);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let p = KineticParameters::parse(" 1.5\n", "\t3 ").unwrap();
        assert_eq!((p.mu_max(), p.ks()), (1.5, 3.0));
    }

    #[test]
    fn negative_value_is_a_validation_error() {
        let err = KineticParameters::parse("-1", "0.2").unwrap_err();
        assert_eq!(err, ParameterError::Validation { parameter: Parameter::MuMax, value: -1.0 });
    }

    #[test]
    fn zero_is_not_positive() {
        let err = KineticParameters::parse("0.8", "0").unwrap_err();
        assert!(matches!(err, ParameterError::Validation { parameter: Parameter::Ks, .. }));
    }

    #[test]
    fn text_is_a_parse_error() {
        let err = KineticParameters::parse("abc", "0.2").unwrap_err();
        assert_eq!(err, ParameterError::Parse { parameter: Parameter::MuMax, raw: "abc".into() });
    }

    #[test]
    fn parse_error_wins_over_sign() {
        let err = KineticParameters::parse("-1", "").unwrap_err();
        assert!(matches!(err, ParameterError::Parse { parameter: Parameter::Ks, .. }));
    }

    #[test]
    fn subnormal_values_are_rejected() {
        let err = KineticParameters::parse("0.8", "5e-324").unwrap_err();
        assert!(matches!(err, ParameterError::Validation { parameter: Parameter::Ks, .. }));
        let err = KineticParameters::parse("5e-324", "0.2").unwrap_err();
        assert!(matches!(err, ParameterError::Validation { parameter: Parameter::MuMax, .. }));
        assert!(KineticParameters::new(f64::MIN_POSITIVE, f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        for raw in ["inf", "NaN", "-inf"] {
            let err = KineticParameters::parse(raw, "0.2").unwrap_err();
            assert!(matches!(err, ParameterError::Validation { .. }), "{raw}: {err:?}");
        }
    }
}
