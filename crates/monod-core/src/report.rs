// File: crates/monod-core/src/report.rs
// Summary: Fixed-template textual interpretation of a parameter set.

use std::fmt;

use crate::format::format_value;
use crate::params::KineticParameters;

const RULE_WIDTH: usize = 50;
const TITLE: &str = "Monod Equation: Growth Kinetics Analysis";

/// One numbered interpretation point: heading plus body lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportSection {
    pub heading: String,
    pub lines: Vec<String>,
}

/// Text report built purely from the two parameters; the same input always renders the same text.
///
/// Display output:
///
/// ```text
///
/// ==================================================
///       Monod Equation: Growth Kinetics Analysis
/// ==================================================
///
/// [ PARAMETER SUMMARY ]
///   - Maximum Specific Growth Rate (μ_max): 0.8 h⁻¹
/// ...
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisReport {
    summary: Vec<String>,
    interpretation: Vec<ReportSection>,
}

impl AnalysisReport {
    pub fn new(params: &KineticParameters) -> Self {
        let mu_max = format_value(params.mu_max());
        let ks = format_value(params.ks());
        let mu_at_ks = params.half_saturation_rate();

        let summary = vec![
            format!("Maximum Specific Growth Rate (μ_max): {mu_max} h⁻¹"),
            format!("Half-Saturation Constant (K_s):      {ks} g/L"),
        ];

        let affinity = ReportSection {
            heading: "Substrate Affinity".into(),
            lines: vec![
                format!(
                    "The K_s value of {ks} g/L represents the substrate concentration at which \
                     the growth rate is half of its maximum."
                ),
                "> A LOW K_s value indicates a HIGH affinity of the microorganism for the substrate, \
                 meaning it can grow efficiently even when the substrate is scarce."
                    .into(),
                "> A HIGH K_s value indicates a LOW affinity, meaning the organism needs a higher \
                 concentration of the substrate to grow effectively."
                    .into(),
            ],
        };

        let potential = ReportSection {
            heading: "Maximum Growth Potential".into(),
            lines: vec![
                format!(
                    "The theoretical maximum growth rate (μ_max) for this organism under these \
                     conditions is {mu_max} h⁻¹."
                ),
                "As the graph shows, the growth rate approaches this value asymptotically but never \
                 truly exceeds it, as the substrate becomes less of a limiting factor."
                    .into(),
            ],
        };

        let benchmark = ReportSection {
            heading: "Key Benchmark".into(),
            lines: vec![format!(
                "At a substrate concentration of exactly {ks} g/L (the K_s value), the calculated \
                 specific growth rate is {mu_at_ks:.3} h⁻¹, confirming it is exactly half of μ_max."
            )],
        };

        Self { summary, interpretation: vec![affinity, potential, benchmark] }
    }

    pub fn summary(&self) -> &[String] { &self.summary }
    pub fn interpretation(&self) -> &[ReportSection] { &self.interpretation }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "      {TITLE}")?;
        writeln!(f, "{rule}")?;

        writeln!(f)?;
        writeln!(f, "[ PARAMETER SUMMARY ]")?;
        for line in &self.summary {
            writeln!(f, "  - {line}")?;
        }

        writeln!(f)?;
        writeln!(f, "[ INTERPRETATION ]")?;
        for (i, section) in self.interpretation.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}. {}:", i + 1, section.heading)?;
            for line in &section.lines {
                writeln!(f, "   {line}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> AnalysisReport {
        AnalysisReport::new(&KineticParameters::new(0.8, 0.2).unwrap())
    }

    #[test]
    fn benchmark_is_half_of_mu_max_to_three_decimals() {
        let text = reference().to_string();
        assert!(text.contains("specific growth rate is 0.400 h⁻¹"), "{text}");
    }

    #[test]
    fn echoes_parameters_with_units() {
        let text = reference().to_string();
        assert!(text.contains("  - Maximum Specific Growth Rate (μ_max): 0.8 h⁻¹\n"));
        assert!(text.contains("  - Half-Saturation Constant (K_s):      0.2 g/L\n"));
        assert!(text.contains("The K_s value of 0.2 g/L represents"));
        assert!(text.contains("under these conditions is 0.8 h⁻¹."));
    }

    #[test]
    fn three_numbered_points_in_order() {
        let text = reference().to_string();
        let a = text.find("1. Substrate Affinity:").unwrap();
        let b = text.find("2. Maximum Growth Potential:").unwrap();
        let c = text.find("3. Key Benchmark:").unwrap();
        assert!(a < b && b < c);
        assert_eq!(reference().interpretation().len(), 3);
    }

    #[test]
    fn framed_by_rules() {
        let text = reference().to_string();
        let rule = "=".repeat(50);
        assert!(text.starts_with(&format!("\n{rule}\n      Monod Equation: Growth Kinetics Analysis\n{rule}\n")));
        assert!(text.ends_with(&format!("\n\n{rule}\n")));
    }

    #[test]
    fn affinity_prose_does_not_depend_on_values() {
        let low = AnalysisReport::new(&KineticParameters::new(0.8, 0.001).unwrap());
        let high = AnalysisReport::new(&KineticParameters::new(0.8, 500.0).unwrap());
        assert_eq!(low.interpretation()[0].lines[1..], high.interpretation()[0].lines[1..]);
    }

    #[test]
    fn rendering_is_repeatable() {
        let r = reference();
        assert_eq!(r.to_string(), r.to_string());
    }
}
