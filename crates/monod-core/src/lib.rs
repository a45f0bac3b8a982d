// File: crates/monod-core/src/lib.rs
// Summary: Monod kinetics model; pure functions from two parameters to a sampled curve and a report.

pub mod error;
pub mod format;
pub mod kinetics;
pub mod params;
pub mod report;
pub mod sampler;

pub use error::{Parameter, ParameterError};
pub use kinetics::{growth_rate, growth_rates};
pub use params::KineticParameters;
pub use report::AnalysisReport;
pub use sampler::{substrate_domain, SampleSeries, DOMAIN_SPAN_FACTOR, SAMPLE_COUNT};
