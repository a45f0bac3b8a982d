// File: crates/monod-cli/src/lib.rs
// Summary: Input controller and chart wiring behind the `monod` binary.

pub mod app;
pub mod cli;
pub mod logging;
pub mod plot;
pub mod sink;
pub mod source;

pub use app::{run, Outcome};
pub use cli::Cli;
pub use plot::build_chart;
pub use sink::{ChartSink, DiscardSink, PngFileSink};
pub use source::{ArgsSource, ParameterSource, PromptSource, RawParameters};
