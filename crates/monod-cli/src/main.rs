// File: crates/monod-cli/src/main.rs
// Summary: `monod` entry point; wires CLI flags, logging, input source and chart sink into one run.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use monod_cli::logging::init_cli_logger;
use monod_cli::{run, ArgsSource, ChartSink, Cli, DiscardSink, ParameterSource, PngFileSink, PromptSource};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);
    tracing::info!(output = %cli.output.display(), no_chart = cli.no_chart, "starting monod");

    let mut source: Box<dyn ParameterSource> = match cli.raw_parameters() {
        Some(raw) => Box::new(ArgsSource::new(raw)),
        None => Box::new(PromptSource::stdio()),
    };
    let mut sink: Box<dyn ChartSink> = if cli.no_chart {
        Box::new(DiscardSink)
    } else {
        Box::new(PngFileSink::new(cli.output.clone(), cli.render_options()))
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run(source.as_mut(), sink.as_mut(), &mut out)?;
    Ok(outcome.exit_code())
}
