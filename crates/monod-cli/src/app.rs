// File: crates/monod-cli/src/app.rs
// Summary: One run of the pipeline: read → validate → sample → chart → report.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use monod_core::{AnalysisReport, KineticParameters, ParameterError, SampleSeries};

use crate::plot::build_chart;
use crate::sink::ChartSink;
use crate::source::ParameterSource;

/// Exit status for rejected input.
pub const INPUT_ERROR_EXIT: u8 = 2;

#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Chart exported (unless discarded) and report written.
    Completed { chart: Option<PathBuf> },
    /// Input rejected; nothing was sampled, drawn or reported.
    Rejected(ParameterError),
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Completed { .. } => ExitCode::SUCCESS,
            Outcome::Rejected(_) => ExitCode::from(INPUT_ERROR_EXIT),
        }
    }
}

/// Run the pipeline once. Bad input is reported on `out` and returned as [`Outcome::Rejected`];
/// I/O and rendering failures are returned as errors.
pub fn run<S, K, W>(source: &mut S, sink: &mut K, out: &mut W) -> Result<Outcome>
where
    S: ParameterSource + ?Sized,
    K: ChartSink + ?Sized,
    W: Write,
{
    let raw = source.read()?;
    let params = match KineticParameters::parse(&raw.mu_max, &raw.ks) {
        Ok(params) => params,
        Err(err) => {
            tracing::warn!(error = %err, "rejected kinetic parameters");
            writeln!(out)?;
            writeln!(out, "{}", err.user_message())?;
            out.flush()?;
            return Ok(Outcome::Rejected(err));
        }
    };
    tracing::info!(mu_max = params.mu_max(), ks = params.ks(), "kinetic parameters accepted");

    let series = SampleSeries::sample(&params);
    let chart = build_chart(&params, &series);
    let written = sink.export(&chart)?;
    if let Some(path) = &written {
        writeln!(out, "Wrote {}", path.display())?;
    }

    write!(out, "{}", AnalysisReport::new(&params))?;
    out.flush()?;
    Ok(Outcome::Completed { chart: written })
}
