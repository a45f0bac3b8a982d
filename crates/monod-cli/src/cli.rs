// File: crates/monod-cli/src/cli.rs
// Summary: Command-line flags for the `monod` binary.

use std::path::PathBuf;

use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{theme, RenderOptions, Theme};
use clap::{Parser, ValueEnum};

use crate::source::RawParameters;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
}

impl ThemeChoice {
    /// The chart-core preset with the same name as the flag value.
    pub fn theme(self) -> Theme {
        self.to_possible_value()
            .map(|v| theme::find(v.get_name()))
            .unwrap_or_default()
    }
}

/// Plot the Monod growth curve for μ_max and K_s and print an interpretation.
///
/// Without --mu-max/--ks the values are asked for interactively.
#[derive(Debug, Parser)]
#[command(name = "monod", version)]
pub struct Cli {
    /// Maximum specific growth rate μ_max, in h⁻¹
    #[arg(long = "mu-max", value_name = "RATE", requires = "ks", allow_hyphen_values = true)]
    pub mu_max: Option<String>,

    /// Half-saturation constant K_s, in g/L
    #[arg(long, value_name = "CONC", requires = "mu_max", allow_hyphen_values = true)]
    pub ks: Option<String>,

    /// Where to write the chart PNG
    #[arg(short, long, env = "MONOD_OUTPUT", default_value = "target/out/monod_curve.png")]
    pub output: PathBuf,

    /// Chart width in pixels
    #[arg(long, default_value_t = WIDTH, value_parser = clap::value_parser!(i32).range(320..=8192))]
    pub width: i32,

    /// Chart height in pixels
    #[arg(long, default_value_t = HEIGHT, value_parser = clap::value_parser!(i32).range(240..=8192))]
    pub height: i32,

    /// Chart color theme
    #[arg(long, value_enum, env = "MONOD_THEME", default_value_t = ThemeChoice::Light)]
    pub theme: ThemeChoice,

    /// Skip the chart and only print the report
    #[arg(long)]
    pub no_chart: bool,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Both values when given as flags; `None` means prompt for them.
    pub fn raw_parameters(&self) -> Option<RawParameters> {
        match (&self.mu_max, &self.ks) {
            (Some(mu_max), Some(ks)) => Some(RawParameters::new(mu_max.as_str(), ks.as_str())),
            _ => None,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            theme: self.theme.theme(),
            ..RenderOptions::default()
        }
    }
}
