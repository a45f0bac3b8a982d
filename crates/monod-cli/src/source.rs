// File: crates/monod-cli/src/source.rs
// Summary: Where the two raw parameter strings come from: interactive prompts or CLI flags.

use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};

use anyhow::{Context, Result};

const BANNER: &str = "--- Monod Equation Graph and Analysis Generator ---";
const MU_MAX_PROMPT: &str = "Enter the Maximum Specific Growth Rate (μ_max, e.g., 0.8): ";
const KS_PROMPT: &str = "Enter the Half-Saturation Constant (K_s, e.g., 0.2): ";

/// Unparsed text for both parameters, exactly as supplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawParameters {
    pub mu_max: String,
    pub ks: String,
}

impl RawParameters {
    pub fn new(mu_max: impl Into<String>, ks: impl Into<String>) -> Self {
        Self { mu_max: mu_max.into(), ks: ks.into() }
    }
}

/// Supplies one pair of raw values per run. Errors are I/O failures only;
/// parsing and validation happen afterwards on the returned text.
pub trait ParameterSource {
    fn read(&mut self) -> Result<RawParameters>;
}

/// Values given up front, e.g. from `--mu-max` / `--ks`.
#[derive(Clone, Debug)]
pub struct ArgsSource {
    raw: RawParameters,
}

impl ArgsSource {
    pub fn new(raw: RawParameters) -> Self {
        Self { raw }
    }
}

impl ParameterSource for ArgsSource {
    fn read(&mut self) -> Result<RawParameters> {
        Ok(self.raw.clone())
    }
}

/// Asks for each value on `output` and reads one line per value from `input`.
/// End of input yields an empty value, which then fails to parse. A μ_max that
/// is not a number ends the dialogue before K_s is asked for.
pub struct PromptSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line).context("failed to read parameter value")?;
        Ok(line)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl PromptSource<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ParameterSource for PromptSource<R, W> {
    fn read(&mut self) -> Result<RawParameters> {
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output, "Please provide the kinetic parameters.")?;
        let mu_max = self.prompt(MU_MAX_PROMPT)?;
        if mu_max.trim().parse::<f64>().is_err() {
            tracing::debug!(mu_max = mu_max.trim(), "μ_max is not a number; skipping K_s prompt");
            return Ok(RawParameters::new(mu_max, String::new()));
        }
        let ks = self.prompt(KS_PROMPT)?;
        tracing::debug!(mu_max = mu_max.trim(), ks = ks.trim(), "read parameters from prompt");
        Ok(RawParameters::new(mu_max, ks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompts_then_reads_one_line_each() {
        let mut source = PromptSource::new(Cursor::new("0.8\n0.2\n"), Vec::new());
        let raw = source.read().unwrap();
        assert_eq!(raw, RawParameters::new("0.8\n", "0.2\n"));

        let (_, output) = source.into_inner();
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("--- Monod Equation Graph and Analysis Generator ---\n"));
        assert!(shown.contains(MU_MAX_PROMPT));
        assert!(shown.ends_with(KS_PROMPT));
    }

    #[test]
    fn non_numeric_rate_stops_before_ks_prompt() {
        let mut source = PromptSource::new(Cursor::new("abc\n0.2\n"), Vec::new());
        let raw = source.read().unwrap();
        assert_eq!(raw, RawParameters::new("abc\n", ""));

        let (mut input, output) = source.into_inner();
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.ends_with(MU_MAX_PROMPT));
        assert!(!shown.contains(KS_PROMPT));
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "0.2\n");
    }

    #[test]
    fn end_of_input_gives_empty_values() {
        let mut source = PromptSource::new(Cursor::new(""), Vec::new());
        let raw = source.read().unwrap();
        assert_eq!(raw, RawParameters::new("", ""));
    }

    #[test]
    fn args_source_returns_given_values() {
        let mut source = ArgsSource::new(RawParameters::new("1.2", "0.5"));
        assert_eq!(source.read().unwrap(), RawParameters::new("1.2", "0.5"));
    }
}
