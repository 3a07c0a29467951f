use std::io::Write;

use patnum_core::PatentNumberValidator;

use crate::cli::args::Cli;
use crate::exit_codes;

/// Printed in place of a number that fails validation.
pub const INVALID_MARKER: &str = "False";

pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    let validator = PatentNumberValidator::from_system_clock();
    tracing::debug!(
        patnum = %cli.patnum,
        withdot = cli.withdot,
        current_year = validator.current_year(),
        "checking patent number"
    );

    let (line, code) = decide(&validator, cli);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}")?;
    stdout.flush()?;

    Ok(code)
}

fn decide(validator: &PatentNumberValidator, cli: &Cli) -> (String, i32) {
    match validator.validate(&cli.patnum, cli.withdot) {
        Some(number) => (number, exit_codes::SUCCESS),
        None => (INVALID_MARKER.to_string(), exit_codes::INVALID),
    }
}
